use askama::Template;

use playbill_statement::StatementData;

use crate::table::StatementTable;

#[derive(Template)]
#[template(path = "statement.html")]
struct StatementPage<'a> {
    table: &'a StatementTable,
    headers: [&'static str; 3],
}

/// HTML statement: heading, a play/seats/cost table and the summary paragraphs.
///
/// Customer and play names are HTML-escaped by the template.
pub fn html(data: &StatementData) -> askama::Result<String> {
    let table = StatementTable::from(data);
    StatementPage {
        table: &table,
        headers: StatementTable::HEADERS,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::statement;
    use playbill_statement::Performance;

    #[test]
    fn renders_table_and_summary() {
        let data = statement(
            "BigCo",
            vec![Performance::new("hamlet", 30), Performance::new("as-like", 20)],
        );

        let out = html(&data).unwrap();
        let lines: Vec<&str> = out.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(
            lines,
            vec![
                "<h1>Statement for BigCo</h1>",
                "<table>",
                "<tr><th>play</th><th>seats</th><th>cost</th></tr>",
                "<tr><td>Hamlet</td><td>30</td><td>$400.00</td></tr>",
                "<tr><td>As You Like It</td><td>20</td><td>$360.00</td></tr>",
                "</table>",
                "<p>Amount owed is <em>$760.00</em></p>",
                "<p>You earned <em>4</em> credits</p>",
            ]
        );
    }

    #[test]
    fn escapes_customer_and_play_names() {
        let data = statement("Smith & \"Sons\"", vec![Performance::new("r&j", 10)]);
        let out = html(&data).unwrap();

        assert!(out.contains("<h1>Statement for Smith &amp; &quot;Sons&quot;</h1>"));
        assert!(out.contains("<td>Romeo &amp; &lt;Juliet&gt;</td>"));
    }
}
