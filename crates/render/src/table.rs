//! Tabular view of a statement, ready for markup renderers.

use playbill_statement::StatementData;

use crate::currency::usd;

/// One performance row: play name, seats, formatted cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    pub play: String,
    pub seats: u32,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSummary {
    pub amount_owed: String,
    pub credits: u64,
}

/// A statement laid out as rows plus a summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementTable {
    pub customer: String,
    pub rows: Vec<StatementRow>,
    pub summary: StatementSummary,
}

impl StatementTable {
    pub const HEADERS: [&'static str; 3] = ["play", "seats", "cost"];
}

impl From<&StatementData> for StatementTable {
    fn from(data: &StatementData) -> Self {
        let rows = data
            .performances()
            .iter()
            .map(|perf| StatementRow {
                play: perf.play().name.clone(),
                seats: perf.audience().seats(),
                cost: usd(perf.amount()),
            })
            .collect();

        Self {
            customer: data.customer().to_string(),
            rows,
            summary: StatementSummary {
                amount_owed: usd(data.total_amount()),
                credits: data.total_volume_credits(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::statement;
    use playbill_statement::Performance;

    #[test]
    fn one_row_per_performance_in_order() {
        let data = statement(
            "BigCo",
            vec![Performance::new("hamlet", 30), Performance::new("as-like", 20)],
        );

        let table = StatementTable::from(&data);

        assert_eq!(table.customer, "BigCo");
        assert_eq!(
            table.rows,
            vec![
                StatementRow {
                    play: "Hamlet".to_string(),
                    seats: 30,
                    cost: "$400.00".to_string(),
                },
                StatementRow {
                    play: "As You Like It".to_string(),
                    seats: 20,
                    cost: "$360.00".to_string(),
                },
            ]
        );
        assert_eq!(
            table.summary,
            StatementSummary {
                amount_owed: "$760.00".to_string(),
                credits: 4,
            }
        );
    }
}
