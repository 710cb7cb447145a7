use core::fmt::Write;

use playbill_statement::StatementData;

use crate::currency::usd;

/// Plain-text statement.
///
/// Line terminators are part of the output contract: performance lines end in
/// `\r\n`, the header and summary lines in `\n`.
pub fn plain_text(data: &StatementData) -> String {
    let mut out = format!("Statement for {}\n", data.customer());
    for perf in data.performances() {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            " {}: {} ({} seats)\r\n",
            perf.play().name,
            usd(perf.amount()),
            perf.audience()
        );
    }
    let _ = writeln!(out, "Amount owed is {}", usd(data.total_amount()));
    let _ = writeln!(out, "You earned {} credits", data.total_volume_credits());
    out
}
