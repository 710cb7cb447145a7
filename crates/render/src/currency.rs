use playbill_core::Money;

/// Format minor units as US dollars: `$` prefix, comma-grouped thousands, two
/// decimals (`173000` -> `$1,730.00`).
pub fn usd(amount: Money) -> String {
    let minor = amount.minor_units();
    format!("${}.{:02}", group_thousands(minor / 100), minor % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
