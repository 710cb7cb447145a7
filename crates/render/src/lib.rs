//! Statement renderers.
//!
//! Presentation only: every function here formats values already computed in a
//! [`playbill_statement::StatementData`] and never re-derives prices or credits.

pub mod currency;
pub mod html;
pub mod table;
pub mod text;

pub use currency::usd;
pub use html::html;
pub use table::{StatementRow, StatementSummary, StatementTable};
pub use text::plain_text;

#[cfg(test)]
pub(crate) mod test_support {
    use playbill_catalog::{Genre, Play, PlayCatalog};
    use playbill_statement::{Invoice, Performance, StatementData, create_statement_data};

    pub fn statement(customer: &str, performances: Vec<Performance>) -> StatementData {
        let catalog = PlayCatalog::new()
            .with_play("hamlet", Play::new("Hamlet", Genre::tragedy()))
            .with_play("as-like", Play::new("As You Like It", Genre::comedy()))
            .with_play("othello", Play::new("Othello", Genre::tragedy()))
            .with_play("r&j", Play::new("Romeo & <Juliet>", Genre::tragedy()));
        create_statement_data(&Invoice::new(customer, performances), &catalog).unwrap()
    }
}
