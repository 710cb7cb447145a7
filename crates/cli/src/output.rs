//! Statement building + rendering for the selected invoices.

use anyhow::Context;

use playbill_catalog::PlayCatalog;
use playbill_pricing::PricingPolicy;
use playbill_render::{html, plain_text};
use playbill_statement::{Invoice, StatementBuilder, StatementData};

use crate::config::{Config, ConfigError, OutputFormat};
use crate::load::{load_catalog, load_invoices};

/// Load inputs named by `config` and render the selected statements.
pub fn run(config: &Config) -> anyhow::Result<String> {
    let catalog = load_catalog(&config.plays_path)?;
    let invoices = load_invoices(&config.invoices_path)?;
    render_statements(config.format, config.invoice_index, &catalog, &invoices)
}

/// Build and render statements for `invoices` (or only `invoices[index]`).
///
/// Building stops at the first invoice that fails; its error names the
/// customer.
pub fn render_statements(
    format: OutputFormat,
    index: Option<usize>,
    catalog: &PlayCatalog,
    invoices: &[Invoice],
) -> anyhow::Result<String> {
    let selected = match index {
        Some(index) => {
            let invoice = invoices.get(index).ok_or(ConfigError::InvoiceIndexOutOfRange {
                index,
                count: invoices.len(),
            })?;
            std::slice::from_ref(invoice)
        }
        None => invoices,
    };

    let policy = PricingPolicy::standard();
    let builder = StatementBuilder::new(catalog, &policy);
    let statements = selected
        .iter()
        .map(|invoice| {
            builder
                .build(invoice)
                .with_context(|| format!("failed to build statement for {}", invoice.customer))
        })
        .collect::<anyhow::Result<Vec<StatementData>>>()?;

    tracing::info!(statements = statements.len(), ?format, "rendering statements");

    let rendered = match format {
        OutputFormat::Text => statements.iter().map(plain_text).collect::<Vec<_>>().join("\n"),
        OutputFormat::Html => statements
            .iter()
            .map(html)
            .collect::<Result<Vec<_>, _>>()
            .context("failed to render HTML statement")?
            .join("\n"),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&statements)
                .context("failed to serialize statements")?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_catalog::{Genre, Play};
    use playbill_core::DomainError;
    use playbill_statement::Performance;

    fn catalog() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Play::new("Hamlet", Genre::tragedy()))
            .with_play("as-like", Play::new("As You Like It", Genre::comedy()))
    }

    fn invoices() -> Vec<Invoice> {
        vec![
            Invoice::new("BigCo", vec![Performance::new("hamlet", 30)]),
            Invoice::new("SmallCo", vec![Performance::new("as-like", 20)]),
        ]
    }

    #[test]
    fn renders_every_invoice_by_default() {
        let out = render_statements(OutputFormat::Text, None, &catalog(), &invoices()).unwrap();
        assert!(out.contains("Statement for BigCo\n"));
        assert!(out.contains("Statement for SmallCo\n"));
    }

    #[test]
    fn renders_only_selected_invoice() {
        let out = render_statements(OutputFormat::Text, Some(1), &catalog(), &invoices()).unwrap();
        assert!(!out.contains("BigCo"));
        assert!(out.contains("Amount owed is $360.00\n"));
    }

    #[test]
    fn out_of_range_index_is_config_error() {
        let err =
            render_statements(OutputFormat::Text, Some(5), &catalog(), &invoices()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvoiceIndexOutOfRange { index: 5, count: 2 })
        );
    }

    #[test]
    fn domain_errors_keep_their_type_under_context() {
        let bad = vec![Invoice::new("BigCo", vec![Performance::new("macbeth", 10)])];

        let err = render_statements(OutputFormat::Text, None, &catalog(), &bad).unwrap_err();
        assert!(err.to_string().contains("BigCo"));
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::UnresolvedPlay(_))
        ));
    }

    #[test]
    fn json_output_is_the_statement_model() {
        let out = render_statements(OutputFormat::Json, Some(0), &catalog(), &invoices()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["customer"], "BigCo");
        assert_eq!(value[0]["totalAmount"], 40_000);
    }
}
