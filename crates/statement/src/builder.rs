//! Invoice -> statement pipeline.
//!
//! ```text
//! Invoice
//!   ↓
//! 1. Resolve each play in the catalog, validate each audience
//!   ↓
//! 2. Price each performance through the pricing policy
//!   ↓
//! 3. Fold totals
//!   ↓
//! StatementData
//! ```
//!
//! Every stage is fail-fast over the whole invoice: the first error aborts the
//! build and no partial statement is returned. Nothing is priced until every
//! performance has resolved.

use tracing::instrument;

use playbill_catalog::{Play, PlayCatalog};
use playbill_core::{Audience, DomainResult};
use playbill_pricing::PricingPolicy;

use crate::invoice::{Invoice, Performance};
use crate::statement::{EnrichedPerformance, StatementData};

/// Builds statements against a catalog and a pricing policy.
///
/// Holds only shared borrows; one builder can serve any number of invoices,
/// and independent builders may run concurrently over the same catalog.
#[derive(Debug, Clone, Copy)]
pub struct StatementBuilder<'a> {
    catalog: &'a PlayCatalog,
    policy: &'a PricingPolicy,
}

/// A performance whose play resolved and whose audience validated.
struct Resolved<'a> {
    performance: &'a Performance,
    play: &'a Play,
    audience: Audience,
}

impl<'a> StatementBuilder<'a> {
    pub fn new(catalog: &'a PlayCatalog, policy: &'a PricingPolicy) -> Self {
        Self { catalog, policy }
    }

    #[instrument(
        skip_all,
        fields(customer = %invoice.customer, performances = invoice.performances.len())
    )]
    pub fn build(&self, invoice: &Invoice) -> DomainResult<StatementData> {
        let resolved = invoice
            .performances
            .iter()
            .map(|performance| self.resolve(performance))
            .collect::<DomainResult<Vec<_>>>()?;

        let enriched = resolved
            .into_iter()
            .map(|r| self.enrich(r))
            .collect::<DomainResult<Vec<_>>>()?;

        let statement = StatementData::new(invoice.customer.clone(), enriched)?;
        tracing::debug!(
            total_amount = statement.total_amount().minor_units(),
            total_volume_credits = statement.total_volume_credits(),
            "statement built"
        );
        Ok(statement)
    }

    fn resolve<'p>(&self, performance: &'p Performance) -> DomainResult<Resolved<'p>>
    where
        'a: 'p,
    {
        let play = self.catalog.resolve(&performance.play_id)?;
        let audience = Audience::try_from(performance.audience)?;
        Ok(Resolved {
            performance,
            play,
            audience,
        })
    }

    fn enrich(&self, resolved: Resolved<'_>) -> DomainResult<EnrichedPerformance> {
        let quote = self.policy.quote(&resolved.play.genre, resolved.audience)?;
        tracing::debug!(
            play_id = %resolved.performance.play_id,
            genre = %resolved.play.genre,
            audience = resolved.audience.seats(),
            amount = quote.amount.minor_units(),
            volume_credits = quote.volume_credits,
            "priced performance"
        );
        Ok(EnrichedPerformance::new(
            resolved.performance.play_id.clone(),
            resolved.audience,
            resolved.play.clone(),
            quote,
        ))
    }
}

/// Build a statement using the standard pricing policy.
pub fn create_statement_data(
    invoice: &Invoice,
    catalog: &PlayCatalog,
) -> DomainResult<StatementData> {
    let policy = PricingPolicy::standard();
    StatementBuilder::new(catalog, &policy).build(invoice)
}
