//! JSON input loading.

use std::fs;
use std::path::Path;

use anyhow::Context;

use playbill_catalog::PlayCatalog;
use playbill_statement::Invoice;

pub fn load_catalog(path: &Path) -> anyhow::Result<PlayCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read play catalog {}", path.display()))?;
    let catalog: PlayCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse play catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), plays = catalog.len(), "loaded play catalog");
    Ok(catalog)
}

pub fn load_invoices(path: &Path) -> anyhow::Result<Vec<Invoice>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read invoices {}", path.display()))?;
    let invoices: Vec<Invoice> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse invoices {}", path.display()))?;
    tracing::info!(path = %path.display(), invoices = invoices.len(), "loaded invoices");
    Ok(invoices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_catalog(Path::new("/nonexistent/plays.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/plays.json"));
    }
}
