//! Logging for the quoting tool.

use {
    crate::scenario::{Quote, Scenario},
    std::path::Path,
    tracing_subscriber::EnvFilter,
};

/// Installs a formatting subscriber writing to stderr so that stdout only
/// carries the quote.
pub fn initialize(filter: &str) {
    // A subscriber may already be installed when running in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn loaded(path: &Path, scenario: &Scenario) {
    tracing::info!(
        path = %path.display(),
        tokens = scenario.tokens.len(),
        total_supply = %scenario.total_supply,
        swap_fee_percentage = %scenario.swap_fee_percentage,
        operation = scenario.operation.name(),
        "loaded scenario"
    );
}

pub fn quoted(quote: &Quote) {
    tracing::info!(
        operation = quote.operation,
        bpt_amount = %quote.bpt_amount,
        "computed quote"
    );
    tracing::trace!(?quote);
}

pub fn failed(err: &anyhow::Error) {
    tracing::error!(?err, "failed to quote scenario");
}
