use {clap::Parser, std::path::PathBuf};

/// Quotes a liquidity operation against a pool scenario.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Arguments {
    /// Path to the TOML scenario describing the pool and the operation.
    #[arg(long, env)]
    pub scenario: PathBuf,

    /// The log filter.
    #[arg(long, env, default_value = "warn,liquidity_quote=info,base_pool_math=debug")]
    pub log: String,

    /// Pretty print the JSON quote.
    #[arg(long)]
    pub pretty: bool,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            scenario,
            log,
            pretty,
        } = self;

        writeln!(f, "scenario: {}", scenario.display())?;
        writeln!(f, "log: {log}")?;
        writeln!(f, "pretty: {pretty}")
    }
}
