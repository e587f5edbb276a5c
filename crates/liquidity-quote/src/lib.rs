pub mod cli;
pub mod observe;
pub mod scenario;
mod serialization;

use {anyhow::Result, clap::Parser};

pub fn start(args: impl IntoIterator<Item = String>) {
    let args = cli::Arguments::parse_from(args);
    observe::initialize(&args.log);
    tracing::info!("running liquidity quote with validated arguments:\n{}", args);

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            observe::failed(&err);
            std::process::exit(1);
        }
    }
}

/// Loads the scenario and renders its quote as JSON.
pub fn run(args: &cli::Arguments) -> Result<String> {
    let scenario = scenario::Scenario::load(&args.scenario)?;
    observe::loaded(&args.scenario, &scenario);

    let quote = scenario.quote()?;
    observe::quoted(&quote);

    Ok(if args.pretty {
        serde_json::to_string_pretty(&quote)?
    } else {
        serde_json::to_string(&quote)?
    })
}
