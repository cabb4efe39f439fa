mod cli;
mod http;
mod probe;
mod report;

use std::io;

use clap::Parser;

use cli::CliConfig;
use http::client::HttpTransport;
use report::Reporter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = CliConfig::parse();
    let transport = HttpTransport::new()?;
    let runs = probe::plan::runs(config.phase, config.lang);

    let mut reporter = Reporter::new(io::stdout(), config.format);
    let summaries = probe::run_all(&transport, &config.base_url, &runs, &mut reporter).await?;

    // Failed probes are part of the report, not of the exit status.
    for summary in &summaries {
        log::info!(
            "{:?}: {}/{} probes succeeded",
            summary.run,
            summary.succeeded,
            summary.total
        );
    }

    Ok(())
}
