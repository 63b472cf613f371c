use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_post_processing::application::generic::GenericStatusHandler;
use payment_post_processing::application::global;
use payment_post_processing::application::providers::{
    register_redirect_providers, standard_registry,
};
use payment_post_processing::application::session::PollingSession;
use payment_post_processing::domain::ports::BrowserBox;
use payment_post_processing::interfaces::console::browser::ConsoleBrowser;
use payment_post_processing::interfaces::json::status_reader::StatusReader;
use payment_post_processing::logging;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Poll ticks as JSON lines, one array of status records per line
    input: PathBuf,

    /// Delay between two poll ticks, in milliseconds
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Additional provider codes that redirect as soon as status arrives
    #[arg(long = "redirect-provider", value_name = "CODE")]
    redirect_providers: Vec<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level).into_diagnostic()?;

    // All providers register before the first tick is dispatched.
    let mut registry = standard_registry().into_diagnostic()?;
    register_redirect_providers(&mut registry, cli.redirect_providers).into_diagnostic()?;
    let dispatcher =
        global::install(registry.build(Box::new(GenericStatusHandler::new()))).into_diagnostic()?;

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = StatusReader::new(file);
    let browser: BrowserBox = Box::new(ConsoleBrowser::new(io::stdout()));

    let outcome = PollingSession::new(dispatcher, browser.as_ref())
        .with_interval(Duration::from_millis(cli.interval_ms))
        .run(reader.batches())
        .await
        .into_diagnostic()?;

    info!(
        ticks = outcome.ticks,
        skipped = outcome.skipped,
        navigated = outcome.navigated.as_deref(),
        "polling finished"
    );
    Ok(())
}
