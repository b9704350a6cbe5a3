use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use sukoon::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "sukoon", about = "Terminal chat widget for the Sukoon AI endpoint")]
struct Args {
    /// Base URL of the chat service (overrides config and SUKOON_ENDPOINT_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Start with an empty transcript
    #[arg(long)]
    no_greeting: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sukoon.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sukoon.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        base_url: args.url,
        timeout_secs: args.timeout,
        no_greeting: args.no_greeting,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Sukoon starting up against {} (timeout {}s)",
        resolved.base_url,
        resolved.timeout_secs
    );

    sukoon::tui::run(resolved)
}
