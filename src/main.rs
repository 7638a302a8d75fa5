use clap::Parser;
use immobot::cli::Cli;
use immobot::infrastructure::bootstrap;
use immobot::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    config.logging.init();
    info!("immobot starting");

    match bootstrap::run(&config, cli.dry_run).await {
        Ok(outcome) => info!(?outcome, "immobot finished"),
        Err(e) => {
            error!(error = %e, "Fatal error");
            std::process::exit(1);
        }
    }
}
