use clap::Parser;
use console_adder::utils::logger;
use console_adder::{app, CliConfig, Console};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting console-adder-di");

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let console = Console::stdout(settings.color).shared();
    match app::run_with_container(io::stdin().lock(), console, &settings) {
        Ok(outcome) => tracing::info!("Session finished: {:?}", outcome),
        Err(e) => {
            // Startup failed before the session could run.
            tracing::error!("Service resolution failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
