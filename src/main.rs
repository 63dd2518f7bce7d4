use clap::Parser;
use console_adder::utils::logger;
use console_adder::{app, CliConfig, Console};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // Diagnostics
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting console-adder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

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
    let outcome = app::run_direct(io::stdin().lock(), console, &settings);
    tracing::info!("Session finished: {:?}", outcome);

    Ok(())
}
