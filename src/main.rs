use clap::Parser;
use restaurant_order::utils::error::{ErrorSeverity, OrderError};
use restaurant_order::utils::{logger, validation::Validate};
use restaurant_order::{app, CliConfig};

fn report_failure(stage: &str, e: &OrderError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env file is fine; the variables may come from the shell
    let dotenv = dotenvy::dotenv();

    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting restaurant-order");
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        report_failure("Configuration validation", &e);
    }

    if config.model.is_configured() {
        match config.model.chat_completions_url() {
            Ok(url) => tracing::info!(
                "🤖 Model service configured: {}",
                url.host_str().unwrap_or("unknown host")
            ),
            Err(e) => tracing::warn!("Model service settings are unusable: {}", e),
        }
    } else {
        tracing::debug!("Model service not configured; the order flow does not need it");
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => report_failure("Loading the menu", &e),
    };
    tracing::info!("📋 Menu has {} items", catalog.len());

    let mut stdout = std::io::stdout();
    match app::run_order(&config, catalog, &mut stdout).await {
        Ok(outcome) if outcome.is_completed() => {
            tracing::info!("✅ Order completed");
        }
        Ok(_) => {
            tracing::info!("Order not placed: item unavailable");
        }
        Err(e) => report_failure("Order flow", &e),
    }

    Ok(())
}
