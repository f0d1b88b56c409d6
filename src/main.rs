use anyhow::Result;
use reearth::config::Config;
use reearth::logger::Logger;
use reearth::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A broken config or log file never keeps the app from starting
    let (config, config_error) = Config::load_or_default();
    let (logger, logger_error) = match Logger::from_config(&config.logging) {
        Ok(logger) => (logger, None),
        Err(e) => (Logger::new(), Some(e)),
    };
    logger.log(format!("Starting ReEarth {}", env!("CARGO_PKG_VERSION")));
    for e in config_error.iter().chain(logger_error.iter()) {
        logger.log(format!("Startup: {:#}, using defaults", e));
    }

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
