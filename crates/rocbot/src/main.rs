use std::sync::Arc;

use rocbot_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), rocbot_core::Error> {
    rocbot_core::logging::init("rocbot")?;

    // Missing token or webhook URL stops us here, before any network call.
    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!("{e}");
            return Err(e);
        }
    };
    tracing::info!(mode = cfg.delivery.name(), port = cfg.port, "starting rocbot");

    rocbot_telegram::run(cfg)
        .await
        .map_err(|e| rocbot_core::Error::Delivery(format!("telegram bot failed: {e:#}")))?;

    Ok(())
}
