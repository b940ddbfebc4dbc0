use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config, menu::MenuRegistry, messaging::port::MessagingPort, rate_limit::RateLimiter,
    Result,
};

/// Everything a handler needs, built once at startup and passed down explicitly.
#[derive(Clone)]
pub struct AppContext {
    pub registry: Arc<MenuRegistry>,
    pub messenger: Arc<dyn MessagingPort>,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl AppContext {
    pub fn new(
        registry: Arc<MenuRegistry>,
        messenger: Arc<dyn MessagingPort>,
        rate_limiter: RateLimiter,
    ) -> Self {
        Self {
            registry,
            messenger,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        }
    }

    /// Built-in menu plus the configured rate limit.
    pub fn from_config(cfg: &Config, messenger: Arc<dyn MessagingPort>) -> Result<Self> {
        Ok(Self::new(
            Arc::new(MenuRegistry::builtin()?),
            messenger,
            RateLimiter::new(
                cfg.rate_limit_enabled,
                cfg.rate_limit_requests,
                cfg.rate_limit_window,
            ),
        ))
    }
}
