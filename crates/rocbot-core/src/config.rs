use std::{env, str::FromStr, time::Duration};

use url::Url;

use crate::{errors::Error, Result};

/// How updates reach the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Telegram pushes updates to `url`; we serve them over HTTP.
    Webhook { url: Url, secret: Option<String> },
    /// We long-poll `getUpdates`.
    Polling,
}

impl DeliveryMode {
    pub fn name(&self) -> &'static str {
        match self {
            DeliveryMode::Webhook { .. } => "webhook",
            DeliveryMode::Polling => "polling",
        }
    }
}

/// Typed configuration, read once at startup from the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub delivery: DeliveryMode,

    // HTTP
    pub port: u16,
    pub request_timeout: Duration,

    // Rate limiting
    pub rate_limit_enabled: bool,
    pub rate_limit_requests: u32,
    pub rate_limit_window: Duration,

    // Keep-alive
    pub keepalive_url: Option<Url>,
    pub keepalive_interval: Duration,
}

impl Config {
    /// Load `.env` (if present, never overriding the real environment), then
    /// read the process environment.
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from any key lookup. `load()` uses the environment; tests
    /// pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).and_then(non_empty);

        // Required env vars
        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("TELEGRAM_BOT_TOKEN"))
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN environment variable is required".to_string())
            })?;

        let mode = get("DELIVERY_MODE").unwrap_or_else(|| "webhook".to_string());
        let delivery = match mode.trim().to_lowercase().as_str() {
            "webhook" => {
                let raw = get("WEBHOOK_URL").ok_or_else(|| {
                    Error::Config(
                        "WEBHOOK_URL environment variable is required in webhook mode".to_string(),
                    )
                })?;
                DeliveryMode::Webhook {
                    url: parse_url("WEBHOOK_URL", &raw)?,
                    secret: get("WEBHOOK_SECRET"),
                }
            }
            "polling" => DeliveryMode::Polling,
            other => {
                return Err(Error::Config(format!(
                    "DELIVERY_MODE must be `webhook` or `polling`, got `{other}`"
                )))
            }
        };

        let port = parse_or("PORT", get("PORT"), 10_000u16)?;
        let request_timeout =
            Duration::from_secs(parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 20u64)?);
        // Long polling needs room inside the client timeout.
        if request_timeout < Duration::from_secs(5) {
            return Err(Error::Config(
                "REQUEST_TIMEOUT_SECS must be at least 5".to_string(),
            ));
        }

        let rate_limit_enabled = get("RATE_LIMIT_ENABLED")
            .map(|s| parse_bool("RATE_LIMIT_ENABLED", &s))
            .transpose()?
            .unwrap_or(true);
        let rate_limit_requests =
            parse_or("RATE_LIMIT_REQUESTS", get("RATE_LIMIT_REQUESTS"), 5u32)?;
        let rate_limit_window =
            Duration::from_secs(parse_or("RATE_LIMIT_WINDOW", get("RATE_LIMIT_WINDOW"), 5u64)?);
        if rate_limit_enabled && (rate_limit_requests == 0 || rate_limit_window.is_zero()) {
            return Err(Error::Config(
                "RATE_LIMIT_REQUESTS and RATE_LIMIT_WINDOW must be positive".to_string(),
            ));
        }

        let keepalive_url = get("KEEPALIVE_URL")
            .map(|raw| parse_url("KEEPALIVE_URL", &raw))
            .transpose()?;
        let keepalive_interval = Duration::from_secs(parse_or(
            "KEEPALIVE_INTERVAL_SECS",
            get("KEEPALIVE_INTERVAL_SECS"),
            600u64,
        )?);
        if keepalive_interval.is_zero() {
            return Err(Error::Config(
                "KEEPALIVE_INTERVAL_SECS must be positive".to_string(),
            ));
        }

        Ok(Self {
            bot_token,
            delivery,
            port,
            request_timeout,
            rate_limit_enabled,
            rate_limit_requests,
            rate_limit_window,
            keepalive_url,
            keepalive_interval,
        })
    }
}

fn parse_url(key: &str, raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|e| Error::Config(format!("{key} is not a valid URL: {e}")))
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse::<T>()
            .map_err(|_| Error::Config(format!("{key} has an invalid value: `{s}`"))),
    }
}

fn parse_bool(key: &str, s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{key} has an invalid value: `{s}`"))),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn cfg(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = cfg(&[("WEBHOOK_URL", "https://example.com/webhook")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let err = cfg(&[("BOT_TOKEN", "   "), ("DELIVERY_MODE", "polling")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn webhook_mode_requires_url() {
        let err = cfg(&[("BOT_TOKEN", "123:abc")]).unwrap_err();
        assert!(err.to_string().contains("WEBHOOK_URL"));
    }

    #[test]
    fn webhook_defaults() {
        let c = cfg(&[
            ("BOT_TOKEN", "123:abc"),
            ("WEBHOOK_URL", "https://telegram-bot-roc.onrender.com/webhook"),
        ])
        .unwrap();
        assert_eq!(c.delivery.name(), "webhook");
        assert_eq!(c.port, 10_000);
        assert_eq!(c.request_timeout, Duration::from_secs(20));
        assert!(c.rate_limit_enabled);
        assert_eq!(c.rate_limit_requests, 5);
        assert!(c.keepalive_url.is_none());
    }

    #[test]
    fn polling_mode_needs_no_url_and_accepts_legacy_token_name() {
        let c = cfg(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("DELIVERY_MODE", "Polling"),
            ("PORT", "8080"),
            ("RATE_LIMIT_ENABLED", "off"),
        ])
        .unwrap();
        assert_eq!(c.delivery, DeliveryMode::Polling);
        assert_eq!(c.port, 8080);
        assert!(!c.rate_limit_enabled);
    }

    #[test]
    fn rejects_garbage_values() {
        assert!(cfg(&[("BOT_TOKEN", "t"), ("DELIVERY_MODE", "carrier-pigeon")]).is_err());
        assert!(cfg(&[("BOT_TOKEN", "t"), ("DELIVERY_MODE", "polling"), ("PORT", "abc")]).is_err());
        assert!(cfg(&[("BOT_TOKEN", "t"), ("WEBHOOK_URL", "not a url")]).is_err());
        assert!(cfg(&[
            ("BOT_TOKEN", "t"),
            ("DELIVERY_MODE", "polling"),
            ("KEEPALIVE_INTERVAL_SECS", "0"),
        ])
        .is_err());
        assert!(cfg(&[
            ("BOT_TOKEN", "t"),
            ("DELIVERY_MODE", "polling"),
            ("REQUEST_TIMEOUT_SECS", "1"),
        ])
        .is_err());
    }

    #[test]
    fn misspelled_rate_limit_flag_is_rejected() {
        let err = cfg(&[
            ("BOT_TOKEN", "t"),
            ("DELIVERY_MODE", "polling"),
            ("RATE_LIMIT_ENABLED", "tru"),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("RATE_LIMIT_ENABLED"));

        let c = cfg(&[
            ("BOT_TOKEN", "t"),
            ("DELIVERY_MODE", "polling"),
            ("RATE_LIMIT_ENABLED", " YES "),
        ])
        .unwrap();
        assert!(c.rate_limit_enabled);
    }
}
