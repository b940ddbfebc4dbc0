/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type. `Config` stops
/// startup; `Delivery` is logged and the user gets a retry notice.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("delivery error: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
