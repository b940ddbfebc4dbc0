//! Startup handshake with Telegram, with a bounded exponential backoff.

use std::{future::IntoFuture, time::Duration};

use anyhow::Context;
use teloxide::{prelude::*, RequestError};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

/// Attempts after the first one.
const STARTUP_RETRIES: usize = 4;

/// 500ms, 1s, 2s, 4s (jittered), then give up.
fn backoff() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(250)
        .max_delay(Duration::from_secs(8))
        .map(jitter)
        .take(STARTUP_RETRIES)
}

/// Run a Telegram call, retrying transient failures with backoff.
pub async fn with_backoff<T, F, Fut>(what: &str, mut op: F) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: IntoFuture<Output = Result<T, RequestError>>,
{
    Retry::start(backoff(), || {
        let fut = op().into_future();
        async move {
            fut.await.map_err(|e| {
                tracing::warn!("{what} failed: {e}");
                e
            })
        }
    })
    .await
    .with_context(|| format!("{what} failed after {} retries", STARTUP_RETRIES))
}

/// Confirm the token works and log who we are.
pub async fn handshake(bot: &Bot) -> anyhow::Result<()> {
    let me = with_backoff("getMe", || bot.get_me()).await?;
    tracing::info!("bot started: @{}", me.username());
    Ok(())
}
