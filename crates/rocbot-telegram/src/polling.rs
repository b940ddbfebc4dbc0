//! Long-polling delivery: the fallback when no public URL is available.

use std::{sync::Arc, time::Duration};

use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    update_listeners::Polling,
};

use rocbot_core::dispatch::MenuRouter;

use crate::{startup, updates};

pub async fn handle_callback(q: CallbackQuery, router: Arc<MenuRouter>) -> ResponseResult<()> {
    let event = updates::event_from_callback(&q);
    router.handle(&event).await;
    Ok(())
}

pub async fn handle_message(msg: Message, router: Arc<MenuRouter>) -> ResponseResult<()> {
    if let Some(event) = updates::event_from_message(&msg) {
        router.handle(&event).await;
    }
    Ok(())
}

/// The long-poll must finish well inside the HTTP client timeout.
fn poll_timeout(request_timeout: Duration) -> Duration {
    request_timeout
        .saturating_sub(Duration::from_secs(5))
        .max(Duration::from_secs(1))
}

pub async fn run_polling(
    bot: Bot,
    router: Arc<MenuRouter>,
    request_timeout: Duration,
) -> anyhow::Result<()> {
    startup::handshake(&bot).await?;

    let listener = Polling::builder(bot.clone())
        .timeout(poll_timeout(request_timeout))
        .delete_webhook()
        .await
        .build();

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handle_callback))
        .branch(Update::filter_message().endpoint(handle_message));

    tracing::info!(mode = "polling", "listening for updates");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = upd.id, "unhandled update kind");
        })
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("error from the update listener"),
        )
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_timeout_stays_below_request_timeout() {
        assert_eq!(poll_timeout(Duration::from_secs(20)), Duration::from_secs(15));
        assert_eq!(poll_timeout(Duration::from_secs(3)), Duration::from_secs(1));
    }
}
