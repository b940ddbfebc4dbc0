//! Telegram adapter (teloxide).
//!
//! This crate implements the `rocbot-core` MessagingPort over the Telegram Bot
//! API and feeds updates into the core router, either by long polling or from
//! a webhook HTTP endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    ApiError, RequestError,
};

use tokio::time::sleep;

pub mod keepalive;
pub mod polling;
pub mod startup;
pub mod updates;
pub mod webhook;

use rocbot_core::{
    config::{Config, DeliveryMode},
    context::AppContext,
    dispatch::MenuRouter,
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    formatting::markup_to_html,
    menu::ButtonRef,
    messaging::{port::MessagingPort, types::MessagingCapabilities},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: RequestError) -> Error {
        Error::Delivery(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, RequestError>>,
        Fut::IntoFuture: Send,
    {
        self.retry_raw(op).await.map_err(Self::map_err)
    }

    /// Retry once on `RetryAfter` (429), keeping the raw error for callers that inspect it.
    async fn retry_raw<T, Fut>(
        &self,
        mut op: impl FnMut() -> Fut,
    ) -> std::result::Result<T, RequestError>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(RequestError::RetryAfter(d)) if attempts < MAX_RETRIES => {
                    attempts += 1;
                    tracing::warn!("telegram asked us to back off for {d:?}");
                    sleep(d).await;
                }
                Err(other) => return Err(other),
            }
        }
    }
}

/// One button per row, in display order.
pub fn keyboard(buttons: &[ButtonRef]) -> Result<InlineKeyboardMarkup> {
    let rows = buttons
        .iter()
        .map(|b| -> Result<Vec<InlineKeyboardButton>> {
            let button = match b {
                ButtonRef::Navigate { label, target } => {
                    InlineKeyboardButton::callback(*label, target.as_str())
                }
                ButtonRef::ExternalLink { label, url } => {
                    let url = url::Url::parse(url)
                        .map_err(|e| Error::Delivery(format!("bad button url `{url}`: {e}")))?;
                    InlineKeyboardButton::url(*label, url)
                }
            };
            Ok(vec![button])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    fn capabilities(&self) -> MessagingCapabilities {
        MessagingCapabilities {
            max_callback_notice_len: 200,
        }
    }

    async fn send_menu(
        &self,
        chat_id: ChatId,
        text: &str,
        buttons: &[ButtonRef],
    ) -> Result<MessageRef> {
        let html = markup_to_html(text);
        let markup = keyboard(buttons)?;

        let msg = self
            .with_retry(|| {
                self.bot
                    .send_message(Self::tg_chat(chat_id), html.clone())
                    .parse_mode(ParseMode::Html)
                    .disable_web_page_preview(true)
                    .reply_markup(markup.clone())
            })
            .await?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn edit_menu(&self, msg: MessageRef, text: &str, buttons: &[ButtonRef]) -> Result<()> {
        let html = markup_to_html(text);
        let markup = keyboard(buttons)?;

        let res = self
            .retry_raw(|| {
                self.bot
                    .edit_message_text(
                        Self::tg_chat(msg.chat_id),
                        Self::tg_msg_id(msg.message_id),
                        html.clone(),
                    )
                    .parse_mode(ParseMode::Html)
                    .disable_web_page_preview(true)
                    .reply_markup(markup.clone())
            })
            .await;

        match res {
            Ok(_) => Ok(()),
            // Tapping the button of the screen already shown: nothing to change.
            Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
            Err(e) => Err(Self::map_err(e)),
        }
    }

    async fn answer_callback(&self, callback_id: &str, notice: Option<&str>) -> Result<()> {
        self.with_retry(|| {
            let mut req = self.bot.answer_callback_query(callback_id.to_string());
            if let Some(t) = notice {
                req = req.text(t.to_string());
            }
            req
        })
        .await?;
        Ok(())
    }
}

/// Build the bot client with the configured request timeout.
pub fn build_bot(cfg: &Config) -> anyhow::Result<Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(cfg.request_timeout)
        .build()?;
    Ok(Bot::with_client(cfg.bot_token.clone(), client))
}

/// Wire the adapter to the core and run until shutdown in the configured mode.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = build_bot(&cfg)?;
    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let ctx = AppContext::from_config(&cfg, messenger)?;
    let router = Arc::new(MenuRouter::new(ctx));

    let _keepalive = match &cfg.keepalive_url {
        Some(url) => Some(keepalive::spawn(
            url.clone(),
            cfg.keepalive_interval,
            cfg.request_timeout,
        )?),
        None => None,
    };

    match &cfg.delivery {
        DeliveryMode::Webhook { url, secret } => {
            webhook::run_webhook(bot, router, url.clone(), secret.clone(), cfg.port).await
        }
        DeliveryMode::Polling => polling::run_polling(bot, router, cfg.request_timeout).await,
    }
}

#[cfg(test)]
mod tests {
    use rocbot_core::menu::{MenuId, MenuRegistry};

    use super::*;

    #[test]
    fn keyboard_is_one_button_per_row() {
        let registry = MenuRegistry::builtin().unwrap();
        let root = registry.get(MenuId::Main).unwrap();
        let markup = keyboard(&root.buttons).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 4);
        assert!(markup.inline_keyboard.iter().all(|row| row.len() == 1));
        assert_eq!(markup.inline_keyboard[0][0].text, "📋 Ціни");
    }

    #[test]
    fn keyboard_rejects_bad_urls() {
        let buttons = [ButtonRef::ExternalLink {
            label: "x",
            url: "::nope::",
        }];
        assert!(matches!(keyboard(&buttons), Err(Error::Delivery(_))));
    }
}
