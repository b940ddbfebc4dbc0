//! Dispatch router: inbound event → registry lookup → render through the port.
//!
//! `resolve` is pure; `handle` performs the render, acknowledges the button
//! press and logs. Nothing here propagates an error to the caller.

use crate::{
    context::AppContext,
    domain::{ChatId, MessageRef},
    menu::{MenuId, MenuNode},
    messaging::types::{EventKind, InboundEvent},
    Result,
};

/// Shown in the callback toast when rendering fails.
pub const RETRY_NOTICE: &str = "Виникла помилка. Спробуйте ще раз.";
/// Shown in the callback toast when a chat taps too fast.
pub const THROTTLED_NOTICE: &str = "Забагато запитів. Спробуйте за кілька секунд.";

const START_COMMAND: &str = "start";

/// Where a rendered node goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    /// Post the node as a new message.
    NewMessage(ChatId),
    /// Replace text and keyboard of the message the button belongs to.
    Edit(MessageRef),
}

/// What the router decided to do with an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCommand<'a> {
    Render {
        target: RenderTarget,
        node: &'a MenuNode,
    },
    /// Acknowledge the button press and do nothing else.
    AckOnly(SkipReason),
    /// Not for us (plain text, unknown command).
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    UnknownId,
    NoMessage,
}

/// A successful render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub node: MenuId,
    pub message: MessageRef,
}

/// Final result of handling one event, for logs and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered(Rendered),
    Skipped(SkipReason),
    Throttled,
    Failed,
    Ignored,
}

#[derive(Clone)]
pub struct MenuRouter {
    ctx: AppContext,
}

impl MenuRouter {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Map an event to a render command without touching the network.
    pub fn resolve(&self, event: &InboundEvent) -> RenderCommand<'_> {
        let registry = &self.ctx.registry;
        match &event.kind {
            EventKind::Command { name } if name == START_COMMAND => {
                match registry.get(MenuId::Main) {
                    Some(node) => RenderCommand::Render {
                        target: RenderTarget::NewMessage(event.chat_id),
                        node,
                    },
                    None => RenderCommand::Ignore,
                }
            }
            EventKind::Command { .. } => RenderCommand::Ignore,
            EventKind::Callback { message, data, .. } => {
                let Some(node) = registry.lookup(data) else {
                    return RenderCommand::AckOnly(SkipReason::UnknownId);
                };
                // Returning to the root re-sends it, like `/start`.
                let target = match (node.id, message) {
                    (MenuId::Main, _) => RenderTarget::NewMessage(event.chat_id),
                    (_, Some(message)) => RenderTarget::Edit(*message),
                    (_, None) => return RenderCommand::AckOnly(SkipReason::NoMessage),
                };
                RenderCommand::Render { target, node }
            }
        }
    }

    /// Handle one event end to end. Always acknowledges callbacks; never fails.
    pub async fn handle(&self, event: &InboundEvent) -> Outcome {
        let chat_id = event.chat_id.0;
        match self.resolve(event) {
            RenderCommand::Ignore => {
                tracing::debug!(chat_id, data = event.data(), "ignored event");
                Outcome::Ignored
            }
            RenderCommand::AckOnly(reason) => {
                match reason {
                    SkipReason::UnknownId => {
                        tracing::warn!(chat_id, data = event.data(), "unknown callback identifier")
                    }
                    SkipReason::NoMessage => tracing::info!(
                        chat_id,
                        data = event.data(),
                        "callback without a message to edit"
                    ),
                }
                self.acknowledge(event, None).await;
                Outcome::Skipped(reason)
            }
            RenderCommand::Render { target, node } => {
                let throttled = self.ctx.rate_limiter.lock().await.check(event.chat_id);
                if let Err(wait) = throttled {
                    tracing::debug!(
                        chat_id,
                        retry_in_ms = wait.as_millis() as u64,
                        "rate limited"
                    );
                    self.acknowledge(event, Some(THROTTLED_NOTICE)).await;
                    return Outcome::Throttled;
                }

                match self.render(target, node).await {
                    Ok(rendered) => {
                        tracing::info!(chat_id, node = %rendered.node, "rendered menu");
                        self.acknowledge(event, None).await;
                        Outcome::Rendered(rendered)
                    }
                    Err(e) => {
                        tracing::error!(chat_id, data = event.data(), "failed to render menu: {e}");
                        self.acknowledge(event, Some(RETRY_NOTICE)).await;
                        Outcome::Failed
                    }
                }
            }
        }
    }

    async fn render(&self, target: RenderTarget, node: &MenuNode) -> Result<Rendered> {
        let messenger = &self.ctx.messenger;
        let message = match target {
            RenderTarget::NewMessage(chat_id) => {
                messenger
                    .send_menu(chat_id, node.body_text, &node.buttons)
                    .await?
            }
            RenderTarget::Edit(message) => {
                messenger
                    .edit_menu(message, node.body_text, &node.buttons)
                    .await?;
                message
            }
        };
        Ok(Rendered {
            node: node.id,
            message,
        })
    }

    /// Answer the button press, if this event came from one. Failures are logged only.
    async fn acknowledge(&self, event: &InboundEvent, notice: Option<&str>) {
        let Some(callback_id) = event.callback_id() else {
            return;
        };
        let max = self.ctx.messenger.capabilities().max_callback_notice_len;
        let notice = notice.map(|n| truncate_chars(n, max));
        if let Err(e) = self
            .ctx
            .messenger
            .answer_callback(callback_id, notice.as_deref())
            .await
        {
            tracing::warn!(chat_id = event.chat_id.0, "failed to answer callback: {e}");
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    s.chars().take(max).collect()
}
