use crate::domain::{ChatId, MessageRef};

/// Messenger-agnostic incoming update.
///
/// Telegram-specific fields live in the Telegram adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundEvent {
    pub chat_id: ChatId,
    pub kind: EventKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A slash command, already normalised (`/Start@RocBot x` → `start`).
    Command { name: String },
    /// An inline button press.
    Callback {
        callback_id: String,
        /// The message carrying the keyboard; absent for inline-mode or stale messages.
        message: Option<MessageRef>,
        data: String,
    },
}

impl InboundEvent {
    pub fn command(chat_id: ChatId, text: &str) -> Self {
        Self {
            chat_id,
            kind: EventKind::Command {
                name: parse_command(text),
            },
        }
    }

    pub fn callback(
        chat_id: ChatId,
        callback_id: impl Into<String>,
        message: Option<MessageRef>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            chat_id,
            kind: EventKind::Callback {
                callback_id: callback_id.into(),
                message,
                data: data.into(),
            },
        }
    }

    /// The identifier the router dispatches on.
    pub fn data(&self) -> &str {
        match &self.kind {
            EventKind::Command { name } => name,
            EventKind::Callback { data, .. } => data,
        }
    }

    pub fn callback_id(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Command { .. } => None,
            EventKind::Callback { callback_id, .. } => Some(callback_id),
        }
    }
}

/// Normalise command text: Telegram may send `/cmd@botname arg1 ...`.
pub fn parse_command(text: &str) -> String {
    let first = text.split_whitespace().next().unwrap_or("");

    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Capabilities / limits of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub max_callback_notice_len: usize,
}
