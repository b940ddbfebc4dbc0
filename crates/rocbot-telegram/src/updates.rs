//! Telegram update → core `InboundEvent`.

use teloxide::types::{CallbackQuery, Message, Update, UpdateKind};

use rocbot_core::{
    domain::{ChatId, MessageId, MessageRef},
    messaging::types::InboundEvent,
};

/// Slash commands only; every other message is none of our business.
pub fn event_from_message(msg: &Message) -> Option<InboundEvent> {
    let text = msg.text()?;
    if !text.starts_with('/') {
        return None;
    }
    Some(InboundEvent::command(ChatId(msg.chat.id.0), text))
}

pub fn event_from_callback(q: &CallbackQuery) -> InboundEvent {
    let message = q.message.as_ref().map(|m| MessageRef {
        chat_id: ChatId(m.chat.id.0),
        message_id: MessageId(m.id.0),
    });
    // Without a message (inline mode) the private chat id equals the user id.
    let chat_id = message
        .map(|m| m.chat_id)
        .unwrap_or(ChatId(q.from.id.0 as i64));

    InboundEvent::callback(
        chat_id,
        q.id.clone(),
        message,
        q.data.clone().unwrap_or_default(),
    )
}

pub fn event_from_update(update: &Update) -> Option<InboundEvent> {
    match &update.kind {
        UpdateKind::Message(msg) => event_from_message(msg),
        UpdateKind::CallbackQuery(q) => Some(event_from_callback(q)),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    fn user() -> Value {
        json!({ "id": 42, "is_bot": false, "first_name": "Olena" })
    }

    fn chat() -> Value {
        json!({ "id": 42, "type": "private", "first_name": "Olena" })
    }

    pub(crate) fn message_update(text: &str) -> Value {
        json!({
            "update_id": 1,
            "message": {
                "message_id": 10,
                "date": 1_700_000_000,
                "chat": chat(),
                "from": user(),
                "text": text,
            }
        })
    }

    pub(crate) fn callback_update(data: &str) -> Value {
        json!({
            "update_id": 2,
            "callback_query": {
                "id": "cbq-1",
                "from": user(),
                "chat_instance": "-1",
                "data": data,
                "message": {
                    "message_id": 11,
                    "date": 1_700_000_000,
                    "chat": chat(),
                    "from": { "id": 7, "is_bot": true, "first_name": "ROC", "username": "roc_bot" },
                    "text": "Вас вітає",
                }
            }
        })
    }
}
