use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    menu::ButtonRef,
    messaging::types::MessagingCapabilities,
    Result,
};

/// Outbound side of the Delivery Adapter.
///
/// Telegram is the production implementation; tests use a recording double.
/// `text` is in the menu markup subset; adapters convert it to their own format.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    async fn send_menu(
        &self,
        chat_id: ChatId,
        text: &str,
        buttons: &[ButtonRef],
    ) -> Result<MessageRef>;

    async fn edit_menu(&self, msg: MessageRef, text: &str, buttons: &[ButtonRef]) -> Result<()>;

    /// Clear the client's loading indicator, optionally showing a short notice.
    async fn answer_callback(&self, callback_id: &str, notice: Option<&str>) -> Result<()>;
}
