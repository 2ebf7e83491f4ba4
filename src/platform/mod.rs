pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;

use crate::keyboard::Keyboard;

/// A `/start` command invocation
#[derive(Debug, Clone)]
pub struct StartCommand {
    pub chat_id: i64,
}

/// An inline button press
#[derive(Debug, Clone)]
pub struct ButtonPress {
    /// Platform id of the callback query, used to acknowledge it
    pub callback_id: String,
    /// Opaque callback token attached to the button
    pub data: Option<String>,
    /// Chat and message id of the message carrying the button, when still accessible
    pub origin: Option<(i64, i32)>,
}

/// A user asking to enter a chat that requires approval
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub chat_id: i64,
    pub user_id: u64,
    pub full_name: String,
}

/// A message to be sent by the platform client
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<Keyboard>,
    /// Message id to thread the reply under
    pub reply_to: Option<i32>,
}

impl OutboundMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: None,
            reply_to: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn reply_to(mut self, message_id: i32) -> Self {
        self.reply_to = Some(message_id);
        self
    }
}

/// The messaging platform calls the handlers depend on.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Username of the bot itself, used to build deep links
    async fn bot_username(&self) -> Result<String>;

    async fn send_message(&self, message: OutboundMessage) -> Result<()>;

    /// Acknowledge a button press so the client stops showing a spinner
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;

    async fn approve_join_request(&self, chat_id: i64, user_id: u64) -> Result<()>;
}
