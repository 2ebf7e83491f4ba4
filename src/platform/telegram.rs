use anyhow::{Context, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQuery, CallbackQueryId, ChatId, ChatJoinRequest, InlineKeyboardButton,
    InlineKeyboardMarkup, MessageId, ReplyParameters, UserId,
};

use crate::keyboard::{ButtonAction, Keyboard};
use crate::platform::{ButtonPress, ChatApi, JoinRequest, OutboundMessage};

/// `ChatApi` backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramApi {
    bot: Bot,
}

impl TelegramApi {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatApi for TelegramApi {
    async fn bot_username(&self) -> Result<String> {
        let me = self.bot.get_me().await.context("getMe failed")?;
        Ok(me.username().to_string())
    }

    async fn send_message(&self, message: OutboundMessage) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(message.chat_id), message.text);
        if let Some(keyboard) = &message.keyboard {
            request = request.reply_markup(inline_markup(keyboard)?);
        }
        if let Some(reply_to) = message.reply_to {
            request = request.reply_parameters(ReplyParameters::new(MessageId(reply_to)));
        }

        request
            .await
            .with_context(|| format!("sendMessage to chat {} failed", message.chat_id))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .context("answerCallbackQuery failed")?;
        Ok(())
    }

    async fn approve_join_request(&self, chat_id: i64, user_id: u64) -> Result<()> {
        self.bot
            .approve_chat_join_request(ChatId(chat_id), UserId(user_id))
            .await
            .with_context(|| {
                format!(
                    "approveChatJoinRequest for user {} in chat {} failed",
                    user_id, chat_id
                )
            })?;
        Ok(())
    }
}

/// Convert a keyboard into Telegram's inline markup. Fails only on malformed URLs.
pub fn inline_markup(keyboard: &Keyboard) -> Result<InlineKeyboardMarkup> {
    let mut rows = Vec::with_capacity(keyboard.rows.len());
    for row in &keyboard.rows {
        let mut buttons = Vec::with_capacity(row.len());
        for button in row {
            let button = match &button.action {
                ButtonAction::Url(url) => {
                    let url = url::Url::parse(url)
                        .with_context(|| format!("Invalid button URL: {}", url))?;
                    InlineKeyboardButton::url(button.label.clone(), url)
                }
                ButtonAction::Callback(data) => {
                    InlineKeyboardButton::callback(button.label.clone(), data.clone())
                }
            };
            buttons.push(button);
        }
        rows.push(buttons);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}

impl From<&CallbackQuery> for ButtonPress {
    fn from(q: &CallbackQuery) -> Self {
        Self {
            callback_id: q.id.0.clone(),
            data: q.data.clone(),
            // Deleted or too old messages can't be replied to.
            origin: q
                .message
                .as_ref()
                .and_then(|m| m.regular_message())
                .map(|m| (m.chat.id.0, m.id.0)),
        }
    }
}

impl From<&ChatJoinRequest> for JoinRequest {
    fn from(req: &ChatJoinRequest) -> Self {
        Self {
            chat_id: req.chat.id.0,
            user_id: req.from.id.0,
            full_name: req.from.full_name(),
        }
    }
}
