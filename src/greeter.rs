use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Texts;
use crate::keyboard::{start_keyboard, welcome_keyboard, CallbackToken};
use crate::platform::{ButtonPress, ChatApi, JoinRequest, OutboundMessage, StartCommand};
use crate::stylize::stylize;

/// Successful handling of a join request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// False when the requester could not be messaged privately
    /// (e.g. they never started a chat with the bot).
    pub private_message_delivered: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    /// The request was left pending; nothing was sent.
    #[error("failed to approve join request of user {user_id} for chat {chat_id}")]
    Approval {
        chat_id: i64,
        user_id: u64,
        #[source]
        source: anyhow::Error,
    },
    /// The request was approved but the public welcome could not be sent.
    #[error("approved user {user_id} but failed to welcome them in chat {chat_id}")]
    Welcome {
        chat_id: i64,
        user_id: u64,
        private_message_delivered: bool,
        #[source]
        source: anyhow::Error,
    },
}

impl JoinError {
    /// The underlying platform error
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            JoinError::Approval { source, .. } | JoinError::Welcome { source, .. } => source,
        }
    }
}

/// Reply to `/start` with the welcome text and the start menu.
pub async fn start(api: &dyn ChatApi, texts: &Texts, command: &StartCommand) -> Result<()> {
    let username = api.bot_username().await?;

    let message = OutboundMessage::new(command.chat_id, stylize(&texts.start))
        .with_keyboard(start_keyboard(&username));
    api.send_message(message).await?;

    Ok(())
}

/// Acknowledge a button press and answer the tokens this bot knows about.
/// Returns whether a reply was sent.
pub async fn button_pressed(api: &dyn ChatApi, texts: &Texts, press: &ButtonPress) -> Result<bool> {
    api.answer_callback(&press.callback_id).await?;

    let data = press.data.as_deref().unwrap_or_default();
    let text = match CallbackToken::parse(data) {
        Some(CallbackToken::Help) => &texts.help,
        Some(CallbackToken::MovieGroup) => &texts.movie_group,
        None => {
            debug!("Ignoring unknown callback data: {:?}", data);
            return Ok(false);
        }
    };

    let Some((chat_id, message_id)) = press.origin else {
        debug!("Callback {} has no accessible message to reply to", press.callback_id);
        return Ok(false);
    };

    let message = OutboundMessage::new(chat_id, stylize(text)).reply_to(message_id);
    api.send_message(message).await?;

    Ok(true)
}

/// Approve a pending join request, then greet the new member privately and
/// in the chat. The private message is best-effort.
pub async fn approve_join_request(
    api: &dyn ChatApi,
    texts: &Texts,
    request: &JoinRequest,
) -> Result<JoinOutcome, JoinError> {
    let (chat_id, user_id) = (request.chat_id, request.user_id);

    info!("Received join request from {} to chat {}", user_id, chat_id);

    api.approve_join_request(chat_id, user_id)
        .await
        .map_err(|source| JoinError::Approval {
            chat_id,
            user_id,
            source,
        })?;
    info!("Approved join request of user {} for chat {}", user_id, chat_id);

    let private = OutboundMessage::new(user_id as i64, stylize(&texts.private_welcome));
    let private_message_delivered = match api.send_message(private).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not send PM to user {}: {:#}", user_id, e);
            false
        }
    };

    welcome_in_chat(api, texts, request)
        .await
        .map_err(|source| JoinError::Welcome {
            chat_id,
            user_id,
            private_message_delivered,
            source,
        })?;

    Ok(JoinOutcome {
        private_message_delivered,
    })
}

async fn welcome_in_chat(api: &dyn ChatApi, texts: &Texts, request: &JoinRequest) -> Result<()> {
    let username = api.bot_username().await?;
    let text = stylize(&texts.group_welcome_for(&request.full_name));

    let message =
        OutboundMessage::new(request.chat_id, text).with_keyboard(welcome_keyboard(&username));
    api.send_message(message).await
}
