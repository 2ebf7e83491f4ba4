use std::sync::Arc;

use anyhow::Result;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ChatJoinRequest};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use crate::config::{Config, Texts};
use crate::greeter;
use crate::platform::telegram::TelegramApi;
use crate::platform::{ButtonPress, JoinRequest, StartCommand};
use crate::stats::JoinStats;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "startup message and buttons")]
    Start,
}

/// Shared application state
pub struct AppState {
    pub texts: Texts,
    pub stats: Arc<JoinStats>,
}

impl AppState {
    pub fn new(config: &Config, stats: Arc<JoinStats>) -> Self {
        Self {
            texts: config.texts.clone(),
            stats,
        }
    }
}

fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback))
        .branch(Update::filter_chat_join_request().endpoint(handle_join_request))
}

/// Start the Telegram bot and poll until interrupted
pub async fn run(bot: Bot, state: Arc<AppState>) -> Result<()> {
    info!("Starting Telegram bot (polling)...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command, state: Arc<AppState>) -> Result<()> {
    match cmd {
        Command::Start => {
            let command = StartCommand { chat_id: msg.chat.id.0 };
            greeter::start(&TelegramApi::new(bot), &state.texts, &command).await
        }
    }
}

async fn handle_callback(bot: Bot, q: CallbackQuery, state: Arc<AppState>) -> Result<()> {
    let press = ButtonPress::from(&q);
    greeter::button_pressed(&TelegramApi::new(bot), &state.texts, &press).await?;
    Ok(())
}

/// Never fails: the outcome is logged and counted, and the request is left
/// pending if approval did not go through.
async fn handle_join_request(bot: Bot, req: ChatJoinRequest, state: Arc<AppState>) -> Result<()> {
    let request = JoinRequest::from(&req);
    let result =
        greeter::approve_join_request(&TelegramApi::new(bot), &state.texts, &request).await;

    if let Err(e) = &result {
        error!("Failed to handle join request: {}: {:#}", e, e.cause());
    }
    state.stats.record(&result);

    Ok(())
}
