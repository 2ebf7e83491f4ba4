use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the bot token. Takes precedence over the config file.
pub const TOKEN_ENV: &str = "BOT_TOKEN";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub texts: Texts,
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
}

/// Outbound message texts, written in plain ASCII and stylized on send.
#[derive(Debug, Deserialize, Clone)]
pub struct Texts {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_movie_group")]
    pub movie_group: String,
    #[serde(default = "default_private_welcome")]
    pub private_welcome: String,
    /// `{name}` is replaced with the requester's full name.
    #[serde(default = "default_group_welcome")]
    pub group_welcome: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeartbeatConfig {
    #[serde(default = "default_heartbeat_enabled")]
    pub enabled: bool,
    #[serde(default = "default_heartbeat_cron")]
    pub cron: String,
}

fn default_start() -> String {
    "WELCOME! — YOUR FRIENDLY AUTO-ACCEPT BOT IS ONLINE.\n\n\
     I'LL AUTOMATICALLY ACCEPT JOIN REQUESTS FOR GROUPS WHERE I'M AN ADMIN."
        .to_string()
}

fn default_help() -> String {
    "COMMANDS:\n\
     /start - STARTUP MESSAGE AND BUTTONS\n\
     THIS BOT AUTO-APPROVES JOIN REQUESTS WHEN IT HAS THE PROPER ADMIN RIGHTS.\n\
     IF YOU NEED TO CHANGE TEXTS, EDIT THE [texts] SECTION OF config.toml."
        .to_string()
}

fn default_movie_group() -> String {
    "TO INVITE ME TO YOUR MOVIE GROUP, USE THE 'ADD ME TO YOUR GROUP' BUTTON ABOVE.".to_string()
}

fn default_private_welcome() -> String {
    "YOUR REQUEST HAS BEEN ACCEPTED — WELCOME!\n\
     IF YOU NEED HELP, PRESS THE HELP BUTTON IN THE GROUP OR MESSAGE THE ADMINS."
        .to_string()
}

fn default_group_welcome() -> String {
    "WELCOME {name}! — YOUR REQUEST WAS ACCEPTED.\n\
     ENJOY THE GROUP AND READ THE RULES."
        .to_string()
}

fn default_heartbeat_enabled() -> bool {
    true
}

fn default_heartbeat_cron() -> String {
    "0 0 * * * *".to_string()
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            start: default_start(),
            help: default_help(),
            movie_group: default_movie_group(),
            private_welcome: default_private_welcome(),
            group_welcome: default_group_welcome(),
        }
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: default_heartbeat_enabled(),
            cron: default_heartbeat_cron(),
        }
    }
}

impl Texts {
    /// Public welcome text personalised for the new member.
    pub fn group_welcome_for(&self, full_name: &str) -> String {
        self.group_welcome.replace("{name}", full_name)
    }
}

impl Config {
    /// Load the config file if it exists (all sections are optional) and
    /// resolve the bot token from `BOT_TOKEN` or `[telegram] bot_token`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = if path.exists() {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?
        } else {
            String::new()
        };

        Self::from_toml_str(&content, std::env::var(TOKEN_ENV).ok())
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    pub fn from_toml_str(content: &str, env_token: Option<String>) -> Result<Self> {
        let mut config: Config =
            toml::from_str(content).context("Failed to parse config file")?;

        if let Some(token) = env_token.filter(|t| !t.trim().is_empty()) {
            config.telegram.bot_token = token;
        }

        if config.telegram.bot_token.trim().is_empty() {
            anyhow::bail!("{} environment variable is required", TOKEN_ENV);
        }

        Ok(config)
    }
}
