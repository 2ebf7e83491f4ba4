use crate::stylize::stylize;

/// Callback tokens carried by the inline buttons this bot sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackToken {
    Help,
    MovieGroup,
}

impl CallbackToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackToken::Help => "help",
            CallbackToken::MovieGroup => "movie_group",
        }
    }

    /// Returns `None` for tokens this bot never issued.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "help" => Some(CallbackToken::Help),
            "movie_group" => Some(CallbackToken::MovieGroup),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    Url(String),
    Callback(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    fn url(label: &str, url: String) -> Self {
        Self {
            label: stylize(label),
            action: ButtonAction::Url(url),
        }
    }

    fn callback(label: &str, token: CallbackToken) -> Self {
        Self {
            label: stylize(label),
            action: ButtonAction::Callback(token.as_str().to_string()),
        }
    }
}

/// Ordered rows of inline buttons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

pub fn add_to_group_link(bot_username: &str) -> String {
    format!("https://t.me/{}?startgroup=true", bot_username)
}

pub fn add_to_channel_link(bot_username: &str) -> String {
    format!("https://t.me/{}?startchannel=true", bot_username)
}

/// Menu attached to the `/start` reply: the channel link and the movie
/// group button share the middle row.
pub fn start_keyboard(bot_username: &str) -> Keyboard {
    Keyboard {
        rows: vec![
            vec![Button::url(
                "ADD ME TO YOUR GROUP",
                add_to_group_link(bot_username),
            )],
            vec![
                Button::url("ADD ME TO YOUR CHANNEL", add_to_channel_link(bot_username)),
                Button::callback("MOVIE GROUP", CallbackToken::MovieGroup),
            ],
            vec![Button::callback("HELP", CallbackToken::Help)],
        ],
    }
}

/// Menu attached to the public welcome after a join request: one button per row.
pub fn welcome_keyboard(bot_username: &str) -> Keyboard {
    Keyboard {
        rows: vec![
            vec![Button::url(
                "ADD ME TO YOUR GROUP",
                add_to_group_link(bot_username),
            )],
            vec![Button::url(
                "ADD ME TO YOUR CHANNEL",
                add_to_channel_link(bot_username),
            )],
            vec![Button::callback("MOVIE GROUP", CallbackToken::MovieGroup)],
            vec![Button::callback("HELP", CallbackToken::Help)],
        ],
    }
}
