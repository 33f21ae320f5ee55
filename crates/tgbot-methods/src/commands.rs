//! Command lists, bot profile texts, and the menu button.

use serde::Serialize;
use tgbot_core::{Method, ResultShape};
use tgbot_types::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription, MenuButton,
};

/// Replace the command list for a scope and language.
#[derive(Debug, Clone, Serialize)]
pub struct SetMyCommands {
    /// At most 100 commands.
    pub commands: Vec<BotCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    /// ISO 639-1 code; absent applies to users without a dedicated list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyCommands {
    pub fn new(commands: impl IntoIterator<Item = BotCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            scope: None,
            language_code: None,
        }
    }

    optional_setters! {
        scope: BotCommandScope,
        language_code: String,
    }
}

impl Method for SetMyCommands {
    type Output = bool;
    const NAME: &'static str = "setMyCommands";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl DeleteMyCommands {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        scope: BotCommandScope,
        language_code: String,
    }
}

impl Method for DeleteMyCommands {
    type Output = bool;
    const NAME: &'static str = "deleteMyCommands";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// The current command list. An empty list means none are set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl GetMyCommands {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        scope: BotCommandScope,
        language_code: String,
    }
}

impl Method for GetMyCommands {
    type Output = Vec<BotCommand>;
    const NAME: &'static str = "getMyCommands";
    const SHAPE: ResultShape = ResultShape::Collection;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyName {
    /// 0-64 characters; empty removes the dedicated name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyName {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        name: String,
        language_code: String,
    }
}

impl Method for SetMyName {
    type Output = bool;
    const NAME: &'static str = "setMyName";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl GetMyName {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        language_code: String,
    }
}

impl Method for GetMyName {
    type Output = BotName;
    const NAME: &'static str = "getMyName";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Text shown in an empty chat with the bot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyDescription {
    /// 0-512 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyDescription {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        description: String,
        language_code: String,
    }
}

impl Method for SetMyDescription {
    type Output = bool;
    const NAME: &'static str = "setMyDescription";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl GetMyDescription {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        language_code: String,
    }
}

impl Method for GetMyDescription {
    type Output = BotDescription;
    const NAME: &'static str = "getMyDescription";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Text shown on the bot's profile page and in shared links.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyShortDescription {
    /// 0-120 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyShortDescription {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        short_description: String,
        language_code: String,
    }
}

impl Method for SetMyShortDescription {
    type Output = bool;
    const NAME: &'static str = "setMyShortDescription";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyShortDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl GetMyShortDescription {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        language_code: String,
    }
}

impl Method for GetMyShortDescription {
    type Output = BotShortDescription;
    const NAME: &'static str = "getMyShortDescription";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Change the menu button of one private chat, or the default button when
/// `chat_id` is absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatMenuButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<MenuButton>,
}

impl SetChatMenuButton {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        chat_id: i64,
        menu_button: MenuButton,
    }
}

impl Method for SetChatMenuButton {
    type Output = bool;
    const NAME: &'static str = "setChatMenuButton";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChatMenuButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

impl GetChatMenuButton {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        chat_id: i64,
    }
}

impl Method for GetChatMenuButton {
    type Output = MenuButton;
    const NAME: &'static str = "getChatMenuButton";
    const SHAPE: ResultShape = ResultShape::Entity;
}
