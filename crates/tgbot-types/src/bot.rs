//! Bot profile: commands, scopes, names, descriptions, and menu buttons.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tgbot_core::codec::decode_tagged;
use tgbot_core::Entity;

use crate::chat::ChatId;
use crate::keyboard::WebAppInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits, underscores.
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDescription {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotShortDescription {
    pub short_description: String,
}

/// The set of users a command list applies to, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    Default,
    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat(BotCommandScopeChat),
    ChatAdministrators(BotCommandScopeChat),
    ChatMember(BotCommandScopeChatMember),
}

impl BotCommandScope {
    const VARIANTS: &'static [&'static str] = &[
        "default",
        "all_private_chats",
        "all_group_chats",
        "all_chat_administrators",
        "chat",
        "chat_administrators",
        "chat_member",
    ];

    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        Self::Chat(BotCommandScopeChat {
            chat_id: chat_id.into(),
        })
    }

    pub fn chat_administrators(chat_id: impl Into<ChatId>) -> Self {
        Self::ChatAdministrators(BotCommandScopeChat {
            chat_id: chat_id.into(),
        })
    }

    pub fn chat_member(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self::ChatMember(BotCommandScopeChatMember {
            chat_id: chat_id.into(),
            user_id,
        })
    }
}

impl<'de> Deserialize<'de> for BotCommandScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode_tagged(deserializer, "type", Self::VARIANTS, |tag, value| match tag {
            "default" => Ok(Self::Default),
            "all_private_chats" => Ok(Self::AllPrivateChats),
            "all_group_chats" => Ok(Self::AllGroupChats),
            "all_chat_administrators" => Ok(Self::AllChatAdministrators),
            "chat" => serde_json::from_value(value).map(Self::Chat),
            "chat_administrators" => serde_json::from_value(value).map(Self::ChatAdministrators),
            "chat_member" => serde_json::from_value(value).map(Self::ChatMember),
            other => Err(de::Error::unknown_variant(other, Self::VARIANTS)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChat {
    pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

/// The bot's menu button in a private chat, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    Commands,
    WebApp(MenuButtonWebApp),
    Default,
}

impl MenuButton {
    const VARIANTS: &'static [&'static str] = &["commands", "web_app", "default"];
}

impl<'de> Deserialize<'de> for MenuButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode_tagged(deserializer, "type", Self::VARIANTS, |tag, value| match tag {
            "commands" => Ok(Self::Commands),
            "web_app" => serde_json::from_value(value).map(Self::WebApp),
            "default" => Ok(Self::Default),
            other => Err(de::Error::unknown_variant(other, Self::VARIANTS)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonWebApp {
    pub text: String,
    pub web_app: WebAppInfo,
}

impl Entity for BotCommand {}
impl Entity for BotName {}
impl Entity for BotDescription {}
impl Entity for BotShortDescription {}
impl Entity for BotCommandScope {}
impl Entity for BotCommandScopeChat {}
impl Entity for BotCommandScopeChatMember {}
impl Entity for MenuButton {}
impl Entity for MenuButtonWebApp {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tgbot_core::DecodeError;

    #[test]
    fn test_every_scope_resolves_and_round_trips() {
        let cases = [
            (json!({"type": "default"}), BotCommandScope::Default),
            (json!({"type": "all_private_chats"}), BotCommandScope::AllPrivateChats),
            (json!({"type": "all_group_chats"}), BotCommandScope::AllGroupChats),
            (
                json!({"type": "all_chat_administrators"}),
                BotCommandScope::AllChatAdministrators,
            ),
            (json!({"type": "chat", "chat_id": -100}), BotCommandScope::chat(-100)),
            (
                json!({"type": "chat_administrators", "chat_id": "@grp"}),
                BotCommandScope::chat_administrators("@grp"),
            ),
            (
                json!({"type": "chat_member", "chat_id": -100, "user_id": 7}),
                BotCommandScope::chat_member(-100, 7),
            ),
        ];
        for (wire, expected) in cases {
            let scope = BotCommandScope::decode(wire.clone()).unwrap();
            assert_eq!(scope, expected);
            assert_eq!(scope.encode().unwrap(), wire);
        }
    }

    #[test]
    fn test_scope_unknown_type() {
        let err = BotCommandScope::decode(json!({"type": "everyone"})).unwrap_err();
        assert_eq!(err, DecodeError::UnknownVariant("everyone".into()));
    }

    #[test]
    fn test_scope_chat_requires_chat_id() {
        let err = BotCommandScope::decode(json!({"type": "chat"})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("chat_id".into()));
    }

    #[test]
    fn test_menu_button_variants() {
        assert_eq!(
            MenuButton::decode(json!({"type": "commands"})).unwrap(),
            MenuButton::Commands
        );
        assert_eq!(
            MenuButton::decode(json!({"type": "default"})).unwrap(),
            MenuButton::Default
        );
        let wire = json!({"type": "web_app", "text": "Open", "web_app": {"url": "https://app.example"}});
        let button = MenuButton::decode(wire.clone()).unwrap();
        assert!(matches!(button, MenuButton::WebApp(ref b) if b.text == "Open"));
        assert_eq!(button.encode().unwrap(), wire);
    }

    #[test]
    fn test_menu_button_unknown_type() {
        let err = MenuButton::decode(json!({"type": "bogus"})).unwrap_err();
        assert_eq!(err, DecodeError::UnknownVariant("bogus".into()));
    }

    #[test]
    fn test_bot_command_collection_order() {
        let wire = json!([
            {"command": "start", "description": "Start"},
            {"command": "help", "description": "Help"}
        ]);
        let commands: Vec<BotCommand> = tgbot_core::codec::decode_array(wire.clone()).unwrap();
        assert_eq!(commands[0].command, "start");
        assert_eq!(tgbot_core::codec::encode_array(&commands).unwrap(), wire);
    }
}
