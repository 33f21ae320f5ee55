use serde::{Deserialize, Serialize};
use std::fmt;
use tgbot_core::Entity;

use crate::media::Location;
use crate::user::User;

/// A chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The supergroup has topics enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_forum: Option<bool>,
}

impl Chat {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ChatType::Group | ChatType::Supergroup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Target chat: a numeric identifier or a `@channelusername`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(username) => f.write_str(username),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// Actions a non-administrator user is allowed to take in a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_audios: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_documents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_photos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_videos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_video_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_voice_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLocation {
    pub location: Location,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_join_request_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,
    pub user_chat_id: i64,
    pub date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
}

/// Status shown to the other side by `sendChatAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

impl Entity for Chat {}
impl Entity for ChatPhoto {}
impl Entity for ChatPermissions {}
impl Entity for ChatLocation {}
impl Entity for ChatInviteLink {}
impl Entity for ChatJoinRequest {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tgbot_core::DecodeError;

    #[test]
    fn test_chat_group_detection() {
        let group = Chat::decode(json!({"id": -100123, "type": "group"})).unwrap();
        assert!(group.is_group());
        let supergroup = Chat::decode(json!({"id": -100456, "type": "supergroup"})).unwrap();
        assert!(supergroup.is_group());
        let private = Chat::decode(json!({"id": 789, "type": "private"})).unwrap();
        assert!(!private.is_group());
    }

    #[test]
    fn test_chat_type_is_required() {
        let err = Chat::decode(json!({"id": 123})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("type".into()));
    }

    #[test]
    fn test_chat_type_unknown_value() {
        let err = Chat::decode(json!({"id": 1, "type": "forum"})).unwrap_err();
        assert_eq!(err, DecodeError::UnknownVariant("forum".into()));
    }

    #[test]
    fn test_chat_id_forms() {
        assert_eq!(serde_json::to_value(ChatId::from(-1001)).unwrap(), json!(-1001));
        assert_eq!(
            serde_json::to_value(ChatId::from("@news")).unwrap(),
            json!("@news")
        );
        let id: ChatId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id, ChatId::Id(42));
        assert_eq!(ChatId::from("@news").to_string(), "@news");
    }

    #[test]
    fn test_chat_action_wire_names() {
        assert_eq!(
            serde_json::to_value(ChatAction::RecordVideoNote).unwrap(),
            json!("record_video_note")
        );
        assert_eq!(serde_json::to_value(ChatAction::Typing).unwrap(), json!("typing"));
    }

    #[test]
    fn test_permissions_only_set_flags_are_sent() {
        let perms = ChatPermissions {
            can_send_messages: Some(true),
            can_send_polls: Some(false),
            ..Default::default()
        };
        assert_eq!(
            perms.encode().unwrap(),
            json!({"can_send_messages": true, "can_send_polls": false})
        );
    }
}
