//! Chat member statuses, discriminated by `status`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tgbot_core::codec::decode_tagged;
use tgbot_core::Entity;

use crate::chat::{Chat, ChatInviteLink};
use crate::user::User;

/// Information about one member of a chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    #[serde(rename = "administrator")]
    Administrator(ChatMemberAdministrator),
    #[serde(rename = "member")]
    Member(ChatMemberMember),
    #[serde(rename = "restricted")]
    Restricted(ChatMemberRestricted),
    #[serde(rename = "left")]
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    const VARIANTS: &'static [&'static str] = &[
        "creator",
        "administrator",
        "member",
        "restricted",
        "left",
        "kicked",
    ];

    pub fn user(&self) -> &User {
        match self {
            Self::Owner(m) => &m.user,
            Self::Administrator(m) => &m.user,
            Self::Member(m) => &m.user,
            Self::Restricted(m) => &m.user,
            Self::Left(m) => &m.user,
            Self::Banned(m) => &m.user,
        }
    }

    /// The wire discriminant.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Owner(_) => "creator",
            Self::Administrator(_) => "administrator",
            Self::Member(_) => "member",
            Self::Restricted(_) => "restricted",
            Self::Left(_) => "left",
            Self::Banned(_) => "kicked",
        }
    }

    /// Whether the user is currently in the chat.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
            Self::Restricted(m) => m.is_member,
            Self::Left(_) | Self::Banned(_) => false,
        }
    }
}

impl<'de> Deserialize<'de> for ChatMember {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode_tagged(deserializer, "status", Self::VARIANTS, |tag, value| match tag {
            "creator" => serde_json::from_value(value).map(Self::Owner),
            "administrator" => serde_json::from_value(value).map(Self::Administrator),
            "member" => serde_json::from_value(value).map(Self::Member),
            "restricted" => serde_json::from_value(value).map(Self::Restricted),
            "left" => serde_json::from_value(value).map(Self::Left),
            "kicked" => serde_json::from_value(value).map(Self::Banned),
            other => Err(de::Error::unknown_variant(other, Self::VARIANTS)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    /// Channels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    /// Channels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
    /// Subscription expiry, unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    /// 0 means restricted forever.
    pub until_date: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// 0 means banned forever.
    pub until_date: i64,
}

/// Changes in the status of a chat member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_join_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_chat_folder_invite_link: Option<bool>,
}

impl Entity for ChatMember {}
impl Entity for ChatMemberOwner {}
impl Entity for ChatMemberAdministrator {}
impl Entity for ChatMemberMember {}
impl Entity for ChatMemberRestricted {}
impl Entity for ChatMemberLeft {}
impl Entity for ChatMemberBanned {}
impl Entity for ChatMemberUpdated {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tgbot_core::DecodeError;

    fn user() -> Value {
        json!({"id": 42, "is_bot": false, "first_name": "Ann"})
    }

    fn restricted_flags(is_member: bool) -> Value {
        json!({
            "status": "restricted",
            "user": user(),
            "is_member": is_member,
            "can_send_messages": false,
            "can_send_audios": false,
            "can_send_documents": false,
            "can_send_photos": false,
            "can_send_videos": false,
            "can_send_video_notes": false,
            "can_send_voice_notes": false,
            "can_send_polls": false,
            "can_send_other_messages": false,
            "can_add_web_page_previews": false,
            "can_change_info": false,
            "can_invite_users": false,
            "can_pin_messages": false,
            "can_manage_topics": false,
            "until_date": 0
        })
    }

    fn minimal(status: &str) -> Value {
        match status {
            "creator" => json!({"status": status, "user": user(), "is_anonymous": false}),
            "administrator" => json!({
                "status": status,
                "user": user(),
                "can_be_edited": false,
                "is_anonymous": false,
                "can_manage_chat": true,
                "can_delete_messages": true,
                "can_manage_video_chats": false,
                "can_restrict_members": true,
                "can_promote_members": false,
                "can_change_info": false,
                "can_invite_users": true
            }),
            "restricted" => restricted_flags(true),
            "kicked" => json!({"status": status, "user": user(), "until_date": 0}),
            _ => json!({"status": status, "user": user()}),
        }
    }

    #[test]
    fn test_every_status_resolves() {
        for status in ChatMember::VARIANTS {
            let member = ChatMember::decode(minimal(status)).unwrap();
            assert_eq!(member.status(), *status);
            assert_eq!(member.user().id, 42);
        }
    }

    #[test]
    fn test_round_trip_keeps_status() {
        for status in ChatMember::VARIANTS {
            let wire = minimal(status);
            let member = ChatMember::decode(wire.clone()).unwrap();
            assert_eq!(member.encode().unwrap(), wire);
        }
    }

    #[test]
    fn test_unknown_status_is_error() {
        let err = ChatMember::decode(json!({"status": "owner", "user": user()})).unwrap_err();
        assert_eq!(err, DecodeError::UnknownVariant("owner".into()));
    }

    #[test]
    fn test_missing_status_is_error() {
        let err = ChatMember::decode(json!({"user": user()})).unwrap_err();
        assert_eq!(err, DecodeError::UnknownVariant(String::new()));
    }

    #[test]
    fn test_variant_missing_field() {
        let err = ChatMember::decode(json!({"status": "kicked", "user": user()})).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("until_date".into()));
    }

    #[test]
    fn test_presence() {
        assert!(ChatMember::decode(restricted_flags(true)).unwrap().is_present());
        assert!(!ChatMember::decode(restricted_flags(false)).unwrap().is_present());
        assert!(!ChatMember::decode(minimal("left")).unwrap().is_present());
    }

    #[test]
    fn test_chat_member_updated() {
        let update = ChatMemberUpdated::decode(json!({
            "chat": {"id": -100, "type": "supergroup", "title": "G"},
            "from": user(),
            "date": 1700000000,
            "old_chat_member": minimal("left"),
            "new_chat_member": minimal("member")
        }))
        .unwrap();
        assert!(matches!(update.old_chat_member, ChatMember::Left(_)));
        assert!(matches!(update.new_chat_member, ChatMember::Member(_)));
    }
}
