//! Incoming updates and webhook status.

use serde::{Deserialize, Serialize};
use tgbot_core::Entity;

use crate::chat::ChatJoinRequest;
use crate::chat_member::ChatMemberUpdated;
use crate::media::{Poll, PollAnswer};
use crate::message::{MaybeInaccessibleMessage, Message};
use crate::user::User;

/// An incoming update. At most one of the optional fields is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Identifiers increase sequentially; the next poll offset is the
    /// last seen identifier plus one.
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_join_request: Option<ChatJoinRequest>,
}

impl Update {
    /// The message carried by this update, whichever field holds it.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

/// An incoming callback query from an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MaybeInaccessibleMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// Current webhook status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty when the bot uses `getUpdates`.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl Entity for Update {}
impl Entity for CallbackQuery {}
impl Entity for WebhookInfo {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_with_message() {
        let update = Update::decode(json!({
            "update_id": 10,
            "message": {
                "message_id": 1,
                "date": 1700000000,
                "chat": {"id": 5, "type": "private"},
                "text": "/start"
            }
        }))
        .unwrap();
        assert_eq!(update.any_message().unwrap().text.as_deref(), Some("/start"));
        assert!(update.callback_query.is_none());
    }

    #[test]
    fn test_update_channel_post_is_found() {
        let update = Update::decode(json!({
            "update_id": 11,
            "channel_post": {
                "message_id": 2,
                "date": 1700000000,
                "chat": {"id": -1001, "type": "channel", "title": "News"},
                "text": "post"
            }
        }))
        .unwrap();
        assert_eq!(update.any_message().unwrap().message_id, 2);
    }

    #[test]
    fn test_callback_query_with_inaccessible_message() {
        let query = CallbackQuery::decode(json!({
            "id": "q1",
            "from": {"id": 3, "is_bot": false, "first_name": "C"},
            "message": {"chat": {"id": 3, "type": "private"}, "message_id": 8, "date": 0},
            "chat_instance": "ci",
            "data": "yes"
        }))
        .unwrap();
        assert_eq!(query.message.as_ref().unwrap().message_id(), 8);
        assert!(query.message.unwrap().accessible().is_none());
    }

    #[test]
    fn test_webhook_info_round_trip() {
        let wire = json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 0,
            "allowed_updates": ["message", "callback_query"]
        });
        let info = WebhookInfo::decode(wire.clone()).unwrap();
        assert!(info.url.is_empty());
        assert_eq!(info.encode().unwrap(), wire);
    }
}
