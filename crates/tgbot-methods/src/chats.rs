//! Chat administration and callback answers.

use serde::Serialize;
use tgbot_core::{Method, ResultShape};
use tgbot_types::{ChatId, ChatInviteLink, ChatMember, ChatPermissions};

/// Ban a user. In groups and supergroups the user can't rejoin through
/// invite links until unbanned.
#[derive(Debug, Clone, Serialize)]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time; under 30 seconds or over 366 days from now means forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

impl BanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
            revoke_messages: None,
        }
    }

    optional_setters! {
        until_date: i64,
        revoke_messages: bool,
    }
}

impl Method for BanChatMember {
    type Output = bool;
    const NAME: &'static str = "banChatMember";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Do nothing if the user is not banned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

impl UnbanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            only_if_banned: None,
        }
    }

    optional_setters! {
        only_if_banned: bool,
    }
}

impl Method for UnbanChatMember {
    type Output = bool;
    const NAME: &'static str = "unbanChatMember";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// Restrict a supergroup member. Pass all permissions as `true` to lift
/// restrictions.
#[derive(Debug, Clone, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_independent_chat_permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

impl RestrictChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            permissions,
            use_independent_chat_permissions: None,
            until_date: None,
        }
    }

    optional_setters! {
        use_independent_chat_permissions: bool,
        until_date: i64,
    }
}

impl Method for RestrictChatMember {
    type Output = bool;
    const NAME: &'static str = "restrictChatMember";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl LeaveChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Method for LeaveChat {
    type Output = bool;
    const NAME: &'static str = "leaveChat";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    /// 1-128 characters.
    pub title: String,
}

impl SetChatTitle {
    pub fn new(chat_id: impl Into<ChatId>, title: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            title: title.into(),
        }
    }
}

impl Method for SetChatTitle {
    type Output = bool;
    const NAME: &'static str = "setChatTitle";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// Absent clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SetChatDescription {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            description: None,
        }
    }

    optional_setters! {
        description: String,
    }
}

impl Method for SetChatDescription {
    type Output = bool;
    const NAME: &'static str = "setChatDescription";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Serialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl PinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }

    optional_setters! {
        disable_notification: bool,
    }
}

impl Method for PinChatMessage {
    type Output = bool;
    const NAME: &'static str = "pinChatMessage";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// Unpin one message, or the most recent pin when `message_id` is absent.
#[derive(Debug, Clone, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

impl UnpinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id: None,
        }
    }

    optional_setters! {
        message_id: i64,
    }
}

impl Method for UnpinChatMessage {
    type Output = bool;
    const NAME: &'static str = "unpinChatMessage";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Serialize)]
pub struct UnpinAllChatMessages {
    pub chat_id: ChatId,
}

impl UnpinAllChatMessages {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Method for UnpinAllChatMessages {
    type Output = bool;
    const NAME: &'static str = "unpinAllChatMessages";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// Generate a new primary invite link; the previous one is revoked.
#[derive(Debug, Clone, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl ExportChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Method for ExportChatInviteLink {
    type Output = String;
    const NAME: &'static str = "exportChatInviteLink";
    const SHAPE: ResultShape = ResultShape::Primitive;
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateChatInviteLink {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    /// 1-99999.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i64>,
    /// Can't be combined with `member_limit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates_join_request: Option<bool>,
}

impl CreateChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            name: None,
            expire_date: None,
            member_limit: None,
            creates_join_request: None,
        }
    }

    optional_setters! {
        name: String,
        expire_date: i64,
        member_limit: i64,
        creates_join_request: bool,
    }
}

impl Method for CreateChatInviteLink {
    type Output = ChatInviteLink;
    const NAME: &'static str = "createChatInviteLink";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Administrators of a chat, other bots excluded.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl GetChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Method for GetChatAdministrators {
    type Output = Vec<ChatMember>;
    const NAME: &'static str = "getChatAdministrators";
    const SHAPE: ResultShape = ResultShape::Collection;
}

#[derive(Debug, Clone, Serialize)]
pub struct GetChatMemberCount {
    pub chat_id: ChatId,
}

impl GetChatMemberCount {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Method for GetChatMemberCount {
    type Output = i64;
    const NAME: &'static str = "getChatMemberCount";
    const SHAPE: ResultShape = ResultShape::Primitive;
}

#[derive(Debug, Clone, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

impl Method for GetChatMember {
    type Output = ChatMember;
    const NAME: &'static str = "getChatMember";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Answer an inline keyboard press. Clients show a progress bar until the
/// query is answered.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    /// 0-200 characters; nothing is shown when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }

    optional_setters! {
        text: String,
        show_alert: bool,
        url: String,
        cache_time: i64,
    }
}

impl Method for AnswerCallbackQuery {
    type Output = bool;
    const NAME: &'static str = "answerCallbackQuery";
    const SHAPE: ResultShape = ResultShape::Boolean;
}
