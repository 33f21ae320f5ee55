//! Editing and deleting sent messages.
//!
//! Edit methods address either a chat message or an inline message through
//! [`MessageTarget`]; the result is the edited message for the former and
//! `true` for the latter.

use serde::Serialize;
use tgbot_core::{Method, ResultShape};
use tgbot_types::{
    ChatId, InlineKeyboardMarkup, LinkPreviewOptions, MessageEntity, MessageOrTrue, ParseMode,
    Poll,
};

/// Which message an edit applies to. Flattened into the method's fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageTarget {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline { inline_message_id: String },
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageText {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            parse_mode: None,
            entities: None,
            link_preview_options: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        parse_mode: ParseMode,
        entities: Vec<MessageEntity>,
        link_preview_options: LinkPreviewOptions,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageText {
    type Output = MessageOrTrue;
    const NAME: &'static str = "editMessageText";
    const SHAPE: ResultShape = ResultShape::Entity;
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageCaption {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// Absent removes the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageCaption {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        show_caption_above_media: bool,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageCaption {
    type Output = MessageOrTrue;
    const NAME: &'static str = "editMessageCaption";
    const SHAPE: ResultShape = ResultShape::Entity;
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageReplyMarkup {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// Absent removes the keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageReplyMarkup {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            reply_markup: None,
        }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageReplyMarkup {
    type Output = MessageOrTrue;
    const NAME: &'static str = "editMessageReplyMarkup";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Stop a poll sent by the bot and return its final state.
#[derive(Debug, Clone, Serialize)]
pub struct StopPoll {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopPoll {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            reply_markup: None,
        }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for StopPoll {
    type Output = Poll;
    const NAME: &'static str = "stopPoll";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Delete a message. Messages older than 48 hours can't be deleted.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

impl Method for DeleteMessage {
    type Output = bool;
    const NAME: &'static str = "deleteMessage";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// Delete 1-100 messages at once. Messages that can't be found are
/// skipped.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessages {
    pub chat_id: ChatId,
    pub message_ids: Vec<i64>,
}

impl DeleteMessages {
    pub fn new(chat_id: impl Into<ChatId>, message_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_ids: message_ids.into_iter().collect(),
        }
    }
}

impl Method for DeleteMessages {
    type Output = bool;
    const NAME: &'static str = "deleteMessages";
    const SHAPE: ResultShape = ResultShape::Boolean;
}
