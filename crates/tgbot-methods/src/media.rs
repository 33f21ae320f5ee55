//! File-carrying messages and file lookups.
//!
//! The main file of a send method is routed with [`Payload::file`]: a local
//! upload becomes a multipart part named after the parameter. Thumbnails
//! and media group items get their own `file<N>` parts, referenced as
//! `attach://file<N>` through [`Payload::attach`].

use serde::Serialize;
use tgbot_core::{EncodeError, InputFile, Method, Payload, ResultShape};
use tgbot_types::{
    ChatId, File, InputMedia, Message, MessageEntity, ParseMode, ReplyMarkup, ReplyParameters,
    UserProfilePhotos,
};

#[derive(Debug, Clone, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo,
            message_thread_id: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            has_spoiler: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        message_thread_id: i64,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        has_spoiler: bool,
        disable_notification: bool,
        protect_content: bool,
        reply_parameters: ReplyParameters,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendPhoto {
    type Output = Message;
    const NAME: &'static str = "sendPhoto";
    const SHAPE: ResultShape = ResultShape::Entity;

    fn payload(&self) -> Result<Payload, EncodeError> {
        Ok(Payload::from_params(self)?.file("photo", &self.photo))
    }
}

/// Send a general file, up to 50 MB.
#[derive(Debug, Clone, Serialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    pub document: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    /// JPEG under 200 kB, at most 320px wide and tall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            document,
            message_thread_id: None,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        message_thread_id: i64,
        thumbnail: InputFile,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        disable_content_type_detection: bool,
        disable_notification: bool,
        protect_content: bool,
        reply_parameters: ReplyParameters,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendDocument {
    type Output = Message;
    const NAME: &'static str = "sendDocument";
    const SHAPE: ResultShape = ResultShape::Entity;

    fn payload(&self) -> Result<Payload, EncodeError> {
        let payload = Payload::from_params(self)?.file("document", &self.document);
        Ok(match &self.thumbnail {
            Some(thumb) => payload.attach("/thumbnail", thumb),
            None => payload,
        })
    }
}

/// Send an audio file to be shown in the music player.
#[derive(Debug, Clone, Serialize)]
pub struct SendAudio {
    pub chat_id: ChatId,
    pub audio: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAudio {
    pub fn new(chat_id: impl Into<ChatId>, audio: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio,
            message_thread_id: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            performer: None,
            title: None,
            thumbnail: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        message_thread_id: i64,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        duration: i64,
        performer: String,
        title: String,
        thumbnail: InputFile,
        disable_notification: bool,
        protect_content: bool,
        reply_parameters: ReplyParameters,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendAudio {
    type Output = Message;
    const NAME: &'static str = "sendAudio";
    const SHAPE: ResultShape = ResultShape::Entity;

    fn payload(&self) -> Result<Payload, EncodeError> {
        let payload = Payload::from_params(self)?.file("audio", &self.audio);
        Ok(match &self.thumbnail {
            Some(thumb) => payload.attach("/thumbnail", thumb),
            None => payload,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendVideo {
    pub chat_id: ChatId,
    pub video: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideo {
    pub fn new(chat_id: impl Into<ChatId>, video: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            video,
            message_thread_id: None,
            duration: None,
            width: None,
            height: None,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            has_spoiler: None,
            supports_streaming: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        message_thread_id: i64,
        duration: i64,
        width: i64,
        height: i64,
        thumbnail: InputFile,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        has_spoiler: bool,
        supports_streaming: bool,
        disable_notification: bool,
        protect_content: bool,
        reply_parameters: ReplyParameters,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendVideo {
    type Output = Message;
    const NAME: &'static str = "sendVideo";
    const SHAPE: ResultShape = ResultShape::Entity;

    fn payload(&self) -> Result<Payload, EncodeError> {
        let payload = Payload::from_params(self)?.file("video", &self.video);
        Ok(match &self.thumbnail {
            Some(thumb) => payload.attach("/thumbnail", thumb),
            None => payload,
        })
    }
}

/// Send a voice note: OGG/OPUS, MP3 or M4A.
#[derive(Debug, Clone, Serialize)]
pub struct SendVoice {
    pub chat_id: ChatId,
    pub voice: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVoice {
    pub fn new(chat_id: impl Into<ChatId>, voice: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice,
            message_thread_id: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        message_thread_id: i64,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        duration: i64,
        disable_notification: bool,
        protect_content: bool,
        reply_parameters: ReplyParameters,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendVoice {
    type Output = Message;
    const NAME: &'static str = "sendVoice";
    const SHAPE: ResultShape = ResultShape::Entity;

    fn payload(&self) -> Result<Payload, EncodeError> {
        Ok(Payload::from_params(self)?.file("voice", &self.voice))
    }
}

/// Send 2-10 items as an album. Documents and audio can only be grouped
/// with items of the same kind.
#[derive(Debug, Clone, Serialize)]
pub struct SendMediaGroup {
    pub chat_id: ChatId,
    pub media: Vec<InputMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendMediaGroup {
    pub fn new<I>(chat_id: impl Into<ChatId>, media: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<InputMedia>,
    {
        Self {
            chat_id: chat_id.into(),
            media: media.into_iter().map(Into::into).collect(),
            message_thread_id: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
        }
    }

    optional_setters! {
        message_thread_id: i64,
        disable_notification: bool,
        protect_content: bool,
        reply_parameters: ReplyParameters,
    }
}

impl Method for SendMediaGroup {
    type Output = Vec<Message>;
    const NAME: &'static str = "sendMediaGroup";
    const SHAPE: ResultShape = ResultShape::Collection;

    fn payload(&self) -> Result<Payload, EncodeError> {
        let mut payload = Payload::from_params(self)?;
        for (index, item) in self.media.iter().enumerate() {
            for (key, file) in item.files() {
                payload = payload.attach(&format!("/media/{index}/{key}"), file);
            }
        }
        Ok(payload)
    }
}

/// Prepare a file for download. The link from [`File::download_url`] is
/// valid for at least an hour.
#[derive(Debug, Clone, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Method for GetFile {
    type Output = File;
    const NAME: &'static str = "getFile";
    const SHAPE: ResultShape = ResultShape::Entity;
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }

    optional_setters! {
        offset: i64,
        limit: i64,
    }
}

impl Method for GetUserProfilePhotos {
    type Output = UserProfilePhotos;
    const NAME: &'static str = "getUserProfilePhotos";
    const SHAPE: ResultShape = ResultShape::Entity;
}
