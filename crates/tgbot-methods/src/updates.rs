//! Bot lifecycle, updates, and webhooks.

use serde::Serialize;
use tgbot_core::{EncodeError, InputFile, Method, Payload, ResultShape};
use tgbot_types::{Update, User, WebhookInfo};

/// Basic information about the bot.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetMe;

impl Method for GetMe {
    type Output = User;
    const NAME: &'static str = "getMe";
    const SHAPE: ResultShape = ResultShape::Entity;
}

/// Log out from the cloud Bot API server.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LogOut;

impl Method for LogOut {
    type Output = bool;
    const NAME: &'static str = "logOut";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// Close the bot instance before moving it to another local server.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Close;

impl Method for Close {
    type Output = bool;
    const NAME: &'static str = "close";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

/// Long-poll for incoming updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpdates {
    /// Last seen `update_id` plus one; earlier updates are confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Long polling timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl GetUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        offset: i64,
        limit: i64,
        timeout: i64,
        allowed_updates: Vec<String>,
    }
}

impl Method for GetUpdates {
    type Output = Vec<Update>;
    const NAME: &'static str = "getUpdates";
    const SHAPE: ResultShape = ResultShape::Collection;
}

/// Switch to webhook delivery.
#[derive(Debug, Clone, Serialize)]
pub struct SetWebhook {
    pub url: String,
    /// Public key certificate, uploaded as a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
    /// Sent back in the `X-Telegram-Bot-Api-Secret-Token` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            certificate: None,
            ip_address: None,
            max_connections: None,
            allowed_updates: None,
            drop_pending_updates: None,
            secret_token: None,
        }
    }

    optional_setters! {
        certificate: InputFile,
        ip_address: String,
        max_connections: i64,
        allowed_updates: Vec<String>,
        drop_pending_updates: bool,
        secret_token: String,
    }
}

impl Method for SetWebhook {
    type Output = bool;
    const NAME: &'static str = "setWebhook";
    const SHAPE: ResultShape = ResultShape::Boolean;

    fn payload(&self) -> Result<Payload, EncodeError> {
        Ok(Payload::from_params(self)?.optional_file("certificate", self.certificate.as_ref()))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl DeleteWebhook {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        drop_pending_updates: bool,
    }
}

impl Method for DeleteWebhook {
    type Output = bool;
    const NAME: &'static str = "deleteWebhook";
    const SHAPE: ResultShape = ResultShape::Boolean;
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetWebhookInfo;

impl Method for GetWebhookInfo {
    type Output = WebhookInfo;
    const NAME: &'static str = "getWebhookInfo";
    const SHAPE: ResultShape = ResultShape::Entity;
}
