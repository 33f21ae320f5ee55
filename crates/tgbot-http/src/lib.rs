//! # tgbot-http
//!
//! [`Executor`] over HTTPS with `reqwest`. Payloads without uploads are
//! posted as JSON; payloads with uploads become multipart forms where every
//! field is a text part and every upload a file part.
//!
//! Docs: <https://core.telegram.org/bots/api#making-requests>

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use std::time::Duration;
use tgbot_core::config::{ConfigError, TelegramConfig};
use tgbot_core::{Envelope, ExecutionError, Executor, Payload, Upload, UploadSource};
use tracing::{debug, warn};

const LONG_POLL_MARGIN: Duration = Duration::from_secs(5);

/// Executor that talks to a Bot API server.
pub struct HttpExecutor {
    client: reqwest::Client,
    /// `{api_url}/bot{token}`, without a trailing slash.
    base_url: String,
    timeout: Duration,
}

impl HttpExecutor {
    /// Build from config. Fails when no token is configured.
    pub fn new(config: &TelegramConfig) -> Result<Self, ConfigError> {
        let token = config.require_token()?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url(&config.api_url, token),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Reuse an existing client, e.g. one with a proxy configured.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    /// Long polls (`timeout` parameter) get the poll time plus a margin so
    /// the server answers before the client gives up.
    fn request_timeout(&self, payload: &Payload) -> Duration {
        match payload.get("timeout").and_then(Value::as_u64) {
            Some(poll) => self
                .timeout
                .max(Duration::from_secs(poll) + LONG_POLL_MARGIN),
            None => self.timeout,
        }
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    async fn execute(
        &self,
        method: &str,
        payload: Payload,
    ) -> Result<Option<Value>, ExecutionError> {
        let request = self
            .client
            .post(self.endpoint(method))
            .timeout(self.request_timeout(&payload));
        let request = if payload.is_multipart() {
            debug!("telegram {method}: multipart, {} upload(s)", payload.uploads().len());
            let (fields, uploads) = payload.into_parts();
            request.multipart(build_form(fields, uploads).await?)
        } else {
            debug!("telegram {method}: json");
            request.json(payload.fields())
        };

        let resp = request
            .send()
            .await
            .map_err(|e| ExecutionError::transport(format!("telegram {method} failed"), e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            ExecutionError::transport(format!("telegram {method} body read failed"), e)
        })?;

        // Error responses still carry an envelope; the HTTP status is only
        // informative.
        let envelope = Envelope::parse(&body).map_err(|e| {
            warn!("telegram {method} got {status} with unreadable body: {e}");
            e
        })?;
        if !envelope.ok {
            warn!(
                "telegram {method} rejected ({status}): {}",
                envelope.description.as_deref().unwrap_or_default()
            );
        }
        envelope.into_result()
    }
}

fn base_url(api_url: &str, token: &str) -> String {
    format!("{}/bot{token}", api_url.trim_end_matches('/'))
}

/// Form fields are plain text: strings as-is, everything else as JSON.
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn build_form(
    fields: Map<String, Value>,
    uploads: Vec<(String, Upload)>,
) -> Result<Form, ExecutionError> {
    let mut form = Form::new();
    for (key, value) in &fields {
        form = form.text(key.clone(), text_value(value));
    }
    for (part_name, upload) in uploads {
        let data = match upload.source {
            UploadSource::Bytes(data) => data,
            UploadSource::Path(path) => tokio::fs::read(&path).await.map_err(|e| {
                ExecutionError::transport(format!("failed to read {}", path.display()), e)
            })?,
            // Contents come from another part of the same request.
            UploadSource::Attached => continue,
        };
        form = form.part(part_name, Part::bytes(data).file_name(upload.name));
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tgbot_core::InputFile;

    fn config(token: &str) -> TelegramConfig {
        TelegramConfig {
            bot_token: token.to_string(),
            ..TelegramConfig::default()
        }
    }

    #[test]
    fn test_endpoint_format() {
        let exec = HttpExecutor::new(&config("123:abc")).unwrap();
        assert_eq!(
            exec.endpoint("getMe"),
            "https://api.telegram.org/bot123:abc/getMe"
        );
    }

    #[test]
    fn test_custom_api_url_trailing_slash() {
        let mut cfg = config("1:x");
        cfg.api_url = "http://localhost:8081/".into();
        let exec = HttpExecutor::new(&cfg).unwrap();
        assert_eq!(exec.endpoint("close"), "http://localhost:8081/bot1:x/close");
    }

    #[test]
    fn test_missing_token_is_config_error() {
        assert!(matches!(
            HttpExecutor::new(&config("")),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn test_timeout_from_config() {
        let mut cfg = config("1:x");
        cfg.timeout_secs = 65;
        let exec = HttpExecutor::new(&cfg).unwrap();
        assert_eq!(exec.timeout, Duration::from_secs(65));
    }

    #[test]
    fn test_long_poll_timeout_outlasts_poll() {
        let exec = HttpExecutor::new(&config("1:x")).unwrap();
        let poll = Payload::from_params(&json!({"timeout": 30})).unwrap();
        assert_eq!(exec.request_timeout(&poll), Duration::from_secs(35));

        let long = Payload::from_params(&json!({"timeout": 50, "offset": 3})).unwrap();
        assert_eq!(exec.request_timeout(&long), Duration::from_secs(55));
    }

    #[test]
    fn test_short_poll_keeps_configured_timeout() {
        let exec = HttpExecutor::new(&config("1:x")).unwrap();
        let poll = Payload::from_params(&json!({"timeout": 0})).unwrap();
        assert_eq!(exec.request_timeout(&poll), Duration::from_secs(30));
        assert_eq!(exec.request_timeout(&Payload::new()), Duration::from_secs(30));
    }

    #[test]
    fn test_text_value_strings_are_raw() {
        assert_eq!(text_value(&json!("hello")), "hello");
        assert_eq!(text_value(&json!(-100123)), "-100123");
        assert_eq!(text_value(&json!(true)), "true");
        assert_eq!(
            text_value(&json!({"inline_keyboard": []})),
            r#"{"inline_keyboard":[]}"#
        );
    }

    #[tokio::test]
    async fn test_build_form_missing_path_is_transport_error() {
        let payload = Payload::new().file("document", &InputFile::path("/nonexistent/a.pdf"));
        let (fields, uploads) = payload.into_parts();
        let err = build_form(fields, uploads).await.unwrap_err();
        match err {
            ExecutionError::Transport { context, source } => {
                assert!(context.contains("a.pdf"));
                assert!(source.downcast_ref::<std::io::Error>().is_some());
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_build_form_skips_attached_references() {
        let attached = Upload {
            name: "x.jpg".into(),
            source: UploadSource::Attached,
        };
        let form = build_form(Map::new(), vec![("x.jpg".into(), attached)]).await;
        assert!(form.is_ok());
    }
}
