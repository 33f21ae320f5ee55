//! Wire payload projection of a method.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EncodeError;
use crate::input_file::{InputFile, Upload, UploadSource, ATTACH_PREFIX};

/// The parameters of one method call: a JSON object plus any local uploads.
///
/// A payload with uploads must be sent as multipart form data; otherwise
/// it is sent as a plain JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
    uploads: Vec<(String, Upload)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a parameter struct. Absent options are skipped by the
    /// struct's own serde attributes; a unit struct yields an empty payload.
    pub fn from_params<T: Serialize + ?Sized>(params: &T) -> Result<Self, EncodeError> {
        let fields = match serde_json::to_value(params)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(EncodeError(<serde_json::Error as serde::ser::Error>::custom(
                    format!("method parameters must encode to an object, got {other}"),
                )))
            }
        };
        Ok(Self {
            fields,
            uploads: Vec::new(),
        })
    }

    /// Route a file parameter.
    ///
    /// A local upload is removed from the JSON fields and sent as a part
    /// named after the field. Strings and `attach://` references stay as
    /// they are.
    pub fn file(mut self, field: &str, file: &InputFile) -> Self {
        if let InputFile::Upload(upload) = file {
            if upload.source != UploadSource::Attached {
                self.fields.remove(field);
                self.uploads.push((field.to_string(), upload.clone()));
            }
        }
        self
    }

    pub fn optional_file(self, field: &str, file: Option<&InputFile>) -> Self {
        match file {
            Some(file) => self.file(field, file),
            None => self,
        }
    }

    /// Register a file referenced from inside the payload, at the JSON
    /// pointer `at` (e.g. `/thumbnail`, `/media/0/media`).
    ///
    /// Each distinct upload gets its own `file<N>` part and the value at
    /// `at` is rewritten to `attach://file<N>`. Passing the same upload
    /// again reuses its part.
    pub fn attach(mut self, at: &str, file: &InputFile) -> Self {
        let upload = match file {
            InputFile::Upload(upload) if upload.source != UploadSource::Attached => upload,
            _ => return self,
        };
        let part = match self.uploads.iter().find(|(_, existing)| existing == upload) {
            Some((name, _)) => name.clone(),
            None => {
                let name = self.free_part_name();
                self.uploads.push((name.clone(), upload.clone()));
                name
            }
        };

        let mut root = Value::Object(std::mem::take(&mut self.fields));
        if let Some(slot) = root.pointer_mut(at) {
            *slot = Value::String(format!("{ATTACH_PREFIX}{part}"));
        }
        if let Value::Object(fields) = root {
            self.fields = fields;
        }
        self
    }

    fn free_part_name(&self) -> String {
        (0..)
            .map(|n| format!("file{n}"))
            .find(|name| self.uploads.iter().all(|(taken, _)| taken != name))
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn uploads(&self) -> &[(String, Upload)] {
        &self.uploads
    }

    pub fn is_multipart(&self) -> bool {
        !self.uploads.is_empty()
    }

    pub fn into_parts(self) -> (Map<String, Value>, Vec<(String, Upload)>) {
        (self.fields, self.uploads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Params {
        chat_id: i64,
        photo: InputFile,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    }

    #[derive(Serialize)]
    struct Empty;

    #[test]
    fn test_unit_params_are_empty() {
        let payload = Payload::from_params(&Empty).unwrap();
        assert!(payload.fields().is_empty());
        assert!(!payload.is_multipart());
    }

    #[test]
    fn test_string_file_stays_json() {
        let params = Params {
            chat_id: 1,
            photo: InputFile::file_id("AAA"),
            caption: None,
        };
        let payload = Payload::from_params(&params).unwrap().file("photo", &params.photo);
        assert!(!payload.is_multipart());
        assert_eq!(payload.get("photo"), Some(&json!("AAA")));
        assert!(payload.get("caption").is_none());
    }

    #[test]
    fn test_upload_becomes_part_named_after_field() {
        let params = Params {
            chat_id: 1,
            photo: InputFile::bytes("cat.png", vec![1, 2, 3]),
            caption: Some("cat".into()),
        };
        let payload = Payload::from_params(&params).unwrap().file("photo", &params.photo);
        assert!(payload.is_multipart());
        assert!(payload.get("photo").is_none());
        assert_eq!(payload.uploads()[0].0, "photo");
        assert_eq!(payload.get("caption"), Some(&json!("cat")));
    }

    #[test]
    fn test_attach_reuses_part_for_same_upload() {
        let file = InputFile::bytes("a.jpg", vec![0]);
        let payload = Payload::from_params(&json!({"a": "x", "b": "y"}))
            .unwrap()
            .attach("/a", &file)
            .attach("/b", &file);
        assert_eq!(payload.uploads().len(), 1);
        assert_eq!(payload.uploads()[0].0, "file0");
        assert_eq!(payload.get("a"), Some(&json!("attach://file0")));
        assert_eq!(payload.get("b"), Some(&json!("attach://file0")));
    }

    #[test]
    fn test_attach_same_name_different_contents() {
        let payload = Payload::from_params(&json!({"items": [{"m": "x"}, {"m": "y"}]}))
            .unwrap()
            .attach("/items/0/m", &InputFile::bytes("img.jpg", vec![1]))
            .attach("/items/1/m", &InputFile::bytes("img.jpg", vec![2]));
        let parts: Vec<&str> = payload.uploads().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(parts, vec!["file0", "file1"]);
        assert_eq!(
            payload.get("items"),
            Some(&json!([{"m": "attach://file0"}, {"m": "attach://file1"}]))
        );
        assert_eq!(payload.uploads()[1].1.name, "img.jpg");
    }

    #[test]
    fn test_attach_ignores_remote_files() {
        let payload = Payload::from_params(&json!({"thumbnail": "AAA"}))
            .unwrap()
            .attach("/thumbnail", &InputFile::file_id("AAA"));
        assert!(!payload.is_multipart());
        assert_eq!(payload.get("thumbnail"), Some(&json!("AAA")));
    }

    #[test]
    fn test_non_object_params_rejected() {
        assert!(Payload::from_params(&42).is_err());
    }
}
