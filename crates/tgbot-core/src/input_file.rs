//! The "any file reference" sum type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

pub(crate) const ATTACH_PREFIX: &str = "attach://";

/// A file parameter: a local upload, a file id already on the servers, or
/// an HTTP URL the servers fetch themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    Upload(Upload),
    FileId(String),
    Url(String),
}

/// A local file sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Part file name; also the `attach://` reference name.
    pub name: String,
    pub source: UploadSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// Read from disk when the request is sent.
    Path(PathBuf),
    /// In-memory contents.
    Bytes(Vec<u8>),
    /// Contents travel in another part of the same request.
    Attached,
}

impl InputFile {
    /// Upload a file from disk, named after its final path component.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self::Upload(Upload {
            name,
            source: UploadSource::Path(path),
        })
    }

    /// Upload in-memory bytes under the given file name.
    pub fn bytes(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Upload(Upload {
            name: name.into(),
            source: UploadSource::Bytes(data.into()),
        })
    }

    pub fn file_id(id: impl Into<String>) -> Self {
        Self::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn as_upload(&self) -> Option<&Upload> {
        match self {
            Self::Upload(upload) => Some(upload),
            Self::FileId(_) | Self::Url(_) => None,
        }
    }

    /// The string form sent in a JSON payload.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Upload(upload) => format!("{ATTACH_PREFIX}{}", upload.name),
            Self::FileId(id) => id.clone(),
            Self::Url(url) => url.clone(),
        }
    }

    /// Resolve a wire string: local reference first, then URL, then file id.
    pub fn from_wire(value: &str) -> Self {
        if let Some(name) = value.strip_prefix(ATTACH_PREFIX) {
            return Self::Upload(Upload {
                name: name.to_string(),
                source: UploadSource::Attached,
            });
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return Self::Url(value.to_string());
        }
        Self::FileId(value.to_string())
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_priority() {
        assert_eq!(
            InputFile::from_wire("attach://cat.jpg"),
            InputFile::Upload(Upload {
                name: "cat.jpg".into(),
                source: UploadSource::Attached
            })
        );
        assert_eq!(
            InputFile::from_wire("https://example.com/cat.jpg"),
            InputFile::url("https://example.com/cat.jpg")
        );
        assert_eq!(
            InputFile::from_wire("AgACAgIAAxkBAAIB"),
            InputFile::file_id("AgACAgIAAxkBAAIB")
        );
    }

    #[test]
    fn test_path_upload_named_after_file() {
        let file = InputFile::path("/tmp/photos/cat.png");
        assert_eq!(file.as_upload().unwrap().name, "cat.png");
        assert_eq!(file.to_wire(), "attach://cat.png");
    }

    #[test]
    fn test_strings_pass_through() {
        let id = serde_json::to_value(InputFile::file_id("abc")).unwrap();
        assert_eq!(id, serde_json::json!("abc"));
        let url: InputFile = serde_json::from_value(serde_json::json!("http://x/y")).unwrap();
        assert_eq!(url, InputFile::url("http://x/y"));
        assert!(url.as_upload().is_none());
    }
}
