//! Uploaded file metadata.

use serde::{Deserialize, Serialize};

use super::FileId;

/// Metadata of an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub id: FileId,
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Coarse file category derived from a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
    Audio,
    #[default]
    File,
}

impl FileType {
    /// Classifies a MIME type by its top-level type.
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        match mime.split('/').next().map(str::trim) {
            Some("image") => Self::Image,
            Some("video") => Self::Video,
            Some("audio") => Self::Audio,
            _ => Self::File,
        }
    }

    /// Returns the lowercase name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
