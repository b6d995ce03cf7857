//! Stamp (custom emoji) entity.

use serde::{Deserialize, Serialize};

use super::{FileId, StampId, UserId};

/// Custom emoji usable as a message reaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub id: StampId,
    pub name: String,
    pub creator_id: UserId,
    pub file_id: FileId,
    #[serde(default)]
    pub is_unicode: bool,
}

impl Stamp {
    /// Returns the `:name:` form used in message text.
    #[must_use]
    pub fn shortcode(&self) -> String {
        format!(":{}:", self.name)
    }
}
