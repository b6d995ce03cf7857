use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::ChannelId;
use super::services::PATH_SEPARATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    Channel,
    DM,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel => write!(f, "Channel"),
            Self::DM => write!(f, "DM"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ChannelId,
    pub path: String,
    pub kind: SearchKind,
    pub score: i64,
}

impl SearchResult {
    pub fn new(id: ChannelId, path: impl Into<String>, kind: SearchKind) -> Self {
        Self {
            id,
            path: path.into(),
            kind,
            score: 0,
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }
}

#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Vec<SearchResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPrefix {
    Channel,
    User,
    None,
}

impl SearchPrefix {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Channel),
            '@' => Some(Self::User),
            _ => None,
        }
    }
}

#[must_use]
pub fn parse_search_query(query: &str) -> (SearchPrefix, &str) {
    let trimmed = query.trim();
    if let Some(c) = trimmed.chars().next()
        && let Some(prefix) = SearchPrefix::from_char(c)
    {
        return (prefix, trimmed[c.len_utf8()..].trim());
    }
    (SearchPrefix::None, trimmed)
}

/// Splits a channel query into path segments for deep matching.
///
/// A trailing `/` keeps an empty last segment, which matches every child.
/// User queries (`@name`) yield no segments.
#[must_use]
pub fn split_channel_query(query: &str) -> Vec<&str> {
    let (prefix, body) = parse_search_query(query);
    if prefix == SearchPrefix::User || body.is_empty() {
        return Vec::new();
    }
    body.split(PATH_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_query() {
        assert_eq!(
            parse_search_query("#general"),
            (SearchPrefix::Channel, "general")
        );
        assert_eq!(parse_search_query("@user"), (SearchPrefix::User, "user"));
        assert_eq!(
            parse_search_query("generic"),
            (SearchPrefix::None, "generic")
        );
        assert_eq!(parse_search_query(""), (SearchPrefix::None, ""));
        assert_eq!(
            parse_search_query(" # team/dev "),
            (SearchPrefix::Channel, "team/dev")
        );
    }

    #[test]
    fn test_split_channel_query() {
        assert_eq!(split_channel_query("#team/dev"), ["team", "dev"]);
        assert_eq!(split_channel_query("team/"), ["team", ""]);
        assert!(split_channel_query("  ").is_empty());
        assert!(split_channel_query("@alice").is_empty());
    }
}
