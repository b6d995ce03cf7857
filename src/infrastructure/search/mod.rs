use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::warn;

use crate::domain::entities::{ChannelId, ChannelMap};
use crate::domain::search::{
    SearchKind, SearchPrefix, SearchProvider, SearchResult, parse_search_query,
};
use crate::domain::services::ChannelPathResolver;

/// A service that performs fuzzy searching using the Skim algorithm.
#[derive(Clone)]
pub struct FuzzySearcher {
    matcher: Arc<SkimMatcherV2>,
}

impl Default for FuzzySearcher {
    fn default() -> Self {
        Self {
            matcher: Arc::new(SkimMatcherV2::default().ignore_case()),
        }
    }
}

impl FuzzySearcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self, choice: &str, pattern: &str) -> Option<i64> {
        self.matcher.fuzzy_match(choice, pattern)
    }
}

/// Search provider ranking channels by their full path.
pub struct ChannelSearchProvider {
    channels: Vec<(ChannelId, String, SearchKind)>,
    searcher: FuzzySearcher,
}

impl ChannelSearchProvider {
    /// Resolves every channel's path once up front. Channels inside a parent
    /// cycle are left out.
    #[must_use]
    pub fn new(channel_map: &ChannelMap) -> Self {
        let channels = channel_map
            .iter()
            .filter_map(|channel| {
                match ChannelPathResolver::resolve_path_string(channel.id(), channel_map) {
                    Ok(path) => {
                        let kind = if channel.is_dm() {
                            SearchKind::DM
                        } else {
                            SearchKind::Channel
                        };
                        Some((channel.id(), path, kind))
                    }
                    Err(e) => {
                        warn!(error = %e, "skipping channel in search index");
                        None
                    }
                }
            })
            .collect();

        Self {
            channels,
            searcher: FuzzySearcher::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[async_trait::async_trait]
impl SearchProvider for ChannelSearchProvider {
    /// Scores every path against `query`. A `#` prefix limits results to
    /// channels and an `@` prefix to direct messages.
    async fn search(&self, query: &str) -> Vec<SearchResult> {
        let (prefix, pattern) = parse_search_query(query);
        let wanted = |kind: SearchKind| match prefix {
            SearchPrefix::Channel => kind == SearchKind::Channel,
            SearchPrefix::User => kind == SearchKind::DM,
            SearchPrefix::None => true,
        };

        let mut results: Vec<SearchResult> = self
            .channels
            .iter()
            .filter(|(_, _, kind)| wanted(*kind))
            .filter_map(|(id, path, kind)| {
                self.searcher
                    .score(path, pattern)
                    .map(|score| SearchResult::new(*id, path.clone(), *kind).with_score(score))
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
        results
    }
}
