use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::application::services::{Selection, SuggestionService, file_meta_view};
use crate::domain::entities::{ChannelId, ChannelMap, FileId};
use crate::domain::errors::ChannelError;
use crate::domain::search::{SearchPrefix, SearchProvider, parse_search_query, split_channel_query};
use crate::domain::services::{ChannelDeepMatcher, ChannelPathResolver};
use crate::infrastructure::config::{AppConfig, BrowserSettings, Command};
use crate::infrastructure::search::ChannelSearchProvider;
use crate::infrastructure::snapshot::{self, SnapshotError};
use crate::infrastructure::websocket::receive;
use crate::infrastructure::{EntityStore, FetchRequest};

#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CommandError {
    #[error("unknown channel: {0}")]
    UnknownChannel(ChannelId),
    #[error("`{0}` names a user, use --fuzzy to search direct messages")]
    UserQuery(String),
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs CLI subcommands against a loaded channel snapshot and renders their
/// output as lines.
///
/// Channel moves seen during a replay are applied to the held
/// [`BrowserSettings`]; callers persist them when [`Self::settings_changed`]
/// is set.
pub struct CommandRunner<'a> {
    channels: &'a ChannelMap,
    limit: usize,
    api_base: String,
    settings: BrowserSettings,
    settings_changed: bool,
}

impl<'a> CommandRunner<'a> {
    #[must_use]
    pub fn new(channels: &'a ChannelMap, config: &AppConfig) -> Self {
        Self {
            channels,
            limit: config.search_limit,
            api_base: config.api_base.clone(),
            settings: BrowserSettings::default(),
            settings_changed: false,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: BrowserSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    #[must_use]
    pub fn settings_changed(&self) -> bool {
        self.settings_changed
    }

    /// Runs `command`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown channels, broken channel graphs, user
    /// queries given to the tree search, and unreadable input files.
    pub async fn run(&mut self, command: &Command) -> Result<Vec<String>, CommandError> {
        match command {
            Command::Path { id } => self.path(*id),
            Command::Search {
                query,
                fuzzy: true,
                targets,
            } => Ok(self.fuzzy_search(query, targets).await),
            Command::Search { query, targets, .. } => self.search(query, targets),
            Command::Complete {
                text,
                cursor,
                candidates,
            } => Ok(Self::complete(text, *cursor, candidates)),
            Command::Replay { file, refreshed } => self.replay(file, refreshed.as_deref()).await,
            Command::File { id, files } => self.file(*id, files).await,
        }
    }

    fn path(&self, id: ChannelId) -> Result<Vec<String>, CommandError> {
        let path = ChannelPathResolver::resolve_path_string(id, self.channels)?;
        if path.is_empty() {
            return Err(CommandError::UnknownChannel(id));
        }

        let archived = self.channels.get(id).is_some_and(|c| c.is_archived());
        let mut lines = vec![path.clone()];
        if !ChannelPathResolver::can_create_child_channel(&path, archived) {
            lines.push("(no child channels allowed)".to_string());
        }
        Ok(lines)
    }

    fn search(&self, query: &str, targets: &[ChannelId]) -> Result<Vec<String>, CommandError> {
        if parse_search_query(query).0 == SearchPrefix::User {
            return Err(CommandError::UserQuery(query.to_string()));
        }

        let targets: Option<HashSet<ChannelId>> =
            (!targets.is_empty()).then(|| targets.iter().copied().collect());

        let segments = split_channel_query(query);
        let result = ChannelDeepMatcher::deep_match(self.channels, &segments, targets.as_ref())?;
        let mut lines = Vec::with_capacity(result.len());

        for (label, matched) in [
            ("=", &result.perfect_matched),
            ("~", &result.matched),
        ] {
            for channel in matched.iter().take(self.limit) {
                let path = ChannelPathResolver::resolve_path_string(channel.id(), self.channels)?;
                lines.push(format!("{label} {path}"));
            }
        }

        if lines.is_empty() {
            lines.push("no matches".to_string());
        }
        Ok(lines)
    }

    /// Empty `targets` accept every indexed channel.
    async fn fuzzy_search(&self, query: &str, targets: &[ChannelId]) -> Vec<String> {
        let provider = ChannelSearchProvider::new(self.channels);
        let results: Vec<_> = provider
            .search(query)
            .await
            .into_iter()
            .filter(|r| targets.is_empty() || targets.contains(&r.id))
            .collect();
        debug!(indexed = provider.len(), hits = results.len(), "fuzzy search");

        if results.is_empty() {
            return vec!["no matches".to_string()];
        }
        results
            .iter()
            .take(self.limit)
            .map(|r| format!("{:>4} {} ({})", r.score, r.path, r.kind))
            .collect()
    }

    fn complete(text: &str, cursor: usize, candidates: &[String]) -> Vec<String> {
        let mut service = SuggestionService::new();
        service.process_input(text, Selection::caret(cursor));

        let state = service.state();
        if !state.active {
            return vec!["no completion".to_string()];
        }

        let target = state.target.clone();
        service.update_results(candidates.to_vec());

        let mut lines = vec![
            format!("word: {} [{}..{}]", target.word, target.begin, target.end),
            format!("determined: {}", service.determined()),
        ];
        lines.extend(service.state().results.iter().map(|r| format!("  {r}")));
        lines
    }

    async fn replay(
        &mut self,
        file: &Path,
        refreshed: Option<&Path>,
    ) -> Result<Vec<String>, CommandError> {
        let content = tokio::fs::read_to_string(file)
            .await
            .map_err(|source| CommandError::Read {
                path: file.display().to_string(),
                source,
            })?;

        let store = EntityStore::with_channels(self.channels.clone());
        let (mut applied, mut rejected) = (0_usize, 0_usize);

        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            match receive(line, &store) {
                Ok(_) => applied += 1,
                Err(_) => rejected += 1,
            }
        }
        info!(applied, rejected, "event replay finished");

        let mut lines = vec![
            format!("applied: {applied}"),
            format!("rejected: {rejected}"),
        ];

        if let Some(path) = refreshed {
            lines.extend(self.apply_refetches(&store, path).await?);
        }

        lines.push(format!("channels: {}", store.channels().len()));
        lines.push(format!("online: {}", store.online_count()));
        lines.extend(store.take_pending_fetches().iter().map(|request| match request {
            FetchRequest::Channel(id) => format!("fetch channel {id}"),
            FetchRequest::User(id) => format!("fetch user {id}"),
            FetchRequest::UserGroup(id) => format!("fetch group {id}"),
            FetchRequest::Message(id) => format!("fetch message {id}"),
            FetchRequest::Stamp(id) => format!("fetch stamp {id}"),
        }));
        Ok(lines)
    }

    /// Answers pending channel fetches from a newer snapshot and follows the
    /// resulting moves in the open channel settings.
    async fn apply_refetches(
        &mut self,
        store: &EntityStore,
        path: &Path,
    ) -> Result<Vec<String>, CommandError> {
        let wanted: HashSet<ChannelId> = store
            .pending_fetches()
            .into_iter()
            .filter_map(|request| match request {
                FetchRequest::Channel(id) => Some(id),
                _ => None,
            })
            .collect();

        let mut lines = Vec::new();
        for channel in snapshot::read_channels(path).await? {
            if !wanted.contains(&channel.id()) {
                continue;
            }
            if let Some(moved) = store.upsert_channel(channel) {
                self.settings
                    .update_open_channel_names(&moved.old_path, &moved.new_path);
                self.settings_changed = true;
                lines.push(format!("moved {} -> {}", moved.old_path, moved.new_path));
            }
        }
        Ok(lines)
    }

    async fn file(&self, id: FileId, files: &Path) -> Result<Vec<String>, CommandError> {
        let metas = snapshot::load_file_metas(files).await?;
        let view = file_meta_view(id, &metas, &self.api_base);
        Ok(vec![
            format!("path: {}", view.raw_path),
            format!("type: {}", view.file_type),
            format!("size: {}", view.size),
            format!("icon: {}", view.icon_name),
        ])
    }
}
