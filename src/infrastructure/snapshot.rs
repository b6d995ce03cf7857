use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::domain::entities::{Channel, ChannelMap, FileId, FileMeta};

#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON array of channels.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the file is unreadable or not a channel array.
pub async fn read_channels(path: &Path) -> Result<Vec<Channel>, SnapshotError> {
    let channels: Vec<Channel> = read_json(path).await?;
    debug!(path = %path.display(), count = channels.len(), "channel snapshot read");
    Ok(channels)
}

/// Loads a channel snapshot into a map, filling in children from parent links.
///
/// # Errors
///
/// Same as [`read_channels`].
pub async fn load_channel_map(path: &Path) -> Result<ChannelMap, SnapshotError> {
    Ok(ChannelMap::from_snapshot(read_channels(path).await?))
}

/// Loads a JSON array of file metadata keyed by file id.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the file is unreadable or malformed.
pub async fn load_file_metas(path: &Path) -> Result<HashMap<FileId, FileMeta>, SnapshotError> {
    let metas: Vec<FileMeta> = read_json(path).await?;
    Ok(metas.into_iter().map(|meta| (meta.id, meta)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChannelId;
    use crate::domain::services::ChannelDeepMatcher;

    const PARENT_ONLY: &str = r#"[
        {"id":"00000000-0000-0000-0000-000000000001","name":"team"},
        {"id":"00000000-0000-0000-0000-000000000002","name":"dev",
         "parentId":"00000000-0000-0000-0000-000000000001"}
    ]"#;

    #[tokio::test]
    async fn test_parent_only_snapshot_is_searchable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channels.json");
        std::fs::write(&path, PARENT_ONLY).unwrap();

        let map = load_channel_map(&path).await.unwrap();
        let result = ChannelDeepMatcher::deep_match(&map, &["team", "dev"], None).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.perfect_matched[0].id(), ChannelId::from_u128(2));
    }

    #[tokio::test]
    async fn test_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let err = load_channel_map(&path).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));

        let missing = load_file_metas(&dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(missing, SnapshotError::Read { .. }));
    }

    #[tokio::test]
    async fn test_file_metas_are_keyed_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("files.json");
        std::fs::write(
            &path,
            r#"[{"id":"00000000-0000-0000-0000-000000000007","name":"a.png","mime":"image/png","size":10}]"#,
        )
        .unwrap();

        let metas = load_file_metas(&path).await.unwrap();
        assert_eq!(metas[&FileId::from_u128(7)].name, "a.png");
    }
}
