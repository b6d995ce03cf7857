use std::collections::HashSet;

use crate::domain::entities::{Channel, ChannelId, ChannelMap, SimpleChannel};
use crate::domain::errors::{ChannelError, ChannelResult};

/// Maximum number of levels from a root channel to its deepest descendant.
pub const MAX_CHANNEL_DEPTH: usize = 5;
const MAX_CHANNEL_PATH_SLASHES: usize = MAX_CHANNEL_DEPTH - 1;

/// Separator between channel names in a path string.
pub const PATH_SEPARATOR: char = '/';

pub struct ChannelPathResolver;

impl ChannelPathResolver {
    /// Resolves the root-to-channel path of `channel_id`.
    ///
    /// Unknown ids give an empty path. The walk stops silently at a parent
    /// missing from the map and never includes the direct-message parent.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::GraphIntegrity`] if the parent chain loops.
    pub fn resolve_path(
        channel_id: ChannelId,
        channel_map: &ChannelMap,
    ) -> ChannelResult<Vec<SimpleChannel>> {
        let Some(mut channel) = channel_map.get(channel_id) else {
            return Ok(Vec::new());
        };

        let mut path = vec![SimpleChannel::from(channel)];
        let mut seen = HashSet::from([channel.id()]);

        while let Some(parent_id) = channel.parent_id().filter(|p| !p.is_dm_parent()) {
            let Some(parent) = channel_map.get(parent_id) else {
                break;
            };
            if !seen.insert(parent_id) {
                return Err(ChannelError::cycle_at(parent_id));
            }
            path.push(SimpleChannel::from(parent));
            channel = parent;
        }

        path.reverse();
        Ok(path)
    }

    /// Resolves the path of `channel_id` as names joined by `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::GraphIntegrity`] if the parent chain loops.
    pub fn resolve_path_string(
        channel_id: ChannelId,
        channel_map: &ChannelMap,
    ) -> ChannelResult<String> {
        let path = Self::resolve_path(channel_id, channel_map)?;
        Ok(path
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("/"))
    }

    /// Finds the channel whose full path string is exactly `path`.
    #[must_use]
    pub fn find_channel_by_path(path: &str, channel_map: &ChannelMap) -> Option<ChannelId> {
        if path.is_empty() {
            return None;
        }

        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;

        let mut current = channel_map
            .iter()
            .find(|c| c.name() == first && Self::starts_path(c, channel_map))?;

        for segment in segments {
            current = current
                .children()
                .iter()
                .filter_map(|id| channel_map.get(*id))
                .find(|c| c.name() == segment)?;
        }

        Some(current.id())
    }

    /// Returns whether a child channel may be created under `channel_path`.
    #[must_use]
    pub fn can_create_child_channel(channel_path: &str, is_archived: bool) -> bool {
        !is_archived && channel_path.matches(PATH_SEPARATOR).count() < MAX_CHANNEL_PATH_SLASHES
    }

    fn starts_path(channel: &Channel, channel_map: &ChannelMap) -> bool {
        channel
            .parent_id()
            .is_none_or(|p| p.is_dm_parent() || !channel_map.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn chain() -> ChannelMap {
        ChannelMap::from_flat([
            Channel::new(1_u128, "A"),
            Channel::new(2_u128, "B").with_parent(1_u128),
            Channel::new(3_u128, "C").with_parent(2_u128),
        ])
    }

    fn id(value: u128) -> ChannelId {
        ChannelId::from_u128(value)
    }

    #[test]
    fn test_unknown_channel_has_empty_path() {
        let map = chain();
        assert!(ChannelPathResolver::resolve_path(id(99), &map).unwrap().is_empty());
        assert_eq!(
            ChannelPathResolver::resolve_path_string(id(99), &map).unwrap(),
            ""
        );
    }

    #[test]
    fn test_walks_from_root() {
        let map = chain();
        let path = ChannelPathResolver::resolve_path(id(3), &map).unwrap();

        let names: Vec<_> = path.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(path[0].id, id(1));
        assert_eq!(
            ChannelPathResolver::resolve_path_string(id(3), &map).unwrap(),
            "A/B/C"
        );
    }

    #[test]
    fn test_dm_parent_stops_walk() {
        let map = ChannelMap::from_flat([Channel::new(2_u128, "B").with_parent(ChannelId::DM_PARENT)]);

        let path = ChannelPathResolver::resolve_path(id(2), &map).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].name, "B");
    }

    #[test]
    fn test_missing_parent_gives_partial_path() {
        let map = ChannelMap::from_flat([
            Channel::new(2_u128, "B").with_parent(1_u128),
            Channel::new(3_u128, "C").with_parent(2_u128),
        ]);

        assert_eq!(
            ChannelPathResolver::resolve_path_string(id(3), &map).unwrap(),
            "B/C"
        );
    }

    #[test]
    fn test_parent_cycle_is_reported() {
        let map = ChannelMap::from_channels([
            Channel::new(1_u128, "A").with_parent(2_u128),
            Channel::new(2_u128, "B").with_parent(1_u128),
        ]);

        let err = ChannelPathResolver::resolve_path(id(1), &map).unwrap_err();
        assert_eq!(err, ChannelError::cycle_at(id(1)));
    }

    #[test]
    fn test_find_channel_by_path() {
        let map = chain();

        assert_eq!(
            ChannelPathResolver::find_channel_by_path("A/B/C", &map),
            Some(id(3))
        );
        assert_eq!(ChannelPathResolver::find_channel_by_path("A", &map), Some(id(1)));
        assert_eq!(ChannelPathResolver::find_channel_by_path("B/C", &map), None);
        assert_eq!(ChannelPathResolver::find_channel_by_path("A/X", &map), None);
        assert_eq!(ChannelPathResolver::find_channel_by_path("", &map), None);
    }

    #[test_case("a/b/c/d", false, true ; "depth_four_has_room")]
    #[test_case("a/b/c", false, true ; "depth_three_has_room")]
    #[test_case("a", false, true ; "root")]
    #[test_case("a", true, false ; "archived_root")]
    #[test_case("a/b/c/d/e", false, false ; "depth_five_is_full")]
    #[test_case("a/b/c/d/e/f", false, false ; "over_limit")]
    fn test_can_create_child_channel(path: &str, archived: bool, expected: bool) {
        assert_eq!(
            ChannelPathResolver::can_create_child_channel(path, archived),
            expected
        );
    }
}
