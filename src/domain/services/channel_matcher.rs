use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::{Channel, ChannelId, ChannelMap};
use crate::domain::errors::{ChannelError, ChannelResult};

/// How a channel name relates to one query segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    None,
    Partial,
    Perfect,
}

impl MatchKind {
    #[must_use]
    pub fn classify(name: &str, query: &str) -> Self {
        if name == query {
            Self::Perfect
        } else if name.contains(query) {
            Self::Partial
        } else {
            Self::None
        }
    }
}

/// Channels found by a deep match, split by exactness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// Channels whose whole matched path equals the query segments.
    pub perfect_matched: Vec<&'a Channel>,
    /// Channels where at least one segment matched only as a substring.
    pub matched: Vec<&'a Channel>,
}

impl<'a> MatchResult<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.perfect_matched.is_empty() && self.matched.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.perfect_matched.len() + self.matched.len()
    }

    /// Iterates perfect matches first, then partial ones.
    pub fn iter(&self) -> impl Iterator<Item = &'a Channel> + '_ {
        self.perfect_matched
            .iter()
            .chain(self.matched.iter())
            .copied()
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    channel_id: ChannelId,
    position: usize,
    still_perfect: bool,
}

pub struct ChannelDeepMatcher;

impl ChannelDeepMatcher {
    /// Matches consecutive generations of the channel tree against `queries`,
    /// one segment per generation, trying every channel as the first one.
    ///
    /// Only channels in `targets` may end a match; they may still be walked
    /// through when they are not. Results follow map order then child order
    /// and are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::InvalidArgument`] when `queries` is empty and
    /// [`ChannelError::GraphIntegrity`] when a walked path revisits a channel.
    pub fn deep_match<'a, S: AsRef<str>>(
        channel_map: &'a ChannelMap,
        queries: &[S],
        targets: Option<&HashSet<ChannelId>>,
    ) -> ChannelResult<MatchResult<'a>> {
        if queries.is_empty() {
            return Err(ChannelError::invalid_argument(
                "deep match needs at least one path segment",
            ));
        }

        let mut result = MatchResult::default();
        let mut stack = Vec::new();
        let mut trail = Vec::with_capacity(queries.len());

        for start in channel_map.ids() {
            stack.push(Frame {
                channel_id: start,
                position: 0,
                still_perfect: true,
            });
            Self::walk(
                channel_map,
                queries,
                targets,
                &mut stack,
                &mut trail,
                &mut result,
            )?;
        }

        debug!(
            segments = queries.len(),
            perfect = result.perfect_matched.len(),
            partial = result.matched.len(),
            "deep match finished"
        );
        Ok(result)
    }

    /// Splits `path` on `/` and deep matches the segments.
    ///
    /// # Errors
    ///
    /// Same as [`Self::deep_match`].
    pub fn deep_match_path<'a>(
        channel_map: &'a ChannelMap,
        path: &str,
        targets: Option<&HashSet<ChannelId>>,
    ) -> ChannelResult<MatchResult<'a>> {
        let segments: Vec<&str> = path.split('/').collect();
        Self::deep_match(channel_map, &segments, targets)
    }

    fn walk<'a, S: AsRef<str>>(
        channel_map: &'a ChannelMap,
        queries: &[S],
        targets: Option<&HashSet<ChannelId>>,
        stack: &mut Vec<Frame>,
        trail: &mut Vec<ChannelId>,
        result: &mut MatchResult<'a>,
    ) -> ChannelResult<()> {
        while let Some(frame) = stack.pop() {
            // trail[..position] are the ancestors of this frame
            trail.truncate(frame.position);

            let Some(channel) = channel_map.get(frame.channel_id) else {
                continue;
            };
            if trail.contains(&frame.channel_id) {
                return Err(ChannelError::cycle_at(frame.channel_id));
            }

            let kind = MatchKind::classify(channel.name(), queries[frame.position].as_ref());
            if kind == MatchKind::None {
                continue;
            }

            if frame.position + 1 == queries.len() {
                if targets.is_some_and(|t| !t.contains(&frame.channel_id)) {
                    continue;
                }
                if frame.still_perfect && kind == MatchKind::Perfect {
                    result.perfect_matched.push(channel);
                } else {
                    result.matched.push(channel);
                }
                continue;
            }

            trail.push(frame.channel_id);
            let still_perfect = frame.still_perfect && kind == MatchKind::Perfect;
            stack.extend(channel.children().iter().rev().map(|&child| Frame {
                channel_id: child,
                position: frame.position + 1,
                still_perfect,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn id(value: u128) -> ChannelId {
        ChannelId::from_u128(value)
    }

    fn names<'a>(channels: &[&'a Channel]) -> Vec<&'a str> {
        channels.iter().map(|&c| c.name()).collect()
    }

    fn tree() -> ChannelMap {
        ChannelMap::from_flat([
            Channel::new(1_u128, "foo"),
            Channel::new(2_u128, "bar").with_parent(1_u128),
            Channel::new(3_u128, "barbaz").with_parent(1_u128),
            Channel::new(4_u128, "food"),
            Channel::new(5_u128, "bar").with_parent(4_u128),
            Channel::new(6_u128, "qux").with_parent(2_u128),
        ])
    }

    #[test_case("test", MatchKind::Perfect ; "equal")]
    #[test_case("testing", MatchKind::Partial ; "superset")]
    #[test_case("tes", MatchKind::None ; "subset")]
    #[test_case("other", MatchKind::None ; "unrelated")]
    fn test_classify(name: &str, expected: MatchKind) {
        assert_eq!(MatchKind::classify(name, "test"), expected);
    }

    #[test]
    fn test_exact_and_partial_roots() {
        let map = ChannelMap::from_flat([
            Channel::new(1_u128, "test"),
            Channel::new(2_u128, "testing"),
        ]);

        let result = ChannelDeepMatcher::deep_match(&map, &["test"], None).unwrap();
        assert_eq!(names(&result.perfect_matched), ["test"]);
        assert_eq!(names(&result.matched), ["testing"]);
    }

    #[test]
    fn test_partial_ancestor_demotes_exact_leaf() {
        let map = tree();

        let result = ChannelDeepMatcher::deep_match(&map, &["foo", "bar"], None).unwrap();

        let perfect: Vec<_> = result.perfect_matched.iter().map(|c| c.id()).collect();
        let partial: Vec<_> = result.matched.iter().map(|c| c.id()).collect();
        assert_eq!(perfect, [id(2)]);
        assert_eq!(partial, [id(3), id(5)]);
    }

    #[test]
    fn test_target_set_restricts_leaves_only() {
        let map = tree();
        let targets = HashSet::from([id(2), id(6)]);

        let result = ChannelDeepMatcher::deep_match(&map, &["foo", "bar"], Some(&targets)).unwrap();
        assert_eq!(names(&result.perfect_matched), ["bar"]);
        assert!(result.matched.is_empty());

        // "foo" and "bar" are outside the set but still lead to "qux"
        let result =
            ChannelDeepMatcher::deep_match(&map, &["foo", "bar", "qux"], Some(&targets)).unwrap();
        assert_eq!(names(&result.perfect_matched), ["qux"]);
    }

    #[test]
    fn test_any_channel_can_start_a_match() {
        let map = tree();

        let result = ChannelDeepMatcher::deep_match(&map, &["bar", "qux"], None).unwrap();
        assert_eq!(names(&result.perfect_matched), ["qux"]);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_leaf_with_remaining_segments_yields_nothing() {
        let map = tree();
        let result = ChannelDeepMatcher::deep_match(&map, &["barbaz", "x"], None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_sibling_names_are_separate_paths() {
        let map = ChannelMap::from_flat([
            Channel::new(1_u128, "team"),
            Channel::new(2_u128, "dev").with_parent(1_u128),
            Channel::new(3_u128, "dev").with_parent(1_u128),
        ]);

        let result = ChannelDeepMatcher::deep_match_path(&map, "team/dev", None).unwrap();
        assert_eq!(result.perfect_matched.len(), 2);
    }

    #[test]
    fn test_shared_child_is_not_deduplicated() {
        let map = ChannelMap::from_channels([
            Channel::new(1_u128, "a").with_children([3_u128]),
            Channel::new(2_u128, "ab").with_children([3_u128]),
            Channel::new(3_u128, "leaf").with_parent(1_u128),
        ]);

        let result = ChannelDeepMatcher::deep_match(&map, &["a", "leaf"], None).unwrap();
        assert_eq!(result.perfect_matched.len(), 1);
        assert_eq!(result.matched.len(), 1);
        assert_eq!(result.matched[0].id(), id(3));
    }

    #[test]
    fn test_missing_child_is_skipped() {
        let map = ChannelMap::from_channels([
            Channel::new(1_u128, "a").with_children([7_u128, 2_u128]),
            Channel::new(2_u128, "b").with_parent(1_u128),
        ]);

        let result = ChannelDeepMatcher::deep_match(&map, &["a", ""], None).unwrap();
        assert_eq!(names(&result.matched), ["b"]);
    }

    #[test]
    fn test_empty_queries_are_rejected() {
        let map = tree();
        let queries: [&str; 0] = [];

        let err = ChannelDeepMatcher::deep_match(&map, &queries, None).unwrap_err();
        assert!(matches!(err, ChannelError::InvalidArgument { .. }));
    }

    #[test]
    fn test_child_cycle_is_reported() {
        let map = ChannelMap::from_channels([
            Channel::new(1_u128, "loop").with_children([2_u128]),
            Channel::new(2_u128, "loop").with_children([1_u128]),
        ]);

        let err = ChannelDeepMatcher::deep_match(&map, &["loop", "loop", "loop"], None).unwrap_err();
        assert!(matches!(err, ChannelError::GraphIntegrity { .. }));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let map = tree();

        let first = ChannelDeepMatcher::deep_match(&map, &["o", "a"], None).unwrap();
        let second = ChannelDeepMatcher::deep_match(&map, &["o", "a"], None).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
