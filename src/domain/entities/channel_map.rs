//! Insertion-ordered channel lookup table.

use std::collections::HashMap;

use super::{Channel, ChannelId};

/// Lookup from channel id to channel, iterated in insertion order.
///
/// Iteration order is what makes deep-match output stable for an unchanged
/// snapshot, so it must never depend on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMap {
    channels: Vec<Channel>,
    index: HashMap<ChannelId, usize>,
}

impl ChannelMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from channels whose `children` lists are already set.
    ///
    /// A later channel with a repeated id replaces the earlier one in place.
    #[must_use]
    pub fn from_channels(channels: impl IntoIterator<Item = Channel>) -> Self {
        let mut map = Self::new();
        for channel in channels {
            map.insert(channel);
        }
        map
    }

    /// Builds a map from a flat list, deriving every `children` list from the
    /// `parent_id` links in list order.
    #[must_use]
    pub fn from_flat(channels: impl IntoIterator<Item = Channel>) -> Self {
        let mut map = Self::new();
        for mut channel in channels {
            channel.children_mut().clear();
            map.insert(channel);
        }
        map.link_parents();
        map
    }

    /// Builds a map from a server snapshot. Children already listed are kept
    /// in their given order; any child known only through its `parent_id` is
    /// appended after them.
    #[must_use]
    pub fn from_snapshot(channels: impl IntoIterator<Item = Channel>) -> Self {
        let mut map = Self::from_channels(channels);
        map.link_parents();
        map
    }

    fn link_parents(&mut self) {
        let links: Vec<(ChannelId, ChannelId)> = self
            .channels
            .iter()
            .filter_map(|c| c.parent_id().map(|parent| (parent, c.id())))
            .collect();
        for (parent, child) in links {
            if let Some(parent) = self.get_mut(parent)
                && !parent.children().contains(&child)
            {
                parent.children_mut().push(child);
            }
        }
    }

    /// Inserts or replaces a channel without touching any other entry.
    /// Returns the replaced channel, if any.
    pub fn insert(&mut self, channel: Channel) -> Option<Channel> {
        if let Some(&slot) = self.index.get(&channel.id()) {
            return Some(std::mem::replace(&mut self.channels[slot], channel));
        }
        self.index.insert(channel.id(), self.channels.len());
        self.channels.push(channel);
        None
    }

    /// Inserts or replaces a channel and keeps parent `children` lists in sync.
    ///
    /// A replaced channel keeps its known children when the new value carries
    /// none.
    pub fn upsert(&mut self, mut channel: Channel) {
        let id = channel.id();
        let old_parent = self.get(id).and_then(Channel::parent_id);

        if let Some(existing) = self.get(id)
            && channel.children().is_empty()
        {
            *channel.children_mut() = existing.children().to_vec();
        }

        if old_parent != channel.parent_id()
            && let Some(old) = old_parent.and_then(|p| self.get_mut(p))
        {
            old.children_mut().retain(|c| *c != id);
        }

        if let Some(parent) = channel.parent_id().and_then(|p| self.get_mut(p))
            && !parent.children().contains(&id)
        {
            parent.children_mut().push(id);
        }

        self.insert(channel);
    }

    /// Removes a channel and detaches it from its parent.
    pub fn remove(&mut self, id: ChannelId) -> Option<Channel> {
        let slot = self.index.remove(&id)?;
        let removed = self.channels.remove(slot);
        for (i, channel) in self.channels.iter().enumerate().skip(slot) {
            self.index.insert(channel.id(), i);
        }

        if let Some(parent) = removed.parent_id().and_then(|p| self.get_mut(p)) {
            parent.children_mut().retain(|c| *c != id);
        }
        Some(removed)
    }

    /// Returns the channel with the given id.
    #[must_use]
    pub fn get(&self, id: ChannelId) -> Option<&Channel> {
        self.index.get(&id).map(|&slot| &self.channels[slot])
    }

    fn get_mut(&mut self, id: ChannelId) -> Option<&mut Channel> {
        let slot = *self.index.get(&id)?;
        Some(&mut self.channels[slot])
    }

    /// Returns true if the map holds the given id.
    #[must_use]
    pub fn contains(&self, id: ChannelId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates channels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Iterates channel ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.channels.iter().map(Channel::id)
    }

    /// Number of channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl FromIterator<Channel> for ChannelMap {
    fn from_iter<T: IntoIterator<Item = Channel>>(iter: T) -> Self {
        Self::from_channels(iter)
    }
}

impl<'a> IntoIterator for &'a ChannelMap {
    type Item = &'a Channel;
    type IntoIter = std::slice::Iter<'a, Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_derives_children() {
        let map = ChannelMap::from_flat([
            Channel::new(1_u128, "a"),
            Channel::new(2_u128, "b").with_parent(1_u128),
            Channel::new(3_u128, "c").with_parent(1_u128),
        ]);

        let root = map.get(ChannelId::from_u128(1)).unwrap();
        assert_eq!(
            root.children(),
            &[ChannelId::from_u128(2), ChannelId::from_u128(3)]
        );
    }

    #[test]
    fn test_snapshot_with_parent_links_only() {
        let json = r#"[
            {"id":"00000000-0000-0000-0000-000000000001","name":"team"},
            {"id":"00000000-0000-0000-0000-000000000002","name":"dev",
             "parentId":"00000000-0000-0000-0000-000000000001"}
        ]"#;
        let channels: Vec<Channel> = serde_json::from_str(json).unwrap();

        let map = ChannelMap::from_snapshot(channels);

        assert_eq!(
            map.get(ChannelId::from_u128(1)).unwrap().children(),
            &[ChannelId::from_u128(2)]
        );
    }

    #[test]
    fn test_snapshot_keeps_listed_children_first() {
        let map = ChannelMap::from_snapshot([
            Channel::new(1_u128, "team").with_children([3_u128, 2_u128]),
            Channel::new(2_u128, "dev").with_parent(1_u128),
            Channel::new(3_u128, "ops").with_parent(1_u128),
            Channel::new(4_u128, "qa").with_parent(1_u128),
        ]);

        assert_eq!(
            map.get(ChannelId::from_u128(1)).unwrap().children(),
            &[
                ChannelId::from_u128(3),
                ChannelId::from_u128(2),
                ChannelId::from_u128(4)
            ]
        );
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let map: ChannelMap = [
            Channel::new(9_u128, "z"),
            Channel::new(1_u128, "a"),
            Channel::new(5_u128, "m"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = map.iter().map(Channel::name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_upsert_moves_between_parents() {
        let mut map = ChannelMap::from_flat([
            Channel::new(1_u128, "a"),
            Channel::new(2_u128, "b"),
            Channel::new(3_u128, "c").with_parent(1_u128),
        ]);

        map.upsert(Channel::new(3_u128, "c").with_parent(2_u128));

        assert!(map.get(ChannelId::from_u128(1)).unwrap().children().is_empty());
        assert_eq!(
            map.get(ChannelId::from_u128(2)).unwrap().children(),
            &[ChannelId::from_u128(3)]
        );
    }

    #[test]
    fn test_remove_detaches_and_reindexes() {
        let mut map = ChannelMap::from_flat([
            Channel::new(1_u128, "a"),
            Channel::new(2_u128, "b").with_parent(1_u128),
            Channel::new(3_u128, "c"),
        ]);

        let removed = map.remove(ChannelId::from_u128(2)).unwrap();
        assert_eq!(removed.name(), "b");
        assert!(map.get(ChannelId::from_u128(1)).unwrap().children().is_empty());
        assert_eq!(map.get(ChannelId::from_u128(3)).unwrap().name(), "c");
        assert_eq!(map.len(), 2);
        assert!(map.remove(ChannelId::from_u128(2)).is_none());
    }
}
