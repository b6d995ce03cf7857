use serde::{Deserialize, Serialize};

/// Which channel is opened on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenMode {
    /// The channel open when the client last closed.
    LastOpen,
    /// A fixed channel chosen by the user.
    #[default]
    Particular,
}

/// Whether sending a message needs a modifier held with Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendKey {
    #[default]
    Modifier,
    None,
}

/// Modifiers accepted for sending. `mac_ctrl` is the Control key on macOS.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierKeys {
    #[serde(default = "default_true")]
    pub alt: bool,
    #[serde(default = "default_true")]
    pub ctrl: bool,
    #[serde(default = "default_true")]
    pub shift: bool,
    #[serde(default = "default_true")]
    pub mac_ctrl: bool,
}

impl Default for ModifierKeys {
    fn default() -> Self {
        Self {
            alt: true,
            ctrl: true,
            shift: true,
            mac_ctrl: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityMode {
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub per_channel: bool,
}

/// Per-device client preferences, persisted in `state.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSettings {
    #[serde(default)]
    pub open_mode: OpenMode,

    #[serde(default = "default_channel")]
    pub last_open_channel_name: String,

    #[serde(default = "default_channel")]
    pub open_channel_name: String,

    #[serde(default)]
    pub send_with_modifier_key: SendKey,

    #[serde(default)]
    pub modifier_key: ModifierKeys,

    /// Skip animated content and other extra work.
    #[serde(default)]
    pub eco_mode: bool,

    #[serde(default)]
    pub activity_mode: ActivityMode,

    /// Only show starred channels in the sidebar.
    #[serde(default)]
    pub filter_star_channel: bool,
}

fn default_channel() -> String {
    "general".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            open_mode: OpenMode::default(),
            last_open_channel_name: default_channel(),
            open_channel_name: default_channel(),
            send_with_modifier_key: SendKey::default(),
            modifier_key: ModifierKeys::default(),
            eco_mode: false,
            activity_mode: ActivityMode::default(),
            filter_star_channel: false,
        }
    }
}

impl BrowserSettings {
    /// Path of the channel to open on startup.
    #[must_use]
    pub fn default_channel_name(&self) -> &str {
        match self.open_mode {
            OpenMode::LastOpen => &self.last_open_channel_name,
            OpenMode::Particular => &self.open_channel_name,
        }
    }

    /// Follows a channel move from `old_name` to `new_name`, including moves
    /// of an ancestor.
    pub fn update_open_channel_names(&mut self, old_name: &str, new_name: &str) {
        self.open_channel_name = replace_prefix(&self.open_channel_name, old_name, new_name);
        self.last_open_channel_name =
            replace_prefix(&self.last_open_channel_name, old_name, new_name);
    }
}

/// Replaces `prefix` at the start of `s` with `replacement`. Returns `s`
/// unchanged when it does not start with `prefix`.
#[must_use]
pub fn replace_prefix(s: &str, prefix: &str, replacement: &str) -> String {
    match s.strip_prefix(prefix) {
        Some(rest) => format!("{replacement}{rest}"),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("general/random", "general", "main", "main/random" ; "prefix")]
    #[test_case("general", "general", "main", "main" ; "whole")]
    #[test_case("team/general", "general", "main", "team/general" ; "not_at_start")]
    #[test_case("", "general", "main", "" ; "empty")]
    fn test_replace_prefix(s: &str, prefix: &str, replacement: &str, expected: &str) {
        assert_eq!(replace_prefix(s, prefix, replacement), expected);
    }

    #[test]
    fn test_default_channel_follows_open_mode() {
        let mut settings = BrowserSettings {
            last_open_channel_name: "team/dev".to_string(),
            ..BrowserSettings::default()
        };
        assert_eq!(settings.default_channel_name(), "general");

        settings.open_mode = OpenMode::LastOpen;
        assert_eq!(settings.default_channel_name(), "team/dev");
    }

    #[test]
    fn test_update_open_channel_names() {
        let mut settings = BrowserSettings {
            open_channel_name: "team/dev".to_string(),
            last_open_channel_name: "team/dev/ops".to_string(),
            ..BrowserSettings::default()
        };

        settings.update_open_channel_names("team/dev", "eng/dev");

        assert_eq!(settings.open_channel_name, "eng/dev");
        assert_eq!(settings.last_open_channel_name, "eng/dev/ops");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: BrowserSettings = toml::from_str(
            r#"
            open_mode = "lastOpen"

            [modifier_key]
            alt = false
            "#,
        )
        .unwrap();

        assert_eq!(settings.open_mode, OpenMode::LastOpen);
        assert_eq!(settings.last_open_channel_name, "general");
        assert!(!settings.modifier_key.alt);
        assert!(settings.modifier_key.mac_ctrl);
        assert_eq!(settings.send_with_modifier_key, SendKey::Modifier);
    }
}
