use super::config::Config;
use egui_emoji_picker::{Emoji, SkinTone};

/// What the user has typed and chosen so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PickerState {
    pub search: String,
    pub skin_tone: Option<SkinTone>,
    pub picked: Option<Emoji>,
    pub use_twemoji: bool,
}

impl PickerState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            search: String::new(),
            skin_tone: config.skin_tone,
            picked: None,
            use_twemoji: config.use_twemoji,
        }
    }

    /// The search box acts as a case-sensitive substring match on names.
    pub fn matches(&self, emoji: &Emoji) -> bool {
        self.search.is_empty() || emoji.name.contains(&self.search)
    }
}

/// Represents the various states of the application's lifecycle.
#[derive(Debug, PartialEq)]
pub enum AppState {
    LoadingConfig,
    Ready(PickerState),
}
