//! An emoji picker widget for egui.
//!
//! Emoji metadata comes from the `unicode-emoji-json` package on a CDN and
//! is cached in an [`EmojiStore`]. [`EmojiResources`] drives the loads from
//! an egui `update` loop, and [`EmojiPicker`] renders the grouped,
//! filterable grid with optional skin-tone substitution.

pub mod core;
pub mod emojis;
pub mod models;
pub mod widgets;

pub use crate::core::skin_tone::{convert_skin_tone_to_component, get_emoji_with_skin_tone};
pub use emojis::cdn::{DEFAULT_CDN_URL, EmojiSources, Fetcher, HttpFetcher, ResourceKind};
pub use emojis::resources::EmojiResources;
pub use emojis::store::{EmojiStore, PickerData};
pub use models::emoji::{Emoji, EmojiComponents, EmojiData, EmojiGroupData, SkinTone};
pub use widgets::emoji_picker::{EmojiPicker, EmojiPickerOutput};
pub use widgets::render::{EmojiContent, EmojiRenderer, GlyphRenderer, TwemojiRenderer};
