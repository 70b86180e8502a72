use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single emoji record as published by `unicode-emoji-json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// The glyph. Absent in `data-by-emoji.json`, where the glyph is the key.
    #[serde(default)]
    pub emoji: String,
    pub skin_tone_support: bool,
    pub name: String,
    pub slug: String,
    pub unicode_version: String,
    pub emoji_version: String,
}

/// Flat lookup, keyed by glyph.
pub type EmojiData = HashMap<String, Emoji>;

/// Emoji grouped by category, in document order.
pub type EmojiGroupData = IndexMap<String, Vec<Emoji>>;

/// Component identifier (`dark_skin_tone`, `red_hair`, ...) to codepoint string.
pub type EmojiComponents = HashMap<String, String>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SkinTone {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// The key of this tone in [`EmojiComponents`].
    pub fn component_key(self) -> &'static str {
        match self {
            SkinTone::Light => "light_skin_tone",
            SkinTone::MediumLight => "medium_light_skin_tone",
            SkinTone::Medium => "medium_skin_tone",
            SkinTone::MediumDark => "medium_dark_skin_tone",
            SkinTone::Dark => "dark_skin_tone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkinTone::Light => "Light Skin",
            SkinTone::MediumLight => "Medium Light Skin",
            SkinTone::Medium => "Medium Skin",
            SkinTone::MediumDark => "Medium Dark Skin",
            SkinTone::Dark => "Dark Skin",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkinTone::Light => "light",
            SkinTone::MediumLight => "medium-light",
            SkinTone::Medium => "medium",
            SkinTone::MediumDark => "medium-dark",
            SkinTone::Dark => "dark",
        };
        f.write_str(name)
    }
}
