//! Skin-tone substitution for emoji glyphs.
//!
//! A toned glyph is built by appending a Fitzpatrick modifier to every
//! tone-capable component of a (possibly ZWJ-joined) sequence. A
//! variation selector directly in front of the modifier is dropped.

use crate::models::emoji::{Emoji, EmojiComponents, EmojiData, SkinTone};

pub const ZERO_WIDTH_JOINER: &str = "\u{200D}";
pub const VARIATION_SELECTOR: &str = "\u{FE0F}";

/// Looks up the modifier codepoint for `skin_tone`.
///
/// Returns `None` when no tone is requested or the component table
/// does not carry the tone.
pub fn convert_skin_tone_to_component(
    components: &EmojiComponents,
    skin_tone: Option<SkinTone>,
) -> Option<&str> {
    let tone = skin_tone?;
    components.get(tone.component_key()).map(String::as_str)
}

/// Returns the glyph of `emoji` with `skin_tone` applied.
///
/// `skin_tone` is the modifier string as returned by
/// [`convert_skin_tone_to_component`]. Each ZWJ-separated part that is
/// itself a tone-capable entry of `emojis` receives the modifier.
pub fn get_emoji_with_skin_tone(
    emojis: &EmojiData,
    emoji: &Emoji,
    skin_tone: Option<&str>,
) -> String {
    let modifier = match skin_tone {
        Some(modifier) if !modifier.is_empty() && emoji.skin_tone_support => modifier,
        _ => return emoji.emoji.clone(),
    };

    let toned = emoji
        .emoji
        .split(ZERO_WIDTH_JOINER)
        .map(|part| match emojis.get(part) {
            Some(entry) if entry.skin_tone_support => format!("{part}{modifier}"),
            _ => part.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(ZERO_WIDTH_JOINER);

    toned.replace(&format!("{VARIATION_SELECTOR}{modifier}"), modifier)
}

/// The file stem Twemoji uses for `glyph`: lowercase hex codepoints
/// joined by `-`. Variation selectors are dropped unless the glyph is a
/// ZWJ sequence.
pub fn twemoji_code_points(glyph: &str) -> String {
    let keep_selectors = glyph.contains(ZERO_WIDTH_JOINER);
    glyph
        .chars()
        .filter(|c| keep_selectors || *c != '\u{FE0F}')
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}
