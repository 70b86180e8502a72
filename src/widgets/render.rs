use crate::core::skin_tone::{
    convert_skin_tone_to_component, get_emoji_with_skin_tone, twemoji_code_points,
};
use crate::emojis::store::PickerData;
use crate::models::emoji::{Emoji, SkinTone};
use egui::{Button, Image, RichText, Vec2};

pub const DEFAULT_TWEMOJI_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/jdecked/twemoji@latest/assets/72x72/";

/// What a picker button shows for one emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiContent {
    Glyph(String),
    Image { url: String, alt: String },
}

impl EmojiContent {
    pub fn button(&self, size: f32) -> Button<'static> {
        let button = match self {
            EmojiContent::Glyph(glyph) => Button::new(RichText::new(glyph.clone()).size(size)),
            EmojiContent::Image { url, .. } => Button::image(sized_image(url, size)),
        };
        button.frame(false)
    }

    /// Shows the content outside of a picker, e.g. for the current selection.
    pub fn show(&self, ui: &mut egui::Ui, size: f32) -> egui::Response {
        match self {
            EmojiContent::Glyph(glyph) => ui.label(RichText::new(glyph).size(size)),
            EmojiContent::Image { url, alt } => {
                ui.add(sized_image(url, size)).on_hover_text(alt.as_str())
            }
        }
    }
}

fn sized_image(url: &str, size: f32) -> Image<'static> {
    Image::new(url.to_owned()).fit_to_exact_size(Vec2::splat(size))
}

/// Decides what each picker button shows.
pub trait EmojiRenderer {
    fn render(&self, data: &PickerData, emoji: &Emoji, skin_tone: Option<SkinTone>)
    -> EmojiContent;
}

/// The glyph with the selected skin tone applied.
pub fn toned_glyph(data: &PickerData, emoji: &Emoji, skin_tone: Option<SkinTone>) -> String {
    let modifier = convert_skin_tone_to_component(&data.components, skin_tone);
    get_emoji_with_skin_tone(&data.emojis, emoji, modifier)
}

/// Renders the toned glyph as text. Used when no renderer is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphRenderer;

impl EmojiRenderer for GlyphRenderer {
    fn render(
        &self,
        data: &PickerData,
        emoji: &Emoji,
        skin_tone: Option<SkinTone>,
    ) -> EmojiContent {
        EmojiContent::Glyph(toned_glyph(data, emoji, skin_tone))
    }
}

/// Renders Twemoji PNG assets, loaded through the egui image loaders.
#[derive(Debug, Clone)]
pub struct TwemojiRenderer {
    base_url: String,
}

impl Default for TwemojiRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TWEMOJI_BASE_URL)
    }
}

impl TwemojiRenderer {
    pub fn new(base_url: &str) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };
        Self { base_url }
    }

    pub fn image_url(&self, glyph: &str) -> String {
        format!("{}{}.png", self.base_url, twemoji_code_points(glyph))
    }
}

impl EmojiRenderer for TwemojiRenderer {
    fn render(
        &self,
        data: &PickerData,
        emoji: &Emoji,
        skin_tone: Option<SkinTone>,
    ) -> EmojiContent {
        let glyph = toned_glyph(data, emoji, skin_tone);
        EmojiContent::Image {
            url: self.image_url(&glyph),
            alt: glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emojis::test_utils::picker_data;

    #[test]
    fn test_glyph_renderer_applies_tone() {
        let data = picker_data();
        let wave = &data.emojis["👋"];

        assert_eq!(
            GlyphRenderer.render(&data, wave, Some(SkinTone::Dark)),
            EmojiContent::Glyph("👋🏿".to_owned())
        );
        assert_eq!(
            GlyphRenderer.render(&data, wave, None),
            EmojiContent::Glyph("👋".to_owned())
        );
    }

    #[test]
    fn test_twemoji_renderer_url() {
        let data = picker_data();
        let wave = &data.emojis["👋"];
        let renderer = TwemojiRenderer::new("https://assets.example.com/72x72");

        assert_eq!(
            renderer.render(&data, wave, Some(SkinTone::Light)),
            EmojiContent::Image {
                url: "https://assets.example.com/72x72/1f44b-1f3fb.png".to_owned(),
                alt: "👋🏻".to_owned(),
            }
        );
    }

    #[test]
    fn test_twemoji_renderer_ignores_tone_for_unsupported() {
        let data = picker_data();
        let cat = &data.emojis["🐱"];

        let content = TwemojiRenderer::default().render(&data, cat, Some(SkinTone::Dark));
        let EmojiContent::Image { url, .. } = content else {
            panic!("expected an image");
        };
        assert!(url.ends_with("/1f431.png"), "{url}");
    }
}
