use egui_emoji_picker::SkinTone;
use eframe::egui::{self, RichText};

const WAVE: &str = "👋";

/// Neutral plus one waving hand per tone. Returns the tone the user
/// clicked, if any.
pub fn draw_skin_tone_bar(
    ui: &mut egui::Ui,
    components: Option<&egui_emoji_picker::EmojiComponents>,
    selected: Option<SkinTone>,
) -> Option<Option<SkinTone>> {
    let mut action = None;

    ui.horizontal(|ui| {
        let options = std::iter::once(None).chain(SkinTone::ALL.into_iter().map(Some));
        for tone in options {
            let modifier = components.and_then(|c| {
                egui_emoji_picker::convert_skin_tone_to_component(c, tone)
            });
            let label = format!("{WAVE}{}", modifier.unwrap_or_default());
            let description = tone.map_or("Neutral", SkinTone::label);

            let response = ui
                .selectable_label(selected == tone, RichText::new(label).size(24.0))
                .on_hover_text(description);

            if response.clicked() {
                action = Some(tone);
            }
        }
    });

    action
}
