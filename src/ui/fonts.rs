use eframe::egui::{self, FontDefinitions};

/// System fonts with outline emoji or symbol glyphs, in order of
/// preference. Bitmap-only color fonts (CBDT, sbix) cannot be drawn by
/// egui and are left out.
const EMOJI_FONTS: [&str; 6] = [
    "Segoe UI Emoji",
    "Segoe UI Symbol",
    "Noto Emoji",
    "Noto Sans Symbols 2",
    "Symbola",
    "DejaVu Sans",
];

/// Appends any available system emoji fonts after egui's bundled ones so
/// glyphs missing from the defaults still render.
pub fn install_emoji_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut loaded_font_count = 0;
    for font_name in EMOJI_FONTS.iter() {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(font_name)],
            ..Default::default()
        };

        let Some(font_id) = db.query(&query) else {
            continue;
        };
        let Some(font_data) = db.with_face_data(font_id, |data, _| data.to_vec()) else {
            continue;
        };

        let egui_font_name = format!("system-{}", font_name.to_lowercase().replace(' ', "_"));
        fonts.font_data.insert(
            egui_font_name.clone(),
            egui::FontData::from_owned(font_data).into(),
        );

        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(egui_font_name.clone());
        }

        tracing::info!("Loaded system font: {}", font_name);
        loaded_font_count += 1;
    }

    if loaded_font_count == 0 {
        tracing::warn!("No system emoji fonts found. Default fonts will be used.");
    }

    ctx.set_fonts(fonts);
}
