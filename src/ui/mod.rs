pub mod app_layout;
pub mod fonts;
pub mod skin_tone_bar;
