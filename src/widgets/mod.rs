pub mod emoji_picker;
pub mod render;
