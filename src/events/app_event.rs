use crate::app::config::Config;
use egui_emoji_picker::{Emoji, SkinTone};

#[derive(Debug)]
pub enum AppEvent {
    ConfigLoaded(Result<Config, eyre::Report>),
    ConfigSaved(Result<(), eyre::Report>),
    Picker(PickerEvent),
}

#[derive(Debug)]
pub enum PickerEvent {
    SearchChanged(String),
    EmojiPicked(Emoji),
    SkinToneSelected(Option<SkinTone>),
    TwemojiToggled,
}

/// Side effects the reducer asks the app to run.
#[derive(Debug, PartialEq)]
pub enum Effect {
    SaveConfig(Config),
}
