use super::{
    config::Config,
    state::{AppState, PickerState},
};
use crate::events::app_event::{AppEvent, Effect, PickerEvent};
use egui_emoji_picker::EmojiStore;

pub fn reduce(
    state: &mut AppState,
    event: AppEvent,
    config: &mut Config,
    store: &EmojiStore,
) -> Option<Effect> {
    match event {
        AppEvent::ConfigLoaded(result) => {
            handle_config_loaded(state, result, config, store);
            None
        }
        AppEvent::ConfigSaved(result) => {
            if let Err(e) = result {
                tracing::warn!("Failed to save config: {:#}", e);
            }
            None
        }
        AppEvent::Picker(event) => handle_picker_event(state, event, config),
    }
}

fn handle_config_loaded(
    state: &mut AppState,
    result: Result<Config, eyre::Report>,
    config: &mut Config,
    store: &EmojiStore,
) {
    match result {
        Ok(loaded_config) => *config = loaded_config,
        Err(e) => tracing::error!("Failed to load config, using defaults: {:#}", e),
    }

    // Sources must be settled before the first load is requested, which
    // happens once the state is `Ready`.
    if let Err(e) = config.apply_sources(store) {
        tracing::error!("Failed to apply emoji sources: {:#}", e);
    }

    *state = AppState::Ready(PickerState::from_config(config));
}

fn handle_picker_event(
    state: &mut AppState,
    event: PickerEvent,
    config: &mut Config,
) -> Option<Effect> {
    let AppState::Ready(picker) = state else {
        tracing::warn!("Ignoring picker event before config load: {:?}", event);
        return None;
    };

    match event {
        PickerEvent::SearchChanged(search) => {
            picker.search = search;
            None
        }
        PickerEvent::EmojiPicked(emoji) => {
            tracing::info!("Picked {} ({})", emoji.emoji, emoji.name);
            picker.picked = Some(emoji);
            None
        }
        PickerEvent::SkinToneSelected(skin_tone) => {
            if picker.skin_tone == skin_tone {
                return None;
            }
            picker.skin_tone = skin_tone;
            config.skin_tone = skin_tone;
            Some(Effect::SaveConfig(config.clone()))
        }
        PickerEvent::TwemojiToggled => {
            picker.use_twemoji = !picker.use_twemoji;
            config.use_twemoji = picker.use_twemoji;
            Some(Effect::SaveConfig(config.clone()))
        }
    }
}
