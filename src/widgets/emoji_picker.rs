//! The emoji picker widget.
//!
//! `EmojiPicker` is built fresh every frame, egui style:
//!
//! ```ignore
//! let output = EmojiPicker::new()
//!     .skin_tone(Some(SkinTone::Medium))
//!     .filter(|emoji| emoji.name.contains("cat"))
//!     .on_click(|emoji, _response| println!("picked {}", emoji.name))
//!     .show(ui, resources.use_picker_data(ctx).as_ref());
//! ```
//!
//! Until every resource is loaded the picker adds nothing to the `Ui`.

use super::render::{EmojiRenderer, GlyphRenderer};
use crate::emojis::store::PickerData;
use crate::models::emoji::{Emoji, EmojiGroupData, SkinTone};
use egui::{Id, Rect, RichText};

pub const DEFAULT_EMOJI_SIZE: f32 = 28.0;

/// Invoked with the emoji behind a button and that button's response.
pub type EmojiCallback<'a> = Box<dyn FnMut(&Emoji, &egui::Response) + 'a>;

type EmojiFilter<'a> = Box<dyn FnMut(&Emoji) -> bool + 'a>;

/// One titled group of buttons, after filtering.
#[derive(Debug, PartialEq)]
pub struct Section<'d> {
    pub title: &'d str,
    pub emojis: Vec<&'d Emoji>,
}

/// Applies `filter` to every group, keeping group and emoji order.
/// Groups left empty are dropped.
pub fn visible_sections<'d>(
    groups: &'d EmojiGroupData,
    mut predicate: impl FnMut(&Emoji) -> bool,
) -> Vec<Section<'d>> {
    groups
        .iter()
        .filter_map(|(title, emojis)| {
            let emojis: Vec<&Emoji> = emojis.iter().filter(|e| predicate(e)).collect();
            (!emojis.is_empty()).then_some(Section {
                title: title.as_str(),
                emojis,
            })
        })
        .collect()
}

#[derive(Debug, Default, Clone)]
pub struct EmojiPickerOutput {
    /// The emoji clicked this frame.
    pub clicked: Option<Emoji>,
    /// The emoji under the pointer this frame.
    pub hovered: Option<Emoji>,
    /// Number of buttons shown.
    pub rendered: usize,
    /// Where each button was placed, by slug, in display order.
    pub button_rects: Vec<(String, Rect)>,
}

pub struct EmojiPicker<'a> {
    id_salt: Id,
    skin_tone: Option<SkinTone>,
    emoji_size: f32,
    filter: Option<EmojiFilter<'a>>,
    renderer: &'a dyn EmojiRenderer,
    on_click: Option<EmojiCallback<'a>>,
    on_focus: Option<EmojiCallback<'a>>,
    on_hover: Option<EmojiCallback<'a>>,
}

impl Default for EmojiPicker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EmojiPicker<'a> {
    pub fn new() -> Self {
        Self {
            id_salt: Id::new("emoji_picker"),
            skin_tone: None,
            emoji_size: DEFAULT_EMOJI_SIZE,
            filter: None,
            renderer: &GlyphRenderer,
            on_click: None,
            on_focus: None,
            on_hover: None,
        }
    }

    /// Needed when more than one picker is shown in the same `Ui`.
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    pub fn skin_tone(mut self, skin_tone: Option<SkinTone>) -> Self {
        self.skin_tone = skin_tone;
        self
    }

    pub fn emoji_size(mut self, emoji_size: f32) -> Self {
        self.emoji_size = emoji_size;
        self
    }

    /// Only emoji for which `filter` returns `true` are shown.
    pub fn filter(mut self, filter: impl FnMut(&Emoji) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn renderer(mut self, renderer: &'a dyn EmojiRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn on_click(mut self, callback: impl FnMut(&Emoji, &egui::Response) + 'a) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn on_focus(mut self, callback: impl FnMut(&Emoji, &egui::Response) + 'a) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    /// Called once when the pointer enters a button.
    pub fn on_hover(mut self, callback: impl FnMut(&Emoji, &egui::Response) + 'a) -> Self {
        self.on_hover = Some(Box::new(callback));
        self
    }

    pub fn show(self, ui: &mut egui::Ui, data: Option<&PickerData>) -> EmojiPickerOutput {
        let mut output = EmojiPickerOutput::default();
        let Some(data) = data else {
            return output;
        };

        let Self {
            id_salt,
            skin_tone,
            emoji_size,
            mut filter,
            renderer,
            mut on_click,
            mut on_focus,
            mut on_hover,
        } = self;

        let sections = visible_sections(&data.groups, |emoji| {
            filter.as_mut().is_none_or(|filter| filter(emoji))
        });

        let hover_id = ui.make_persistent_id(id_salt).with("hovered");
        let previously_hovered: Option<String> = ui.data(|d| d.get_temp(hover_id));
        let mut hovered_slug = None;

        ui.push_id(id_salt, |ui| {
            for section in sections {
                ui.label(RichText::new(section.title).strong());
                ui.horizontal_wrapped(|ui| {
                    for emoji in section.emojis {
                        let content = renderer.render(data, emoji, skin_tone);
                        let response = ui
                            .push_id(&emoji.slug, |ui| ui.add(content.button(emoji_size)))
                            .inner
                            .on_hover_text(emoji.name.as_str());
                        output.rendered += 1;
                        output.button_rects.push((emoji.slug.clone(), response.rect));

                        if response.clicked() {
                            tracing::debug!("Emoji clicked: {}", emoji.slug);
                            if let Some(callback) = on_click.as_mut() {
                                callback(emoji, &response);
                            }
                            output.clicked = Some(emoji.clone());
                        }

                        if response.gained_focus() {
                            if let Some(callback) = on_focus.as_mut() {
                                callback(emoji, &response);
                            }
                        }

                        if response.hovered() {
                            if previously_hovered.as_deref() != Some(emoji.slug.as_str()) {
                                if let Some(callback) = on_hover.as_mut() {
                                    callback(emoji, &response);
                                }
                            }
                            hovered_slug = Some(emoji.slug.clone());
                            output.hovered = Some(emoji.clone());
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });

        ui.data_mut(|d| match hovered_slug {
            Some(slug) => d.insert_temp(hover_id, slug),
            None => d.remove::<String>(hover_id),
        });

        output
    }
}
