use crate::{
    app::{
        config::{self, Config},
        reducer,
        state::{AppState, PickerState},
    },
    events::app_event::{AppEvent, Effect, PickerEvent},
    ui::{fonts, skin_tone_bar},
};
use eframe::egui::{self, Color32, RichText, ScrollArea};
use egui_emoji_picker::{
    EmojiPicker, EmojiRenderer, EmojiResources, EmojiStore, GlyphRenderer, PickerData,
    TwemojiRenderer,
};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub struct App {
    state: AppState,
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
    config: Config,
    resources: EmojiResources,
    runtime: Handle,
    config_task_spawned: bool,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Handle) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        fonts::install_emoji_fonts(&cc.egui_ctx);

        let (event_tx, event_rx) = mpsc::channel(100);
        let store = Arc::new(EmojiStore::new());

        Self {
            state: AppState::LoadingConfig,
            event_rx,
            event_tx,
            config: Config::default(),
            resources: EmojiResources::new(store, runtime.clone()),
            runtime,
            config_task_spawned: false,
        }
    }

    fn dispatch(&mut self, event: AppEvent) {
        let effect = reducer::reduce(
            &mut self.state,
            event,
            &mut self.config,
            self.resources.store(),
        );

        if let Some(Effect::SaveConfig(config)) = effect {
            let tx = self.event_tx.clone();
            self.runtime.spawn(async move {
                let result = config::save(&config).await;
                tx.send(AppEvent::ConfigSaved(result)).await.ok();
            });
        }
    }

    fn spawn_config_load(&mut self, ctx: &egui::Context) {
        if self.config_task_spawned {
            return;
        }
        self.config_task_spawned = true;

        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = config::load().await;
            tx.send(AppEvent::ConfigLoaded(result)).await.ok();
            ctx.request_repaint();
        });
    }

    fn apply_settings(&self, ctx: &egui::Context) {
        if ctx.pixels_per_point() != self.config.pixels_per_point {
            ctx.set_pixels_per_point(self.config.pixels_per_point);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.dispatch(event);
        }
        self.apply_settings(ctx);

        if self.state == AppState::LoadingConfig {
            self.spawn_config_load(ctx);
        }

        let mut events = Vec::new();

        match &self.state {
            AppState::LoadingConfig => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                });
            }
            AppState::Ready(picker) => {
                let data = self.resources.use_picker_data(ctx);
                egui::CentralPanel::default().show(ctx, |ui| {
                    draw_picker_page(
                        ui,
                        picker,
                        &self.config,
                        &self.resources,
                        data.as_ref(),
                        &mut events,
                    );
                });
            }
        }

        if !events.is_empty() {
            for event in events {
                self.dispatch(AppEvent::Picker(event));
            }
            ctx.request_repaint();
        }
    }
}

fn draw_picker_page(
    ui: &mut egui::Ui,
    picker: &PickerState,
    config: &Config,
    resources: &EmojiResources,
    data: Option<&PickerData>,
    events: &mut Vec<PickerEvent>,
) {
    let twemoji = TwemojiRenderer::new(&config.twemoji_base_url);
    let renderer: &dyn EmojiRenderer = if picker.use_twemoji {
        &twemoji
    } else {
        &GlyphRenderer
    };

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("egui-emoji-picker").monospace().strong());
        ui.add_space(12.0);

        let mut search = picker.search.clone();
        let search_response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search an emoji.")
                .desired_width(f32::INFINITY),
        );
        if search_response.changed() {
            events.push(PickerEvent::SearchChanged(search));
        }

        ScrollArea::vertical()
            .id_salt("emoji_picker_scroll_area")
            .max_height(360.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let output = EmojiPicker::new()
                    .skin_tone(picker.skin_tone)
                    .emoji_size(config.emoji_size)
                    .renderer(renderer)
                    .filter(|emoji| picker.matches(emoji))
                    .on_click(|emoji, _| events.push(PickerEvent::EmojiPicked(emoji.clone())))
                    .show(ui, data);

                if data.is_some() && output.rendered == 0 {
                    ui.label("No emoji found.");
                }
            });

        if data.is_none() {
            let errors = resources.errors();
            if errors.is_empty() {
                ui.spinner();
            }
            for (kind, error) in errors {
                ui.label(
                    RichText::new(format!("Failed to load {kind}: {error}")).color(Color32::RED),
                );
            }
        }

        ui.add_space(12.0);
        match (&picker.picked, data) {
            (Some(picked), Some(data)) => {
                renderer
                    .render(data, picked, picker.skin_tone)
                    .show(ui, config.emoji_size * 1.5)
                    .on_hover_text(picked.name.as_str());
            }
            _ => {
                ui.label(RichText::new("No emoji picked.").monospace().size(18.0));
            }
        }

        ui.add_space(12.0);
        let components = data.map(|d| d.components.as_ref());
        if let Some(skin_tone) =
            skin_tone_bar::draw_skin_tone_bar(ui, components, picker.skin_tone)
        {
            events.push(PickerEvent::SkinToneSelected(skin_tone));
        }

        let toggle_label = if picker.use_twemoji {
            "Twemoji: ON"
        } else {
            "Twemoji: OFF"
        };
        if ui.button(toggle_label).clicked() {
            events.push(PickerEvent::TwemojiToggled);
        }
    });
}
