//! Per-frame access to the emoji resources.
//!
//! egui redraws every frame, so the `use_*` accessors are meant to be
//! called from `update`. The first call for a missing resource spawns its
//! load on the Tokio runtime; later calls only read the store. When the
//! load finishes the context is asked to repaint. A failed load is logged
//! and remembered, and is not attempted again.

use super::cdn::ResourceKind;
use super::store::{EmojiStore, PickerData};
use crate::models::emoji::{EmojiComponents, EmojiData, EmojiGroupData};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Default)]
struct RequestState {
    requested: AtomicBool,
    error: Mutex<Option<String>>,
}

pub struct EmojiResources {
    store: Arc<EmojiStore>,
    runtime: Handle,
    emoji_data: Arc<RequestState>,
    group_data: Arc<RequestState>,
    components: Arc<RequestState>,
}

impl EmojiResources {
    pub fn new(store: Arc<EmojiStore>, runtime: Handle) -> Self {
        Self {
            store,
            runtime,
            emoji_data: Arc::default(),
            group_data: Arc::default(),
            components: Arc::default(),
        }
    }

    pub fn store(&self) -> &Arc<EmojiStore> {
        &self.store
    }

    pub fn use_emoji_data(&self, ctx: &egui::Context) -> Option<Arc<EmojiData>> {
        let value = self.store.emoji_data();
        if value.is_none() {
            self.request(ResourceKind::EmojiData, ctx);
        }
        value
    }

    pub fn use_emoji_group_data(&self, ctx: &egui::Context) -> Option<Arc<EmojiGroupData>> {
        let value = self.store.emoji_group_data();
        if value.is_none() {
            self.request(ResourceKind::GroupData, ctx);
        }
        value
    }

    pub fn use_emoji_components(&self, ctx: &egui::Context) -> Option<Arc<EmojiComponents>> {
        let value = self.store.emoji_components();
        if value.is_none() {
            self.request(ResourceKind::Components, ctx);
        }
        value
    }

    /// All three resources, or `None` while any of them is missing.
    pub fn use_picker_data(&self, ctx: &egui::Context) -> Option<PickerData> {
        let emojis = self.use_emoji_data(ctx);
        let groups = self.use_emoji_group_data(ctx);
        let components = self.use_emoji_components(ctx);

        Some(PickerData {
            emojis: emojis?,
            groups: groups?,
            components: components?,
        })
    }

    /// Starts loading `kind` unless it is already in the store or was
    /// requested before.
    ///
    /// Returns the handle of the spawned task, if one was spawned.
    pub fn request(&self, kind: ResourceKind, ctx: &egui::Context) -> Option<JoinHandle<()>> {
        if self.store.is_loaded(kind) {
            return None;
        }

        let state = self.state(kind).clone();
        if state.requested.swap(true, Ordering::AcqRel) {
            return None;
        }

        let store = self.store.clone();
        let ctx = ctx.clone();
        let handle = self.runtime.spawn(async move {
            let result = match kind {
                ResourceKind::EmojiData => store.load_emoji_data().await.map(|_| ()),
                ResourceKind::GroupData => store.load_emoji_group_data().await.map(|_| ()),
                ResourceKind::Components => store.load_emoji_components().await.map(|_| ()),
            };

            if let Err(e) = result {
                tracing::error!("Failed to load {}: {:#}", kind, e);
                *state.error.lock() = Some(format!("{e:#}"));
            }
            ctx.request_repaint();
        });

        Some(handle)
    }

    /// The error of the failed load of `kind`, if any.
    pub fn error(&self, kind: ResourceKind) -> Option<String> {
        self.state(kind).error.lock().clone()
    }

    pub fn errors(&self) -> Vec<(ResourceKind, String)> {
        ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| self.error(kind).map(|e| (kind, e)))
            .collect()
    }

    fn state(&self, kind: ResourceKind) -> &Arc<RequestState> {
        match kind {
            ResourceKind::EmojiData => &self.emoji_data,
            ResourceKind::GroupData => &self.group_data,
            ResourceKind::Components => &self.components,
        }
    }
}
