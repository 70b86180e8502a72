//! The emoji data cache.
//!
//! An `EmojiStore` owns one slot per resource kind. A slot is filled
//! either by the first successful `load_*` call or by direct injection.
//! Loads do not coordinate with each other: two callers racing on an
//! empty slot both fetch, and the later completion wins. Injected values
//! are never replaced by a fetch.

use super::cdn::{EmojiSources, Fetcher, HttpFetcher, ResourceKind};
use crate::models::emoji::{EmojiComponents, EmojiData, EmojiGroupData};
use eyre::Context;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::sync::Arc;

struct SlotState<T> {
    value: Option<Arc<T>>,
    injected: bool,
}

struct Slot<T> {
    state: RwLock<SlotState<T>>,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Self {
            state: RwLock::new(SlotState {
                value: None,
                injected: false,
            }),
        }
    }

    fn get(&self) -> Option<Arc<T>> {
        self.state.read().value.clone()
    }

    fn inject(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut state = self.state.write();
        state.value = Some(value.clone());
        state.injected = true;
        value
    }

    fn store_fetched(&self, value: T) -> Arc<T> {
        let mut state = self.state.write();
        if state.injected {
            if let Some(existing) = &state.value {
                return existing.clone();
            }
        }
        let value = Arc::new(value);
        state.value = Some(value.clone());
        value
    }
}

/// Everything the picker needs to render, captured at one point in time.
#[derive(Clone)]
pub struct PickerData {
    pub emojis: Arc<EmojiData>,
    pub groups: Arc<EmojiGroupData>,
    pub components: Arc<EmojiComponents>,
}

pub struct EmojiStore {
    sources: RwLock<EmojiSources>,
    fetcher: Arc<dyn Fetcher>,
    emoji_data: Slot<EmojiData>,
    group_data: Slot<EmojiGroupData>,
    components: Slot<EmojiComponents>,
}

impl Default for EmojiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiStore {
    /// A store fetching over HTTP from the default CDN.
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            sources: RwLock::new(EmojiSources::default()),
            fetcher,
            emoji_data: Slot::new(),
            group_data: Slot::new(),
            components: Slot::new(),
        }
    }

    pub fn sources(&self) -> EmojiSources {
        self.sources.read().clone()
    }

    /// Points all three resources at `base`. Only affects loads that
    /// have not completed yet.
    pub fn set_cdn(&self, base: &str) -> Result<(), eyre::Report> {
        let sources = EmojiSources::from_cdn(base)?;
        tracing::info!("Using emoji CDN {}", base);
        *self.sources.write() = sources;
        Ok(())
    }

    pub fn set_emoji_data_url(&self, url: &str) -> Result<(), eyre::Report> {
        self.sources.write().set(ResourceKind::EmojiData, url)
    }

    pub fn set_group_data_url(&self, url: &str) -> Result<(), eyre::Report> {
        self.sources.write().set(ResourceKind::GroupData, url)
    }

    pub fn set_components_url(&self, url: &str) -> Result<(), eyre::Report> {
        self.sources.write().set(ResourceKind::Components, url)
    }

    pub fn set_emoji_data(&self, data: EmojiData) {
        self.emoji_data.inject(with_glyphs(data));
    }

    pub fn set_emoji_group_data(&self, data: EmojiGroupData) {
        self.group_data.inject(data);
    }

    pub fn set_emoji_components(&self, data: EmojiComponents) {
        self.components.inject(data);
    }

    pub fn emoji_data(&self) -> Option<Arc<EmojiData>> {
        self.emoji_data.get()
    }

    pub fn emoji_group_data(&self) -> Option<Arc<EmojiGroupData>> {
        self.group_data.get()
    }

    pub fn emoji_components(&self) -> Option<Arc<EmojiComponents>> {
        self.components.get()
    }

    pub fn is_loaded(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::EmojiData => self.emoji_data.get().is_some(),
            ResourceKind::GroupData => self.group_data.get().is_some(),
            ResourceKind::Components => self.components.get().is_some(),
        }
    }

    /// Returns a snapshot once all three resources are present.
    pub fn picker_data(&self) -> Option<PickerData> {
        Some(PickerData {
            emojis: self.emoji_data()?,
            groups: self.emoji_group_data()?,
            components: self.emoji_components()?,
        })
    }

    pub async fn load_emoji_data(&self) -> Result<Arc<EmojiData>, eyre::Report> {
        self.load(ResourceKind::EmojiData, &self.emoji_data, with_glyphs)
            .await
    }

    pub async fn load_emoji_group_data(&self) -> Result<Arc<EmojiGroupData>, eyre::Report> {
        self.load(ResourceKind::GroupData, &self.group_data, |data| data)
            .await
    }

    pub async fn load_emoji_components(&self) -> Result<Arc<EmojiComponents>, eyre::Report> {
        self.load(ResourceKind::Components, &self.components, |data| data)
            .await
    }

    /// Loads the three resources concurrently.
    pub async fn load_all(&self) -> Result<PickerData, eyre::Report> {
        let (emojis, groups, components) = futures::try_join!(
            self.load_emoji_data(),
            self.load_emoji_group_data(),
            self.load_emoji_components(),
        )?;

        Ok(PickerData {
            emojis,
            groups,
            components,
        })
    }

    async fn load<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        slot: &Slot<T>,
        prepare: fn(T) -> T,
    ) -> Result<Arc<T>, eyre::Report> {
        if let Some(value) = slot.get() {
            return Ok(value);
        }

        let url = self.sources.read().get(kind).clone();
        tracing::info!("Fetching {} from {}", kind, url);

        let body = self
            .fetcher
            .fetch(&url)
            .await
            .wrap_err_with(|| format!("Could not fetch {kind}"))?;

        let value: T = serde_json::from_slice(&body)
            .wrap_err_with(|| format!("Could not parse {kind} from {url}"))?;

        tracing::info!("Loaded {}", kind);
        Ok(slot.store_fetched(prepare(value)))
    }
}

/// `data-by-emoji.json` keys records by glyph and leaves the glyph out of
/// the record itself.
fn with_glyphs(mut data: EmojiData) -> EmojiData {
    for (glyph, emoji) in data.iter_mut() {
        if emoji.emoji.is_empty() {
            emoji.emoji = glyph.clone();
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emojis::test_utils::{
        StaticFetcher, components_json, emoji_data_json, group_data_json,
    };

    fn store_with(fetcher: StaticFetcher) -> (EmojiStore, Arc<StaticFetcher>) {
        let fetcher = Arc::new(fetcher);
        (EmojiStore::with_fetcher(fetcher.clone()), fetcher)
    }

    #[tokio::test]
    async fn test_load_group_data_is_cached() {
        let (store, fetcher) = store_with(StaticFetcher::with_defaults().fail_after(1));

        let first = store.load_emoji_group_data().await.unwrap();
        let second = store.load_emoji_group_data().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(first.keys().next().map(String::as_str), Some("Smileys & Emotion"));
    }

    #[tokio::test]
    async fn test_load_emoji_data_fills_glyphs() {
        let (store, _) = store_with(StaticFetcher::with_defaults());

        let data = store.load_emoji_data().await.unwrap();

        assert_eq!(data["👋"].emoji, "👋");
        assert_eq!(data["👋"].name, "waving hand");
    }

    #[tokio::test]
    async fn test_load_components() {
        let (store, _) = store_with(StaticFetcher::with_defaults());

        let components = store.load_emoji_components().await.unwrap();

        assert_eq!(components["dark_skin_tone"], "🏿");
        assert_eq!(components.len(), 9);
    }

    #[tokio::test]
    async fn test_injected_data_skips_fetch() {
        let (store, fetcher) = store_with(StaticFetcher::empty());
        let components: EmojiComponents = serde_json::from_str(&components_json()).unwrap();
        store.set_emoji_components(components.clone());

        let loaded = store.load_emoji_components().await.unwrap();

        assert_eq!(*loaded, components);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_injection_replaces_fetched_value() {
        let (store, _) = store_with(StaticFetcher::with_defaults());
        store.load_emoji_components().await.unwrap();

        let mut replacement = EmojiComponents::new();
        replacement.insert("dark_skin_tone".to_owned(), "X".to_owned());
        store.set_emoji_components(replacement);

        let loaded = store.load_emoji_components().await.unwrap();
        assert_eq!(loaded["dark_skin_tone"], "X");
    }

    #[test]
    fn test_fetch_completion_does_not_replace_injection() {
        let slot = Slot::new();
        slot.inject(1);
        let stored = slot.store_fetched(2);
        assert_eq!(*stored, 1);
        assert_eq!(slot.get().as_deref(), Some(&1));
    }

    #[test]
    fn test_later_fetch_wins_over_earlier_fetch() {
        let slot = Slot::new();
        slot.store_fetched(1);
        slot.store_fetched(2);
        assert_eq!(slot.get().as_deref(), Some(&2));
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_and_is_not_cached() {
        let (store, fetcher) = store_with(StaticFetcher::empty());

        let err = store.load_emoji_group_data().await.unwrap_err();
        assert!(format!("{err:#}").contains("emoji group data"), "{err:#}");
        assert!(store.emoji_group_data().is_none());

        assert!(store.load_emoji_group_data().await.is_err());
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_parse_error_propagates() {
        let fetcher = StaticFetcher::empty().with_body(
            "https://unpkg.com/unicode-emoji-json/data-emoji-components.json",
            "<html>not json</html>",
        );
        let (store, _) = store_with(fetcher);

        let err = store.load_emoji_components().await.unwrap_err();
        assert!(format!("{err:#}").contains("Could not parse"), "{err:#}");
        assert!(store.emoji_components().is_none());
    }

    #[tokio::test]
    async fn test_set_cdn_changes_requested_urls() {
        let fetcher = StaticFetcher::empty().with_body(
            "http://mirror.local/emoji/data-by-group.json",
            group_data_json(),
        );
        let (store, fetcher) = store_with(fetcher);
        store.set_cdn("http://mirror.local/emoji").unwrap();

        store.load_emoji_group_data().await.unwrap();

        assert_eq!(
            fetcher.requested(),
            vec!["http://mirror.local/emoji/data-by-group.json".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_set_single_url() {
        let fetcher =
            StaticFetcher::empty().with_body("http://localhost/flat.json", emoji_data_json());
        let (store, _) = store_with(fetcher);
        store.set_emoji_data_url("http://localhost/flat.json").unwrap();

        assert!(store.load_emoji_data().await.is_ok());
        assert!(store.set_group_data_url("nope").is_err());
        assert_eq!(store.sources().group_data, EmojiSources::default().group_data);
    }

    #[tokio::test]
    async fn test_picker_data_requires_all_three() {
        let (store, _) = store_with(StaticFetcher::with_defaults());
        assert!(store.picker_data().is_none());

        store.load_emoji_data().await.unwrap();
        store.load_emoji_group_data().await.unwrap();
        assert!(store.picker_data().is_none());
        assert!(!store.is_loaded(ResourceKind::Components));

        store.load_emoji_components().await.unwrap();
        assert!(store.picker_data().is_some());
    }

    #[tokio::test]
    async fn test_load_all() {
        let (store, fetcher) = store_with(StaticFetcher::with_defaults());

        let data = store.load_all().await.unwrap();

        assert_eq!(fetcher.calls(), 3);
        assert!(data.emojis.contains_key("🐱"));
        assert_eq!(data.groups.len(), 3);
        assert!(Arc::ptr_eq(&data.groups, &store.emoji_group_data().unwrap()));
    }
}
