use super::cdn::{EmojiSources, Fetcher, ResourceKind};
use super::store::{EmojiStore, PickerData};
use async_trait::async_trait;
use eyre::eyre;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

fn record(name: &str, skin_tone_support: bool) -> serde_json::Value {
    json!({
        "name": name,
        "slug": name.replace(' ', "_"),
        "group": "",
        "emoji_version": "1.0",
        "unicode_version": "1.0",
        "skin_tone_support": skin_tone_support,
    })
}

fn grouped(glyph: &str, name: &str, skin_tone_support: bool) -> serde_json::Value {
    let mut value = record(name, skin_tone_support);
    value["emoji"] = json!(glyph);
    value
}

pub fn emoji_data_json() -> String {
    json!({
        "😀": record("grinning face", false),
        "😺": record("grinning cat", false),
        "👋": record("waving hand", true),
        "🧑": record("person", true),
        "🤝": record("handshake", true),
        "\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}": record("people holding hands", true),
        "🐈": record("cat", false),
        "🐕": record("dog", false),
        "🐱": record("cat face", false),
    })
    .to_string()
}

/// Written out by hand: `json!` objects are sorted by key, and group order
/// matters here.
pub fn group_data_json() -> String {
    let emoji = |glyph: &str, name: &str, skin_tone_support: bool| {
        grouped(glyph, name, skin_tone_support).to_string()
    };
    format!(
        r#"{{
            "Smileys & Emotion": [{}, {}],
            "People & Body": [{}, {}],
            "Animals & Nature": [{}, {}, {}]
        }}"#,
        emoji("😀", "grinning face", false),
        emoji("😺", "grinning cat", false),
        emoji("👋", "waving hand", true),
        emoji("\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}", "people holding hands", true),
        emoji("🐈", "cat", false),
        emoji("🐕", "dog", false),
        emoji("🐱", "cat face", false),
    )
}

pub fn components_json() -> String {
    json!({
        "light_skin_tone": "🏻",
        "medium_light_skin_tone": "🏼",
        "medium_skin_tone": "🏽",
        "medium_dark_skin_tone": "🏾",
        "dark_skin_tone": "🏿",
        "red_hair": "🦰",
        "curly_hair": "🦱",
        "white_hair": "🦳",
        "bald": "🦲",
    })
    .to_string()
}

/// In-memory fetcher that records every request.
pub struct StaticFetcher {
    bodies: HashMap<String, Vec<u8>>,
    calls: AtomicUsize,
    fail_after: Option<usize>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn empty() -> Self {
        Self {
            bodies: HashMap::new(),
            calls: AtomicUsize::new(0),
            fail_after: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Serves the fixtures at the default CDN locations.
    pub fn with_defaults() -> Self {
        let sources = EmojiSources::default();
        Self::empty()
            .with_body(
                sources.get(ResourceKind::EmojiData).as_str(),
                emoji_data_json(),
            )
            .with_body(
                sources.get(ResourceKind::GroupData).as_str(),
                group_data_json(),
            )
            .with_body(
                sources.get(ResourceKind::Components).as_str(),
                components_json(),
            )
    }

    pub fn with_body(mut self, url: &str, body: impl Into<String>) -> Self {
        self.bodies.insert(url.to_owned(), body.into().into_bytes());
        self
    }

    /// Every call after the first `limit` ones fails.
    pub fn fail_after(mut self, limit: usize) -> Self {
        self.fail_after = Some(limit);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, eyre::Report> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requested.lock().push(url.to_string());

        if let Some(limit) = self.fail_after {
            if call > limit {
                return Err(eyre!("Unexpected fetch #{call} of {url}"));
            }
        }

        self.bodies
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| eyre!("404 Not Found: {url}"))
    }
}

/// A fully loaded snapshot built from the fixtures.
pub fn picker_data() -> PickerData {
    let store = EmojiStore::with_fetcher(Arc::new(StaticFetcher::empty()));
    store.set_emoji_data(serde_json::from_str(&emoji_data_json()).unwrap());
    store.set_emoji_group_data(serde_json::from_str(&group_data_json()).unwrap());
    store.set_emoji_components(serde_json::from_str(&components_json()).unwrap());
    store.picker_data().unwrap()
}
