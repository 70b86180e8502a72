use async_trait::async_trait;
use eyre::{Context, eyre};
use std::fmt;
use url::Url;

pub const DEFAULT_CDN_URL: &str = "https://unpkg.com/unicode-emoji-json/";

const EMOJI_DATA_FILE: &str = "data-by-emoji.json";
const GROUP_DATA_FILE: &str = "data-by-group.json";
const COMPONENTS_FILE: &str = "data-emoji-components.json";

/// The three JSON documents the picker needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    EmojiData,
    GroupData,
    Components,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::EmojiData,
        ResourceKind::GroupData,
        ResourceKind::Components,
    ];

    fn file_name(self) -> &'static str {
        match self {
            ResourceKind::EmojiData => EMOJI_DATA_FILE,
            ResourceKind::GroupData => GROUP_DATA_FILE,
            ResourceKind::Components => COMPONENTS_FILE,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::EmojiData => "emoji data",
            ResourceKind::GroupData => "emoji group data",
            ResourceKind::Components => "emoji components",
        };
        f.write_str(name)
    }
}

/// Where each resource is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSources {
    pub emoji_data: Url,
    pub group_data: Url,
    pub components: Url,
}

impl EmojiSources {
    /// Builds all three URLs from a common base. A trailing `/` is added
    /// to the base when missing.
    pub fn from_cdn(base: &str) -> Result<Self, eyre::Report> {
        let base = if base.ends_with('/') {
            base.to_owned()
        } else {
            format!("{base}/")
        };
        let parse = |kind: ResourceKind| {
            let raw = format!("{base}{}", kind.file_name());
            Url::parse(&raw).wrap_err_with(|| format!("Invalid URL for {kind}: {raw}"))
        };

        Ok(Self {
            emoji_data: parse(ResourceKind::EmojiData)?,
            group_data: parse(ResourceKind::GroupData)?,
            components: parse(ResourceKind::Components)?,
        })
    }

    pub fn get(&self, kind: ResourceKind) -> &Url {
        match kind {
            ResourceKind::EmojiData => &self.emoji_data,
            ResourceKind::GroupData => &self.group_data,
            ResourceKind::Components => &self.components,
        }
    }

    pub fn set(&mut self, kind: ResourceKind, url: &str) -> Result<(), eyre::Report> {
        let url = Url::parse(url).wrap_err_with(|| format!("Invalid URL for {kind}: {url}"))?;
        match kind {
            ResourceKind::EmojiData => self.emoji_data = url,
            ResourceKind::GroupData => self.group_data = url,
            ResourceKind::Components => self.components = url,
        }
        Ok(())
    }
}

impl Default for EmojiSources {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_CDN_URL).expect("default CDN URL is valid");
        let join = |kind: ResourceKind| {
            base.join(kind.file_name())
                .expect("resource file names are valid relative URLs")
        };
        Self {
            emoji_data: join(ResourceKind::EmojiData),
            group_data: join(ResourceKind::GroupData),
            components: join(ResourceKind::Components),
        }
    }
}

/// Retrieves the raw body of a resource.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, eyre::Report>;
}

/// Plain unauthenticated GET over `reqwest`.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, eyre::Report> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .wrap_err_with(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre!("{url} responded with {status}"));
        }

        let bytes = response
            .bytes()
            .await
            .wrap_err_with(|| format!("Could not read body of {url}"))?;

        Ok(bytes.to_vec())
    }
}
