use egui_emoji_picker::{EmojiStore, SkinTone, widgets::render::DEFAULT_TWEMOJI_BASE_URL};
use eyre::{Context, eyre};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BASE_CONFIG_PATH: &str = "config/app_config.toml";
const ENV_PREFIX: &str = "EMOJI_PICKER_";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL for all three emoji resources.
    pub cdn_url: Option<String>,
    pub emoji_data_url: Option<String>,
    pub group_data_url: Option<String>,
    pub components_url: Option<String>,
    pub skin_tone: Option<SkinTone>,
    pub use_twemoji: bool,
    pub twemoji_base_url: String,
    pub emoji_size: f32,
    pub pixels_per_point: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cdn_url: None,
            emoji_data_url: None,
            group_data_url: None,
            components_url: None,
            skin_tone: None,
            use_twemoji: true,
            twemoji_base_url: DEFAULT_TWEMOJI_BASE_URL.to_owned(),
            emoji_size: 28.0,
            pixels_per_point: 1.5,
        }
    }
}

impl Config {
    /// Points `store` at the configured URLs. The CDN base is applied
    /// first so single-resource URLs can override it.
    pub fn apply_sources(&self, store: &EmojiStore) -> Result<(), eyre::Report> {
        if let Some(cdn_url) = &self.cdn_url {
            store.set_cdn(cdn_url).context("Invalid cdn_url")?;
        }
        if let Some(url) = &self.emoji_data_url {
            store.set_emoji_data_url(url).context("Invalid emoji_data_url")?;
        }
        if let Some(url) = &self.group_data_url {
            store.set_group_data_url(url).context("Invalid group_data_url")?;
        }
        if let Some(url) = &self.components_url {
            store.set_components_url(url).context("Invalid components_url")?;
        }
        Ok(())
    }
}

/// `<config dir>/egui-emoji-picker/app_config.toml`.
pub fn user_config_path() -> Result<PathBuf, eyre::Report> {
    let dir = dirs::config_dir().ok_or_else(|| eyre!("Could not find a config directory"))?;
    Ok(dir.join(env!("CARGO_PKG_NAME")).join("app_config.toml"))
}

/// Merges `base`, then `user`, then `EMOJI_PICKER_*` variables over
/// `Config::default()`. Either file may be missing; a missing `user` file
/// is written out from the result.
pub async fn load_from(base: &Path, user: &Path) -> Result<Config, eyre::Report> {
    tracing::info!("Loading config from {:?} and {:?}", base, user);

    let config: Config = Figment::new()
        .merge(Toml::file(base))
        .merge(Toml::file(user))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not load config")?;

    if !user.exists() {
        if let Err(e) = save_to(&config, user).await {
            tracing::warn!("Failed to write initial config: {:#}", e);
        }
    }

    Ok(config)
}

pub async fn save_to(config: &Config, path: &Path) -> Result<(), eyre::Report> {
    tracing::info!("Saving config to {:?}", path);
    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub async fn load() -> Result<Config, eyre::Report> {
    load_from(Path::new(BASE_CONFIG_PATH), &user_config_path()?).await
}

pub async fn save(config: &Config) -> Result<(), eyre::Report> {
    save_to(config, &user_config_path()?).await
}
