// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's user preferences from a
//! `settings.toml` file. The file is edited by hand; the application never
//! writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[albums]` - Photo endpoint, filter delay, album count and thumbnail limits
//!
//! Only preferences live here. Photo records, album selection and favorites
//! are never written to disk.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_ALBUMS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_albums::config;
//!
//! // Load from the default directory (returns tuple with optional warning)
//! let (config, warning) = config::load_with_override(None);
//! if warning.is_none() {
//!     println!("fetching {}", config.albums.endpoint());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "warning-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Album browser settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlbumsConfig {
    /// URL of the JSON photo list.
    #[serde(default = "default_endpoint")]
    pub endpoint: Option<String>,

    /// Artificial delay before a new album selection is shown (milliseconds).
    #[serde(default = "default_filter_delay_ms")]
    pub filter_delay_ms: Option<u64>,

    /// Number of album buttons in the selector.
    #[serde(default = "default_group_count")]
    pub group_count: Option<u32>,

    /// Thumbnails downloaded after each view change.
    #[serde(default = "default_thumbnail_prefetch")]
    pub thumbnail_prefetch: Option<usize>,

    /// Decoded thumbnails kept in memory.
    #[serde(default = "default_thumbnail_cache_size")]
    pub thumbnail_cache_size: Option<usize>,
}

impl Default for AlbumsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            filter_delay_ms: default_filter_delay_ms(),
            group_count: default_group_count(),
            thumbnail_prefetch: default_thumbnail_prefetch(),
            thumbnail_cache_size: default_thumbnail_cache_size(),
        }
    }
}

impl AlbumsConfig {
    /// Endpoint to fetch, falling back to the public placeholder API.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Filter delay, clamped to the supported range.
    #[must_use]
    pub fn filter_delay(&self) -> Duration {
        let ms = self
            .filter_delay_ms
            .unwrap_or(DEFAULT_FILTER_DELAY_MS)
            .clamp(MIN_FILTER_DELAY_MS, MAX_FILTER_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Number of album buttons, clamped to the supported range.
    #[must_use]
    pub fn group_count(&self) -> u32 {
        self.group_count
            .unwrap_or(DEFAULT_GROUP_COUNT)
            .clamp(MIN_GROUP_COUNT, MAX_GROUP_COUNT)
    }

    #[must_use]
    pub fn thumbnail_prefetch(&self) -> usize {
        self.thumbnail_prefetch
            .unwrap_or(DEFAULT_THUMBNAIL_PREFETCH)
            .min(MAX_THUMBNAIL_PREFETCH)
    }

    #[must_use]
    pub fn thumbnail_cache_size(&self) -> usize {
        self.thumbnail_cache_size
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_SIZE)
            .clamp(MIN_THUMBNAIL_CACHE_SIZE, MAX_THUMBNAIL_CACHE_SIZE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Album browser settings.
    #[serde(default)]
    pub albums: AlbumsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_ENDPOINT.to_string())
}

fn default_filter_delay_ms() -> Option<u64> {
    Some(DEFAULT_FILTER_DELAY_MS)
}

fn default_group_count() -> Option<u32> {
    Some(DEFAULT_GROUP_COUNT)
}

fn default_thumbnail_prefetch() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_PREFETCH)
}

fn default_thumbnail_cache_size() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory, or the default one when
/// `base_dir` is `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"
theme_mode = "dark"

[albums]
endpoint = "http://localhost:8080/photos"
filter_delay_ms = 250
group_count = 10
thumbnail_prefetch = 5
thumbnail_cache_size = 64
"#,
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                    theme_mode: ThemeMode::Dark,
                },
                albums: AlbumsConfig {
                    endpoint: Some("http://localhost:8080/photos".to_string()),
                    filter_delay_ms: Some(250),
                    group_count: Some(10),
                    thumbnail_prefetch: Some(5),
                    thumbnail_cache_size: Some(64),
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.albums.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(
            config.albums.filter_delay(),
            Duration::from_millis(DEFAULT_FILTER_DELAY_MS)
        );
        assert_eq!(config.albums.group_count(), 100);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[albums]\nfilter_delay_ms = 100\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.albums.filter_delay(), Duration::from_millis(100));
        assert_eq!(loaded.albums.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(loaded.albums.group_count(), DEFAULT_GROUP_COUNT);
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let albums = AlbumsConfig {
            endpoint: Some("   ".to_string()),
            filter_delay_ms: Some(60_000),
            group_count: Some(0),
            thumbnail_prefetch: Some(10_000),
            thumbnail_cache_size: Some(1),
        };

        assert_eq!(albums.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(albums.filter_delay(), Duration::from_millis(MAX_FILTER_DELAY_MS));
        assert_eq!(albums.group_count(), MIN_GROUP_COUNT);
        assert_eq!(albums.thumbnail_prefetch(), MAX_THUMBNAIL_PREFETCH);
        assert_eq!(albums.thumbnail_cache_size(), MIN_THUMBNAIL_CACHE_SIZE);
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[general]\nlanguage = \"fr\"\n\n[albums]\ngroup_count = 20\n",
        )
        .expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.albums.group_count(), 20);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }
}
