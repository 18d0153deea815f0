use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shiori_clean::{AdFilter, PatternLibrary, StripOptions};

use crate::error::ShioriError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub cleaning: CleaningConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningConfig {
    #[serde(default)]
    pub extra_brands: Vec<String>,
    #[serde(default)]
    pub extra_pitch_phrases: Vec<String>,
    /// 0 means no limit.
    #[serde(default)]
    pub max_trailing_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub show_index: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { show_index: true }
    }
}

impl AppConfig {
    /// Load the user config file if it exists, built-in defaults otherwise.
    pub fn load() -> Result<Self, ShioriError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit path. Missing sections fall back to
    /// their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ShioriError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ShioriError::Config(e.to_string()))?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ShioriError::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save current config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ShioriError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ShioriError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "shiori")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// The built-in pattern library extended with the configured phrases.
    pub fn pattern_library(&self) -> PatternLibrary {
        let mut library = PatternLibrary::builtin();
        for brand in &self.cleaning.extra_brands {
            library = library.with_brand(brand.trim().to_lowercase());
        }
        for pitch in &self.cleaning.extra_pitch_phrases {
            library = library.with_pitch(pitch.trim().to_lowercase());
        }
        library
    }

    /// Compile the advertisement filter this config describes.
    pub fn ad_filter(&self) -> Result<AdFilter, ShioriError> {
        let options = StripOptions {
            max_trailing_chars: match self.cleaning.max_trailing_chars {
                0 => None,
                n => Some(n),
            },
        };
        let filter = AdFilter::new(&self.pattern_library())?.with_options(options);
        Ok(filter)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
