use crate::error::{Result, ShelfError};
use crate::model::{Filter, SortOption};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FALLBACK_IMAGE: &str = "img/fallback.png";

/// Configuration for shelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Seed document loaded at startup when `--seed` is not given
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Image shown for titles that have none
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Sort applied to the view on first load
    #[serde(default)]
    pub default_sort: SortOption,

    /// Filter applied to the view on first load
    #[serde(default)]
    pub default_filter: Filter,
}

fn default_fallback_image() -> String {
    DEFAULT_FALLBACK_IMAGE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            fallback_image: default_fallback_image(),
            default_sort: SortOption::default(),
            default_filter: Filter::default(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Seed path relative to the config directory when not absolute.
    pub fn resolve_seed(&self, config_dir: &Path) -> Option<PathBuf> {
        self.seed_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                config_dir.join(path)
            }
        })
    }

    /// The image to show for a title.
    pub fn image_for<'a>(&'a self, image: Option<&'a str>) -> &'a str {
        image.unwrap_or(&self.fallback_image)
    }
}
