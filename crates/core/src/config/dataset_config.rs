use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::image_mapping::{FallbackImage, ImageMapping};
use crate::shared::constants::{
    profile_file_name, DEFAULT_IMAGES_DIR, DEFAULT_PROFILES_DIR, DEFAULT_PROFILE_SIZE,
    DEFAULT_PUBLIC_PREFIX, MAX_PROFILE_SIZE,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("profile size must be between 1 and {MAX_PROFILE_SIZE}, got {0}")]
    ProfileSize(u32),
}

/// Everything that ties the batch pass to one particular avatar set.
///
/// Any field missing from a config file takes its default, so an empty
/// `{}` reproduces the bundled dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding the source avatars.
    pub images_dir: PathBuf,
    /// Subdirectory of `images_dir` receiving the thumbnails.
    pub profiles_dir: String,
    /// Prefix for paths recorded in the roster.
    pub public_prefix: String,
    /// Edge length of the square thumbnail.
    pub profile_size: u32,
    pub mapping: ImageMapping,
    pub fallbacks: Vec<FallbackImage>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            profiles_dir: DEFAULT_PROFILES_DIR.to_string(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            profile_size: DEFAULT_PROFILE_SIZE,
            mapping: ImageMapping::default(),
            fallbacks: FallbackImage::defaults(),
        }
    }
}

impl DatasetConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PROFILE_SIZE).contains(&self.profile_size) {
            return Err(ConfigError::ProfileSize(self.profile_size));
        }
        Ok(())
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.images_dir.join(&self.profiles_dir)
    }

    pub fn source_path(&self, file: &str) -> PathBuf {
        self.images_dir.join(file)
    }

    /// On-disk thumbnail path for the player at 1-based `index`.
    pub fn profile_path(&self, index: usize) -> PathBuf {
        self.profiles_path().join(profile_file_name(index))
    }

    pub fn public_full_image(&self, file: &str) -> String {
        format!("{}/{file}", self.public_prefix)
    }

    pub fn public_profile_image(&self, index: usize) -> String {
        format!(
            "{}/{}/{}",
            self.public_prefix,
            self.profiles_dir,
            profile_file_name(index)
        )
    }

    pub fn fallback_for(&self, player: &str) -> Option<&FallbackImage> {
        self.fallbacks.iter().find(|f| f.player == player)
    }
}
