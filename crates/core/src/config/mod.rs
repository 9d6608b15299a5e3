pub mod dataset_config;
pub mod image_mapping;

pub use dataset_config::{ConfigError, DatasetConfig};
pub use image_mapping::{FallbackImage, ImageMapping, MappingEntry};
