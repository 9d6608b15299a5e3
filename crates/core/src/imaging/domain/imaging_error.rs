use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("frame data does not match {width}x{height}")]
    InvalidFrame { width: u32, height: u32 },
    #[error("refusing to write empty image to {0}")]
    EmptyImage(PathBuf),
}
