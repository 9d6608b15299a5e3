use std::path::PathBuf;

use thiserror::Error;

use crate::imaging::domain::imaging_error::ImagingError;
use crate::roster::RosterError;
use crate::shared::crop_rect::CropRect;

/// Aborts the whole batch.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to create profile directory {path}: {source}")]
    ProfilesDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Fails a single player's thumbnail; the batch carries on.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error(transparent)]
    Imaging(#[from] ImagingError),
    #[error("crop {rect} is empty for a {width}x{height} image")]
    EmptyCrop {
        rect: CropRect,
        width: u32,
        height: u32,
    },
}
