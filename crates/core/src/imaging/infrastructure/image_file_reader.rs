use std::path::Path;

use image::ImageReader as CodecReader;

use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::imaging_error::ImagingError;
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate and normalizes them to RGBA8.
///
/// The format is sniffed from the file contents, so a mislabeled extension
/// (or an upper-case one like `.PNG`) still decodes.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, ImagingError> {
        let read_err = |source| ImagingError::Read {
            path: path.to_path_buf(),
            source,
        };
        let img = CodecReader::open(path)
            .map_err(read_err)?
            .with_guessed_format()
            .map_err(read_err)?
            .decode()
            .map_err(|source| ImagingError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Frame::new(rgba.into_raw(), width, height, 4))
    }
}
