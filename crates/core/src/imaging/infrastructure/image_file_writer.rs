use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

use crate::imaging::domain::image_writer::ImageWriter;
use crate::imaging::domain::imaging_error::ImagingError;
use crate::shared::frame::Frame;

/// Writes an RGBA frame as PNG using the `image` crate.
///
/// When a size is given the frame is resized to exactly that size, scaling
/// each axis independently, with a Lanczos3 filter. The output is PNG
/// whatever the path's extension says.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(
        &self,
        path: &Path,
        frame: &Frame,
        size: Option<(u32, u32)>,
    ) -> Result<(), ImagingError> {
        if frame.is_empty() {
            return Err(ImagingError::EmptyImage(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ImagingError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let img = RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
            .ok_or(ImagingError::InvalidFrame {
                width: frame.width(),
                height: frame.height(),
            })?;

        let img = if let Some((w, h)) = size {
            image::imageops::resize(&img, w, h, FilterType::Lanczos3)
        } else {
            img
        };

        img.save_with_format(path, ImageFormat::Png)
            .map_err(|source| ImagingError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}
