use std::path::Path;

use crate::imaging::domain::imaging_error::ImagingError;
use crate::shared::frame::Frame;

/// Decodes a single image file into an RGBA [`Frame`].
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, ImagingError>;
}
