use crate::shared::crop_rect::CropRect;

/// Domain interface for choosing the face crop of an image.
///
/// Estimators see only the image dimensions, never pixel data.
pub trait CropEstimator: Send {
    fn estimate(&self, width: u32, height: u32) -> CropRect;
}
