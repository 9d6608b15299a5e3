use crate::cropping::domain::crop_estimator::CropEstimator;
use crate::shared::constants::{FACE_HEIGHT_RATIO, FACE_TOP_RATIO};
use crate::shared::crop_rect::CropRect;

/// Estimates a square crop around an avatar's face from dimensions alone.
///
/// Portrait images are assumed to hold a full-body avatar whose face sits in
/// the band 10%–50% down from the top; the crop is centered on that band.
/// Landscape and square images take the largest centered square anchored at
/// the top edge.
///
/// The final clamp only moves `top`/`bottom`, so the result is square in
/// practice but not by construction. Callers resize width and height
/// independently.
pub fn estimate_face_crop(width: u32, height: u32) -> CropRect {
    debug_assert!(width > 0 && height > 0, "image dimensions must be positive");

    let w = i64::from(width);
    let h = i64::from(height);

    let (crop_size, mut rect) = if h > w {
        let face_top = (h as f64 * FACE_TOP_RATIO) as i64;
        let face_height = (h as f64 * FACE_HEIGHT_RATIO) as i64;
        let face_center_y = face_top + face_height / 2;

        let crop_size = w.min(face_height);
        let left = (w - crop_size) / 2;
        let top = face_center_y - crop_size / 2;
        (
            crop_size,
            CropRect::new(left, top, left + crop_size, top + crop_size),
        )
    } else {
        let crop_size = w.min(h);
        let left = (w - crop_size) / 2;
        (crop_size, CropRect::new(left, 0, left + crop_size, crop_size))
    };

    if rect.top < 0 {
        rect.top = 0;
    }
    if rect.bottom > h {
        rect.bottom = h;
        rect.top = (h - crop_size).max(0);
    }

    rect
}

/// [`CropEstimator`] backed by [`estimate_face_crop`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AvatarFaceEstimator;

impl AvatarFaceEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl CropEstimator for AvatarFaceEstimator {
    fn estimate(&self, width: u32, height: u32) -> CropRect {
        estimate_face_crop(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tall_portrait(400, 800, CropRect::new(40, 80, 360, 400))]
    #[case::narrow_portrait(300, 1000, CropRect::new(0, 150, 300, 450))]
    #[case::barely_portrait(100, 101, CropRect::new(30, 10, 70, 50))]
    #[case::square(600, 600, CropRect::new(0, 0, 600, 600))]
    #[case::landscape(1000, 600, CropRect::new(200, 0, 800, 600))]
    #[case::odd_landscape(7, 4, CropRect::new(1, 0, 5, 4))]
    #[case::single_pixel(1, 1, CropRect::new(0, 0, 1, 1))]
    fn test_known_dimensions(#[case] w: u32, #[case] h: u32, #[case] expected: CropRect) {
        assert_eq!(estimate_face_crop(w, h), expected);
    }

    #[test]
    fn test_portrait_stays_within_bounds() {
        for width in 1..=60 {
            for height in (width + 1)..=180 {
                let r = estimate_face_crop(width, height);
                assert!(
                    r.fits_within(width, height),
                    "{width}x{height} produced {r}"
                );
            }
        }
    }

    #[test]
    fn test_portrait_is_square_for_typical_sizes() {
        for (w, h) in [(400, 800), (512, 1024), (720, 1280), (1080, 1920), (333, 999)] {
            let r = estimate_face_crop(w, h);
            assert!(r.is_square(), "{w}x{h} produced {r}");
            assert!(!r.is_empty());
        }
    }

    #[test]
    fn test_landscape_and_square_formula() {
        for width in 1..=80u32 {
            for height in 1..=width {
                let size = i64::from(width.min(height));
                let left = (i64::from(width) - size) / 2;
                assert_eq!(
                    estimate_face_crop(width, height),
                    CropRect::new(left, 0, left + size, size),
                    "{width}x{height}"
                );
            }
        }
    }

    #[test]
    fn test_tiny_portrait_yields_empty_rect() {
        // face band is 0.8px tall and truncates to zero
        let r = estimate_face_crop(1, 2);
        assert!(r.is_empty());
        assert!(r.fits_within(1, 2));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(estimate_face_crop(123, 457), estimate_face_crop(123, 457));
    }

    #[test]
    fn test_estimator_delegates_to_function() {
        let estimator = AvatarFaceEstimator::new();
        assert_eq!(estimator.estimate(400, 800), estimate_face_crop(400, 800));
    }
}
