/// A crop target in pixel coordinates, as `[left, right) × [top, bottom)`.
///
/// Bounds are signed so intermediate heuristic results can go negative
/// before they are clamped to the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CropRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropRect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True when the rectangle lies inside `[0, width] × [0, height]`.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }

    /// Intersects with `[0, width] × [0, height]`.
    ///
    /// A rectangle entirely outside the bounds collapses to an empty one.
    pub fn clamp_to(&self, width: u32, height: u32) -> CropRect {
        let (w, h) = (i64::from(width), i64::from(height));
        let left = self.left.clamp(0, w);
        let top = self.top.clamp(0, h);
        CropRect {
            left,
            top,
            right: self.right.clamp(left, w),
            bottom: self.bottom.clamp(top, h),
        }
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
