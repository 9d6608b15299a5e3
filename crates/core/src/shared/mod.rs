pub mod constants;
pub mod crop_rect;
pub mod frame;
