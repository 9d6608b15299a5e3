pub mod config;
pub mod cropping;
pub mod imaging;
pub mod pipeline;
pub mod roster;
pub mod shared;
