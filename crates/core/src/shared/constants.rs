/// Edge length of the square profile thumbnail, in pixels.
pub const DEFAULT_PROFILE_SIZE: u32 = 200;
/// Largest accepted thumbnail edge; keeps the resize buffer bounded.
pub const MAX_PROFILE_SIZE: u32 = 4096;

pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_PROFILES_DIR: &str = "profiles";

/// Prefix written into the roster for image paths, relative to the site root.
pub const DEFAULT_PUBLIC_PREFIX: &str = "./images";

pub const DEFAULT_PLAYERS_FILE: &str = "players.json";
pub const DEFAULT_OUTPUT_FILE: &str = "players_updated.json";

/// Portrait heuristic: the face band starts this far down the image...
pub const FACE_TOP_RATIO: f64 = 0.1;
/// ...and spans this fraction of the image height.
pub const FACE_HEIGHT_RATIO: f64 = 0.4;

/// Player shipped without an avatar; keeps the placeholder artwork.
pub const FALLBACK_PLAYER_NAME: &str = "TOPGU";
pub const FALLBACK_PLAYER_IMAGE: &str = "./images/player_11.png";

/// Built-in `(file, player)` pairs for the bundled avatar set.
///
/// File names are matched exactly, including case and extension.
pub const DEFAULT_IMAGE_MAPPING: &[(&str, &str)] = &[
    ("여울 シ.png", "여울 シ"),
    ("Haru_.jpg", "Haru _"),
    ("_Kanaria_.PNG", "_Kanaria_"),
    ("Yel7.jpeg", "yel7"),
    ("Doyoung2.png", "Doyoung2"),
    ("catistrue.png", "catistrue"),
    ("arithmetica.jpg", "arithmetica"),
    ("Hoon.png", "Hoon"),
    ("Pocat.png", "Pocat"),
    ("요정.png", "요정"),
];

pub fn profile_file_name(index: usize) -> String {
    format!("player_{index}_profile.png")
}
