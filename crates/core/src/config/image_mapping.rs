use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_IMAGE_MAPPING, FALLBACK_PLAYER_IMAGE, FALLBACK_PLAYER_NAME,
};

/// Associates a source image file with the player it depicts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub file: String,
    pub player: String,
}

impl MappingEntry {
    pub fn new(file: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            player: player.into(),
        }
    }
}

/// Ordered file→player table.
///
/// Serialized as a plain array of entries. When several files name the same
/// player, the first one wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageMapping {
    entries: Vec<MappingEntry>,
}

impl ImageMapping {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// File name of the first entry mapped to `player`.
    pub fn file_for(&self, player: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.file.as_str())
    }
}

impl Default for ImageMapping {
    /// The bundled avatar set.
    fn default() -> Self {
        Self::new(
            DEFAULT_IMAGE_MAPPING
                .iter()
                .map(|(file, player)| MappingEntry::new(*file, *player))
                .collect(),
        )
    }
}

impl<F: Into<String>, P: Into<String>> FromIterator<(F, P)> for ImageMapping {
    fn from_iter<I: IntoIterator<Item = (F, P)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(file, player)| MappingEntry::new(file, player))
                .collect(),
        )
    }
}

/// Fixed image path for a player who has no source avatar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackImage {
    pub player: String,
    pub path: String,
}

impl FallbackImage {
    pub fn new(player: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            path: path.into(),
        }
    }

    pub fn defaults() -> Vec<FallbackImage> {
        vec![FallbackImage::new(FALLBACK_PLAYER_NAME, FALLBACK_PLAYER_IMAGE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_for_exact_match() {
        let mapping: ImageMapping = [("a.png", "A"), ("b.jpg", "B")].into_iter().collect();
        assert_eq!(mapping.file_for("B"), Some("b.jpg"));
        assert_eq!(mapping.file_for("C"), None);
    }

    #[test]
    fn test_file_for_is_case_sensitive() {
        let mapping = ImageMapping::default();
        assert_eq!(mapping.file_for("yel7"), Some("Yel7.jpeg"));
        assert_eq!(mapping.file_for("Yel7"), None);
    }

    #[test]
    fn test_first_entry_wins() {
        let mapping: ImageMapping = [("first.png", "A"), ("second.png", "A")]
            .into_iter()
            .collect();
        assert_eq!(mapping.file_for("A"), Some("first.png"));
    }

    #[test]
    fn test_default_covers_bundled_set() {
        let mapping = ImageMapping::default();
        assert_eq!(mapping.entries().len(), 10);
        assert_eq!(mapping.file_for("여울 シ"), Some("여울 シ.png"));
        assert_eq!(mapping.file_for("Haru _"), Some("Haru_.jpg"));
        assert_eq!(mapping.file_for(FALLBACK_PLAYER_NAME), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let mapping: ImageMapping = [("a.png", "A")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&mapping).unwrap(),
            r#"[{"file":"a.png","player":"A"}]"#
        );
    }
}
