use std::path::PathBuf;

use crate::config::image_mapping::MappingEntry;

/// What happened to one player record during the batch.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerOutcome {
    /// Thumbnail written and both image fields updated.
    Processed { profile_image: String },
    /// Decode, crop or encode failed; the record is unchanged.
    Failed { reason: String },
    /// The mapped source file is absent; the record is unchanged.
    ImageNotFound { path: PathBuf },
    /// No mapping entry names this player.
    NoMapping { fallback_applied: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerReport {
    /// 1-based position in the roster.
    pub index: usize,
    pub name: String,
    pub outcome: PlayerOutcome,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchReport {
    pub players: Vec<PlayerReport>,
    /// Mapping entries whose player is absent from the roster.
    pub unmatched_mappings: Vec<MappingEntry>,
}

impl BatchReport {
    pub fn processed_count(&self) -> usize {
        self.count(|o| matches!(o, PlayerOutcome::Processed { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                PlayerOutcome::Failed { .. } | PlayerOutcome::ImageNotFound { .. }
            )
        })
    }

    pub fn outcome_of(&self, name: &str) -> Option<&PlayerOutcome> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.outcome)
    }

    fn count(&self, pred: impl Fn(&PlayerOutcome) -> bool) -> usize {
        self.players.iter().filter(|p| pred(&p.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(index: usize, name: &str, outcome: PlayerOutcome) -> PlayerReport {
        PlayerReport {
            index,
            name: name.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_counts() {
        let batch = BatchReport {
            players: vec![
                report(
                    1,
                    "A",
                    PlayerOutcome::Processed {
                        profile_image: "p1.png".into(),
                    },
                ),
                report(
                    2,
                    "B",
                    PlayerOutcome::Failed {
                        reason: "bad".into(),
                    },
                ),
                report(
                    3,
                    "C",
                    PlayerOutcome::ImageNotFound {
                        path: PathBuf::from("images/c.png"),
                    },
                ),
                report(
                    4,
                    "D",
                    PlayerOutcome::NoMapping {
                        fallback_applied: false,
                    },
                ),
            ],
            unmatched_mappings: Vec::new(),
        };
        assert_eq!(batch.processed_count(), 1);
        assert_eq!(batch.failed_count(), 2);
    }

    #[test]
    fn test_outcome_of() {
        let batch = BatchReport {
            players: vec![report(
                1,
                "A",
                PlayerOutcome::NoMapping {
                    fallback_applied: true,
                },
            )],
            unmatched_mappings: Vec::new(),
        };
        assert_eq!(
            batch.outcome_of("A"),
            Some(&PlayerOutcome::NoMapping {
                fallback_applied: true
            })
        );
        assert!(batch.outcome_of("B").is_none());
    }

    #[test]
    fn test_empty_report() {
        let batch = BatchReport::default();
        assert_eq!(batch.processed_count(), 0);
        assert_eq!(batch.failed_count(), 0);
    }
}
