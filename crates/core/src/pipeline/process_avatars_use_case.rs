use std::fs;
use std::path::Path;

use crate::config::dataset_config::DatasetConfig;
use crate::cropping::domain::crop_estimator::CropEstimator;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::batch_error::{BatchError, ProfileError};
use crate::pipeline::batch_report::{BatchReport, PlayerOutcome, PlayerReport};
use crate::roster::{self, Player, Roster};

/// Avatar batch: for each player, read → estimate → crop → resize → write,
/// then record the resulting paths on the player.
///
/// A failure on one image never aborts the batch; only roster I/O and
/// directory setup are fatal (see [`ProcessAvatarsUseCase::run`]).
pub struct ProcessAvatarsUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    estimator: Box<dyn CropEstimator>,
    config: DatasetConfig,
}

impl ProcessAvatarsUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        estimator: Box<dyn CropEstimator>,
        config: DatasetConfig,
    ) -> Self {
        Self {
            reader,
            writer,
            estimator,
            config,
        }
    }

    /// Creates the profile directory, loads `input`, processes every player
    /// and writes the whole roster to `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BatchReport, BatchError> {
        let profiles = self.config.profiles_path();
        fs::create_dir_all(&profiles).map_err(|source| BatchError::ProfilesDir {
            path: profiles,
            source,
        })?;

        let mut roster = roster::load(input)?;
        let report = self.execute(&mut roster);
        roster::save(&roster, output)?;
        Ok(report)
    }

    /// Processes every player in roster order, mutating matched records.
    pub fn execute(&self, roster: &mut Roster) -> BatchReport {
        let mut report = BatchReport::default();

        for (i, player) in roster.players.iter_mut().enumerate() {
            let index = i + 1;
            let outcome = self.process_player(index, player);
            report.players.push(PlayerReport {
                index,
                name: player.name.clone(),
                outcome,
            });
        }

        for entry in self.config.mapping.entries() {
            if !roster.contains(&entry.player) {
                log::warn!(
                    "Mapping {} -> {} matches no player",
                    entry.file,
                    entry.player
                );
                report.unmatched_mappings.push(entry.clone());
            }
        }

        report
    }

    fn process_player(&self, index: usize, player: &mut Player) -> PlayerOutcome {
        let Some(file) = self.config.mapping.file_for(&player.name) else {
            log::warn!("No image mapping for: {}", player.name);
            let fallback = self.config.fallback_for(&player.name);
            if let Some(fallback) = fallback {
                log::info!("Using fallback image for {}: {}", player.name, fallback.path);
                player.set_images(&fallback.path, &fallback.path);
            }
            return PlayerOutcome::NoMapping {
                fallback_applied: fallback.is_some(),
            };
        };

        let source = self.config.source_path(file);
        if !source.exists() {
            log::warn!("Image not found: {}", source.display());
            return PlayerOutcome::ImageNotFound { path: source };
        }

        let dest = self.config.profile_path(index);
        match self.write_profile(&source, &dest) {
            Ok(()) => {
                let profile_image = self.config.public_profile_image(index);
                player.set_images(self.config.public_full_image(file), &profile_image);
                log::info!("Processed: {} -> {}", player.name, dest.display());
                PlayerOutcome::Processed { profile_image }
            }
            Err(e) => {
                log::error!("Failed: {} ({}): {e}", player.name, source.display());
                PlayerOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn write_profile(&self, source: &Path, dest: &Path) -> Result<(), ProfileError> {
        let frame = self.reader.read(source)?;
        let (width, height) = (frame.width(), frame.height());

        let rect = self.estimator.estimate(width, height);
        if rect.is_empty() {
            return Err(ProfileError::EmptyCrop {
                rect,
                width,
                height,
            });
        }
        log::debug!("{}: {width}x{height} -> crop {rect}", source.display());
        if !rect.is_square() {
            log::warn!(
                "{}: crop {rect} is not square, thumbnail will be stretched",
                source.display()
            );
        }

        let cropped = frame.crop(&rect);
        let size = self.config.profile_size;
        self.writer.write(dest, &cropped, Some((size, size)))?;
        Ok(())
    }
}
