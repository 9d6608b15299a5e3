use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};

use avatar_crop_core::config::DatasetConfig;
use avatar_crop_core::cropping::infrastructure::avatar_face_estimator::AvatarFaceEstimator;
use avatar_crop_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use avatar_crop_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use avatar_crop_core::pipeline::process_avatars_use_case::ProcessAvatarsUseCase;
use avatar_crop_core::shared::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_PLAYERS_FILE};

/// Crops avatar face thumbnails and records their paths in the player roster.
#[derive(Parser, Debug)]
#[command(name = "avatar-crop")]
struct Cli {
    /// Player roster to read (JSON with a `players` array).
    #[arg(long, default_value = DEFAULT_PLAYERS_FILE)]
    players: PathBuf,

    /// Where to write the updated roster.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Dataset config with mapping and fallbacks (default: bundled avatar set).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source image directory; overrides the config.
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Thumbnail edge length in pixels; overrides the config.
    #[arg(long)]
    size: Option<u32>,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    log::info!("Starting avatar face cropping...");
    let use_case = ProcessAvatarsUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(AvatarFaceEstimator::new()),
        config,
    );
    let report = use_case.run(&cli.players, &cli.output)?;

    println!();
    println!(
        "Total {} images processed, {} failed",
        report.processed_count(),
        report.failed_count()
    );
    println!("{} file created.", cli.output.display());
    Ok(())
}

fn build_config(cli: &Cli) -> Result<DatasetConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => DatasetConfig::load(path)?,
        None => DatasetConfig::default(),
    };
    if let Some(dir) = &cli.images_dir {
        config.images_dir = dir.clone();
    }
    if let Some(size) = cli.size {
        config.profile_size = size;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("avatar-crop").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_fixed_layout() {
        let cli = parse(&[]);
        assert_eq!(cli.players, PathBuf::from("players.json"));
        assert_eq!(cli.output, PathBuf::from("players_updated.json"));

        let config = build_config(&cli).unwrap();
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, r#"{ "profile_size": 128, "images_dir": "assets" }"#).unwrap();

        let cli = parse(&[
            "--config",
            path.to_str().unwrap(),
            "--images-dir",
            "avatars",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.images_dir, PathBuf::from("avatars"));
        assert_eq!(config.profile_size, 128);
    }

    #[test]
    fn test_zero_size_rejected() {
        let cli = parse(&["--size", "0"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_oversized_size_rejected() {
        let cli = parse(&["--size", "100000"]);
        assert!(build_config(&cli).is_err());
    }
}
