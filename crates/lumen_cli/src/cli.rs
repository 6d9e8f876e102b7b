use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_core::ImageSettings;
use lumen_renderer::{RenderConfig, DEFAULT_BUCKET_SIZE};

/// Fallback output path when neither the command line nor the scene names one.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Recursive ray tracer for spheres and point lights")]
pub struct Args {
    /// Scene file (JSON). Renders the built-in demo scene when omitted
    pub scene: Option<PathBuf>,

    /// Image width in pixels (overrides the scene file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long)]
    pub height: Option<u32>,

    /// Output file (.png, .bmp, .tga or .ppm)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Tile edge length for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Render on a single thread, pixel by pixel
    #[arg(long)]
    pub sequential: bool,

    /// Logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Everything needed to render and save one image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub config: RenderConfig,
    pub output: PathBuf,
    pub sequential: bool,
}

impl Args {
    /// Merge command line flags with the scene file's image section.
    ///
    /// Flags win over the scene file, which wins over the defaults.
    pub fn resolve(&self, image: &ImageSettings) -> RenderSettings {
        let defaults = RenderConfig::default();
        let width = self.width.or(image.width).unwrap_or(defaults.width);
        let height = self.height.or(image.height).unwrap_or(defaults.height);

        let mut config = defaults
            .with_resolution(width, height)
            .with_bucket_size(self.bucket_size);
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }

        let output = self
            .output
            .clone()
            .or_else(|| image.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        RenderSettings {
            config,
            output,
            sequential: self.sequential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lumen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.scene.is_none());
        assert_eq!(args.log_level, LogLevel::Info);

        let settings = args.resolve(&ImageSettings::default());
        assert_eq!(settings.config, RenderConfig::default());
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!settings.sequential);
    }

    #[test]
    fn test_scene_file_settings_used() {
        let args = parse(&["scene.json"]);
        let image = ImageSettings {
            width: Some(320),
            height: Some(200),
            output: Some(PathBuf::from("scene.ppm")),
        };

        let settings = args.resolve(&image);
        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!((settings.config.width, settings.config.height), (320, 200));
        assert_eq!(settings.output, PathBuf::from("scene.ppm"));
    }

    #[test]
    fn test_flags_override_scene_file() {
        let args = parse(&["scene.json", "--width", "64", "-o", "flag.png", "-j", "3", "--sequential"]);
        let image = ImageSettings {
            width: Some(320),
            height: Some(200),
            output: Some(PathBuf::from("scene.ppm")),
        };

        let settings = args.resolve(&image);
        assert_eq!((settings.config.width, settings.config.height), (64, 200));
        assert_eq!(settings.output, PathBuf::from("flag.png"));
        assert_eq!(settings.config.threads, Some(3));
        assert!(settings.sequential);
    }

    #[test]
    fn test_log_level_conversion() {
        let args = parse(&["--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_width_rejected() {
        assert!(Args::try_parse_from(["lumen", "--width", "wide"]).is_err());
    }
}
