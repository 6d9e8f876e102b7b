use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use lumen_core::{load_scene, ImageSettings, Scene};
use lumen_renderer::{render, render_sequential, save_image};

mod cli;

use cli::Args;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let (scene, image) = match &args.scene {
        Some(path) => {
            let file = load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            (file.scene, file.image)
        }
        None => {
            log::info!("No scene file given, rendering the demo scene");
            (Scene::demo(), ImageSettings::default())
        }
    };

    let settings = args.resolve(&image);
    if settings.config.width == 0 || settings.config.height == 0 {
        bail!(
            "Image size must be non-zero, got {}x{}",
            settings.config.width,
            settings.config.height
        );
    }

    let framebuffer = if settings.sequential {
        let start = Instant::now();
        let mut framebuffer = render_sequential(&scene, &settings.config);
        framebuffer.tone_map();
        log::info!("Rendered sequentially in {:.2?}", start.elapsed());
        framebuffer
    } else {
        render(&scene, &settings.config)
    };

    save_image(&framebuffer, &settings.output)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    Ok(())
}
