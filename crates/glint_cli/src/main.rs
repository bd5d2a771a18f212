use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{output, random_scene, render, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufWriter};
use std::time::Instant;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so PPM on stdout stays clean
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);
    config.validate().context("Invalid render settings")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    // Build the scene
    let start = Instant::now();
    let scene = random_scene(&mut rng);
    log::info!("Scene built in {:?}", start.elapsed());

    let mut camera = config.camera.build(config.aspect_ratio);
    camera.initialize();

    let image = render(&camera, &scene, &config, &mut rng);

    match &args.output {
        Some(path) => output::save(&image, path)
            .with_context(|| format!("Failed to save {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            output::write_ppm(&mut writer, &image).context("Failed to write PPM to stdout")?;
        }
    }

    log::info!("Done.");
    Ok(())
}
