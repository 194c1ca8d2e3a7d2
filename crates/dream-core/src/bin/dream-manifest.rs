use anyhow::Context;
use clap::Parser;
use dream_core::manifest::{manifest_from_dir, write_manifest};
use std::path::PathBuf;

/// Scan a music directory and write the JSON manifest the player fetches.
#[derive(Parser, Debug)]
#[command(name = "dream-manifest", version, about)]
struct Args {
    /// Directory holding the audio files
    #[arg(default_value = "static/music")]
    music_dir: PathBuf,
    /// Where to write the manifest
    #[arg(default_value = "static/music-manifest.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let manifest = manifest_from_dir(&args.music_dir)
        .with_context(|| format!("scanning {}", args.music_dir.display()))?;
    write_manifest(&manifest, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!(
        "Generated manifest with {} tracks at {}",
        manifest.len(),
        args.output.display()
    );
    Ok(())
}
