#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use vantui_core::config::CONFIG_FILE_NAME;
use vantui_core::logging::init_logging;
use vantui_core::GalleryConfig;

/// Gallery presets, loaded once before launch
static GALLERY_CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the gallery presets (loaded at startup, defaults otherwise)
pub fn gallery_config() -> GalleryConfig {
    GALLERY_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the default config file (<config dir>/vantui/gallery.json)
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vantui")
        .join(CONFIG_FILE_NAME)
}

/// Vantui Gallery - circle and dialog showcase
#[derive(Parser, Debug)]
#[command(name = "vantui-gallery")]
#[command(about = "Vantui Gallery - circle progress and dialog showcase")]
struct Args {
    /// Gallery config file (default: <config dir>/vantui/gallery.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let path = args.config.unwrap_or_else(default_config_path);
    let gallery = GalleryConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load gallery config from {}", path.display()))?;

    tracing::info!(
        "Starting gallery with {} circle presets (frame every {}ms)",
        gallery.circles.len(),
        gallery.frame_ms
    );
    let _ = GALLERY_CONFIG.set(gallery);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Vantui Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
