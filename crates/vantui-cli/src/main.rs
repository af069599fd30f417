//! Vantui CLI
//!
//! Thin wrapper around vantui-core for rendering circles outside a UI and
//! checking how a rate change will animate.
//!
//! ## Usage
//!
//! ```bash
//! # Render a 70% ring as standalone SVG
//! vantui circle --rate 70 --text "70%" > ring.svg
//!
//! # Gradient stroke, starting from the left, counter-clockwise
//! vantui circle --rate 40 --gradient 0%=#3fecff --gradient 100%=#6149f6 \
//!     --start-position left --counter-clockwise
//!
//! # Print every displayed rate for a 0 -> 60 change at 100 units/s
//! vantui animate --from 0 --to 60 --frame-ms 100
//!
//! # Show the gallery config in effect
//! vantui config
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use vantui_core::animation::{timeline, DEFAULT_FRAME_MS, DEFAULT_SPEED};
use vantui_core::circle::CIRCLE;
use vantui_core::config::CONFIG_FILE_NAME;
use vantui_core::geometry::DEFAULT_STROKE_WIDTH;
use vantui_core::logging::init_logging;
use vantui_core::rate::coerce_rate;
use vantui_core::{
    CircleColor, CircleConfig, Dimension, ElementId, GalleryConfig, Linecap, StartPosition,
};

/// Vantui - circle progress and dialog widgets
#[derive(Parser)]
#[command(name = "vantui")]
#[command(version = "0.1.0")]
#[command(about = "Render progress circles and preview rate animations")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a circle as a standalone SVG document
    Circle(CircleArgs),

    /// Print the rates an animation would report, one per line
    Animate {
        /// Rate on display when the change starts
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        from: String,
        /// Target rate
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        /// Rate units per second; 0 jumps straight to the target
        #[arg(long, default_value_t = DEFAULT_SPEED, allow_hyphen_values = true)]
        speed: f64,
        /// Milliseconds between frames
        #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
        frame_ms: f64,
    },

    /// Print the effective gallery config as JSON
    Config {
        /// Config file (default: <config dir>/vantui/gallery.json)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CircleArgs {
    /// Rate to draw, 0-100; non-numeric input draws 0
    #[arg(long, default_value = "100", allow_hyphen_values = true)]
    rate: String,

    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,

    /// top, right, bottom or left
    #[arg(long, default_value = "top")]
    start_position: StartPosition,

    /// Draw the arc counter-clockwise
    #[arg(long)]
    counter_clockwise: bool,

    /// Solid stroke color
    #[arg(long, conflicts_with = "gradient")]
    color: Option<String>,

    /// Gradient stop as OFFSET=COLOR, e.g. 0%=#3fecff (repeatable)
    #[arg(long, value_parser = parse_stop)]
    gradient: Vec<(String, String)>,

    /// Background arc color
    #[arg(long)]
    layer_color: Option<String>,

    /// butt, round or square
    #[arg(long)]
    linecap: Option<Linecap>,

    /// Width and height, e.g. 120 or 10rem
    #[arg(long)]
    size: Option<Dimension>,

    /// Centered label
    #[arg(long)]
    text: Option<String>,

    /// Gradient element id (generated when omitted)
    #[arg(long)]
    id: Option<String>,
}

impl CircleArgs {
    fn to_config(&self) -> Result<CircleConfig> {
        let color = if !self.gradient.is_empty() {
            CircleColor::gradient(self.gradient.iter().cloned()).context("Invalid gradient")?
        } else if let Some(color) = &self.color {
            CircleColor::Solid(color.clone())
        } else {
            CircleColor::default()
        };

        Ok(CircleConfig {
            rate: coerce_rate(&self.rate),
            clockwise: !self.counter_clockwise,
            stroke_width: self.stroke_width,
            start_position: self.start_position,
            color,
            layer_color: self.layer_color.clone(),
            stroke_linecap: self.linecap,
            size: self.size.clone(),
            text: self.text.clone(),
            ..Default::default()
        })
    }
}

/// Parse a gradient stop given as OFFSET=COLOR
fn parse_stop(s: &str) -> Result<(String, String), String> {
    let (offset, color) = s
        .split_once('=')
        .ok_or_else(|| format!("expected OFFSET=COLOR, got '{s}'"))?;
    if offset.trim().is_empty() || color.trim().is_empty() {
        return Err(format!("expected OFFSET=COLOR, got '{s}'"));
    }
    Ok((offset.trim().to_string(), color.trim().to_string()))
}

/// Get the default config file (<config dir>/vantui/gallery.json)
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vantui")
        .join(CONFIG_FILE_NAME)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Circle(args) => {
            let config = args.to_config()?;
            let id = match &args.id {
                Some(id) => ElementId::from_string(id.clone()),
                None => ElementId::generate(&CIRCLE.block()),
            };
            info!("Rendering circle at {}%", config.target_rate());

            let render = config.render(config.target_rate(), &id);
            println!("{}", render.to_svg());
        }

        Commands::Animate {
            from,
            to,
            speed,
            frame_ms,
        } => {
            let from = coerce_rate(&from);
            let to = coerce_rate(&to);
            info!("Simulating {} -> {} at speed {}", from, to, speed);

            for rate in timeline(from, to, speed, frame_ms) {
                println!("{}", rate);
            }
        }

        Commands::Config { path } => {
            let path = path.unwrap_or_else(default_config_path);
            let config = GalleryConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            println!("{}", config.to_json_pretty()?);
        }
    }

    Ok(())
}
