//! generate-depth-map
//!
//! Renders a contoured depth map from a transducer CSV export.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use depth_map::{load_depth_map_config, run, RunOptions};

/// Depth map generator
#[derive(Parser, Debug)]
#[command(name = "generate-depth-map")]
#[command(about = "Render a contoured depth map from a sonar survey CSV")]
struct Args {
    /// Survey CSV export (exactly one)
    #[arg(value_name = ".csv file")]
    inputs: Vec<PathBuf>,

    /// PNG destination (default: input path with a .png extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the interpolated grid as JSON
    #[arg(long)]
    grid_json: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "DEPTH_MAP_CONFIG")]
    config: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let [input] = args.inputs.as_slice() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "generate-depth-map".to_string());
        println!("Usage: {} <.csv file>", program);
        std::process::exit(1);
    };

    init_tracing(&args.log_level, args.log_json);

    let mut options = RunOptions::for_input(input);
    if let Some(output) = &args.output {
        options.output = output.clone();
    }
    options.grid_json = args.grid_json.clone();
    options.depth_map = load_depth_map_config(args.config.as_deref())?;
    options.figure = options.figure.with_size(args.width, args.height);

    info!(input = %input.display(), "Generating depth map");
    run(&options)?;

    Ok(())
}

/// Logs go to stderr; stdout carries only the usage line.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
