// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-scene")]
#[command(about = "Replay clicks against the portfolio scene and fly the camera", long_about = None)]
pub struct Cli {
    /// Rig config (JSON) with motion tuning and extra presets
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Click at pixel `x,y`; repeat to replay several clicks in order
    #[arg(long = "click", value_parser = parse_point)]
    pub clicks: Vec<(f32, f32)>,

    /// Fly to a named preset before replaying clicks
    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long, default_value_t = 1920.0)]
    pub width: f32,

    #[arg(long, default_value_t = 1080.0)]
    pub height: f32,

    /// Phone layout: wider field of view, fewer stars
    #[arg(long, default_value = "false")]
    pub mobile: bool,

    /// Seed for star placement
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Give up on a move after this many frames
    #[arg(long = "max-frames", default_value_t = 600)]
    pub max_frames: u32,

    /// Print the final camera and revealed section as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

fn parse_point(text: &str) -> Result<(f32, f32), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{text}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate '{s}': {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}
