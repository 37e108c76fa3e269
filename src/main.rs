use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use portfolio_scene::cli::Cli;
use portfolio_scene::{Camera, Portfolio, PortfolioOptions, PointerClick, RigConfig, Section};

#[derive(Serialize)]
struct Outcome {
    camera: Camera,
    moving: bool,
    revealed: Option<Section>,
}

/// Step frames until the camera settles or the frame budget runs out.
fn settle(portfolio: &mut Portfolio, cli: &Cli) -> u32 {
    let delta = 1.0 / cli.fps;
    let mut frames = 0;
    while portfolio.motion.is_moving() && frames < cli.max_frames {
        portfolio.frame(delta);
        frames += 1;
    }
    if portfolio.motion.is_moving() {
        warn!("camera still moving after {frames} frames");
    } else if frames > 0 {
        info!("camera settled after {frames} frames at {}", portfolio.camera.position);
    }
    frames
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    anyhow::ensure!(cli.fps > 0.0, "--fps must be positive");

    let rig = match &cli.config {
        Some(path) => RigConfig::load(path)?,
        None => RigConfig::default(),
    };

    let options = PortfolioOptions {
        mobile: cli.mobile,
        star_seed: cli.seed,
    };
    let mut portfolio = Portfolio::new(&options, rig)?;
    portfolio.resize(cli.width, cli.height);

    if let Some(name) = &cli.preset {
        portfolio
            .motion
            .move_to_preset(name)
            .with_context(|| format!("Cannot start at preset '{name}'"))?;
        settle(&mut portfolio, &cli);
    }

    for &(x, y) in &cli.clicks {
        match portfolio.click(PointerClick::new(x, y, cli.width, cli.height)) {
            Some(action) => info!("click ({x}, {y}) -> {action:?}"),
            None => info!("click ({x}, {y}) hit nothing"),
        }
        settle(&mut portfolio, &cli);
    }

    let outcome = Outcome {
        camera: portfolio.camera,
        moving: portfolio.motion.is_moving(),
        revealed: portfolio.revealed_section(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let p = outcome.camera.position;
        println!("camera at ({:.3}, {:.3}, {:.3}) facing {}", p.x, p.y, p.z, outcome.camera.forward());
        if let Some(section) = outcome.revealed {
            println!("showing {section:?}");
        }
    }

    Ok(())
}
