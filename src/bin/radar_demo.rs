//! Headless radar demo
//!
//! Registers a handful of contacts, turns the player in place, and
//! prints where each icon lands on the panel every frame.

use ahash::AHashMap;
use clap::Parser;
use glam::Vec3;
use std::path::PathBuf;

use radar_overlay::core::config::RadarConfig;
use radar_overlay::core::error::Result;
use radar_overlay::core::types::{PlayerPose, TrackedId};
use radar_overlay::icons::{IconPanel, IconTemplate};
use radar_overlay::radar::Radar;

/// Headless radar demo - projects a fixed set of contacts frame by frame
#[derive(Parser, Debug)]
#[command(name = "radar_demo")]
#[command(about = "Run the radar overlay against a scripted world")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 8)]
    frames: u32,

    /// Degrees of player yaw added per frame
    #[arg(long, default_value_t = 45.0)]
    turn_rate: f32,

    /// Optional TOML config for the radar panel
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("radar_overlay=debug")
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => RadarConfig::load(path)?,
        None => RadarConfig::default(),
    };

    let mut radar = Radar::with_config(IconPanel::new(), config);

    // Fixed contacts around the origin; the player spins in place
    let contacts = [
        (TrackedId(1), "enemy", Vec3::new(0.0, 0.0, 10.0)),
        (TrackedId(2), "ally", Vec3::new(10.0, 0.0, 0.0)),
        (TrackedId(3), "loot", Vec3::new(-6.0, 2.0, -6.0)),
    ];
    let mut world: AHashMap<TrackedId, Vec3> = AHashMap::new();
    for (id, sprite, position) in contacts {
        world.insert(id, position);
        radar.register(id, &IconTemplate::new(sprite));
    }

    for frame in 0..args.frames {
        let player = PlayerPose::new(Vec3::ZERO, args.turn_rate * frame as f32);
        radar.update(Some(&player), &world);

        println!("frame {} (yaw {:.0} deg)", frame, player.yaw_degrees);
        for entry in radar.entries() {
            if let Some(position) = radar.icons().position_of(entry.icon) {
                println!(
                    "  contact {:>2} -> panel ({:+8.2}, {:+8.2})",
                    entry.owner.0, position.x, position.y
                );
            }
        }
    }

    Ok(())
}
