// Headless runtime - drives the translocator scene from a scripted input timeline
//
// Runs a fixed number of frames at a fixed rate without a renderer. Scripted actions
// press the button they are bound to for one frame; the polled buttons go through the
// same edge detection and bindings a windowed host would use. Applies the avatar
// moves the scene asks for and prints what happened.

mod script;

use std::path::PathBuf;

use anyhow::Result;
use cgmath::{Deg, Quaternion, Rotation3};
use clap::Parser;
use engine::scene::Camera;
use tracing::info;
use translocator::{Effect, InputContext, InputTracker, SceneContext, Time, TranslocatorConfig};

use crate::script::{parse_script, parse_vec3, scripted_button};

const DEFAULT_EYE_HEIGHT: f32 = 1.6;

#[derive(Parser)]
#[command(name = "headless_runtime")]
#[command(about = "Run the translocator scene headlessly from a scripted input timeline")]
struct Args {
    /// TOML file overriding the default scene configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "300")]
    frames: u32,

    /// Frame rate in Hz
    #[arg(long, default_value = "60")]
    fps: f32,

    /// Input timeline, e.g. "0:fire,40:recall,90:fire,150:teleport"
    #[arg(short, long, default_value = "0:fire,60:teleport")]
    script: String,

    /// Camera (eye) position as x,y,z
    #[arg(long, default_value = "24,1.6,24")]
    camera: String,

    /// Camera yaw in degrees
    #[arg(long, default_value = "0")]
    yaw: f32,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Default)]
struct RunSummary {
    sounds: usize,
    teleports: usize,
    animations: usize,
}

impl RunSummary {
    fn record(&mut self, effect: &Effect) {
        match effect {
            Effect::PlaySound { .. } => self.sounds += 1,
            Effect::SetPlayerPosition { is_teleport, .. } => {
                if *is_teleport {
                    self.teleports += 1
                }
            }
            Effect::PlayAnimation { .. } => self.animations += 1,
            Effect::Multiple(effects) => effects.iter().for_each(|e| self.record(e)),
            Effect::NoEffect => {}
        }
    }
}

fn main() -> Result<()> {
    engine::logging::init_logging("TRANSLOCATOR_LOG");

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TranslocatorConfig::load(path)?,
        None => TranslocatorConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let script = parse_script(&args.script)?;
    let eye = parse_vec3(&args.camera)?;
    let mut camera = Camera::from_eye(eye, Quaternion::from_angle_y(Deg(args.yaw)), DEFAULT_EYE_HEIGHT);

    let dt = 1.0 / args.fps.max(1.0);
    let bindings = config.bindings;
    let mut ctx = SceneContext::new(config);
    let mut tracker = InputTracker::new();
    let mut summary = RunSummary::default();
    let mut next_input = script.iter().peekable();

    info!(
        "Running {} frames at {} Hz with {} scripted input(s)",
        args.frames,
        args.fps,
        script.len()
    );

    for frame in 0..args.frames {
        let mut buttons = InputContext::default();
        while let Some(input) = next_input.next_if(|input| input.frame == frame) {
            info!("frame {}: {:?} (state {:?})", frame, input.action, ctx.state());
            buttons.set_pressed(scripted_button(input.action, &bindings), true);
        }
        let events = tracker.update(&buttons);

        let time = Time::from_secs_f32(dt, (frame + 1) as f32 * dt);
        let effects = ctx.update_with_events(&time, &camera, &events);

        for effect in Effect::flatten(effects) {
            summary.record(&effect);
            match &effect {
                Effect::SetPlayerPosition { position, .. } => {
                    camera.move_to(*position);
                    info!("frame {}: player moved to {:?}", frame, position);
                }
                Effect::PlaySound { name, .. } => info!("frame {}: sound {}", frame, name),
                Effect::PlayAnimation { clip } => info!("frame {}: animation {}", frame, clip),
                Effect::Multiple(_) | Effect::NoEffect => {}
            }
        }
    }

    let translocator = ctx.translocator();
    println!("state:            {:?}", ctx.state());
    println!("disc position:    {:?}", translocator.world_position(&camera));
    println!("disc attachment:  {:?}", translocator.attachment());
    println!("player feet:      {:?}", camera.feet_position);
    println!("sounds played:    {}", summary.sounds);
    println!("teleports:        {}", summary.teleports);
    println!("animations:       {}", summary.animations);

    Ok(())
}
