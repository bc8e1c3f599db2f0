//! Headless Chase-Rig Demo
//!
//! Drives the movement controller and follow camera through a scripted
//! session on the reference flat-ground world: walk, orbit the camera,
//! jump, attempt a double jump, then walk behind a wall so the boom pulls
//! in and eases back out. Prints the rig state as it goes.
//!
//! Pass a JSON config path as the first argument to override the default
//! tunables.

use std::process::exit;

use glam::Vec3;

use chase_rig::physics::probe_blockers;
use chase_rig::{Aabb, FlatGroundMover, FollowRig, LookInput, MoveInput, RigConfig};

const DT: f32 = 1.0 / 60.0;

/// One scripted phase: a label, a duration in frames, and the inputs held
/// for every frame of the phase.
struct Phase {
    label: &'static str,
    frames: u32,
    movement: MoveInput,
    look: LookInput,
}

fn load_config() -> Result<RigConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            println!("[Config] Loading {path}");
            Ok(RigConfig::from_json_file(path)?)
        }
        None => Ok(RigConfig::default()),
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[Config] Failed to load configuration: {e}");
            exit(1);
        }
    };

    let mut rig = match FollowRig::new(config) {
        Ok(rig) => rig,
        Err(e) => {
            eprintln!("[Rig] Invalid configuration: {e}");
            exit(1);
        }
    };

    let mut mover = FlatGroundMover::new(Vec3::ZERO, 0.0);
    // A wall north of the start: walking past it puts it between the
    // character and the camera.
    mover.add_blocker(Aabb::new(
        Vec3::new(-4.0, 0.0, 8.0),
        Vec3::new(-1.5, 4.0, 9.0),
    ));
    println!("[Rig] World ready: flat ground, 1 wall blocker");

    let jump = MoveInput {
        jump_pressed: true,
        ..MoveInput::new(0.0, 1.0)
    };
    let phases = [
        Phase {
            label: "walk forward",
            frames: 120,
            movement: MoveInput::new(0.0, 1.0),
            look: LookInput::default(),
        },
        Phase {
            label: "orbit camera",
            frames: 90,
            movement: MoveInput::default(),
            look: LookInput::new(1.0, -0.3),
        },
        Phase {
            label: "jump",
            frames: 1,
            movement: jump,
            look: LookInput::default(),
        },
        Phase {
            label: "double jump attempt",
            frames: 1,
            movement: jump,
            look: LookInput::default(),
        },
        Phase {
            label: "fall and land",
            frames: 90,
            movement: MoveInput::new(0.0, 1.0),
            look: LookInput::default(),
        },
        Phase {
            label: "walk behind the wall",
            frames: 240,
            movement: MoveInput::new(-1.0, 0.5),
            look: LookInput::default(),
        },
        Phase {
            label: "stand while the boom recovers",
            frames: 120,
            movement: MoveInput::default(),
            look: LookInput::new(-1.0, 0.0),
        },
    ];

    for phase in &phases {
        println!("[Rig] Phase: {}", phase.label);
        for _ in 0..phase.frames {
            let blockers = mover.blockers().to_vec();
            rig.tick(DT, &phase.movement, &phase.look, &mut mover, |o, d, max| {
                probe_blockers(&blockers, o, d, max)
            });
        }
        let p = rig.movement().position();
        println!(
            "[Rig]   pos ({:.2}, {:.2}, {:.2})  speed {:.2} m/s  vv {:.2} m/s",
            p.x,
            p.y,
            p.z,
            rig.movement().current_speed(),
            rig.movement().vertical_velocity(),
        );
        println!(
            "[Camera]   yaw {:.1} deg  pitch {:.1} deg  boom {:.2} m",
            rig.camera().yaw(),
            rig.camera().pitch(),
            rig.camera().local_distance().abs(),
        );
    }

    println!("[Rig] Demo complete");
}
