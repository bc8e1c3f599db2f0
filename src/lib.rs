//! Chase Rig Library
//!
//! A third-person character movement controller paired with a
//! collision-aware follow camera. The crate is window-system and
//! physics-engine agnostic: it only manages controller state and math,
//! and talks to the host through small synchronous contracts.
//!
//! # Modules
//!
//! - [`player`] - Character locomotion: smoothed turning and speed, gravity,
//!   jump and double-jump, timed look-forward override
//! - [`camera`] - Orbit follow camera with pitch clamping and a raycast-based
//!   obstruction probe that keeps the boom from clipping geometry
//! - [`physics`] - Host collaborator contracts ([`Mover`], [`RayHit`]) plus a
//!   reference flat-ground mover and a slab-method ray/AABB probe
//! - [`input`] - Raw per-frame input values (axis pair, pointer deltas, jump edge)
//! - [`math`] - Critically-damped smoothing filters
//! - [`config`] - Numeric tunables with JSON load/save and validation
//! - [`rig`] - Pairs the two controllers and enforces per-frame update order
//!
//! # Example
//!
//! ```ignore
//! use chase_rig::{FollowRig, RigConfig, MoveInput, LookInput, FlatGroundMover};
//! use glam::Vec3;
//!
//! let mut rig = FollowRig::new(RigConfig::default())?;
//! let mut mover = FlatGroundMover::new(Vec3::ZERO, 0.0);
//!
//! // Each frame: movement first (reads last frame's camera yaw),
//! // camera last (reacts to the character's final position).
//! let input = MoveInput { vertical: 1.0, ..Default::default() };
//! rig.tick(dt, &input, &LookInput::default(), &mut mover, |_, _, _| None);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod rig;

// Re-export the main types at crate level for convenience
pub use camera::FollowCamera;
pub use config::{CameraConfig, ConfigError, MovementConfig, RigConfig};
pub use input::{LookInput, MoveInput};
pub use math::smoothing::{smooth_damp, smooth_damp_angle};
pub use physics::{Aabb, FlatGroundMover, HitKind, Mover, RayHit, ray_aabb_intersect};
pub use player::MovementController;
pub use rig::FollowRig;
