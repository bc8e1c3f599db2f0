//! Rig Driver
//!
//! Owns a movement controller and a follow camera and runs them in the
//! one order that keeps their coupling sound: movement first, reading the
//! camera's yaw from the previous frame, then the camera against the
//! character's final position. Everything is single-threaded and
//! synchronous; the camera is the only writer of the shared yaw.

use glam::Vec3;

use crate::camera::FollowCamera;
use crate::config::{ConfigError, RigConfig};
use crate::input::{LookInput, MoveInput};
use crate::physics::{Mover, RayHit};
use crate::player::MovementController;

/// Movement controller and follow camera driven as one unit.
#[derive(Debug, Clone)]
pub struct FollowRig {
    movement: MovementController,
    camera: FollowCamera,
    pivot_height: f32,
}

impl FollowRig {
    /// Build a rig from a configuration, validating every tunable first.
    /// Out-of-range values fail here, once, instead of corrupting the
    /// per-frame math later.
    pub fn new(config: RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pivot_height = config.camera.pivot_height;
        Ok(Self {
            movement: MovementController::new(config.movement),
            camera: FollowCamera::new(config.camera),
            pivot_height,
        })
    }

    /// The movement controller half.
    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    /// Mutable access to the movement controller, for commands like
    /// [`MovementController::look_forward`].
    pub fn movement_mut(&mut self) -> &mut MovementController {
        &mut self.movement
    }

    /// The camera half.
    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    /// Advance both controllers by one frame in the documented order:
    /// character movement against last frame's camera yaw, then the camera
    /// orbiting the character's post-move position.
    pub fn tick<M, F>(
        &mut self,
        dt: f32,
        move_input: &MoveInput,
        look_input: &LookInput,
        mover: &mut M,
        raycast: F,
    ) where
        M: Mover,
        F: FnOnce(Vec3, Vec3, f32) -> Option<RayHit>,
    {
        self.movement
            .update(dt, move_input, self.camera.yaw(), mover);
        let pivot = self.movement.position() + Vec3::Y * self.pivot_height;
        self.camera.update(look_input, pivot, raycast);
    }
}
