//! Character Movement Controller
//!
//! Converts a raw axis pair plus a jump edge into locomotion. Movement
//! direction is relative to the follow camera's yaw, so pushing "forward"
//! always moves away from the camera.
//!
//! # Per-Frame Model
//!
//! Each [`update`](MovementController::update) runs the same fixed sequence:
//! camera alignment, double-jump re-arm, jump handling, turn smoothing,
//! gravity integration, speed smoothing, then one displacement request to
//! the host [`Mover`]. After the move, speed is re-read from the mover's
//! actual post-collision velocity: a wall that shortens the move also
//! shortens the speed carried into the next frame.
//!
//! # Air Control
//!
//! Turn and speed smoothing share one air-control scale. On the ground the
//! configured time constants apply as-is; airborne they are divided by
//! `air_control_percent`, and a percent of exactly 0 freezes both filters
//! (no progress at all) rather than dividing by zero.

use glam::{Quat, Vec2, Vec3};

use crate::config::MovementConfig;
use crate::input::MoveInput;
use crate::math::smoothing::{smooth_damp, smooth_damp_angle};
use crate::physics::Mover;

/// Smallest frame delta the controller will integrate with.
pub const MIN_FRAME_DT: f32 = 1e-4;

/// Largest frame delta the controller will integrate with. Longer stalls
/// are clamped so a single huge tick cannot explode the physics.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Character movement controller with camera-relative input and smoothed
/// turn/speed blending.
#[derive(Debug, Clone)]
pub struct MovementController {
    config: MovementConfig,

    /// Character facing in degrees around +Y. Holds its last value while
    /// there is no input and no look-forward override.
    yaw: f32,
    /// Smoothed incremental facing offset relative to the camera, in
    /// degrees. Re-applied cumulatively on top of the camera-aligned base
    /// every frame with input.
    additional_rot: f32,
    /// Vertical velocity in m/s; integrated by gravity every frame, zeroed
    /// on ground contact, never clamped.
    vertical_velocity: f32,
    /// Smoothed horizontal speed in m/s.
    current_speed: f32,
    /// Filter-velocity state for turn smoothing.
    turn_smooth_velocity: f32,
    /// Filter-velocity state for speed smoothing.
    speed_smooth_velocity: f32,
    /// Re-armed on every grounded frame, consumed by an airborne jump.
    can_double_jump: bool,
    /// Seconds left of forced forward facing; never negative.
    look_forward_remaining: f32,
    /// Mirror of the mover's position after the last update.
    position: Vec3,
}

impl MovementController {
    /// Create a controller with the given tunables.
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            yaw: 0.0,
            additional_rot: 0.0,
            vertical_velocity: 0.0,
            current_speed: 0.0,
            turn_smooth_velocity: 0.0,
            speed_smooth_velocity: 0.0,
            can_double_jump: false,
            look_forward_remaining: 0.0,
            position: Vec3::ZERO,
        }
    }

    /// Character facing in degrees around +Y.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Character position as of the last update.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current vertical velocity in m/s (positive = upward).
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Current smoothed horizontal speed in m/s.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Whether an airborne jump is still available.
    pub fn can_double_jump(&self) -> bool {
        self.can_double_jump
    }

    /// Seconds of look-forward override remaining.
    pub fn look_forward_remaining(&self) -> f32 {
        self.look_forward_remaining
    }

    /// The takeoff velocity a jump produces, from the configured apex
    /// height: v = sqrt(2 * h * |g|).
    pub fn jump_velocity(&self) -> f32 {
        (self.config.jump_height * -2.0 * self.config.gravity).sqrt()
    }

    /// Force the character to face forward (0 degrees offset from the
    /// camera) for `duration` seconds, ignoring input direction. Used by
    /// actions that must not visually turn the character, e.g. attacks.
    pub fn look_forward(&mut self, duration: f32) {
        self.look_forward_remaining = duration.max(0.0);
    }

    /// Teleport the character, ignoring collision.
    pub fn set_position<M: Mover>(&mut self, position: Vec3, mover: &mut M) {
        mover.set_position(position);
        self.position = position;
    }

    /// Override vertical velocity directly, e.g. for scripted launches.
    pub fn set_vertical_velocity(&mut self, velocity: f32) {
        self.vertical_velocity = velocity;
    }

    /// Advance the controller by one frame.
    ///
    /// `camera_yaw` is the follow camera's accumulated yaw in degrees; it
    /// is the single value shared between the two controllers and defines
    /// what "forward" means for the input pair.
    pub fn update<M: Mover>(
        &mut self,
        dt: f32,
        input: &MoveInput,
        camera_yaw: f32,
        mover: &mut M,
    ) {
        let dt = dt.clamp(MIN_FRAME_DT, MAX_FRAME_DT);
        let grounded = mover.is_grounded();
        let input_dir = input.direction();

        // Align the facing base with the camera while moving; facing holds
        // its last value on zero input.
        if input_dir.is_some() {
            self.yaw = camera_yaw;
        }

        // Double jump re-arms on every grounded frame, not edge-triggered.
        if grounded {
            self.can_double_jump = true;
        }

        if input.jump_pressed {
            if grounded {
                self.jump();
            } else if self.config.double_jump_enabled && self.can_double_jump {
                self.jump();
                self.can_double_jump = false;
            }
        }

        self.turn(input_dir, grounded, dt);
        self.apply_gravity(mover.velocity().y, dt);

        // Smooth speed toward max_speed scaled by input magnitude (0 or 1).
        let target_speed = self.config.max_speed * input.magnitude();
        (self.current_speed, self.speed_smooth_velocity) = smooth_damp(
            self.current_speed,
            target_speed,
            self.speed_smooth_velocity,
            self.air_scaled(self.config.speed_smooth_time, grounded),
            dt,
        );

        // Rotate the input direction into camera space and issue the one
        // displacement request of the frame.
        let move_dir = match input_dir {
            Some(dir) => {
                (Quat::from_rotation_y(camera_yaw.to_radians()) * dir).normalize_or_zero()
            }
            None => Vec3::ZERO,
        };
        let velocity = move_dir * self.current_speed + Vec3::Y * self.vertical_velocity;
        mover.move_by(velocity * dt, dt);

        // Read back the speed the world actually allowed. This is a
        // feedback loop: collisions that shorten the move also shorten the
        // speed used next frame.
        let actual = mover.velocity();
        self.current_speed = Vec2::new(actual.x, actual.z).length();
        self.position = mover.position();

        // Ground contact zeroes vertical velocity. A same-frame jump has
        // already left the ground by the time this re-query runs.
        if mover.is_grounded() {
            self.vertical_velocity = 0.0;
        }
    }

    fn jump(&mut self) {
        self.vertical_velocity = self.jump_velocity();
    }

    /// Smooth the incremental facing offset toward the input direction, or
    /// toward 0 degrees while the look-forward override is active. Skipped
    /// entirely on zero input.
    fn turn(&mut self, input_dir: Option<Vec3>, grounded: bool, dt: f32) {
        let Some(dir) = input_dir else {
            return;
        };

        let target_rot = if self.look_forward_remaining > 0.0 {
            self.look_forward_remaining = (self.look_forward_remaining - dt).max(0.0);
            0.0
        } else {
            dir.x.atan2(dir.z).to_degrees()
        };

        (self.additional_rot, self.turn_smooth_velocity) = smooth_damp_angle(
            self.additional_rot,
            target_rot,
            self.turn_smooth_velocity,
            self.air_scaled(self.config.turn_smooth_time, grounded),
            dt,
        );
        self.yaw += self.additional_rot;
    }

    /// Integrate gravity with the fall/jump multiplier selected by the
    /// sign of the mover's actual vertical velocity.
    fn apply_gravity(&mut self, actual_vertical: f32, dt: f32) {
        let mut gravity = self.config.gravity;
        if actual_vertical < 0.0 {
            gravity *= self.config.grav_fall_multiplier;
        } else if actual_vertical > 0.0 {
            gravity *= self.config.grav_jump_multiplier;
        }
        self.vertical_velocity += gravity * dt;
    }

    /// Air-control scaling for a smoothing time constant. Grounded uses it
    /// unmodified; airborne divides by the air-control percent, where a
    /// percent of 0 maps to an infinite time constant (frozen filter).
    fn air_scaled(&self, smooth_time: f32, grounded: bool) -> f32 {
        if grounded {
            smooth_time
        } else if self.config.air_control_percent == 0.0 {
            f32::INFINITY
        } else {
            smooth_time / self.config.air_control_percent
        }
    }
}
