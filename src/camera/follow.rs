//! Obstruction-Aware Follow Camera
//!
//! Third-person orbit camera. Pointer deltas accumulate into yaw and a
//! pitch clamped to a configured range; the camera sits at the end of a
//! boom behind an orbit pivot. Every frame a single ray is cast from the
//! pivot toward the camera: a solid hit closer than the camera snaps the
//! boom in front of it immediately, anything else eases the boom back out
//! with a fixed per-frame lerp factor.
//!
//! The camera never queries the world directly. The host supplies the
//! obstruction probe as a closure each update, so it works against any
//! physics backend.

use glam::{EulerRot, Quat, Vec3};

use crate::config::CameraConfig;
use crate::input::LookInput;
use crate::physics::RayHit;

/// Probe directions shorter than this are degenerate and skip the raycast.
const MIN_PROBE_LENGTH: f32 = 1e-6;

/// Orbit follow camera with collision-aware boom retraction.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    config: CameraConfig,

    /// Accumulated orbit yaw in degrees; unclamped, free to wind up.
    yaw: f32,
    /// Accumulated orbit pitch in degrees, always within the configured
    /// clamp range after every update.
    pitch: f32,
    /// Signed boom offset along the pivot's local -Z, in meters. Always
    /// <= 0; starts fully extended at `-max_distance`.
    local_offset_z: f32,
    /// Derived world position after the last update.
    position: Vec3,
}

impl FollowCamera {
    /// Create a camera at full boom extension behind the origin.
    pub fn new(config: CameraConfig) -> Self {
        let local_offset_z = -config.max_distance;
        let mut camera = Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            local_offset_z,
            position: Vec3::ZERO,
        };
        camera.position = camera.world_position(Vec3::ZERO);
        camera
    }

    /// Accumulated orbit yaw in degrees. The movement controller reads
    /// this to define camera-relative "forward".
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated orbit pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current boom offset along local -Z; negative, magnitude is the
    /// pivot-to-camera distance.
    pub fn local_distance(&self) -> f32 {
        self.local_offset_z
    }

    /// Camera world position as of the last update.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation of the orbit pivot from the accumulated angles.
    fn pivot_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    fn world_position(&self, pivot: Vec3) -> Vec3 {
        pivot + self.pivot_rotation() * Vec3::new(0.0, 0.0, self.local_offset_z)
    }

    /// Advance the camera by one frame.
    ///
    /// `pivot` is the point the camera orbits (character position plus
    /// pivot height). `raycast` is the host's obstruction probe:
    /// `(origin, direction, max_distance) -> Option<RayHit>` with a
    /// normalized direction.
    pub fn update<F>(&mut self, look: &LookInput, pivot: Vec3, raycast: F)
    where
        F: FnOnce(Vec3, Vec3, f32) -> Option<RayHit>,
    {
        self.yaw += look.delta_x * self.config.rotation_speed;
        self.pitch -= look.delta_y * self.config.rotation_speed;
        self.pitch = self.pitch.clamp(self.config.pitch_min, self.config.pitch_max);

        // Probe from the pivot toward where the camera would sit this
        // frame. A degenerate direction (boom fully collapsed) casts no
        // ray and counts as unobstructed.
        let toward_camera = self.world_position(pivot) - pivot;
        let hit = if toward_camera.length() < MIN_PROBE_LENGTH {
            None
        } else {
            raycast(pivot, toward_camera.normalize(), self.config.max_distance)
                .filter(RayHit::obstructs)
        };

        self.local_offset_z = match hit {
            // A solid hit closer than the camera pulls the boom in front
            // of it immediately; cutting through geometry is never
            // smoothed over.
            Some(hit) if hit.distance < self.local_offset_z.abs() => {
                -(hit.distance - self.config.collision_padding)
            }
            // Obstructed but already inside the hit distance: ease out
            // toward the padded hit point.
            Some(hit) => lerp(
                self.local_offset_z,
                -(hit.distance - self.config.collision_padding),
                self.config.return_speed,
            ),
            // Clear view (no hit, player body, or trigger): ease back to
            // full extension. Fixed per-frame factor, so the recovery
            // rate scales with framerate.
            None => lerp(
                self.local_offset_z,
                -self.config.max_distance,
                self.config.return_speed,
            ),
        }
        .min(0.0);

        self.position = self.world_position(pivot);
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::HitKind;

    fn camera() -> FollowCamera {
        FollowCamera::new(CameraConfig::default())
    }

    fn no_hit(_: Vec3, _: Vec3, _: f32) -> Option<RayHit> {
        None
    }

    #[test]
    fn starts_fully_extended() {
        let camera = camera();
        assert_eq!(camera.local_distance(), -5.0);
        assert!((camera.position() - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn pitch_clamps_to_configured_range() {
        let mut camera = camera();
        camera.update(&LookInput::new(0.0, -500.0), Vec3::ZERO, no_hit);
        assert_eq!(camera.pitch(), 60.0);
        camera.update(&LookInput::new(0.0, 500.0), Vec3::ZERO, no_hit);
        assert_eq!(camera.pitch(), -35.0);
    }

    #[test]
    fn yaw_accumulates_without_clamp() {
        let mut camera = camera();
        for _ in 0..10 {
            camera.update(&LookInput::new(50.0, 0.0), Vec3::ZERO, no_hit);
        }
        assert!((camera.yaw() - 500.0).abs() < 1e-4);
    }

    #[test]
    fn close_obstruction_snaps_immediately() {
        let mut camera = camera();
        camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
            Some(RayHit::solid(2.0))
        });
        // hit 2.0, padding 0.1, camera was at 5.0: snap, no lerp.
        assert!((camera.local_distance() - -1.9).abs() < 1e-6);
    }

    #[test]
    fn clear_view_eases_back_toward_max() {
        let mut camera = camera();
        camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
            Some(RayHit::solid(2.0))
        });
        camera.update(&LookInput::default(), Vec3::ZERO, no_hit);
        // lerp(-1.9, -5.0, 0.1) = -2.21
        assert!((camera.local_distance() - -2.21).abs() < 1e-5);
    }

    #[test]
    fn player_body_hit_does_not_obstruct() {
        let mut camera = camera();
        camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
            Some(RayHit::solid(2.0))
        });
        camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
            Some(RayHit {
                distance: 1.0,
                kind: HitKind::PlayerBody,
            })
        });
        // Treated as clear view: boom eases outward, never snaps in.
        assert!((camera.local_distance() - -2.21).abs() < 1e-5);
    }

    #[test]
    fn boom_never_exceeds_max_distance() {
        let mut camera = camera();
        for frame in 0..200 {
            if frame % 3 == 0 {
                camera.update(&LookInput::new(5.0, -2.0), Vec3::ZERO, |_, _, _| {
                    Some(RayHit::solid(1.5))
                });
            } else {
                camera.update(&LookInput::new(5.0, -2.0), Vec3::ZERO, no_hit);
            }
            assert!(camera.local_distance().abs() <= 5.0 + 1e-5);
            assert!(camera.local_distance() <= 0.0);
        }
    }

    #[test]
    fn hit_inside_padding_keeps_offset_non_positive() {
        let mut camera = camera();
        camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
            Some(RayHit::solid(0.05))
        });
        assert!(camera.local_distance() <= 0.0);
    }

    #[test]
    fn position_orbits_pivot() {
        let mut camera = camera();
        let pivot = Vec3::new(3.0, 1.5, 3.0);
        camera.update(&LookInput::default(), pivot, no_hit);
        assert!((camera.position().distance(pivot) - 5.0).abs() < 1e-4);
    }
}
