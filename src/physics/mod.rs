//! Host Collaborator Contracts
//!
//! The controllers never touch world geometry directly. They talk to the
//! host through two small synchronous contracts:
//!
//! - [`Mover`] - a collision-aware character body that clamps displacement
//!   requests against the world and reports ground contact and the actual
//!   post-collision velocity
//! - an obstruction probe, passed per frame as a closure
//!   `FnOnce(origin, direction, max_distance) -> Option<RayHit>`
//!
//! [`FlatGroundMover`] and [`ray_aabb_intersect`] are reference
//! implementations of both contracts, used by the demo binary and the
//! integration tests. A real host plugs in its own physics instead.

pub mod flat_ground;
pub mod raycast;

use glam::Vec3;

pub use flat_ground::FlatGroundMover;
pub use raycast::{probe_blockers, ray_aabb_intersect};

/// What kind of surface a probe ray hit.
///
/// The camera only treats [`HitKind::Solid`] as a real obstruction; the
/// player's own body and non-solid trigger volumes are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Static or dynamic world geometry the camera must not clip through.
    Solid,
    /// The controlled character's own collision body.
    PlayerBody,
    /// A non-solid volume (trigger/sensor); cameras pass through freely.
    NonSolid,
}

/// Result of an obstruction probe ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point, in meters.
    pub distance: f32,
    /// Surface classification of the hit object.
    pub kind: HitKind,
}

impl RayHit {
    /// Create a hit against solid world geometry.
    pub fn solid(distance: f32) -> Self {
        Self {
            distance,
            kind: HitKind::Solid,
        }
    }

    /// Whether this hit actually obstructs the camera.
    pub fn obstructs(&self) -> bool {
        self.kind == HitKind::Solid
    }
}

/// A collision-aware character body owned by the host.
///
/// The movement controller issues one displacement request per frame and
/// reads back what actually happened, so collisions that shorten the move
/// also shorten the speed the controller carries into the next frame.
pub trait Mover {
    /// Whether the body currently touches walkable ground.
    fn is_grounded(&self) -> bool;

    /// Displace the body by `delta`, clamped against world geometry.
    /// `dt` is the frame delta the displacement was computed with, so the
    /// mover can report an actual velocity afterwards.
    fn move_by(&mut self, delta: Vec3, dt: f32);

    /// Actual velocity resulting from the last `move_by`, post-collision.
    fn velocity(&self) -> Vec3;

    /// Current body position in world space.
    fn position(&self) -> Vec3;

    /// Teleport the body, ignoring collision.
    fn set_position(&mut self, position: Vec3);
}

/// Axis-aligned bounding box, used by the reference mover and probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Whether a point lies inside the box (inclusive bounds).
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}
