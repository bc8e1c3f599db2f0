//! Flat-Ground Reference Mover
//!
//! A minimal [`Mover`] implementation: an infinite walkable plane at a
//! fixed height plus optional axis-aligned blockers. Horizontal motion is
//! resolved per axis so sliding along a wall works; vertical motion clamps
//! to the ground plane. Good enough to exercise the controllers in tests
//! and the demo without a physics engine.

use glam::Vec3;

use crate::physics::{Aabb, Mover};

/// Contact tolerance above the ground plane, in meters.
const GROUND_EPSILON: f32 = 1e-4;

/// Reference character body on a flat ground plane.
#[derive(Debug, Clone)]
pub struct FlatGroundMover {
    position: Vec3,
    ground_height: f32,
    velocity: Vec3,
    grounded: bool,
    blockers: Vec<Aabb>,
}

impl FlatGroundMover {
    /// Create a body at `position` standing on a plane at `ground_height`.
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        let grounded = position.y <= ground_height + GROUND_EPSILON;
        Self {
            position,
            ground_height,
            velocity: Vec3::ZERO,
            grounded,
            blockers: Vec::new(),
        }
    }

    /// Add an axis-aligned blocker the body cannot enter.
    pub fn add_blocker(&mut self, blocker: Aabb) {
        self.blockers.push(blocker);
    }

    /// The blockers currently registered, e.g. to share with a probe.
    pub fn blockers(&self) -> &[Aabb] {
        &self.blockers
    }

    fn blocked(&self, p: Vec3) -> bool {
        self.blockers.iter().any(|b| b.contains(p))
    }
}

impl Mover for FlatGroundMover {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, delta: Vec3, dt: f32) {
        let dt = dt.max(1e-6);
        let prev = self.position;
        let mut next = prev;

        // Resolve horizontal axes independently so the body slides along
        // a blocker face instead of sticking to it.
        let candidate_x = Vec3::new(prev.x + delta.x, prev.y, prev.z);
        if !self.blocked(candidate_x) {
            next.x = candidate_x.x;
        }
        let candidate_z = Vec3::new(next.x, prev.y, prev.z + delta.z);
        if !self.blocked(candidate_z) {
            next.z = candidate_z.z;
        }

        next.y = prev.y + delta.y;
        if next.y <= self.ground_height {
            next.y = self.ground_height;
        }

        self.grounded = next.y <= self.ground_height + GROUND_EPSILON;
        self.velocity = (next - prev) / dt;
        self.position = next;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.grounded = position.y <= self.ground_height + GROUND_EPSILON;
    }
}
