//! Ray/AABB Obstruction Probe
//!
//! Slab-method ray-box intersection backing the reference obstruction
//! probe. The slab method intersects the ray with each pair of axis
//! planes and keeps the overlapping entry/exit interval; a hit exists
//! when the interval is non-empty and exits in front of the origin.

use glam::Vec3;

use crate::physics::{Aabb, RayHit};

/// Intersect a ray with an AABB.
///
/// # Arguments
/// * `origin` - Ray start point
/// * `dir` - Ray direction (must be normalized for `t` to be a distance)
/// * `aabb` - The box to test against
///
/// # Returns
/// * `Some(t)` - Distance along the ray to the entry point (0 when the
///   origin is inside the box)
/// * `None` - The ray misses the box or the box is entirely behind it
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb: &Aabb) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let lo = aabb.min[axis];
        let hi = aabb.max[axis];

        if d.abs() < 1e-10 {
            // Ray parallel to this slab; miss unless the origin is inside it.
            if o < lo || o > hi {
                return None;
            }
        } else {
            let inv = 1.0 / d;
            let (t1, t2) = ((lo - o) * inv, (hi - o) * inv);
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
        }
    }

    if t_enter > t_exit || t_exit < 0.0 {
        return None;
    }
    Some(t_enter.max(0.0))
}

/// Probe a set of solid blockers and return the closest hit within range.
///
/// Matches the obstruction-probe closure contract the follow camera takes:
/// `(origin, direction, max_distance) -> Option<RayHit>`.
pub fn probe_blockers(blockers: &[Aabb], origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
    blockers
        .iter()
        .filter_map(|b| ray_aabb_intersect(origin, dir, b))
        .filter(|&t| t <= max_distance)
        .min_by(|a, b| a.total_cmp(b))
        .map(RayHit::solid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_box_ahead() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 4.0));
        let t = ray_aabb_intersect(Vec3::ZERO, Vec3::Z, &aabb).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn misses_box_off_axis() {
        let aabb = Aabb::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(6.0, 6.0, 6.0));
        assert!(ray_aabb_intersect(Vec3::ZERO, Vec3::Z, &aabb).is_none());
    }

    #[test]
    fn box_behind_origin_is_ignored() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -4.0), Vec3::new(1.0, 1.0, -2.0));
        assert!(ray_aabb_intersect(Vec3::ZERO, Vec3::Z, &aabb).is_none());
    }

    #[test]
    fn origin_inside_box_hits_at_zero() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let t = ray_aabb_intersect(Vec3::ZERO, Vec3::Z, &aabb).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let aabb = Aabb::new(Vec3::new(-1.0, 2.0, 2.0), Vec3::new(1.0, 3.0, 4.0));
        // Ray along Z at y=0, below the box's Y slab.
        assert!(ray_aabb_intersect(Vec3::ZERO, Vec3::Z, &aabb).is_none());
    }

    #[test]
    fn probe_returns_closest_within_range() {
        let blockers = [
            Aabb::new(Vec3::new(-1.0, -1.0, 6.0), Vec3::new(1.0, 1.0, 7.0)),
            Aabb::new(Vec3::new(-1.0, -1.0, 3.0), Vec3::new(1.0, 1.0, 4.0)),
        ];
        let hit = probe_blockers(&blockers, Vec3::ZERO, Vec3::Z, 10.0).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-5);

        // Out of range: nothing within 2m.
        assert!(probe_blockers(&blockers, Vec3::ZERO, Vec3::Z, 2.0).is_none());
    }
}
