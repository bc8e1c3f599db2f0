//! Critically-Damped Smoothing Filters
//!
//! Stateful spring smoothing for scalar values and angles. Each smoothed
//! quantity carries one filter-velocity scalar alongside it; the functions
//! here are pure: they take (current, target, velocity, smooth_time, dt)
//! and return the new (current, velocity) pair, so callers own all state
//! and tests can drive the filter deterministically.
//!
//! The filter approximates a critically damped spring: it approaches the
//! target without overshoot, reaching roughly 95% of the distance within
//! `smooth_time` seconds.

/// Smallest delta time the filters will integrate with.
///
/// A zero or negative tick must not corrupt filter state, so `dt` is
/// floored here instead of being trusted.
pub const MIN_SMOOTH_DT: f32 = 1e-4;

/// Smallest smoothing time constant. Below this the filter effectively
/// snaps to the target in one frame.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Move `current` toward `target` with critically-damped spring smoothing.
///
/// `velocity` is the filter's internal rate state from the previous frame;
/// the returned pair is `(new_current, new_velocity)` and the caller must
/// feed the velocity back in next frame.
///
/// A non-finite `smooth_time` means "no smoothing progress": the value and
/// velocity are returned unchanged. This is how airborne controllers with
/// zero air control freeze their facing and speed without dividing by zero.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    dt: f32,
) -> (f32, f32) {
    if !smooth_time.is_finite() {
        return (current, velocity);
    }
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let dt = dt.max(MIN_SMOOTH_DT);

    // Critically damped spring, integrated with a stable closed-form
    // exponential approximation (cubic Pade-style fit of e^-x).
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let mut new_velocity = (velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Guard against overshooting the target; the spring must settle, not ring.
    if (target - current > 0.0) == (output > target) {
        output = target;
        new_velocity = (output - target) / dt;
    }

    (output, new_velocity)
}

/// Angle-aware variant of [`smooth_damp`], operating in degrees.
///
/// The target is re-expressed through the shortest angular path before
/// smoothing, so smoothing from 350 toward 10 degrees passes through 0
/// rather than sweeping 340 degrees the long way around.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    dt: f32,
) -> (f32, f32) {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Shortest signed difference between two angles in degrees, in [-180, 180].
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}
