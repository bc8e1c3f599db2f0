//! Per-Frame Input Values
//!
//! Raw input as the host hands it over each frame. The crate deliberately
//! stays out of the input-device business: movement is two axis values plus
//! one jump edge, the camera is two pointer deltas. Mapping keys, gamepads,
//! or pointer-lock state onto these is the host's job.

use glam::Vec3;

/// Movement input for one frame.
///
/// `horizontal` and `vertical` are raw axis values in [-1, 1] (typically
/// A/D and W/S, or an analog stick). `jump_pressed` is an edge event: true
/// only on the frame the jump button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput {
    /// Sideways axis, -1 (left) to 1 (right).
    pub horizontal: f32,
    /// Forward axis, -1 (backward) to 1 (forward).
    pub vertical: f32,
    /// Jump button went down this frame.
    pub jump_pressed: bool,
}

impl MoveInput {
    /// Create a movement input from the two axis values.
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
            jump_pressed: false,
        }
    }

    /// Normalized input direction on the XZ plane, or `None` when both
    /// axes are zero. A zero-length pair is "no directional component",
    /// never an error.
    pub fn direction(&self) -> Option<Vec3> {
        let raw = Vec3::new(self.horizontal, 0.0, self.vertical);
        if raw.length_squared() > 0.0 {
            Some(raw.normalize())
        } else {
            None
        }
    }

    /// Magnitude of the normalized input pair: 1.0 when any input is held,
    /// 0.0 otherwise. Target speed scales by this value.
    pub fn magnitude(&self) -> f32 {
        if self.direction().is_some() { 1.0 } else { 0.0 }
    }
}

/// Camera look input for one frame: raw pointer deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookInput {
    /// Pointer delta along screen X (positive = right).
    pub delta_x: f32,
    /// Pointer delta along screen Y (positive = down).
    pub delta_y: f32,
}

impl LookInput {
    /// Create a look input from pointer deltas.
    pub fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_has_no_direction() {
        let input = MoveInput::default();
        assert!(input.direction().is_none());
        assert_eq!(input.magnitude(), 0.0);
    }

    #[test]
    fn direction_is_normalized() {
        let input = MoveInput::new(1.0, 1.0);
        let dir = input.direction().unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(input.magnitude(), 1.0);
    }

    #[test]
    fn direction_lives_on_xz_plane() {
        let input = MoveInput::new(-1.0, 0.5);
        let dir = input.direction().unwrap();
        assert_eq!(dir.y, 0.0);
        assert!(dir.x < 0.0);
        assert!(dir.z > 0.0);
    }

    #[test]
    fn partial_deflection_still_full_magnitude() {
        // Speed scales by the *normalized* magnitude: any nonzero input is 1.
        let input = MoveInput::new(0.2, 0.0);
        assert_eq!(input.magnitude(), 1.0);
    }
}
