//! Math utilities shared by the movement and camera controllers.

pub mod smoothing;

pub use smoothing::{smooth_damp, smooth_damp_angle};
