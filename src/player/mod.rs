//! Player Module
//!
//! Character locomotion driven by camera-relative input.
//!
//! # Components
//!
//! - [`MovementController`] - Per-frame locomotion state machine: smoothed
//!   turning and speed blending, gravity with asymmetric fall/jump
//!   multipliers, jump and double-jump, and a timed look-forward override

pub mod movement_controller;

pub use movement_controller::{MAX_FRAME_DT, MIN_FRAME_DT, MovementController};
