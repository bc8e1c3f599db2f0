//! Camera Module
//!
//! Orbit follow camera with obstruction-aware boom retraction.
//!
//! # Components
//!
//! - [`FollowCamera`] - Pointer-driven yaw/pitch orbit around a pivot with
//!   a single per-frame raycast that snaps the boom in front of solid
//!   obstructions and eases it back out afterwards

pub mod follow;

pub use follow::FollowCamera;
