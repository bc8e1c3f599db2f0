//! Rig Configuration
//!
//! Centralizes every numeric tunable for the movement controller and the
//! follow camera in one place, with documented defaults, JSON load/save,
//! and a validation pass that reports out-of-range values once at startup
//! instead of letting them corrupt the per-frame math later.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Character locomotion tunables.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Maximum ground speed in m/s.
    pub max_speed: f32,
    /// Gravity acceleration in m/s²; negative = downward.
    pub gravity: f32,
    /// Gravity multiplier while falling (actual vertical velocity < 0).
    pub grav_fall_multiplier: f32,
    /// Gravity multiplier while rising (actual vertical velocity > 0).
    /// Below 1.0 gives a floatier ascent than descent.
    pub grav_jump_multiplier: f32,
    /// Apex height of a jump in meters; jump velocity derives from this.
    pub jump_height: f32,
    /// Fraction (0..=1) of turn/speed responsiveness kept while airborne.
    /// 0 freezes facing and speed in the air entirely.
    pub air_control_percent: f32,
    /// Smoothing time constant for turning, in seconds.
    pub turn_smooth_time: f32,
    /// Smoothing time constant for speed changes, in seconds.
    pub speed_smooth_time: f32,
    /// Whether a second jump is allowed per airborne excursion.
    pub double_jump_enabled: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            gravity: -9.0,
            grav_fall_multiplier: 1.0,
            grav_jump_multiplier: 0.5,
            jump_height: 1.0,
            air_control_percent: 0.8,
            turn_smooth_time: 0.05,
            speed_smooth_time: 0.05,
            double_jump_enabled: false,
        }
    }
}

/// Follow camera tunables.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Degrees of orbit rotation per pointer-delta unit.
    pub rotation_speed: f32,
    /// Boom length upper bound in meters; the camera never sits farther
    /// from the pivot than this.
    pub max_distance: f32,
    /// Margin kept between the camera and an obstruction, in meters.
    pub collision_padding: f32,
    /// Per-frame interpolation factor in (0, 1] used when easing the boom
    /// back out. Applied once per frame, so recovery rate scales with
    /// framerate.
    pub return_speed: f32,
    /// Lower pitch clamp in degrees.
    pub pitch_min: f32,
    /// Upper pitch clamp in degrees.
    pub pitch_max: f32,
    /// Height of the orbit pivot above the character's feet, in meters.
    pub pivot_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 1.0,
            max_distance: 5.0,
            collision_padding: 0.1,
            return_speed: 0.1,
            pitch_min: -35.0,
            pitch_max: 60.0,
            pivot_height: 1.5,
        }
    }
}

/// Combined configuration for a [`crate::FollowRig`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigConfig {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
}

/// Errors raised when loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error while reading or writing the file.
    Io(std::io::Error),
    /// The file is not valid JSON for this schema.
    Parse(serde_json::Error),
    /// A tunable is outside its allowed range.
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "config value out of range: {field} = {value}, expected {expected}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::OutOfRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

fn out_of_range(field: &'static str, value: f32, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value,
        expected,
    }
}

impl MovementConfig {
    /// Check every tunable against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_speed > 0.0) {
            return Err(out_of_range("movement.max_speed", self.max_speed, "> 0"));
        }
        if !(self.gravity < 0.0) {
            return Err(out_of_range("movement.gravity", self.gravity, "< 0"));
        }
        if !(self.grav_fall_multiplier >= 0.0) {
            return Err(out_of_range(
                "movement.grav_fall_multiplier",
                self.grav_fall_multiplier,
                ">= 0",
            ));
        }
        if !(self.grav_jump_multiplier >= 0.0) {
            return Err(out_of_range(
                "movement.grav_jump_multiplier",
                self.grav_jump_multiplier,
                ">= 0",
            ));
        }
        if !(self.jump_height > 0.0) {
            return Err(out_of_range("movement.jump_height", self.jump_height, "> 0"));
        }
        if !(0.0..=1.0).contains(&self.air_control_percent) {
            return Err(out_of_range(
                "movement.air_control_percent",
                self.air_control_percent,
                "0..=1",
            ));
        }
        if !(self.turn_smooth_time >= 0.0) {
            return Err(out_of_range(
                "movement.turn_smooth_time",
                self.turn_smooth_time,
                ">= 0",
            ));
        }
        if !(self.speed_smooth_time >= 0.0) {
            return Err(out_of_range(
                "movement.speed_smooth_time",
                self.speed_smooth_time,
                ">= 0",
            ));
        }
        Ok(())
    }
}

impl CameraConfig {
    /// Check every tunable against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rotation_speed > 0.0) {
            return Err(out_of_range("camera.rotation_speed", self.rotation_speed, "> 0"));
        }
        if !(self.max_distance > 0.0) {
            return Err(out_of_range("camera.max_distance", self.max_distance, "> 0"));
        }
        if !(self.collision_padding >= 0.0 && self.collision_padding < self.max_distance) {
            return Err(out_of_range(
                "camera.collision_padding",
                self.collision_padding,
                ">= 0 and < max_distance",
            ));
        }
        if !(self.return_speed > 0.0 && self.return_speed <= 1.0) {
            return Err(out_of_range("camera.return_speed", self.return_speed, "(0, 1]"));
        }
        if !(self.pitch_min <= self.pitch_max) {
            return Err(out_of_range(
                "camera.pitch_min",
                self.pitch_min,
                "<= pitch_max",
            ));
        }
        if !(self.pivot_height >= 0.0) {
            return Err(out_of_range("camera.pivot_height", self.pivot_height, ">= 0"));
        }
        Ok(())
    }
}

impl RigConfig {
    /// Validate both controller configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.camera.validate()
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: RigConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Save this configuration to a JSON file (pretty-printed).
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
