use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::engine::PathBounds;
use crate::error::Result;
use crate::math::ProjectionPlane;
use crate::tessellation::PreviewParams;

/// Construction-time settings for a [`SpawnEngine`](crate::SpawnEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Where random control points are placed.
    pub bounds: PathBounds,
    /// Upper bound on concurrent paths created with `add_path`.
    pub max_paths: usize,
    /// Plane used by `contains_point`.
    pub projection: ProjectionPlane,
    /// Preview tessellation settings.
    pub preview: PreviewParams,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            bounds: PathBounds::default(),
            max_paths: 8,
            projection: ProjectionPlane::default(),
            preview: PreviewParams::default(),
        }
    }
}

impl SpawnConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Operator-tunable values read by the host every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveParams {
    /// Fraction of the gap a light closes per frame while brightening.
    pub fade_in: f64,
    /// Fraction of the gap a light closes per frame while dimming.
    pub fade_out: f64,
    /// Cursor increment per frame (or per second when timed).
    pub speed: f64,
    /// Activation radius.
    pub radius: f64,
    /// Control points for the next spawned path.
    pub point_count: usize,
    /// Requested degree for the next spawned path.
    pub degree: usize,
}

impl Default for LiveParams {
    fn default() -> Self {
        Self {
            fade_in: 0.5,
            fade_out: 0.1,
            speed: 0.2,
            radius: 1.5,
            point_count: 8,
            degree: 3,
        }
    }
}

impl LiveParams {
    /// Operator range for `fade_in` and `fade_out`.
    pub const FADE_RANGE: RangeInclusive<f64> = 0.001..=1.0;
    /// Operator range for `speed`.
    pub const SPEED_RANGE: RangeInclusive<f64> = 0.001..=10.0;
    /// Operator range for `radius`.
    pub const RADIUS_RANGE: RangeInclusive<f64> = 0.1..=15.0;
    /// Operator range for `point_count`.
    pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 2..=100;
    /// Operator range for `degree`.
    pub const DEGREE_RANGE: RangeInclusive<usize> = 1..=10;

    /// Returns a copy with every value pinned into its operator range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            fade_in: pin(self.fade_in, &Self::FADE_RANGE, defaults.fade_in),
            fade_out: pin(self.fade_out, &Self::FADE_RANGE, defaults.fade_out),
            speed: pin(self.speed, &Self::SPEED_RANGE, defaults.speed),
            radius: pin(self.radius, &Self::RADIUS_RANGE, defaults.radius),
            point_count: self
                .point_count
                .clamp(*Self::POINT_COUNT_RANGE.start(), *Self::POINT_COUNT_RANGE.end()),
            degree: self
                .degree
                .clamp(*Self::DEGREE_RANGE.start(), *Self::DEGREE_RANGE.end()),
        }
    }
}

fn pin(value: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
