use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::{Point3, Vector3};

/// Box in which random control points are scattered.
///
/// The half-extent along each axis is `extent * radius`, so a path's size
/// follows its activation radius: a wide radius sweeps a wide loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathBounds {
    /// Centre of the box in the venue frame.
    pub center: Point3,
    /// Per-axis half-extent, in multiples of the activation radius.
    pub extent: Vector3,
}

impl Default for PathBounds {
    /// Origin-centred, y-up: twice the radius horizontally, once vertically.
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            extent: Vector3::new(2.0, 1.0, 2.0),
        }
    }
}

impl PathBounds {
    /// Half-extent of the box for a path of the given radius.
    ///
    /// Negative or non-finite components collapse to 0.
    #[must_use]
    pub fn half_extent(&self, radius: f64) -> Vector3 {
        self.extent.map(|e| {
            let h = e.abs() * radius;
            if h.is_finite() {
                h
            } else {
                0.0
            }
        })
    }

    /// Whether every coordinate drawn for `radius` stays finite.
    ///
    /// Sampling needs the full width `2 * half` of each axis, and the
    /// shifted range `center +- half`, to be representable.
    #[must_use]
    pub fn is_drawable(&self, radius: f64) -> bool {
        let half = self.half_extent(radius);
        half.iter().zip(self.center.coords.iter()).all(|(h, c)| {
            (2.0 * h).is_finite() && (c + h).is_finite() && (c - h).is_finite()
        })
    }

    /// Draws `count` control points uniformly inside the box.
    ///
    /// Callers must check [`PathBounds::is_drawable`] first; an axis too wide
    /// to represent makes the sampler panic.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize, radius: f64) -> Vec<Point3> {
        let half = self.half_extent(radius);
        (0..count)
            .map(|_| {
                Point3::new(
                    self.center.x + rng.random_range(-half.x..=half.x),
                    self.center.y + rng.random_range(-half.y..=half.y),
                    self.center.z + rng.random_range(-half.z..=half.z),
                )
            })
            .collect()
    }
}
