mod preview;
mod tessellate_curve;

pub use preview::{DrawCommand, PreviewSink};
pub use tessellate_curve::TessellateCurve;

use serde::{Deserialize, Serialize};

use crate::math::Point3;

/// Parameters controlling preview tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewParams {
    /// Line segments emitted per polynomial span of a curve.
    pub segments_per_span: usize,
    /// Minimum number of segments for a whole curve.
    pub min_segments: usize,
    /// Maximum number of segments for a whole curve.
    pub max_segments: usize,
    /// Also draw each curve's control polygon.
    pub control_polygon: bool,
}

impl Default for PreviewParams {
    fn default() -> Self {
        Self {
            segments_per_span: 16,
            min_segments: 8,
            max_segments: 1024,
            control_polygon: false,
        }
    }
}

impl PreviewParams {
    /// Number of segments for a curve with `spans` polynomial spans.
    ///
    /// Never zero, even with inconsistent bounds.
    #[must_use]
    pub fn segment_count(&self, spans: usize) -> usize {
        spans
            .saturating_mul(self.segments_per_span)
            .max(self.min_segments)
            .min(self.max_segments)
            .max(1)
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }
}
