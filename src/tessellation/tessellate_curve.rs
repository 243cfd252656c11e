use crate::geometry::Curve;

use super::Polyline;

/// Tessellates a curve into a polyline by uniform parameter sampling.
pub struct TessellateCurve<'a, C: Curve + ?Sized> {
    curve: &'a C,
    segments: usize,
}

impl<'a, C: Curve + ?Sized> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation with `segments` segments
    /// (at least one).
    #[must_use]
    pub fn new(curve: &'a C, segments: usize) -> Self {
        Self {
            curve,
            segments: segments.max(1),
        }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// Closed curves yield `segments` vertices with `closed` set, so the
    /// wrap point is not duplicated. Open curves yield `segments + 1`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Polyline {
        let domain = self.curve.domain();
        let closed = self.curve.is_closed();
        let count = if closed {
            self.segments
        } else {
            self.segments + 1
        };
        let span = domain.t_max - domain.t_min;

        let points = (0..count)
            .map(|i| {
                let t = domain.t_min + span * (i as f64 / self.segments as f64);
                self.curve.evaluate(t)
            })
            .collect();

        Polyline { points, closed }
    }
}
