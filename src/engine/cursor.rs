use crate::geometry::{BSpline, Curve};
use crate::math::{Point3, Vector3};

/// A traveling point on a closed curve.
///
/// The cursor exclusively owns its curve. Its normalized position always
/// lies in `[0, 1)` and wraps on overflow, so repeated advancement loops
/// around the curve forever.
#[derive(Debug, Clone)]
pub struct PathCursor {
    curve: BSpline,
    position: f64,
    radius: f64,
}

impl PathCursor {
    /// Creates a cursor at position 0 on `curve`.
    ///
    /// A negative or non-finite `radius` is stored as 0.
    #[must_use]
    pub fn new(curve: BSpline, radius: f64) -> Self {
        Self {
            curve,
            position: 0.0,
            radius: sanitize_radius(radius),
        }
    }

    /// Returns the curve this cursor travels along.
    #[must_use]
    pub fn curve(&self) -> &BSpline {
        &self.curve
    }

    /// Normalized position in `[0, 1)`.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Activation radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the activation radius. Negative or non-finite values become 0.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = sanitize_radius(radius);
    }

    /// Moves the cursor by `delta` and wraps the result into `[0, 1)`.
    ///
    /// Negative deltas run the cursor backwards. A non-finite delta is
    /// ignored.
    pub fn advance(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let next = (self.position + delta).rem_euclid(1.0);
        // rem_euclid rounds tiny negatives up to exactly 1.0.
        self.position = if next >= 1.0 { 0.0 } else { next };
    }

    /// Point on the curve at the cursor's position.
    #[must_use]
    pub fn current_position(&self) -> Point3 {
        self.curve.evaluate(self.position)
    }

    /// Unit direction of travel, if the curve has one here.
    #[must_use]
    pub fn heading(&self) -> Option<Vector3> {
        self.curve.tangent(self.position).ok()
    }

    /// Euclidean distance from the cursor's current position to `point`.
    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        (self.current_position() - point).norm()
    }
}

fn sanitize_radius(radius: f64) -> f64 {
    if radius.is_finite() {
        radius.max(0.0)
    } else {
        0.0
    }
}
