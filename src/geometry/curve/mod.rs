mod basis;
mod bspline;

pub use bspline::BSpline;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The normalized domain `[0, 1]` shared by every path curve.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Clamps `t` into the domain. `NaN` maps to `t_min`.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        if t.is_nan() {
            return self.t_min;
        }
        t.clamp(self.t_min, self.t_max)
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is infallible: parameters outside [`Curve::domain`] are
/// clamped, so a curve that was built successfully can be sampled from a
/// frame loop without error handling.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative vanishes at `t`.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
