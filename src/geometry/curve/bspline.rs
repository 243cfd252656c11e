use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::basis::uniform_basis;
use super::{Curve, CurveDomain};

/// A closed (periodic) uniform B-spline in 3D space.
///
/// The curve blends `n` control points with uniform basis functions of the
/// given degree and wraps the control polygon, so it has `n` polynomial
/// spans and is as smooth across `t = 1 -> 0` as anywhere else. The
/// parametric domain is `[0, 1]` and `evaluate(0) == evaluate(1)`.
///
/// The degree is clamped to `n - 1` at construction.
#[derive(Debug, Clone)]
pub struct BSpline {
    control_points: Vec<Point3>,
    degree: usize,
}

impl BSpline {
    /// Creates a new closed B-spline.
    ///
    /// # Arguments
    ///
    /// * `control_points` - At least two points with finite coordinates
    /// * `degree` - Requested polynomial degree (at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two control points are supplied, any
    /// coordinate is not finite, or `degree` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(control_points: Vec<Point3>, degree: usize) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(GeometryError::InvalidParameter {
                parameter: "control_points",
                value: control_points.len() as f64,
                reason: "at least two control points are required",
            }
            .into());
        }
        if degree < 1 {
            return Err(GeometryError::InvalidParameter {
                parameter: "degree",
                value: degree as f64,
                reason: "degree must be at least 1",
            }
            .into());
        }
        if let Some(bad) = control_points
            .iter()
            .flat_map(|p| p.coords.iter().copied())
            .find(|c| !c.is_finite())
        {
            return Err(GeometryError::InvalidParameter {
                parameter: "control_points",
                value: bad,
                reason: "coordinates must be finite",
            }
            .into());
        }

        let degree = degree.min(control_points.len() - 1);
        Ok(Self {
            control_points,
            degree,
        })
    }

    /// Returns the control points in order.
    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Returns the effective (clamped) degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of polynomial spans, equal to the control point count.
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.control_points.len()
    }

    /// Maps a global parameter onto `(span index, local parameter in [0, 1])`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn locate(&self, t: f64) -> (usize, f64) {
        let n = self.span_count();
        let scaled = self.domain().clamp(t) * n as f64;
        let span = (scaled.floor() as usize).min(n - 1);
        (span, scaled - span as f64)
    }

    /// Control point blended with weight `r` on `span`, wrapping the polygon.
    fn point(&self, span: usize, r: usize) -> &Point3 {
        &self.control_points[(span + r) % self.control_points.len()]
    }

    /// First derivative with respect to the normalized parameter.
    #[allow(clippy::cast_precision_loss)]
    fn derivative(&self, t: f64) -> Vector3 {
        let (span, u) = self.locate(t);
        let weights = uniform_basis(self.degree - 1, u);
        let d = weights
            .iter()
            .enumerate()
            .fold(Vector3::zeros(), |acc, (r, w)| {
                acc + (self.point(span, r + 1) - self.point(span, r)) * *w
            });
        d * self.span_count() as f64
    }
}

impl Curve for BSpline {
    fn evaluate(&self, t: f64) -> Point3 {
        let (span, u) = self.locate(t);
        let weights = uniform_basis(self.degree, u);
        let coords = weights
            .iter()
            .enumerate()
            .fold(Vector3::zeros(), |acc, (r, w)| {
                acc + self.point(span, r).coords * *w
            });
        Point3::from(coords)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let d = self.derivative(t);
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Vec<Point3> {
        vec![
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        ]
    }

    fn dist(a: &Point3, b: &Point3) -> f64 {
        (a - b).norm()
    }

    #[test]
    fn rejects_single_point() {
        let r = BSpline::new(vec![Point3::origin()], 1);
        assert!(r.is_err());
    }

    #[test]
    fn rejects_zero_degree() {
        let r = BSpline::new(square(), 0);
        assert!(r.is_err());
    }

    #[test]
    fn rejects_non_finite_points() {
        let r = BSpline::new(
            vec![Point3::origin(), Point3::new(f64::NAN, 0.0, 0.0)],
            1,
        );
        assert!(r.is_err());
    }

    #[test]
    fn degree_is_clamped_below_point_count() {
        for n in 2_u32..=12 {
            let pts = (0..n)
                .map(|i| Point3::new(f64::from(i), 0.0, f64::from(i % 3)))
                .collect();
            let c = BSpline::new(pts, 10).unwrap();
            assert_eq!(c.degree(), usize::try_from((n - 1).min(10)).unwrap());
            assert!(c.degree() < c.control_points().len());
        }
    }

    #[test]
    fn requested_degree_kept_when_valid() {
        let c = BSpline::new(square(), 3).unwrap();
        assert_eq!(c.degree(), 3);
        assert_eq!(c.span_count(), 4);
    }

    #[test]
    fn linear_loop_visits_control_points() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let c = BSpline::new(vec![a, b], 1).unwrap();
        assert!(dist(&c.evaluate(0.0), &a) < 1e-12);
        assert!(dist(&c.evaluate(0.25), &Point3::new(1.0, 0.0, 0.0)) < 1e-12);
        assert!(dist(&c.evaluate(0.5), &b) < 1e-12);
        assert!(dist(&c.evaluate(0.75), &Point3::new(1.0, 0.0, 0.0)) < 1e-12);
    }

    #[test]
    fn cubic_start_point() {
        let c = BSpline::new(square(), 3).unwrap();
        let p = c.evaluate(0.0);
        assert_abs_diff_eq!(p.x, -2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn closed_at_wrap_point() {
        let c = BSpline::new(square(), 3).unwrap();
        assert!(c.is_closed());
        assert!(dist(&c.evaluate(0.0), &c.evaluate(1.0)) < 1e-12);
    }

    #[test]
    fn continuous_across_wrap() {
        let c = BSpline::new(square(), 3).unwrap();
        let before = c.evaluate(1.0 - 1e-7);
        let after = c.evaluate(1e-7);
        assert!(dist(&before, &after) < 1e-5);
    }

    #[test]
    fn continuous_across_spans() {
        let c = BSpline::new(square(), 2).unwrap();
        for span in 1..4 {
            let t = f64::from(span) / 4.0;
            let left = c.evaluate(t - 1e-9);
            let right = c.evaluate(t + 1e-9);
            assert!(dist(&left, &right) < 1e-6, "span boundary {t}");
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        let c = BSpline::new(square(), 3).unwrap();
        assert!(dist(&c.evaluate(-3.0), &c.evaluate(0.0)) < 1e-12);
        assert!(dist(&c.evaluate(7.0), &c.evaluate(1.0)) < 1e-12);
        assert!(dist(&c.evaluate(f64::NAN), &c.evaluate(0.0)) < 1e-12);
    }

    #[test]
    fn stays_inside_control_hull() {
        let c = BSpline::new(square(), 3).unwrap();
        for i in 0..=100 {
            let p = c.evaluate(f64::from(i) / 100.0);
            assert!(p.x.abs() <= 1.0 + 1e-12 && p.y.abs() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn deterministic() {
        let c = BSpline::new(square(), 3).unwrap();
        assert_eq!(c.evaluate(0.37), c.evaluate(0.37));
    }

    #[test]
    fn linear_tangent_follows_edge() {
        let c = BSpline::new(
            vec![Point3::origin(), Point3::new(0.0, 0.0, 5.0)],
            1,
        )
        .unwrap();
        let t = c.tangent(0.1).unwrap();
        assert!((t - Vector3::z()).norm() < 1e-12);
        let t = c.tangent(0.6).unwrap();
        assert!((t + Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn tangent_matches_finite_difference() {
        let c = BSpline::new(square(), 3).unwrap();
        let t = 0.3;
        let h = 1e-6;
        let fd = (c.evaluate(t + h) - c.evaluate(t - h)) / (2.0 * h);
        let tan = c.tangent(t).unwrap();
        assert!((tan - fd.normalize()).norm() < 1e-5);
    }

    #[test]
    fn coincident_points_have_no_tangent() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let c = BSpline::new(vec![p, p, p], 2).unwrap();
        assert!(dist(&c.evaluate(0.5), &p) < 1e-12);
        assert!(c.tangent(0.5).is_err());
    }
}
