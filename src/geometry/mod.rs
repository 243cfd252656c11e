pub mod curve;

pub use curve::{BSpline, Curve, CurveDomain};
