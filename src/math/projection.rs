use serde::{Deserialize, Serialize};

use super::{Point2, Point3};

/// Reference plane used to flatten 3D cursor positions for 2D hit-testing.
///
/// Each variant names the two axes that are kept; the third is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionPlane {
    /// Keep `(x, y)`, drop `z`.
    #[default]
    Xy,
    /// Keep `(x, z)`, drop `y`. Top-down view of a y-up venue.
    Xz,
    /// Keep `(y, z)`, drop `x`.
    Yz,
}

impl ProjectionPlane {
    /// Projects a 3D point onto this plane.
    #[must_use]
    pub fn project(self, p: &Point3) -> Point2 {
        match self {
            Self::Xy => Point2::new(p.x, p.y),
            Self::Xz => Point2::new(p.x, p.z),
            Self::Yz => Point2::new(p.y, p.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_the_named_axis() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(ProjectionPlane::Xy.project(&p), Point2::new(1.0, 2.0));
        assert_eq!(ProjectionPlane::Xz.project(&p), Point2::new(1.0, 3.0));
        assert_eq!(ProjectionPlane::Yz.project(&p), Point2::new(2.0, 3.0));
    }

    #[test]
    fn default_is_xy() {
        assert_eq!(ProjectionPlane::default(), ProjectionPlane::Xy);
    }
}
