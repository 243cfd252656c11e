use crate::math::{Point3, Vector3};

use super::Polyline;

/// One primitive of the operator preview.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A wireframe trace, either a curve or its control polygon.
    Polyline(Polyline),
    /// A cursor: its current position, activation radius, and heading.
    Marker {
        center: Point3,
        radius: f64,
        direction: Option<Vector3>,
    },
}

/// Receiver for preview draw commands.
///
/// Implement this over whatever renderer the host uses; `Vec<DrawCommand>`
/// collects commands for inspection or deferred drawing.
pub trait PreviewSink {
    /// Draws a polyline.
    fn polyline(&mut self, polyline: Polyline);

    /// Draws a cursor marker. `direction` is `None` where the curve has no
    /// defined heading.
    fn marker(&mut self, center: Point3, radius: f64, direction: Option<Vector3>);
}

impl PreviewSink for Vec<DrawCommand> {
    fn polyline(&mut self, polyline: Polyline) {
        self.push(DrawCommand::Polyline(polyline));
    }

    fn marker(&mut self, center: Point3, radius: f64, direction: Option<Vector3>) {
        self.push(DrawCommand::Marker {
            center,
            radius,
            direction,
        });
    }
}
