use serde::{Deserialize, Serialize};

use crate::core::layout::DrawPoint;

/// Interpolation mode for the rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Smooth cubic interpolation between adjacent points (default).
    #[default]
    Cubic,
    /// Straight polygonal segments.
    Linear,
}

/// One drawable path command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
}

/// Builds the connecting path for the projected draw points.
///
/// Cubic mode joins each adjacent pair with control points that share the
/// midpoint x while keeping each endpoint's own y, which renders as a smooth
/// s-curve between differing levels and degenerates to a straight line when
/// the levels match. With fewer than two points the path is a single
/// `MoveTo` (one point) or empty.
#[must_use]
pub fn build_curve_path(points: &[DrawPoint], kind: CurveKind) -> Vec<PathCommand> {
    let Some(start) = points.first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo {
        x: start.pixel_x,
        y: start.pixel_y,
    });

    for pair in points.windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        match kind {
            CurveKind::Cubic => {
                let mid_x = (p0.pixel_x + p1.pixel_x) / 2.0;
                commands.push(PathCommand::CubicTo {
                    x1: mid_x,
                    y1: p0.pixel_y,
                    x2: mid_x,
                    y2: p1.pixel_y,
                    x: p1.pixel_x,
                    y: p1.pixel_y,
                });
            }
            CurveKind::Linear => {
                commands.push(PathCommand::LineTo {
                    x: p1.pixel_x,
                    y: p1.pixel_y,
                });
            }
        }
    }

    commands
}
