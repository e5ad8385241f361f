use approx::assert_abs_diff_eq;
use linechart_rs::core::{CurveKind, DrawPoint, PathCommand, build_curve_path};

fn point(x: f64, y: f64) -> DrawPoint {
    DrawPoint {
        pixel_x: x,
        pixel_y: y,
        label: String::new(),
    }
}

/// De Casteljau evaluation of one cubic segment.
fn cubic_at(
    t: f64,
    p0: (f64, f64),
    c1: (f64, f64),
    c2: (f64, f64),
    p1: (f64, f64),
) -> (f64, f64) {
    let lerp = |a: (f64, f64), b: (f64, f64)| (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
    let a = lerp(p0, c1);
    let b = lerp(c1, c2);
    let c = lerp(c2, p1);
    let d = lerp(a, b);
    let e = lerp(b, c);
    lerp(d, e)
}

#[test]
fn cubic_control_points_share_midpoint_x_with_endpoint_ys() {
    let path = build_curve_path(&[point(0.0, 0.0), point(10.0, 20.0)], CurveKind::Cubic);

    assert_eq!(path.len(), 2);
    assert!(matches!(path[0], PathCommand::MoveTo { x, y } if x == 0.0 && y == 0.0));
    match path[1] {
        PathCommand::CubicTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            assert_abs_diff_eq!(x1, 5.0, epsilon = 1e-12);
            assert_abs_diff_eq!(y1, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(x2, 5.0, epsilon = 1e-12);
            assert_abs_diff_eq!(y2, 20.0, epsilon = 1e-12);
            assert_abs_diff_eq!(x, 10.0, epsilon = 1e-12);
            assert_abs_diff_eq!(y, 20.0, epsilon = 1e-12);
        }
        other => panic!("expected CubicTo, got {other:?}"),
    }
}

#[test]
fn flat_cubic_segment_degenerates_to_a_line() {
    let path = build_curve_path(&[point(0.0, 50.0), point(100.0, 50.0)], CurveKind::Cubic);

    let PathCommand::CubicTo {
        x1,
        y1,
        x2,
        y2,
        x,
        y,
    } = path[1]
    else {
        panic!("expected CubicTo, got {:?}", path[1]);
    };
    let midpoint = cubic_at(0.5, (0.0, 50.0), (x1, y1), (x2, y2), (x, y));
    assert_abs_diff_eq!(midpoint.1, 50.0, epsilon = 1e-12);
}

#[test]
fn linear_mode_emits_straight_segments() {
    let path = build_curve_path(
        &[point(0.0, 0.0), point(10.0, 5.0), point(20.0, 2.0)],
        CurveKind::Linear,
    );

    assert_eq!(path.len(), 3);
    assert!(matches!(path[0], PathCommand::MoveTo { .. }));
    assert!(matches!(path[1], PathCommand::LineTo { x, y } if x == 10.0 && y == 5.0));
    assert!(matches!(path[2], PathCommand::LineTo { x, y } if x == 20.0 && y == 2.0));
}

#[test]
fn degenerate_inputs_produce_trivial_paths() {
    assert!(build_curve_path(&[], CurveKind::Cubic).is_empty());

    let single = build_curve_path(&[point(3.0, 4.0)], CurveKind::Cubic);
    assert_eq!(single.len(), 1);
    assert!(matches!(single[0], PathCommand::MoveTo { x, y } if x == 3.0 && y == 4.0));
}

#[test]
fn segment_count_tracks_point_count() {
    let points: Vec<DrawPoint> = (0..7).map(|i| point(i as f64 * 10.0, i as f64)).collect();
    for kind in [CurveKind::Cubic, CurveKind::Linear] {
        let path = build_curve_path(&points, kind);
        assert_eq!(path.len(), points.len());
    }
}
