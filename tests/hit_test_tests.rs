use linechart_rs::core::DrawPoint;
use linechart_rs::core::VisibleRange;
use linechart_rs::interaction::{accept_drag_hit, hit_test_x};

fn points(xs: &[f64]) -> Vec<DrawPoint> {
    xs.iter()
        .map(|&pixel_x| DrawPoint {
            pixel_x,
            pixel_y: 0.0,
            label: String::new(),
        })
        .collect()
}

#[test]
fn exact_pixel_match_returns_that_index() {
    let points = points(&[100.0, 160.0, 220.0]);
    assert_eq!(hit_test_x(&points, 160.0, 60.0), Some(1));
    assert_eq!(hit_test_x(&points, 220.0, 60.0), Some(2));
}

#[test]
fn query_outside_all_slots_misses() {
    let points = points(&[100.0, 160.0, 220.0]);
    assert_eq!(hit_test_x(&points, 20.0, 60.0), None);
    assert_eq!(hit_test_x(&points, 400.0, 60.0), None);
}

#[test]
fn trigger_range_is_inclusive_at_both_edges() {
    let points = points(&[100.0]);
    assert_eq!(hit_test_x(&points, 70.0, 60.0), Some(0));
    assert_eq!(hit_test_x(&points, 130.0, 60.0), Some(0));
    assert_eq!(hit_test_x(&points, 130.1, 60.0), None);
}

#[test]
fn first_matching_point_wins() {
    // Trigger width spanning both points: the leftmost is reported.
    let points = points(&[100.0, 120.0]);
    assert_eq!(hit_test_x(&points, 110.0, 100.0), Some(0));
}

#[test]
fn empty_draw_points_never_hit() {
    assert_eq!(hit_test_x(&[], 100.0, 60.0), None);
}

#[test]
fn drag_hit_translates_to_global_index() {
    let range = VisibleRange::new(10, 14).expect("valid range");
    assert_eq!(accept_drag_hit(Some(0), range), Some(10));
    assert_eq!(accept_drag_hit(Some(4), range), Some(14));
    assert_eq!(accept_drag_hit(None, range), None);
}

#[test]
fn drag_hit_past_the_visible_range_is_ignored() {
    // A stale snapshot can resolve indices past a since-narrowed range.
    let range = VisibleRange::new(0, 2).expect("valid range");
    assert_eq!(accept_drag_hit(Some(3), range), None);
}
