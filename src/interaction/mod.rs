//! Pointer-to-data-point resolution against the most recent layout snapshot.

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::layout::DrawPoint;
use crate::core::types::VisibleRange;

/// Resolves a pointer x coordinate to the index of a draw point.
///
/// A point is hit when its pixel x lies within half a `trigger_width` of the
/// pointer (the x-label slot width from the layout pass that produced
/// `draw_points`). When several points fall inside the trigger range the
/// leftmost one wins. Returns `None` when nothing matches or the inputs are
/// not finite.
#[must_use]
pub fn hit_test_x(draw_points: &[DrawPoint], pointer_x: f64, trigger_width: f64) -> Option<usize> {
    if !pointer_x.is_finite() || !trigger_width.is_finite() {
        return None;
    }

    let trigger_left = pointer_x - trigger_width / 2.0;
    let trigger_right = pointer_x + trigger_width / 2.0;

    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 4]> = SmallVec::new();
    for (index, point) in draw_points.iter().enumerate() {
        if point.pixel_x >= trigger_left && point.pixel_x <= trigger_right {
            candidates.push((OrderedFloat(point.pixel_x), index));
        }
    }

    candidates
        .into_iter()
        .min_by_key(|candidate| *candidate)
        .map(|(_, index)| index)
}

/// Translates a local hit-test index back to a global sample index, accepting
/// it only when it stays inside the visible range.
///
/// Drag gestures that start or end outside the plotted data resolve to `None`
/// and must be treated as no selection change.
#[must_use]
pub fn accept_drag_hit(local_index: Option<usize>, range: VisibleRange) -> Option<usize> {
    let global_index = local_index? + range.first;
    range.contains(global_index).then_some(global_index)
}
