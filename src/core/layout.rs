//! Chart layout engine: a pure projection from samples, style and viewport
//! size to a pixel-space draw plan.
//!
//! The computation is a single synchronous pass, recomputed per render. Hosts
//! keep the returned [`ChartLayout`] as the snapshot that pointer hit-testing
//! runs against until the next render supersedes it.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::style::{ChartStyle, Color};
use crate::core::text::{LabelMetrics, TextExtents};
use crate::core::types::{DataPoint, Viewport, VisibleRange};
use crate::core::value_label::ValueLabel;
use crate::error::{ChartError, ChartResult};

/// Fixed clearance between the plot top and the selected-value annotation.
pub const TOP_ANNOTATION_CLEARANCE_PX: f64 = 10.0;
/// Thickness multiplier for the selected vertical helper line.
pub const SELECTED_HELPER_LINE_SCALE: f64 = 1.8;
/// Radius of a regular data-point marker.
pub const POINT_MARKER_RADIUS_PX: f64 = 10.0;
/// Radius of the emphasized halo drawn around the selected marker.
pub const SELECTED_MARKER_RADIUS_PX: f64 = 15.0;

/// Plotting rectangle excluding the margins reserved for axis labels and the
/// top value annotation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotArea {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// A sample projected into pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPoint {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub label: String,
}

/// Draw instruction for one axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    /// Top-left corner of the label box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// Helper gridline segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelperLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

/// The selected sample's value label drawn above the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopAnnotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// Circle marker drawn on a data point while a drag selection is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// The selected point additionally gets a halo of
    /// [`SELECTED_MARKER_RADIUS_PX`].
    pub emphasized: bool,
}

/// Complete draw plan for one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartLayout {
    pub plot_area: PlotArea,
    /// Horizontal pixel width allocated per sample's x-axis label slot; also
    /// the pointer hit-test trigger width.
    pub slot_width: f64,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub helper_lines: Vec<HelperLine>,
    pub top_annotation: Option<TopAnnotation>,
    pub draw_points: Vec<DrawPoint>,
    pub markers: Vec<PointMarker>,
}

impl ChartLayout {
    /// True when the layout degenerated to a blank plot (no visible samples).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_points.is_empty()
    }
}

/// Input description for one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    pub data: &'a [DataPoint],
    pub visible_range: VisibleRange,
    pub style: &'a ChartStyle,
    /// Currency symbol or unit suffix for value labels.
    pub unit: &'a str,
    pub viewport: Viewport,
    /// Global index of the currently selected sample, if any.
    pub selected_index: Option<usize>,
    pub show_helper_lines: bool,
    /// Whether point markers are drawn (an active drag selection).
    pub show_point_markers: bool,
}

/// Computes the draw plan for one render pass.
///
/// Degenerate inputs produce valid-but-trivial output instead of errors: an
/// empty sample list yields an empty layout, a single sample a single point,
/// and a zero-variance series a flat mid-plot line. Errors are reserved for
/// contract violations (invalid viewport, style or visible range) and for
/// label-measurement failures, which are propagated.
pub fn compute_layout(
    request: &LayoutRequest<'_>,
    metrics: &dyn LabelMetrics,
) -> ChartResult<ChartLayout> {
    let viewport = request.viewport;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    request.style.validate()?;

    if request.data.is_empty() {
        return Ok(ChartLayout::default());
    }
    request.visible_range.validate_for(request.data.len())?;

    let range = request.visible_range;
    let visible = &request.data[range.first..=range.last];
    let style = request.style;

    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in visible {
        if !point.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "sample y value must be finite, got {}",
                point.y
            )));
        }
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    let mut x_extents = Vec::with_capacity(visible.len());
    for point in visible {
        x_extents.push(metrics.measure(&point.label, style.label_font_size_px)?);
    }
    let max_x_label_width = max_extent_by(&x_extents, |e| e.width);
    let max_x_label_height = max_extent_by(&x_extents, |e| e.height);
    let max_line_count = x_extents.iter().map(|e| e.line_count).max().unwrap_or(0);
    let label_line_height = if max_line_count > 0 {
        max_x_label_height / max_line_count as f64
    } else {
        0.0
    };

    let canvas_width = f64::from(viewport.width);
    let canvas_height = f64::from(viewport.height);

    // Reserve room below the plot for x labels and above it for the selected
    // value annotation (one label line).
    let plot_height = (canvas_height
        - (max_x_label_height
            + 2.0 * style.vertical_padding_px
            + label_line_height
            + style.x_axis_label_spacing_px))
        .max(0.0);

    // The y-label band extends half a line above the plot top and below the
    // plot bottom, hence one extra line height.
    let label_band_height = plot_height + label_line_height;
    let spacing_denominator = label_line_height + style.min_y_label_spacing_px;
    let tick_count = if spacing_denominator > 0.0 {
        ((label_band_height / spacing_denominator) as usize).max(1)
    } else {
        // Degenerate band: keep only the min/max boundary labels.
        1
    };

    let value_increment = (max_y - min_y) / tick_count as f64;
    let mut y_label_boxes = Vec::with_capacity(tick_count + 1);
    for step in 0..=tick_count {
        let label = ValueLabel::new(max_y - value_increment * step as f64, request.unit);
        let text = label.formatted();
        let extents = metrics.measure(&text, style.label_font_size_px)?;
        y_label_boxes.push((text, extents));
    }
    let max_y_label_width = max_extent_by(&y_label_boxes, |(_, e)| e.width);

    let plot_top = style.vertical_padding_px + label_line_height + TOP_ANNOTATION_CLEARANCE_PX;
    let plot_area = PlotArea {
        top: plot_top,
        bottom: plot_top + plot_height,
        left: 2.0 * style.horizontal_padding_px + max_y_label_width,
        right: canvas_width,
    };

    let slot_width = max_x_label_width + style.x_axis_label_spacing_px;

    let mut layout = ChartLayout {
        plot_area,
        slot_width,
        ..ChartLayout::default()
    };

    // Even vertical distribution: whatever band height the labels themselves
    // do not occupy is split into equal gaps between them.
    let height_required = label_line_height * (tick_count + 1) as f64;
    let y_label_spacing = (label_band_height - height_required) / tick_count as f64;

    place_x_axis(&mut layout, request, visible, &x_extents, metrics)?;
    place_y_axis(
        &mut layout,
        style,
        &y_label_boxes,
        label_line_height,
        y_label_spacing,
        max_y_label_width,
        request.show_helper_lines,
    );

    layout.draw_points = project_draw_points(visible, plot_area, slot_width, min_y, max_y);

    if request.show_point_markers {
        layout.markers = layout
            .draw_points
            .iter()
            .enumerate()
            .map(|(offset, point)| PointMarker {
                x: point.pixel_x,
                y: point.pixel_y,
                radius: POINT_MARKER_RADIUS_PX,
                emphasized: request.selected_index == Some(range.first + offset),
            })
            .collect();
    }

    debug!(
        visible = visible.len(),
        y_labels = layout.y_labels.len(),
        helper_lines = layout.helper_lines.len(),
        slot_width = layout.slot_width,
        "computed chart layout"
    );

    Ok(layout)
}

/// Lays out x-axis labels with their vertical helper lines and, for the
/// selected sample, the top value annotation.
fn place_x_axis(
    layout: &mut ChartLayout,
    request: &LayoutRequest<'_>,
    visible: &[DataPoint],
    x_extents: &[TextExtents],
    metrics: &dyn LabelMetrics,
) -> ChartResult<()> {
    let style = request.style;
    let range = request.visible_range;
    let plot = layout.plot_area;
    let canvas_width = f64::from(request.viewport.width);

    for (offset, extents) in x_extents.iter().enumerate() {
        let global_index = range.first + offset;
        let selected = request.selected_index == Some(global_index);
        let color = if selected {
            style.selected_color
        } else {
            style.unselected_color
        };

        // Each label is centered inside its slot; the slot row starts at the
        // plot's left edge.
        let x = plot.left + style.x_axis_label_spacing_px / 2.0 + layout.slot_width * offset as f64;
        layout.x_labels.push(AxisLabel {
            text: visible[offset].label.clone(),
            x,
            y: plot.bottom + style.x_axis_label_spacing_px,
            width: extents.width,
            height: extents.height,
            color,
        });

        if request.show_helper_lines {
            let line_x = x + extents.width / 2.0;
            layout.helper_lines.push(HelperLine {
                x1: line_x,
                y1: plot.bottom,
                x2: line_x,
                y2: plot.top,
                stroke_width: if selected {
                    style.helper_line_thickness_px * SELECTED_HELPER_LINE_SCALE
                } else {
                    style.helper_line_thickness_px
                },
                color,
            });
        }

        if selected {
            let text = ValueLabel::new(visible[offset].y, request.unit).formatted();
            let annotation = metrics.measure(&text, style.label_font_size_px)?;

            // Right-align on the last visible sample so the annotation does
            // not run past the canvas; otherwise center it on the slot.
            let aligned = if global_index == range.last {
                x - annotation.width
            } else {
                x - annotation.width / 2.0
            };
            let annotation_x = aligned + extents.width / 2.0;

            let clearance = (canvas_width - annotation_x).round();
            if clearance >= 0.0 && clearance <= canvas_width.round() {
                layout.top_annotation = Some(TopAnnotation {
                    text,
                    x: annotation_x,
                    y: plot.top - annotation.height - TOP_ANNOTATION_CLEARANCE_PX,
                    width: annotation.width,
                    height: annotation.height,
                    color: style.selected_color,
                });
            }
        }
    }

    Ok(())
}

/// Distributes the y-axis labels evenly across the label band and emits their
/// horizontal helper lines.
fn place_y_axis(
    layout: &mut ChartLayout,
    style: &ChartStyle,
    y_label_boxes: &[(String, TextExtents)],
    label_line_height: f64,
    spacing: f64,
    max_y_label_width: f64,
    show_helper_lines: bool,
) {
    let plot = layout.plot_area;

    for (index, (text, extents)) in y_label_boxes.iter().enumerate() {
        // Right-aligned against the widest y label, padded off the edge.
        let x = max_y_label_width - extents.width + style.horizontal_padding_px;
        let y = plot.top + index as f64 * (label_line_height + spacing) - label_line_height / 2.0;
        layout.y_labels.push(AxisLabel {
            text: text.clone(),
            x,
            y,
            width: extents.width,
            height: extents.height,
            color: style.unselected_color,
        });

        if show_helper_lines {
            let line_y = y + extents.height / 2.0;
            layout.helper_lines.push(HelperLine {
                x1: plot.left,
                y1: line_y,
                x2: plot.right,
                y2: line_y,
                stroke_width: style.helper_line_thickness_px,
                color: style.unselected_color,
            });
        }
    }
}

fn project_draw_points(
    visible: &[DataPoint],
    plot: PlotArea,
    slot_width: f64,
    min_y: f64,
    max_y: f64,
) -> Vec<DrawPoint> {
    let project = |offset: usize, point: &DataPoint| -> DrawPoint {
        let pixel_x = plot.left + offset as f64 * slot_width + slot_width / 2.0;
        // Interval mapping [min_y, max_y] -> [0, 1]; a zero-variance series
        // has no defined ratio and sits mid-plot.
        let ratio = if max_y > min_y {
            (point.y - min_y) / (max_y - min_y)
        } else {
            0.5
        };
        DrawPoint {
            pixel_x,
            pixel_y: plot.bottom - ratio * plot.height(),
            label: point.label.clone(),
        }
    };

    #[cfg(feature = "parallel-projection")]
    {
        visible
            .par_iter()
            .enumerate()
            .map(|(offset, point)| project(offset, point))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        visible
            .iter()
            .enumerate()
            .map(|(offset, point)| project(offset, point))
            .collect()
    }
}

fn max_extent_by<T>(items: &[T], field: impl Fn(&T) -> f64) -> f64 {
    items
        .iter()
        .map(|item| OrderedFloat(field(item)))
        .max()
        .map_or(0.0, OrderedFloat::into_inner)
}
