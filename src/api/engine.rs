use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::curve::{PathCommand, build_curve_path};
use crate::core::layout::{ChartLayout, DrawPoint, LayoutRequest, compute_layout};
use crate::core::text::LabelMetrics;
use crate::core::types::{DataPoint, Viewport, VisibleRange};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{accept_drag_hit, hit_test_x};

use super::ChartEngineConfig;

/// Draw plan plus curve path for one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartFrame {
    pub layout: ChartLayout,
    pub path: Vec<PathCommand>,
}

/// Geometry retained from the most recent render for pointer hit-testing.
///
/// A new render supersedes the previous snapshot; drags arriving in between
/// resolve against the last one.
struct LayoutSnapshot {
    draw_points: Vec<DrawPoint>,
    slot_width: f64,
    visible_range: VisibleRange,
}

/// Stateful adapter around the pure layout computation.
///
/// The engine owns the sample list, the visible range and the current
/// selection, recomputes the draw plan on every [`ChartEngine::render`] call
/// and resolves drag gestures against the most recent layout. Everything is
/// single-threaded and synchronous; there is no background computation.
pub struct ChartEngine<M: LabelMetrics> {
    metrics: M,
    config: ChartEngineConfig,
    data: Vec<DataPoint>,
    visible_range: VisibleRange,
    selected_index: Option<usize>,
    markers_active: bool,
    last_layout: Option<LayoutSnapshot>,
    reported_slot_width: Option<f64>,
    on_selected_data_point: Option<Box<dyn FnMut(&DataPoint)>>,
    on_x_label_width_change: Option<Box<dyn FnMut(f64)>>,
}

impl<M: LabelMetrics> ChartEngine<M> {
    pub fn new(metrics: M, config: ChartEngineConfig) -> ChartResult<Self> {
        config.style.validate()?;
        Ok(Self {
            metrics,
            config,
            data: Vec::new(),
            visible_range: VisibleRange { first: 0, last: 0 },
            selected_index: None,
            markers_active: false,
            last_layout: None,
            reported_slot_width: None,
            on_selected_data_point: None,
            on_x_label_width_change: None,
        })
    }

    /// Replaces the sample series and resets the visible range to cover it.
    ///
    /// A selection pointing past the new series is dropped; the retained
    /// layout snapshot is invalidated either way.
    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        debug!(count = data.len(), "set chart data");
        self.data = data;
        if !self.data.is_empty() {
            self.visible_range = VisibleRange {
                first: 0,
                last: self.data.len() - 1,
            };
        }
        if matches!(self.selected_index, Some(index) if index >= self.data.len()) {
            self.selected_index = None;
            self.markers_active = false;
        }
        self.last_layout = None;
    }

    /// Restricts layout to an inclusive index sub-range of the samples.
    ///
    /// The range is a hard contract and is rejected up front when it falls
    /// outside the sample sequence.
    pub fn set_visible_range(&mut self, first: usize, last: usize) -> ChartResult<()> {
        let range = VisibleRange::new(first, last)?;
        range.validate_for(self.data.len())?;
        self.visible_range = range;
        Ok(())
    }

    /// Sets (or clears) the externally supplied selection by global index.
    pub fn select_data_point(&mut self, index: Option<usize>) -> ChartResult<()> {
        if let Some(selected) = index {
            if selected >= self.data.len() {
                return Err(ChartError::InvalidRange {
                    first: selected,
                    last: selected,
                    data_len: self.data.len(),
                });
            }
        }
        self.selected_index = index;
        self.markers_active = index.is_some();
        Ok(())
    }

    /// Registers the callback invoked when a drag resolves to an in-range sample.
    pub fn set_on_selected_data_point(&mut self, callback: impl FnMut(&DataPoint) + 'static) {
        self.on_selected_data_point = Some(Box::new(callback));
    }

    /// Registers the callback invoked when the x-label slot width changes.
    pub fn set_on_x_label_width_change(&mut self, callback: impl FnMut(f64) + 'static) {
        self.on_x_label_width_change = Some(Box::new(callback));
    }

    /// Recomputes the draw plan for the given viewport.
    ///
    /// The produced geometry becomes the hit-test snapshot for subsequent
    /// [`ChartEngine::pointer_drag`] calls, and the slot width is reported
    /// through the registered callback whenever it changes.
    pub fn render(&mut self, viewport: Viewport) -> ChartResult<ChartFrame> {
        let request = LayoutRequest {
            data: &self.data,
            visible_range: self.visible_range,
            style: &self.config.style,
            unit: &self.config.unit,
            viewport,
            selected_index: self.selected_index,
            show_helper_lines: self.config.show_helper_lines,
            show_point_markers: self.markers_active,
        };
        let layout = compute_layout(&request, &self.metrics)?;

        self.last_layout = Some(LayoutSnapshot {
            draw_points: layout.draw_points.clone(),
            slot_width: layout.slot_width,
            visible_range: self.visible_range,
        });
        if self.reported_slot_width != Some(layout.slot_width) {
            self.reported_slot_width = Some(layout.slot_width);
            if let Some(callback) = self.on_x_label_width_change.as_mut() {
                callback(layout.slot_width);
            }
        }

        let path = build_curve_path(&layout.draw_points, self.config.curve_kind);
        trace!(
            draw_points = layout.draw_points.len(),
            path_commands = path.len(),
            "rendered chart frame"
        );

        Ok(ChartFrame { layout, path })
    }

    /// Feeds one horizontal drag position and returns the newly selected
    /// sample, if the gesture resolved to one.
    ///
    /// Gestures outside the plotted data leave the selection unchanged (the
    /// point markers are hidden until a gesture lands again). Without a prior
    /// render there is no geometry to test against and the call is a no-op.
    pub fn pointer_drag(&mut self, pointer_x: f64) -> Option<DataPoint> {
        let accepted = {
            let snapshot = self.last_layout.as_ref()?;
            let local = hit_test_x(&snapshot.draw_points, pointer_x, snapshot.slot_width);
            accept_drag_hit(local, snapshot.visible_range)
        };

        self.markers_active = accepted.is_some();
        let global_index = accepted?;
        self.selected_index = Some(global_index);

        let point = self.data.get(global_index)?.clone();
        if let Some(callback) = self.on_selected_data_point.as_mut() {
            callback(&point);
        }
        Some(point)
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range
    }

    #[must_use]
    pub fn selected_data_point(&self) -> Option<&DataPoint> {
        self.data.get(self.selected_index?)
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }
}
