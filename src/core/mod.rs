pub mod curve;
pub mod layout;
pub mod primitives;
pub mod style;
pub mod text;
pub mod types;
pub mod value_label;

pub use curve::{CurveKind, PathCommand, build_curve_path};
pub use layout::{
    AxisLabel, ChartLayout, DrawPoint, HelperLine, LayoutRequest, POINT_MARKER_RADIUS_PX, PlotArea,
    PointMarker, SELECTED_HELPER_LINE_SCALE, SELECTED_MARKER_RADIUS_PX,
    TOP_ANNOTATION_CLEARANCE_PX, TopAnnotation, compute_layout,
};
pub use style::{ChartStyle, Color};
pub use text::{EstimatedLabelMetrics, LabelMetrics, TextExtents};
pub use types::{DataPoint, Viewport, VisibleRange};
pub use value_label::ValueLabel;
