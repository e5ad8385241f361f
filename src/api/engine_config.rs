use serde::{Deserialize, Serialize};

use crate::core::curve::CurveKind;
use crate::core::style::ChartStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub style: ChartStyle,
    /// Currency symbol or unit suffix appended to value labels.
    pub unit: String,
    #[serde(default = "default_show_helper_lines")]
    pub show_helper_lines: bool,
    #[serde(default)]
    pub curve_kind: CurveKind,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            style: ChartStyle::default(),
            unit: unit.into(),
            show_helper_lines: true,
            curve_kind: CurveKind::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_curve_kind(mut self, curve_kind: CurveKind) -> Self {
        self.curve_kind = curve_kind;
        self
    }

    #[must_use]
    pub fn with_helper_lines(mut self, show_helper_lines: bool) -> Self {
        self.show_helper_lines = show_helper_lines;
        self
    }
}

fn default_show_helper_lines() -> bool {
    true
}
