use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Visual configuration for one chart render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub chart_line_color: Color,
    pub selected_color: Color,
    pub unselected_color: Color,
    pub helper_line_thickness_px: f64,
    pub axis_line_thickness_px: f64,
    pub label_font_size_px: f64,
    /// Minimum vertical gap between adjacent y-axis labels.
    pub min_y_label_spacing_px: f64,
    pub vertical_padding_px: f64,
    pub horizontal_padding_px: f64,
    /// Horizontal gap added around each x-axis label slot.
    pub x_axis_label_spacing_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            chart_line_color: Color::rgb(0.0, 0.0, 0.0),
            selected_color: Color::rgb(0.0, 0.0, 0.0),
            unselected_color: Color::rgb(0.486, 0.486, 0.486),
            helper_line_thickness_px: 1.0,
            axis_line_thickness_px: 5.0,
            label_font_size_px: 14.0,
            min_y_label_spacing_px: 25.0,
            vertical_padding_px: 8.0,
            horizontal_padding_px: 8.0,
            x_axis_label_spacing_px: 8.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<()> {
        self.chart_line_color.validate()?;
        self.selected_color.validate()?;
        self.unselected_color.validate()?;

        for (field, value) in [
            ("helper_line_thickness_px", self.helper_line_thickness_px),
            ("axis_line_thickness_px", self.axis_line_thickness_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style field `{field}` must be finite and > 0"
                )));
            }
        }
        for (field, value) in [
            ("min_y_label_spacing_px", self.min_y_label_spacing_px),
            ("vertical_padding_px", self.vertical_padding_px),
            ("horizontal_padding_px", self.horizontal_padding_px),
            ("x_axis_label_spacing_px", self.x_axis_label_spacing_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style field `{field}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
