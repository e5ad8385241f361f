use crate::error::{ChartError, ChartResult};

/// Measured pixel box for one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

/// Injected text-measurement capability.
///
/// True text shaping is a platform concern; the layout engine only needs the
/// measured box and line count, so backends (pango, skia, test stubs) plug in
/// behind this trait. Measurement failures are propagated to the caller: they
/// indicate a host/config defect (bad font or style), not a data-driven edge
/// case.
pub trait LabelMetrics {
    fn measure(&self, text: &str, font_size_px: f64) -> ChartResult<TextExtents>;
}

/// Deterministic, backend-independent label measurement.
///
/// Widths come from per-character advance classes so layout stays stable in
/// headless tests and on hosts without a text engine. Multi-line labels
/// report the widest line and a height of `line_count` stacked lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedLabelMetrics {
    pub line_height_factor: f64,
}

impl Default for EstimatedLabelMetrics {
    fn default() -> Self {
        Self {
            line_height_factor: 1.2,
        }
    }
}

impl LabelMetrics for EstimatedLabelMetrics {
    fn measure(&self, text: &str, font_size_px: f64) -> ChartResult<TextExtents> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(ChartError::Measurement(format!(
                "font size must be finite and > 0, got {font_size_px}"
            )));
        }
        if !self.line_height_factor.is_finite() || self.line_height_factor <= 0.0 {
            return Err(ChartError::Measurement(
                "line height factor must be finite and > 0".to_owned(),
            ));
        }

        let line_count = text.split('\n').count();
        let width = text
            .split('\n')
            .map(|line| estimate_line_width_px(line, font_size_px))
            .fold(0.0_f64, f64::max)
            .max(font_size_px);
        let height = line_count as f64 * font_size_px * self.line_height_factor;

        Ok(TextExtents {
            width,
            height,
            line_count,
        })
    }
}

fn estimate_line_width_px(line: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = line.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}
