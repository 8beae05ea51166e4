use crate::error::{GuideError, Result};
use crate::types::{GuideMarker, GuideSegment};
use serde::{Deserialize, Serialize};

/// Width of a plain guide marker, in pixels
pub const MARKER_WIDTH_PX: f64 = 1.0;

/// Pixel metrics of the viewer the guides are painted onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Rendered width of one column (one space)
    pub column_width_px: f64,

    /// Height of one line
    pub line_height_px: f64,

    /// Horizontal offset before the code text begins
    pub left_offset_px: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            column_width_px: 7.2,
            line_height_px: 20.0,
            left_offset_px: 0.0,
        }
    }
}

/// Rectangle in viewer pixels, relative to the top-left of the code area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutMetrics {
    /// Validate metrics
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("column_width_px", self.column_width_px),
            ("line_height_px", self.line_height_px),
            ("left_offset_px", self.left_offset_px),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GuideError::invalid_config(format!("{name} must be finite")));
            }
        }

        if self.column_width_px <= 0.0 {
            return Err(GuideError::invalid_config("column_width_px must be > 0"));
        }
        if self.line_height_px <= 0.0 {
            return Err(GuideError::invalid_config("line_height_px must be > 0"));
        }
        if self.left_offset_px < 0.0 {
            return Err(GuideError::invalid_config("left_offset_px must be >= 0"));
        }

        Ok(())
    }

    fn column_left(&self, column: usize) -> f64 {
        self.left_offset_px + column as f64 * self.column_width_px
    }

    fn line_top(&self, line_index: usize) -> f64 {
        line_index as f64 * self.line_height_px
    }

    /// Rectangle covered by a colored segment on the given 0-indexed line
    #[must_use]
    pub fn segment_rect(&self, line_index: usize, segment: &GuideSegment) -> PixelRect {
        PixelRect {
            left: self.column_left(segment.start_column),
            top: self.line_top(line_index),
            width: segment.width_columns as f64 * self.column_width_px,
            height: self.line_height_px,
        }
    }

    /// Rectangle of a plain guide marker on the given 0-indexed line
    #[must_use]
    pub fn marker_rect(&self, line_index: usize, marker: &GuideMarker) -> PixelRect {
        PixelRect {
            left: self.column_left(marker.column),
            top: self.line_top(line_index),
            width: MARKER_WIDTH_PX,
            height: self.line_height_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorRole;
    use pretty_assertions::assert_eq;

    fn metrics() -> LayoutMetrics {
        LayoutMetrics {
            column_width_px: 8.0,
            line_height_px: 20.0,
            left_offset_px: 10.0,
        }
    }

    #[test]
    fn test_segment_rect() {
        let segment = GuideSegment::new(4, 2, ColorRole::Palette(1));
        assert_eq!(
            metrics().segment_rect(3, &segment),
            PixelRect {
                left: 42.0,
                top: 60.0,
                width: 16.0,
                height: 20.0,
            }
        );
    }

    #[test]
    fn test_marker_rect() {
        let rect = metrics().marker_rect(0, &GuideMarker { column: 0 });
        assert_eq!(
            rect,
            PixelRect {
                left: 10.0,
                top: 0.0,
                width: MARKER_WIDTH_PX,
                height: 20.0,
            }
        );
    }

    #[test]
    fn test_validation() {
        assert!(LayoutMetrics::default().validate().is_ok());
        assert!(metrics().validate().is_ok());

        let mut bad = metrics();
        bad.column_width_px = 0.0;
        assert!(bad.validate().is_err());

        let mut bad = metrics();
        bad.line_height_px = f64::NAN;
        assert!(bad.validate().is_err());

        let mut bad = metrics();
        bad.left_offset_px = -1.0;
        assert!(bad.validate().is_err());
    }
}
