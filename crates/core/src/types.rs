use crate::error::{GuideError, Result};
use serde::{Deserialize, Serialize};

/// Whitespace character a file indents with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentKind {
    Space,
    Tab,
}

impl IndentKind {
    /// Get the kind name as string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Tab => "tab",
        }
    }
}

/// File-wide indentation granularity
///
/// `size` is always in columns. A tab-indented file with a tab width of 4
/// has a unit of `{ kind: Tab, size: 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndentUnit {
    pub kind: IndentKind,
    pub size: usize,
}

impl IndentUnit {
    #[must_use]
    pub const fn new(kind: IndentKind, size: usize) -> Self {
        Self { kind, size }
    }

    /// Unit of `size` spaces
    #[must_use]
    pub const fn spaces(size: usize) -> Self {
        Self::new(IndentKind::Space, size)
    }

    /// Unit of `count` tabs, each expanding to `tab_width` columns
    #[must_use]
    pub const fn tabs(count: usize, tab_width: usize) -> Self {
        Self::new(IndentKind::Tab, count.saturating_mul(tab_width))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GuideError::invalid_config("indent unit size must be > 0"));
        }
        Ok(())
    }
}

/// Verdict on one line's indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClassification {
    /// Level is a whole number of indent units
    Consistent,
    /// Level is not a multiple of the indent unit
    Malformed,
    /// Leading whitespace mixes tabs and spaces
    Mixed,
}

impl LineClassification {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::Malformed => "malformed",
            Self::Mixed => "mixed",
        }
    }

    /// True for the malformed and mixed verdicts
    #[must_use]
    pub const fn is_problem(self) -> bool {
        !matches!(self, Self::Consistent)
    }
}

/// Which configured color a segment is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Index into the palette, already wrapped to its length
    Palette(usize),
    Error,
    TabMix,
}

/// One colored rectangle of a line's indentation, in column units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideSegment {
    pub start_column: usize,
    pub width_columns: usize,
    pub color_role: ColorRole,
}

impl GuideSegment {
    #[must_use]
    pub const fn new(start_column: usize, width_columns: usize, color_role: ColorRole) -> Self {
        Self {
            start_column,
            width_columns,
            color_role,
        }
    }

    /// First column past the segment
    #[must_use]
    pub const fn end_column(&self) -> usize {
        self.start_column + self.width_columns
    }
}

/// Plain vertical guide at an indent-unit boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideMarker {
    pub column: usize,
}

/// Everything computed for a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGuides {
    /// Level used for classification (comment lines are rounded up)
    pub level: usize,
    pub classification: LineClassification,
    /// Left to right, non-overlapping
    pub segments: Vec<GuideSegment>,
    pub markers: Vec<GuideMarker>,
}

impl LineGuides {
    /// Columns covered by all segments of this line
    #[must_use]
    pub fn covered_columns(&self) -> usize {
        self.segments.iter().map(|s| s.width_columns).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tab_unit_is_measured_in_columns() {
        let unit = IndentUnit::tabs(1, 4);
        assert_eq!(unit.kind, IndentKind::Tab);
        assert_eq!(unit.size, 4);
        assert_eq!(IndentUnit::tabs(2, 8).size, 16);
        assert_eq!(IndentUnit::tabs(2, usize::MAX).size, usize::MAX);
    }

    #[test]
    fn test_zero_unit_is_rejected() {
        assert!(IndentUnit::spaces(0).validate().is_err());
        assert!(IndentUnit::spaces(2).validate().is_ok());
    }

    #[test]
    fn test_segment_end_column() {
        let segment = GuideSegment::new(4, 2, ColorRole::Palette(2));
        assert_eq!(segment.end_column(), 6);
    }

    #[test]
    fn test_classification_problem_flag() {
        assert!(!LineClassification::Consistent.is_problem());
        assert!(LineClassification::Malformed.is_problem());
        assert!(LineClassification::Mixed.is_problem());
    }

    #[test]
    fn test_color_role_wire_names() {
        let roles = [ColorRole::Palette(1), ColorRole::Error, ColorRole::TabMix];
        let json = serde_json::to_string(&roles).unwrap();
        assert_eq!(json, r#"[{"palette":1},"error","tab_mix"]"#);
    }
}
