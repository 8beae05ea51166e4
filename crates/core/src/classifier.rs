//! Per-line classification and guide segments.

use crate::config::PaletteConfig;
use crate::error::{GuideError, Result};
use crate::resolver::validate_tab_width;
use crate::types::{
    ColorRole, GuideMarker, GuideSegment, IndentUnit, LineClassification, LineGuides,
};

/// Leading whitespace contains both a space and a tab
pub(crate) fn has_mixed_whitespace(line: &str) -> bool {
    let mut spaces = false;
    let mut tabs = false;
    for byte in line.bytes() {
        match byte {
            b' ' => spaces = true,
            b'\t' => tabs = true,
            _ => break,
        }
    }
    spaces && tabs
}

/// Level used for classification and the verdict for it.
///
/// Comment bodies are rounded up to the next unit boundary and never flagged.
fn classify_level(
    level: usize,
    unit_size: usize,
    is_comment: bool,
    mixed: bool,
) -> (usize, LineClassification) {
    if is_comment {
        return (level.div_ceil(unit_size) * unit_size, LineClassification::Consistent);
    }

    let classification = if mixed {
        LineClassification::Mixed
    } else if level % unit_size != 0 {
        LineClassification::Malformed
    } else {
        LineClassification::Consistent
    };
    (level, classification)
}

fn build_line_guides(
    line: &str,
    level: usize,
    classification: LineClassification,
    unit_size: usize,
    palette: &PaletteConfig,
) -> LineGuides {
    let whole_guides = level / unit_size;

    let markers = (0..whole_guides)
        .map(|k| GuideMarker {
            column: k * unit_size,
        })
        .collect();

    let segments = match classification {
        _ if level == 0 => Vec::new(),
        LineClassification::Consistent if line.is_empty() => Vec::new(),
        LineClassification::Consistent => (0..whole_guides)
            .map(|k| {
                GuideSegment::new(k * unit_size, unit_size, ColorRole::Palette(k % palette.len()))
            })
            .collect(),
        LineClassification::Malformed => vec![GuideSegment::new(0, level, ColorRole::Error)],
        LineClassification::Mixed if palette.tabmix_enabled() => {
            vec![GuideSegment::new(0, level, ColorRole::TabMix)]
        }
        LineClassification::Mixed => Vec::new(),
    };

    LineGuides {
        level,
        classification,
        segments,
        markers,
    }
}

/// Classify every line and lay out its guide segments.
///
/// `levels` normally comes from [`crate::resolve_indent_levels`] over the same
/// `lines`. `tab_width` is the host's tab stop and is validated here so that a
/// bad layout configuration is caught before any per-line work.
///
/// Fails with `InvalidConfiguration` for a zero unit size, a zero tab width or
/// an unusable palette, and with `InvalidInput` when `levels`, `lines` and
/// `is_comment` differ in length.
pub fn classify_lines<S: AsRef<str>>(
    levels: &[usize],
    lines: &[S],
    unit: IndentUnit,
    tab_width: usize,
    is_comment: &[bool],
    palette: &PaletteConfig,
) -> Result<Vec<LineGuides>> {
    unit.validate()?;
    validate_tab_width(tab_width)?;
    palette.validate()?;

    if lines.len() != levels.len() {
        return Err(GuideError::length_mismatch("lines", levels.len(), lines.len()));
    }
    if is_comment.len() != levels.len() {
        return Err(GuideError::length_mismatch(
            "is_comment",
            levels.len(),
            is_comment.len(),
        ));
    }

    let guides: Vec<LineGuides> = levels
        .iter()
        .zip(lines)
        .zip(is_comment)
        .map(|((&level, line), &comment)| {
            let line = line.as_ref();
            let (level, classification) =
                classify_level(level, unit.size, comment, has_mixed_whitespace(line));
            build_line_guides(line, level, classification, unit.size, palette)
        })
        .collect();

    let malformed = guides
        .iter()
        .filter(|g| g.classification == LineClassification::Malformed)
        .count();
    let mixed = guides
        .iter()
        .filter(|g| g.classification == LineClassification::Mixed)
        .count();
    log::debug!(
        "classified {} lines with unit {} {} ({malformed} malformed, {mixed} mixed)",
        guides.len(),
        unit.size,
        unit.kind.as_str(),
    );

    Ok(guides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify_one(line: &str, level: usize, unit_size: usize, comment: bool) -> LineGuides {
        let palette = PaletteConfig::default();
        classify_lines(
            &[level],
            &[line],
            IndentUnit::spaces(unit_size),
            4,
            &[comment],
            &palette,
        )
        .expect("classify failed")
        .remove(0)
    }

    #[test]
    fn test_mixed_whitespace_detection() {
        assert!(has_mixed_whitespace(" \tx"));
        assert!(has_mixed_whitespace("\t x"));
        assert!(has_mixed_whitespace("  \t"));
        assert!(!has_mixed_whitespace("    x"));
        assert!(!has_mixed_whitespace("\t\tx"));
        assert!(!has_mixed_whitespace("x \t"));
        assert!(!has_mixed_whitespace(""));
    }

    #[test]
    fn test_consistent_line_gets_colored_fills() {
        let guides = classify_one("    x", 4, 2, false);
        assert_eq!(guides.classification, LineClassification::Consistent);
        assert_eq!(
            guides.segments,
            vec![
                GuideSegment::new(0, 2, ColorRole::Palette(0)),
                GuideSegment::new(2, 2, ColorRole::Palette(1)),
            ]
        );
        assert_eq!(
            guides.markers,
            vec![GuideMarker { column: 0 }, GuideMarker { column: 2 }]
        );
    }

    #[test]
    fn test_malformed_line_gets_single_error_block() {
        let guides = classify_one("   x", 3, 2, false);
        assert_eq!(guides.classification, LineClassification::Malformed);
        assert_eq!(guides.segments, vec![GuideSegment::new(0, 3, ColorRole::Error)]);
        assert_eq!(guides.markers, vec![GuideMarker { column: 0 }]);
    }

    #[test]
    fn test_comment_line_rounds_up() {
        let guides = classify_one("   * body", 3, 2, true);
        assert_eq!(guides.level, 4);
        assert_eq!(guides.classification, LineClassification::Consistent);
        assert_eq!(
            guides.segments,
            vec![
                GuideSegment::new(0, 2, ColorRole::Palette(0)),
                GuideSegment::new(2, 2, ColorRole::Palette(1)),
            ]
        );
    }

    #[test]
    fn test_comment_line_tolerates_mixed_whitespace() {
        let guides = classify_one(" \t// note", 4, 4, true);
        assert_eq!(guides.classification, LineClassification::Consistent);
        assert_eq!(guides.segments.len(), 1);
    }

    #[test]
    fn test_mixed_line_gets_tabmix_block() {
        let guides = classify_one(" \tx", 4, 4, false);
        assert_eq!(guides.classification, LineClassification::Mixed);
        assert_eq!(guides.segments, vec![GuideSegment::new(0, 4, ColorRole::TabMix)]);
        assert_eq!(guides.markers, vec![GuideMarker { column: 0 }]);
    }

    #[test]
    fn test_mixed_takes_precedence_over_malformed() {
        let guides = classify_one("  \t x", 5, 2, false);
        assert_eq!(guides.classification, LineClassification::Mixed);
        assert_eq!(guides.segments, vec![GuideSegment::new(0, 5, ColorRole::TabMix)]);
    }

    #[test]
    fn test_disabled_tabmix_keeps_markers_only() {
        let palette = PaletteConfig::default().without_tabmix();
        let guides = classify_lines(
            &[8],
            &["  \t\tx"],
            IndentUnit::spaces(4),
            4,
            &[false],
            &palette,
        )
        .unwrap();
        assert_eq!(guides[0].classification, LineClassification::Mixed);
        assert!(guides[0].segments.is_empty());
        assert_eq!(
            guides[0].markers,
            vec![GuideMarker { column: 0 }, GuideMarker { column: 4 }]
        );
    }

    #[test]
    fn test_zero_level_is_empty() {
        let guides = classify_one("x", 0, 4, false);
        assert_eq!(guides.classification, LineClassification::Consistent);
        assert!(guides.segments.is_empty());
        assert!(guides.markers.is_empty());
    }

    #[test]
    fn test_empty_line_with_inferred_level_has_markers_only() {
        let guides = classify_one("", 8, 4, false);
        assert_eq!(guides.classification, LineClassification::Consistent);
        assert!(guides.segments.is_empty());
        assert_eq!(guides.markers.len(), 2);
    }

    #[test]
    fn test_whitespace_only_line_gets_fills() {
        let guides = classify_one("        ", 8, 4, false);
        assert_eq!(guides.segments.len(), 2);
    }

    #[test]
    fn test_palette_index_wraps() {
        let palette = PaletteConfig::with_colors(["a", "b", "c"]);
        let line = " ".repeat(10) + "x";
        let guides = classify_lines(
            &[10],
            &[line.as_str()],
            IndentUnit::spaces(2),
            4,
            &[false],
            &palette,
        )
        .unwrap();
        let roles: Vec<ColorRole> = guides[0].segments.iter().map(|s| s.color_role).collect();
        assert_eq!(
            roles,
            vec![
                ColorRole::Palette(0),
                ColorRole::Palette(1),
                ColorRole::Palette(2),
                ColorRole::Palette(0),
                ColorRole::Palette(1),
            ]
        );
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let palette = PaletteConfig::default();
        let err = classify_lines(
            &[0, 4],
            &["a"],
            IndentUnit::spaces(4),
            4,
            &[false, false],
            &palette,
        )
        .unwrap_err();
        assert_eq!(err, GuideError::length_mismatch("lines", 2, 1));

        let err = classify_lines(
            &[0],
            &["a"],
            IndentUnit::spaces(4),
            4,
            &[],
            &palette,
        )
        .unwrap_err();
        assert!(matches!(err, GuideError::InvalidInput { what: "is_comment", .. }));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let palette = PaletteConfig::default();
        let lines = ["    x"];
        let zero_unit = classify_lines(&[4], &lines, IndentUnit::spaces(0), 4, &[false], &palette);
        assert!(matches!(zero_unit, Err(GuideError::InvalidConfiguration(_))));

        let zero_tab = classify_lines(&[4], &lines, IndentUnit::spaces(4), 0, &[false], &palette);
        assert!(matches!(zero_tab, Err(GuideError::InvalidConfiguration(_))));

        let huge_tab = usize::MAX / 2 + 1;
        let unit = IndentUnit::spaces(4);
        let result = classify_lines(&[4], &lines, unit, huge_tab, &[false], &palette);
        assert!(matches!(result, Err(GuideError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_empty_palette_fails_fast() {
        let palette = PaletteConfig::with_colors(Vec::<String>::new());
        // even with no line needing a fill color
        let result = classify_lines(&[0], &["x"], IndentUnit::spaces(4), 4, &[false], &palette);
        assert!(matches!(result, Err(GuideError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_segments_never_exceed_level() {
        let palette = PaletteConfig::default();
        let lines = ["x", "  x", "   x", "    x", " \tx", "", "      "];
        let levels = [0, 2, 3, 4, 4, 4, 6];
        let guides = classify_lines(
            &levels,
            &lines,
            IndentUnit::spaces(2),
            4,
            &[false; 7],
            &palette,
        )
        .unwrap();

        for guide in &guides {
            assert!(guide.covered_columns() <= guide.level);
            for pair in guide.segments.windows(2) {
                assert!(pair[0].end_column() <= pair[1].start_column);
            }
        }
    }
}
