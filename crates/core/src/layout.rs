use crate::classifier::classify_lines;
use crate::config::PaletteConfig;
use crate::error::Result;
use crate::lines::split_lines;
use crate::resolver::{resolve_indent_levels, validate_tab_width};
use crate::types::{IndentUnit, LineGuides};

/// Per-file guide layout: resolve then classify
///
/// Holds only validated configuration, so the same value can lay out any
/// number of files, from any number of threads.
#[derive(Debug, Clone)]
pub struct GuideLayout {
    unit: IndentUnit,
    tab_width: usize,
    palette: PaletteConfig,
}

impl GuideLayout {
    /// Create a layout, rejecting an unusable configuration up front
    pub fn new(unit: IndentUnit, tab_width: usize, palette: PaletteConfig) -> Result<Self> {
        unit.validate()?;
        validate_tab_width(tab_width)?;
        palette.validate()?;

        Ok(Self {
            unit,
            tab_width,
            palette,
        })
    }

    #[must_use]
    pub const fn unit(&self) -> IndentUnit {
        self.unit
    }

    #[must_use]
    pub const fn tab_width(&self) -> usize {
        self.tab_width
    }

    #[must_use]
    pub const fn palette(&self) -> &PaletteConfig {
        &self.palette
    }

    /// Lay out already-split lines
    pub fn layout_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        is_comment: &[bool],
    ) -> Result<Vec<LineGuides>> {
        let levels = resolve_indent_levels(lines, self.tab_width)?;
        classify_lines(
            &levels,
            lines,
            self.unit,
            self.tab_width,
            is_comment,
            &self.palette,
        )
    }

    /// Split `text` into lines and lay them out, asking `is_comment` about
    /// each line
    pub fn layout_text<F>(&self, text: &str, is_comment: F) -> Result<Vec<LineGuides>>
    where
        F: Fn(&str) -> bool,
    {
        let lines = split_lines(text);
        let flags: Vec<bool> = lines.iter().map(|&line| is_comment(line)).collect();
        self.layout_lines(&lines, &flags)
    }
}
