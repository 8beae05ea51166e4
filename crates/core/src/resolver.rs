//! Indentation level of every line, in columns.
//!
//! Content lines report the width of their leading whitespace. Blank lines
//! carry no signal of their own and borrow a level from the nearest content
//! lines around them.

use crate::error::{GuideError, Result};
use std::cmp::Ordering;

/// Widest tab stop accepted anywhere a tab width is configured
pub const MAX_TAB_WIDTH: usize = 256;

/// Reject a tab width of zero or one past [`MAX_TAB_WIDTH`].
pub(crate) fn validate_tab_width(tab_width: usize) -> Result<()> {
    if tab_width == 0 {
        return Err(GuideError::invalid_config("tab width must be > 0"));
    }
    if tab_width > MAX_TAB_WIDTH {
        return Err(GuideError::invalid_config(format!(
            "tab width must be at most {MAX_TAB_WIDTH}, got {tab_width}"
        )));
    }
    Ok(())
}

/// Width of the leading whitespace run, or `None` when the line has no
/// non-whitespace character.
///
/// A tab advances to the next multiple of `tab_width`. Callers guarantee
/// `tab_width` passed [`validate_tab_width`].
pub(crate) fn compute_raw_level(line: &str, tab_width: usize) -> Option<usize> {
    let mut indent = 0usize;
    for byte in line.bytes() {
        match byte {
            b' ' => indent += 1,
            b'\t' => indent = (indent - indent % tab_width).saturating_add(tab_width),
            _ => return Some(indent),
        }
    }
    None
}

/// Level for a blank line sitting between two content lines.
///
/// `None` means there is no content line on that side (top or bottom of the
/// file), which always resolves to 0.
fn infer_blank_level(above: Option<usize>, below: Option<usize>) -> usize {
    match (above, below) {
        (Some(above), Some(below)) => match above.cmp(&below) {
            // still inside the block opened above
            Ordering::Less => above,
            // between two siblings, or in the dedented region that follows
            Ordering::Equal | Ordering::Greater => below,
        },
        _ => 0,
    }
}

/// Resolve the indentation level of every line.
///
/// The result has exactly one entry per input line. Runs in a single forward
/// pass: the nearest content line above is remembered as it is passed, and
/// the nearest content line below is found by a cursor that only moves
/// forward, so a file of blank lines costs the same as any other.
pub fn resolve_indent_levels<S: AsRef<str>>(lines: &[S], tab_width: usize) -> Result<Vec<usize>> {
    validate_tab_width(tab_width)?;

    let raw: Vec<Option<usize>> = lines
        .iter()
        .map(|line| compute_raw_level(line.as_ref(), tab_width))
        .collect();

    let mut levels = Vec::with_capacity(raw.len());
    let mut above: Option<usize> = None;
    let mut below_index = 0;
    let mut inferred = 0usize;

    for (index, current) in raw.iter().enumerate() {
        if let Some(level) = *current {
            above = Some(level);
            levels.push(level);
            continue;
        }

        // below_index > index means we are still in the blank run that ends there
        if below_index <= index {
            below_index = index + 1;
            while below_index < raw.len() && raw[below_index].is_none() {
                below_index += 1;
            }
        }
        let below = raw.get(below_index).copied().flatten();

        let level = infer_blank_level(above, below);
        log::trace!("line {index}: blank, above={above:?} below={below:?} -> {level}");
        levels.push(level);
        inferred += 1;
    }

    log::debug!(
        "resolved {} lines ({} blank lines inferred)",
        levels.len(),
        inferred
    );

    Ok(levels)
}
