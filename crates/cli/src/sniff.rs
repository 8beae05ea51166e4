//! Indentation unit detection.
//!
//! Looks at how much the leading whitespace grows or shrinks between
//! consecutive content lines and picks the most common step.

use indent_rainbow_core::{IndentKind, IndentUnit};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct KindStats {
    /// Content lines indented with this kind
    lines: usize,
    /// Step size -> how often it occurred
    steps: BTreeMap<usize, usize>,
}

impl KindStats {
    /// Most frequent step, smallest on ties.
    ///
    /// One-column steps only count when no wider step was seen: block
    /// comment bodies (` * text`) sit one space off their opening line.
    fn dominant_step(&self) -> Option<usize> {
        let only_single = self.steps.keys().all(|&step| step == 1);
        let mut best: Option<(usize, usize)> = None;
        for (&step, &count) in &self.steps {
            if step == 1 && !only_single {
                continue;
            }
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((step, count));
            }
        }
        best.map(|(step, _)| step)
    }
}

/// Leading run of a content line: its kind (from the first character) and
/// its length in characters. `None` for blank lines.
fn leading_run(line: &str) -> Option<(Option<IndentKind>, usize)> {
    let width = line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count();
    if width == line.len() {
        return None;
    }
    let kind = match line.as_bytes()[0] {
        b' ' => Some(IndentKind::Space),
        b'\t' => Some(IndentKind::Tab),
        _ => None,
    };
    Some((kind, width))
}

/// Detect the indentation unit of a file.
///
/// Returns `None` when no content line is indented. A tab unit's size is
/// the tab count times `tab_width`.
pub fn detect_indent_unit<S: AsRef<str>>(lines: &[S], tab_width: usize) -> Option<IndentUnit> {
    let mut spaces = KindStats::default();
    let mut tabs = KindStats::default();
    let mut previous: (Option<IndentKind>, usize) = (None, 0);

    for line in lines {
        let Some((kind, width)) = leading_run(line.as_ref()) else {
            continue;
        };

        if let Some(kind) = kind {
            let stats = match kind {
                IndentKind::Space => &mut spaces,
                IndentKind::Tab => &mut tabs,
            };
            stats.lines += 1;

            let (previous_kind, previous_width) = previous;
            // a switch of indent character says nothing about step size
            if previous_kind.is_none() || previous_kind == Some(kind) {
                let step = width.abs_diff(previous_width);
                if step > 0 {
                    *stats.steps.entry(step).or_default() += 1;
                }
            }
        }

        previous = (kind, width);
    }

    let (kind, stats) = if tabs.lines > spaces.lines {
        (IndentKind::Tab, &tabs)
    } else {
        (IndentKind::Space, &spaces)
    };
    let step = stats.dominant_step()?;

    let unit = match kind {
        IndentKind::Space => IndentUnit::spaces(step),
        IndentKind::Tab => IndentUnit::tabs(step, tab_width),
    };
    log::debug!(
        "detected indent unit: {} x{} ({} space lines, {} tab lines)",
        kind.as_str(),
        step,
        spaces.lines,
        tabs.lines
    );
    Some(unit)
}
