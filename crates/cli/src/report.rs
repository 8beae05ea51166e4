use crate::analysis::{Analysis, UnitSource};
use anyhow::Result;
use indent_rainbow_core::{
    ColorRole, GuideMarker, GuideSegment, IndentUnit, LayoutMetrics, LineClassification,
    LineGuides, PixelRect,
};
use serde::Serialize;

#[derive(Serialize)]
struct GuidesOutput<'a> {
    file: String,
    language: &'static str,
    unit: IndentUnit,
    unit_source: UnitSource,
    tab_width: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<LayoutMetrics>,
    lines: Vec<LineRecord<'a>>,
}

#[derive(Serialize)]
struct LineRecord<'a> {
    /// 1-indexed
    line: usize,
    level: usize,
    classification: LineClassification,
    segments: Vec<SegmentRecord<'a>>,
    markers: Vec<MarkerRecord>,
}

#[derive(Serialize)]
struct SegmentRecord<'a> {
    #[serde(flatten)]
    segment: GuideSegment,
    color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rect: Option<PixelRect>,
}

#[derive(Serialize)]
struct MarkerRecord {
    column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    rect: Option<PixelRect>,
}

#[derive(Serialize)]
struct CheckOutput {
    file: String,
    unit: IndentUnit,
    problems: Vec<Problem>,
}

#[derive(Serialize)]
struct Problem {
    line: usize,
    level: usize,
    classification: LineClassification,
}

pub(crate) fn render_guides_json(
    analysis: &Analysis,
    metrics: Option<LayoutMetrics>,
) -> Result<String> {
    let palette = analysis.layout.palette();
    let lines = analysis
        .guides
        .iter()
        .enumerate()
        .map(|(index, guides)| LineRecord {
            line: index + 1,
            level: guides.level,
            classification: guides.classification,
            segments: guides
                .segments
                .iter()
                .map(|segment| SegmentRecord {
                    segment: *segment,
                    color: palette.color_for(segment.color_role),
                    rect: metrics.map(|m| m.segment_rect(index, segment)),
                })
                .collect(),
            markers: guides
                .markers
                .iter()
                .map(|marker| MarkerRecord {
                    column: marker.column,
                    rect: metrics.map(|m| m.marker_rect(index, marker)),
                })
                .collect(),
        })
        .collect();

    let output = GuidesOutput {
        file: analysis.file.display().to_string(),
        language: analysis.language.as_str(),
        unit: analysis.layout.unit(),
        unit_source: analysis.unit_source,
        tab_width: analysis.layout.tab_width(),
        metrics,
        lines,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Column-by-column picture of a line's guides
fn guide_bar(guides: &LineGuides) -> String {
    let mut bar = vec![' '; guides.level];
    for segment in &guides.segments {
        let fill = match segment.color_role {
            ColorRole::Palette(_) => '.',
            ColorRole::Error => '!',
            ColorRole::TabMix => '~',
        };
        for cell in &mut bar[segment.start_column..segment.end_column()] {
            *cell = fill;
        }
    }
    for GuideMarker { column } in &guides.markers {
        bar[*column] = '|';
    }
    bar.into_iter().collect()
}

pub(crate) fn render_guides_text(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} ({}): unit {} {} column(s) [{}], tab width {}\n",
        analysis.file.display(),
        analysis.language.as_str(),
        analysis.layout.unit().size,
        analysis.layout.unit().kind.as_str(),
        unit_source_label(analysis.unit_source),
        analysis.layout.tab_width()
    ));

    for (index, (guides, line)) in analysis.guides.iter().zip(analysis.lines()).enumerate() {
        out.push_str(&format!(
            "{:>5} {:<10} {:>3} {}{}\n",
            index + 1,
            guides.classification.as_str(),
            guides.level,
            guide_bar(guides),
            line.trim_start_matches([' ', '\t'])
        ));
    }
    out
}

const fn unit_source_label(source: UnitSource) -> &'static str {
    match source {
        UnitSource::Flag => "from flags",
        UnitSource::Detected => "detected",
        UnitSource::Fallback => "fallback",
    }
}

fn problems(analysis: &Analysis) -> Vec<Problem> {
    analysis
        .guides
        .iter()
        .enumerate()
        .filter(|(_, guides)| guides.classification.is_problem())
        .map(|(index, guides)| Problem {
            line: index + 1,
            level: guides.level,
            classification: guides.classification,
        })
        .collect()
}

/// Returns the report and the number of problems found
pub(crate) fn render_check_text(analysis: &Analysis) -> (String, usize) {
    let problems = problems(analysis);
    let file = analysis.file.display();
    let mut out = String::new();
    for problem in &problems {
        let message = match problem.classification {
            LineClassification::Malformed => format!(
                "indentation of {} columns is not a multiple of {}",
                problem.level, analysis.layout.unit().size
            ),
            LineClassification::Mixed => "mixed tabs and spaces in indentation".to_string(),
            LineClassification::Consistent => continue,
        };
        out.push_str(&format!("{file}:{}: {message}\n", problem.line));
    }
    (out, problems.len())
}

/// Returns the report and the number of problems found
pub(crate) fn render_check_json(analysis: &Analysis) -> Result<(String, usize)> {
    let output = CheckOutput {
        file: analysis.file.display().to_string(),
        unit: analysis.layout.unit(),
        problems: problems(analysis),
    };
    let count = output.problems.len();
    Ok((serde_json::to_string_pretty(&output)?, count))
}
