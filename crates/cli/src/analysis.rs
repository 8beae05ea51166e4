use crate::config::{CliConfig, DEFAULT_TAB_WIDTH, FALLBACK_INDENT_SIZE};
use crate::flags::IndentTypeFlag;
use crate::language::{is_comment_line, Language};
use crate::sniff::detect_indent_unit;
use anyhow::{Context, Result};
use clap::Args;
use indent_rainbow_core::{split_lines, GuideLayout, IndentUnit, LineGuides, MAX_TAB_WIDTH};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Options shared by every subcommand that analyzes a file
#[derive(Args, Debug)]
pub(crate) struct FileArgs {
    /// Source file to analyze
    pub file: PathBuf,

    /// Columns per tab stop (default: config value, then 8)
    #[arg(long)]
    pub tab_width: Option<usize>,

    /// Indent unit size in indent characters; skips detection
    #[arg(long)]
    pub indent_size: Option<usize>,

    /// Indent character used with --indent-size
    #[arg(long, value_enum, default_value = "space")]
    pub indent_type: IndentTypeFlag,

    /// Comment line prefix (repeatable); replaces the language defaults
    #[arg(long = "comment-prefix")]
    pub comment_prefixes: Vec<String>,
}

/// Where the indent unit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum UnitSource {
    Flag,
    Detected,
    Fallback,
}

pub(crate) struct Analysis {
    pub file: PathBuf,
    pub text: String,
    pub language: Language,
    pub layout: GuideLayout,
    pub unit_source: UnitSource,
    pub guides: Vec<LineGuides>,
}

impl Analysis {
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }
}

pub(crate) fn analyze(config: &CliConfig, args: &FileArgs) -> Result<Analysis> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let tab_width = args
        .tab_width
        .or(config.tab_width)
        .unwrap_or(DEFAULT_TAB_WIDTH);
    if tab_width == 0 || tab_width > MAX_TAB_WIDTH {
        anyhow::bail!("--tab-width must be between 1 and {MAX_TAB_WIDTH}, got {tab_width}");
    }

    let lines = split_lines(&text);

    let (unit, unit_source) = match args.indent_size {
        Some(size) => (args.indent_type.unit(size, tab_width), UnitSource::Flag),
        None => match detect_indent_unit(&lines, tab_width) {
            Some(unit) => (unit, UnitSource::Detected),
            None => {
                log::info!(
                    "no indented lines in {}, assuming {FALLBACK_INDENT_SIZE} spaces",
                    args.file.display()
                );
                (IndentUnit::spaces(FALLBACK_INDENT_SIZE), UnitSource::Fallback)
            }
        },
    };

    let language = Language::from_path(&args.file);
    let is_comment: Vec<bool> = if args.comment_prefixes.is_empty() {
        let prefixes = language.comment_prefixes();
        lines.iter().map(|line| is_comment_line(line, prefixes)).collect()
    } else {
        let prefixes = args.comment_prefixes.as_slice();
        lines.iter().map(|line| is_comment_line(line, prefixes)).collect()
    };

    let layout = GuideLayout::new(unit, tab_width, config.palette.clone())
        .context("Invalid guide configuration")?;
    let guides = layout.layout_lines(&lines, &is_comment)?;

    log::debug!(
        "{}: {} lines, language {}, unit {} {} ({:?})",
        args.file.display(),
        guides.len(),
        language.as_str(),
        unit.size,
        unit.kind.as_str(),
        unit_source
    );

    Ok(Analysis {
        file: args.file.clone(),
        text,
        language,
        layout,
        unit_source,
        guides,
    })
}
