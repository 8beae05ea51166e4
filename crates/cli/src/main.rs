use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::analysis::{analyze, FileArgs};
use crate::config::CliConfig;

mod analysis;
mod config;
mod flags;
mod language;
mod report;
mod sniff;

#[derive(Parser)]
#[command(name = "indent-rainbow")]
#[command(about = "Color-coded indentation guides and indentation checks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// TOML config file (tab width, palette, pixel metrics)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indentation guides of every line
    Guides(GuidesArgs),

    /// Report lines with malformed or mixed indentation
    Check(CheckArgs),
}

#[derive(Args)]
struct GuidesArgs {
    #[command(flatten)]
    input: FileArgs,

    /// Output JSON
    #[arg(long)]
    json: bool,

    /// Add pixel rectangles to the JSON output (implies --json)
    #[arg(long)]
    pixels: bool,

    /// Pixel width of one column
    #[arg(long)]
    column_width: Option<f64>,

    /// Pixel height of one line
    #[arg(long)]
    line_height: Option<f64>,

    /// Pixels before the code text begins
    #[arg(long)]
    left_offset: Option<f64>,
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    input: FileArgs,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON parsing
    let json_output = match &cli.command {
        Commands::Guides(args) => args.json || args.pixels,
        Commands::Check(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match &cli.command {
        Commands::Guides(args) => run_guides(&config, args),
        Commands::Check(args) => run_check(&config, args),
    }
}

fn run_guides(config: &CliConfig, args: &GuidesArgs) -> Result<ExitCode> {
    let analysis = analyze(config, &args.input)?;

    if args.json || args.pixels {
        let metrics = if args.pixels {
            let mut metrics = config.metrics;
            if let Some(width) = args.column_width {
                metrics.column_width_px = width;
            }
            if let Some(height) = args.line_height {
                metrics.line_height_px = height;
            }
            if let Some(offset) = args.left_offset {
                metrics.left_offset_px = offset;
            }
            metrics.validate().context("Invalid pixel metrics")?;
            Some(metrics)
        } else {
            None
        };
        println!("{}", report::render_guides_json(&analysis, metrics)?);
    } else {
        print!("{}", report::render_guides_text(&analysis));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check(config: &CliConfig, args: &CheckArgs) -> Result<ExitCode> {
    let analysis = analyze(config, &args.input)?;

    let (out, problems) = if args.json {
        let (json, problems) = report::render_check_json(&analysis)?;
        (json + "\n", problems)
    } else {
        report::render_check_text(&analysis)
    };
    print!("{out}");

    if problems > 0 {
        log::warn!(
            "{}: {problems} line(s) with inconsistent indentation",
            analysis.file.display()
        );
        Ok(ExitCode::FAILURE)
    } else {
        log::info!("{}: indentation is consistent", analysis.file.display());
        Ok(ExitCode::SUCCESS)
    }
}
