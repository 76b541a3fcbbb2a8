//! wordlayout CLI - list indentation resolution and layout validation

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use wordlayout::json::{self, JsonFormat};
use wordlayout::validate::ValidationIssue;
use wordlayout::{LayoutEngine, LengthUnit, ResolverOptions, ValidationReport};

#[derive(Parser)]
#[command(name = "wordlayout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Resolve list indentation and validate paginated layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve list numbering and indentation for a paragraph sequence
    Resolve {
        /// Input JSON file with `numbering` and `paragraphs`
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Disable indent auto-correction
        #[arg(long)]
        no_auto_correct: bool,

        /// Maximum spread of left offsets (points) that still unify
        #[arg(long, value_name = "POINTS", env = "WORDLAYOUT_UNIFY_TOLERANCE")]
        tolerance: Option<f32>,
    },

    /// Validate serialized layouts
    Validate {
        /// Layout JSON files
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a length to points
    Units {
        /// Value to convert
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: f32,

        /// Source unit (pt, twips, emu, px, hp, in, cm, mm)
        #[arg(short, long, default_value = "twips")]
        from: String,
    },

    /// Show layout information
    Info {
        /// Layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve {
            input,
            output,
            compact,
            no_auto_correct,
            tolerance,
        } => cmd_resolve(&input, output.as_deref(), compact, no_auto_correct, tolerance),
        Commands::Validate {
            inputs,
            strict,
            json,
        } => cmd_validate(&inputs, strict, json),
        Commands::Units { value, from } => cmd_units(value, &from),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_resolve(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    no_auto_correct: bool,
    tolerance: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = json::numbering_input_from_file(input)?;

    let mut options = ResolverOptions::new().with_auto_correct(!no_auto_correct);
    if let Some(points) = tolerance {
        options = options.with_unify_tolerance(points);
    }
    let resolved = LayoutEngine::new()
        .with_resolver_options(options)
        .resolve_input(&document);
    log::info!("resolved {} paragraphs", resolved.len());

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = json::to_json(&resolved, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn print_issue(label: colored::ColoredString, issue: &ValidationIssue) {
    println!("  {} {}", label, issue);
}

fn print_report(path: &Path, report: &ValidationReport) {
    let status = if report.is_valid {
        "valid".green().bold()
    } else {
        "invalid".red().bold()
    };
    println!(
        "{} {} ({} errors, {} warnings)",
        path.display().to_string().bold(),
        status,
        report.errors.len(),
        report.warnings.len()
    );
    for issue in &report.errors {
        print_issue("error".red(), issue);
    }
    for issue in &report.warnings {
        print_issue("warning".yellow(), issue);
    }
}

fn cmd_validate(
    inputs: &[PathBuf],
    strict: bool,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = LayoutEngine::new();
    if strict {
        engine = engine.strict();
    }

    let pb = if inputs.len() > 1 && !as_json {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::with_capacity(inputs.len());
    for path in inputs {
        if let Some(pb) = &pb {
            pb.set_message(path.display().to_string());
        }
        let layout = json::layout_from_file(path)?;
        results.push((path.as_path(), engine.validate(&layout)));
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if as_json {
        let reports: Vec<&ValidationReport> = results.iter().map(|(_, r)| r).collect();
        println!("{}", json::to_json(&reports, JsonFormat::Pretty)?);
    } else {
        for (path, report) in &results {
            print_report(path, report);
        }
    }

    let failed = results.iter().filter(|(_, r)| !r.is_valid).count();
    if failed > 0 {
        return Err(format!("{} of {} layouts failed validation", failed, results.len()).into());
    }
    if !as_json {
        println!("\n{} {} layouts valid", "Done!".green().bold(), results.len());
    }
    Ok(())
}

fn cmd_units(value: f32, from: &str) -> Result<(), Box<dyn std::error::Error>> {
    let unit = LengthUnit::parse(from)?;
    let points = unit.to_points(value);
    println!("{} {} = {} pt", value, from, points.to_string().cyan().bold());
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let layout = json::layout_from_file(input)?;

    println!("{}", "Layout Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), layout.page_count());
    println!("{}: {}", "Blocks".bold(), layout.blocks().count());
    println!("{}: {}", "Overlays".bold(), layout.overlay_count());

    for page in &layout.pages {
        println!(
            "  {} page {}: {}x{} pt, {} blocks{}",
            "├─".dimmed(),
            page.number,
            page.size.width,
            page.size.height,
            page.block_count(),
            if page.is_landscape() { " (landscape)" } else { "" }
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "wordlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("List indentation and layout validation tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/wordlayout".dimmed()
    );
    println!("License: MIT");
}
