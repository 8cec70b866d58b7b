//! bgmask: make the dark background of an image transparent.

use bgmask_cli::output::{format_count, format_dimensions, format_percent, Status};
use bgmask_image::{remove_background, ProcessReport, Threshold};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "public/assets/sail-logo.png";
const DEFAULT_OUTPUT: &str = "public/assets/sail-logo-transparent.png";

/// Pixels whose average brightness is below this become transparent.
/// Edit and rebuild to tune it for a particular image.
const DEFAULT_THRESHOLD: Threshold = Threshold::new(30);

#[derive(Parser)]
#[command(name = "bgmask")]
#[command(about = "Remove a dark background from an image and save it as a transparent PNG")]
#[command(version)]
struct Cli {
    /// Path to the input image
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path of the PNG to write (overwritten if it exists)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "bgmask=debug,bgmask_image=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.input.exists() {
        Status::error(&format!("Error: Input file not found: {}", cli.input.display()));
        print_usage();
        return ExitCode::FAILURE;
    }

    match run(&cli.input, &cli.output) {
        Ok(report) => {
            print_report(&cli.input, &cli.output, &report);
            print_tip();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "processing failed");
            Status::error(&format!("Error processing image: {}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path) -> anyhow::Result<ProcessReport> {
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        threshold = %DEFAULT_THRESHOLD,
        "removing background"
    );
    Ok(remove_background(input, output, DEFAULT_THRESHOLD)?)
}

fn print_usage() {
    println!();
    println!("Usage: bgmask [input_path] [output_path]");
    println!("Example: bgmask {} {}", DEFAULT_INPUT, DEFAULT_OUTPUT);
}

fn print_report(input: &Path, output: &Path, report: &ProcessReport) {
    Status::success("Successfully processed image!");
    Status::detail("Input", &input.display().to_string());
    Status::detail("Output", &output.display().to_string());
    Status::detail(
        "Size",
        &format!("{} pixels", format_dimensions(report.width, report.height)),
    );
    Status::detail(
        "Transparent",
        &format!(
            "{} ({})",
            format_count(report.masked_pixels, "pixel", "pixels"),
            format_percent(report.masked_pixels as u64, report.total_pixels())
        ),
    );
}

fn print_tip() {
    let current = format!(
        "Current threshold: {} (DEFAULT_THRESHOLD in bins/bgmask/src/main.rs)",
        DEFAULT_THRESHOLD
    );
    // Lower masks less: only pixels darker than the cutoff are removed.
    Status::tip(
        "Tip: the threshold can be adjusted in the source",
        &[
            &current,
            "Lower threshold = only the darkest pixels are removed",
            "Higher threshold = more of the image is made transparent",
        ],
    );
}
