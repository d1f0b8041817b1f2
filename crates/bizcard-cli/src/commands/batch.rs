//! Batch processing command for many OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use bizcard_core::{BusinessCardParser, CardParser, ContactRecord};

use super::load_config;
use super::parse::{format_record, sheet_row, OutputFormat, SHEET_HEADERS};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching OCR text files (*.txt)
    #[arg(required = true)]
    input: String,

    /// Directory for one output file per card
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: output.default_format from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write every parsed card as a row of one CSV sheet
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    record: Option<ContactRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let format = OutputFormat::resolve(args.format, &config)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = BusinessCardParser::from_config(&config.parser);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &parser);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(record) => {
                debug!("Parsed {} in {}ms", path.display(), processing_time_ms);
                results.push(ProcessResult {
                    path,
                    record: Some(record),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        record: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    progress.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.record.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(ref output_dir) = args.output_dir {
        for result in &successful {
            if let Some(record) = &result.record {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("card");
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, format.extension()));

                let content = format_record(record, format, &config.output.date_format)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if let Some(ref sheet_path) = args.sheet {
        let records: Vec<&ContactRecord> =
            successful.iter().filter_map(|r| r.record.as_ref()).collect();
        write_sheet(sheet_path, &records, &config.output.date_format)?;
        println!(
            "{} Sheet with {} contacts written to {}",
            style("✓").green(),
            records.len(),
            sheet_path.display()
        );
    }

    let total_parse_ms: u64 = results.iter().map(|r| r.processing_time_ms).sum();

    println!();
    println!(
        "{} Processed {} files in {:?} ({}ms parsing)",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        total_parse_ms
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, parser: &BusinessCardParser) -> anyhow::Result<ContactRecord> {
    let text = fs::read_to_string(path)?;
    Ok(parser.parse_record(&text))
}

/// Write contacts to a CSV sheet, one row per card.
fn write_sheet(path: &Path, records: &[&ContactRecord], date_format: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(SHEET_HEADERS)?;

    for record in records {
        wtr.write_record(sheet_row(record, date_format)?)?;
    }

    wtr.flush()?;
    Ok(())
}
