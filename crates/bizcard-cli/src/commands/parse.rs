//! Parse command - extract a contact from a single card's OCR text.

use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::{Args, ValueEnum};
use console::style;
use tracing::{debug, info};

use bizcard_core::{
    BizcardConfig, BusinessCardParser, CardParseResult, CardParser, ContactRecord, LineRole,
};

use super::load_config;

/// Column headers of exported contact sheets.
pub const SHEET_HEADERS: [&str; 7] = [
    "Name",
    "Title",
    "Company",
    "Phone",
    "Email",
    "Address",
    "Date Added",
];

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file with OCR output ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: output.default_format from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Show the role assigned to every line
    #[arg(long)]
    explain: bool,

    /// Validate extracted data
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// The explicit format, or the configured default.
    pub fn resolve(explicit: Option<Self>, config: &BizcardConfig) -> anyhow::Result<Self> {
        match explicit {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true)
                .map_err(anyhow::Error::msg),
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let format = OutputFormat::resolve(args.format, &config)?;

    let text = read_input(&args.input)?;
    info!("Parsing card text from {}", args.input.display());

    let parser = BusinessCardParser::from_config(&config.parser);
    let result = parser.parse(&text);

    if args.explain {
        eprintln!("{}", explain(&result));
    }

    // Validate if requested
    if args.validate {
        let issues = result.record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_record(&result.record, format, &config.output.date_format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

/// Render a contact in the requested format.
pub fn format_record(
    record: &ContactRecord,
    format: OutputFormat,
    date_format: &str,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(std::slice::from_ref(record), date_format),
        OutputFormat::Text => format_text(record, date_format),
    }
}

/// Render contacts as a sheet with one row per card.
pub fn format_csv(records: &[ContactRecord], date_format: &str) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(SHEET_HEADERS)?;

    for record in records {
        wtr.write_record(sheet_row(record, date_format)?)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// One sheet row for a contact.
pub fn sheet_row(record: &ContactRecord, date_format: &str) -> anyhow::Result<[String; 7]> {
    Ok([
        record.name.clone(),
        record.title.clone(),
        record.company.clone(),
        record.phone.clone(),
        record.email.clone(),
        record.address.clone(),
        format_date_added(record, date_format)?,
    ])
}

/// Format `created_at` in local time.
pub fn format_date_added(record: &ContactRecord, date_format: &str) -> anyhow::Result<String> {
    let mut out = String::new();
    write!(
        out,
        "{}",
        record.created_at.with_timezone(&Local).format(date_format)
    )
    .map_err(|_| anyhow::anyhow!("Invalid date format: {}", date_format))?;
    Ok(out)
}

fn format_text(record: &ContactRecord, date_format: &str) -> anyhow::Result<String> {
    let mut output = String::new();

    for (label, value) in [
        ("Name", &record.name),
        ("Title", &record.title),
        ("Company", &record.company),
        ("Phone", &record.phone),
        ("Email", &record.email),
        ("Address", &record.address),
    ] {
        if !value.is_empty() {
            output.push_str(&format!("{:<9}{}\n", format!("{}:", label), value));
        }
    }

    output.push_str(&format!(
        "{:<9}{}",
        "Added:",
        format_date_added(record, date_format)?
    ));

    Ok(output)
}

fn explain(result: &CardParseResult) -> String {
    let mut output = String::new();

    for line in &result.lines {
        let role = match line.role {
            LineRole::Unknown => style(line.role.as_str()).dim(),
            LineRole::Email | LineRole::Phone | LineRole::Website => {
                style(line.role.as_str()).cyan()
            }
            _ => style(line.role.as_str()).green(),
        };
        output.push_str(&format!("{:>3}  {:<8} {}\n", line.position, role, line.text));
    }

    if let Some(website) = &result.website {
        output.push_str(&format!("{} Website: {}\n", style("ℹ").blue(), website));
    }
    for warning in &result.warnings {
        output.push_str(&format!("{} {}\n", style("!").yellow(), warning));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> ContactRecord {
        ContactRecord {
            name: "Jane Doe".to_string(),
            title: "Senior Engineer".to_string(),
            company: "Acme, Inc".to_string(),
            phone: "5551234567".to_string(),
            email: "jane@acme.com".to_string(),
            address: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_csv_has_sheet_headers_and_quotes() {
        let csv = format_csv(&[record()], "%Y").unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("Name,Title,Company,Phone,Email,Address,Date Added")
        );
        assert_eq!(
            lines.next(),
            Some("Jane Doe,Senior Engineer,\"Acme, Inc\",5551234567,jane@acme.com,,2024")
        );
    }

    #[test]
    fn test_text_skips_empty_fields() {
        let text = format_text(&record(), "%Y").unwrap();

        assert!(text.contains("Name:    Jane Doe"));
        assert!(!text.contains("Address:"));
        assert!(text.ends_with("Added:   2024"));
    }

    #[test]
    fn test_invalid_date_format_is_an_error() {
        assert!(format_date_added(&record(), "%Q").is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let mut config = BizcardConfig::default();
        config.output.default_format = "text".to_string();

        assert_eq!(
            OutputFormat::resolve(None, &config).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Csv), &config).unwrap(),
            OutputFormat::Csv
        );
    }
}
