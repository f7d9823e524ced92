//! PDF PII Redaction CLI.
//!
//! By default, detects and redacts PII from a PDF. Use the `scan`
//! subcommand for a detection-only preview and `extract` to dump the text
//! layer for verification.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use piiredact::{Category, RedactionConfig, RedactionService, Rgb, RunSummary};

/// PDF PII Redaction Tool
///
/// Scans PDF documents for personally identifiable information and draws
/// opaque boxes over matched regions, physically removing the underlying
/// text. Processing is entirely local.
#[derive(Parser)]
#[command(name = "piiredact")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input PDF file path
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Custom literal term to redact (can be specified multiple times)
    #[arg(short, long, value_name = "TERM")]
    term: Vec<String>,

    /// Comma-separated built-in categories to detect (default: all)
    ///
    /// Categories: ssn, phone, email, address, dob, bank_account,
    /// credit_card, name
    #[arg(long, value_name = "LIST")]
    categories: Option<String>,

    /// Match only formatted SSNs, ignoring bare 9-digit sequences
    #[arg(long)]
    strict_ssn: bool,

    /// Redaction box fill color as RRGGBB hex
    #[arg(long, value_name = "COLOR", default_value = "000000")]
    color: String,

    /// Write a plain-text redaction report to this path
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect PII and print findings without writing a redacted PDF
    Scan {
        /// Input PDF file paths
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<PathBuf>,
    },

    /// Extract text from a PDF (for debugging and verification)
    Extract {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Parses the `--categories` list into an enabled set.
fn parse_categories(list: Option<&str>) -> Result<Vec<Category>> {
    let Some(list) = list else {
        return Ok(Category::BUILT_INS.to_vec());
    };

    let mut categories = Vec::new();
    for entry in list.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let category: Category = entry
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("cannot parse --categories entry '{}'", entry))?;
        categories.push(category);
    }

    if categories.is_empty() {
        anyhow::bail!("--categories must name at least one category");
    }
    Ok(categories)
}

/// Builds the run configuration from CLI flags.
fn build_config(cli: &Cli) -> Result<RedactionConfig> {
    let categories = parse_categories(cli.categories.as_deref())?;
    let color = Rgb::from_hex(&cli.color).map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(RedactionConfig::new()
        .with_categories(categories)
        .with_custom_terms(cli.term.iter().cloned())
        .with_color(color)
        .with_strict_ssn(cli.strict_ssn))
}

/// Command handler holding the configured service.
struct App {
    service: RedactionService,
    verbose: bool,
}

impl App {
    fn new(config: RedactionConfig, verbose: bool) -> Self {
        Self {
            service: RedactionService::new(config),
            verbose,
        }
    }

    /// Executes a redaction run.
    fn redact(&self, input: &Path, output: &Path, report: Option<&Path>) -> Result<()> {
        if self.verbose {
            println!("Input:  {}", input.display());
            println!("Output: {}", output.display());
        }

        let summary = self
            .service
            .redact(input, output)
            .with_context(|| "Redaction failed")?;

        if self.verbose {
            println!("\nRedaction Summary:");
            println!("  Pages processed: {}", summary.pages_processed);
            println!("  Pages modified:  {}", summary.pages_modified);
            println!("  Items redacted:  {}", summary.instances_redacted());
            for (category, count) in summary.counts_by_frequency() {
                println!("    {}: {}", category.label(), count);
            }
        }

        // Gaps are always shown; silently missing a page would defeat the
        // point of the tool.
        print_gaps(&summary);

        if summary.has_redactions() {
            println!(
                "✓ Successfully redacted {} item(s) → {}",
                summary.instances_redacted(),
                output.display()
            );
        } else {
            println!("⚠ No PII found to redact");
        }

        if let Some(report_path) = report {
            summary
                .write_report(report_path, &input.display().to_string())
                .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
            println!("✓ Report written → {}", report_path.display());
        }

        Ok(())
    }

    /// Executes a detection-only preview over one or more files.
    fn scan(&self, inputs: &[PathBuf]) -> Result<()> {
        for input in inputs {
            let summary = self
                .service
                .scan(input)
                .with_context(|| format!("Scan failed for {}", input.display()))?;

            println!("{}", "=".repeat(45));
            println!("{}", input.display());
            println!("{}", "=".repeat(45));

            if summary.records.is_empty() {
                println!("  No PII detected.");
            } else {
                for record in &summary.records {
                    println!(
                        "  Page {}: [{}] \"{}\"",
                        record.page + 1,
                        record.category.label(),
                        record.text
                    );
                }
                println!("\n  Total items found: {}", summary.instances_redacted());
                for (category, count) in summary.counts_by_frequency() {
                    println!("    {}: {}", category.label(), count);
                }
            }

            print_gaps(&summary);
            println!();
        }

        Ok(())
    }

    /// Extracts text from a PDF.
    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let text = self
            .service
            .extract_text(input)
            .with_context(|| "Text extraction failed")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

/// Prints skipped pages and dropped matches, if any.
fn print_gaps(summary: &RunSummary) {
    if !summary.skipped_pages.is_empty() {
        let pages: Vec<String> = summary
            .skipped_pages
            .iter()
            .map(|s| (s.page + 1).to_string())
            .collect();
        println!(
            "⚠ {} page(s) not redacted (no text layer): {}",
            summary.skipped_pages.len(),
            pages.join(", ")
        );
    }

    if !summary.dropped_matches.is_empty() {
        println!(
            "⚠ {} match(es) dropped (no geometry found):",
            summary.dropped_matches.len()
        );
        for dropped in &summary.dropped_matches {
            println!(
                "    Page {}: [{}] \"{}\"",
                dropped.page + 1,
                dropped.category.label(),
                dropped.text
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let app = App::new(config, cli.verbose);

    match &cli.command {
        Some(Commands::Scan { inputs }) => {
            app.scan(inputs)?;
        }
        Some(Commands::Extract { input, output }) => {
            app.extract(input, output.as_deref())?;
        }
        None => {
            let input = cli
                .input
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
            let output = cli
                .output
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--output is required"))?;

            app.redact(input, output, cli.report.as_deref())?;
        }
    }

    Ok(())
}
