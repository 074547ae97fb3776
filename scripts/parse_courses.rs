use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use course_vocab::course::{convert_course, discover_course_files, select_courses, BatchSummary};
use course_vocab::{AppConfig, VocabularyTableParser};

#[derive(Debug, Parser)]
#[command(author, version, about = "Convert a directory of course PDFs into vocabulary JSON")]
struct Args {
    /// Input directory containing course PDFs (or extracted .txt files)
    #[arg(short, long, default_value = "pdf")]
    input: PathBuf,

    /// Output directory for the course JSON files
    #[arg(short, long, default_value = "courses")]
    output: PathBuf,

    /// Only convert these courses (file names without extension)
    #[arg(long, num_args = 1..)]
    only: Vec<String>,

    /// Path to configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value = "false")]
    pretty: bool,

    /// Keep the separator between the lines of a wrapped gloss
    #[arg(long, default_value = "false")]
    preserve_gloss_separator: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.output.pretty |= args.pretty;
    config.parser.preserve_gloss_separator |= args.preserve_gloss_separator;
    config.validate()?;

    info!("Starting course conversion");
    info!("Input directory: {:?}", args.input);
    info!("Output directory: {:?}", args.output);

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {:?}", args.output))?;

    let course_files = select_courses(discover_course_files(&args.input)?, &args.only);

    info!("Found {} course files", course_files.len());

    if course_files.is_empty() {
        anyhow::bail!("No course files found in {:?}", args.input);
    }

    let parser = VocabularyTableParser::new(config.parser.clone());
    let mut reports = Vec::with_capacity(course_files.len());

    for (idx, path) in course_files.iter().enumerate() {
        info!("Processing {}/{}: {:?}", idx + 1, course_files.len(), path);

        let report = convert_course(path, &args.output, &parser, &config.output);
        if let Some(error) = &report.error {
            warn!("Failed to process {:?}: {}", path, error);
        }
        reports.push(report);
    }

    let summary = BatchSummary::from_reports(reports);

    let summary_path = args.output.join("summary.json");
    let summary_json = serde_json::to_string_pretty(&summary)?;
    fs::write(&summary_path, summary_json)
        .with_context(|| format!("Failed to write summary: {:?}", summary_path))?;
    info!("Summary saved to: {:?}", summary_path);

    info!("Conversion complete!");
    info!("Summary:");
    info!("  - Documents: {}", summary.total_documents);
    info!("  - Succeeded: {}", summary.succeeded);
    info!("  - Failed: {}", summary.failed);
    info!("  - Entries: {}", summary.total_entries);

    if summary.succeeded == 0 {
        anyhow::bail!("No course could be converted");
    }

    Ok(())
}
