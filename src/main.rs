use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use course_vocab::course::{course_name, entries_to_json, parse_course, read_document_text};
use course_vocab::{AppConfig, VocabularyTableParser};

#[derive(Debug, Parser)]
#[command(author, version, about = "Extract vocabulary tables from course PDFs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse the vocabulary table of one document into JSON
    Parse(ParseArgs),
    /// Show where the vocabulary table sits in one document
    Locate(LocateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Course document (.pdf or extracted .txt)
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

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

#[derive(Debug, Args)]
struct LocateArgs {
    /// Course document (.pdf or extracted .txt)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => parse_command(args),
        Commands::Locate(args) => locate_command(args),
    }
}

fn parse_command(args: ParseArgs) -> Result<()> {
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.output.pretty |= args.pretty;
    config.parser.preserve_gloss_separator |= args.preserve_gloss_separator;
    config.validate()?;

    info!("Parser config: {}", config.parser);

    let parser = VocabularyTableParser::new(config.parser.clone());
    let entries = parse_course(&args.input, &parser)?;
    let json = entries_to_json(&entries, &config.output)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            info!(
                "Written: {} ({} entries) to {:?}",
                course_name(&args.input),
                entries.len(),
                path
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn locate_command(args: LocateArgs) -> Result<()> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;
    let parser = VocabularyTableParser::new(config.parser);

    let text = read_document_text(&args.input)?;
    let report = parser
        .inspect(&text)
        .with_context(|| format!("Failed to locate vocabulary table: {:?}", args.input))?;

    println!("document:       {:?}", args.input);
    println!("table lines:    {}..{}", report.bounds.start, report.bounds.end);
    println!("end marker:     {}", if report.bounds.end_marker_found { "found" } else { "absent" });
    println!("content lines:  {}", report.content_lines);
    println!("entries:        {}", report.entries);

    Ok(())
}
