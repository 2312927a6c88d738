//! DHA Licence command line interface
//!
//! # Usage
//!
//! ```bash
//! # Write a field dictionary to start from
//! dha-license sample > fields.yaml
//!
//! # Render it (format defaults to DHA_LICENSE__OUTPUT__DEFAULT_FORMAT)
//! dha-license render --fields fields.yaml --format pdf
//!
//! # List supported formats
//! dha-license formats
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use dha_license::adapters::document::LocalDocumentFileStorage;
use dha_license::application::{
    GenerateLicenseCommand, GenerateLicenseHandler, RendererRegistry, RendererSelector,
};
use dha_license::config::AppConfig;
use dha_license::domain::foundation::{Clock, SystemClock};
use dha_license::domain::license::{DocumentType, LicenseFields};
use dha_license::ports::OutputFormat;

#[derive(Parser)]
#[command(name = "dha-license")]
#[command(version)]
#[command(about = "Generate the DHA residential Licence 'A' as DOCX, PDF, Markdown or HTML")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a licence from a field dictionary
    Render {
        /// Field dictionary file (.yaml, .yml or .json)
        #[arg(short, long)]
        fields: PathBuf,

        /// Output format: docx, pdf, markdown, html
        #[arg(long)]
        format: Option<String>,

        /// Registered document type
        #[arg(long, default_value = "dha_license_a")]
        document_type: String,

        /// Target file (defaults to the configured output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a sample field dictionary as YAML
    Sample,

    /// List supported output formats
    Formats,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated().context("failed to load configuration")?;
    config.logging.init();

    match cli.command {
        Commands::Render {
            fields,
            format,
            document_type,
            output,
        } => cmd_render(&config, &fields, format, document_type, output),
        Commands::Sample => cmd_sample(),
        Commands::Formats => {
            cmd_formats();
            Ok(())
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

fn cmd_render(
    config: &AppConfig,
    fields_path: &Path,
    format: Option<String>,
    document_type: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let fields = load_fields(fields_path)?;

    let storage = LocalDocumentFileStorage::new()
        .with_max_file_size(config.output.max_file_size_bytes);
    let selector = RendererSelector::new(
        RendererRegistry::standard(),
        Arc::new(SystemClock),
        Arc::new(storage),
    );
    let handler = GenerateLicenseHandler::new(Arc::new(selector), &config.output.directory);

    let cmd = GenerateLicenseCommand {
        document_type,
        format: format.unwrap_or_else(|| config.output.default_format.clone()),
        fields,
        output_path: output,
    };

    let result = handler.handle(cmd).context("failed to generate licence")?;

    println!(
        "{} ({}, {} bytes, sha256 {})",
        result.path.display(),
        result.content_type,
        result.size_bytes,
        result.checksum
    );
    Ok(())
}

fn cmd_sample() -> Result<()> {
    let fields = LicenseFields::sample(SystemClock.today());
    let yaml = serde_yaml::to_string(&fields).context("failed to serialize sample fields")?;
    print!("{yaml}");
    Ok(())
}

fn cmd_formats() {
    for format in OutputFormat::ALL {
        println!(
            "{:<10} .{:<5} {}",
            format.as_str(),
            format.extension(),
            format.content_type()
        );
    }
    println!();
    for document_type in DocumentType::ALL {
        println!(
            "{:<14} {} - {}",
            document_type.as_str(),
            document_type.title(),
            document_type.description()
        );
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Reads a field dictionary, choosing JSON or YAML by extension.
fn load_fields(path: &Path) -> Result<LicenseFields> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let fields = if is_json {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid field dictionary in {}", path.display()))?
    } else {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid field dictionary in {}", path.display()))?
    };
    Ok(fields)
}
