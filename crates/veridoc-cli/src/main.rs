//! Veridoc CLI — the upload-and-review shell.
//!
//! Stages the given files, submits them to the Veridoc API, renders the
//! validation report with the default selection applied, and prints the set of
//! documents to proceed with. Re-run the command to upload more documents;
//! each run discards the previous result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use veridoc_api_client::review::{badge_for, spaced_type_name, suggestion_kind, Badge, SuggestionKind};
use veridoc_api_client::{ApiClient, ReviewSession, StagedFiles, UploadRequest};
use veridoc_cli::{format_file_size, init_tracing};
use veridoc_core::models::ValidationResult;

#[derive(Parser)]
#[command(name = "veridoc", about = "Veridoc document validation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload documents for validation and review the result
    Validate {
        /// Family identifier the documents belong to
        #[arg(long)]
        family_id: String,
        /// Files to upload (images or PDFs, 10 MB max each)
        files: Vec<PathBuf>,
        /// Deselect documents by index before proceeding
        #[arg(long, value_delimiter = ',')]
        deselect: Vec<usize>,
        /// Select documents by index, overriding the default selection
        #[arg(long, value_delimiter = ',')]
        select: Vec<usize>,
        /// Print the raw validation result as JSON instead of the report
        #[arg(long)]
        json: bool,
        /// API base URL (defaults to VERIDOC_API_URL or http://localhost:3000)
        #[arg(long)]
        api_url: Option<String>,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate {
            family_id,
            files,
            deselect,
            select,
            json,
            api_url,
        } => validate(family_id, files, select, deselect, json, api_url).await,
    }
}

async fn validate(
    family_id: String,
    files: Vec<PathBuf>,
    select: Vec<usize>,
    deselect: Vec<usize>,
    json: bool,
    api_url: Option<String>,
) -> anyhow::Result<()> {
    let client = match api_url {
        Some(url) => ApiClient::new(url)?,
        None => ApiClient::from_env()?,
    };

    let mut staged = StagedFiles::new();
    for path in &files {
        match staged.stage_path(path) {
            Ok(()) => {
                let file = staged.files().last().expect("just staged");
                println!(
                    "Staged {} ({})",
                    file.file_name,
                    format_file_size(file.size())
                );
            }
            Err(err) => eprintln!("Skipping {}", err),
        }
    }

    let request = UploadRequest::new(family_id);
    let result = client.validate_documents(&request, &staged).await?;
    staged.clear();

    if json {
        return print_json(&result);
    }

    let mut session = ReviewSession::new(result);
    for index in deselect {
        if session.is_selected(index) {
            session.toggle(index);
        }
    }
    for index in select {
        if !session.is_selected(index) {
            session.toggle(index);
        }
    }

    render_report(&session);

    let chosen = session.proceed();
    println!();
    if chosen.is_empty() {
        println!("Proceeding with no documents");
    } else {
        let indices: Vec<String> = chosen.iter().map(usize::to_string).collect();
        println!("Proceeding with documents: {}", indices.join(", "));
    }

    Ok(())
}

fn badge_marker(badge: Badge) -> &'static str {
    match badge {
        Badge::Warning => "!",
        Badge::NeedsReview => "x",
        Badge::Valid => "+",
    }
}

fn render_report(session: &ReviewSession) {
    let result: &ValidationResult = session.result();

    println!();
    println!("Validation Summary");
    println!("  {}", result.summary);

    println!();
    println!("Document Storyline");
    if result.storyline.is_empty() {
        println!("  No storyline available.");
    } else {
        println!("  {}", result.storyline);
    }

    println!();
    println!("Document Validation Results");
    for (index, doc) in result.validations.iter().enumerate() {
        let badge = badge_for(&doc.status, doc.fraud_risk);
        let checkbox = if session.is_selected(index) { "[x]" } else { "[ ]" };
        println!(
            "  {} {} {} — {} ({})",
            checkbox,
            index,
            doc.file_name,
            format!("{} {}", badge_marker(badge), badge.label()),
            spaced_type_name(&doc.matched_type),
        );
        println!("        Reason: {}", doc.reason);
        println!("        Fraud risk: {} — {}", doc.fraud_risk, doc.fraud_notes);
    }

    if !result.unclassified_files.is_empty() {
        println!();
        println!("Unclassified Files (will not be uploaded)");
        for file_name in &result.unclassified_files {
            println!("  x {}", file_name);
        }
    }

    if !result.suggestions.is_empty() {
        println!();
        println!("Suggested Additional Documents");
        for suggestion in &result.suggestions {
            match suggestion_kind(suggestion) {
                SuggestionKind::Actionable => println!("  * {}", suggestion),
                SuggestionKind::Aside => println!("  i {}", suggestion),
            }
        }
    }
}
