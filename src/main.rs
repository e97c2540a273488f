//! Resume extractor: structured field extraction for resumes and job descriptions

mod cli;
mod error;
mod extract;
mod input;
mod output;
mod vocabulary;

use clap::Parser;
use cli::{Cli, Commands};
use error::{ExtractorError, Result};
use extract::DocumentExtractor;
use input::InputManager;
use log::{error, info};
use output::render_record;
use std::path::PathBuf;
use std::process;
use vocabulary::KeywordVocabulary;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let vocabulary = match load_vocabulary(cli.vocabulary.as_ref()) {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            error!("Failed to load vocabulary: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, vocabulary).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_vocabulary(override_path: Option<&PathBuf>) -> Result<KeywordVocabulary> {
    match override_path {
        Some(path) => {
            info!("Loading vocabulary override from {}", path.display());
            KeywordVocabulary::load_from(path)
        }
        None => KeywordVocabulary::load(),
    }
}

async fn run_command(command: Commands, vocabulary: KeywordVocabulary) -> Result<()> {
    match command {
        Commands::Extract {
            file,
            kind,
            output,
            save,
        } => {
            cli::validate_file_extension(&file, &["pdf", "txt", "md"])
                .map_err(ExtractorError::InvalidInput)?;

            let kind = cli::parse_document_kind(&kind).map_err(ExtractorError::InvalidInput)?;
            let format = cli::parse_output_format(&output).map_err(ExtractorError::InvalidInput)?;

            info!("Extracting fields from {}", file.display());

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&file).await?;
            info!("Extracted {} characters of text", text.len());

            let extractor = DocumentExtractor::new(&vocabulary)?;
            let record = extractor.extract(&text, kind);
            info!("Document processed as {}", record.kind());

            let rendered = render_record(&record, format)?;
            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Saved output to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Vocab { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&vocabulary)?);
            } else {
                print_vocabulary(&vocabulary);
            }
            Ok(())
        }
    }
}

fn print_vocabulary(vocabulary: &KeywordVocabulary) {
    let lists = [
        ("Degrees", &vocabulary.degrees),
        ("Certifications", &vocabulary.certifications),
        ("Soft skills", &vocabulary.soft_skills),
        ("Tools and libraries", &vocabulary.tools_and_libraries),
    ];

    for (name, list) in lists {
        println!("{} ({}):", name, list.len());
        for entry in list {
            println!("  {}", entry);
        }
        println!();
    }
}
