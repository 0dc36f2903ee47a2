use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use glossmatch::reader::{GlossaryReader, ReaderConfig};
use glossmatch::{Extraction, ExtractorConfig, GlossaryExtractor, WhitespaceTokenizer};

#[derive(Parser, Debug)]
#[command(name = "glossmatch")]
#[command(about = "Find multi-word glossary terms in whitespace-tokenized text")]
#[command(version)]
struct Args {
    /// Glossary file: one term per line, or a JSON array of strings (.json)
    #[arg(long)]
    glossary: PathBuf,

    /// Input text files to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum number of tokens per matched span
    #[arg(long, default_value_t = 2)]
    ngrams: usize,

    /// Match on original case instead of lowercased text
    #[arg(long)]
    case_sensitive: bool,

    /// Extractor name reported in logs
    #[arg(long, default_value = "glossary")]
    name: String,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,
}

/// One output line: the match record tagged with its source file
#[derive(Serialize)]
struct MatchLine<'a> {
    file: &'a str,
    #[serde(flatten)]
    extraction: &'a Extraction,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let reader = GlossaryReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    });

    let terms = reader.load_glossary(&args.glossary).await?;
    let config = ExtractorConfig::new(args.name.clone())
        .with_ngrams(args.ngrams)
        .with_case_sensitive(args.case_sensitive);
    let tokenizer = WhitespaceTokenizer::new();
    let extractor = GlossaryExtractor::new(&terms, config, &tokenizer)?;

    let inputs = reader.read_inputs_batch(&args.inputs).await?;
    let mut total_matches = 0usize;

    for (content, stats) in &inputs {
        if stats.read_error.is_some() {
            continue;
        }

        let tokens = tokenizer.tokens(content);
        let extractions = extractor.try_extract(&tokens)?;
        total_matches += extractions.len();

        for extraction in &extractions {
            let line = MatchLine {
                file: &stats.file_path,
                extraction,
            };
            println!("{}", serde_json::to_string(&line)?);
        }

        info!(
            "Scanned {}: {} tokens, {} matches",
            stats.file_path,
            tokens.len(),
            extractions.len()
        );
    }

    info!("Completed: {} inputs, {} matches", inputs.len(), total_matches);
    Ok(())
}
