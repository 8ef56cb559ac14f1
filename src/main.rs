use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use word_occurrences::{
    load_file, AnalyserConfig, DocumentAnalyser, WordCount, DEFAULT_ANALYSER_CONFIG,
    DEFAULT_OUTPUT_FILE_NAME,
};

/// Count occurrences of words duplicated over multiple documents
#[derive(Parser, Debug)]
#[command(name = "word-occurrences-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Document analyser")]
struct Cli {
    /// Files to analyse
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Files of words to ignore
    #[arg(short, long)]
    ignore: Vec<PathBuf>,

    /// Minimum word count
    #[arg(long)]
    mincount: Option<WordCount>,

    /// Maximum word count
    #[arg(long)]
    maxcount: Option<WordCount>,

    /// File to save the results to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE_NAME)]
    output: PathBuf,
}

impl Cli {
    /// A count of zero falls back to the default, as if the flag were absent.
    fn analyser_config(&self) -> AnalyserConfig {
        AnalyserConfig {
            mincount: self
                .mincount
                .filter(|&count| count > 0)
                .unwrap_or(DEFAULT_ANALYSER_CONFIG.mincount),
            maxcount: self
                .maxcount
                .filter(|&count| count > 0)
                .unwrap_or(DEFAULT_ANALYSER_CONFIG.maxcount),
        }
    }
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    // Load all text files to check for duplicates
    let check_documents: Vec<String> = cli.files.iter().map(load_file).collect();

    let ignore_documents: Vec<String> = cli.ignore.iter().map(load_file).collect();

    let config = cli.analyser_config();
    info!(
        "Analysing {} documents with count range {}..={}",
        check_documents.len(),
        config.mincount,
        config.maxcount
    );

    let document_analyser = DocumentAnalyser::new(&check_documents, &ignore_documents, config);

    if let Err(e) = document_analyser.display_results() {
        error!("Failed to display results: {}", e);
    }

    if let Err(e) = document_analyser.save_results_to(&cli.output) {
        error!("Failed to save results to {}: {}", cli.output.display(), e);
        eprintln!("Error: Unable to write to {}", cli.output.display());
        eprintln!("{}", e);
    }
}
