mod constants;
pub use constants::{
    DEFAULT_ANALYSER_CONFIG, DEFAULT_OUTPUT_FILE_NAME, DISPLAY_COLUMN_WIDTH, WORD_PATTERN,
};
pub mod models;
pub use models::{AnalyserConfig, DocumentAnalyser, Error, Tokenizer};
pub mod types;
mod utils;
pub use types::{
    AggregatedResult, DocumentCount, DocumentSet, IgnoreSet, Token, TokenRef, WordCount,
};
pub use utils::{load_file, sort_results, try_load_file, write_results_csv};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Finds the words common to every document in `check_documents`, skipping any
/// word found in `ignore_documents`, using the default count range.
///
/// Returns `None` when `check_documents` is empty.
pub fn find_duplicates_in_texts<C, I, S, T>(
    check_documents: C,
    ignore_documents: I,
) -> Option<AggregatedResult>
where
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    find_duplicates_in_texts_with_custom_config(
        check_documents,
        ignore_documents,
        DEFAULT_ANALYSER_CONFIG,
    )
}

pub fn find_duplicates_in_texts_with_custom_config<C, I, S, T>(
    check_documents: C,
    ignore_documents: I,
    config: AnalyserConfig,
) -> Option<AggregatedResult>
where
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let document_analyser = DocumentAnalyser::new(check_documents, ignore_documents, config);

    document_analyser.find_duplicates()
}
