use crate::constants::{DEFAULT_OUTPUT_FILE_NAME, DISPLAY_COLUMN_WIDTH, NO_RESULTS_MESSAGE};
use crate::models::AnalyserConfig;
use crate::types::{AggregatedResult, DocumentCount, DocumentSet, IgnoreSet};
use crate::utils::{
    collect_ignore_words, count_word_occurrences, find_common_words, write_results_csv,
};
use crate::{Error, Tokenizer};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Counts the words which occur across every one of a set of documents.
///
/// All documents are tokenized and counted when the analyser is built; the
/// counts are never modified afterwards. Aggregation is recomputed on every call
/// to [`DocumentAnalyser::find_duplicates`].
pub struct DocumentAnalyser {
    config: AnalyserConfig,
    tokenizer: Tokenizer,
    ignore_words: IgnoreSet,
    documents: DocumentSet,
}

impl DocumentAnalyser {
    pub fn new<C, I, S, T>(check_documents: C, ignore_documents: I, config: AnalyserConfig) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_tokenizer(
            Tokenizer::word_finder(),
            check_documents,
            ignore_documents,
            config,
        )
    }

    pub fn with_tokenizer<C, I, S, T>(
        tokenizer: Tokenizer,
        check_documents: C,
        ignore_documents: I,
        config: AnalyserConfig,
    ) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        if config.is_empty_range() {
            warn!(
                "Minimum count {} exceeds maximum count {}; no words can be reported",
                config.mincount, config.maxcount
            );
        }

        info!("Collecting ignore words...");
        let ignore_words = collect_ignore_words(&tokenizer, ignore_documents);

        info!("Counting word occurrences...");
        let documents: DocumentSet = check_documents
            .into_iter()
            .map(|text| count_word_occurrences(&tokenizer, text.as_ref(), &ignore_words))
            .collect();

        info!(
            "Counted {} documents ignoring {} words",
            documents.len(),
            ignore_words.len()
        );

        DocumentAnalyser {
            config,
            tokenizer,
            ignore_words,
            documents,
        }
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn ignore_words(&self) -> &IgnoreSet {
        &self.ignore_words
    }

    pub fn documents(&self) -> &[DocumentCount] {
        &self.documents
    }

    /// Finds the words present in every document, with their summed counts.
    ///
    /// Returns `None` when the analyser holds no documents, which callers must
    /// treat differently from `Some` empty mapping (no word matched).
    pub fn find_duplicates(&self) -> Option<AggregatedResult> {
        find_common_words(&self.documents, &self.config)
    }

    /// Prints the aggregated results to stdout.
    pub fn display_results(&self) -> Result<(), Error> {
        let stdout = io::stdout();
        self.write_display(&mut stdout.lock())
    }

    /// Writes one line per word, padded to a fixed column, followed by its count.
    pub fn write_display<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let results = match self.find_duplicates() {
            Some(results) => results,
            None => {
                writeln!(writer, "{}", NO_RESULTS_MESSAGE)?;
                return Ok(());
            }
        };

        for (word, count) in &results {
            writeln!(
                writer,
                "{:<width$} {}",
                word,
                count,
                width = DISPLAY_COLUMN_WIDTH
            )?;
        }

        Ok(())
    }

    /// Saves the aggregated results to `results.csv` in the working directory.
    pub fn save_results(&self) -> Result<bool, Error> {
        self.save_results_to(DEFAULT_OUTPUT_FILE_NAME)
    }

    /// Saves the aggregated results as CSV, overwriting any existing file.
    ///
    /// When there is no result nothing is written and the file is left untouched.
    /// Returns whether a file was written.
    pub fn save_results_to<P: AsRef<Path>>(&self, file_path: P) -> Result<bool, Error> {
        let file_path = file_path.as_ref();

        let results = match self.find_duplicates() {
            Some(results) => results,
            None => {
                println!("No results to write to {}", file_path.display());
                return Ok(false);
            }
        };

        let file = File::create(file_path)?;
        write_results_csv(BufWriter::new(file), &results)?;

        info!("Wrote {} results to {}", results.len(), file_path.display());

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_IGNORE: [&str; 0] = [];

    #[test]
    fn test_documents_are_counted_in_input_order() {
        let analyser =
            DocumentAnalyser::new(["first words", "second", ""], NO_IGNORE, AnalyserConfig::default());

        let documents = analyser.documents();
        assert_eq!(documents.len(), 3);
        assert!(documents[0].contains_key("first"));
        assert!(documents[1].contains_key("second"));
        assert!(documents[2].is_empty());
    }

    #[test]
    fn test_ignored_words_never_counted() {
        let analyser = DocumentAnalyser::new(
            ["cat dog fish", "fish owl"],
            ["fish", "owl"],
            AnalyserConfig::default(),
        );

        assert!(analyser.ignore_words().contains("owl"));
        for document in analyser.documents() {
            assert!(!document.contains_key("fish"));
            assert!(!document.contains_key("owl"));
        }
    }

    #[test]
    fn test_write_display_pads_words() {
        let analyser =
            DocumentAnalyser::new(["cat dog dog"], NO_IGNORE, AnalyserConfig::default());

        let mut buffer = Vec::new();
        analyser.write_display(&mut buffer).unwrap();

        let expected = format!("{:<32} 1\n{:<32} 2\n", "cat", "dog");
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn test_write_display_does_not_truncate_long_words() {
        let long_word = "a".repeat(40);
        let analyser =
            DocumentAnalyser::new([long_word.as_str()], NO_IGNORE, AnalyserConfig::default());

        let mut buffer = Vec::new();
        analyser.write_display(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            format!("{} 1\n", long_word)
        );
    }

    #[test]
    fn test_write_display_without_documents() {
        let analyser =
            DocumentAnalyser::new(Vec::<String>::new(), NO_IGNORE, AnalyserConfig::default());

        let mut buffer = Vec::new();
        analyser.write_display(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "No results found\n");
    }

    #[test]
    fn test_write_display_with_empty_result_prints_nothing() {
        let analyser =
            DocumentAnalyser::new(["apple", "banana"], NO_IGNORE, AnalyserConfig::default());

        let mut buffer = Vec::new();
        analyser.write_display(&mut buffer).unwrap();

        assert!(buffer.is_empty());
    }
}
