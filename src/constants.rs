use crate::models::AnalyserConfig;

pub const DEFAULT_ANALYSER_CONFIG: AnalyserConfig = AnalyserConfig {
    mincount: 1,
    maxcount: 256,
};

/// A word starts with an alphabetic character followed by 2-60 word characters,
/// hyphens or periods.
pub const WORD_PATTERN: &str = r"\b([A-Za-z][\w\-\.]{2,60})\b";

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "results.csv";

pub const DISPLAY_COLUMN_WIDTH: usize = 32;

pub const CSV_HEADERS: [&str; 2] = ["Word", "Count"];

pub const NO_RESULTS_MESSAGE: &str = "No results found";
