pub mod collect_ignore_words;
pub use collect_ignore_words::collect_ignore_words;

pub mod count_word_occurrences;
pub use count_word_occurrences::count_word_occurrences;

pub mod find_common_words;
pub use find_common_words::find_common_words;

pub mod load_file;
pub use load_file::{load_file, try_load_file};

pub mod sort_results;
pub use sort_results::sort_results;

pub mod write_results_csv;
pub use write_results_csv::write_results_csv;
