use crate::types::{DocumentCount, IgnoreSet};
use crate::Tokenizer;

/// Counts the occurrences of each word in the given text.
///
/// Words present in `ignore_words` are skipped entirely.
///
/// # Arguments
/// * `tokenizer` - Splits the text into word tokens.
/// * `text` - The document text. Empty text yields an empty map.
/// * `ignore_words` - Words which are never counted.
///
/// # Returns
/// * A `DocumentCount` where the keys are words, in order of first occurrence,
///   and the values are their respective counts.
pub fn count_word_occurrences(
    tokenizer: &Tokenizer,
    text: &str,
    ignore_words: &IgnoreSet,
) -> DocumentCount {
    let mut occurrences = DocumentCount::new();

    for word in tokenizer.tokenize(text) {
        if ignore_words.contains(word) {
            continue;
        }

        match occurrences.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                occurrences.insert(word.to_string(), 1);
            }
        }
    }

    occurrences
}
