use crate::types::IgnoreSet;
use crate::Tokenizer;

/// Unions the tokens of every ignore text into a single set.
///
/// Duplicate words collapse naturally; no counts are kept. With no texts the set
/// is empty and excludes nothing.
pub fn collect_ignore_words<I, S>(tokenizer: &Tokenizer, ignore_texts: I) -> IgnoreSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ignore_words = IgnoreSet::new();

    for text in ignore_texts {
        ignore_words.extend(tokenizer.tokenize(text.as_ref()).map(str::to_string));
    }

    ignore_words
}
