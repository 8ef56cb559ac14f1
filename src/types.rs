use indexmap::IndexMap;
use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word token as an owned `String`. Tokens are case-sensitive and are
/// used verbatim as map keys.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the number of occurrences of a token.
pub type WordCount = usize;

/// Represents the words of one document mapped to their occurrence counts.
///
/// Entries are kept in first-occurrence order, which is the order ties are reported in.
pub type DocumentCount = IndexMap<Token, WordCount>;

/// Represents the set of words excluded from counting.
pub type IgnoreSet = HashSet<Token>;

/// One `DocumentCount` per checked document, in input order.
pub type DocumentSet = Vec<DocumentCount>;

/// Represents the words common to every document mapped to their summed counts,
/// ordered ascending by count.
pub type AggregatedResult = IndexMap<Token, WordCount>;
