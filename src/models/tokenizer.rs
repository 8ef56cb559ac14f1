use crate::constants::WORD_PATTERN;
use crate::types::TokenRef;
use crate::Error;
use regex::Regex;

/// Extracts word tokens from raw text using a regular expression.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Configuration for the default word finder.
    ///
    /// Matches a word starting with an ASCII letter followed by 2 to 60 word
    /// characters, hyphens or periods, bounded by word boundaries.
    pub fn word_finder() -> Self {
        Self::with_pattern(WORD_PATTERN).expect("Default word pattern should be valid")
    }

    /// Compiles an alternative token pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self, Error> {
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::PatternError(format!("Invalid token pattern: {}", e)))?;

        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Lazily yields the tokens of `text`, left to right.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t TokenRef> + 't {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::word_finder()
    }
}
