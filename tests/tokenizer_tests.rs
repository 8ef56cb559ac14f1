use word_occurrences::Tokenizer;

#[cfg(test)]
mod word_finder_tokenizer_tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        Tokenizer::word_finder()
            .tokenize(text)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_skips_words_shorter_than_three_characters() {
        let tokens = tokenize("the cat sat on a mat");
        assert_eq!(tokens, vec!["the", "cat", "sat", "mat"]);
    }

    #[test]
    fn test_strips_surrounding_punctuation() {
        let tokens = tokenize("Hello, World! It's a test.");
        assert_eq!(tokens, vec!["Hello", "World", "test"]);
    }

    #[test]
    fn test_keeps_inner_hyphens_periods_and_underscores() {
        let tokens = tokenize("fox-like e.g. v1.2 report_final");
        assert_eq!(tokens, vec!["fox-like", "e.g", "v1.2", "report_final"]);
    }

    #[test]
    fn test_words_must_start_with_a_letter() {
        let tokens = tokenize("123abc abc123 _under");
        assert_eq!(tokens, vec!["abc123"]);
    }

    #[test]
    fn test_trailing_period_is_not_part_of_word() {
        let tokens = tokenize("end of sentence.");
        assert_eq!(tokens, vec!["end", "sentence"]);
    }

    #[test]
    fn test_maximum_word_length() {
        let longest = "a".repeat(61);
        let too_long = "b".repeat(62);
        let text = format!("{} {}", longest, too_long);

        let tokens = tokenize(&text);
        assert_eq!(tokens, vec![longest.as_str()]);
    }

    #[test]
    fn test_unicode_word_characters() {
        let tokens = tokenize("Café naïve");
        assert_eq!(tokens, vec!["Café", "naïve"]);
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let tokens = tokenize("tab\tseparated\nlines");
        assert_eq!(tokens, vec!["tab", "separated", "lines"]);
    }

    #[test]
    fn test_apostrophes_split_words() {
        let tokens = tokenize("don't stop");
        assert_eq!(tokens, vec!["don", "stop"]);
    }

    #[test]
    fn test_case_is_preserved() {
        let tokens = tokenize("UPPER lower MiXeD");
        assert_eq!(tokens, vec!["UPPER", "lower", "MiXeD"]);
    }

    #[test]
    fn test_tokenizing_is_deterministic() {
        let text = "Repeat the same text, the same way: fox-like v1.2 report_final.";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
    }
}

#[cfg(test)]
mod custom_pattern_tokenizer_tests {
    use super::*;

    #[test]
    fn test_single_letter_words() {
        let tokenizer = Tokenizer::with_pattern(r"\b[A-Za-z]\w*\b").unwrap();

        let tokens: Vec<&str> = tokenizer.tokenize("a b cat").collect();
        assert_eq!(tokens, vec!["a", "b", "cat"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Tokenizer::with_pattern("(").is_err());
    }
}
