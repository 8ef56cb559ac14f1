use crate::types::WordCount;

/// Inclusive occurrence-count range applied to aggregated results.
///
/// A range where `mincount > maxcount` contains no counts, so every aggregation
/// performed with it is empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnalyserConfig {
    pub mincount: WordCount,
    pub maxcount: WordCount,
}

impl AnalyserConfig {
    pub fn new(mincount: WordCount, maxcount: WordCount) -> Self {
        Self { mincount, maxcount }
    }

    /// Whether `count` lies within `[mincount, maxcount]`.
    pub fn contains(&self, count: WordCount) -> bool {
        count >= self.mincount && count <= self.maxcount
    }

    pub fn is_empty_range(&self) -> bool {
        self.mincount > self.maxcount
    }
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        crate::constants::DEFAULT_ANALYSER_CONFIG
    }
}
