use crate::types::AggregatedResult;

/// Sorts a mapping of words to their counts, ascending by count.
///
/// The sort is stable and keyed on the count alone: words with equal counts keep
/// the relative order they had in `results`.
///
/// ### Example:
/// ```rust
/// use word_occurrences::types::AggregatedResult;
/// use word_occurrences::sort_results;
///
/// let mut results = AggregatedResult::new();
/// results.insert("zebra".to_string(), 4);
/// results.insert("apple".to_string(), 2);
/// results.insert("mango".to_string(), 4);
///
/// let sorted: Vec<_> = sort_results(results).into_iter().collect();
/// assert_eq!(sorted, vec![
///     ("apple".to_string(), 2),
///     ("zebra".to_string(), 4),
///     ("mango".to_string(), 4)
/// ]);
/// ```
pub fn sort_results(mut results: AggregatedResult) -> AggregatedResult {
    // `IndexMap::sort_by` is a stable sort
    results.sort_by(|_, a_count, _, b_count| a_count.cmp(b_count));

    results
}
