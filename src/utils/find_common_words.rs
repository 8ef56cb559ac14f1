use crate::models::AnalyserConfig;
use crate::types::{AggregatedResult, DocumentCount};
use crate::utils::sort_results;
use log::debug;

/// Sums the counts of the words which occur in every document.
///
/// The running intersection starts from the first document's words, in their
/// first-occurrence order, and drops any word a later document lacks. Totals
/// outside the configured range are then discarded and the remainder sorted
/// ascending by count.
///
/// # Returns
/// * `None` when there are no documents at all.
/// * `Some` mapping otherwise, which is empty when no word is common to every
///   document or no total falls within range.
pub fn find_common_words(
    documents: &[DocumentCount],
    config: &AnalyserConfig,
) -> Option<AggregatedResult> {
    let (first_document, other_documents) = documents.split_first()?;

    let mut common_words: AggregatedResult = first_document.clone();

    for (document_idx, document) in other_documents.iter().enumerate() {
        if common_words.is_empty() {
            break;
        }

        common_words.retain(|word, total| match document.get(word) {
            Some(count) => {
                *total += count;
                true
            }
            None => false,
        });

        debug!(
            "{} common words remain after document {}",
            common_words.len(),
            document_idx + 2
        );
    }

    common_words.retain(|_, total| config.contains(*total));

    Some(sort_results(common_words))
}
