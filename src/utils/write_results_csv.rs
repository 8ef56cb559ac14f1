use crate::constants::CSV_HEADERS;
use crate::types::AggregatedResult;
use crate::Error;
use csv::WriterBuilder;
use std::io::Write;

/// Writes aggregated results as a two-column CSV table.
///
/// The header row is `Word,Count`, followed by one row per word in the order
/// the results are already sorted in.
pub fn write_results_csv<W: Write>(writer: W, results: &AggregatedResult) -> Result<(), Error> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;

    for (word, count) in results {
        csv_writer.write_record([word.as_str(), count.to_string().as_str()])?;
    }

    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows_in_order() {
        let mut results = AggregatedResult::new();
        results.insert("cat".to_string(), 1);
        results.insert("dog".to_string(), 3);

        let mut buffer = Vec::new();
        write_results_csv(&mut buffer, &results).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Word,Count\ncat,1\ndog,3\n"
        );
    }

    #[test]
    fn test_empty_results_write_header_only() {
        let mut buffer = Vec::new();
        write_results_csv(&mut buffer, &AggregatedResult::new()).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "Word,Count\n");
    }
}
