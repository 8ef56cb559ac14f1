use word_occurrences::{find_duplicates_in_texts, DISPLAY_COLUMN_WIDTH};

fn main() {
    env_logger::init();

    let documents = [
        "The cat chased the dog around the garden.",
        "A dog and a cat slept in the garden shed.",
    ];
    let ignore = ["the The"];

    println!("Words found in every document:");
    match find_duplicates_in_texts(documents, ignore) {
        Some(results) => {
            for (word, count) in results {
                println!("{:<width$} {}", word, count, width = DISPLAY_COLUMN_WIDTH);
            }
        }
        None => println!("No results found"),
    }
}
