use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub const EXPECTED_FILE_NAME: &str = "expected.txt";

pub const CHECK_DOCUMENT_PREFIX: &str = "check";

pub const IGNORE_DOCUMENT_PREFIX: &str = "ignore";
