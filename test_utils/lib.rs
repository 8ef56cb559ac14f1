use std::fs;
use std::path::{Path, PathBuf};
pub mod constants;
use constants::{
    CHECK_DOCUMENT_PREFIX, EXPECTED_FILE_NAME, IGNORE_DOCUMENT_PREFIX, TEST_FILES_DIRECTORY,
};

/// A fixture case: the documents to analyse and what the analysis should report.
pub struct FixtureCase {
    pub name: String,
    pub check_documents: Vec<String>,
    pub ignore_documents: Vec<String>,
    pub mincount: Option<usize>,
    pub maxcount: Option<usize>,
    pub expected: Vec<(String, usize)>,
}

/// Lists every fixture case directory, sorted by name.
pub fn list_fixture_cases() -> Vec<PathBuf> {
    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.is_dir())
        .collect();

    case_dirs.sort();
    case_dirs
}

pub fn load_fixture_case(case_dir: &Path) -> FixtureCase {
    let expected_path = case_dir.join(EXPECTED_FILE_NAME);

    FixtureCase {
        name: case_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        check_documents: read_documents_with_prefix(case_dir, CHECK_DOCUMENT_PREFIX),
        ignore_documents: read_documents_with_prefix(case_dir, IGNORE_DOCUMENT_PREFIX),
        mincount: get_directive(&expected_path, "MINCOUNT:"),
        maxcount: get_directive(&expected_path, "MAXCOUNT:"),
        expected: get_expected_results(&expected_path),
    }
}

/// Reads every `<prefix>*.txt` document in the case directory, ordered by file name.
pub fn read_documents_with_prefix(case_dir: &Path, prefix: &str) -> Vec<String> {
    let mut document_paths: Vec<PathBuf> = fs::read_dir(case_dir)
        .expect("Failed to read fixture case directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "txt")
                && path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().starts_with(prefix))
        })
        .collect();

    document_paths.sort();

    document_paths
        .iter()
        .map(|path| fs::read_to_string(path).expect("Failed to read fixture document"))
        .collect()
}

// Helper function to get the expected `word,count` rows from lines starting with EXPECTED:
pub fn get_expected_results(file_path: &Path) -> Vec<(String, usize)> {
    let content = fs::read_to_string(file_path).expect("Failed to read expected file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let row = line.strip_prefix("EXPECTED:")?.trim();
            let (word, count) = row.rsplit_once(',')?;
            let count: usize = count.trim().parse().expect("Invalid expected count");

            Some((word.trim().to_string(), count))
        })
        .collect()
}

// Helper function to read a numeric directive line such as `MINCOUNT: 4`
pub fn get_directive(file_path: &Path, directive: &str) -> Option<usize> {
    let content = fs::read_to_string(file_path).expect("Failed to read expected file");

    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix(directive)
            .map(|value| value.trim().parse().expect("Invalid directive value"))
    })
}
