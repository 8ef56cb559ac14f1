use crate::Error;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Reads the entire contents of a text file.
pub fn try_load_file<P: AsRef<Path>>(file_path: P) -> Result<String, Error> {
    let contents = fs::read_to_string(file_path.as_ref())?;

    debug!(
        "Loaded {} bytes from {}",
        contents.len(),
        file_path.as_ref().display()
    );

    Ok(contents)
}

/// Reads the entire contents of a text file, degrading to an empty string.
///
/// A missing or unreadable file is reported to the user and treated as an empty
/// document so the remaining documents can still be analysed.
pub fn load_file<P: AsRef<Path>>(file_path: P) -> String {
    let file_path = file_path.as_ref();

    match try_load_file(file_path) {
        Ok(contents) => contents,
        Err(Error::IoError(err)) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!(
                "Error: Unable to load {}, file is missing",
                file_path.display()
            );
            warn!("Missing file {}", file_path.display());
            String::new()
        }
        Err(err) => {
            eprintln!("Error: Unable to read {}", file_path.display());
            eprintln!("{}", err);
            warn!("Failed to read {}: {}", file_path.display(), err);
            String::new()
        }
    }
}
