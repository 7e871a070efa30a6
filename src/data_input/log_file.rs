// src/data_input/log_file.rs

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::CSV_EXTENSION;
use crate::error::{LogError, Result};

/// True when the path's extension is `csv` in any case, so `FLY034.CSV` counts.
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

/// Validates a log file: exists, is a regular file, is non-empty, and sniffs as CSV.
pub fn validate_log_file(path: &Path) -> Result<()> {
    let not_a_file = || LogError::NotAFile {
        path: path.to_path_buf(),
    };
    let metadata = fs::metadata(path).map_err(|_| not_a_file())?;
    if !metadata.is_file() {
        return Err(not_a_file());
    }
    if metadata.len() == 0 {
        return Err(LogError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    if !is_csv_path(path) {
        return Err(LogError::NotCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Returns the number of lines in a CSV file.
///
/// A final line without a trailing newline still counts, so `"a\nb"` and `"a\nb\n"`
/// both give 2. The file is read once, sequentially, without decoding it as UTF-8.
pub fn count_lines(path: &Path) -> Result<usize> {
    validate_log_file(path)?;

    let reader = BufReader::new(File::open(path)?);
    let mut count = 0;
    for chunk in reader.split(b'\n') {
        chunk?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn counts_lines_with_and_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let with_newline = write_file(&dir, "a.csv", "h\n1\n2\n3\n4\n");
        let without_newline = write_file(&dir, "b.csv", "h\n1\n2\n3\n4");
        assert_eq!(count_lines(&with_newline).unwrap(), 5);
        assert_eq!(count_lines(&without_newline).unwrap(), 5);
    }

    #[test]
    fn single_line_counts_as_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "one.csv", "offsetTime");
        assert_eq!(count_lines(&path).unwrap(), 1);
    }

    #[test]
    fn csv_extension_is_matched_in_any_case() {
        assert!(is_csv_path(Path::new("FLY034.csv")));
        assert!(is_csv_path(Path::new("logs/FLY034.CSV")));
        assert!(!is_csv_path(Path::new("FLY034.DAT")));
        assert!(!is_csv_path(Path::new("FLY034.csv.bak")));
        assert!(!is_csv_path(Path::new("FLY034")));
    }

    #[test]
    fn rejects_missing_empty_and_non_csv_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.csv");
        assert!(matches!(validate_log_file(&missing), Err(LogError::NotAFile { .. })));

        assert!(matches!(validate_log_file(dir.path()), Err(LogError::NotAFile { .. })));

        let empty = write_file(&dir, "empty.csv", "");
        assert!(matches!(validate_log_file(&empty), Err(LogError::EmptyFile { .. })));
        assert!(matches!(count_lines(&empty), Err(LogError::EmptyFile { .. })));

        let text = write_file(&dir, "log.txt", "offsetTime\n1\n");
        assert!(matches!(
            validate_log_file(&text),
            Err(LogError::NotCsv { .. })
        ));
    }
}

// src/data_input/log_file.rs
