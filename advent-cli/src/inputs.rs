//! Puzzle inputs read from a local directory

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of input files named `dayDD.txt`, with `dayDD-test.txt` holding
/// the example input from the puzzle text.
pub struct InputStore {
    dir: PathBuf,
    test: bool,
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>, test: bool) -> Self {
        Self {
            dir: dir.into(),
            test,
        }
    }

    /// Path of the file read for `day`
    pub fn path(&self, day: u8) -> PathBuf {
        let suffix = if self.test { "-test" } else { "" };
        self.dir.join(format!("day{day:02}{suffix}.txt"))
    }

    /// Whether the file for `day` exists
    pub fn contains(&self, day: u8) -> bool {
        self.path(day).is_file()
    }

    /// Read the input for `day` with trailing line breaks removed.
    ///
    /// Leading whitespace is significant for some days (right-aligned
    /// columns) so only the end is trimmed.
    pub fn read(&self, day: u8) -> Result<String, InputError> {
        let path = self.path(day);
        let mut content = read_file(&path)?;
        let trimmed = content.trim_end_matches(['\n', '\r']).len();
        content.truncate(trimmed);
        Ok(content)
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::Missing {
            path: path.to_path_buf(),
        },
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_names() {
        assert_eq!(
            InputStore::new("in", false).path(7),
            PathBuf::from("in/day07.txt")
        );
        assert_eq!(
            InputStore::new("in", true).path(11),
            PathBuf::from("in/day11-test.txt")
        );
    }

    #[test]
    fn test_read_strips_trailing_line_breaks_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day06.txt"), "  1 2\n 34 5\r\n\n").unwrap();

        let store = InputStore::new(dir.path(), false);
        assert!(store.contains(6));
        assert_eq!(store.read(6).unwrap(), "  1 2\n 34 5");
    }

    #[test]
    fn test_test_flag_selects_test_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day01.txt"), "real").unwrap();
        fs::write(dir.path().join("day01-test.txt"), "example\n").unwrap();

        assert_eq!(InputStore::new(dir.path(), false).read(1).unwrap(), "real");
        assert_eq!(InputStore::new(dir.path(), true).read(1).unwrap(), "example");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = InputStore::new(dir.path(), false);

        assert!(!store.contains(3));
        match store.read(3) {
            Err(InputError::Missing { path }) => assert_eq!(path, dir.path().join("day03.txt")),
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("day02.txt")).unwrap();

        let store = InputStore::new(dir.path(), false);
        assert!(!store.contains(2));
        assert!(matches!(store.read(2), Err(InputError::Read { .. })));
    }
}
