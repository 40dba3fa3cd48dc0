// SPDX-License-Identifier: MPL-2.0
//! Lesson catalog discovery.
//!
//! Scans a directory for lesson files (`.md` or `.txt`), derives a display
//! title from each file name, and keeps the catalog sorted alphabetically.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: [&str; 2] = ["md", "txt"];

/// One discovered lesson file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    path: PathBuf,
    title: String,
}

impl Lesson {
    fn from_path(path: PathBuf) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let title = stem.replace(['_', '-'], " ");
        Some(Self { path, title })
    }

    /// Returns the lesson file's path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display title derived from the file name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Sorted catalog of the lessons found in one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonList {
    lessons: Vec<Lesson>,
}

impl LessonList {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `directory` for supported lesson files.
    ///
    /// Returns an error if the directory cannot be read; unreadable
    /// directory entries are skipped rather than failing the whole scan.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(directory)
            .map_err(|err| Error::Scan(format!("{}: {err}", directory.display())))?;

        let mut lessons = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_supported_lesson(&path) {
                if let Some(lesson) = Lesson::from_path(path) {
                    lessons.push(lesson);
                }
            }
        }

        lessons.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.path.cmp(&b.path))
        });

        Ok(Self { lessons })
    }

    /// Returns the lesson at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    /// Iterates the catalog in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    /// Returns the number of discovered lessons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

fn is_supported_lesson(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn scan_finds_only_supported_files_sorted_by_title() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("variables.md"), "body").unwrap();
        fs::write(dir.path().join("arrow_functions.txt"), "body").unwrap();
        fs::write(dir.path().join("notes.pdf"), "body").unwrap();
        fs::write(dir.path().join("closures.md"), "body").unwrap();

        let list = LessonList::scan_directory(dir.path()).expect("scan should succeed");

        let titles: Vec<_> = list.iter().map(Lesson::title).collect();
        assert_eq!(titles, vec!["arrow functions", "closures", "variables"]);
    }

    #[test]
    fn titles_replace_separators_with_spaces() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("first-class_functions.md"), "body").unwrap();

        let list = LessonList::scan_directory(dir.path()).expect("scan should succeed");
        assert_eq!(list.get(0).map(Lesson::title), Some("first class functions"));
    }

    #[test]
    fn scan_of_missing_directory_errors() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("nope");

        let result = LessonList::scan_directory(&missing);
        assert!(matches!(result, Err(Error::Scan(_))));
    }

    #[test]
    fn empty_directory_yields_empty_catalog() {
        let dir = tempdir().expect("failed to create temp dir");
        let list = LessonList::scan_directory(dir.path()).expect("scan should succeed");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
