//! Recursive source-tree walking and per-file dispatch.
//!
//! The walker owns the growing report until it hands the finished value
//! to the caller; there is no shared accumulation state, which is what
//! makes the parallel variant safe.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::extract::{DeclarationExtractor, FileRecord, Report};

/// Non-fatal failures surfaced while scanning a tree.
///
/// Every variant is absorbed: it is reported on stderr and the walk
/// continues with the remaining entries. Nothing is retried, and the
/// partial report is always emitted.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory entry could not be enumerated; its subtree is skipped
    /// and sibling entries continue.
    #[error("cannot read directory entry at {path}: {message}")]
    DirectoryUnreadable { path: String, message: String },

    /// A classified file could not be opened; it contributes no record.
    #[error("cannot open file {path}: {message}")]
    FileUnopenable { path: String, message: String },

    /// The parser capability produced no syntax tree (AST strategy only);
    /// the file is recorded with empty fact lists.
    #[error("no syntax tree produced for {path}")]
    ParseFailure { path: String },
}

/// Walks a directory tree and aggregates one record per readable
/// in-scope file, in discovery order.
pub struct Walker<'a> {
    extractor: &'a dyn DeclarationExtractor,
    parallel: bool,
}

impl<'a> Walker<'a> {
    pub fn new(extractor: &'a dyn DeclarationExtractor) -> Self {
        Self {
            extractor,
            parallel: false,
        }
    }

    /// Parse files on the rayon thread pool instead of sequentially.
    /// Output order is identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Walk `root` depth-first and return the aggregated report.
    ///
    /// Sibling entries are visited in file-name order, so two walks over
    /// an unchanged tree produce identical reports. Symbolic links are
    /// not followed.
    pub fn walk(&self, root: &Path) -> Report {
        let files = self.discover(root);

        let records: Vec<Option<FileRecord>> = if self.parallel {
            // An indexed parallel map keeps results positionally aligned
            // with `files`, which restores discovery order on collect.
            files.par_iter().map(|p| self.extract_one(p)).collect()
        } else {
            files.iter().map(|p| self.extract_one(p)).collect()
        };

        let mut report = Report::new();
        for record in records.into_iter().flatten() {
            report.push(record);
        }
        report
    }

    /// Enumerate in-scope files under `root` in discovery order.
    fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .unwrap_or(root)
                        .to_string_lossy()
                        .into_owned();
                    eprintln!(
                        "Warning: {}",
                        ScanError::DirectoryUnreadable {
                            path,
                            message: err.to_string(),
                        }
                    );
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !self.extractor.classifier().is_in_scope(&name) {
                continue;
            }
            files.push(entry.into_path());
        }

        files
    }

    /// Read and extract one file. Unopenable files contribute nothing.
    fn extract_one(&self, path: &Path) -> Option<FileRecord> {
        let source = match fs::read(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!(
                    "Warning: {}",
                    ScanError::FileUnopenable {
                        path: path.to_string_lossy().into_owned(),
                        message: err.to_string(),
                    }
                );
                return None;
            }
        };

        Some(self.extractor.extract(path, &source))
    }
}
