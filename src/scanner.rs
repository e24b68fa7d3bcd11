//! Run-directory scanner for discovering solver report files
//!
//! After a solver run the working directory holds one or more `.dat`
//! reports (e.g. `XTurb_Output1.dat`). This module lists them so a host
//! application can offer them for opening, with optional size and count
//! filters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::constants::REPORT_FILE_EXTENSION;
use crate::{Result, XTurbError};

/// Information about a discovered report file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFileInfo {
    /// Full path to the report file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size_bytes: u64,
}

impl ReportFileInfo {
    /// Base filename without path.
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}

/// Configuration for directory scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Maximum number of files to return (None = unlimited).
    pub max_files: Option<usize>,

    /// Minimum file size in bytes to include.
    pub min_file_size: u64,
}

/// Scanner for solver run directories.
#[derive(Debug, Clone, Default)]
pub struct ReportScanner {
    config: ScanConfig,
}

impl ReportScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Discover report files under `root`, sorted by path.
    pub fn scan(&self, root: &Path) -> Result<Vec<ReportFileInfo>> {
        if !root.is_dir() {
            return Err(XTurbError::RunDirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_report = entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case(REPORT_FILE_EXTENSION))
                .unwrap_or(false);
            if !is_report {
                continue;
            }

            let size_bytes = entry.metadata()?.len();
            if size_bytes < self.config.min_file_size {
                debug!(
                    "Skipping {} ({} bytes below minimum)",
                    entry.path().display(),
                    size_bytes
                );
                continue;
            }

            files.push(ReportFileInfo {
                path: entry.path().to_path_buf(),
                size_bytes,
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        if let Some(max) = self.config.max_files {
            files.truncate(max);
        }

        info!(
            "Discovered {} report file(s) under {}",
            files.len(),
            root.display()
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &Path, name: &str, bytes: usize) {
        fs::write(dir.join(name), vec![b'x'; bytes]).unwrap();
    }

    #[test]
    fn test_scan_finds_only_dat_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "XTurb_Output1.dat", 100);
        write_file(dir.path(), "XTurb_Output2.dat", 100);
        write_file(dir.path(), "case.inp", 100);
        write_file(dir.path(), "notes.txt", 100);

        let scanner = ReportScanner::default();
        let files = scanner.scan(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename(), "XTurb_Output1.dat");
        assert_eq!(files[1].filename(), "XTurb_Output2.dat");
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("run2");
        fs::create_dir(&sub).unwrap();
        write_file(dir.path(), "a.dat", 10);
        write_file(&sub, "b.dat", 10);

        let scanner = ReportScanner::default();
        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_scan_respects_min_file_size() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "small.dat", 10);
        write_file(dir.path(), "large.dat", 1000);

        let scanner = ReportScanner::new(ScanConfig {
            min_file_size: 100,
            ..Default::default()
        });
        let files = scanner.scan(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename(), "large.dat");
    }

    #[test]
    fn test_scan_respects_max_files() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            write_file(dir.path(), &format!("out{}.dat", i), 10);
        }

        let scanner = ReportScanner::new(ScanConfig {
            max_files: Some(2),
            ..Default::default()
        });
        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_scan_missing_directory_is_an_error() {
        let scanner = ReportScanner::default();
        let result = scanner.scan(Path::new("/nonexistent/run/dir"));
        assert!(matches!(
            result,
            Err(XTurbError::RunDirectoryNotFound { .. })
        ));
    }
}
