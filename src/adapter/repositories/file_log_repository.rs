//! File Log Repository Implementation
//!
//! LogRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

use crate::domain::entities::log_file::LogFile;
use crate::domain::repositories::log_repository::LogRepository;

/// ファイルシステムベースのログリポジトリ
pub struct FileLogRepository;

impl FileLogRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }
}

impl LogRepository for FileLogRepository {
    fn discover_log_files(&self, log_dir: &Path) -> Result<Vec<LogFile>> {
        if !log_dir.exists() {
            warn!("Log directory does not exist: {}", log_dir.display());
            return Ok(Vec::new());
        }

        let mut log_files = Vec::new();

        // ログフォルダ直下のみ（サブディレクトリは対象外）
        for entry in WalkDir::new(log_dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match LogFile::from_path(path) {
                Some(file) => log_files.push(file),
                None => debug!("Ignoring non-log file: {}", path.display()),
            }
        }

        info!(
            "Found {} log files in {}",
            log_files.len(),
            log_dir.display()
        );

        Ok(log_files)
    }

    fn read_lines(&self, file_path: &Path) -> Result<Vec<String>> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open log file: {}", file_path.display()))?;

        // 途中で失敗してもハンドルはこの関数を抜けた時点で閉じる
        BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read log file: {}", file_path.display()))
    }
}

impl Default for FileLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_only_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("PlayerShopLog_250603_101500.txt"), "").unwrap();
        fs::write(dir.join("PlayerShopLog_250604_1"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::create_dir(dir.join("PlayerShopLog_250605_1.txt")).unwrap();
        fs::create_dir(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/PlayerShopLog_250606_1.txt"), "").unwrap();

        let repo = FileLogRepository::new();
        let mut files = repo.discover_log_files(dir).unwrap();
        files.sort();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path(), dir.join("PlayerShopLog_250603_101500.txt"));
        assert_eq!(files[1].path(), dir.join("PlayerShopLog_250604_1"));
        assert_eq!(files[0].month(), 6);
    }

    #[test]
    fn test_discover_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileLogRepository::new();

        let files = repo
            .discover_log_files(&temp_dir.path().join("missing"))
            .unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_read_lines_strips_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("PlayerShopLog_250603_1.txt");
        fs::write(&path, "Tue Jun 3 10:00 a\r\nTue Jun 3 10:01 b = 5\n").unwrap();

        let lines = FileLogRepository::new().read_lines(&path).unwrap();

        assert_eq!(lines, vec!["Tue Jun 3 10:00 a", "Tue Jun 3 10:01 b = 5"]);
    }

    #[test]
    fn test_read_lines_invalid_utf8_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("PlayerShopLog_250603_1.txt");
        fs::write(&path, b"Tue Jun 3 10:00 ok\n\xff\xfe broken\n").unwrap();

        let result = FileLogRepository::new().read_lines(&path);

        assert!(result.is_err());
    }

    #[test]
    fn test_read_lines_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileLogRepository::new().read_lines(&temp_dir.path().join("gone.txt"));

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to open log file"));
    }
}
