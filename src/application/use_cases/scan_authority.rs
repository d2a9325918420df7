//! # Scan Authority Use Case
//!
//! 全ログファイルを走査し、日付トークンごとの権威ファイルを決める

use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::entities::log_file::LogFile;
use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::services::authority::{AuthorityCounts, AuthorityMap};
use crate::domain::services::line_date::extract_line_date;

/// 権威ファイル走査ユースケース
pub struct ScanAuthorityUseCase<R: LogRepository> {
    log_repository: Arc<R>,
}

impl<R: LogRepository> ScanAuthorityUseCase<R> {
    pub fn new(log_repository: Arc<R>) -> Self {
        Self { log_repository }
    }

    /// スキャンフェーズ: (トークン × ファイル) ごとの行数を数える
    ///
    /// 読めないファイルは警告を出してスキップし、走査は続ける。
    pub fn count(&self, files: &[LogFile]) -> AuthorityCounts {
        let mut counts = AuthorityCounts::new();

        for file in files {
            let lines = match self.log_repository.read_lines(file.path()) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!("Skipping unreadable log file {}: {:#}", file.path().display(), e);
                    continue;
                }
            };

            let mut dated = 0usize;
            for line in &lines {
                if let Some(token) = extract_line_date(line) {
                    counts.record(token, file);
                    dated += 1;
                }
            }
            debug!(
                "Scanned {}: {} dated lines of {}",
                file.path().display(),
                dated,
                lines.len()
            );
        }

        counts
    }

    /// スキャンと選定をまとめて行う
    pub fn execute(&self, files: &[LogFile]) -> AuthorityMap {
        let counts = self.count(files);
        let authority = counts.select();

        info!(
            "Resolved {} date tokens to {} authority files",
            authority.len(),
            authority.authority_files().len()
        );

        authority
    }
}
