//! # Discover Logs Use Case
//!
//! ログファイル発見ユースケース

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::log_file::LogFile;
use crate::domain::repositories::log_repository::LogRepository;

/// ログファイル発見ユースケース
///
/// 指定されたディレクトリから命名規則に一致するログファイルを発見する
pub struct DiscoverLogsUseCase<R: LogRepository> {
    log_repository: Arc<R>,
}

impl<R: LogRepository> DiscoverLogsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `log_repository` - ログリポジトリ
    pub fn new(log_repository: Arc<R>) -> Self {
        Self { log_repository }
    }

    /// ログファイルを発見する
    ///
    /// 結果はパス順に並べる（実行ごとに同じ順序で処理するため）。
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub fn execute(&self, log_dir: &Path) -> Result<Vec<LogFile>> {
        let mut files = self.log_repository.discover_log_files(log_dir)?;
        files.sort();
        Ok(files)
    }
}
