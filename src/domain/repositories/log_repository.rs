//! # Log Repository Trait
//!
//! ショップログファイルの発見と読み込みを抽象化

use anyhow::Result;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::log_file::LogFile;

/// ログリポジトリ
///
/// ログファイルの発見と行の読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
pub trait LogRepository {
    /// ログファイルを発見する
    ///
    /// 命名規則に一致しないファイルは結果に含めない（エラーにもしない）。
    ///
    /// # Arguments
    ///
    /// * `log_dir` - ログディレクトリのパス
    ///
    /// # Errors
    ///
    /// ディレクトリ自体が読めない場合にエラーを返す
    fn discover_log_files(&self, log_dir: &Path) -> Result<Vec<LogFile>>;

    /// ログファイルの全行を読み込む
    ///
    /// # Arguments
    ///
    /// * `file_path` - ログファイルのパス
    ///
    /// # Errors
    ///
    /// 読み込み・デコードに失敗した場合にエラーを返す。
    /// 呼び出し側はそのファイルだけをスキップする。
    fn read_lines(&self, file_path: &Path) -> Result<Vec<String>>;
}
