//! Configuration
//!
//! JSON設定ファイルの読み込みと既定値

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 既定の設定ファイルパス
pub const DEFAULT_CONFIG_PATH: &str = "./.stallsum/config.json";

/// ゲームクライアントがショップログを書き出す既定フォルダ
pub const DEFAULT_LOG_DIR: &str = "~/AppData/LocalLow/Elder Game/Project Gorgon/Books";

/// 設定
///
/// すべて省略可能。CLI引数が指定された場合はそちらを優先する。
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_dir: String,
    pub group_by: String,
    pub sort_by: String,
    pub top_n: String,
    pub item_exact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: DEFAULT_LOG_DIR.to_string(),
            group_by: "Item".to_string(),
            sort_by: "TotalEarned".to_string(),
            top_n: "100".to_string(),
            item_exact: false,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが無ければ既定値を返す。
    ///
    /// # Errors
    ///
    /// ファイルが読めない、またはJSONとして不正な場合にエラーを返す
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// `~` を展開したログフォルダ
    pub fn expanded_log_dir(&self) -> PathBuf {
        expand_path(&self.log_dir)
    }
}

/// 先頭の `~` をホームディレクトリに展開する
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
