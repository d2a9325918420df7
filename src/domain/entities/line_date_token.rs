//! # LineDateToken Value Object
//!
//! ログ行先頭の部分日付（例: `"Tue Jun 3"`）

use std::fmt;

/// ログ行から切り出した部分日付文字列
///
/// 年を含まないため、同じトークンが複数ファイルに現れる。
/// 完全な日付への解決は `services::line_date::resolve_date` で行う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineDateToken(String);

impl LineDateToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineDateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
