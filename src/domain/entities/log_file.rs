//! # LogFile Entity
//!
//! ショップログファイルのドメインエンティティ

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// ファイル名パターン: `PlayerShopLog_YYMMDD_<数字>`（`.txt` は事前に除去）
fn file_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^PlayerShopLog_(\d{2})(\d{2})\d{2}_\d+$").expect("invalid file name regex")
    })
}

/// ファイル名から名目上の (年, 月) を取り出す
///
/// `PlayerShopLog_250603_101500.txt` と `.txt` の無い
/// `PlayerShopLog_250603_101500` の両方を受け付ける。
///
/// # Returns
///
/// パターンに一致しない場合、または月が 1〜12 の範囲外の場合は `None`
pub fn parse_file_name(file_name: &str) -> Option<(i32, u32)> {
    let stem = file_name.strip_suffix(".txt").unwrap_or(file_name);
    let caps = file_name_re().captures(stem)?;

    let yy: i32 = caps[1].parse().ok()?;
    let mm: u32 = caps[2].parse().ok()?;
    if !(1..=12).contains(&mm) {
        return None;
    }

    Some((2000 + yy, mm))
}

/// ショップログファイル
///
/// パスと、ファイル名が主張する名目上の年月を保持する。
/// ファイル名が命名規則に合わないファイルは `LogFile` にならない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogFile {
    path: PathBuf,
    year: i32,
    month: u32,
}

impl LogFile {
    /// パスから `LogFile` を作成する（ファイル内容は読まない）
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_str()?;
        let (year, month) = parse_file_name(name)?;

        Some(Self {
            path: path.to_path_buf(),
            year,
            month,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 名目上の年
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 名目上の月 (1〜12)
    pub fn month(&self) -> u32 {
        self.month
    }
}
