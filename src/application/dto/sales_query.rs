//! # Sales Query DTO
//!
//! 集計パラメータのData Transfer Objectと入力検証
//!
//! 呼び出し側から受け取った文字列パラメータ（`RawSalesQuery`）を検証し、
//! 型付きの `SalesQuery` に変換する。検証はファイルI/Oの前に行う。

use chrono::NaiveDate;
use log::warn;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::sales_summary::{GroupBy, SortDirection, SortField};
use crate::domain::services::aggregation::{SalesFilter, SortSpec};

/// 日付入力の形式 (MM/DD/YYYY)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// 入力検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please select a valid folder: {0}")]
    FolderNotFound(PathBuf),

    #[error("Invalid {field} date '{value}'. Use MM/DD/YYYY")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unknown group-by '{0}'. Expected one of Buyer, Item, Year, Month, Week, Day")]
    UnknownGroupBy(String),

    #[error("Unknown sort-by '{0}'. Expected one of Group, TotalSold, TotalEarned, AvgPrice")]
    UnknownSortBy(String),
}

/// 検証前のパラメータ（文字列のまま）
#[derive(Debug, Clone, Default)]
pub struct RawSalesQuery {
    pub folder: PathBuf,
    pub start: String,
    pub end: String,
    pub buyer: String,
    pub item: String,
    pub item_exact: bool,
    pub group_by: String,
    pub sort_by: String,
    pub top_n: String,
    /// ソート方向の明示指定（`None` なら列ごとの既定方向）
    pub direction: Option<SortDirection>,
}

/// 検証済みの集計パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    pub folder: PathBuf,
    /// 開始日（含む）
    pub start: NaiveDate,
    /// 終了日（含む）
    pub end: NaiveDate,
    pub filter: SalesFilter,
    pub group_by: GroupBy,
    pub sort: SortSpec,
}

impl SalesQuery {
    /// 期間内かどうか
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl RawSalesQuery {
    /// パラメータを検証して `SalesQuery` に変換する
    ///
    /// # Errors
    ///
    /// フォルダが存在しない、日付が MM/DD/YYYY でない、
    /// グループ化キー・ソート列が不明な場合にエラーを返す
    pub fn validate(&self) -> Result<SalesQuery, QueryError> {
        if !self.folder.is_dir() {
            return Err(QueryError::FolderNotFound(self.folder.clone()));
        }

        let start = parse_date("start", &self.start)?;
        let end = parse_date("end", &self.end)?;

        let group_by = self
            .group_by
            .parse::<GroupBy>()
            .map_err(QueryError::UnknownGroupBy)?;
        let sort_by = self
            .sort_by
            .parse::<SortField>()
            .map_err(QueryError::UnknownSortBy)?;

        let mut sort = SortSpec::new(sort_by, parse_top_n(&self.top_n));
        if let Some(direction) = self.direction {
            sort.direction = direction;
        }

        Ok(SalesQuery {
            folder: self.folder.clone(),
            start,
            end,
            filter: SalesFilter {
                buyer: self.buyer.trim().to_string(),
                item: self.item.trim().to_string(),
                item_exact: self.item_exact,
            },
            group_by,
            sort,
        })
    }
}

/// MM/DD/YYYY 形式の日付をパースする
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| QueryError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// 上位N件の指定をパースする
///
/// 0以下は無制限 (`None`)。数値でない場合もエラーにせず無制限として扱う。
pub fn parse_top_n(value: &str) -> Option<usize> {
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        Ok(_) => None,
        Err(_) => {
            warn!("Top N '{}' is not a number, showing all results", value);
            None
        }
    }
}
