//! # SalesSummary Value Object
//!
//! 集計結果（グループ行・ソート状態・合計）

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// グループ化キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupBy {
    Buyer,
    Item,
    Year,
    Month,
    /// `%Y-%U`（日曜始まり、ISO週番号ではない）
    Week,
    Day,
}

impl GroupBy {
    pub const ALL: [GroupBy; 6] = [
        GroupBy::Buyer,
        GroupBy::Item,
        GroupBy::Year,
        GroupBy::Month,
        GroupBy::Week,
        GroupBy::Day,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Buyer => "Buyer",
            GroupBy::Item => "Item",
            GroupBy::Year => "Year",
            GroupBy::Month => "Month",
            GroupBy::Week => "Week",
            GroupBy::Day => "Day",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// ソート対象の列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortField {
    Group,
    TotalSold,
    TotalEarned,
    AvgPrice,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Group,
        SortField::TotalSold,
        SortField::TotalEarned,
        SortField::AvgPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Group => "Group",
            SortField::TotalSold => "TotalSold",
            SortField::TotalEarned => "TotalEarned",
            SortField::AvgPrice => "AvgPrice",
        }
    }

    /// 既定のソート方向（Group は昇順、それ以外は降順）
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortField::Group => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    /// 昇順での比較
    pub fn compare(&self, a: &GroupResult, b: &GroupResult) -> Ordering {
        match self {
            SortField::Group => a.group.cmp(&b.group),
            SortField::TotalSold => a.total_sold.cmp(&b.total_sold),
            SortField::TotalEarned => a.total_earned.cmp(&b.total_earned),
            SortField::AvgPrice => a.avg_price.cmp(&b.avg_price),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// グループ集計行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupResult {
    pub group: String,
    pub total_sold: u64,
    pub total_earned: u64,
    pub avg_price: u64,
}

/// 安定ソートで並べ替える（同値は元の順序を保つ）
pub fn sort_groups(rows: &mut [GroupResult], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => rows.sort_by(|a, b| field.compare(a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| field.compare(b, a)),
    }
}

/// 集計結果
///
/// 表示層が保持していた「現在の結果」とソート状態をまとめた値。
/// 並べ替えは `resorted` で新しい値を作る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub rows: Vec<GroupResult>,
    pub group_by: GroupBy,
    pub sort_by: SortField,
    pub direction: SortDirection,
    /// 上位N件の制限（`None` は無制限）
    pub top_n: Option<usize>,
}

impl SalesSummary {
    /// 返却された行の TotalEarned 合計（u64::MAX で飽和）
    pub fn total_earned(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.total_earned))
    }

    /// 見出し用の説明文
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "Showing totals grouped by {} (sorted by {})",
            self.group_by, self.sort_by
        );
        if let Some(n) = self.top_n {
            line.push_str(&format!(" - Top {} results", n));
        }
        line
    }

    /// 別の列で並べ替えた新しい集計結果を返す
    ///
    /// 同じ列を再指定した場合は方向を反転する。行数は変わらない。
    ///
    /// CLIは1回の実行で終わるため呼ばない。集計結果を保持して
    /// 列見出しから並べ替える呼び出し側向けのライブラリAPI。
    pub fn resorted(&self, sort_by: SortField) -> Self {
        let direction = if sort_by == self.sort_by {
            self.direction.reversed()
        } else {
            sort_by.default_direction()
        };

        let mut rows = self.rows.clone();
        sort_groups(&mut rows, sort_by, direction);

        Self {
            rows,
            group_by: self.group_by,
            sort_by,
            direction,
            top_n: self.top_n,
        }
    }
}

/// 結果が0件になった段階
///
/// 0件はエラーではなく、段階ごとに区別できる正常な結果として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoDataReason {
    /// 日付付きの行を持つログファイルが無い
    NoLogFiles,
    /// 期間内に販売記録が無い
    NoSalesInRange,
    /// 絞り込みで全件除外された
    NoMatchingSales,
}

impl NoDataReason {
    pub fn message(&self) -> &'static str {
        match self {
            NoDataReason::NoLogFiles => "No log files found in the folder.",
            NoDataReason::NoSalesInRange => "No sales data found in the specified date range.",
            NoDataReason::NoMatchingSales => "No sales found for the applied filters.",
        }
    }
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 1回の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Summary(SalesSummary),
    NoData { reason: NoDataReason },
}

impl SummaryOutcome {
    pub fn no_data(reason: NoDataReason) -> Self {
        SummaryOutcome::NoData { reason }
    }

    pub fn summary(&self) -> Option<&SalesSummary> {
        match self {
            SummaryOutcome::Summary(summary) => Some(summary),
            SummaryOutcome::NoData { .. } => None,
        }
    }

    pub fn no_data_reason(&self) -> Option<NoDataReason> {
        match self {
            SummaryOutcome::Summary(_) => None,
            SummaryOutcome::NoData { reason } => Some(*reason),
        }
    }
}
