//! # Aggregation Service
//!
//! 販売記録の絞り込み・グループ化・集計・ソート・上位N件切り出し

use std::collections::HashMap;

use crate::domain::entities::sale_record::SaleRecord;
use crate::domain::entities::sales_summary::{
    sort_groups, GroupBy, GroupResult, SalesSummary, SortDirection, SortField,
};

/// 購入者・アイテムの絞り込み条件
///
/// 空文字列は「条件なし」。両方指定した場合は AND で結合する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFilter {
    /// 購入者名（完全一致、大文字小文字を区別）
    pub buyer: String,
    /// アイテム名
    pub item: String,
    /// `true` なら完全一致、`false` なら大文字小文字を無視した部分一致
    pub item_exact: bool,
}

impl SalesFilter {
    pub fn matches(&self, sale: &SaleRecord) -> bool {
        if !self.buyer.is_empty() && sale.buyer != self.buyer {
            return false;
        }

        if self.item.is_empty() {
            return true;
        }

        if self.item_exact {
            sale.item == self.item
        } else {
            sale.item
                .to_lowercase()
                .contains(&self.item.to_lowercase())
        }
    }
}

/// 並べ替えと件数制限の指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub sort_by: SortField,
    pub direction: SortDirection,
    /// `None` は無制限
    pub top_n: Option<usize>,
}

impl SortSpec {
    /// 既定方向でのソート指定
    pub fn new(sort_by: SortField, top_n: Option<usize>) -> Self {
        Self {
            sort_by,
            direction: sort_by.default_direction(),
            top_n,
        }
    }
}

pub fn apply_filters<'a>(sales: &'a [SaleRecord], filter: &SalesFilter) -> Vec<&'a SaleRecord> {
    sales.iter().filter(|s| filter.matches(s)).collect()
}

/// グループ化キー
pub fn group_key(sale: &SaleRecord, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Buyer => sale.buyer.clone(),
        GroupBy::Item => sale.item.clone(),
        GroupBy::Year => sale.sale_date.format("%Y").to_string(),
        GroupBy::Month => sale.sale_date.format("%Y-%m").to_string(),
        GroupBy::Week => sale.sale_date.format("%Y-%U").to_string(),
        GroupBy::Day => sale.sale_date.format("%Y-%m-%d").to_string(),
    }
}

/// `earned / sold` を偶数丸め (round half to even) で整数化する。`sold == 0` なら 0
pub fn average_price(earned: u64, sold: u64) -> u64 {
    if sold == 0 {
        return 0;
    }

    let quotient = earned / sold;
    let twice_remainder = 2 * (earned % sold) as u128;
    let sold = sold as u128;

    if twice_remainder > sold || (twice_remainder == sold && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// グループ化して集計する（グループは初出順）
pub fn group_and_aggregate<'a>(
    sales: impl IntoIterator<Item = &'a SaleRecord>,
    group_by: GroupBy,
) -> Vec<GroupResult> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, u64, u64)> = Vec::new();

    for sale in sales {
        let key = group_key(sale, group_by);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            totals.push((key, 0, 0));
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.1 = entry.1.saturating_add(sale.quantity);
        entry.2 = entry.2.saturating_add(sale.earned);
    }

    totals
        .into_iter()
        .map(|(group, total_sold, total_earned)| GroupResult {
            group,
            total_sold,
            total_earned,
            avg_price: average_price(total_earned, total_sold),
        })
        .collect()
}

/// 並べ替えて上位N件に切り詰め、集計結果を組み立てる
pub fn build_summary(
    mut rows: Vec<GroupResult>,
    group_by: GroupBy,
    sort_spec: SortSpec,
) -> SalesSummary {
    sort_groups(&mut rows, sort_spec.sort_by, sort_spec.direction);

    if let Some(n) = sort_spec.top_n {
        rows.truncate(n);
    }

    SalesSummary {
        rows,
        group_by,
        sort_by: sort_spec.sort_by,
        direction: sort_spec.direction,
        top_n: sort_spec.top_n,
    }
}
