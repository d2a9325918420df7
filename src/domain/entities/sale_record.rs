//! # SaleRecord Entity
//!
//! 1件の販売記録

use chrono::NaiveDate;
use serde::Serialize;

/// 販売記録
///
/// 権威ファイル内の購入行からのみ生成される。生成後は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecord {
    pub buyer: String,
    pub item: String,
    pub quantity: u64,
    pub earned: u64,
    pub sale_date: NaiveDate,
}

impl SaleRecord {
    /// 新しい販売記録を作成（アイテム名は前後の空白を除去）
    pub fn new(
        buyer: impl Into<String>,
        item: &str,
        quantity: u64,
        earned: u64,
        sale_date: NaiveDate,
    ) -> Self {
        Self {
            buyer: buyer.into(),
            item: item.trim().to_string(),
            quantity,
            earned,
            sale_date,
        }
    }
}
