//! # Sale Parser Service
//!
//! 購入行の文法解析

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::sale_record::SaleRecord;

/// 購入行を示す部分文字列
const PURCHASE_MARKER: &str = "bought";

fn purchase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"- (?P<buyer>\S+) bought\s+(?P<item>.+?)(?:\s*x(?P<qty>\d+))?\s+at a cost.*=\s*(?P<earned>\d+)$",
        )
        .expect("invalid purchase regex")
    })
}

/// 購入行を `SaleRecord` に変換する
///
/// `- <buyer> bought <item>[ x<qty>] at a cost ... = <earned>` に一致しない行は `None`。
/// 数量が無ければ 1 とする。
pub fn parse_purchase(line: &str, sale_date: NaiveDate) -> Option<SaleRecord> {
    if !line.contains(PURCHASE_MARKER) {
        return None;
    }

    let caps = purchase_re().captures(line)?;

    let quantity = match caps.name("qty") {
        Some(q) => q.as_str().parse().ok()?,
        None => 1,
    };
    let earned = caps["earned"].parse().ok()?;

    Some(SaleRecord::new(
        &caps["buyer"],
        &caps["item"],
        quantity,
        earned,
        sale_date,
    ))
}
