//! # Line Date Service
//!
//! ログ行の部分日付の抽出と、完全な日付への解決

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::line_date_token::LineDateToken;

/// 月略称テーブル（大文字小文字を区別）
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn line_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w{3}\s+\w{3}\s+\d+").expect("invalid line date regex"))
}

/// 行頭の `<曜日> <月> <日>` を切り出す
///
/// 純粋なテキストマッチのみ。月名や日の妥当性は `resolve_date` で検証する。
pub fn extract_line_date(line: &str) -> Option<LineDateToken> {
    line_date_re()
        .find(line)
        .map(|m| LineDateToken::new(m.as_str()))
}

/// 月略称を月番号 (1〜12) に変換
pub fn month_number(abbr: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbr)
        .map(|i| i as u32 + 1)
}

/// トークンとファイルの名目年月から完全な日付を求める
///
/// 名目月が1月で行の月が12月の場合は前年として扱う。
/// 月略称が不明、または日が月の範囲外なら `None`（その行はスキップ）。
pub fn resolve_date(token: &LineDateToken, file_year: i32, file_month: u32) -> Option<NaiveDate> {
    let mut parts = token.as_str().split_whitespace();
    let _weekday = parts.next()?;
    let line_month = month_number(parts.next()?)?;
    let day: u32 = parts.next()?.parse().ok()?;

    let year = if file_month == 1 && line_month == 12 {
        file_year - 1
    } else {
        file_year
    };

    NaiveDate::from_ymd_opt(year, line_month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_extract_line_date() {
        let token = extract_line_date("Mon Jun 2 23:46 - Bob bought Apple at a cost of 5 = 5");
        assert_eq!(token, Some(LineDateToken::new("Mon Jun 2")));
    }

    #[test]
    fn test_extract_line_date_tolerates_extra_whitespace() {
        let token = extract_line_date("Tue  Jun   3 10:00 something");
        assert_eq!(token.unwrap().as_str(), "Tue  Jun   3");
    }

    #[test]
    fn test_extract_line_date_requires_line_start() {
        assert!(extract_line_date("  Tue Jun 3 10:00").is_none());
        assert!(extract_line_date("Player shop opened").is_none());
        assert!(extract_line_date("").is_none());
    }

    #[test]
    fn test_extract_line_date_does_not_validate() {
        let token = extract_line_date("Xyz Foo 99 hello").unwrap();
        assert_eq!(token.as_str(), "Xyz Foo 99");
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("jan"), None);
        assert_eq!(month_number("June"), None);
    }

    #[test]
    fn test_resolve_date_uses_nominal_year() {
        let token = LineDateToken::new("Tue Jun 3");
        assert_eq!(resolve_date(&token, 2025, 6), Some(date(2025, 6, 3)));
    }

    #[test]
    fn test_resolve_date_december_in_january_file_rolls_back() {
        let token = LineDateToken::new("Wed Dec 31");
        assert_eq!(resolve_date(&token, 2025, 1), Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_resolve_date_february_in_january_file_keeps_year() {
        let token = LineDateToken::new("Sat Feb 1");
        assert_eq!(resolve_date(&token, 2025, 1), Some(date(2025, 2, 1)));
    }

    #[test]
    fn test_resolve_date_december_in_other_file_keeps_year() {
        let token = LineDateToken::new("Wed Dec 31");
        assert_eq!(resolve_date(&token, 2025, 2), Some(date(2025, 12, 31)));
    }

    #[test]
    fn test_resolve_date_invalid_day() {
        assert!(resolve_date(&LineDateToken::new("Thu Apr 31"), 2025, 4).is_none());
        assert!(resolve_date(&LineDateToken::new("Sun Feb 30"), 2025, 2).is_none());
        assert!(resolve_date(&LineDateToken::new("Sun Feb 29"), 2025, 2).is_none());
        assert_eq!(
            resolve_date(&LineDateToken::new("Thu Feb 29"), 2024, 2),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_resolve_date_unknown_month() {
        assert!(resolve_date(&LineDateToken::new("Mon Foo 3"), 2025, 6).is_none());
        assert!(resolve_date(&LineDateToken::new("Mon jun 3"), 2025, 6).is_none());
    }

    #[test]
    fn test_resolve_date_huge_day_number() {
        let token = LineDateToken::new("Mon Jun 99999999999999999999");
        assert!(resolve_date(&token, 2025, 6).is_none());
    }
}
