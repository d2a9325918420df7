//! # Domain Services
//!
//! エンティティにまたがる純粋なビジネスルール
//!
//! ## サービス
//!
//! - **line_date**: ログ行の部分日付の抽出と解決
//! - **authority**: 日付トークンごとの権威ファイル選定
//! - **sale_parser**: 購入行の解析
//! - **aggregation**: 絞り込み・グループ化・集計・ソート

pub mod aggregation;
pub mod authority;
pub mod line_date;
pub mod sale_parser;
