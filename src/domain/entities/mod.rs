//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **LogFile**: ファイル名から名目年月を得たショップログファイル
//! - **LineDateToken**: ログ行先頭の部分日付
//! - **SaleRecord**: 1件の販売記録
//! - **SalesSummary**: グループ集計結果のバリューオブジェクト

pub mod line_date_token;
pub mod log_file;
pub mod sale_record;
pub mod sales_summary;
