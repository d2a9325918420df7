//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverLogsUseCase**: ログファイルの発見
//! - **ScanAuthorityUseCase**: 日付トークンごとの権威ファイル選定
//! - **ExtractSalesUseCase**: 権威ファイルからの販売記録抽出
//! - **SummarizeSalesUseCase**: 一連の流れと集計

pub mod discover_logs;
pub mod extract_sales;
pub mod scan_authority;
pub mod summarize_sales;
