//! Adapter Layer
//!
//! 外部システム（ファイルシステム、設定ファイル、出力）との統合

pub mod config;
pub mod report;
pub mod repositories;
