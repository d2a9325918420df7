//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ファイルシステムやCLIについて何も知らない
//! - 純粋なビジネスロジック（日付解決、権威ファイル選定、集計）
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（LogFile, SaleRecord, SalesSummaryなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ビジネスルール）

pub mod entities;
pub mod repositories;
pub mod services;
