//! # Stallsum
//!
//! プレイヤーショップのログ（`PlayerShopLog_*.txt`）から販売集計を作るツール
//!
//! 同じ日付の行が複数のログファイルに重複して記録されるため、日付トークンごとに
//! 最も多くの行を持つファイルだけを「権威ファイル」として採用し、二重計上を防ぐ。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 日付解決・権威ファイル選定・集計のルールとエンティティ
//! - **Application層**: アプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（ファイルシステム, 設定, 出力）
//! - **Driver層**: CLI、依存性注入

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
