//! # Extract Sales Use Case
//!
//! 権威ファイルのみから期間内の販売記録を抽出する

use log::{debug, info, warn};
use std::sync::Arc;

use crate::application::dto::sales_query::SalesQuery;
use crate::domain::entities::sale_record::SaleRecord;
use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::services::authority::AuthorityMap;
use crate::domain::services::line_date::{extract_line_date, resolve_date};
use crate::domain::services::sale_parser::parse_purchase;

/// 販売記録抽出ユースケース
pub struct ExtractSalesUseCase<R: LogRepository> {
    log_repository: Arc<R>,
}

impl<R: LogRepository> ExtractSalesUseCase<R> {
    pub fn new(log_repository: Arc<R>) -> Self {
        Self { log_repository }
    }

    /// 抽出フェーズ
    ///
    /// 少なくとも1つのトークンで権威となったファイルだけを読み、
    /// 各行について「このファイルがその行のトークンの権威か」を確認してから
    /// 日付を解決し、期間と購入行の文法で絞り込む。
    ///
    /// # Returns
    ///
    /// 販売日の昇順（同日内は走査順）に並んだ販売記録
    pub fn execute(&self, authority: &AuthorityMap, query: &SalesQuery) -> Vec<SaleRecord> {
        let mut sales = Vec::new();

        for file in authority.authority_files() {
            let lines = match self.log_repository.read_lines(file.path()) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!("Skipping unreadable log file {}: {:#}", file.path().display(), e);
                    continue;
                }
            };

            let before = sales.len();
            for line in &lines {
                let Some(token) = extract_line_date(line) else {
                    continue;
                };

                // このファイルが信頼されていない日付の行
                if !authority.is_authority(&token, file.path()) {
                    continue;
                }

                let Some(sale_date) = resolve_date(&token, file.year(), file.month()) else {
                    continue;
                };
                if !query.contains(sale_date) {
                    continue;
                }

                if let Some(sale) = parse_purchase(line, sale_date) {
                    sales.push(sale);
                }
            }
            debug!(
                "Extracted {} sales from {}",
                sales.len() - before,
                file.path().display()
            );
        }

        sales.sort_by_key(|s| s.sale_date);

        info!("Extracted {} sales between {} and {}", sales.len(), query.start, query.end);

        sales
    }
}
