//! # Summarize Sales Use Case
//!
//! 発見 → 走査 → 抽出 → 集計 の一連の流れ
//!
//! 各段階で結果が空になった場合は、段階ごとに区別できる
//! `NoDataReason` を返す（エラーではない）。

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::application::dto::sales_query::SalesQuery;
use crate::application::use_cases::discover_logs::DiscoverLogsUseCase;
use crate::application::use_cases::extract_sales::ExtractSalesUseCase;
use crate::application::use_cases::scan_authority::ScanAuthorityUseCase;
use crate::domain::entities::sales_summary::{NoDataReason, SummaryOutcome};
use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::services::aggregation::{apply_filters, build_summary, group_and_aggregate};

/// 販売集計ユースケース
pub struct SummarizeSalesUseCase<R: LogRepository> {
    discover: DiscoverLogsUseCase<R>,
    scan: ScanAuthorityUseCase<R>,
    extract: ExtractSalesUseCase<R>,
}

impl<R: LogRepository> SummarizeSalesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `log_repository` - ログリポジトリ（各段階で共有）
    pub fn new(log_repository: Arc<R>) -> Self {
        Self {
            discover: DiscoverLogsUseCase::new(log_repository.clone()),
            scan: ScanAuthorityUseCase::new(log_repository.clone()),
            extract: ExtractSalesUseCase::new(log_repository),
        }
    }

    /// 1回分の集計を実行する
    ///
    /// ディレクトリは毎回走査し直す（実行間でキャッシュしない）。
    ///
    /// # Errors
    ///
    /// ログディレクトリ自体の読み取りに失敗した場合にエラーを返す。
    /// 個々のファイルの読み取り失敗はスキップされ、エラーにはならない。
    pub fn execute(&self, query: &SalesQuery) -> Result<SummaryOutcome> {
        let files = self.discover.execute(&query.folder)?;
        info!("Found {} log files in {}", files.len(), query.folder.display());

        let authority = self.scan.execute(&files);
        if authority.is_empty() {
            return Ok(SummaryOutcome::no_data(NoDataReason::NoLogFiles));
        }

        let sales = self.extract.execute(&authority, query);
        if sales.is_empty() {
            return Ok(SummaryOutcome::no_data(NoDataReason::NoSalesInRange));
        }

        let filtered = apply_filters(&sales, &query.filter);
        if filtered.is_empty() {
            return Ok(SummaryOutcome::no_data(NoDataReason::NoMatchingSales));
        }

        let groups = group_and_aggregate(filtered, query.group_by);
        let summary = build_summary(groups, query.group_by, query.sort);
        info!(
            "Summarized {} groups (total earned {})",
            summary.rows.len(),
            summary.total_earned()
        );

        Ok(SummaryOutcome::Summary(summary))
    }
}
