//! Workflow Orchestration
//!
//! 引数・設定から集計パラメータを組み立て、ユースケースを実行して出力する

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::info;
use std::sync::Arc;

use crate::adapter::config::{expand_path, Config};
use crate::adapter::report::{render_outcome, OutputFormat};
use crate::adapter::repositories::file_log_repository::FileLogRepository;
use crate::application::dto::sales_query::{RawSalesQuery, DATE_FORMAT};
use crate::application::use_cases::summarize_sales::SummarizeSalesUseCase;
use crate::domain::entities::sales_summary::{SortDirection, SummaryOutcome};

use super::cli::Args;

/// 既定の開始日（その年の1月1日）
pub fn default_start_date(today: NaiveDate) -> String {
    NaiveDate::from_ymd_opt(today.year(), 1, 1)
        .unwrap_or(today)
        .format(DATE_FORMAT)
        .to_string()
}

/// 既定の終了日（今日）
pub fn default_end_date(today: NaiveDate) -> String {
    today.format(DATE_FORMAT).to_string()
}

/// 引数で指定されたソート方向
pub fn direction_override(args: &Args) -> Option<SortDirection> {
    if args.ascending {
        Some(SortDirection::Ascending)
    } else if args.descending {
        Some(SortDirection::Descending)
    } else {
        None
    }
}

/// Sales Report Workflow
pub struct SalesReportWorkflow {
    config: Config,
    summarize_use_case: SummarizeSalesUseCase<FileLogRepository>,
}

impl SalesReportWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let log_repo = Arc::new(FileLogRepository::new());
        let summarize_use_case = SummarizeSalesUseCase::new(log_repo);

        Self {
            config,
            summarize_use_case,
        }
    }

    /// Build the raw (unvalidated) query; CLI arguments win over config values
    pub fn build_query(&self, args: &Args, today: NaiveDate) -> RawSalesQuery {
        let folder = match &args.folder {
            Some(folder) => expand_path(folder),
            None => self.config.expanded_log_dir(),
        };

        RawSalesQuery {
            folder,
            start: args
                .start
                .clone()
                .unwrap_or_else(|| default_start_date(today)),
            end: args.end.clone().unwrap_or_else(|| default_end_date(today)),
            buyer: args.buyer.clone(),
            item: args.item.clone(),
            item_exact: args.exact || self.config.item_exact,
            group_by: args
                .group_by
                .clone()
                .unwrap_or_else(|| self.config.group_by.clone()),
            sort_by: args
                .sort_by
                .clone()
                .unwrap_or_else(|| self.config.sort_by.clone()),
            top_n: args.top.clone().unwrap_or_else(|| self.config.top_n.clone()),
            direction: direction_override(args),
        }
    }

    /// Validate the parameters and run the pipeline once
    ///
    /// Validation errors are returned before any log file is read.
    pub fn run(&self, args: &Args, today: NaiveDate) -> Result<SummaryOutcome> {
        let query = self.build_query(args, today).validate()?;

        info!(
            "Summarizing {} from {} to {} grouped by {}",
            query.folder.display(),
            query.start,
            query.end,
            query.group_by
        );

        self.summarize_use_case.execute(&query)
    }

    /// Execute the workflow and print the report
    pub fn execute(&self, args: Args) -> Result<()> {
        let today = Local::now().date_naive();
        let outcome = self.run(&args, today)?;

        let format = if args.format == "json" {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        };
        print!("{}", render_outcome(&outcome, format)?);

        Ok(())
    }
}
