//! Report Rendering
//!
//! 集計結果のテキスト表・JSON出力

use anyhow::{Context, Result};
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::entities::sales_summary::{SalesSummary, SummaryOutcome};

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// 3桁区切りで整形する（例: `1234567` → `"1,234,567"`）
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

const HEADERS: [&str; 4] = ["Group", "TotalSold", "TotalEarned", "AvgPrice"];

fn numeric_cell(value: u64) -> Cell {
    Cell::new(format_thousands(value)).set_alignment(CellAlignment::Right)
}

/// 集計結果を表形式で描画する
///
/// Group列は左寄せ、数値列は右寄せ。最後に合計行を付ける。
pub fn render_table(summary: &SalesSummary) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS.to_vec());

    for r in &summary.rows {
        table.add_row(vec![
            Cell::new(&r.group),
            numeric_cell(r.total_sold),
            numeric_cell(r.total_earned),
            numeric_cell(r.avg_price),
        ]);
    }

    format!(
        "{}\n\n{}\n\nTotal Earned: {}\n",
        summary.summary_line(),
        table,
        format_thousands(summary.total_earned())
    )
}

/// 実行結果を指定形式で描画する
///
/// # Errors
///
/// JSONへのシリアライズに失敗した場合にエラーを返す
pub fn render_outcome(outcome: &SummaryOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(outcome)
                .context("Failed to serialize summary")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Table => Ok(match outcome {
            SummaryOutcome::Summary(summary) => render_table(summary),
            SummaryOutcome::NoData { reason } => {
                format!("{}\n\nTotal Earned: 0\n", reason.message())
            }
        }),
    }
}
