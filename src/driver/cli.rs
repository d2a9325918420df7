//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// プレイヤーショップログの販売集計CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "stallsum")]
#[command(about = "Summarize player shop sales from PlayerShopLog files", long_about = None)]
pub struct Args {
    /// Folder containing PlayerShopLog_*.txt files
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Group by: Buyer, Item, Year, Month, Week, Day
    #[arg(short, long)]
    pub group_by: Option<String>,

    /// Only include sales to this buyer (exact match)
    #[arg(long, default_value = "")]
    pub buyer: String,

    /// Only include items containing this text (case-insensitive)
    #[arg(long, default_value = "")]
    pub item: String,

    /// Match the item filter exactly
    #[arg(long)]
    pub exact: bool,

    /// Start date (MM/DD/YYYY), defaults to January 1st of this year
    #[arg(long)]
    pub start: Option<String>,

    /// End date (MM/DD/YYYY), defaults to today
    #[arg(long)]
    pub end: Option<String>,

    /// Show only the top N groups (0 or non-numeric shows all)
    #[arg(short = 'n', long)]
    pub top: Option<String>,

    /// Sort by: Group, TotalSold, TotalEarned, AvgPrice
    #[arg(short, long)]
    pub sort_by: Option<String>,

    /// Sort ascending regardless of the column default
    #[arg(long, conflicts_with = "descending")]
    pub ascending: bool,

    /// Sort descending regardless of the column default
    #[arg(long)]
    pub descending: bool,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}
