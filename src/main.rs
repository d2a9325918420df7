//! Stallsum - Player Shop Sales Summary
//!
//! ショップログを集計して表またはJSONで出力

use anyhow::Result;
use clap::Parser;

use stallsum::adapter::config::Config;
use stallsum::driver::{Args, SalesReportWorkflow};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = SalesReportWorkflow::new(config);

    workflow.execute(args)
}
