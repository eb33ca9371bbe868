//! # gps-exporter CLI
//!
//! 命令行接口入口点。
//!
//! 提供：
//! - 参数解析与日志初始化
//! - 指标端点启动
//! - 采集循环生命周期管理

mod cli;
mod pipeline;
mod run;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on CLI options
    init_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "gps-exporter starting"
    );

    let result = run::run_exporter(&cli).await;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Exporter failed");
    }

    result
}

/// Initialize logging based on CLI options
///
/// RUST_LOG always wins; the CLI flags only pick the default level and
/// the output format.
fn init_logging(cli: &Cli) -> Result<()> {
    let default_log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    observability::init_with_config(observability::ObservabilityConfig {
        log_format: cli.log_format.into(),
        default_log_level: default_log_level.to_string(),
    })
}
