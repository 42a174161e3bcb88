//! rscrisis 命令行：对参数或标准输入中的文本进行危机关键词检测，输出JSON结果
//!
//! 运行命令：
//! cargo run --features cli -- "I can't breathe, panic attack again"
//! echo "..." | cargo run --features cli -- --pretty

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rscrisis::{ConfigManager, CrisisDetector, CrisisMonitor, DetectionResult, KeywordSource};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rscrisis", version, about = "Keyword-weighted crisis-risk scorer")]
struct Cli {
    /// 待检测文本（省略时从标准输入读取）
    text: Vec<String>,

    /// 本地JSON关键词表（默认使用内置关键词表）
    #[arg(short, long)]
    keywords: Option<PathBuf>,

    /// 远程分类接口地址（如 http://localhost:3000/crisis/detect）
    #[arg(short, long)]
    endpoint: Option<String>,

    /// 远程分类接口Bearer令牌
    #[arg(long)]
    token: Option<String>,

    /// HTTP超时（秒）
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// 格式化输出JSON
    #[arg(long)]
    pretty: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志初始化：-v 输出debug，否则遵循 RUST_LOG（默认warn）
    let filter = if cli.verbose {
        EnvFilter::new("rscrisis=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("读取标准输入失败")?;
        buf
    } else {
        cli.text.join(" ")
    };

    let mut builder = ConfigManager::custom().http_timeout(cli.timeout);
    if let Some(path) = cli.keywords {
        builder = builder.keyword_source(KeywordSource::LocalFile(path));
    }
    if let Some(endpoint) = cli.endpoint {
        builder = builder.classify_endpoint(endpoint);
    }
    if let Some(token) = cli.token {
        builder = builder.auth_token(token);
    }

    let detector = CrisisDetector::new(builder.build())
        .await
        .context("检测器初始化失败")?;
    let mut monitor = CrisisMonitor::from_config(Arc::new(detector))?;
    let result = monitor
        .check(&text)
        .await
        .unwrap_or_else(DetectionResult::not_detected);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
