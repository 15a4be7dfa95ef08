//! # 剪贴板图片内嵌工具 — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与结果投递。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::io::Write;

use clap::Parser;
use clipboard_embed::cli::Cli;
use clipboard_embed::embed::{EmbedConfig, Embedder};
use clipboard_embed::error::AppError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        log::error!("❌ {err}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => EmbedConfig::from_json_file(path)?,
        None => EmbedConfig::default(),
    };
    log::debug!("配置: {:?}", config);

    if args.print_config {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", config.to_json_pretty()?)?;
        return Ok(());
    }

    let embedder = Embedder::new(config)?;
    let source = args.source();

    if args.stdout {
        let tag = embedder.process(source)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{tag}")?;
    } else {
        embedder.process_and_copy(source)?;
    }

    Ok(())
}
