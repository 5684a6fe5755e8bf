//! rsrichtext 命令行工具
//! 从文件或标准输入读取内容，执行单个富文本操作并输出结果

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rsrichtext::{ConfigManager, ContentKind, RichTextError, RichTextProcessor};

#[derive(Debug, Parser)]
#[command(name = "rsrichtext", version, about = "课程富文本处理：检测、净化、判空与截断")]
struct Cli {
    /// JSON配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 以JSON格式输出
    #[arg(long, global = true)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 判断内容类型（html / plain_text）
    Detect { input: Option<PathBuf> },
    /// 渲染混合来源内容
    Render { input: Option<PathBuf> },
    /// 净化HTML
    Sanitize { input: Option<PathBuf> },
    /// 判断富文本是否为空
    Empty { input: Option<PathBuf> },
    /// 提取纯文本
    PlainText { input: Option<PathBuf> },
    /// 纯文本长度
    Length { input: Option<PathBuf> },
    /// 保留结构截断
    Truncate {
        input: Option<PathBuf>,
        #[arg(short, long)]
        max_length: usize,
    },
    /// 课程内容预览（净化+截断+省略号）
    Preview {
        input: Option<PathBuf>,
        #[arg(long)]
        expanded: bool,
    },
    /// 纯文本预览
    PlainPreview {
        input: Option<PathBuf>,
        #[arg(short, long)]
        max_length: Option<usize>,
    },
}

impl Command {
    fn input(&self) -> Option<&PathBuf> {
        match self {
            Command::Detect { input }
            | Command::Render { input }
            | Command::Sanitize { input }
            | Command::Empty { input }
            | Command::PlainText { input }
            | Command::Length { input }
            | Command::Truncate { input, .. }
            | Command::Preview { input, .. }
            | Command::PlainPreview { input, .. } => input.as_ref(),
        }
    }
}

/// 读取输入：未指定或为 `-` 时读取标准输入
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let bytes = match path {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read(path).with_context(|| format!("读取输入文件失败：{}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("读取标准输入失败")?;
            buf
        }
    };

    String::from_utf8(bytes)
        .map_err(|e| RichTextError::InvalidInput(format!("输入不是合法的UTF-8：{}", e)).into())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rsrichtext=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ConfigManager::from_json_file(path)?,
        None => ConfigManager::get_default(),
    };
    let processor = RichTextProcessor::new(config)?;
    let content = read_input(cli.command.input())?;

    let (text, value) = match &cli.command {
        Command::Detect { .. } => {
            let kind = ContentKind::detect(&content);
            (kind.as_str().to_string(), json!({ "kind": kind }))
        }
        Command::Render { .. } => {
            let rendered = processor.render_lesson_content(&content);
            (rendered.clone(), json!({ "html": rendered }))
        }
        Command::Sanitize { .. } => {
            let (sanitized, report) = processor.sanitize_with_report(&content);
            (sanitized.clone(), json!({ "html": sanitized, "report": report }))
        }
        Command::Empty { .. } => {
            let empty = processor.is_empty(&content);
            (empty.to_string(), json!({ "empty": empty }))
        }
        Command::PlainText { .. } => {
            let text = processor.plain_text(&content);
            (text.clone(), json!({ "text": text }))
        }
        Command::Length { .. } => {
            let length = processor.plain_text_length(&content);
            (length.to_string(), json!({ "length": length }))
        }
        Command::Truncate { max_length, .. } => {
            let result = processor.truncate(&content, *max_length);
            (result.truncated.clone(), serde_json::to_value(&result)?)
        }
        Command::Preview { expanded, .. } => {
            let result = processor.render_preview(&content, *expanded);
            (result.truncated.clone(), serde_json::to_value(&result)?)
        }
        Command::PlainPreview { max_length, .. } => {
            let preview = match max_length {
                Some(max_length) => processor.create_preview(&content, *max_length),
                None => processor.create_default_preview(&content),
            };
            (preview.clone(), json!({ "html": preview }))
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}
