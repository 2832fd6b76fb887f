// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use line_tally_shared_kernel::PresentationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "line_tally", version = crate::VERSION, about = "コード/コメント/空行の行数集計ツール")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 設定ファイル (.json / .yaml / KEY = value 形式)
    #[arg(default_value = "config.ini")]
    pub config: PathBuf,

    /// 検索ディレクトリ (指定時は設定ファイルの DIRECTORY を置き換える)
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// 拡張子 (カンマ区切り、指定時は設定ファイルの EXTENSION を置き換える)
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// サブディレクトリも検索
    #[arg(short, long)]
    pub recursive: bool,

    /// 隠しファイルも含める
    #[arg(long)]
    pub hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long)]
    pub follow: bool,

    /// .gitignore / .ignore を尊重
    #[arg(long)]
    pub gitignore: bool,

    /// 並列数 (既定: CPU 数)
    #[arg(long, value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// ログを詳細に (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn jobs(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get)
    }
}

fn parse_jobs(value: &str) -> Result<usize, PresentationError> {
    let invalid = |reason: &str| PresentationError::InvalidValue {
        flag: "--jobs".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };
    match value.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(invalid("not a positive integer")),
    }
}
