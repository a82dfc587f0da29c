use anyhow::Result;
use clap::Parser;
use exam_cards::{logger, App, Config, OutputPaths};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exam_cards", about = "从考试讲义文本中抽取题目并导出卡片")]
struct Cli {
    /// 页面文本文件（.json / .toml / 以分页符分隔的纯文本）
    input: PathBuf,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 题目记录 JSON 输出路径
    #[arg(long)]
    out_json: Option<PathBuf>,

    /// 卡片 JSON 输出路径
    #[arg(long)]
    out_cards: Option<PathBuf>,

    /// 卡片 TSV 输出路径
    #[arg(long)]
    out_tsv: Option<PathBuf>,

    /// 重复行阈值（覆盖配置文件）
    #[arg(long)]
    threshold: Option<usize>,

    /// 最多处理的题目数量（覆盖配置文件）
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// 编号前缀（覆盖配置文件）
    #[arg(long)]
    prefix: Option<String>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };
        if let Some(threshold) = self.threshold {
            config.normalizer.repetition_threshold = threshold;
        }
        if let Some(limit) = self.limit {
            config.segmenter.record_limit = Some(limit);
        }
        if let Some(prefix) = &self.prefix {
            config.segmenter.id_prefix = prefix.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    let cli = Cli::parse();

    // 加载配置
    let config = cli.load_config()?;

    let outputs = OutputPaths {
        records_json: cli.out_json,
        cards_json: cli.out_cards,
        cards_tsv: cli.out_tsv,
    };

    App::new(config, cli.input, outputs).run()?;

    Ok(())
}
