use crate::config::Config;
use crate::models::loaders::load_pages;
use crate::services::card_export;
use crate::utils::logging;
use crate::workflow::ExtractionFlow;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 输出路径
#[derive(Debug, Clone, Default)]
pub struct OutputPaths {
    /// 题目记录 JSON
    pub records_json: Option<PathBuf>,
    /// 卡片 JSON
    pub cards_json: Option<PathBuf>,
    /// 卡片 TSV
    pub cards_tsv: Option<PathBuf>,
}

impl OutputPaths {
    fn is_empty(&self) -> bool {
        self.records_json.is_none() && self.cards_json.is_none() && self.cards_tsv.is_none()
    }

    /// 未指定任何输出时，在输入文件旁写出记录 JSON
    pub fn or_default_for(mut self, input: &Path) -> Self {
        if self.is_empty() {
            self.records_json = Some(default_records_path(input));
        }
        self
    }
}

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub pages: usize,
    pub records: usize,
    pub answered: usize,
    pub cards: usize,
    pub skipped: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    input: PathBuf,
    outputs: OutputPaths,
}

impl App {
    pub fn new(config: Config, input: PathBuf, outputs: OutputPaths) -> Self {
        let outputs = outputs.or_default_for(&input);
        Self {
            config,
            input,
            outputs,
        }
    }

    /// 运行完整流程：加载 → 抽取 → 导出
    ///
    /// 输入读取失败时在切分之前直接终止
    pub fn run(&self) -> Result<RunStats> {
        logging::log_startup(&self.input, &self.config);

        let pages = load_pages(&self.input)
            .with_context(|| format!("无法加载输入文件: {}", self.input.display()))?;

        if pages.iter().all(|p| p.text().is_none()) {
            warn!("⚠️ 输入文件中没有可用文本");
        }

        let output = ExtractionFlow::new(&self.config).run(&pages);
        let outcome = card_export::to_cards(&output.records, &self.config.export);

        if let Some(path) = &self.outputs.records_json {
            card_export::write_records_json(path, &output.records)
                .with_context(|| format!("无法写出题目记录: {}", path.display()))?;
            info!("💾 题目记录已保存至: {}", path.display());
        }
        if let Some(path) = &self.outputs.cards_json {
            card_export::write_cards_json(path, &outcome.cards)
                .with_context(|| format!("无法写出卡片: {}", path.display()))?;
            info!("💾 卡片 JSON 已保存至: {}", path.display());
        }
        if let Some(path) = &self.outputs.cards_tsv {
            card_export::write_cards_tsv(path, &outcome.cards)
                .with_context(|| format!("无法写出卡片: {}", path.display()))?;
            info!("💾 卡片 TSV 已保存至: {}", path.display());
        }

        let stats = RunStats {
            pages: pages.len(),
            records: output.records.len(),
            answered: output.answered(),
            cards: outcome.cards.len(),
            skipped: outcome.skipped,
        };
        logging::print_final_stats(&stats);

        Ok(stats)
    }
}

fn default_records_path(input: &Path) -> PathBuf {
    if input.extension().and_then(|s| s.to_str()) == Some("json") {
        input.with_extension("records.json")
    } else {
        input.with_extension("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let outputs = OutputPaths::default().or_default_for(Path::new("aula15.txt"));
        assert_eq!(outputs.records_json, Some(PathBuf::from("aula15.json")));

        let outputs = OutputPaths::default().or_default_for(Path::new("aula15.json"));
        assert_eq!(outputs.records_json, Some(PathBuf::from("aula15.records.json")));
    }

    #[test]
    fn test_explicit_output_is_kept() {
        let outputs = OutputPaths {
            cards_tsv: Some(PathBuf::from("deck.tsv")),
            ..OutputPaths::default()
        }
        .or_default_for(Path::new("aula15.txt"));

        assert!(outputs.records_json.is_none());
        assert_eq!(outputs.cards_tsv, Some(PathBuf::from("deck.tsv")));
    }
}
