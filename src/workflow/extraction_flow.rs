//! 抽取流程 - 流程层
//!
//! 定义"一份文档"的完整处理流程：
//! 1. 页面拼接与清洗
//! 2. 按题号切块并抽取字段
//!
//! 全部为同步纯函数，同样的输入总是得到同样的记录

use crate::config::Config;
use crate::models::exercise::ExerciseRecord;
use crate::models::page::RawPage;
use crate::services::normalizer::{NormalizeStats, Normalizer};
use crate::services::segmenter::Segmenter;
use tracing::info;

/// 流程输出
#[derive(Debug, Clone)]
pub struct FlowOutput {
    pub records: Vec<ExerciseRecord>,
    pub normalize_stats: NormalizeStats,
}

impl FlowOutput {
    /// 有答案的记录数
    pub fn answered(&self) -> usize {
        self.records.iter().filter(|r| !r.answer.is_empty()).count()
    }
}

/// 抽取流程
///
/// 不持有任何外部资源，只组合 Normalizer 与 Segmenter
#[derive(Debug, Clone)]
pub struct ExtractionFlow {
    normalizer: Normalizer,
    segmenter: Segmenter,
}

impl ExtractionFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: Normalizer::new(config.normalizer.clone()),
            segmenter: Segmenter::new(config.segmenter.clone()),
        }
    }

    pub fn run(&self, pages: &[RawPage]) -> FlowOutput {
        let (text, normalize_stats) = self.normalizer.normalize_with_stats(pages);
        info!("🧹 清洗完成，保留 {} 行", normalize_stats.kept);

        let records = self.segmenter.segment(&text);
        info!("✂️ 切分完成，共 {} 道题目", records.len());

        FlowOutput {
            records,
            normalize_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_idempotent() {
        let pages = vec![
            RawPage::new("Aula 15\n1. Frase um. Frase dois.\n2. Qual? (CESPE)\nA) x\nB) y"),
            RawPage::empty(),
            RawPage::new("Gabarito letra A\n3. Texto Comentários: explicação Gabarito: Correto"),
        ];
        let flow = ExtractionFlow::new(&Config::default());

        let first = flow.run(&pages);
        let second = flow.run(&pages);

        assert_eq!(first.records, second.records);
        assert_eq!(first.records.len(), 3);
        assert_eq!(first.answered(), 2);
    }
}
