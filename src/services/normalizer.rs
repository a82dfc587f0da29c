//! 文本清洗服务
//!
//! 把逐页提取的文本拼接为一个整体，并去掉页眉页脚、页码、网址等噪声行

use crate::config::NormalizerConfig;
use crate::models::page::RawPage;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static DIGITS_AND_SPACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s]+$").unwrap());

const WEB_MARKER: &str = "www.";

/// 行被丢弃的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Blank,
    Repeated,
    WebAddress,
    PageNumber,
}

/// 清洗统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizeStats {
    pub kept: usize,
    pub blank: usize,
    pub repeated: usize,
    pub web: usize,
    pub page_numbers: usize,
}

impl NormalizeStats {
    fn record(&mut self, reason: Option<DropReason>) {
        match reason {
            None => self.kept += 1,
            Some(DropReason::Blank) => self.blank += 1,
            Some(DropReason::Repeated) => self.repeated += 1,
            Some(DropReason::WebAddress) => self.web += 1,
            Some(DropReason::PageNumber) => self.page_numbers += 1,
        }
    }
}

/// 文本清洗器
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// 拼接并清洗所有页面，返回单个文本
    pub fn normalize<'a, I>(&self, pages: I) -> String
    where
        I: IntoIterator<Item = &'a RawPage>,
    {
        self.normalize_with_stats(pages).0
    }

    /// 同 [`normalize`](Self::normalize)，额外返回各类丢弃行的数量
    pub fn normalize_with_stats<'a, I>(&self, pages: I) -> (String, NormalizeStats)
    where
        I: IntoIterator<Item = &'a RawPage>,
    {
        let text = self.concat_pages(pages);
        let lines: Vec<&str> = text.split('\n').collect();

        // 重复行判定需要全局频率表，必须先完整统计一遍
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for line in &lines {
            *counts.entry(*line).or_insert(0) += 1;
        }

        let mut stats = NormalizeStats::default();
        let mut kept = Vec::with_capacity(lines.len());
        for line in &lines {
            let count = counts.get(line).copied().unwrap_or(0);
            let reason = self.classify(line, count);
            stats.record(reason);
            if reason.is_none() {
                kept.push(*line);
            }
        }

        debug!(
            "清洗完成: 保留 {} 行, 空行 {}, 重复 {}, 网址 {}, 页码 {}",
            stats.kept, stats.blank, stats.repeated, stats.web, stats.page_numbers
        );

        (kept.join("\n"), stats)
    }

    /// 判断一行是否为噪声，返回丢弃原因
    pub fn classify(&self, line: &str, occurrences: usize) -> Option<DropReason> {
        let stripped = line.trim();
        if stripped.is_empty() {
            Some(DropReason::Blank)
        } else if occurrences > self.config.repetition_threshold {
            Some(DropReason::Repeated)
        } else if stripped.contains(WEB_MARKER) {
            Some(DropReason::WebAddress)
        } else if DIGITS_AND_SPACES_RE.is_match(stripped) {
            Some(DropReason::PageNumber)
        } else {
            None
        }
    }

    /// 按顺序拼接页面，每页后追加换行；无文本的页面直接跳过
    fn concat_pages<'a, I>(&self, pages: I) -> String
    where
        I: IntoIterator<Item = &'a RawPage>,
    {
        let mut full_text = String::new();
        for page in pages {
            let Some(text) = page.text() else {
                continue;
            };
            let lines: Vec<&str> = text.split('\n').collect();
            let lines = trim_page_edges(&lines, self.config.header_lines, self.config.footer_lines);
            full_text.push_str(&lines.join("\n"));
            full_text.push('\n');
        }
        full_text
    }
}

/// 去掉每页开头/结尾固定行数，行数不足时保留原样
fn trim_page_edges<'a, 'b>(lines: &'b [&'a str], header: usize, footer: usize) -> &'b [&'a str] {
    let lines = if header > 0 && lines.len() > header {
        &lines[header..]
    } else {
        lines
    };
    if footer > 0 && lines.len() > footer {
        &lines[..lines.len() - footer]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<RawPage> {
        texts.iter().map(|t| RawPage::from(*t)).collect()
    }

    #[test]
    fn test_removes_repeated_page_number_and_web_lines() {
        let input = pages(&[
            "CABEÇALHO\nlinha um\nCABEÇALHO\n42\nCABEÇALHO",
            "CABEÇALHO\nacesse www.example.com agora\nCABEÇALHO\nlinha dois",
        ]);

        let out = Normalizer::default().normalize(&input);

        assert!(!out.contains("CABEÇALHO"));
        assert!(!out.lines().any(|l| l.trim() == "42"));
        assert!(!out.contains("www.example.com"));
        assert_eq!(out, "linha um\nlinha dois");
    }

    #[test]
    fn test_line_at_threshold_is_kept() {
        let input = pages(&["repete\nrepete\nrepete\noutra"]);
        let out = Normalizer::default().normalize(&input);
        assert_eq!(out.matches("repete").count(), 3);
    }

    #[test]
    fn test_digits_and_spaces_line_removed() {
        let input = pages(&["texto\n  12  \n3 4 5\n7a"]);
        let (out, stats) = Normalizer::default().normalize_with_stats(&input);
        assert_eq!(out, "texto\n7a");
        assert_eq!(stats.page_numbers, 2);
    }

    #[test]
    fn test_empty_pages_are_skipped() {
        let input = vec![RawPage::empty(), RawPage::new("   "), RawPage::new("conteúdo")];
        assert_eq!(Normalizer::default().normalize(&input), "conteúdo");
    }

    #[test]
    fn test_blank_lines_removed_and_indentation_kept() {
        let input = pages(&["  recuo\n\n   \nfim"]);
        assert_eq!(Normalizer::default().normalize(&input), "  recuo\nfim");
    }

    #[test]
    fn test_header_and_footer_lines_trimmed_per_page() {
        let config = NormalizerConfig {
            header_lines: 1,
            footer_lines: 1,
            ..NormalizerConfig::default()
        };
        let input = pages(&["topo\nmeio\nrodapé", "só uma"]);
        assert_eq!(Normalizer::new(config).normalize(&input), "meio\nsó uma");
    }

    #[test]
    fn test_custom_threshold() {
        let config = NormalizerConfig {
            repetition_threshold: 1,
            ..NormalizerConfig::default()
        };
        let input = pages(&["dup\ndup\núnica"]);
        assert_eq!(Normalizer::new(config).normalize(&input), "única");
    }
}
