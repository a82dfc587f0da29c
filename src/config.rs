use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 程序配置
///
/// 在调用时显式传入 Normalizer / Segmenter，不使用全局变量
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub normalizer: NormalizerConfig,
    pub segmenter: SegmenterConfig,
    pub export: ExportConfig,
}

/// 文本清洗配置
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// 同一行出现次数超过该值即视为页眉/页脚
    pub repetition_threshold: usize,
    /// 每页开头丢弃的行数（仅当该页行数多于此值时）
    pub header_lines: usize,
    /// 每页末尾丢弃的行数（仅当该页行数多于此值时）
    pub footer_lines: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            repetition_threshold: 3,
            header_lines: 0,
            footer_lines: 0,
        }
    }
}

/// 题目切分配置
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// 编号前缀，生成 `<prefix>-001` 形式的 ID
    pub id_prefix: String,
    /// 最多输出的题目数量（用于增量调试）
    pub record_limit: Option<usize>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            id_prefix: "15-ort".to_string(),
            record_limit: None,
        }
    }
}

/// 卡片导出配置
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// 段落之间使用的换行标记
    pub line_break: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            line_break: "<br>".to_string(),
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file(display.clone(), e))?;
        Self::from_toml_str(&content).map_err(|source| AppError::Config {
            path: display,
            source,
        })
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
