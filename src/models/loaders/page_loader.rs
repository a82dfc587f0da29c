use crate::error::{AppError, AppResult};
use crate::models::page::RawPage;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// pdftotext 输出中的分页符
const FORM_FEED: char = '\x0C';

#[derive(Debug, Deserialize)]
struct TomlPages {
    #[serde(default)]
    pages: Vec<String>,
}

/// 从文件加载页面文本，按扩展名选择格式
///
/// - `.json`：字符串数组，`null` 表示纯图片页
/// - `.toml`：`pages = [...]`
/// - 其他：纯文本，页与页之间用分页符 `\x0C` 分隔
pub fn load_pages(path: &Path) -> AppResult<Vec<RawPage>> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(AppError::NotFound { path: display });
    }

    let content = fs::read_to_string(path).map_err(|e| AppError::file(display.clone(), e))?;

    let pages = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => parse_json_pages(&content)?,
        Some("toml") => parse_toml_pages(&content).map_err(|e| AppError::input(&display, e))?,
        _ => parse_text_pages(&content),
    };

    tracing::info!(
        "正在加载: {} ({} 页)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        pages.len()
    );

    Ok(pages)
}

/// 解析 JSON 页面数组
pub fn parse_json_pages(content: &str) -> AppResult<Vec<RawPage>> {
    Ok(serde_json::from_str(content)?)
}

/// 解析 TOML 页面列表
pub fn parse_toml_pages(content: &str) -> Result<Vec<RawPage>, String> {
    let parsed: TomlPages = toml::from_str(content).map_err(|e| e.to_string())?;
    Ok(parsed.pages.into_iter().map(RawPage::from).collect())
}

/// 按分页符切分纯文本
pub fn parse_text_pages(content: &str) -> Vec<RawPage> {
    content.split(FORM_FEED).map(RawPage::from).collect()
}
