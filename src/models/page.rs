use serde::{Deserialize, Serialize};

/// 单页提取文本
///
/// 纯图片页面没有文本，用 `None` 表示，清洗时直接跳过
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPage(pub Option<String>);

impl RawPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    /// 返回页面文本，空白页返回 None
    pub fn text(&self) -> Option<&str> {
        self.0.as_deref().filter(|t| !t.trim().is_empty())
    }
}

impl From<&str> for RawPage {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RawPage {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<Option<String>> for RawPage {
    fn from(text: Option<String>) -> Self {
        Self(text)
    }
}
