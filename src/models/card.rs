use serde::{Deserialize, Serialize};

/// 导出用的卡片
///
/// 文本字段已经过段落格式化，`guid` 由题干+解析的内容哈希生成
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardNote {
    pub guid: String,
    pub question: String,
    pub commentary: String,
    pub answer: String,
    pub meta: String,
    pub id: String,
    pub number: String,
}

impl CardNote {
    /// 按卡片模板的字段顺序返回
    pub fn fields(&self) -> [&str; 6] {
        [
            self.question.as_str(),
            self.commentary.as_str(),
            self.answer.as_str(),
            self.meta.as_str(),
            self.id.as_str(),
            self.number.as_str(),
        ]
    }
}
