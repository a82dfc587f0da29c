use serde::{Deserialize, Serialize};

/// 题目答案
///
/// 序列化为字符串：`""`、`"Correto"`、`"Errado"` 或单个字母 `A`–`E`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Answer {
    /// 未找到答案
    #[default]
    Empty,
    /// 判断题：正确
    Correto,
    /// 判断题：错误
    Errado,
    /// 选择题字母（大写 A–E）
    Letter(char),
}

impl Answer {
    /// 从选择题字母构造答案，非 A–E 返回 None
    pub fn letter(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        matches!(upper, 'A'..='E').then_some(Answer::Letter(upper))
    }

    /// 从 "correto"/"errado"（忽略大小写）构造判断题答案
    pub fn verdict(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("correto") {
            Some(Answer::Correto)
        } else if word.eq_ignore_ascii_case("errado") {
            Some(Answer::Errado)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Answer::Empty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Empty => "",
            Answer::Correto => "Correto",
            Answer::Errado => "Errado",
            Answer::Letter('A') => "A",
            Answer::Letter('B') => "B",
            Answer::Letter('C') => "C",
            Answer::Letter('D') => "D",
            Answer::Letter('E') => "E",
            // 非 A–E 的字母无法由 `letter`/反序列化产生，按无答案输出
            Answer::Letter(_) => "",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Answer> for String {
    fn from(answer: Answer) -> Self {
        answer.as_str().to_string()
    }
}

impl TryFrom<String> for Answer {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Answer::Empty);
        }
        if let Some(answer) = Answer::verdict(&value) {
            return Ok(answer);
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => {
                Answer::letter(c).ok_or_else(|| format!("无效的答案: {}", value))
            }
            _ => Err(format!("无效的答案: {}", value)),
        }
    }
}

/// 一道抽取出的题目
///
/// 由 Segmenter 一次性生成，之后只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// 稳定编号 `<prefix>-NNN`，按文档顺序从 1 开始连续递增
    #[serde(rename = "id")]
    pub sequence_id: String,
    /// 原文中的题号（不一定连续）
    pub number: u64,
    /// 第一个括号内的注释（考试机构/年份）
    pub meta: String,
    pub question: String,
    pub commentary: String,
    pub answer: Answer,
}

impl ExerciseRecord {
    /// 题干或解析为空的记录对导出没有意义
    pub fn is_degenerate(&self) -> bool {
        self.question.trim().is_empty() || self.commentary.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_letter_uppercases() {
        assert_eq!(Answer::letter('c'), Some(Answer::Letter('C')));
        assert_eq!(Answer::letter('F'), None);
    }

    #[test]
    fn test_out_of_range_letter_renders_empty() {
        assert_eq!(Answer::Letter('E').as_str(), "E");
        assert_eq!(Answer::Letter('Z').as_str(), "");
        assert_eq!(Answer::Letter('e').as_str(), "");
        assert_eq!(String::from(Answer::Letter('Z')), "");
        assert_eq!(serde_json::to_value(Answer::Letter('D')).unwrap(), "D");
    }

    #[test]
    fn test_answer_verdict_ignores_case() {
        assert_eq!(Answer::verdict("CORRETO"), Some(Answer::Correto));
        assert_eq!(Answer::verdict("errado"), Some(Answer::Errado));
        assert_eq!(Answer::verdict("certo"), None);
    }

    #[test]
    fn test_record_serializes_with_interchange_keys() {
        let record = ExerciseRecord {
            sequence_id: "15-ort-001".to_string(),
            number: 7,
            meta: "FGV/2020".to_string(),
            question: "Q".to_string(),
            commentary: "C".to_string(),
            answer: Answer::Letter('B'),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "15-ort-001");
        assert_eq!(value["number"], 7);
        assert_eq!(value["answer"], "B");

        let back: ExerciseRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_invalid_answer_is_rejected() {
        assert!(Answer::try_from("Talvez".to_string()).is_err());
        assert!(Answer::try_from("b".to_string()).is_err());
        assert_eq!(Answer::try_from(String::new()).unwrap(), Answer::Empty);
    }

    #[test]
    fn test_degenerate_record() {
        let mut record = ExerciseRecord {
            sequence_id: "x-001".to_string(),
            number: 1,
            meta: String::new(),
            question: "Q".to_string(),
            commentary: "  ".to_string(),
            answer: Answer::Empty,
        };
        assert!(record.is_degenerate());
        record.commentary = "C".to_string();
        assert!(!record.is_degenerate());
    }
}
