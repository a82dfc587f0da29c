//! 字段抽取规则
//!
//! 每一类规则都是按优先级排列的静态列表，依次尝试，命中第一条即停止：
//!
//! ```text
//! meta      → 第一个括号 (...)
//! answer    → ANSWER_RULES   (Gabarito: Correto|Errado → Gabarito letra X)
//! split     → SPLIT_RULES    (Comentários: → Gabarito 前最后一个选项)
//! fallback  → FALLBACK_RULES (Questão correta/errada → 答案填充解析 → 按句切分)
//! ```
//!
//! 所有规则都是纯函数，不会失败；找不到时字段保持为空

use crate::models::exercise::Answer;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static META_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

static VERDICT_ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Gabarito:\s*(Correto|Errado)").unwrap());

static LETTER_ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Gabarito\s*(?:letra|Letra)\s*([A-E])").unwrap());

static COMMENT_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Coment[aá]rios?:").unwrap());

static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[A-E]\)").unwrap());

static VERDICT_PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Quest[aã]o\s+(correta|errada)").unwrap());

static SENTENCE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+").unwrap());

const ANSWER_KEY_ANCHOR: &str = "Gabarito";

/// 答案标记的匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerMatch {
    pub answer: Answer,
    /// 标记在正文中的字节范围
    pub span: Range<usize>,
}

/// 题干/解析切分结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub question: String,
    pub commentary: String,
}

/// 单道题在抽取过程中的中间状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// 去掉 meta 后的正文
    pub body: String,
    pub question: String,
    pub commentary: String,
    pub answer: Answer,
}

pub type AnswerRule = fn(&str) -> Option<AnswerMatch>;
pub type SplitRule = fn(&str, Option<&AnswerMatch>) -> Option<Split>;
pub type FallbackRule = fn(&mut Draft);

/// 答案规则，按顺序尝试
pub const ANSWER_RULES: &[(&str, AnswerRule)] = &[
    ("gabarito_verdict", verdict_answer),
    ("gabarito_letter", letter_answer),
];

/// 切分规则，按顺序尝试；最后一条总会成功
pub const SPLIT_RULES: &[(&str, SplitRule)] = &[
    ("comment_marker", split_at_comment_marker),
    ("last_option", split_after_last_option),
];

/// 兜底修正，全部按顺序执行
pub const FALLBACK_RULES: &[(&str, FallbackRule)] = &[
    ("verdict_phrase", verdict_phrase_fallback),
    ("answer_as_commentary", answer_as_commentary),
    ("sentence_split", sentence_split_fallback),
];

/// 抽取第一个括号内的内容作为 meta，并从正文中删除 `(meta)`
///
/// 删除的是由 meta 重新拼出的字面文本，括号内有首尾空白时不会命中
pub fn extract_meta(chunk: &str) -> (String, String) {
    match META_RE.captures(chunk) {
        Some(caps) => {
            let meta = caps[1].trim().to_string();
            let body = chunk.replace(&format!("({})", meta), "").trim().to_string();
            (meta, body)
        }
        None => (String::new(), chunk.trim().to_string()),
    }
}

/// 依次应用答案规则
pub fn extract_answer(body: &str) -> Option<AnswerMatch> {
    ANSWER_RULES.iter().find_map(|(_, rule)| rule(body))
}

/// 依次应用切分规则
pub fn split_question(body: &str, answer: Option<&AnswerMatch>) -> Split {
    SPLIT_RULES
        .iter()
        .find_map(|(_, rule)| rule(body, answer))
        .unwrap_or_default()
}

/// 依次应用全部兜底修正
pub fn apply_fallbacks(draft: &mut Draft) {
    for (_, rule) in FALLBACK_RULES {
        rule(draft);
    }
}

/// 题干中是否包含选择题选项（行首 `A)`–`E)`）
pub fn has_options(text: &str) -> bool {
    OPTION_RE.is_match(text)
}

// ========== 答案规则 ==========

/// `Gabarito: Correto` / `Gabarito: Errado`（忽略大小写）
pub fn verdict_answer(body: &str) -> Option<AnswerMatch> {
    let caps = VERDICT_ANSWER_RE.captures(body)?;
    let whole = caps.get(0)?;
    Some(AnswerMatch {
        answer: Answer::verdict(&caps[1])?,
        span: whole.range(),
    })
}

/// `Gabarito letra X` / `Gabarito Letra X`
pub fn letter_answer(body: &str) -> Option<AnswerMatch> {
    let caps = LETTER_ANSWER_RE.captures(body)?;
    let whole = caps.get(0)?;
    let letter = caps[1].chars().next()?;
    Some(AnswerMatch {
        answer: Answer::letter(letter)?,
        span: whole.range(),
    })
}

// ========== 切分规则 ==========

/// 在 `Comentário(s):` 处切分
///
/// 若答案标记位于解析中，只去掉标记本身，前后两段解析都保留
pub fn split_at_comment_marker(body: &str, answer: Option<&AnswerMatch>) -> Option<Split> {
    let marker = COMMENT_MARKER_RE.find(body)?;
    let rest = &body[marker.end()..];

    let commentary = match answer.filter(|a| a.span.start >= marker.end()) {
        Some(a) => {
            let start = a.span.start - marker.end();
            let end = a.span.end - marker.end();
            [rest[..start].trim(), rest[end..].trim()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        }
        None => rest.trim().to_string(),
    };

    Some(Split {
        question: body[..marker.start()].trim().to_string(),
        commentary,
    })
}

/// 在 `Gabarito` 之前的区域里，以最后一个选项标记为界切分
pub fn split_after_last_option(body: &str, _answer: Option<&AnswerMatch>) -> Option<Split> {
    let region = match body.find(ANSWER_KEY_ANCHOR) {
        Some(pos) => body[..pos].trim(),
        None => body,
    };

    let split = match OPTION_RE.find_iter(region).last() {
        Some(last) => Split {
            question: region[..last.end()].trim().to_string(),
            commentary: region[last.end()..].trim().to_string(),
        },
        None => Split {
            question: region.to_string(),
            commentary: String::new(),
        },
    };
    Some(split)
}

// ========== 兜底修正 ==========

/// 没有答案时识别 `Questão correta/errada`，首行为题干，其余为解析
pub fn verdict_phrase_fallback(draft: &mut Draft) {
    if !draft.answer.is_empty() {
        return;
    }
    let Some(caps) = VERDICT_PHRASE_RE.captures(&draft.body) else {
        return;
    };

    draft.answer = if caps[1].to_lowercase().contains("corret") {
        Answer::Correto
    } else {
        Answer::Errado
    };

    let lines: Vec<&str> = draft.body.split('\n').collect();
    if lines.len() > 1 {
        draft.question = lines[0].trim().to_string();
        draft.commentary = lines[1..].join("\n").trim().to_string();
    }
}

/// 有答案但没有解析时，用答案作为解析
pub fn answer_as_commentary(draft: &mut Draft) {
    if !draft.answer.is_empty() && draft.commentary.trim().is_empty() {
        draft.commentary = draft.answer.to_string();
    }
}

/// 没有解析也没有选项时，第一句作为题干，其余句子作为解析
pub fn sentence_split_fallback(draft: &mut Draft) {
    if !draft.commentary.is_empty() || has_options(&draft.question) {
        return;
    }

    let sentences = split_sentences(&draft.question);
    if sentences.len() > 1 {
        let question = sentences[0].trim().to_string();
        let commentary = sentences[1..].join(" ").trim().to_string();
        draft.question = question;
        draft.commentary = commentary;
    }
}

/// 在“句号 + 空白”处切分，句号保留在前一句末尾
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK_RE.find_iter(text) {
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}
