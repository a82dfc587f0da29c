//! 卡片导出服务
//!
//! 过滤无效记录、生成稳定 guid、格式化字段并写出 JSON / TSV

use crate::config::ExportConfig;
use crate::error::{AppError, AppResult};
use crate::models::card::CardNote;
use crate::models::exercise::ExerciseRecord;
use crate::services::paragraph::format_paragraphs;
use md5::{Digest, Md5};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 导出结果
#[derive(Debug, Clone, Default)]
pub struct ExportOutcome {
    pub cards: Vec<CardNote>,
    /// 因题干或解析为空而跳过的记录数
    pub skipped: usize,
}

/// 由题干和解析生成稳定的数字 guid
///
/// 取 MD5 十六进制摘要的前 8 位作为无符号整数
pub fn stable_guid(question: &str, commentary: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(question.as_bytes());
    hasher.update(commentary.as_bytes());
    let digest = hasher.finalize();
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    prefix.to_string()
}

/// 把题目记录转换为卡片，跳过题干或解析为空的记录
pub fn to_cards(records: &[ExerciseRecord], config: &ExportConfig) -> ExportOutcome {
    let mut outcome = ExportOutcome::default();
    let br = config.line_break.as_str();

    for record in records {
        let question = record.question.trim();
        let commentary = record.commentary.trim();
        if question.is_empty() || commentary.is_empty() {
            debug!("跳过空卡片: {}", record.sequence_id);
            outcome.skipped += 1;
            continue;
        }

        outcome.cards.push(CardNote {
            guid: stable_guid(question, commentary),
            question: format_paragraphs(question, br),
            commentary: format_paragraphs(commentary, br),
            answer: format_paragraphs(record.answer.as_str(), br),
            meta: format_paragraphs(&record.meta, br),
            id: record.sequence_id.trim().to_string(),
            number: record.number.to_string(),
        });
    }

    outcome
}

/// 写出题目记录 JSON（交换格式）
pub fn write_records_json(path: &Path, records: &[ExerciseRecord]) -> AppResult<()> {
    write_json(path, records)
}

/// 写出卡片 JSON
pub fn write_cards_json(path: &Path, cards: &[CardNote]) -> AppResult<()> {
    write_json(path, cards)
}

/// 写出制表符分隔的卡片文件，可直接作为文本导入
pub fn write_cards_tsv(path: &Path, cards: &[CardNote]) -> AppResult<()> {
    fs::write(path, render_tsv(cards)).map_err(|e| AppError::file(path.display().to_string(), e))
}

/// 渲染 TSV 内容
pub fn render_tsv(cards: &[CardNote]) -> String {
    let mut out = String::from("#separator:tab\n#html:true\n#guid column:1\n");
    for card in cards {
        let mut row = vec![tsv_field(&card.guid)];
        row.extend(card.fields().iter().map(|f| tsv_field(f)));
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| AppError::file(path.display().to_string(), e))
}
