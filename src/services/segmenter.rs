//! 题目切分服务
//!
//! 按行首题号 `N.` 把清洗后的文本切成若干块，再对每块应用 [`rules`](super::rules) 抽取字段

use crate::config::SegmenterConfig;
use crate::models::exercise::{Answer, ExerciseRecord};
use crate::services::rules::{self, Draft};
use crate::utils::logging::truncate_text;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static NUMERAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*([0-9]+)\.\s*").unwrap());

/// 一道题对应的原始文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub number: u64,
    pub text: &'a str,
}

/// 题目切分器
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// 把清洗后的文本切分为题目记录
    ///
    /// 每个块都会产生一条记录（字段可能为空），过滤由调用方负责
    pub fn segment(&self, text: &str) -> Vec<ExerciseRecord> {
        // 文本开头视为行首，保证首行的 "1." 也能被识别
        let text = format!("\n{}", text);
        let limit = self.config.record_limit.unwrap_or(usize::MAX);

        split_chunks(&text)
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, chunk)| {
                let record = self.extract(i + 1, &chunk);
                debug!(
                    "{} #{} [{}] {}",
                    record.sequence_id,
                    record.number,
                    record.answer,
                    truncate_text(&record.question, 60)
                );
                record
            })
            .collect()
    }

    /// 对单个文本块抽取字段
    pub fn extract(&self, counter: usize, chunk: &Chunk<'_>) -> ExerciseRecord {
        let (meta, body) = rules::extract_meta(chunk.text);

        let answer_match = rules::extract_answer(&body);
        let split = rules::split_question(&body, answer_match.as_ref());

        let mut draft = Draft {
            answer: answer_match.map(|m| m.answer).unwrap_or(Answer::Empty),
            question: split.question,
            commentary: split.commentary,
            body,
        };
        rules::apply_fallbacks(&mut draft);

        ExerciseRecord {
            sequence_id: self.sequence_id(counter),
            number: chunk.number,
            meta,
            question: draft.question.trim().to_string(),
            commentary: draft.commentary.trim().to_string(),
            answer: draft.answer,
        }
    }

    fn sequence_id(&self, counter: usize) -> String {
        format!("{}-{:03}", self.config.id_prefix, counter)
    }
}

/// 按题号标记切块，第一个标记之前的文本丢弃
pub fn split_chunks(text: &str) -> Vec<Chunk<'_>> {
    let markers: Vec<(u64, usize, usize)> = NUMERAL_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let digits = &caps[1];
            let number: u64 = digits.parse().unwrap_or_else(|_| {
                warn!("题号无法解析: {}", truncate_text(digits, 20));
                0
            });
            Some((number, whole.start(), whole.end()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(number, _, content_start))| {
            let content_end = markers.get(i + 1).map_or(text.len(), |next| next.1);
            Chunk {
                number,
                text: &text[content_start..content_end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::default()
    }

    #[test]
    fn test_split_chunks_discards_preamble() {
        let chunks = split_chunks("Introdução\n1. Primeira\n 7.Segunda\nlinha");
        assert_eq!(
            chunks,
            vec![
                Chunk { number: 1, text: "Primeira" },
                Chunk { number: 7, text: "Segunda\nlinha" },
            ]
        );
    }

    #[test]
    fn test_long_numeral_keeps_its_value() {
        let records = segmenter().segment("\n99999999999. Texto. Mais.");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 99_999_999_999);
        assert_eq!(records[0].question, "Texto.");
    }

    #[test]
    fn test_only_ascii_digits_mark_exercises() {
        assert!(split_chunks("\n١٢. Texto\n３. Outro").is_empty());

        let chunks = split_chunks("\n١٢. Texto\n5. Outro");
        assert_eq!(chunks, vec![Chunk { number: 5, text: "Outro" }]);
    }

    #[test]
    fn test_no_markers_no_records() {
        assert!(segmenter().segment("texto sem numeração").is_empty());
        assert!(segmenter().segment("").is_empty());
    }

    #[test]
    fn test_first_line_numeral_is_recognized() {
        let records = segmenter().segment("1. Frase um. Frase dois.");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 1);
    }

    #[test]
    fn test_primary_split_scenario() {
        let text = "1. O que é...? (FGV/2020) Comentários: Isso está errado. Gabarito: Errado";
        let record = &segmenter().segment(text)[0];

        assert_eq!(record.sequence_id, "15-ort-001");
        assert_eq!(record.meta, "FGV/2020");
        assert_eq!(record.question, "O que é...?");
        assert_eq!(record.commentary, "Isso está errado.");
        assert_eq!(record.answer, Answer::Errado);
    }

    #[test]
    fn test_letter_answer_scenario() {
        let text = "\n2. Pergunta...\nA) x\nB)\nGabarito letra B";
        let record = &segmenter().segment(text)[0];

        assert_eq!(record.number, 2);
        assert!(record.question.ends_with("B)"));
        assert_eq!(record.commentary, "B");
        assert_eq!(record.answer, Answer::Letter('B'));
    }

    #[test]
    fn test_letter_answer_keeps_text_after_last_option() {
        let text = "\n2. Pergunta...\nA) x\nB) y\nGabarito letra B";
        let record = &segmenter().segment(text)[0];

        assert_eq!(record.question, "Pergunta...\nA) x\nB)");
        assert_eq!(record.commentary, "y");
        assert_eq!(record.answer, Answer::Letter('B'));
    }

    #[test]
    fn test_sentence_split_scenario() {
        let record = &segmenter().segment("\n3. Frase um. Frase dois.")[0];

        assert_eq!(record.question, "Frase um.");
        assert_eq!(record.commentary, "Frase dois.");
        assert_eq!(record.answer, Answer::Empty);
        assert!(record.meta.is_empty());
    }

    #[test]
    fn test_verdict_phrase_fallback_through_segmenter() {
        let text = "\n4. A crase é obrigatória aqui\nQuestão correta, pois antecede palavra feminina.";
        let record = &segmenter().segment(text)[0];

        assert_eq!(record.answer, Answer::Correto);
        assert_eq!(record.question, "A crase é obrigatória aqui");
        assert_eq!(record.commentary, "Questão correta, pois antecede palavra feminina.");
    }

    #[test]
    fn test_ids_are_contiguous_despite_number_gaps() {
        let text = "\n10. a\n3. b\n99. c";
        let records = segmenter().segment(text);
        let ids: Vec<&str> = records.iter().map(|r| r.sequence_id.as_str()).collect();
        let numbers: Vec<u64> = records.iter().map(|r| r.number).collect();

        assert_eq!(ids, vec!["15-ort-001", "15-ort-002", "15-ort-003"]);
        assert_eq!(numbers, vec![10, 3, 99]);
    }

    #[test]
    fn test_record_limit() {
        let config = SegmenterConfig {
            id_prefix: "aula".to_string(),
            record_limit: Some(2),
        };
        let records = Segmenter::new(config).segment("\n1. a\n2. b\n3. c");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sequence_id, "aula-002");
    }

    #[test]
    fn test_degenerate_chunk_still_yields_record() {
        let records = segmenter().segment("\n1. (x)\n2. Texto.");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].meta, "x");
        assert!(records[0].question.is_empty());
        assert!(records[0].is_degenerate());
    }
}
