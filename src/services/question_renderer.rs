//! 题目渲染 - 业务能力层
//!
//! 把一道题渲染成文档段落，输出结构可直接被排序服务识别

use crate::models::document::{Paragraph, Run};
use crate::models::question::{QuestionRecord, RawQuestionPage};
use crate::services::question_normalizer::{parse_option, AnswerKey};
use regex::Regex;
use std::sync::LazyLock;

pub const STYLE_HEADING: &str = "Heading 2";
pub const STYLE_NORMAL: &str = "Normal";
pub const STYLE_BULLET: &str = "List Bullet";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number regex is valid"));

/// 标准化标题为 "Question #: <n>"
///
/// 页面头部可能是 "Question #: 12 Topic #: 1" 或只有数字，取第一串数字；
/// 找不到数字时使用 `fallback`。
pub fn header_line(header: &str, fallback: usize) -> String {
    let first_line = header.lines().next().unwrap_or_default();
    match NUMBER_RE.find(first_line) {
        Some(m) => format!("Question #: {}", m.as_str()),
        None => format!("Question #: {}", fallback),
    }
}

/// 渲染一道题
///
/// 选项保留页面原文，正确选项的 run 加粗；非正确选项的 bold 保持未设置。
pub fn render_question(page: &RawQuestionPage, record: &QuestionRecord, fallback_number: usize) -> Vec<Paragraph> {
    let mut paragraphs = vec![Paragraph::styled(header_line(&page.header, fallback_number), STYLE_HEADING)];

    if record.is_placeholder() {
        paragraphs.push(Paragraph::styled(record.text.clone(), STYLE_NORMAL));
        return paragraphs;
    }

    let key = AnswerKey::parse(page.answer_text());

    paragraphs.push(Paragraph::styled(format!("Question: {}", record.text), STYLE_NORMAL));
    paragraphs.push(Paragraph::styled("Options:", STYLE_NORMAL));

    for raw in page.options.iter().flatten() {
        let mut paragraph = Paragraph::styled(raw.clone(), STYLE_BULLET);
        if matches!(parse_option(raw), Some((letter, _)) if key.contains(letter)) {
            paragraph.runs = vec![Run {
                bold: Some(true),
                ..Run::new(raw.clone())
            }];
        }
        paragraphs.push(paragraph);
    }

    paragraphs.push(Paragraph::styled(format!("Answer: {}", key), STYLE_NORMAL));
    paragraphs
}
