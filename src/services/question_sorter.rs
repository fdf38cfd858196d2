//! 题目排序 - 业务能力层
//!
//! 按 "Question #: <n>" 标题把文档切成题块，按题号稳定排序后重新输出。

use crate::models::document::{Document, DocumentBlock, DocumentBuilder, Paragraph, QuestionNumber};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Question\s+#:\s+(\d+)").expect("header regex is valid"));

/// 排序结果
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    pub document: Document,
    /// 题块数量
    pub questions: usize,
    /// 第一个标题之前被丢弃的段落数
    pub discarded: usize,
}

/// 如果段落是题目标题，返回题号
///
/// # 参数
/// - `paragraph`: 待检查的段落，文本去掉首尾空白后匹配 "Question #: <n>"
///
/// # 返回
/// 题号；不是标题时返回 `None`。题号位数不受限制。
pub fn header_number(paragraph: &Paragraph) -> Option<QuestionNumber> {
    let caps = HEADER_RE.captures(paragraph.text.trim())?;
    QuestionNumber::from_digits(&caps[1])
}

/// 扫描段落，切分题块
///
/// 第一个标题之前的段落不属于任何题块，直接丢弃。
pub fn extract_blocks(paragraphs: &[Paragraph]) -> Vec<DocumentBlock> {
    let mut blocks: Vec<DocumentBlock> = Vec::new();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        match header_number(paragraph) {
            Some(number) => blocks.push(DocumentBlock::new(number, paragraph.clone())),
            None => match blocks.last_mut() {
                Some(current) => current.paragraphs.push(paragraph.clone()),
                None => debug!("丢弃标题前的段落 {}: {}", index, paragraph.text),
            },
        }
    }

    blocks
}

/// 按题号升序稳定排序，题号相同的块保持扫描顺序
pub fn sort_blocks(mut blocks: Vec<DocumentBlock>) -> Vec<DocumentBlock> {
    blocks.sort_by(|a, b| a.question_number.cmp(&b.question_number));
    blocks
}

/// 按顺序输出所有题块的段落，格式原样复制
pub fn emit_blocks(blocks: &[DocumentBlock]) -> Document {
    let mut builder = DocumentBuilder::new();
    for paragraph in blocks.iter().flat_map(|block| &block.paragraphs) {
        builder.push_copy(paragraph);
    }
    builder.finish()
}

/// 完整的排序流程：切分 → 排序 → 输出
///
/// # 参数
/// - `document`: 扁平的段落序列
///
/// # 返回
/// 排序后的文档以及题块数、被丢弃的前导段落数。内容不规范不会报错，
/// 没有任何标题时返回空文档。
pub fn sort_document(document: &Document) -> SortOutcome {
    let blocks = sort_blocks(extract_blocks(&document.paragraphs));
    let in_blocks: usize = blocks.iter().map(|b| b.paragraphs.len()).sum();
    let sorted = emit_blocks(&blocks);

    debug_assert_eq!(sorted.len(), in_blocks);

    SortOutcome {
        questions: blocks.len(),
        discarded: document.len() - in_blocks,
        document: sorted,
    }
}
