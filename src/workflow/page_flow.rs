//! 页面处理流程 - 流程层
//!
//! 一个页面：规范化 → 渲染段落；结构异常的页面写入 warn.txt 后跳过

use anyhow::Result;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::document::Paragraph;
use crate::models::question::{QuestionRecord, RawQuestionPage};
use crate::services::question_normalizer::build_record;
use crate::services::question_renderer::render_question;
use crate::services::WarnWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::page_ctx::PageCtx;

/// 单个页面的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// 规范化成功
    Normalized {
        record: QuestionRecord,
        paragraphs: Vec<Paragraph>,
    },
    /// 结构异常，已跳过
    Skipped,
}

pub struct PageFlow {
    exam_id: String,
    warn_writer: WarnWriter,
    verbose_logging: bool,
}

impl PageFlow {
    pub fn new(exam_id: impl Into<String>, warn_writer: WarnWriter, verbose_logging: bool) -> Self {
        Self {
            exam_id: exam_id.into(),
            warn_writer,
            verbose_logging,
        }
    }

    pub async fn run(&self, page: &RawQuestionPage, ctx: &PageCtx) -> Result<PageOutcome> {
        if self.verbose_logging {
            info!("{} 题干: {}", ctx, truncate_text(&page.body, 80));
        }

        let record = match build_record(page, &self.exam_id) {
            Ok(record) => record,
            Err(e) => {
                let err = AppError::from(e);
                warn!("{} ⚠️ {}", ctx, err);
                self.warn_writer
                    .write(&ctx.source, &page.header, &err.to_string())
                    .await?;
                return Ok(PageOutcome::Skipped);
            }
        };

        if record.is_placeholder() {
            warn!("{} ⚠️ 未找到题目，写入占位记录", ctx);
        } else if self.verbose_logging {
            let letters: String = record.correct_letters().collect();
            info!("{} ✓ {} 个选项，正确答案: {}", ctx, record.options.len(), letters);
        }

        let paragraphs = render_question(page, &record, ctx.run_index);
        Ok(PageOutcome::Normalized { record, paragraphs })
    }
}
