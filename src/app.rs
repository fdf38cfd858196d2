use crate::config::Config;
use crate::models::document::DocumentBuilder;
use crate::models::loaders::{load_all_page_sets, load_document, load_records, load_url_list};
use crate::services::{group_by_exam, retag_exam_id, sort_document, write_pretty_json, WarnWriter};
use crate::utils::logging::{init_log_file, log_stage_start, log_startup, print_final_stats};
use crate::workflow::{PageCtx, PageFlow, PageOutcome};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: PageFlow,
}

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub records: usize,
    pub failed: usize,
    pub sorted_questions: usize,
    pub retagged: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file).await?;
        log_startup(&config.exam_id);

        let flow = PageFlow::new(
            config.exam_id.clone(),
            WarnWriter::with_path(config.warn_file.clone()),
            config.verbose_logging,
        );

        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        let mut stats = RunStats::default();

        self.normalize_pages(&mut stats).await?;
        self.sort_questions(&mut stats).await?;
        self.group_links().await?;
        self.retag_records(&mut stats).await?;

        print_final_stats(
            stats.records,
            stats.failed,
            stats.sorted_questions,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    /// 规范化所有原始页面，写出题目记录和渲染后的文档
    async fn normalize_pages(&self, stats: &mut RunStats) -> Result<()> {
        log_stage_start("规范化题目");

        if !Path::new(&self.config.pages_folder).exists() {
            warn!("⚠️ 页面目录不存在，跳过: {}", self.config.pages_folder);
            return Ok(());
        }

        let sets = load_all_page_sets(&self.config.pages_folder).await?;
        if sets.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件");
            return Ok(());
        }

        let mut records = Vec::new();
        let mut builder = DocumentBuilder::new();
        let mut run_index = 0;

        for set in &sets {
            let source = set.file_path.clone().unwrap_or_default();
            for (idx, page) in set.pages.iter().enumerate() {
                run_index += 1;
                let ctx = PageCtx::new(source.clone(), idx + 1, run_index);

                match self.flow.run(page, &ctx).await? {
                    PageOutcome::Normalized { record, paragraphs } => {
                        records.push(record);
                        builder.extend(paragraphs);
                    }
                    PageOutcome::Skipped => stats.failed += 1,
                }
            }
        }

        stats.records = records.len();
        info!("✓ 规范化完成: {} 条记录, {} 个页面失败", records.len(), stats.failed);

        write_pretty_json(Path::new(&self.config.json_output), &records).await?;
        write_pretty_json(Path::new(&self.config.document_output), &builder.finish()).await?;

        Ok(())
    }

    /// 按题号排序文档
    async fn sort_questions(&self, stats: &mut RunStats) -> Result<()> {
        log_stage_start("题目排序");

        let source = Path::new(self.config.sort_source());
        if !source.exists() {
            warn!("⚠️ 待排序文档不存在，跳过: {}", source.display());
            return Ok(());
        }

        let document = load_document(source).await?;
        let outcome = sort_document(&document);

        if outcome.questions == 0 {
            warn!("⚠️ 文档中没有找到 \"Question #:\" 标题");
        }
        if outcome.discarded > 0 {
            info!("丢弃了第一个标题前的 {} 个段落", outcome.discarded);
        }

        write_pretty_json(Path::new(&self.config.sorted_output), &outcome.document).await?;
        info!("✓ 已按升序排列 {} 道题目", outcome.questions);

        stats.sorted_questions = outcome.questions;
        Ok(())
    }

    /// 按考试分组讨论链接
    async fn group_links(&self) -> Result<()> {
        let Some(links_file) = &self.config.links_file else {
            return Ok(());
        };
        log_stage_start("链接分组");

        let urls = load_url_list(Path::new(links_file)).await?;
        let groups = group_by_exam(urls.iter().map(String::as_str));

        for (exam, links) in &groups {
            info!("考试 {}: {} 个链接", exam, links.len());
        }

        write_pretty_json(Path::new(&self.config.links_output), &groups).await
    }

    /// 替换已有记录文件中的 examId
    async fn retag_records(&self, stats: &mut RunStats) -> Result<()> {
        let (Some(input), Some(from)) = (&self.config.retag_input, &self.config.retag_from) else {
            return Ok(());
        };
        log_stage_start("替换考试ID");

        let path = Path::new(input);
        let mut records = load_records(path).await?;
        let changed = retag_exam_id(&mut records, from, &self.config.exam_id);
        info!("✓ {} 条记录的考试ID已从 {} 改为 {}", changed, from, self.config.exam_id);

        write_pretty_json(path, &records).await?;
        stats.retagged = changed;
        Ok(())
    }
}
