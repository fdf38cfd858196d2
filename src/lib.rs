//! # Exam Question Kit
//!
//! 考试题目抓取结果的规范化与排序工具
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - 原始页面、题目记录、文档段落，以及从磁盘加载它们的 loader
//!
//! ### ② 业务能力层（Services）
//! - `QuestionNormalizer` - 选项解析、答案解析、构建题目记录
//! - `QuestionSorter` - 按 "Question #: <n>" 切分题块并稳定排序
//! - `QuestionRenderer` - 把题目渲染成段落
//! - `ExamLinks` - 讨论链接解析与分组
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `PageFlow` - 一个页面的完整处理流程（规范化 → 渲染 → 兜底）
//!
//! ### ④ 编排层（App）
//! - `App` - 加载配置、依次运行各阶段、输出统计
//!
//! 业务能力层都是纯函数，不做 I/O；文件读写只发生在 loader、writer 和 App 中。

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, RunStats};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Document, DocumentBlock, NormalizedOption, Paragraph, QuestionRecord, RawQuestionPage};
pub use workflow::{PageCtx, PageFlow, PageOutcome};
