//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use anyhow::Result;
use tokio::fs;
use tracing::info;

/// 初始化运行日志文件，写入带时间戳的表头
///
/// # 参数
/// - `log_file_path`: 运行日志文件路径，已有内容会被清空
///
/// # 返回
/// 写入失败时返回错误
pub async fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题目处理日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header).await?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(exam_id: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目规范化与排序");
    info!("📘 考试ID: {}", exam_id);
    info!("{}", "=".repeat(60));
}

/// 记录阶段开始
///
/// # 参数
/// - `name`: 阶段名称，例如 "题目排序"
pub fn log_stage_start(name: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📦 {}", name);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `records`: 成功生成的题目记录数
/// - `failed`: 结构异常被跳过的页面数
/// - `sorted_questions`: 排序后的题块数
/// - `log_file_path`: 运行日志文件路径，仅用于提示
pub fn print_final_stats(records: usize, failed: usize, sorted_questions: usize, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目记录: {}", records);
    info!("❌ 失败页面: {}", failed);
    info!("🔢 排序题块: {}", sorted_questions);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
