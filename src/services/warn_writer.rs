//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，记录无法规范化的页面

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 警告写入服务
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.warn_file_path
    }

    /// 追加一行警告：来源文件 | 页面标题 | 原因
    ///
    /// # 参数
    /// - `source`: 页面所在的 TOML 文件
    /// - `header`: 页面标题，换行会被替换为空格
    /// - `reason`: 跳过原因
    ///
    /// # 返回
    /// 警告文件无法打开或写入时返回错误
    pub async fn write(&self, source: &str, header: &str, reason: &str) -> Result<()> {
        debug!("写入警告: {} | {} | {}", source, header, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await
            .with_context(|| format!("无法打开警告文件: {}", self.warn_file_path))?;

        let warn_msg = format!("{} | {} | {}\n", source, header.replace('\n', " "), reason);
        file.write_all(warn_msg.as_bytes()).await?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
