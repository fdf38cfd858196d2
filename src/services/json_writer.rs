//! JSON 输出服务 - 业务能力层

use crate::error::AppError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 以缩进格式写出 JSON，必要时创建父目录
pub async fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("无法创建目录: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path.to_string_lossy(), e))?;

    info!("💾 已写入: {}", path.display());
    Ok(())
}
