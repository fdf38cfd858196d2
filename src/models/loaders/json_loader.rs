use crate::error::AppError;
use crate::models::document::Document;
use crate::models::question::QuestionRecord;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.to_string_lossy().to_string();

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path_str.clone(), e))?;

    Ok(serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(path_str, e))?)
}

/// 加载 JSON 格式的文档
pub async fn load_document(path: &Path) -> Result<Document> {
    load_json(path).await
}

/// 加载题目记录 JSON 数组
pub async fn load_records(path: &Path) -> Result<Vec<QuestionRecord>> {
    load_json(path).await
}

/// 加载链接列表，每行一个，忽略空行和 `#` 开头的注释行
pub async fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.to_string_lossy(), e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
