use crate::error::{AppError, FileError};
use crate::models::question::RawPageSet;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载一组原始页面
pub async fn load_page_set(toml_file_path: &Path) -> Result<RawPageSet> {
    let path_str = toml_file_path.to_string_lossy().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(path_str.clone(), e))?;

    let set: RawPageSet =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(path_str.clone(), e))?;

    Ok(set.with_file_path(path_str))
}

/// 从文件夹中加载所有 TOML 文件，按文件名排序
///
/// 无法解析的文件记录警告后跳过。
pub async fn load_all_page_sets(folder_path: &str) -> Result<Vec<RawPageSet>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::from(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut sets = Vec::with_capacity(toml_files.len());
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_page_set(&path).await {
            Ok(set) => {
                tracing::info!("成功加载 {} 个页面", set.pages.len());
                sets.push(set);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(sets)
}
