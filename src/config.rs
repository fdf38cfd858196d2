use crate::error::{AppResult, ConfigError};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 本次运行的考试 ID，写入每条记录的 examId
    pub exam_id: String,
    /// 原始页面 TOML 文件存放目录
    pub pages_folder: String,
    /// 题目记录 JSON 输出路径
    pub json_output: String,
    /// 渲染后的文档输出路径
    pub document_output: String,
    /// 待排序的文档，未设置时使用本次渲染的文档
    pub sort_input: Option<String>,
    /// 排序后的文档输出路径
    pub sorted_output: String,
    /// 讨论链接列表文件，每行一个
    pub links_file: Option<String>,
    /// 链接分组输出路径
    pub links_output: String,
    /// 需要替换 examId 的记录文件
    pub retag_input: Option<String>,
    /// 被替换的旧 examId
    pub retag_from: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件
    pub output_log_file: String,
    /// 警告文件
    pub warn_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_id: "professional-machine-learning-engineer".to_string(),
            pages_folder: "pages".to_string(),
            json_output: "output/questions.json".to_string(),
            document_output: "output/questions_document.json".to_string(),
            sort_input: None,
            sorted_output: "output/sorted_questions.json".to_string(),
            links_file: None,
            links_output: "output/links_by_exam.json".to_string(),
            retag_input: None,
            retag_from: None,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();

        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "VERBOSE_LOGGING".to_string(),
                value,
                expected_type: "bool".to_string(),
            })?,
            None => default.verbose_logging,
        };

        let exam_id = lookup("EXAM_ID").unwrap_or(default.exam_id);
        if exam_id.trim().is_empty() {
            return Err(ConfigError::EmptyExamId.into());
        }

        Ok(Self {
            exam_id,
            pages_folder: lookup("PAGES_FOLDER").unwrap_or(default.pages_folder),
            json_output: lookup("JSON_OUTPUT").unwrap_or(default.json_output),
            document_output: lookup("DOCUMENT_OUTPUT").unwrap_or(default.document_output),
            sort_input: lookup("SORT_INPUT").or(default.sort_input),
            sorted_output: lookup("SORTED_OUTPUT").unwrap_or(default.sorted_output),
            links_file: lookup("LINKS_FILE").or(default.links_file),
            links_output: lookup("LINKS_OUTPUT").unwrap_or(default.links_output),
            retag_input: lookup("RETAG_INPUT").or(default.retag_input),
            retag_from: lookup("RETAG_FROM").or(default.retag_from),
            verbose_logging,
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: lookup("WARN_FILE").unwrap_or(default.warn_file),
        })
    }

    /// 实际排序的文档路径
    pub fn sort_source(&self) -> &str {
        self.sort_input.as_deref().unwrap_or(&self.document_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.exam_id, "professional-machine-learning-engineer");
        assert_eq!(config.sort_source(), "output/questions_document.json");
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXAM_ID", "professional-cloud-database-engineer"),
            ("SORT_INPUT", "old.json"),
            ("VERBOSE_LOGGING", "true"),
        ]))
        .unwrap();
        assert_eq!(config.exam_id, "professional-cloud-database-engineer");
        assert_eq!(config.sort_source(), "old.json");
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[("VERBOSE_LOGGING", "yes please")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::EnvVarParseFailed { .. })));
        assert!(err.to_string().contains("VERBOSE_LOGGING"));

        let err = Config::from_lookup(lookup_from(&[("EXAM_ID", "  ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::EmptyExamId)));
    }
}
