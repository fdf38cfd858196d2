use serde::{Deserialize, Serialize};

/// 找不到题目时写入的占位题干
pub const QUESTION_NOT_FOUND: &str = "Question not found.";

/// 答案区域缺失时的哨兵文本
pub const ANSWER_NOT_FOUND: &str = "Not found";

/// 一个页面抓取下来的原始题目片段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestionPage {
    /// 页面头部，例如 "Question #: 12"
    pub header: String,
    #[serde(default)]
    pub body: String,
    /// 选项原文，形如 "A. xxx"；缺失视为页面结构异常
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// 答案原文，例如 "Correct Answer: BD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// 是否找到了题目页面
    #[serde(default = "default_found")]
    pub found: bool,
}

fn default_found() -> bool {
    true
}

impl RawQuestionPage {
    /// 答案原文，缺失时返回 "Not found"
    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or(ANSWER_NOT_FOUND)
    }
}

/// 一组原始页面（一个 TOML 文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPageSet {
    #[serde(default)]
    pub pages: Vec<RawQuestionPage>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl RawPageSet {
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

/// 带正确性标记的选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedOption {
    pub id: char,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    pub text: String,
}

/// 规范化后的题目记录，序列化为 JSON 数组中的一个元素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    #[serde(rename = "examId")]
    pub exam_id: String,
    /// 保留字段，始终为空
    pub id: String,
    pub options: Vec<NormalizedOption>,
    /// 保留字段，始终为空
    pub explanation: String,
}

impl QuestionRecord {
    pub fn new(text: impl Into<String>, exam_id: impl Into<String>, options: Vec<NormalizedOption>) -> Self {
        Self {
            text: text.into(),
            exam_id: exam_id.into(),
            id: String::new(),
            options,
            explanation: String::new(),
        }
    }

    /// 未找到题目时的占位记录
    pub fn not_found(exam_id: impl Into<String>) -> Self {
        Self::new(QUESTION_NOT_FOUND, exam_id, Vec::new())
    }

    pub fn is_placeholder(&self) -> bool {
        self.options.is_empty() && self.text == QUESTION_NOT_FOUND
    }

    /// 正确选项的字母
    pub fn correct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.options.iter().filter(|o| o.is_correct).map(|o| o.id)
    }
}
