//! 题目规范化 - 业务能力层
//!
//! 把页面上抓到的选项原文和答案原文转换成带正确性标记的选项列表。
//! 内容不规范时降级（跳过选项、答案视为空），只有结构缺失才返回错误。

use crate::error::QuestionError;
use crate::models::question::{NormalizedOption, QuestionRecord, RawQuestionPage};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// 解析后的正确答案字母集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    letters: BTreeSet<char>,
}

impl AnswerKey {
    /// 解析答案原文
    ///
    /// 取最后一个 `:` 之后的部分（没有冒号则取全文），转大写后收集所有
    /// ASCII 大写字母。`Not found` 哨兵和空文本得到空集合。
    pub fn parse(answer_text: &str) -> Self {
        let tail = answer_text
            .rsplit_once(':')
            .map_or(answer_text, |(_, tail)| tail)
            .trim();

        // "Not found." 之类带标点的写法也算未找到
        let sentinel = tail.trim_end_matches(|c: char| c.is_ascii_punctuation()).trim_end();
        if sentinel.is_empty() || sentinel.eq_ignore_ascii_case(crate::models::question::ANSWER_NOT_FOUND) {
            return Self::default();
        }

        Self {
            letters: tail
                .to_uppercase()
                .chars()
                .filter(|c| c.is_ascii_uppercase())
                .collect(),
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for letter in &self.letters {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", letter)?;
            first = false;
        }
        Ok(())
    }
}

/// 解析选项前缀
///
/// 规则只有一条：首字符必须是 ASCII 大写字母，后面紧跟 `.` 或空白；
/// 正文是去掉可选的 `.` 之后再去掉首尾空白的剩余部分。
/// 不满足规则返回 `None`。
pub fn parse_option(raw: &str) -> Option<(char, &str)> {
    let raw = raw.trim_start();
    let letter = raw.chars().next()?;
    if !letter.is_ascii_uppercase() {
        return None;
    }

    let rest = &raw[letter.len_utf8()..];
    let rest = match rest.strip_prefix('.') {
        Some(after_dot) => after_dot,
        None if rest.starts_with(char::is_whitespace) => rest,
        None => return None,
    };

    Some((letter, rest.trim()))
}

/// 规范化选项列表，输出顺序与输入一致，无法解析的选项被跳过
pub fn normalize_options<S: AsRef<str>>(options: &[S], answer_text: &str) -> Vec<NormalizedOption> {
    let key = AnswerKey::parse(answer_text);
    normalize_with_key(options, &key)
}

/// 使用已解析的答案集合规范化选项
pub fn normalize_with_key<S: AsRef<str>>(options: &[S], key: &AnswerKey) -> Vec<NormalizedOption> {
    options
        .iter()
        .filter_map(|raw| parse_option(raw.as_ref()))
        .map(|(letter, text)| NormalizedOption {
            id: letter,
            is_correct: key.contains(letter),
            text: text.to_string(),
        })
        .collect()
}

/// 从原始页面构建题目记录
///
/// - 未找到的页面返回占位记录
/// - 缺少选项列表返回 `QuestionError::MissingOptions`
pub fn build_record(page: &RawQuestionPage, exam_id: &str) -> Result<QuestionRecord, QuestionError> {
    if !page.found {
        debug!("页面未找到，写入占位记录: {}", page.header);
        return Ok(QuestionRecord::not_found(exam_id));
    }

    let options = page
        .options
        .as_deref()
        .ok_or_else(|| QuestionError::MissingOptions {
            header: page.header.clone(),
        })?;

    let normalized = normalize_options(options, page.answer_text());

    if options.is_empty() {
        warn!("⚠️ {} 没有选项，页面结构可能已变化", page.header);
    } else if normalized.len() < options.len() {
        warn!(
            "⚠️ {} 有 {} 个选项无法解析，已跳过",
            page.header,
            options.len() - normalized.len()
        );
    }

    Ok(QuestionRecord::new(page.body.trim(), exam_id, normalized))
}

/// 批量替换考试 ID，返回被修改的记录数
pub fn retag_exam_id(records: &mut [QuestionRecord], from: &str, to: &str) -> usize {
    let mut changed = 0;
    for record in records.iter_mut().filter(|r| r.exam_id == from) {
        record.exam_id = to.to_string();
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(options: Option<Vec<&str>>, answer: Option<&str>) -> RawQuestionPage {
        RawQuestionPage {
            header: "Question #: 1".to_string(),
            body: "  What should you do?  ".to_string(),
            options: options.map(|o| o.into_iter().map(String::from).collect()),
            answer: answer.map(String::from),
            found: true,
        }
    }

    #[test]
    fn test_parse_option_with_period() {
        assert_eq!(parse_option("A. Use public IP"), Some(('A', "Use public IP")));
        assert_eq!(parse_option("E. text. with. dots"), Some(('E', "text. with. dots")));
    }

    #[test]
    fn test_parse_option_with_space_only() {
        assert_eq!(parse_option("B Use private IP"), Some(('B', "Use private IP")));
        assert_eq!(parse_option("C.Cloud SQL"), Some(('C', "Cloud SQL")));
    }

    #[test]
    fn test_parse_option_rejects_malformed() {
        assert_eq!(parse_option(""), None);
        assert_eq!(parse_option("a. lowercase"), None);
        assert_eq!(parse_option("1. numbered"), None);
        assert_eq!(parse_option("AB text"), None);
        assert_eq!(parse_option("A"), None);
    }

    #[test]
    fn test_answer_key_with_label() {
        let key = AnswerKey::parse("Correct Answer: BD");
        assert_eq!(key.letters().collect::<Vec<_>>(), vec!['B', 'D']);

        let key = AnswerKey::parse("  correct answer:   bd \n");
        assert_eq!(key.letters().collect::<Vec<_>>(), vec!['B', 'D']);
        assert_eq!(key.to_string(), "B D");
    }

    #[test]
    fn test_answer_key_uses_last_colon() {
        let key = AnswerKey::parse("Suggested: Correct Answer: A, C");
        assert_eq!(key.letters().collect::<Vec<_>>(), vec!['A', 'C']);
    }

    #[test]
    fn test_answer_key_not_found_and_empty() {
        assert!(AnswerKey::parse("Not found").is_empty());
        assert!(AnswerKey::parse("Correct Answer: Not found").is_empty());
        assert!(AnswerKey::parse("NOT FOUND").is_empty());
        assert!(AnswerKey::parse("").is_empty());
        assert!(AnswerKey::parse("Correct Answer:").is_empty());
    }

    #[test]
    fn test_answer_key_not_found_with_punctuation() {
        assert!(AnswerKey::parse("Correct Answer: Not found.").is_empty());
        assert!(AnswerKey::parse("not found!").is_empty());

        let normalized = normalize_options(&["A. a", "D. d"], "Correct Answer: Not found.");
        assert!(normalized.iter().all(|o| !o.is_correct));

        // 普通答案后面的句号不影响字母
        let key = AnswerKey::parse("Correct Answer: D.");
        assert_eq!(key.letters().collect::<Vec<_>>(), vec!['D']);
    }

    #[test]
    fn test_normalize_marks_correct_option() {
        let options = ["A. Use public IP", "B. Use private IP", "C. Use Cloud SQL proxy"];
        let normalized = normalize_options(&options, "Correct Answer: C");

        assert_eq!(
            normalized,
            vec![
                NormalizedOption { id: 'A', is_correct: false, text: "Use public IP".to_string() },
                NormalizedOption { id: 'B', is_correct: false, text: "Use private IP".to_string() },
                NormalizedOption { id: 'C', is_correct: true, text: "Use Cloud SQL proxy".to_string() },
            ]
        );
    }

    #[test]
    fn test_normalize_not_found_marks_nothing() {
        let options = ["A. one", "B. two", "D. four"];
        for answer in ["Not found", ""] {
            let normalized = normalize_options(&options, answer);
            assert_eq!(normalized.len(), 3);
            assert!(normalized.iter().all(|o| !o.is_correct));
        }
    }

    #[test]
    fn test_normalize_skips_malformed_and_keeps_order() {
        let options = ["C. third", "garbage", "A. first", "", "B second"];
        let normalized = normalize_options(&options, "Correct Answer: AB");
        let ids: Vec<char> = normalized.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!['C', 'A', 'B']);
        assert!(!normalized[0].is_correct);
        assert!(normalized[1].is_correct);
        assert!(normalized[2].is_correct);
    }

    #[test]
    fn test_normalize_empty_options() {
        let options: [&str; 0] = [];
        assert!(normalize_options(&options, "Correct Answer: A").is_empty());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let options = ["A. x", "B. y", "C. z"];
        let first = normalize_options(&options, "Correct Answer: AC");
        let second = normalize_options(&options, "Correct Answer: AC");
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_record() {
        let record = build_record(
            &page(Some(vec!["A. yes", "B. no"]), Some("Correct Answer: A")),
            "professional-machine-learning-engineer",
        )
        .unwrap();

        assert_eq!(record.text, "What should you do?");
        assert_eq!(record.exam_id, "professional-machine-learning-engineer");
        assert!(record.id.is_empty());
        assert!(record.explanation.is_empty());
        assert_eq!(record.correct_letters().collect::<Vec<_>>(), vec!['A']);
    }

    #[test]
    fn test_build_record_missing_answer_is_not_fatal() {
        let record = build_record(&page(Some(vec!["A. yes", "D. no"]), None), "exam").unwrap();
        assert_eq!(record.options.len(), 2);
        assert!(record.options.iter().all(|o| !o.is_correct));
    }

    #[test]
    fn test_build_record_missing_options_is_contract_error() {
        let err = build_record(&page(None, Some("Correct Answer: A")), "exam").unwrap_err();
        assert_eq!(
            err,
            QuestionError::MissingOptions {
                header: "Question #: 1".to_string()
            }
        );
    }

    #[test]
    fn test_build_record_not_found_page() {
        let mut p = page(None, None);
        p.found = false;
        let record = build_record(&p, "exam").unwrap();
        assert!(record.is_placeholder());
    }

    #[test]
    fn test_retag_exam_id() {
        let mut records = vec![
            QuestionRecord::new("q1", "professional-cloud-architect", Vec::new()),
            QuestionRecord::new("q2", "other", Vec::new()),
            QuestionRecord::new("q3", "professional-cloud-architect", Vec::new()),
        ];

        let changed = retag_exam_id(
            &mut records,
            "professional-cloud-architect",
            "professional-cloud-database-engineer",
        );

        assert_eq!(changed, 2);
        assert_eq!(records[0].exam_id, "professional-cloud-database-engineer");
        assert_eq!(records[1].exam_id, "other");
        assert_eq!(records[2].exam_id, "professional-cloud-database-engineer");
    }
}
