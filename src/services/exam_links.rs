//! 讨论链接解析 - 业务能力层
//!
//! 从讨论页 URL 中提取考试、topic 和题号，并按考试分组排序

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// 链接中没有题号时使用的题号，排在同一 topic 的最后
pub const MISSING_QUESTION_NUMBER: u32 = 9999;

static TOPIC_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"topic-(\d+)-question-(\d+)").expect("link regex is valid"));
static TOPIC_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"topic-(\d+)-question/?$").expect("link regex is valid"));
static EXAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"exam-([a-z0-9\-]+)-topic").expect("link regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionLink {
    pub url: String,
    /// 考试标识，例如 "professional-cloud-architect"
    pub exam: Option<String>,
    pub topic: u32,
    pub question: u32,
}

impl DiscussionLink {
    /// 解析链接；没有 topic 信息或数字溢出时返回 `None`
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        let (topic, question) = if let Some(caps) = TOPIC_QUESTION_RE.captures(url) {
            (caps[1].parse::<u32>().ok()?, caps[2].parse::<u32>().ok()?)
        } else {
            let caps = TOPIC_ONLY_RE.captures(url)?;
            (caps[1].parse::<u32>().ok()?, MISSING_QUESTION_NUMBER)
        };

        let exam = EXAM_RE.captures(url).map(|caps| caps[1].to_string());

        Some(Self {
            url: url.to_string(),
            exam,
            topic,
            question,
        })
    }

    pub fn sort_key(&self) -> (u32, u32) {
        (self.topic, self.question)
    }
}

/// 按考试分组，组内按 (topic, 题号) 稳定排序；无法识别考试的链接被丢弃
pub fn group_by_exam<'a>(urls: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, Vec<DiscussionLink>> {
    let mut groups: BTreeMap<String, Vec<DiscussionLink>> = BTreeMap::new();

    for link in urls.into_iter().filter_map(DiscussionLink::parse) {
        if let Some(exam) = link.exam.clone() {
            groups.entry(exam).or_default().push(link);
        }
    }

    for links in groups.values_mut() {
        links.sort_by_key(DiscussionLink::sort_key);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.examtopics.com/discussions/google/view/";

    #[test]
    fn test_parse_full_link() {
        let url = format!("{BASE}12345-exam-professional-cloud-architect-topic-1-question-27/");
        let link = DiscussionLink::parse(&url).unwrap();
        assert_eq!(link.exam.as_deref(), Some("professional-cloud-architect"));
        assert_eq!(link.topic, 1);
        assert_eq!(link.question, 27);
    }

    #[test]
    fn test_parse_topic_only_link() {
        let url = format!("{BASE}999-exam-professional-data-engineer-topic-2-question/");
        let link = DiscussionLink::parse(&url).unwrap();
        assert_eq!(link.topic, 2);
        assert_eq!(link.question, MISSING_QUESTION_NUMBER);
    }

    #[test]
    fn test_parse_rejects_unrelated_link() {
        assert!(DiscussionLink::parse("https://www.examtopics.com/exams/google/").is_none());
        assert!(DiscussionLink::parse("").is_none());
    }

    #[test]
    fn test_group_by_exam_sorts_within_group() {
        let urls = vec![
            format!("{BASE}1-exam-professional-cloud-architect-topic-1-question-10/"),
            format!("{BASE}2-exam-professional-cloud-architect-topic-1-question/"),
            format!("{BASE}3-exam-professional-cloud-architect-topic-1-question-2/"),
            format!("{BASE}4-exam-associate-cloud-engineer-topic-1-question-5/"),
            "https://example.com/not-a-discussion".to_string(),
        ];

        let groups = group_by_exam(urls.iter().map(String::as_str));

        assert_eq!(groups.len(), 2);
        let questions: Vec<u32> = groups["professional-cloud-architect"]
            .iter()
            .map(|l| l.question)
            .collect();
        assert_eq!(questions, vec![2, 10, MISSING_QUESTION_NUMBER]);
        assert_eq!(groups["associate-cloud-engineer"].len(), 1);
    }
}
