//! 文档段落模型
//!
//! 所有格式字段均为 `Option`：`None` 表示源段落从未设置该属性，
//! 与"显式设置为默认值"是两种不同的状态，复制时必须原样保留。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 长度，单位 EMU（English Metric Unit）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(pub i64);

impl Length {
    pub const EMU_PER_PT: i64 = 12_700;

    pub fn from_pt(pt: i64) -> Self {
        Length(pt * Self::EMU_PER_PT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// 行距：倍数或固定值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    Multiple(f64),
    Exact(Length),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Underline {
    Single,
    Double,
    Dotted,
    Wavy,
    None,
}

/// RGB 颜色，序列化为 "RRGGBB"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(RgbColor(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for RgbColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct RgbVisitor;

        impl<'de> Visitor<'de> for RgbVisitor {
            type Value = RgbColor;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex color string like \"FF0000\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                RgbColor::from_hex(value)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(RgbVisitor)
    }
}

/// 段落级格式
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_indent: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_line_indent: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<LineSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_before: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after: Option<Length>,
}

/// 一段连续格式相同的文本
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    /// 样式名，例如 "Heading 2"、"List Bullet"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub format: ParagraphFormat,
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// 创建带样式的段落，文本作为单个 run
    pub fn styled(text: impl Into<String>, style: &str) -> Self {
        let text = text.into();
        Self {
            runs: vec![Run::new(text.clone())],
            text,
            style: Some(style.to_string()),
            format: ParagraphFormat::default(),
        }
    }
}

/// 整个文档：一串扁平的段落
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// 题号，保存去掉前导零的十进制数字串
///
/// 按 (位数, 数字串) 比较，任意长度都能精确排序，不会溢出。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionNumber(String);

impl QuestionNumber {
    /// 从十进制数字串构建；包含非数字字符时返回 `None`
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(QuestionNumber(if trimmed.is_empty() { "0" } else { trimmed }.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for QuestionNumber {
    fn from(n: u64) -> Self {
        QuestionNumber(n.to_string())
    }
}

impl Ord for QuestionNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for QuestionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一道题对应的段落块，以首段中的题号为键
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentBlock {
    pub question_number: QuestionNumber,
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentBlock {
    pub fn new(question_number: QuestionNumber, header: Paragraph) -> Self {
        Self {
            question_number,
            paragraphs: vec![header],
        }
    }
}

/// 构建输出文档的累加器，显式传递并返回，不使用全局状态
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 原样复制段落，包括全部段落格式和 run 格式
    pub fn push_copy(&mut self, source: &Paragraph) -> &mut Self {
        self.document.paragraphs.push(Paragraph {
            text: source.text.clone(),
            style: source.style.clone(),
            format: source.format.clone(),
            runs: source.runs.iter().map(copy_run).collect(),
        });
        self
    }

    pub fn extend(&mut self, paragraphs: impl IntoIterator<Item = Paragraph>) -> &mut Self {
        self.document.paragraphs.extend(paragraphs);
        self
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

// 颜色和字体未设置时保持 None，不能补成默认值
fn copy_run(run: &Run) -> Run {
    Run {
        text: run.text.clone(),
        bold: run.bold,
        italic: run.italic,
        underline: run.underline,
        size: run.size,
        color: run.color,
        font_name: run.font_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_number_ordering() {
        let n = |s: &str| QuestionNumber::from_digits(s).unwrap();

        assert!(n("2") < n("10"));
        assert!(n("9") < n("18446744073709551616"));
        assert!(n("18446744073709551615") < n("18446744073709551616"));
        assert_eq!(n("007"), n("7"));
        assert_eq!(n("000").as_str(), "0");
        assert_eq!(QuestionNumber::from(42), n("42"));
        assert!(QuestionNumber::from_digits("").is_none());
        assert!(QuestionNumber::from_digits("1a").is_none());
    }

    #[test]
    fn test_rgb_color_hex_roundtrip() {
        let color = RgbColor::from_hex("#1F4E79").unwrap();
        assert_eq!(color, RgbColor(0x1F, 0x4E, 0x79));
        assert_eq!(color.to_string(), "1F4E79");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"1F4E79\"");
        assert!(RgbColor::from_hex("12345").is_none());
        assert!(RgbColor::from_hex("GGGGGG").is_none());
        assert!(RgbColor::from_hex("+F+F+F").is_none());
    }

    #[test]
    fn test_absent_attributes_stay_absent_in_json() {
        let run = Run::new("plain");
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "plain" }));

        let explicit = Run {
            bold: Some(false),
            ..Run::new("plain")
        };
        let json = serde_json::to_value(&explicit).unwrap();
        assert_eq!(json["bold"], false);

        let back: Run = serde_json::from_value(json).unwrap();
        assert_eq!(back.bold, Some(false));
        assert_eq!(back.color, None);
        assert_eq!(back.font_name, None);
    }

    #[test]
    fn test_builder_copies_every_attribute() {
        let source = Paragraph {
            text: "Question #: 1".to_string(),
            style: Some("Heading 2".to_string()),
            format: ParagraphFormat {
                alignment: Some(Alignment::Center),
                left_indent: Some(Length::from_pt(10)),
                right_indent: Some(Length(0)),
                first_line_indent: Some(Length(-5)),
                line_spacing: Some(LineSpacing::Multiple(1.5)),
                space_before: Some(Length::from_pt(6)),
                space_after: None,
            },
            runs: vec![Run {
                text: "Question #: 1".to_string(),
                bold: Some(true),
                italic: Some(false),
                underline: Some(Underline::Single),
                size: Some(Length::from_pt(14)),
                color: Some(RgbColor(255, 0, 0)),
                font_name: None,
            }],
        };

        let mut builder = DocumentBuilder::new();
        builder.push_copy(&source);
        let doc = builder.finish();

        assert_eq!(doc.paragraphs, vec![source]);
        assert_eq!(doc.paragraphs[0].runs[0].font_name, None);
    }
}
