//! 内容类型检测
//! 内容的真实类型从不持久化，只能从字符串本身推断（启发式，非解析器判定）

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// HTML标签形态：`<` + 非 `>` 串 + `>`
static HTML_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// 判断内容是否像HTML
///
/// 只要出现一个标签形态的子串即视为HTML；包含字面 `<tag>` 的纯文本同样会被判为HTML
pub fn is_likely_html(content: &str) -> bool {
    HTML_TAG_PATTERN.is_match(content)
}

/// 内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Html,
    PlainText,
}

impl ContentKind {
    /// 从内容推断类型
    pub fn detect(content: &str) -> Self {
        if is_likely_html(content) {
            ContentKind::Html
        } else {
            ContentKind::PlainText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::PlainText => "plain_text",
        }
    }
}
