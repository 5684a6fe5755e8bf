//! 纯文本投影与富文本判空

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::FragmentParser;

/// 剥离标签用（允许空标签 `<>`）
static TAG_STRIP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// 富文本编辑器的“空编辑器”标记
pub const EMPTY_EDITOR_SENTINELS: &[&str] = &["<p><br></p>", "<p></p>"];

/// 提取纯文本（等价于 textContent，不保留块级换行）
pub fn plain_text<P: FragmentParser + ?Sized>(parser: &P, html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    parser.parse(html).text_content()
}

/// 纯文本长度（按 Unicode 标量值计数）
pub fn plain_text_length<P: FragmentParser + ?Sized>(parser: &P, html: &str) -> usize {
    char_len(&plain_text(parser, html))
}

/// 判断富文本是否为空
///
/// 空/全空白、剥离标签后无文本、或等于编辑器的空标记时为空
pub fn is_rich_text_empty(html: &str) -> bool {
    if html.trim().is_empty() {
        return true;
    }

    let text = TAG_STRIP_PATTERN.replace_all(html, "");
    text.trim().is_empty() || EMPTY_EDITOR_SENTINELS.contains(&html)
}

/// 可空输入的判空（None 视为空）
pub fn is_rich_text_empty_opt(html: Option<&str>) -> bool {
    html.is_none_or(is_rich_text_empty)
}

#[inline]
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Html5everFragmentParser;

    #[test]
    fn test_is_rich_text_empty() {
        assert!(is_rich_text_empty(""));
        assert!(is_rich_text_empty("   "));
        assert!(is_rich_text_empty("\n\t"));
        assert!(is_rich_text_empty("<p><br></p>"));
        assert!(is_rich_text_empty("<p></p>"));
        assert!(is_rich_text_empty("<p> </p><ul><li></li></ul>"));
        assert!(!is_rich_text_empty("<p>hello</p>"));
        assert!(!is_rich_text_empty("plain"));
    }

    #[test]
    fn test_is_rich_text_empty_opt() {
        assert!(is_rich_text_empty_opt(None));
        assert!(is_rich_text_empty_opt(Some("<p></p>")));
        assert!(!is_rich_text_empty_opt(Some("x")));
    }

    #[test]
    fn test_plain_text_extraction() {
        let parser = Html5everFragmentParser;
        assert_eq!(plain_text(&parser, ""), "");
        assert_eq!(
            plain_text(&parser, "<h1>Title</h1><p>Para <b>bold</b> &amp; more</p>"),
            "TitlePara bold & more"
        );
        assert_eq!(plain_text(&parser, "<!-- hidden -->shown"), "shown");
    }

    #[test]
    fn test_plain_text_length_counts_chars() {
        let parser = Html5everFragmentParser;
        assert_eq!(plain_text_length(&parser, "<p>بسم</p>"), 3);
        assert_eq!(plain_text_length(&parser, "<p>Ç&nbsp;ë</p>"), 3);
    }
}
