//! 保留结构的HTML截断
//! 按纯文本字符预算截断：在文本节点边界定位切点，切原始HTML串，再重新解析修复未闭合标签

use serde::Serialize;
use tracing::debug;

use crate::content::text::char_len;
use crate::parser::{Element, Fragment, FragmentParser, Node};
use crate::utils::log_snippet;

/// 截断结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncationResult {
    /// 截断后的内容（未截断时与输入完全一致）
    pub truncated: String,
    /// 是否发生截断
    pub is_truncated: bool,
}

impl TruncationResult {
    /// 未截断：原样返回
    pub fn unchanged(html: &str) -> Self {
        Self {
            truncated: html.to_string(),
            is_truncated: false,
        }
    }

    pub fn truncated(text: String) -> Self {
        Self {
            truncated: text,
            is_truncated: true,
        }
    }

    /// 截断时追加省略标记（由调用方决定是否展示）
    pub fn with_ellipsis(mut self, ellipsis: &str) -> Self {
        if self.is_truncated {
            self.truncated.push_str(ellipsis);
        }
        self
    }
}

/// 切点查找结果
#[derive(Debug, PartialEq, Eq)]
enum CutSearch<'a> {
    /// 原始HTML的前缀
    Found(&'a str),
    /// 没有文本节点越过预算
    NoBoundary,
    /// 越界文本节点在原始HTML中找不到（实体编码等导致）
    TextNotInSource,
}

/// HTML截断器
pub struct HtmlTruncator;

impl HtmlTruncator {
    /// 截断HTML到 `max_length` 个纯文本字符
    ///
    /// 全函数：找不到安全切点时退化为纯文本截断，结果的纯文本长度永远不超过预算
    pub fn truncate<P: FragmentParser + ?Sized>(parser: &P, html: &str, max_length: usize) -> TruncationResult {
        let fragment = parser.parse(html);
        let plain_text = fragment.text_content();

        if char_len(&plain_text) <= max_length {
            return TruncationResult::unchanged(html);
        }

        let cut = match Self::locate_cut(html, &fragment, max_length) {
            CutSearch::Found(cut) if !cut.is_empty() => cut,
            other => {
                debug!(
                    "未找到安全切点（{:?}），退化为纯文本截断，预算：{}，输入摘要：{}",
                    other,
                    max_length,
                    log_snippet(html, 80)
                );
                return Self::plain_fallback(parser, &plain_text, max_length);
            }
        };

        // 重新解析切出的前缀，自动闭合未结束的标签
        let repaired_fragment = parser.parse(cut);
        let repaired_len = char_len(&repaired_fragment.text_content());

        if repaired_len > max_length || (repaired_len == 0 && max_length > 0) {
            debug!(
                "切点修复后文本长度异常（{} / 预算{}），退化为纯文本截断，切点摘要：{}",
                repaired_len,
                max_length,
                log_snippet(cut, 80)
            );
            return Self::plain_fallback(parser, &plain_text, max_length);
        }

        TruncationResult::truncated(parser.serialize(&repaired_fragment))
    }

    /// 纯文本预览：超出预算时返回 `<p>前缀+省略号</p>`，否则原样返回
    pub fn plain_preview<P: FragmentParser + ?Sized>(
        parser: &P,
        html: &str,
        max_length: usize,
        ellipsis: &str,
    ) -> String {
        let plain_text = parser.parse(html).text_content();
        if char_len(&plain_text) <= max_length {
            return html.to_string();
        }

        let mut text: String = plain_text.chars().take(max_length).collect();
        text.push_str(ellipsis);

        let mut paragraph = Element::new("p", Vec::new());
        paragraph.children.push(Node::Text(text));
        parser.serialize(&Fragment::new(vec![Node::Element(paragraph)]))
    }

    /// 按文档顺序累计文本长度，找到第一个越过预算的文本节点，在原始HTML中定位切点
    fn locate_cut<'a>(html: &'a str, fragment: &Fragment, max_length: usize) -> CutSearch<'a> {
        let mut char_count = 0;

        for text in fragment.text_nodes() {
            let text_len = char_len(text);
            if char_count + text_len > max_length {
                let remaining = max_length - char_count;

                let Some(start) = html.find(text) else {
                    return CutSearch::TextNotInSource;
                };

                // 从文本起点再前进 remaining 个字符（保证落在字符边界）
                let offset = html[start..]
                    .char_indices()
                    .nth(remaining)
                    .map(|(index, _)| index)
                    .unwrap_or(html.len() - start);

                return CutSearch::Found(&html[..start + offset]);
            }
            char_count += text_len;
        }

        CutSearch::NoBoundary
    }

    /// 纯文本退化：前缀作为文本节点序列化，解码出的 `<`、`&` 会重新转义，不会变成活动标记
    fn plain_fallback<P: FragmentParser + ?Sized>(parser: &P, plain_text: &str, max_length: usize) -> TruncationResult {
        let prefix: String = plain_text.chars().take(max_length).collect();
        TruncationResult::truncated(parser.serialize(&Fragment::new(vec![Node::Text(prefix)])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Html5everFragmentParser;
    use crate::sanitizer::HtmlSanitizer;

    fn truncate(html: &str, max_length: usize) -> TruncationResult {
        HtmlTruncator::truncate(&Html5everFragmentParser, html, max_length)
    }

    fn rendered_len(html: &str) -> usize {
        char_len(&Html5everFragmentParser.parse(html).text_content())
    }

    #[test]
    fn test_short_content_is_exact_passthrough() {
        let result = truncate("<p>hi", 10);
        assert_eq!(result, TruncationResult::unchanged("<p>hi"));

        let exact = truncate("<p>abcde</p>", 5);
        assert!(!exact.is_truncated);
        assert_eq!(exact.truncated, "<p>abcde</p>");
    }

    #[test]
    fn test_lesson_preview_scenario() {
        let html = "<p>Hello <b>world</b>, this is a <i>long</i> lesson about Arabic grammar and vocabulary that exceeds the preview budget.</p>";
        let result = truncate(html, 20);

        assert!(result.is_truncated);
        assert_eq!(result.truncated, "<p>Hello <b>world</b>, this is</p>");
        assert!(rendered_len(&result.truncated) <= 20);
    }

    #[test]
    fn test_cut_inside_nested_tags_is_repaired() {
        let html = "<ul><li><b>Elif</b> është shkronja e parë</li><li>Ba</li></ul>";
        let result = truncate(html, 10);

        assert!(result.is_truncated);
        assert_eq!(result.truncated, "<ul><li><b>Elif</b> është</li></ul>");
    }

    #[test]
    fn test_result_is_parse_fixed_point() {
        let inputs = [
            "<div><p>one <em>two <strong>three four five</strong></em></p><p>six</p></div>",
            "<table><tr><td>alpha beta</td><td>gamma delta</td></tr></table>",
            "<ol><li>first item<li>second item<li>third item</ol>",
            "<p>a<br>b<br>c<br>defghijklmnop</p>",
        ];
        let parser = Html5everFragmentParser;
        for input in inputs {
            for max_length in [0, 1, 3, 7, 12] {
                let result = truncate(input, max_length);
                let once = parser.normalize(&result.truncated);
                assert_eq!(parser.normalize(&once), once, "input: {} / {}", input, max_length);
                assert!(rendered_len(&result.truncated) <= max_length, "input: {} / {}", input, max_length);
            }
        }
    }

    #[test]
    fn test_entity_encoded_text_falls_back_to_plain_text() {
        let result = truncate("<p>Tom &amp; Jerry and friends</p>", 5);
        assert_eq!(result, TruncationResult::truncated("Tom &amp;".to_string()));
        assert_eq!(Html5everFragmentParser.normalize(&result.truncated), result.truncated);
    }

    #[test]
    fn test_fallback_does_not_revive_escaped_markup() {
        let sanitized = HtmlSanitizer::default()
            .sanitize("<p>Note: &lt;img src=x onerror=alert(1)&gt; is how the attack looks, keep reading</p>");
        let result = truncate(&sanitized, 40);

        assert_eq!(result.truncated, "Note: &lt;img src=x onerror=alert(1)&gt; is ho");
        let reparsed = Html5everFragmentParser.parse(&result.truncated);
        assert!(reparsed.children.iter().all(|node| matches!(node, Node::Text(_))));
        assert_eq!(rendered_len(&result.truncated), 40);
    }

    #[test]
    fn test_entity_heavy_inputs_stay_bounded_and_stable() {
        let inputs = [
            "<p>Tom &amp; Jerry &lt;3 and friends</p>",
            "&lt;img src=x onerror=alert(1)&gt; plain tail text",
            "<ul><li>a &lt; b</li><li>c &gt; d &amp; e</li></ul>",
            "<p>caf&eacute; &nbsp;au lait</p>",
            "<p>a<b>&amp;</b>c d e f</p>",
            "<p>&lt;script&gt;alert(1)&lt;/script&gt; mësim</p>",
        ];
        let parser = Html5everFragmentParser;
        for input in inputs {
            for max_length in 0..24 {
                let result = truncate(input, max_length);
                assert!(rendered_len(&result.truncated) <= max_length, "input: {} / {}", input, max_length);
                if result.is_truncated {
                    assert_eq!(
                        parser.normalize(&result.truncated),
                        result.truncated,
                        "input: {} / {}",
                        input,
                        max_length
                    );
                }
            }
        }
    }

    #[test]
    fn test_text_found_in_attribute_first_falls_back() {
        let result = truncate(r#"<a title="more text here">more text here</a>"#, 4);
        assert_eq!(result, TruncationResult::truncated("more".to_string()));
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(truncate("abc", 0), TruncationResult::truncated(String::new()));
        let result = truncate("<p>abc</p>", 0);
        assert!(result.is_truncated);
        assert_eq!(rendered_len(&result.truncated), 0);
    }

    #[test]
    fn test_multibyte_cut_on_char_boundary() {
        let result = truncate("<p>بِسْمِ اللَّهِ الرَّحْمَٰنِ</p>", 6);
        assert!(result.is_truncated);
        assert!(result.truncated.starts_with("<p>"));
        assert!(result.truncated.ends_with("</p>"));
        assert_eq!(rendered_len(&result.truncated), 6);
    }

    #[test]
    fn test_with_ellipsis() {
        assert_eq!(truncate("abcdef", 3).with_ellipsis("...").truncated, "abc...");
        assert_eq!(truncate("abc", 3).with_ellipsis("...").truncated, "abc");
    }

    #[test]
    fn test_plain_preview() {
        let parser = Html5everFragmentParser;
        assert_eq!(HtmlTruncator::plain_preview(&parser, "<b>short</b>", 10, "..."), "<b>short</b>");
        assert_eq!(
            HtmlTruncator::plain_preview(&parser, "<p>&lt;script&gt; is text</p>", 8, "..."),
            "<p>&lt;script&gt;...</p>"
        );
    }
}
