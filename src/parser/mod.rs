//! 片段解析模块：HTML片段 <-> 节点树
//! 浏览器里的隐式全局 document 在这里变成显式注入的解析能力
pub mod node;
pub mod serializer;
pub mod tree_builder;

pub use self::node::{Element, ElementNamespace, Fragment, HtmlAttr, Node, TextNodes};
pub use self::serializer::FragmentSerializer;
pub use self::tree_builder::FragmentTreeBuilder;

/// 片段解析能力
///
/// 任何能把字符串解析成片段树、再把树序列化回字符串的实现都满足约定。
/// `parse` 必须是全函数：任意输入都做尽力容错，不允许失败。
pub trait FragmentParser: Send + Sync {
    /// 解析HTML片段
    fn parse(&self, html: &str) -> Fragment;

    /// 序列化片段（等价于 innerHTML）
    fn serialize(&self, fragment: &Fragment) -> String {
        FragmentSerializer::serialize(fragment)
    }

    /// 解析后立即序列化，用于修复被截断的标签结构
    fn normalize(&self, html: &str) -> String {
        self.serialize(&self.parse(html))
    }
}

/// 默认实现：html5ever 的 HTML5 树构建（经由 scraper）+ html5ever 序列化
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5everFragmentParser;

impl FragmentParser for Html5everFragmentParser {
    fn parse(&self, html: &str) -> Fragment {
        FragmentTreeBuilder::build(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_repairs_cut_markup() {
        let parser = Html5everFragmentParser;
        assert_eq!(parser.normalize("<p>Hello <b>wo"), "<p>Hello <b>wo</b></p>");
        assert_eq!(parser.normalize("<p>Hello</p><img src=\"x"), "<p>Hello</p>");
    }

    #[test]
    fn test_normalize_never_fails_on_garbage() {
        let parser = Html5everFragmentParser;
        for input in ["<<<>>>", "</>", "<!--", "<a <b <c", "&#xZZ;", "\u{0}\u{0}"] {
            let once = parser.normalize(input);
            assert_eq!(parser.normalize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_normalize_foreign_style_follows_html5_tree() {
        let parser = Html5everFragmentParser;
        let once = parser.normalize("<svg><style><img src=x onerror=alert(1)></style></svg>");
        assert_eq!(once, "<svg><style></style></svg><img src=\"x\" onerror=\"alert(1)\">");
        assert_eq!(parser.normalize(&once), once);
    }
}
