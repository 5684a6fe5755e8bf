//! 片段树构建
//! 由 scraper 执行 HTML5 树构建算法（html5ever），再转换成本地节点树：
//! 隐式闭合、收养机构算法、表格寄养以及 svg/math 外部内容的命名空间切换都与浏览器一致

use ego_tree::NodeRef;
use scraper::{Html, Node as DomNode};

use super::node::{Element, ElementNamespace, Fragment, HtmlAttr, Node};

/// 片段树构建器
pub struct FragmentTreeBuilder;

impl FragmentTreeBuilder {
    /// 以 `<body>` 为上下文解析片段（脚本开启，等价于给 innerHTML 赋值）
    pub fn build(html: &str) -> Fragment {
        if html.is_empty() {
            return Fragment::default();
        }

        let document = Html::parse_fragment(html);
        // 片段内容挂在合成的 <html> 根元素下
        let root = document.root_element();
        Fragment::new(Self::convert_children(*root))
    }

    fn convert_children(parent: NodeRef<'_, DomNode>) -> Vec<Node> {
        let mut nodes = Vec::new();

        for child in parent.children() {
            match child.value() {
                DomNode::Element(element) => {
                    let attrs = element
                        .attrs
                        .iter()
                        .map(|(name, value)| {
                            let name = match &name.prefix {
                                Some(prefix) => format!("{}:{}", prefix, name.local),
                                None => name.local.to_string(),
                            };
                            HtmlAttr::new(name, &**value)
                        })
                        .collect();

                    let mut converted = Element::with_namespace(
                        ElementNamespace::from_url(&element.name.ns),
                        element.name.local.to_string(),
                        attrs,
                    );
                    converted.children = Self::convert_children(child);
                    nodes.push(Node::Element(converted));
                }
                DomNode::Text(text) => nodes.push(Node::Text(String::from(&**text))),
                DomNode::Comment(comment) => nodes.push(Node::Comment(String::from(&**comment))),
                // <template> 的内容位于其内部片段节点下
                DomNode::Fragment => nodes.extend(Self::convert_children(child)),
                DomNode::Document | DomNode::Doctype(_) | DomNode::ProcessingInstruction(_) => {}
            }
        }

        nodes
    }
}
