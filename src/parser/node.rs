//! 片段节点树
//! 用带标签的枚举替代浏览器的活动DOM：Element / Text / Comment

/// 元素所属命名空间
///
/// 只有 HTML 命名空间下的 script/style 等元素内容按原样输出，
/// svg/math 里同名元素的内容仍是普通标记
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementNamespace {
    #[default]
    Html,
    Svg,
    MathMl,
}

impl ElementNamespace {
    pub const HTML_URL: &'static str = "http://www.w3.org/1999/xhtml";
    pub const SVG_URL: &'static str = "http://www.w3.org/2000/svg";
    pub const MATHML_URL: &'static str = "http://www.w3.org/1998/Math/MathML";

    /// 由命名空间URL识别，未知命名空间按HTML处理
    pub fn from_url(url: &str) -> Self {
        match url {
            Self::SVG_URL => Self::Svg,
            Self::MATHML_URL => Self::MathMl,
            _ => Self::Html,
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Self::Html => Self::HTML_URL,
            Self::Svg => Self::SVG_URL,
            Self::MathMl => Self::MATHML_URL,
        }
    }
}

/// 元素属性（HTML属性名已小写；带前缀的外部属性保留 `xlink:href` 形式）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttr {
    pub name: String,
    pub value: String,
}

impl HtmlAttr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 元素节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub namespace: ElementNamespace,
    pub attrs: Vec<HtmlAttr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>, attrs: Vec<HtmlAttr>) -> Self {
        Self::with_namespace(ElementNamespace::Html, tag, attrs)
    }

    pub fn with_namespace(namespace: ElementNamespace, tag: impl Into<String>, attrs: Vec<HtmlAttr>) -> Self {
        Self {
            tag: tag.into(),
            namespace,
            attrs,
            children: Vec::new(),
        }
    }

    pub fn is_html(&self) -> bool {
        self.namespace == ElementNamespace::Html
    }

    /// 获取属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// 移除属性，返回是否存在
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|attr| attr.name != name);
        before != self.attrs.len()
    }
}

/// 树节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// HTML片段（无 <html>/<body> 包裹的子树）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 按文档顺序遍历文本节点
    pub fn text_nodes(&self) -> TextNodes<'_> {
        TextNodes {
            stack: vec![self.children.iter()],
        }
    }

    /// 等价于浏览器的 textContent（包含script/style内的文本，不含注释）
    pub fn text_content(&self) -> String {
        self.text_nodes().collect()
    }
}

/// 文本节点迭代器（深度优先，显式栈避免递归）
pub struct TextNodes<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for TextNodes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(Node::Text(text)) => return Some(text.as_str()),
                Some(Node::Element(element)) => self.stack.push(element.children.iter()),
                Some(Node::Comment(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
