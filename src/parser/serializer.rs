//! 片段序列化（等价于读取 innerHTML）
//! 节点树实现 html5ever 的 `Serialize`，转义规则、空元素与原样文本元素的判断都交给 `HtmlSerializer`

use std::io;

use html5ever::serialize::{SerializeOpts, Serializer, TraversalScope, serialize};
use markup5ever::serialize::Serialize;
use markup5ever::{LocalName, Namespace, QualName, ns};
use tracing::warn;

use super::node::{Element, Fragment, Node};

/// 片段序列化器
pub struct FragmentSerializer;

impl FragmentSerializer {
    /// 把片段树序列化为HTML字符串
    pub fn serialize(fragment: &Fragment) -> String {
        let mut buf = Vec::new();
        if let Err(err) = serialize(&mut buf, fragment, SerializeOpts::default()) {
            warn!("片段序列化失败：{}", err);
        }

        match String::from_utf8(buf) {
            Ok(html) => html,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

impl Serialize for Fragment {
    fn serialize<S>(&self, serializer: &mut S, _traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        serialize_nodes(serializer, &self.children)
    }
}

fn serialize_nodes<S: Serializer>(serializer: &mut S, nodes: &[Node]) -> io::Result<()> {
    for node in nodes {
        match node {
            Node::Element(element) => serialize_element(serializer, element)?,
            Node::Text(text) => serializer.write_text(text)?,
            Node::Comment(text) => serializer.write_comment(text)?,
        }
    }
    Ok(())
}

fn serialize_element<S: Serializer>(serializer: &mut S, element: &Element) -> io::Result<()> {
    let name = QualName::new(
        None,
        Namespace::from(element.namespace.url()),
        LocalName::from(element.tag.as_str()),
    );
    // 属性名按原样输出（含 xlink: 之类的前缀）
    let attrs: Vec<(QualName, &str)> = element
        .attrs
        .iter()
        .map(|attr| (QualName::new(None, ns!(), LocalName::from(attr.name.as_str())), attr.value.as_str()))
        .collect();

    serializer.start_elem(name.clone(), attrs.iter().map(|(name, value)| (name, *value)))?;
    serialize_nodes(serializer, &element.children)?;
    serializer.end_elem(name)
}
