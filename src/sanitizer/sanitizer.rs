//! HTML 净化器
//! 基于片段树遍历的单一策略：移除黑名单元素、事件处理属性与危险协议链接

use serde::Serialize;
use tracing::{debug, warn};

use super::policy::SanitizePolicy;
use crate::parser::{Element, Fragment, FragmentParser, Html5everFragmentParser, Node};
use crate::utils::log_snippet;

/// 输出重新解析后仍需净化时的最大轮数
const MAX_SANITIZE_PASSES: usize = 4;

/// 净化统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    /// 整棵移除的元素数
    pub removed_elements: usize,
    /// 移除的事件处理属性数
    pub removed_event_handlers: usize,
    /// 移除的危险URL属性数
    pub removed_urls: usize,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        self.removed_elements == 0 && self.removed_event_handlers == 0 && self.removed_urls == 0
    }

    fn absorb(&mut self, other: SanitizeReport) {
        self.removed_elements += other.removed_elements;
        self.removed_event_handlers += other.removed_event_handlers;
        self.removed_urls += other.removed_urls;
    }
}

/// HTML 净化器
#[derive(Debug, Clone, Default)]
pub struct HtmlSanitizer {
    policy: SanitizePolicy,
}

impl HtmlSanitizer {
    /// 创建净化器
    pub fn new(policy: SanitizePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SanitizePolicy {
        &self.policy
    }

    /// 净化HTML（默认解析器）
    pub fn sanitize(&self, html: &str) -> String {
        self.sanitize_with(&Html5everFragmentParser, html).0
    }

    /// 净化HTML并返回统计
    pub fn sanitize_with_report(&self, html: &str) -> (String, SanitizeReport) {
        self.sanitize_with(&Html5everFragmentParser, html)
    }

    /// 使用指定解析器净化
    ///
    /// 输出会被再次解析（浏览器渲染、后续截断），所以每轮都把序列化结果重新解析并复查，
    /// 直到重新解析的树不再含有需要移除的内容
    pub fn sanitize_with<P: FragmentParser + ?Sized>(&self, parser: &P, html: &str) -> (String, SanitizeReport) {
        if html.is_empty() {
            return (String::new(), SanitizeReport::default());
        }

        let mut fragment = parser.parse(html);
        let mut report = self.sanitize_fragment(&mut fragment);

        for pass in 1..=MAX_SANITIZE_PASSES {
            let output = parser.serialize(&fragment);
            fragment = parser.parse(&output);
            let residue = self.sanitize_fragment(&mut fragment);

            if residue.is_clean() {
                if !report.is_clean() {
                    debug!(
                        "HTML净化完成：移除元素{}个，事件属性{}个，危险链接{}个，复查{}轮，输入摘要：{}",
                        report.removed_elements,
                        report.removed_event_handlers,
                        report.removed_urls,
                        pass,
                        log_snippet(html, 80)
                    );
                }
                return (output, report);
            }

            debug!("净化结果重新解析后仍含危险内容（第{}轮），继续净化", pass);
            report.absorb(residue);
        }

        // 始终不收敛：只保留转义后的文本
        warn!(
            "HTML净化{}轮后仍不稳定，退化为纯文本，输入摘要：{}",
            MAX_SANITIZE_PASSES,
            log_snippet(html, 80)
        );
        let text = Fragment::new(vec![Node::Text(fragment.text_content())]);
        (parser.serialize(&text), report)
    }

    /// 原地净化片段树
    pub fn sanitize_fragment(&self, fragment: &mut Fragment) -> SanitizeReport {
        let mut report = SanitizeReport::default();
        self.sanitize_nodes(&mut fragment.children, &mut report);
        report
    }

    fn sanitize_nodes(&self, nodes: &mut Vec<Node>, report: &mut SanitizeReport) {
        nodes.retain(|node| match node {
            Node::Element(element) if self.policy.is_blocked_tag(&element.tag) => {
                report.removed_elements += 1;
                false
            }
            _ => true,
        });

        for node in nodes.iter_mut() {
            if let Node::Element(element) = node {
                self.sanitize_element(element, report);
                self.sanitize_nodes(&mut element.children, report);
            }
        }
    }

    fn sanitize_element(&self, element: &mut Element, report: &mut SanitizeReport) {
        let policy = &self.policy;
        let tag = element.tag.as_str();

        element.attrs.retain(|attr| {
            if policy.is_event_handler(&attr.name) {
                report.removed_event_handlers += 1;
                return false;
            }
            // 危险协议：整个属性移除，而不是只替换协议
            if policy.is_checked_url_attribute(tag, &attr.name) && policy.is_blocked_url(&attr.value) {
                report.removed_urls += 1;
                return false;
            }
            true
        });
    }
}
