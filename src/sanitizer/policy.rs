//! 净化策略（黑名单）
//! 默认策略与历史内容保持兼容；严格策略在黑名单基础上扩展

use serde::{Deserialize, Serialize};

use crate::config::RichTextConfig;

/// 默认整棵移除的标签
const DEFAULT_BLOCKED_TAGS: &[&str] = &["script"];

/// 严格模式额外移除的标签
const STRICT_BLOCKED_TAGS: &[&str] = &[
    "iframe", "object", "embed", "base", "meta", "link", "frame", "frameset", "style",
];

/// 携带URL的属性（严格模式对所有元素检查）
const URL_ATTRIBUTES: &[&str] = &[
    "href", "src", "action", "formaction", "xlink:href", "poster", "background",
];

const DEFAULT_BLOCKED_SCHEMES: &[&str] = &["javascript:"];

const STRICT_BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// 净化策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizePolicy {
    /// 整棵移除的标签
    pub blocked_tags: Vec<String>,
    /// 被拦截的URL协议（小写，含冒号）
    pub blocked_schemes: Vec<String>,
    /// 是否对所有元素的URL属性做协议检查（否则只检查 <a href>）
    pub check_all_url_attributes: bool,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            blocked_tags: to_owned_list(DEFAULT_BLOCKED_TAGS),
            blocked_schemes: to_owned_list(DEFAULT_BLOCKED_SCHEMES),
            check_all_url_attributes: false,
        }
    }
}

impl SanitizePolicy {
    /// 严格策略：扩展黑名单
    pub fn strict() -> Self {
        let mut blocked_tags = to_owned_list(DEFAULT_BLOCKED_TAGS);
        blocked_tags.extend(to_owned_list(STRICT_BLOCKED_TAGS));
        Self {
            blocked_tags,
            blocked_schemes: to_owned_list(STRICT_BLOCKED_SCHEMES),
            check_all_url_attributes: true,
        }
    }

    /// 从全局配置生成策略
    pub fn from_config(config: &RichTextConfig) -> Self {
        let mut policy = if config.strict_sanitize {
            Self::strict()
        } else {
            Self::default()
        };

        for tag in &config.extra_blocked_tags {
            let tag = tag.to_ascii_lowercase();
            if !policy.blocked_tags.contains(&tag) {
                policy.blocked_tags.push(tag);
            }
        }
        policy
    }

    /// 标签是否需要整棵移除（svg 里的 script 同样移除）
    pub fn is_blocked_tag(&self, tag: &str) -> bool {
        self.blocked_tags.iter().any(|blocked| blocked.eq_ignore_ascii_case(tag))
    }

    /// 事件处理属性：名称以 on 开头
    pub fn is_event_handler(&self, attr_name: &str) -> bool {
        attr_name
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
    }

    /// 该元素的该属性是否需要做URL协议检查
    pub fn is_checked_url_attribute(&self, tag: &str, attr_name: &str) -> bool {
        if self.check_all_url_attributes {
            URL_ATTRIBUTES.contains(&attr_name)
        } else {
            tag == "a" && attr_name == "href"
        }
    }

    /// URL是否使用了被拦截的协议
    ///
    /// 先去掉首尾空白并转小写；浏览器解析URL时会丢弃内部的 Tab/CR/LF，
    /// 这里同样剔除，防止 `java\tscript:` 这类绕过
    pub fn is_blocked_url(&self, value: &str) -> bool {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect::<String>()
            .to_lowercase();

        self.blocked_schemes
            .iter()
            .any(|scheme| normalized.starts_with(scheme.as_str()))
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_blocks_only_script() {
        let policy = SanitizePolicy::default();
        assert!(policy.is_blocked_tag("script"));
        assert!(!policy.is_blocked_tag("iframe"));
        assert!(!policy.is_blocked_tag("style"));
        assert!(policy.is_blocked_tag("SCRIPT"));
    }

    #[test]
    fn test_event_handler_names() {
        let policy = SanitizePolicy::default();
        assert!(policy.is_event_handler("onerror"));
        assert!(policy.is_event_handler("onBegin"));
        assert!(!policy.is_event_handler("o"));
        assert!(!policy.is_event_handler("class"));
        assert!(!policy.is_event_handler("ö"));
    }

    #[test]
    fn test_blocked_url_normalization() {
        let policy = SanitizePolicy::default();
        assert!(policy.is_blocked_url("javascript:alert(1)"));
        assert!(policy.is_blocked_url("  JavaScript:alert(1)"));
        assert!(policy.is_blocked_url("java\tscript:alert(1)"));
        assert!(!policy.is_blocked_url("https://example.com/javascript:"));
        assert!(!policy.is_blocked_url("data:text/html,hi"));
    }

    #[test]
    fn test_url_attribute_scope() {
        let policy = SanitizePolicy::default();
        assert!(policy.is_checked_url_attribute("a", "href"));
        assert!(!policy.is_checked_url_attribute("img", "src"));

        let strict = SanitizePolicy::strict();
        assert!(strict.is_checked_url_attribute("img", "src"));
        assert!(strict.is_blocked_url("data:text/html;base64,AAAA"));
    }

    #[test]
    fn test_policy_from_config() {
        let config = crate::config::ConfigManager::custom().block_tag("marquee").build();
        let policy = SanitizePolicy::from_config(&config);
        assert!(policy.is_blocked_tag("marquee"));
        assert!(policy.is_blocked_tag("script"));
        assert!(!policy.check_all_url_attributes);
    }
}
