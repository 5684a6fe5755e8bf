//! 全局配置管理,存储所有可配置项

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::is_likely_html;
use crate::error::{RichTextError, RtResult};

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextConfig {
    // 富文本预览的纯文本字符预算
    pub preview_max_length: usize,
    // 纯文本预览（<p>包裹）的字符预算
    pub plain_preview_max_length: usize,
    // 截断后由调用方追加的省略标记
    pub ellipsis: String,
    // 纯文本渲染时替换 \n 的换行标签
    pub line_break_tag: String,
    // 是否启用扩展黑名单（iframe/object/data: 等）
    pub strict_sanitize: bool,
    // 额外需要整棵移除的标签
    pub extra_blocked_tags: Vec<String>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for RichTextConfig {
    fn default() -> Self {
        Self {
            preview_max_length: 200,
            plain_preview_max_length: 300,
            ellipsis: "...".to_string(),
            line_break_tag: "<br/>".to_string(),
            strict_sanitize: false,
            extra_blocked_tags: Vec::new(),
            verbose: false,
        }
    }
}

impl RichTextConfig {
    /// 校验配置项
    pub fn validate(&self) -> RtResult<()> {
        if !is_likely_html(&self.line_break_tag) {
            return Err(RichTextError::ConfigError(format!(
                "换行标签必须是HTML标签：{}",
                self.line_break_tag
            )));
        }

        if self.ellipsis.contains('<') || self.ellipsis.contains('>') {
            return Err(RichTextError::ConfigError(format!(
                "省略标记不能包含HTML：{}",
                self.ellipsis
            )));
        }

        for tag in &self.extra_blocked_tags {
            let valid = !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !valid {
                return Err(RichTextError::ConfigError(format!("无效的屏蔽标签名：{:?}", tag)));
            }
        }

        Ok(())
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> RichTextConfig {
        RichTextConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从JSON字符串加载配置（缺省字段取默认值）
    pub fn from_json_str(json: &str) -> RtResult<RichTextConfig> {
        let config: RichTextConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从JSON文件加载配置
    pub fn from_json_file(path: impl AsRef<Path>) -> RtResult<RichTextConfig> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            RichTextError::ConfigLoadError(format!("读取配置文件失败：{}，错误：{}", path.display(), e))
        })?;
        Self::from_json_str(&data)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: RichTextConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RichTextConfig::default(),
        }
    }

    pub fn preview_max_length(mut self, max_length: usize) -> Self {
        self.config.preview_max_length = max_length;
        self
    }

    pub fn plain_preview_max_length(mut self, max_length: usize) -> Self {
        self.config.plain_preview_max_length = max_length;
        self
    }

    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.config.ellipsis = ellipsis.into();
        self
    }

    pub fn line_break_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.line_break_tag = tag.into();
        self
    }

    pub fn strict_sanitize(mut self, strict: bool) -> Self {
        self.config.strict_sanitize = strict;
        self
    }

    pub fn block_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.extra_blocked_tags.push(tag.into().to_ascii_lowercase());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> RichTextConfig {
        self.config
    }
}
