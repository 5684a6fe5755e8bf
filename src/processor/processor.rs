//! 富文本处理器：整合检测、渲染、净化、判空与截断
use tracing::debug;

use crate::config::RichTextConfig;
use crate::content::{self, ContentKind};
use crate::error::RtResult;
use crate::parser::{FragmentParser, Html5everFragmentParser};
use crate::sanitizer::{HtmlSanitizer, SanitizePolicy, SanitizeReport};
use crate::truncate::{HtmlTruncator, TruncationResult};

/// 富文本处理器
///
/// 无状态：每次调用各自构建并丢弃解析树，可在线程间共享
#[derive(Debug, Clone)]
pub struct RichTextProcessor<P: FragmentParser = Html5everFragmentParser> {
    parser: P,
    sanitizer: HtmlSanitizer,
    config: RichTextConfig,
}

impl Default for RichTextProcessor {
    fn default() -> Self {
        Self::with_parser(Html5everFragmentParser, RichTextConfig::default())
    }
}

impl RichTextProcessor {
    /// 创建处理器（校验配置）
    pub fn new(config: RichTextConfig) -> RtResult<Self> {
        config.validate()?;
        Ok(Self::with_parser(Html5everFragmentParser, config))
    }
}

impl<P: FragmentParser> RichTextProcessor<P> {
    /// 注入自定义解析器
    pub fn with_parser(parser: P, config: RichTextConfig) -> Self {
        let sanitizer = HtmlSanitizer::new(SanitizePolicy::from_config(&config));
        if config.verbose {
            debug!(
                "富文本处理器初始化，严格净化：{}，屏蔽标签：{:?}",
                config.strict_sanitize,
                sanitizer.policy().blocked_tags
            );
        }
        Self {
            parser,
            sanitizer,
            config,
        }
    }

    pub fn config(&self) -> &RichTextConfig {
        &self.config
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// 内容是否像HTML
    pub fn is_likely_html(&self, content: &str) -> bool {
        content::is_likely_html(content)
    }

    /// 推断内容类型
    pub fn content_kind(&self, content: &str) -> ContentKind {
        ContentKind::detect(content)
    }

    /// 渲染混合来源内容（纯文本转义+换行，HTML原样）
    pub fn render_lesson_content(&self, content: &str) -> String {
        content::render_lesson_content_with(content, &self.config.line_break_tag)
    }

    /// 净化HTML
    pub fn sanitize(&self, html: &str) -> String {
        self.sanitizer.sanitize_with(&self.parser, html).0
    }

    /// 净化HTML并返回统计
    pub fn sanitize_with_report(&self, html: &str) -> (String, SanitizeReport) {
        self.sanitizer.sanitize_with(&self.parser, html)
    }

    /// 富文本是否为空（提交前的表单校验）
    pub fn is_empty(&self, html: &str) -> bool {
        content::is_rich_text_empty(html)
    }

    /// 提取纯文本
    pub fn plain_text(&self, html: &str) -> String {
        content::plain_text(&self.parser, html)
    }

    /// 纯文本长度（字符数）
    pub fn plain_text_length(&self, html: &str) -> usize {
        content::plain_text_length(&self.parser, html)
    }

    /// 保留结构截断
    pub fn truncate(&self, html: &str, max_length: usize) -> TruncationResult {
        HtmlTruncator::truncate(&self.parser, html, max_length)
    }

    /// 课程内容预览：净化 -> (折叠时)截断 -> 追加省略号
    pub fn render_preview(&self, content: &str, expanded: bool) -> TruncationResult {
        let sanitized = self.sanitize(content);
        if expanded {
            return TruncationResult {
                truncated: sanitized,
                is_truncated: false,
            };
        }

        self.truncate(&sanitized, self.config.preview_max_length)
            .with_ellipsis(&self.config.ellipsis)
    }

    /// 纯文本预览（<p> 包裹）
    pub fn create_preview(&self, html: &str, max_length: usize) -> String {
        HtmlTruncator::plain_preview(&self.parser, html, max_length, &self.config.ellipsis)
    }

    /// 纯文本预览（使用配置中的预算）
    pub fn create_default_preview(&self, html: &str) -> String {
        self.create_preview(html, self.config.plain_preview_max_length)
    }
}
