//! 全局处理器单例管理
//! 未显式初始化时，首次调用自动使用默认配置
use once_cell::sync::OnceCell;
use tracing::warn;

use super::processor::RichTextProcessor;
use crate::config::{ConfigManager, RichTextConfig};
use crate::error::{RichTextError, RtResult};
use crate::truncate::TruncationResult;

/// 全局处理器实例
static GLOBAL_PROCESSOR: OnceCell<RichTextProcessor> = OnceCell::new();

/// 初始化全局处理器（默认配置）
pub fn init_rich_text() -> RtResult<()> {
    init_rich_text_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局处理器
pub fn init_rich_text_with_config(config: RichTextConfig) -> RtResult<()> {
    if GLOBAL_PROCESSOR.get().is_some() {
        warn!("全局富文本处理器已初始化，忽略重复初始化");
        return Ok(());
    }

    let processor = RichTextProcessor::new(config)?;
    GLOBAL_PROCESSOR
        .set(processor)
        .map_err(|_| RichTextError::AlreadyInitialized)?;

    Ok(())
}

/// 获取全局处理器
pub fn global_processor() -> &'static RichTextProcessor {
    GLOBAL_PROCESSOR.get_or_init(RichTextProcessor::default)
}

// 对外暴露的简化接口（全部为全函数，不会失败）
pub fn is_likely_html(content: &str) -> bool {
    global_processor().is_likely_html(content)
}

pub fn render_lesson_content(content: &str) -> String {
    global_processor().render_lesson_content(content)
}

pub fn sanitize_html(html: &str) -> String {
    global_processor().sanitize(html)
}

pub fn is_rich_text_empty(html: &str) -> bool {
    global_processor().is_empty(html)
}

pub fn get_plain_text_from_html(html: &str) -> String {
    global_processor().plain_text(html)
}

pub fn get_rich_text_length(html: &str) -> usize {
    global_processor().plain_text_length(html)
}

pub fn truncate_html(html: &str, max_length: usize) -> TruncationResult {
    global_processor().truncate(html, max_length)
}

pub fn render_preview(content: &str, expanded: bool) -> TruncationResult {
    global_processor().render_preview(content, expanded)
}

pub fn create_rich_text_preview(html: &str, max_length: usize) -> String {
    global_processor().create_preview(html, max_length)
}

pub fn create_default_rich_text_preview(html: &str) -> String {
    global_processor().create_default_preview(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_facade_properties() {
        init_rich_text().unwrap();
        // 重复初始化是无害的
        init_rich_text().unwrap();

        assert_eq!(render_lesson_content(""), "");
        assert!(is_likely_html("<p>hi</p>"));
        assert!(!is_likely_html("a < b"));

        assert!(!sanitize_html(r#"<p onclick="alert(1)">hi</p>"#).contains("onclick"));
        let no_script = sanitize_html("<script>alert(1)</script><p>safe</p>");
        assert!(!no_script.contains("<script"));
        assert!(no_script.contains("<p>safe</p>"));
        assert_eq!(sanitize_html(r#"<a href="javascript:alert(1)">x</a>"#), "<a>x</a>");

        for empty in ["", "   ", "<p><br></p>", "<p></p>"] {
            assert!(is_rich_text_empty(empty), "{:?}", empty);
        }
        assert!(!is_rich_text_empty("<p>hello</p>"));

        assert_eq!(get_plain_text_from_html("<p>Sure <i>e</i> Fatiha</p>"), "Sure e Fatiha");
        assert_eq!(get_rich_text_length("<p>Sure <i>e</i> Fatiha</p>"), 13);

        let html = "<p>Hello <b>world</b></p>";
        assert_eq!(truncate_html(html, 100), TruncationResult::unchanged(html));
        assert!(truncate_html(html, 3).is_truncated);

        assert_eq!(create_rich_text_preview("<p>abcdef</p>", 3), "<p>abc...</p>");
        assert_eq!(create_default_rich_text_preview("<p>abcdef</p>"), "<p>abcdef</p>");
        assert!(!render_preview("<p>abc</p>", false).is_truncated);
    }
}
