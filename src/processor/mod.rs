//! 处理模块：富文本处理器与全局简化接口
pub mod global;
pub mod processor;

// 导出核心接口
pub use self::global::{
    create_default_rich_text_preview, create_rich_text_preview, get_plain_text_from_html,
    get_rich_text_length, global_processor, init_rich_text, init_rich_text_with_config,
    is_likely_html, is_rich_text_empty, render_lesson_content, render_preview, sanitize_html,
    truncate_html,
};
pub use self::processor::RichTextProcessor;
