//! rsrichtext - 课程富文本（HTML）处理引擎
//! 内容类型检测、黑名单净化、判空、纯文本投影与保留结构的截断

// 导出全局错误类型
pub use self::error::{RichTextError, RtResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, RichTextConfig};

// 导出片段解析模块核心接口
pub use self::parser::{
    Element, ElementNamespace, Fragment, FragmentParser, FragmentSerializer, FragmentTreeBuilder,
    Html5everFragmentParser, HtmlAttr, Node,
};

// 导出内容模块核心接口
pub use self::content::{ContentKind, EMPTY_EDITOR_SENTINELS, is_rich_text_empty_opt};

// 导出净化模块核心接口
pub use self::sanitizer::{HtmlSanitizer, SanitizePolicy, SanitizeReport};

// 导出截断模块核心接口
pub use self::truncate::{HtmlTruncator, TruncationResult};

// 导出处理模块核心接口（含全局简化接口）
pub use self::processor::{
    RichTextProcessor,
    global_processor,
    init_rich_text,
    init_rich_text_with_config,
    is_likely_html,
    render_lesson_content,
    sanitize_html,
    is_rich_text_empty,
    get_plain_text_from_html,
    get_rich_text_length,
    truncate_html,
    render_preview,
    create_rich_text_preview,
    create_default_rich_text_preview,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod parser;
pub mod content;
pub mod sanitizer;
pub mod truncate;
pub mod utils;
pub mod processor;
