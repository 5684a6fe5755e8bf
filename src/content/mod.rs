//! 内容模块：类型检测、纯文本渲染、纯文本投影与判空
pub mod detector;
pub mod renderer;
pub mod text;

pub use self::detector::{ContentKind, is_likely_html};
pub use self::renderer::{DEFAULT_LINE_BREAK, render_lesson_content, render_lesson_content_with};
pub use self::text::{
    EMPTY_EDITOR_SENTINELS, is_rich_text_empty, is_rich_text_empty_opt, plain_text, plain_text_length,
};
