//! 混合来源内容渲染
//! textarea 编辑器产生带换行的纯文本，富文本编辑器产生HTML，两者都要能直接注入渲染面

use super::detector::is_likely_html;

/// 默认换行标签
pub const DEFAULT_LINE_BREAK: &str = "<br/>";

/// 渲染课程内容（默认换行标签）
pub fn render_lesson_content(content: &str) -> String {
    render_lesson_content_with(content, DEFAULT_LINE_BREAK)
}

/// 渲染课程内容
///
/// HTML内容原样返回（不在这里净化）；纯文本先转义 `& < > " '`，再把 `\n` 换成换行标签。
/// 转义是单遍完成的，已有的实体文本（如 `&amp;`）只会被转义一次
pub fn render_lesson_content_with(content: &str, line_break_tag: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    if is_likely_html(content) {
        return content.to_string();
    }

    html_escape::encode_quoted_attribute(content).replace('\n', line_break_tag)
}
