//! 日志用的HTML片段摘要

use std::fmt;

/// 生成日志摘要：空白折叠为单个空格，控制字符转义，超出 `max_chars` 时标注剩余字符数
pub fn log_snippet(html: &str, max_chars: usize) -> LogSnippet<'_> {
    LogSnippet { html, max_chars }
}

/// 惰性格式化的片段摘要，只在日志真正输出时遍历原串
#[derive(Clone, Copy)]
pub struct LogSnippet<'a> {
    html: &'a str,
    max_chars: usize,
}

impl fmt::Display for LogSnippet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        let mut in_whitespace = false;
        let mut chars = self.html.chars();

        while written < self.max_chars {
            let Some(ch) = chars.next() else {
                return Ok(());
            };

            if ch.is_whitespace() {
                if !in_whitespace {
                    f.write_str(" ")?;
                    written += 1;
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;

            if ch.is_control() {
                write!(f, "{}", ch.escape_unicode())?;
            } else {
                write!(f, "{}", ch)?;
            }
            written += 1;
        }

        let rest = chars.count();
        if rest > 0 {
            write!(f, "…(+{})", rest)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogSnippet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}
