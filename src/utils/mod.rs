//! 通用工具模块
pub mod snippet;

pub use self::snippet::{LogSnippet, log_snippet};
