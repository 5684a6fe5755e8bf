//! 截断模块
pub mod truncator;

pub use self::truncator::{HtmlTruncator, TruncationResult};
