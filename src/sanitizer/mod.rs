//! 净化模块：黑名单式HTML净化
pub mod policy;
pub mod sanitizer;

pub use self::policy::SanitizePolicy;
pub use self::sanitizer::{HtmlSanitizer, SanitizeReport};
