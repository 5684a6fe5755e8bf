//! 全局错误类型定义
//! 富文本处理本身是全函数（任何输入都不会报错），错误只出现在配置、IO与命令行边界

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RichTextError {
    // 配置相关错误
    #[error("配置校验失败：{0}")]
    ConfigError(String),
    #[error("配置加载失败：{0}")]
    ConfigLoadError(String),

    // 全局处理器相关错误
    #[error("全局处理器已初始化")]
    AlreadyInitialized,

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RtResult<T> = Result<T, RichTextError>;
