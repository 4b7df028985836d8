//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定位引擎本身是全函数，不会失败；错误只来自外围协作者
//! （剪贴板、卡组解码、配置文件读写）。这些失败统一收敛为 `AppError`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `std::io::Error`、`serde_json::Error` 提供 `From` 转换，配合 `?` 使用。
//! - 实现 `Serialize` 将错误序列化为字符串，便于跨 JSON / IPC 边界返回。

use serde::Serialize;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板写入失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 卡组字符串解码失败
    #[error("卡组解码失败: {0}")]
    Decode(String),

    /// 配置文件内容不可用
    #[error("配置错误: {0}")]
    Config(String),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化 / 反序列化失败
    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
