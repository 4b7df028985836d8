//! 剪贴板写入模块
//!
//! # 设计思路
//!
//! 复制文本是外围能力，失败不应影响界面其他部分：
//! - `ClipboardWriter` trait 隔离平台剪贴板，测试可替换为内存实现。
//! - `SystemClipboard` 委托 `arboard`，首次写入时才打开剪贴板。
//! - `copy_text` 吞掉错误，只记录日志并返回是否成功。

use crate::error::AppError;

/// 文本剪贴板写入端
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// 基于 `arboard` 的系统剪贴板
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, AppError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| AppError::Clipboard("剪贴板未打开".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.clipboard()?
            .set_text(text)
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// 复制文本到剪贴板；失败只记日志，不向上传播
pub fn copy_text<W: ClipboardWriter + ?Sized>(writer: &mut W, text: &str) -> bool {
    match writer.write_text(text) {
        Ok(()) => {
            log::debug!("已复制 {} 个字符到剪贴板", text.chars().count());
            true
        }
        Err(err) => {
            log::warn!("Copy failed: {err}");
            false
        }
    }
}
