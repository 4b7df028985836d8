//! # 卡组提示框工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 界面层 (DOM / webview)                   │
//! │   测量元素 ── 应用 transform ── 复制按钮 ── 卡组输入      │
//! └───────┬───────────────┬──────────────┬───────────────────┘
//!         ↕ LayoutSource  ↕ 剪贴板       ↕ DeckDecoder
//! ┌───────┼───────────────┼──────────────┼───────────────────┐
//! │  ├─ tooltip ──── 元素查找 + PlacementQueue (按帧批处理)   │
//! │  │   └─ placement   纯函数定位：翻转 + 纵向收敛           │
//! │  ├─ clipboard ── ClipboardWriter + arboard                │
//! │  ├─ deck ─────── 解码端口 (外部解码器)                    │
//! │  ├─ settings ─── 定位配置 JSON 读写                       │
//! │  └─ error ────── AppError (统一错误类型)                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`placement`] | 提示框定位核心算法与 CSS 变换 |
//! | [`tooltip`] | 按元素 id 测量、定位，以及待重算队列 |
//! | [`clipboard`] | 文本复制，失败不致命 |
//! | [`deck`] | 卡组解码调用约定 |
//! | [`settings`] | 定位配置的持久化 |
//! | [`error`] | 统一错误类型 `AppError` |

pub mod error;
pub mod clipboard;
pub mod deck;
pub mod placement;
pub mod settings;
pub mod tooltip;
