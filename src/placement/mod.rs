//! 提示框定位模块
//!
//! 给定内容框、指针（小箭头）与视口尺寸，计算内容框的平移量与指针的
//! 平移 / 水平镜像，使内容框完整留在视口内，指针仍连接内容框与锚点。
//!
//! # 设计思路
//!
//! 1. **纯函数**：`compute` 无状态、无 I/O，任意顺序、任意线程调用互不影响。
//! 2. **两轴解耦**：横向溢出用"翻转"，纵向溢出用"滑动"，两套逻辑各自独立。
//! 3. **时序由调用方负责**：测量必须发生在布局稳定之后，本模块不感知帧。
//!
//! # 子模块
//!
//! - `geometry`：输入输出类型与默认常量。
//! - `calculation`：横向翻转、纵向收敛与组合。
//! - `transform`：把结果转换为可直接应用的 CSS 变换。

pub mod calculation;
pub mod geometry;
pub mod transform;

pub use calculation::{compute, horizontal_flip, vertical_clamp, HorizontalPlacement, VerticalPlacement};
pub use geometry::{PlacementConfig, PlacementRequest, PlacementResult, Rect, Viewport};
pub use transform::{ElementTransform, TooltipTransforms};
