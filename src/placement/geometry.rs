//! 定位输入 / 输出的几何类型
//!
//! 坐标系与浏览器视口一致：原点在左上角，Y 轴向下增大。
//! 所有类型均为 `Copy` 快照，字段名按 camelCase 序列化，便于与前端互通。

use serde::{Deserialize, Serialize};

/// 轴对齐矩形（测量时刻的快照）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// 右边缘坐标
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// 下边缘坐标
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// 当前可见区域尺寸
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 屏幕边缘最小留白
pub const DEFAULT_SCREEN_PADDING: f64 = 16.0;
/// 翻转时的名义水平位移（一列的宽度）
pub const DEFAULT_COLUMN_WIDTH: f64 = 250.0;
/// 内容框圆角半径，纵向收敛时为指针预留
pub const DEFAULT_CONTENT_RADIUS: f64 = 15.0;
/// 指针相对挂载点的固定纵向位移
pub const DEFAULT_POINTER_OFFSET_Y: f64 = 16.0;

/// 定位常量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementConfig {
    pub screen_padding: f64,
    pub column_width: f64,
    pub content_radius: f64,
    pub pointer_offset_y: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            screen_padding: DEFAULT_SCREEN_PADDING,
            column_width: DEFAULT_COLUMN_WIDTH,
            content_radius: DEFAULT_CONTENT_RADIUS,
            pointer_offset_y: DEFAULT_POINTER_OFFSET_Y,
        }
    }
}

/// 一次定位计算的完整输入
///
/// `pointer` 在未翻转状态下挂在 `content` 的下边缘附近，
/// 其纵向位置以 `content` 的下边缘为参照。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub content: Rect,
    pub pointer: Rect,
    pub viewport: Viewport,
    #[serde(default)]
    pub config: PlacementConfig,
}

/// 定位结果：作用于已布局元素的增量，而非绝对坐标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    pub content_offset_x: f64,
    pub content_offset_y: f64,
    pub pointer_offset_x: f64,
    pub pointer_scale_x: f64,
}

impl PlacementResult {
    /// 无需任何调整时的结果
    pub const IDENTITY: Self = Self {
        content_offset_x: 0.0,
        content_offset_y: 0.0,
        pointer_offset_x: 0.0,
        pointer_scale_x: 1.0,
    };

    /// 指针是否被水平镜像（内容框已翻到锚点左侧）
    pub fn is_flipped(&self) -> bool {
        self.pointer_scale_x < 0.0
    }
}

impl Default for PlacementResult {
    fn default() -> Self {
        Self::IDENTITY
    }
}
