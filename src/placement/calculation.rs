//! 提示框定位计算模块
//!
//! 该模块实现"单视口内"的核心几何算法。内容框默认布局在锚点右侧，
//! 指针（小箭头）挂在内容框下边缘附近。
//!
//! # 设计思路
//!
//! - 横向溢出靠**翻转**解决：内容框整体移到锚点左侧，指针水平镜像。
//! - 纵向溢出靠**滑动**解决：内容框向上平移，不做镜像。
//! - 两轴各自是独立的纯函数，最后组合为 `PlacementResult`，可分别测试。
//! - 只用加减与比较，零尺寸输入不会产生除零或 NaN。

use super::geometry::{PlacementConfig, PlacementRequest, PlacementResult, Rect, Viewport};

/// 横向决策结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPlacement {
    /// 内容框向左移动的距离（应用时取反）
    pub content_offset_x: f64,
    pub pointer_offset_x: f64,
    pub pointer_scale_x: f64,
}

impl HorizontalPlacement {
    const UNFLIPPED: Self = Self {
        content_offset_x: 0.0,
        pointer_offset_x: 0.0,
        pointer_scale_x: 1.0,
    };
}

/// 纵向决策结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPlacement {
    /// 内容框纵向位移（负值表示上移）
    pub content_offset_y: f64,
}

/// 横向翻转判定
///
/// # 翻转规则
/// - 右边缘 + 留白超出视口宽度 → 翻到锚点左侧，位移为 `content.width + column_width`
/// - 左侧空间不足以容纳该位移 → 只移动到距左边缘 `screen_padding` 处
/// - 翻转后指针镜像，并沿内容框重新挂到对侧
pub fn horizontal_flip(
    content: &Rect,
    pointer: &Rect,
    viewport: &Viewport,
    config: &PlacementConfig,
) -> HorizontalPlacement {
    let overflows_right = content.right() + config.screen_padding > viewport.width;
    if !overflows_right {
        return HorizontalPlacement::UNFLIPPED;
    }

    let mut content_offset_x = content.width + config.column_width;
    if content.x < content_offset_x {
        content_offset_x = content.x - config.screen_padding;
    }

    log::debug!(
        "提示框右侧溢出 (right={} viewport={})，翻转到左侧 offset={}",
        content.right(),
        viewport.width,
        content_offset_x
    );

    HorizontalPlacement {
        content_offset_x,
        pointer_offset_x: content.width - content_offset_x + pointer.width,
        pointer_scale_x: -1.0,
    }
}

/// 纵向收敛判定
///
/// 下边缘 + 留白超出视口高度时上移内容框。上移后若指针（仍挂在原下边缘）
/// 伸出新的下边缘，再按伸出量加圆角半径修正位移。
pub fn vertical_clamp(
    content: &Rect,
    pointer: &Rect,
    viewport: &Viewport,
    config: &PlacementConfig,
) -> VerticalPlacement {
    let content_bottom = content.bottom();
    let overflow_y = content_bottom + config.screen_padding - viewport.height;
    let overflows_bottom = overflow_y > 0.0;
    if !overflows_bottom {
        return VerticalPlacement { content_offset_y: 0.0 };
    }

    let mut content_offset_y = -overflow_y;
    let pointer_position_wrt_content = pointer.bottom() - (content_bottom + content_offset_y);
    if pointer_position_wrt_content > 0.0 {
        content_offset_y += pointer_position_wrt_content + config.content_radius;
    }

    log::debug!(
        "提示框底部溢出 {}，纵向位移 {}",
        overflow_y,
        content_offset_y
    );

    VerticalPlacement { content_offset_y }
}

/// 计算提示框定位
///
/// 纯函数：相同输入必得相同输出，无隐藏状态，不会失败。
pub fn compute(request: &PlacementRequest) -> PlacementResult {
    let PlacementRequest { content, pointer, viewport, config } = request;

    let horizontal = horizontal_flip(content, pointer, viewport, config);
    let vertical = vertical_clamp(content, pointer, viewport, config);

    PlacementResult {
        content_offset_x: horizontal.content_offset_x,
        content_offset_y: vertical.content_offset_y,
        pointer_offset_x: horizontal.pointer_offset_x,
        pointer_scale_x: horizontal.pointer_scale_x,
    }
}
