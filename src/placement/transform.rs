//! 定位结果 → 视觉变换
//!
//! 引擎只输出增量；真正作用到元素上的是两组变换：
//! - 内容框：`translate(-contentOffsetX, contentOffsetY)`
//! - 指针：`translate(pointerOffsetX, pointerOffsetY) scaleX(pointerScaleX)`

use std::fmt;

use serde::Serialize;

use super::geometry::{PlacementConfig, PlacementResult};

/// 单个元素的二维变换
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
}

impl ElementTransform {
    /// 渲染为 CSS `transform` 属性值
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

// -0 显示为 "0"
fn px(value: f64) -> f64 {
    value + 0.0
}

impl fmt::Display for ElementTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", px(self.translate_x), px(self.translate_y))?;
        if let Some(scale) = self.scale_x {
            write!(f, " scaleX({})", px(scale))?;
        }
        Ok(())
    }
}

/// 一个提示框的内容框与指针变换
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipTransforms {
    pub content: ElementTransform,
    pub pointer: ElementTransform,
}

impl TooltipTransforms {
    pub fn from_result(result: &PlacementResult, config: &PlacementConfig) -> Self {
        Self {
            content: ElementTransform {
                translate_x: -result.content_offset_x,
                translate_y: result.content_offset_y,
                scale_x: None,
            },
            pointer: ElementTransform {
                translate_x: result.pointer_offset_x,
                translate_y: config.pointer_offset_y,
                scale_x: Some(result.pointer_scale_x),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_renders_without_negative_zero() {
        let transforms =
            TooltipTransforms::from_result(&PlacementResult::IDENTITY, &PlacementConfig::default());

        assert_eq!(transforms.content.to_css(), "translate(0px, 0px)");
        assert_eq!(transforms.pointer.to_css(), "translate(0px, 16px) scaleX(1)");
    }

    #[test]
    fn flipped_result_negates_content_x() {
        let result = PlacementResult {
            content_offset_x: 450.0,
            content_offset_y: -46.0,
            pointer_offset_x: -230.0,
            pointer_scale_x: -1.0,
        };

        let transforms = TooltipTransforms::from_result(&result, &PlacementConfig::default());

        assert_eq!(transforms.content.to_css(), "translate(-450px, -46px)");
        assert_eq!(transforms.pointer.to_css(), "translate(-230px, 16px) scaleX(-1)");
    }

    #[test]
    fn fractional_offsets_keep_precision() {
        let t = ElementTransform { translate_x: 12.5, translate_y: -0.25, scale_x: None };
        assert_eq!(t.to_css(), "translate(12.5px, -0.25px)");
    }

    #[test]
    fn pointer_offset_y_follows_config() {
        let config = PlacementConfig { pointer_offset_y: 8.0, ..PlacementConfig::default() };
        let transforms = TooltipTransforms::from_result(&PlacementResult::IDENTITY, &config);
        assert_eq!(transforms.pointer.translate_y, 8.0);
    }
}
