//! 提示框外壳：元素查找、定位与按帧批处理
//!
//! # 设计思路
//!
//! 界面层持有真实元素，本模块只通过 `LayoutSource` 读取测量结果，
//! 因此既可接浏览器 DOM，也可在测试中用内存实现替代。
//!
//! # 实现思路
//!
//! - 每个提示框由 `<id>-content` 与 `<id>-pointer` 两个元素组成。
//! - 任一元素缺失时静默放弃本次定位（记录 debug 日志），不视为错误。
//! - `PlacementQueue` 记录待重算的提示框，调用方在布局稳定后（下一帧）统一 `flush`。

use crate::placement::{self, PlacementConfig, PlacementRequest, Rect, TooltipTransforms, Viewport};

/// 布局测量来源
pub trait LayoutSource {
    /// 元素的视口坐标包围盒；元素不存在时返回 `None`
    fn bounding_rect(&self, element_id: &str) -> Option<Rect>;

    /// 当前视口尺寸
    fn viewport(&self) -> Viewport;
}

pub fn content_element_id(tooltip_id: &str) -> String {
    format!("{tooltip_id}-content")
}

pub fn pointer_element_id(tooltip_id: &str) -> String {
    format!("{tooltip_id}-pointer")
}

/// 按固定配置为提示框计算变换
#[derive(Debug, Clone, Default)]
pub struct TooltipPlacer {
    config: PlacementConfig,
}

impl TooltipPlacer {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// 测量指定提示框并构造定位请求
    pub fn measure<S: LayoutSource + ?Sized>(
        &self,
        source: &S,
        tooltip_id: &str,
    ) -> Option<PlacementRequest> {
        let content = source.bounding_rect(&content_element_id(tooltip_id));
        let pointer = source.bounding_rect(&pointer_element_id(tooltip_id));
        let (Some(content), Some(pointer)) = (content, pointer) else {
            log::debug!("提示框 {tooltip_id} 的元素不存在，跳过定位");
            return None;
        };

        Some(PlacementRequest {
            content,
            pointer,
            viewport: source.viewport(),
            config: self.config,
        })
    }

    /// 重新定位指定提示框，返回应作用到内容框与指针上的变换
    pub fn fix_placement<S: LayoutSource + ?Sized>(
        &self,
        source: &S,
        tooltip_id: &str,
    ) -> Option<TooltipTransforms> {
        let request = self.measure(source, tooltip_id)?;
        let result = placement::compute(&request);
        Some(TooltipTransforms::from_result(&result, &self.config))
    }
}

/// 待重算提示框队列（去重，保持请求顺序）
#[derive(Debug, Default)]
pub struct PlacementQueue {
    pending: Vec<String>,
}

impl PlacementQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一次重算请求；同一帧内重复请求只保留一次
    pub fn request(&mut self, tooltip_id: impl Into<String>) {
        let tooltip_id = tooltip_id.into();
        if !self.is_pending(&tooltip_id) {
            self.pending.push(tooltip_id);
        }
    }

    pub fn is_pending(&self, tooltip_id: &str) -> bool {
        self.pending.iter().any(|id| id == tooltip_id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// 布局稳定后调用：清空队列并逐个计算
    pub fn flush<S: LayoutSource + ?Sized>(
        &mut self,
        placer: &TooltipPlacer,
        source: &S,
    ) -> Vec<(String, Option<TooltipTransforms>)> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|id| {
                let transforms = placer.fix_placement(source, &id);
                (id, transforms)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeLayout {
        rects: HashMap<String, Rect>,
        viewport: Viewport,
    }

    impl LayoutSource for FakeLayout {
        fn bounding_rect(&self, element_id: &str) -> Option<Rect> {
            self.rects.get(element_id).copied()
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }
    }

    fn layout_with(id: &str, content: Rect, pointer: Rect) -> FakeLayout {
        let mut rects = HashMap::new();
        rects.insert(content_element_id(id), content);
        rects.insert(pointer_element_id(id), pointer);
        FakeLayout { rects, viewport: Viewport::new(1280.0, 800.0) }
    }

    #[test]
    fn element_ids_use_suffixes() {
        assert_eq!(content_element_id("card-3"), "card-3-content");
        assert_eq!(pointer_element_id("card-3"), "card-3-pointer");
    }

    #[test]
    fn missing_pointer_skips_placement() {
        let mut layout = layout_with(
            "a",
            Rect::new(100.0, 100.0, 200.0, 80.0),
            Rect::new(180.0, 180.0, 20.0, 10.0),
        );
        layout.rects.remove(&pointer_element_id("a"));

        assert!(TooltipPlacer::default().fix_placement(&layout, "a").is_none());
    }

    #[test]
    fn unknown_tooltip_skips_placement() {
        let layout = layout_with(
            "a",
            Rect::new(100.0, 100.0, 200.0, 80.0),
            Rect::new(180.0, 180.0, 20.0, 10.0),
        );

        assert!(TooltipPlacer::default().fix_placement(&layout, "b").is_none());
    }

    #[test]
    fn fix_placement_flips_overflowing_tooltip() {
        let layout = layout_with(
            "a",
            Rect::new(1150.0, 100.0, 200.0, 80.0),
            Rect::new(1230.0, 180.0, 20.0, 10.0),
        );

        let transforms = TooltipPlacer::default()
            .fix_placement(&layout, "a")
            .expect("both elements exist");

        assert_eq!(transforms.content.to_css(), "translate(-450px, 0px)");
        assert_eq!(transforms.pointer.scale_x, Some(-1.0));
    }

    #[test]
    fn queue_deduplicates_and_drains() {
        let layout = layout_with(
            "a",
            Rect::new(100.0, 100.0, 200.0, 80.0),
            Rect::new(180.0, 180.0, 20.0, 10.0),
        );
        let placer = TooltipPlacer::default();
        let mut queue = PlacementQueue::new();

        queue.request("a");
        queue.request("missing");
        queue.request("a");
        assert_eq!(queue.len(), 2);
        assert!(queue.is_pending("a"));

        let flushed = queue.flush(&placer, &layout);

        assert!(queue.is_empty());
        assert_eq!(flushed.len(), 2);
        assert_eq!(flushed[0].0, "a");
        assert!(flushed[0].1.is_some());
        assert_eq!(flushed[1].0, "missing");
        assert!(flushed[1].1.is_none());
    }
}
