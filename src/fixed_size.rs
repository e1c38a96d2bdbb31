use crate::range::clamp;
use crate::{
    ContentAnchor, ListRange, ScrollBehavior, StrategyConfig, ViewportError, Viewport,
    VirtualScrollStrategy,
};

/// Result of a fixed-size range computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSizeRange {
    pub range: ListRange,
    /// Index of the first (possibly partially) visible item.
    pub first_visible_index: usize,
    /// Offset of `range.start` from the start of the content.
    pub content_offset: f64,
}

impl StrategyConfig {
    /// Total extent of `data_length` items.
    pub fn total_content_size(&self, data_length: usize) -> f64 {
        data_length as f64 * self.item_size
    }

    /// Computes the rendered range for a scroll position.
    ///
    /// The visible window starts at `floor(scroll_offset / item_size)` and covers
    /// `ceil((viewport_size + remainder) / item_size)` items, where `remainder` is the part of the
    /// first item scrolled out of view. `buffer_size` items are then added before (first) and
    /// after, and both ends are clamped into `[0, data_length]`.
    ///
    /// If the first visible index lies past the last full page (the data shrank while scrolled
    /// far down) it is pulled back so the last page stays rendered.
    pub fn compute_range(
        &self,
        scroll_offset: f64,
        viewport_size: f64,
        data_length: usize,
    ) -> FixedSizeRange {
        let item_size = self.item_size;
        let scroll_offset = scroll_offset.max(0.0);
        let viewport_size = viewport_size.max(0.0);

        let mut first = (scroll_offset / item_size).floor();
        let mut remainder = scroll_offset % item_size;

        let max_visible_items = (viewport_size / item_size).ceil();
        let last_page_start = (data_length as f64 - max_visible_items).max(0.0);
        if first > last_page_start {
            first = last_page_start;
            remainder = 0.0;
        }

        // Float → usize casts saturate, so nothing here can wrap.
        let first_visible_index = first as usize;
        let visible_items = ((viewport_size + remainder) / item_size).ceil() as usize;

        let start = first_visible_index.saturating_sub(self.buffer_size);
        let end = first_visible_index
            .saturating_add(visible_items)
            .saturating_add(self.buffer_size);
        let range = ListRange::new(start, end).clamped(data_length);

        let total = self.total_content_size(data_length);
        let content_offset = clamp(item_size * range.start as f64, 0.0, total);

        FixedSizeRange {
            range,
            first_visible_index,
            content_offset,
        }
    }
}

/// A strategy for lists whose items all have the same extent along the scroll axis.
#[derive(Clone, Debug)]
pub struct FixedSizeStrategy {
    config: StrategyConfig,
    attached: bool,
}

impl FixedSizeStrategy {
    pub fn new(item_size: f64, buffer_size: usize) -> Result<Self, ViewportError> {
        Ok(Self::from_config(StrategyConfig::new(item_size, buffer_size)?))
    }

    /// `config` is trusted; use [`StrategyConfig::new`] to build a validated one.
    pub fn from_config(config: StrategyConfig) -> Self {
        Self {
            config,
            attached: false,
        }
    }

    pub fn config(&self) -> StrategyConfig {
        self.config
    }

    pub fn item_size(&self) -> f64 {
        self.config.item_size
    }

    pub fn buffer_size(&self) -> usize {
        self.config.buffer_size
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Replaces the configuration and, when attached, recomputes the content size and range.
    ///
    /// On error the previous configuration is kept.
    pub fn update_item_and_buffer_size(
        &mut self,
        viewport: &mut dyn Viewport,
        item_size: f64,
        buffer_size: usize,
    ) -> Result<(), ViewportError> {
        self.config = StrategyConfig::new(item_size, buffer_size)?;
        vdebug!(item_size, buffer_size, "FixedSizeStrategy::update_item_and_buffer_size");
        if self.attached {
            self.update_total_content_size(viewport);
            self.update_rendered_range(viewport);
        }
        Ok(())
    }

    fn update_total_content_size(&self, viewport: &mut dyn Viewport) {
        let size = self.config.total_content_size(viewport.data_length());
        viewport.set_total_content_size(size);
    }

    fn update_rendered_range(&self, viewport: &mut dyn Viewport) {
        let computed = self.config.compute_range(
            viewport.measure_scroll_offset(),
            viewport.viewport_size(),
            viewport.data_length(),
        );
        vtrace!(
            start = computed.range.start,
            end = computed.range.end,
            first_visible = computed.first_visible_index,
            "FixedSizeStrategy::update_rendered_range"
        );
        viewport.set_rendered_range(computed.range);
        viewport.set_rendered_content_offset(computed.content_offset, ContentAnchor::ToStart);
        viewport.report_scrolled_index(computed.first_visible_index);
    }
}

impl VirtualScrollStrategy for FixedSizeStrategy {
    fn attach(&mut self, viewport: &mut dyn Viewport) -> Result<(), ViewportError> {
        if self.attached {
            return Err(ViewportError::StrategyAlreadyAttached);
        }
        self.attached = true;
        self.update_total_content_size(viewport);
        self.update_rendered_range(viewport);
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn on_content_scrolled(&mut self, viewport: &mut dyn Viewport) {
        if self.attached {
            self.update_rendered_range(viewport);
        }
    }

    fn on_data_length_changed(&mut self, viewport: &mut dyn Viewport) {
        if self.attached {
            self.update_total_content_size(viewport);
            self.update_rendered_range(viewport);
        }
    }

    fn on_content_rendered(&mut self, _viewport: &mut dyn Viewport) {}

    fn on_rendered_offset_changed(&mut self, _viewport: &mut dyn Viewport) {}

    fn scroll_to_index(
        &mut self,
        viewport: &mut dyn Viewport,
        index: usize,
        behavior: ScrollBehavior,
    ) {
        if !self.attached {
            return;
        }
        let total = self.config.total_content_size(viewport.data_length());
        let offset = clamp(index as f64 * self.config.item_size, 0.0, total);
        viewport.scroll_to_offset(offset, behavior);
    }
}
