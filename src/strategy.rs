use alloc::boxed::Box;

use crate::{ContentAnchor, ListRange, Orientation, ScrollBehavior, ViewportError};

/// The viewport surface a [`VirtualScrollStrategy`] is allowed to use.
///
/// Strategies read and write viewport state only through these accessors, which keeps them
/// independent of the rendering backend and testable against a plain struct.
pub trait Viewport {
    fn orientation(&self) -> Orientation;

    /// Number of items in the attached render binding's data.
    fn data_length(&self) -> usize;

    /// Size of the viewport along the scroll axis, as of the last measurement.
    fn viewport_size(&self) -> f64;

    fn rendered_range(&self) -> ListRange;

    fn measure_scroll_offset(&self) -> f64;

    fn measure_rendered_content_size(&self) -> f64;

    fn measure_range_size(&self, range: ListRange) -> Result<f64, ViewportError>;

    /// `None` while an end-anchored offset waits to be rewritten on the next flush.
    fn offset_to_rendered_content_start(&self) -> Option<f64>;

    fn set_total_content_size(&mut self, size: f64);

    fn set_rendered_range(&mut self, range: ListRange);

    fn set_rendered_content_offset(&mut self, offset: f64, anchor: ContentAnchor);

    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Reports the index of the first visible item. Published, deduplicated, after the next
    /// flush completes.
    fn report_scrolled_index(&mut self, index: usize);
}

/// Computes the rendered range of a viewport from its scroll state.
///
/// Every callback receives the viewport it is attached to; a strategy never stores a reference
/// to it, so a torn-down viewport simply stops calling in.
pub trait VirtualScrollStrategy {
    /// Called once, after the viewport has measured itself for the first time.
    ///
    /// Fails with [`ViewportError::StrategyAlreadyAttached`] until [`Self::detach`] has run.
    fn attach(&mut self, viewport: &mut dyn Viewport) -> Result<(), ViewportError>;

    fn detach(&mut self);

    fn on_content_scrolled(&mut self, viewport: &mut dyn Viewport);

    /// Called when the data length or the viewport size changed.
    fn on_data_length_changed(&mut self, viewport: &mut dyn Viewport);

    /// Called after a rendered range change has been flushed.
    fn on_content_rendered(&mut self, viewport: &mut dyn Viewport);

    /// Called after a content offset change has been flushed.
    fn on_rendered_offset_changed(&mut self, viewport: &mut dyn Viewport);

    fn scroll_to_index(
        &mut self,
        viewport: &mut dyn Viewport,
        index: usize,
        behavior: ScrollBehavior,
    );
}

impl<S: VirtualScrollStrategy + ?Sized> VirtualScrollStrategy for Box<S> {
    fn attach(&mut self, viewport: &mut dyn Viewport) -> Result<(), ViewportError> {
        (**self).attach(viewport)
    }

    fn detach(&mut self) {
        (**self).detach();
    }

    fn on_content_scrolled(&mut self, viewport: &mut dyn Viewport) {
        (**self).on_content_scrolled(viewport);
    }

    fn on_data_length_changed(&mut self, viewport: &mut dyn Viewport) {
        (**self).on_data_length_changed(viewport);
    }

    fn on_content_rendered(&mut self, viewport: &mut dyn Viewport) {
        (**self).on_content_rendered(viewport);
    }

    fn on_rendered_offset_changed(&mut self, viewport: &mut dyn Viewport) {
        (**self).on_rendered_offset_changed(viewport);
    }

    fn scroll_to_index(
        &mut self,
        viewport: &mut dyn Viewport,
        index: usize,
        behavior: ScrollBehavior,
    ) {
        (**self).scroll_to_index(viewport, index, behavior);
    }
}
