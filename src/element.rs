use crate::{ContentTransform, ElementSize, Orientation, ScrollBehavior};

/// The scroll container a viewport renders into.
///
/// This is the only surface through which the engine touches the host UI. Implementations wrap
/// a DOM node, a terminal region, a retained-mode widget, or a test double. The viewport owns its
/// element exclusively; strategies never see it.
pub trait ScrollElement {
    /// Size of the visible area of the container.
    fn client_size(&self) -> ElementSize;

    /// Size of the full scrollable area (spacer included).
    fn scroll_size(&self) -> ElementSize;

    /// Current scroll position along `orientation`, measured from the top/left edge.
    fn scroll_offset(&self, orientation: Orientation) -> f64;

    /// Assigns the scroll position directly, without animation.
    fn set_scroll_offset(&mut self, orientation: Orientation, offset: f64);

    /// Native scroll request that may animate when `behavior` is `Smooth`.
    ///
    /// Only called when the platform reports native `scroll-behavior` support. The default
    /// falls back to direct assignment.
    fn scroll_to(&mut self, orientation: Orientation, offset: f64, behavior: ScrollBehavior) {
        let _ = behavior;
        self.set_scroll_offset(orientation, offset);
    }

    /// Visual size of the wrapper that holds the rendered items.
    fn rendered_content_size(&self) -> ElementSize;

    fn set_content_transform(&mut self, transform: &ContentTransform);

    /// Sizes the spacer so the scrollbar reflects `size` pixels of content along `orientation`.
    fn set_spacer_size(&mut self, orientation: Orientation, size: f64);
}
