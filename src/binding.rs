use alloc::boxed::Box;

use crate::{ListRange, Orientation, Subscription, ViewportError};

/// The render side of a viewport: something that materializes views for the rendered range.
///
/// [`crate::VirtualForOf`] is the stock implementation. A viewport holds its binding behind
/// `Rc<RefCell<..>>` and only calls into it from its own methods, never from inside a
/// data-length handler.
pub trait RenderBinding {
    /// Current length of the bound data.
    fn data_length(&self) -> usize;

    /// Subscribes to data-length notifications, emitted on every data emission.
    fn subscribe_data_length(&mut self, handler: Box<dyn FnMut(&usize)>) -> Subscription;

    fn unsubscribe_data_length(&mut self, subscription: Subscription);

    /// Called synchronously whenever the viewport's rendered range changes.
    fn on_rendered_range_changed(&mut self, range: ListRange);

    /// Brings the materialized views up to date. Runs once per viewport flush.
    fn check(&mut self);

    /// Total extent of the rendered items in `range` along `orientation`.
    ///
    /// Fails with [`ViewportError::RangeNotRendered`] when `range` is not fully rendered.
    fn measure_range_size(
        &self,
        range: ListRange,
        orientation: Orientation,
    ) -> Result<f64, ViewportError>;
}
