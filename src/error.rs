use thiserror::Error;

use crate::ListRange;

/// Failures surfaced synchronously by the viewport, its strategies and render bindings.
///
/// Every variant is a caller error: nothing here is retried internally, because each operation
/// is synchronous and idempotent for unchanged inputs.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ViewportError {
    /// `attach` was called while a render binding is already attached.
    #[error("virtual scroll viewport is already attached to a render binding")]
    AlreadyAttached,

    /// A strategy's `attach` was called again without an intervening `detach`.
    #[error("virtual scroll strategy is already attached to a viewport")]
    StrategyAlreadyAttached,

    /// A range measurement asked for items outside the currently rendered window.
    #[error("attempted to measure range {requested} but only {rendered} is rendered")]
    RangeNotRendered {
        requested: ListRange,
        rendered: ListRange,
    },

    /// A fixed item size must be finite and strictly positive.
    #[error("item size must be a finite number greater than zero (got {0})")]
    InvalidItemSize(f64),

    /// The viewport was detached; its notification channels are closed.
    #[error("virtual scroll viewport has been detached and cannot be reused")]
    Destroyed,
}
