//! A headless windowed-rendering engine for long scrollable lists.
//!
//! Only the items intersecting the visible window (plus a buffer) are materialized. The crate is
//! split the same way the work is:
//! - [`VirtualScrollViewport`] owns the scroll container, batches layout writes and dispatches
//!   scroll, resize and data events
//! - a [`VirtualScrollStrategy`] (e.g. [`FixedSizeStrategy`]) maps scroll position to a
//!   rendered range
//! - a [`RenderBinding`] (e.g. [`VirtualForOf`]) materializes views for that range, recycling
//!   detached ones through a bounded template cache
//!
//! It is UI-agnostic. A host adapter is expected to provide a [`ScrollElement`], a
//! [`ViewRenderer`], and to forward scroll events, window resizes and animation frames.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod binding;
mod data_source;
mod differ;
mod element;
mod error;
mod fixed_size;
mod for_of;
mod key;
mod notifier;
mod options;
mod range;
mod ruler;
mod strategy;
mod types;
mod view_cache;
mod viewport;


pub use binding::RenderBinding;
pub use data_source::{ArrayDataSource, CollectionViewer, DataSource, DataStream, ForOfSource};
pub use differ::{DiffOperation, IterableDiffer};
pub use element::ScrollElement;
pub use error::ViewportError;
pub use fixed_size::{FixedSizeRange, FixedSizeStrategy};
pub use for_of::{ViewContext, ViewRenderer, VirtualForOf};
pub use notifier::{Notifier, Subscription};
pub use options::{
    DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_TEMPLATE_CACHE_SIZE, ForOfOptions, PlatformCapabilities,
    StrategyConfig, TrackByFn, ViewportOptions,
};
pub use range::{ListRange, clamp, ranges_equal};
pub use ruler::ViewportRuler;
pub use strategy::{Viewport, VirtualScrollStrategy};
pub use types::{
    ContentAnchor, ContentTransform, Direction, ElementSize, Orientation, ScrollBehavior,
    ScrollEdge,
};
pub use view_cache::ViewHandle;
pub use viewport::VirtualScrollViewport;

#[doc(hidden)]
pub use key::TrackKey;
