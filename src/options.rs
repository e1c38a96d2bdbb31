use alloc::rc::Rc;

use crate::{Direction, Orientation, ViewportError};

/// Default debounce applied to window resize notifications.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 20;

/// Default number of detached views a render coordinator keeps for reuse.
pub const DEFAULT_TEMPLATE_CACHE_SIZE: usize = 20;

/// What the host runtime can do.
///
/// When `is_browser` is `false` (e.g. server-side rendering) the viewport never touches its
/// element: measurements read as `0` and writes are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformCapabilities {
    pub is_browser: bool,
    /// Whether the element supports native animated scrolling (`scroll-behavior`).
    pub supports_scroll_behavior: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self {
            is_browser: true,
            supports_scroll_behavior: true,
        }
    }
}

/// Configuration for [`crate::VirtualScrollViewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportOptions {
    pub orientation: Orientation,
    /// Only used to mirror horizontal offsets.
    pub direction: Direction,
    /// When enabled, rendered ranges only ever grow at the end and already rendered views are
    /// never removed while scrolling back.
    pub append_only: bool,
    pub platform: PlatformCapabilities,
    /// Quiet period after the last resize notification before the viewport re-measures.
    pub resize_debounce_ms: u64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            direction: Direction::Ltr,
            append_only: false,
            platform: PlatformCapabilities::default(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl ViewportOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_append_only(mut self, append_only: bool) -> Self {
        self.append_only = append_only;
        self
    }

    pub fn with_platform(mut self, platform: PlatformCapabilities) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }
}

/// Configuration of the fixed-size strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyConfig {
    /// Extent of every item along the scroll axis, in pixels.
    pub item_size: f64,
    /// Number of extra items rendered before and after the visible ones.
    pub buffer_size: usize,
}

impl StrategyConfig {
    pub fn new(item_size: f64, buffer_size: usize) -> Result<Self, ViewportError> {
        let config = Self {
            item_size,
            buffer_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        if !self.item_size.is_finite() || self.item_size <= 0.0 {
            return Err(ViewportError::InvalidItemSize(self.item_size));
        }
        Ok(())
    }
}

/// Maps an item and its absolute index to the identity used when diffing rendered windows.
pub type TrackByFn<T, K> = Rc<dyn Fn(usize, &T) -> K>;

/// Configuration for [`crate::VirtualForOf`].
pub struct ForOfOptions<T, K = T> {
    pub track_by: TrackByFn<T, K>,
    pub template_cache_size: usize,
}

impl<T> ForOfOptions<T, T>
where
    T: Clone + 'static,
{
    /// Options that identify items by value.
    pub fn new() -> Self {
        Self {
            track_by: Rc::new(|_, item: &T| item.clone()),
            template_cache_size: DEFAULT_TEMPLATE_CACHE_SIZE,
        }
    }
}

impl<T> Default for ForOfOptions<T, T>
where
    T: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> ForOfOptions<T, K> {
    /// Options with a custom identity. `track_by(index, item)` receives the absolute index of
    /// `item` in the backing collection.
    pub fn new_with_track_by(track_by: impl Fn(usize, &T) -> K + 'static) -> Self {
        Self {
            track_by: Rc::new(track_by),
            template_cache_size: DEFAULT_TEMPLATE_CACHE_SIZE,
        }
    }

    pub fn with_template_cache_size(mut self, template_cache_size: usize) -> Self {
        self.template_cache_size = template_cache_size;
        self
    }
}

impl<T, K> Clone for ForOfOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            track_by: Rc::clone(&self.track_by),
            template_cache_size: self.template_cache_size,
        }
    }
}

impl<T, K> core::fmt::Debug for ForOfOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForOfOptions")
            .field("template_cache_size", &self.template_cache_size)
            .finish_non_exhaustive()
    }
}
