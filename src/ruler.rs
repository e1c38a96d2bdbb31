use crate::{ElementSize, Notifier};

/// Tracks the size of the surrounding window and debounces resize notifications.
///
/// The ruler does not read any clock. Adapters report resize/orientation events with
/// [`ViewportRuler::notify_resize`] and advance it with [`ViewportRuler::poll`], both with the
/// same monotonic millisecond clock they use for animation frames.
#[derive(Debug)]
pub struct ViewportRuler {
    size: ElementSize,
    debounce_ms: u64,
    pending: Option<PendingResize>,
    change: Notifier<ElementSize>,
}

#[derive(Clone, Copy, Debug)]
struct PendingResize {
    last_event_ms: u64,
    size: ElementSize,
}

impl ViewportRuler {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            size: ElementSize::default(),
            debounce_ms,
            pending: None,
            change: Notifier::new(),
        }
    }

    /// The last settled window size.
    pub fn viewport_size(&self) -> ElementSize {
        self.size
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a resize event. Each event restarts the quiet period.
    pub fn notify_resize(&mut self, size: ElementSize, now_ms: u64) {
        self.pending = Some(PendingResize {
            last_event_ms: now_ms,
            size,
        });
    }

    /// Settles a pending resize once the quiet period has elapsed.
    ///
    /// Returns the new size when a change was published on [`ViewportRuler::change`].
    pub fn poll(&mut self, now_ms: u64) -> Option<ElementSize> {
        let pending = self.pending?;
        if now_ms.saturating_sub(pending.last_event_ms) < self.debounce_ms {
            return None;
        }
        self.pending = None;
        vtrace!(
            width = pending.size.width,
            height = pending.size.height,
            "ViewportRuler::poll settled"
        );
        self.size = pending.size;
        self.change.next(&pending.size);
        Some(pending.size)
    }

    /// Stream of settled window sizes.
    pub fn change(&mut self) -> &mut Notifier<ElementSize> {
        &mut self.change
    }

    pub(crate) fn complete(&mut self) {
        self.pending = None;
        self.change.complete();
    }
}

impl Default for ViewportRuler {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}
