use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::mem;

use crate::range::ranges_equal;
use crate::{
    ContentAnchor, ContentTransform, Direction, ElementSize, ListRange, Notifier, Orientation,
    RenderBinding, ScrollBehavior, ScrollEdge, ScrollElement, Subscription, ViewportError,
    ViewportOptions, ViewportRuler, Viewport, VirtualScrollStrategy,
};

/// Upper bound on flush passes run by a single [`VirtualScrollViewport::flush_pending_work`].
///
/// Each pass may schedule the next one (e.g. an end-anchored offset rewrite), but a well-behaved
/// strategy settles within two or three passes.
const MAX_FLUSH_PASSES: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingTask {
    /// First measurement and strategy attachment, deferred until the host layout has settled.
    Initialize,
    /// Batched binding check + DOM writes.
    ChangeDetection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AfterFlush {
    ContentRendered,
    RenderedOffset,
}

/// Written by the binding's data-length handler, drained by the viewport.
#[derive(Debug, Default)]
struct BindingSignals {
    data_length: Cell<Option<usize>>,
}

/// A scrollable container that renders only the items inside its rendered range.
///
/// The viewport owns its [`ScrollElement`] and its strategy, and drives an attached
/// [`RenderBinding`]. Mutations are applied to in-memory state immediately and the expensive
/// part (binding check, spacer and transform writes, post-render callbacks) is batched into a
/// single flush, run by [`VirtualScrollViewport::flush_pending_work`].
///
/// Adapters typically:
/// - forward scroll events to [`VirtualScrollViewport::on_scroll`]
/// - forward window resizes to [`VirtualScrollViewport::notify_window_resize`]
/// - call [`VirtualScrollViewport::tick`] once per animation frame
pub struct VirtualScrollViewport<S, E> {
    element: E,
    strategy: Option<S>,
    strategy_attached: bool,
    options: ViewportOptions,
    ruler: ViewportRuler,

    binding: Option<Rc<RefCell<dyn RenderBinding>>>,
    binding_subscription: Option<Subscription>,
    signals: Rc<BindingSignals>,

    data_length: usize,
    viewport_size: f64,
    rendered_range: ListRange,
    total_content_size: f64,
    spacer_dirty: bool,
    rendered_content_offset: f64,
    rendered_content_offset_needs_rewrite: bool,
    rendered_content_transform: Option<ContentTransform>,
    applied_content_transform: Option<ContentTransform>,

    tasks: VecDeque<PendingTask>,
    change_detection_pending: bool,
    after_flush: Vec<AfterFlush>,
    scroll_pending: bool,
    pending_scrolled_index: Option<usize>,
    last_scrolled_index: Option<usize>,
    destroyed: bool,

    rendered_range_stream: Notifier<ListRange>,
    scrolled_index_stream: Notifier<usize>,
    total_content_size_stream: Notifier<f64>,
    element_scrolled: Notifier<f64>,
    flush_completed: Notifier<()>,
}

impl<S: VirtualScrollStrategy, E: ScrollElement> VirtualScrollViewport<S, E> {
    /// Creates a viewport over `element`.
    ///
    /// Nothing is measured yet: the first measurement and `strategy.attach` run on the first
    /// [`Self::flush_pending_work`], once the surrounding layout has settled.
    pub fn new(element: E, strategy: S, options: ViewportOptions) -> Self {
        vdebug!(
            orientation = ?options.orientation,
            append_only = options.append_only,
            "VirtualScrollViewport::new"
        );
        let mut tasks = VecDeque::new();
        tasks.push_back(PendingTask::Initialize);
        Self {
            element,
            strategy: Some(strategy),
            strategy_attached: false,
            ruler: ViewportRuler::new(options.resize_debounce_ms),
            options,
            binding: None,
            binding_subscription: None,
            signals: Rc::new(BindingSignals::default()),
            data_length: 0,
            viewport_size: 0.0,
            rendered_range: ListRange::EMPTY,
            total_content_size: 0.0,
            spacer_dirty: false,
            rendered_content_offset: 0.0,
            rendered_content_offset_needs_rewrite: false,
            rendered_content_transform: None,
            applied_content_transform: None,
            tasks,
            change_detection_pending: false,
            after_flush: Vec::new(),
            scroll_pending: false,
            pending_scrolled_index: None,
            last_scrolled_index: None,
            destroyed: false,
            rendered_range_stream: Notifier::new(),
            scrolled_index_stream: Notifier::new(),
            total_content_size_stream: Notifier::new(),
            element_scrolled: Notifier::new(),
            flush_completed: Notifier::new(),
        }
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// `None` only while the strategy is running one of its callbacks.
    pub fn strategy(&self) -> Option<&S> {
        self.strategy.as_ref()
    }

    pub fn ruler(&self) -> &ViewportRuler {
        &self.ruler
    }

    pub fn ruler_mut(&mut self) -> &mut ViewportRuler {
        &mut self.ruler
    }

    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether a flush (or a binding signal waiting for one) is outstanding.
    pub fn has_pending_work(&self) -> bool {
        !self.destroyed && (!self.tasks.is_empty() || self.signals.data_length.get().is_some())
    }

    pub fn data_length(&self) -> usize {
        self.data_length
    }

    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    pub fn rendered_range(&self) -> ListRange {
        self.rendered_range
    }

    pub fn total_content_size(&self) -> f64 {
        self.total_content_size
    }

    /// The transform that will be (or was last) written to the content wrapper.
    pub fn rendered_content_transform(&self) -> Option<ContentTransform> {
        self.rendered_content_transform
    }

    /// Emits every new rendered range, synchronously, as soon as it is set.
    pub fn rendered_range_stream(&mut self) -> &mut Notifier<ListRange> {
        &mut self.rendered_range_stream
    }

    /// Emits the index of the first visible item after the flush that rendered it. Repeated
    /// values are suppressed.
    pub fn scrolled_index_stream(&mut self) -> &mut Notifier<usize> {
        &mut self.scrolled_index_stream
    }

    pub fn total_content_size_stream(&mut self) -> &mut Notifier<f64> {
        &mut self.total_content_size_stream
    }

    /// Emits the measured scroll offset for every scroll event reported by the adapter.
    pub fn element_scrolled(&mut self) -> &mut Notifier<f64> {
        &mut self.element_scrolled
    }

    /// Emits once at the end of every flush pass, after post-render callbacks ran.
    pub fn flush_completed(&mut self) -> &mut Notifier<()> {
        &mut self.flush_completed
    }

    /// Runs `f` with the strategy and this viewport.
    ///
    /// This is how adapters reconfigure a strategy, e.g.
    /// `viewport.with_strategy(|s, vp| s.update_item_and_buffer_size(vp, 48.0, 2))`.
    /// Returns `None` when called re-entrantly from inside a strategy callback.
    pub fn with_strategy<R>(&mut self, f: impl FnOnce(&mut S, &mut dyn Viewport) -> R) -> Option<R> {
        let mut strategy = self.strategy.take()?;
        let out = f(&mut strategy, self);
        self.strategy = Some(strategy);
        Some(out)
    }

    fn dispatch(&mut self, f: impl FnOnce(&mut S, &mut dyn Viewport)) {
        if !self.strategy_attached || self.destroyed {
            return;
        }
        if self.with_strategy(f).is_none() {
            vwarn!("VirtualScrollViewport: re-entrant strategy dispatch ignored");
        }
    }

    /// Attaches the render binding that materializes the rendered range.
    ///
    /// The binding's current data length is picked up on the next flush, and every later
    /// data-length notification is tracked until [`Self::detach`].
    pub fn attach(&mut self, binding: Rc<RefCell<dyn RenderBinding>>) -> Result<(), ViewportError> {
        if self.destroyed {
            return Err(ViewportError::Destroyed);
        }
        if self.binding.is_some() {
            return Err(ViewportError::AlreadyAttached);
        }

        let signals = Rc::downgrade(&self.signals);
        let subscription = binding
            .borrow_mut()
            .subscribe_data_length(Box::new(move |len: &usize| {
                if let Some(signals) = signals.upgrade() {
                    signals.data_length.set(Some(*len));
                }
            }));
        let current_length = binding.borrow().data_length();
        vdebug!(data_length = current_length, "VirtualScrollViewport::attach");

        if self.strategy_attached {
            binding
                .borrow_mut()
                .on_rendered_range_changed(self.rendered_range);
        }
        self.signals.data_length.set(Some(current_length));
        self.binding = Some(binding);
        self.binding_subscription = Some(subscription);
        self.mark_change_detection_needed(None);
        Ok(())
    }

    /// Tears the viewport down: releases the binding, detaches the strategy and completes every
    /// notification channel. Pending flushes become no-ops. Calling it again does nothing.
    pub fn detach(&mut self) {
        if self.destroyed {
            return;
        }
        vdebug!("VirtualScrollViewport::detach");
        if let Some(binding) = self.binding.take()
            && let Some(subscription) = self.binding_subscription.take()
        {
            binding.borrow_mut().unsubscribe_data_length(subscription);
        }
        if self.strategy_attached {
            if let Some(strategy) = self.strategy.as_mut() {
                strategy.detach();
            }
            self.strategy_attached = false;
        }

        self.destroyed = true;
        self.signals.data_length.set(None);
        self.after_flush.clear();
        self.change_detection_pending = false;
        self.scroll_pending = false;
        self.pending_scrolled_index = None;

        self.rendered_range_stream.complete();
        self.scrolled_index_stream.complete();
        self.total_content_size_stream.complete();
        self.element_scrolled.complete();
        self.flush_completed.complete();
        self.ruler.complete();
    }

    /// Sets the extent of the whole (mostly unrendered) content; sizes the spacer on the next
    /// flush.
    pub fn set_total_content_size(&mut self, size: f64) {
        if self.destroyed || self.total_content_size == size {
            return;
        }
        vtrace!(size, "VirtualScrollViewport::set_total_content_size");
        self.total_content_size = size;
        self.spacer_dirty = true;
        self.total_content_size_stream.next(&size);
        self.mark_change_detection_needed(None);
    }

    /// Sets the rendered range. The strategy's `on_content_rendered` runs after the next flush.
    ///
    /// In append-only mode the range is widened to `[0, max(previous.end, range.end))`.
    pub fn set_rendered_range(&mut self, range: ListRange) {
        if self.destroyed || ranges_equal(self.rendered_range, range) {
            return;
        }
        let range = if self.options.append_only {
            ListRange::new(0, self.rendered_range.end.max(range.end))
        } else {
            range
        };
        if ranges_equal(self.rendered_range, range) {
            return;
        }
        vtrace!(start = range.start, end = range.end, "VirtualScrollViewport::set_rendered_range");
        self.rendered_range = range;
        self.rendered_range_stream.next(&range);
        if let Some(binding) = &self.binding {
            binding.borrow_mut().on_rendered_range_changed(range);
        }
        self.mark_change_detection_needed(Some(AfterFlush::ContentRendered));
    }

    /// Offset from the start of the content to the first rendered item.
    ///
    /// `None` while an end-anchored offset has not been rewritten yet.
    pub fn offset_to_rendered_content_start(&self) -> Option<f64> {
        if self.rendered_content_offset_needs_rewrite {
            None
        } else {
            Some(self.rendered_content_offset)
        }
    }

    /// Positions the rendered content.
    ///
    /// With [`ContentAnchor::ToEnd`], `offset` is where the rendered content should *end*. The
    /// size of the content is not known until it is rendered, so the offset is rewritten into
    /// an equivalent `ToStart` offset right after the next flush, without forcing a layout read
    /// now. Several `ToEnd` writes in one cycle collapse into one rewrite of the latest offset;
    /// a `ToStart` write cancels a pending rewrite.
    pub fn set_rendered_content_offset(&mut self, offset: f64, anchor: ContentAnchor) {
        if self.destroyed {
            return;
        }
        let offset = if self.options.append_only && anchor == ContentAnchor::ToStart {
            0.0
        } else {
            offset
        };
        let transform = ContentTransform::new(
            self.options.orientation,
            self.options.direction,
            offset,
            anchor,
        );
        self.rendered_content_offset = offset;
        self.rendered_content_offset_needs_rewrite = anchor == ContentAnchor::ToEnd;

        if self.rendered_content_transform != Some(transform) {
            vtrace!(offset, anchor = ?anchor, "VirtualScrollViewport::set_rendered_content_offset");
            self.rendered_content_transform = Some(transform);
            self.mark_change_detection_needed(Some(AfterFlush::RenderedOffset));
        }
    }

    /// Scrolls the element to `offset` (measured from the start edge) along the scroll axis.
    ///
    /// Uses the element's native scroll when the platform supports `scroll-behavior`, and
    /// direct assignment otherwise.
    pub fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        if self.destroyed || !self.options.platform.is_browser {
            return;
        }
        let orientation = self.options.orientation;
        let target = if orientation.is_horizontal() && self.options.direction == Direction::Rtl {
            self.max_scroll_offset(orientation) - offset
        } else {
            offset
        };
        vtrace!(offset, target, behavior = ?behavior, "VirtualScrollViewport::scroll_to_offset");
        if self.options.platform.supports_scroll_behavior {
            self.element.scroll_to(orientation, target, behavior);
        } else {
            self.element.set_scroll_offset(orientation, target);
        }
    }

    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        self.dispatch(|strategy, viewport| strategy.scroll_to_index(viewport, index, behavior));
    }

    /// Scroll offset from the start edge of the scroll axis (top, or start for horizontal).
    pub fn measure_scroll_offset(&self) -> f64 {
        let edge = match self.options.orientation {
            Orientation::Vertical => ScrollEdge::Top,
            Orientation::Horizontal => ScrollEdge::Start,
        };
        self.measure_scroll_offset_from(edge)
    }

    pub fn measure_scroll_offset_from(&self, edge: ScrollEdge) -> f64 {
        if !self.options.platform.is_browser {
            return 0.0;
        }
        let rtl = self.options.direction == Direction::Rtl;
        let edge = match edge {
            ScrollEdge::Start if rtl => ScrollEdge::Right,
            ScrollEdge::Start => ScrollEdge::Left,
            ScrollEdge::End if rtl => ScrollEdge::Left,
            ScrollEdge::End => ScrollEdge::Right,
            other => other,
        };
        match edge {
            ScrollEdge::Top => self.element.scroll_offset(Orientation::Vertical),
            ScrollEdge::Left => self.element.scroll_offset(Orientation::Horizontal),
            ScrollEdge::Bottom => {
                self.max_scroll_offset(Orientation::Vertical)
                    - self.element.scroll_offset(Orientation::Vertical)
            }
            _ => {
                self.max_scroll_offset(Orientation::Horizontal)
                    - self.element.scroll_offset(Orientation::Horizontal)
            }
        }
    }

    fn max_scroll_offset(&self, orientation: Orientation) -> f64 {
        let scroll = self.element.scroll_size().along(orientation);
        let client = self.element.client_size().along(orientation);
        (scroll - client).max(0.0)
    }

    /// Visual extent of the rendered content along the scroll axis.
    pub fn measure_rendered_content_size(&self) -> f64 {
        if !self.options.platform.is_browser {
            return 0.0;
        }
        self.element
            .rendered_content_size()
            .along(self.options.orientation)
    }

    /// Total extent of the rendered items in `range`; `0` when no binding is attached.
    pub fn measure_range_size(&self, range: ListRange) -> Result<f64, ViewportError> {
        match &self.binding {
            Some(binding) => binding
                .borrow()
                .measure_range_size(range, self.options.orientation),
            None => Ok(0.0),
        }
    }

    /// Re-measures the viewport and lets the strategy recompute. Call after layout changes the
    /// viewport's size without a window resize.
    pub fn check_viewport_size(&mut self) {
        if self.destroyed {
            return;
        }
        self.measure_viewport_size();
        self.dispatch(|strategy, viewport| strategy.on_data_length_changed(viewport));
    }

    fn measure_viewport_size(&mut self) {
        self.viewport_size = if self.options.platform.is_browser {
            self.element.client_size().along(self.options.orientation)
        } else {
            0.0
        };
        vtrace!(viewport_size = self.viewport_size, "measure_viewport_size");
    }

    /// Reports a scroll event. The strategy recomputes on the next animation frame, however
    /// many events arrive in between.
    pub fn on_scroll(&mut self) {
        if self.destroyed {
            return;
        }
        self.scroll_pending = true;
        let offset = self.measure_scroll_offset();
        self.element_scrolled.next(&offset);
    }

    /// Reports a window resize or orientation change; debounced by the ruler.
    pub fn notify_window_resize(&mut self, size: ElementSize, now_ms: u64) {
        if self.destroyed {
            return;
        }
        self.ruler.notify_resize(size, now_ms);
    }

    /// Animation-frame hook: settles debounced resizes and runs at most one scroll-driven
    /// strategy recompute.
    pub fn on_animation_frame(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }
        if self.ruler.poll(now_ms).is_some() {
            self.check_viewport_size();
        }
        if mem::take(&mut self.scroll_pending) {
            self.dispatch(|strategy, viewport| strategy.on_content_scrolled(viewport));
        }
    }

    /// [`Self::on_animation_frame`] followed by [`Self::flush_pending_work`].
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.on_animation_frame(now_ms);
        self.flush_pending_work()
    }

    /// Runs every scheduled flush until the viewport is stable.
    ///
    /// Returns the number of passes run. Mutations made during a pass (post-render callbacks,
    /// offset rewrites) schedule another pass, which runs in the same call.
    pub fn flush_pending_work(&mut self) -> usize {
        let mut passes = 0usize;
        loop {
            if self.destroyed {
                self.tasks.clear();
                return passes;
            }
            self.drain_binding_signals();
            let Some(task) = self.tasks.pop_front() else {
                break;
            };
            if passes == MAX_FLUSH_PASSES {
                vwarn!(
                    passes,
                    "VirtualScrollViewport: flush did not settle, deferring remaining work"
                );
                self.tasks.push_front(task);
                break;
            }
            passes += 1;
            match task {
                PendingTask::Initialize => self.initialize(),
                PendingTask::ChangeDetection => self.do_change_detection(),
            }
        }
        passes
    }

    fn drain_binding_signals(&mut self) {
        let Some(len) = self.signals.data_length.take() else {
            return;
        };
        if len != self.data_length {
            vdebug!(from = self.data_length, to = len, "data length changed");
            self.data_length = len;
            self.dispatch(|strategy, viewport| strategy.on_data_length_changed(viewport));
        }
        self.mark_change_detection_needed(None);
    }

    fn initialize(&mut self) {
        self.measure_viewport_size();
        vdebug!(
            viewport_size = self.viewport_size,
            data_length = self.data_length,
            "VirtualScrollViewport::initialize"
        );
        if self.strategy.is_some() {
            self.strategy_attached = true;
            self.dispatch(|strategy, viewport| {
                if strategy.attach(viewport).is_err() {
                    vwarn!("VirtualScrollViewport::initialize: strategy was already attached");
                }
            });
            self.dispatch(|strategy, viewport| strategy.on_content_scrolled(viewport));
        }
        self.mark_change_detection_needed(None);
    }

    fn mark_change_detection_needed(&mut self, after: Option<AfterFlush>) {
        if let Some(after) = after
            && !self.after_flush.contains(&after)
        {
            self.after_flush.push(after);
        }
        if !self.change_detection_pending {
            self.change_detection_pending = true;
            self.tasks.push_back(PendingTask::ChangeDetection);
        }
    }

    fn do_change_detection(&mut self) {
        if self.destroyed {
            return;
        }
        vtrace!(
            start = self.rendered_range.start,
            end = self.rendered_range.end,
            "VirtualScrollViewport::flush"
        );
        if let Some(binding) = &self.binding {
            binding.borrow_mut().check();
        }

        if self.options.platform.is_browser {
            if mem::take(&mut self.spacer_dirty) {
                self.element
                    .set_spacer_size(self.options.orientation, self.total_content_size);
            }
            if self.applied_content_transform != self.rendered_content_transform {
                if let Some(transform) = &self.rendered_content_transform {
                    self.element.set_content_transform(transform);
                }
                self.applied_content_transform = self.rendered_content_transform;
            }
        }

        self.change_detection_pending = false;
        for after in mem::take(&mut self.after_flush) {
            match after {
                AfterFlush::ContentRendered => {
                    self.dispatch(|strategy, viewport| strategy.on_content_rendered(viewport));
                }
                AfterFlush::RenderedOffset => self.resolve_rendered_offset(),
            }
        }

        self.flush_completed.next(&());
        if let Some(index) = self.pending_scrolled_index.take()
            && self.last_scrolled_index != Some(index)
        {
            self.last_scrolled_index = Some(index);
            self.scrolled_index_stream.next(&index);
        }
    }

    fn resolve_rendered_offset(&mut self) {
        if self.rendered_content_offset_needs_rewrite {
            let corrected = self.rendered_content_offset - self.measure_rendered_content_size();
            self.rendered_content_offset_needs_rewrite = false;
            vtrace!(corrected, "rewriting end-anchored content offset");
            self.set_rendered_content_offset(corrected, ContentAnchor::ToStart);
        } else {
            self.dispatch(|strategy, viewport| strategy.on_rendered_offset_changed(viewport));
        }
    }

    /// Records the first visible index; it is published after the next flush.
    pub fn report_scrolled_index(&mut self, index: usize) {
        if self.destroyed {
            return;
        }
        self.pending_scrolled_index = Some(index);
        if self.last_scrolled_index != Some(index) {
            self.mark_change_detection_needed(None);
        }
    }
}

impl<S: VirtualScrollStrategy, E: ScrollElement> Viewport for VirtualScrollViewport<S, E> {
    fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    fn data_length(&self) -> usize {
        self.data_length
    }

    fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    fn rendered_range(&self) -> ListRange {
        self.rendered_range
    }

    fn measure_scroll_offset(&self) -> f64 {
        VirtualScrollViewport::measure_scroll_offset(self)
    }

    fn measure_rendered_content_size(&self) -> f64 {
        VirtualScrollViewport::measure_rendered_content_size(self)
    }

    fn measure_range_size(&self, range: ListRange) -> Result<f64, ViewportError> {
        VirtualScrollViewport::measure_range_size(self, range)
    }

    fn offset_to_rendered_content_start(&self) -> Option<f64> {
        VirtualScrollViewport::offset_to_rendered_content_start(self)
    }

    fn set_total_content_size(&mut self, size: f64) {
        VirtualScrollViewport::set_total_content_size(self, size);
    }

    fn set_rendered_range(&mut self, range: ListRange) {
        VirtualScrollViewport::set_rendered_range(self, range);
    }

    fn set_rendered_content_offset(&mut self, offset: f64, anchor: ContentAnchor) {
        VirtualScrollViewport::set_rendered_content_offset(self, offset, anchor);
    }

    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        VirtualScrollViewport::scroll_to_offset(self, offset, behavior);
    }

    fn report_scrolled_index(&mut self, index: usize) {
        VirtualScrollViewport::report_scrolled_index(self, index);
    }
}

impl<S: core::fmt::Debug, E: core::fmt::Debug> core::fmt::Debug for VirtualScrollViewport<S, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualScrollViewport")
            .field("element", &self.element)
            .field("strategy", &self.strategy)
            .field("options", &self.options)
            .field("attached", &self.binding.is_some())
            .field("destroyed", &self.destroyed)
            .field("data_length", &self.data_length)
            .field("viewport_size", &self.viewport_size)
            .field("rendered_range", &self.rendered_range)
            .field("total_content_size", &self.total_content_size)
            .field("rendered_content_transform", &self.rendered_content_transform)
            .finish_non_exhaustive()
    }
}
