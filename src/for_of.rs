use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::data_source::{ArrayDataSource, CollectionViewer, DataSource, DataStream, ForOfSource};
use crate::differ::{DiffOperation, IterableDiffer};
use crate::key::TrackKey;
use crate::view_cache::{ViewArena, ViewCache, ViewHandle};
use crate::{ForOfOptions, ListRange, Notifier, Orientation, RenderBinding, Subscription, ViewportError};

/// Per-view template context.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewContext<T> {
    pub item: T,
    /// Absolute index of `item` in the backing collection.
    pub index: usize,
    /// Length of the backing collection.
    pub count: usize,
    pub first: bool,
    pub last: bool,
    pub even: bool,
    pub odd: bool,
}

impl<T> ViewContext<T> {
    pub fn new(item: T, index: usize, count: usize) -> Self {
        Self {
            item,
            index,
            count,
            first: index == 0,
            last: index + 1 == count,
            even: index % 2 == 0,
            odd: index % 2 == 1,
        }
    }
}

/// Creates and updates the concrete views a [`VirtualForOf`] manages.
pub trait ViewRenderer<T> {
    type View;

    fn create_view(&mut self, context: &ViewContext<T>) -> Self::View;

    /// Brings an existing view up to date with `context`. Called for reused views and whenever
    /// a rendered view's item or position changes.
    fn bind_view(&mut self, view: &mut Self::View, context: &ViewContext<T>);

    /// A view was inserted at, or moved to, `position` within the rendered window.
    fn attach_view(&mut self, view: &mut Self::View, position: usize) {
        let _ = (view, position);
    }

    /// A view left the rendered window and was parked in the template cache.
    fn detach_view(&mut self, view: &mut Self::View) {
        let _ = view;
    }

    fn destroy_view(&mut self, view: Self::View) {
        drop(view);
    }

    /// Extent of a rendered view along `orientation`, including margins.
    fn view_extent(&self, view: &Self::View, orientation: Orientation) -> f64;
}

struct ForOfData<T> {
    data: Option<Rc<[T]>>,
    rendered_range: Option<ListRange>,
    needs_update: bool,
    length_changes: Notifier<usize>,
}

struct ConnectedSource<T> {
    stream: DataStream<T>,
    subscription: Subscription,
    data_source: Option<Box<dyn DataSource<T>>>,
}

struct RenderedView<T> {
    handle: ViewHandle,
    context: ViewContext<T>,
}

/// Render coordinator: materializes one view per item of the viewport's rendered range.
///
/// Views are diffed by `track_by` identity, so an item that moves keeps its view. Views that
/// leave the window are parked in a bounded template cache and rebound when new items enter.
///
/// Attach it to a viewport as an `Rc<RefCell<VirtualForOf<..>>>`; it implements
/// [`RenderBinding`].
pub struct VirtualForOf<T, K, R: ViewRenderer<T>> {
    renderer: R,
    options: ForOfOptions<T, K>,
    shared: Rc<RefCell<ForOfData<T>>>,
    source: Option<ConnectedSource<T>>,
    viewer: CollectionViewer,
    differ: IterableDiffer<K>,
    views: ViewArena<R::View>,
    rendered: Vec<RenderedView<T>>,
    cache: ViewCache,
    destroyed: bool,
}

impl<T, K, R> VirtualForOf<T, K, R>
where
    T: Clone + PartialEq + 'static,
    K: TrackKey,
    R: ViewRenderer<T>,
{
    pub fn new(renderer: R, options: ForOfOptions<T, K>) -> Self {
        let cache = ViewCache::new(options.template_cache_size);
        Self {
            renderer,
            options,
            shared: Rc::new(RefCell::new(ForOfData {
                data: None,
                rendered_range: None,
                needs_update: false,
                length_changes: Notifier::new(),
            })),
            source: None,
            viewer: CollectionViewer::new(),
            differ: IterableDiffer::new(),
            views: ViewArena::new(),
            rendered: Vec::new(),
            cache,
            destroyed: false,
        }
    }

    /// Switches to a new data source.
    ///
    /// The previous source is disconnected (once) before the new one is connected. A stream
    /// that already holds a snapshot delivers it immediately.
    pub fn set_source(&mut self, source: impl Into<ForOfSource<T>>) {
        if self.destroyed {
            return;
        }
        self.disconnect_source();

        let (stream, data_source) = match source.into() {
            ForOfSource::Items(items) => {
                let mut data_source: Box<dyn DataSource<T>> =
                    Box::new(ArrayDataSource::new(items));
                (data_source.connect(&self.viewer), Some(data_source))
            }
            ForOfSource::Stream(stream) => (stream, None),
            ForOfSource::DataSource(mut data_source) => {
                (data_source.connect(&self.viewer), Some(data_source))
            }
        };
        vdebug!(data_source = data_source.is_some(), "VirtualForOf::set_source");

        self.shared.borrow_mut().needs_update = true;
        let shared = Rc::downgrade(&self.shared);
        let subscription = stream.subscribe(move |items: &Rc<[T]>| {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let mut shared = shared.borrow_mut();
            shared.data = Some(Rc::clone(items));
            shared.needs_update = true;
            shared.length_changes.next(&items.len());
        });
        self.source = Some(ConnectedSource {
            stream,
            subscription,
            data_source,
        });
    }

    fn disconnect_source(&mut self) {
        if let Some(source) = self.source.take() {
            source.stream.unsubscribe(source.subscription);
            if let Some(mut data_source) = source.data_source {
                data_source.disconnect(&self.viewer);
            }
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn viewer(&self) -> &CollectionViewer {
        &self.viewer
    }

    /// The latest data snapshot.
    pub fn data(&self) -> Option<Rc<[T]>> {
        self.shared.borrow().data.clone()
    }

    /// The range last received from the viewport.
    pub fn rendered_range(&self) -> Option<ListRange> {
        self.shared.borrow().rendered_range
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Rendered views in window order.
    pub fn views(&self) -> impl Iterator<Item = &R::View> + '_ {
        self.rendered
            .iter()
            .filter_map(|rendered| self.views.get(rendered.handle))
    }

    /// Handles of the rendered views in window order. A handle follows its view across moves.
    pub fn handles(&self) -> impl Iterator<Item = ViewHandle> + '_ {
        self.rendered.iter().map(|rendered| rendered.handle)
    }

    /// Contexts of the rendered views in window order.
    pub fn contexts(&self) -> impl Iterator<Item = &ViewContext<T>> + '_ {
        self.rendered.iter().map(|rendered| &rendered.context)
    }

    pub fn rendered_view_count(&self) -> usize {
        self.rendered.len()
    }

    pub fn cached_view_count(&self) -> usize {
        self.cache.len()
    }

    /// Views alive in total (rendered + cached).
    pub fn live_view_count(&self) -> usize {
        self.views.len()
    }

    pub fn template_cache_size(&self) -> usize {
        self.cache.capacity()
    }

    /// Resizes the template cache; views that no longer fit are destroyed.
    pub fn set_template_cache_size(&mut self, size: usize) {
        self.options.template_cache_size = size;
        for handle in self.cache.set_capacity(size) {
            self.destroy_handle(handle);
        }
    }

    /// Destroys every view, disconnects the data source and completes the data-length stream.
    ///
    /// The viewport this coordinator is attached to should be detached as well.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        vdebug!(
            rendered = self.rendered.len(),
            cached = self.cache.len(),
            "VirtualForOf::destroy"
        );
        self.disconnect_source();
        for rendered in core::mem::take(&mut self.rendered) {
            self.destroy_handle(rendered.handle);
        }
        for handle in self.cache.drain() {
            self.destroy_handle(handle);
        }
        self.differ.reset();
        self.viewer.complete();
        {
            let mut shared = self.shared.borrow_mut();
            shared.needs_update = false;
            shared.length_changes.complete();
        }
        self.destroyed = true;
    }

    fn destroy_handle(&mut self, handle: ViewHandle) {
        if let Some(view) = self.views.remove(handle) {
            vtrace!(handle = handle.index(), "VirtualForOf: destroying view");
            self.renderer.destroy_view(view);
        }
    }

    /// Re-materializes the rendered window if data or range changed since the last update.
    pub fn update_views(&mut self) {
        if self.destroyed {
            return;
        }
        let (data, range) = {
            let mut shared = self.shared.borrow_mut();
            let Some(range) = shared.rendered_range else {
                return;
            };
            if !shared.needs_update {
                return;
            }
            shared.needs_update = false;
            (shared.data.clone(), range)
        };

        let all: &[T] = data.as_deref().unwrap_or(&[]);
        let count = all.len();
        let window = range.clamped(count);
        let items = &all[window.start..window.end];

        let track_by = Rc::clone(&self.options.track_by);
        let keys: Vec<K> = items
            .iter()
            .enumerate()
            .map(|(i, item)| track_by(window.start + i, item))
            .collect();
        let ops = self.differ.diff(keys);
        vtrace!(
            start = window.start,
            end = window.end,
            ops = ops.len(),
            "VirtualForOf::update_views"
        );

        for op in ops {
            match op {
                DiffOperation::Remove { index } => self.remove_view(index),
                DiffOperation::Insert { index } => {
                    let context = ViewContext::new(items[index].clone(), window.start + index, count);
                    self.insert_view(index, context);
                }
                DiffOperation::Move { from, to } => {
                    let rendered = self.rendered.remove(from);
                    if let Some(view) = self.views.get_mut(rendered.handle) {
                        self.renderer.attach_view(view, to);
                    }
                    self.rendered.insert(to, rendered);
                }
            }
        }

        for (i, item) in items.iter().enumerate() {
            let context = ViewContext::new(item.clone(), window.start + i, count);
            let Some(rendered) = self.rendered.get_mut(i) else {
                break;
            };
            if rendered.context != context {
                if let Some(view) = self.views.get_mut(rendered.handle) {
                    self.renderer.bind_view(view, &context);
                }
                rendered.context = context;
            }
        }
    }

    fn remove_view(&mut self, index: usize) {
        let rendered = self.rendered.remove(index);
        if self.cache.try_put(rendered.handle) {
            if let Some(view) = self.views.get_mut(rendered.handle) {
                self.renderer.detach_view(view);
            }
        } else {
            self.destroy_handle(rendered.handle);
        }
    }

    fn insert_view(&mut self, index: usize, context: ViewContext<T>) {
        let reused = self.cache.take();
        let handle = match reused {
            Some(handle) => {
                if let Some(view) = self.views.get_mut(handle) {
                    self.renderer.bind_view(view, &context);
                }
                handle
            }
            None => {
                vtrace!(index = context.index, "VirtualForOf: creating view");
                let view = self.renderer.create_view(&context);
                self.views.insert(view)
            }
        };
        if let Some(view) = self.views.get_mut(handle) {
            self.renderer.attach_view(view, index);
        }
        self.rendered.insert(index, RenderedView { handle, context });
    }
}

impl<T, K, R> RenderBinding for VirtualForOf<T, K, R>
where
    T: Clone + PartialEq + 'static,
    K: TrackKey,
    R: ViewRenderer<T>,
{
    fn data_length(&self) -> usize {
        self.shared.borrow().data.as_ref().map_or(0, |data| data.len())
    }

    fn subscribe_data_length(&mut self, handler: Box<dyn FnMut(&usize)>) -> Subscription {
        self.shared.borrow_mut().length_changes.subscribe(handler)
    }

    fn unsubscribe_data_length(&mut self, subscription: Subscription) {
        self.shared
            .borrow_mut()
            .length_changes
            .unsubscribe(subscription);
    }

    fn on_rendered_range_changed(&mut self, range: ListRange) {
        if self.destroyed {
            return;
        }
        {
            let mut shared = self.shared.borrow_mut();
            shared.rendered_range = Some(range);
            shared.needs_update = true;
        }
        self.viewer.emit(range);
    }

    fn check(&mut self) {
        self.update_views();
    }

    fn measure_range_size(
        &self,
        range: ListRange,
        orientation: Orientation,
    ) -> Result<f64, ViewportError> {
        if range.is_empty() {
            return Ok(0.0);
        }
        let rendered = self.rendered_range().unwrap_or(ListRange::EMPTY);
        if !rendered.contains_range(range) {
            return Err(ViewportError::RangeNotRendered {
                requested: range,
                rendered,
            });
        }
        let size: f64 = self
            .rendered
            .iter()
            .filter(|view| range.contains(view.context.index))
            .filter_map(|view| self.views.get(view.handle))
            .map(|view| self.renderer.view_extent(view, orientation))
            .sum();
        Ok(size)
    }
}

impl<T, K, R: ViewRenderer<T>> core::fmt::Debug for VirtualForOf<T, K, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualForOf")
            .field("options", &self.options)
            .field("rendered", &self.rendered.len())
            .field("cached", &self.cache.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
