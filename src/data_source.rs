use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::notifier::dispatch;
use crate::{ListRange, Notifier, Subscription};

/// A replaying stream of data snapshots.
///
/// New subscribers immediately receive the latest snapshot, if any. Clones share the same
/// stream. Handlers may read, subscribe to or unsubscribe from the stream they are called by;
/// an emission made from inside a handler updates [`DataStream::latest`] but is not dispatched.
pub struct DataStream<T> {
    latest: Rc<RefCell<Option<Rc<[T]>>>>,
    subscribers: Rc<RefCell<Notifier<Rc<[T]>>>>,
}

impl<T> DataStream<T> {
    pub fn new() -> Self {
        Self {
            latest: Rc::new(RefCell::new(None)),
            subscribers: Rc::new(RefCell::new(Notifier::new())),
        }
    }

    /// A stream whose first snapshot is `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        let stream = Self::new();
        *stream.latest.borrow_mut() = Some(Rc::from(items));
        stream
    }

    pub fn emit(&self, items: impl Into<Rc<[T]>>) {
        if self.subscribers.borrow().is_completed() {
            return;
        }
        let items = items.into();
        *self.latest.borrow_mut() = Some(Rc::clone(&items));
        dispatch(&self.subscribers, &items);
    }

    pub fn latest(&self) -> Option<Rc<[T]>> {
        self.latest.borrow().clone()
    }

    pub fn subscribe(&self, handler: impl FnMut(&Rc<[T]>) + 'static) -> Subscription {
        let mut handler = handler;
        if let Some(latest) = self.latest() {
            handler(&latest);
        }
        self.subscribers.borrow_mut().subscribe(handler)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.subscribers.borrow_mut().unsubscribe(subscription)
    }

    pub fn observer_count(&self) -> usize {
        self.subscribers.borrow().observer_count()
    }

    /// Drops every subscriber; later emissions are ignored.
    pub fn complete(&self) {
        self.subscribers.borrow_mut().complete();
    }
}

impl<T> Clone for DataStream<T> {
    fn clone(&self) -> Self {
        Self {
            latest: Rc::clone(&self.latest),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for DataStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for DataStream<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DataStream")
            .field("len", &self.latest.borrow().as_ref().map(|items| items.len()))
            .field("subscribers", &*self.subscribers.borrow())
            .finish()
    }
}

/// The consumer side of a [`DataSource`]: publishes which range of the data is on screen.
///
/// Clones share the same view-change channel.
#[derive(Clone, Debug)]
pub struct CollectionViewer {
    view_change: Rc<RefCell<Notifier<ListRange>>>,
}

impl CollectionViewer {
    pub fn new() -> Self {
        Self {
            view_change: Rc::new(RefCell::new(Notifier::new())),
        }
    }

    /// Subscribes to rendered-range changes. Data sources use this to page data in.
    pub fn subscribe_view_change(
        &self,
        handler: impl FnMut(&ListRange) + 'static,
    ) -> Subscription {
        self.view_change.borrow_mut().subscribe(handler)
    }

    pub fn unsubscribe_view_change(&self, subscription: Subscription) -> bool {
        self.view_change.borrow_mut().unsubscribe(subscription)
    }

    pub(crate) fn emit(&self, range: ListRange) {
        dispatch(&self.view_change, &range);
    }

    pub(crate) fn complete(&self) {
        self.view_change.borrow_mut().complete();
    }
}

impl Default for CollectionViewer {
    fn default() -> Self {
        Self::new()
    }
}

/// A connectable provider of data snapshots.
pub trait DataSource<T> {
    /// Called once when a coordinator starts using this source.
    fn connect(&mut self, viewer: &CollectionViewer) -> DataStream<T>;

    /// Called once when the coordinator switches away from this source or is destroyed.
    fn disconnect(&mut self, viewer: &CollectionViewer);
}

/// A [`DataSource`] over an in-memory collection.
#[derive(Debug)]
pub struct ArrayDataSource<T> {
    stream: DataStream<T>,
}

impl<T> ArrayDataSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            stream: DataStream::with_items(items),
        }
    }

    /// Replaces the data; connected coordinators see the new snapshot immediately.
    pub fn set_data(&self, items: Vec<T>) {
        self.stream.emit(items);
    }
}

impl<T> DataSource<T> for ArrayDataSource<T> {
    fn connect(&mut self, _viewer: &CollectionViewer) -> DataStream<T> {
        self.stream.clone()
    }

    fn disconnect(&mut self, _viewer: &CollectionViewer) {}
}

/// Anything a [`crate::VirtualForOf`] can render from.
pub enum ForOfSource<T> {
    /// A fixed collection, wrapped in an [`ArrayDataSource`].
    Items(Vec<T>),
    Stream(DataStream<T>),
    DataSource(Box<dyn DataSource<T>>),
}

impl<T> From<Vec<T>> for ForOfSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items)
    }
}

impl<T> From<DataStream<T>> for ForOfSource<T> {
    fn from(stream: DataStream<T>) -> Self {
        Self::Stream(stream)
    }
}

impl<T> From<Box<dyn DataSource<T>>> for ForOfSource<T> {
    fn from(source: Box<dyn DataSource<T>>) -> Self {
        Self::DataSource(source)
    }
}
