use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::mem;

/// Token returned by [`Notifier::subscribe`]; pass it back to [`Notifier::unsubscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler<T> = Box<dyn FnMut(&T)>;

/// A single-threaded broadcast channel with synchronous, in-order dispatch.
///
/// Handlers run in subscription order inside [`Notifier::next`]. Once
/// [`Notifier::complete`] has been called every handler is dropped and further values are
/// discarded.
pub struct Notifier<T> {
    handlers: Vec<(Subscription, Handler<T>)>,
    // Ids of the handlers lent out to a running `dispatch`; `None` when idle.
    in_flight: Option<Vec<Subscription>>,
    next_id: u64,
    completed: bool,
}

impl<T> Notifier<T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            in_flight: None,
            next_id: 0,
            completed: false,
        }
    }

    pub fn next(&mut self, value: &T) {
        if self.completed {
            return;
        }
        for (_, handler) in self.handlers.iter_mut() {
            handler(value);
        }
    }

    /// Registers `handler`. Subscribing to a completed notifier is allowed but the handler is
    /// dropped immediately and never called.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        if !self.completed {
            self.handlers.push((id, Box::new(handler)));
        }
        id
    }

    /// Returns `true` when the subscription was still active.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription);
        if self.handlers.len() != before {
            return true;
        }
        match &mut self.in_flight {
            Some(ids) => {
                let before = ids.len();
                ids.retain(|id| *id != subscription);
                ids.len() != before
            }
            None => false,
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
        self.handlers.clear();
        if let Some(ids) = &mut self.in_flight {
            ids.clear();
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn observer_count(&self) -> usize {
        self.handlers.len() + self.in_flight.as_ref().map_or(0, Vec::len)
    }

    fn lend_handlers(&mut self) -> Option<Vec<(Subscription, Handler<T>)>> {
        if self.completed || self.in_flight.is_some() {
            return None;
        }
        let handlers = mem::take(&mut self.handlers);
        self.in_flight = Some(handlers.iter().map(|(id, _)| *id).collect());
        Some(handlers)
    }

    fn is_in_flight(&self, subscription: Subscription) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|ids| ids.contains(&subscription))
    }

    /// Puts the still-subscribed handlers back in front of any added meanwhile and returns
    /// the ones that were dropped.
    fn restore_handlers(
        &mut self,
        lent: Vec<(Subscription, Handler<T>)>,
    ) -> Vec<(Subscription, Handler<T>)> {
        let live = self.in_flight.take().unwrap_or_default();
        if self.completed {
            return lent;
        }
        let (mut kept, dropped): (Vec<_>, Vec<_>) =
            lent.into_iter().partition(|(id, _)| live.contains(id));
        kept.append(&mut self.handlers);
        self.handlers = kept;
        dropped
    }
}

/// Delivers `value` to a shared notifier without holding its borrow while handlers run.
///
/// Handlers may subscribe, unsubscribe or query the same notifier. Handlers added during the
/// dispatch first see the next value; a handler removed during the dispatch is not called again.
/// A nested dispatch on the same notifier is dropped.
pub(crate) fn dispatch<T>(notifier: &RefCell<Notifier<T>>, value: &T) {
    let lent = notifier.borrow_mut().lend_handlers();
    let Some(mut lent) = lent else {
        if !notifier.borrow().is_completed() {
            vwarn!("nested dispatch on a shared notifier ignored");
        }
        return;
    };
    for (id, handler) in lent.iter_mut() {
        if notifier.borrow().is_in_flight(*id) {
            handler(value);
        }
    }
    let dropped = notifier.borrow_mut().restore_handlers(lent);
    drop(dropped);
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observer_count())
            .field("completed", &self.completed)
            .finish()
    }
}
