use alloc::vec::Vec;

/// Stable handle to a view owned by a [`crate::VirtualForOf`].
///
/// A handle stays valid while its view is rendered or cached; it may be reused after the view
/// is destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle(usize);

impl ViewHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Slot storage for views, addressed by [`ViewHandle`].
#[derive(Debug)]
pub(crate) struct ViewArena<V> {
    slots: Vec<Option<V>>,
    free: Vec<usize>,
}

impl<V> ViewArena<V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, view: V) -> ViewHandle {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(view);
                ViewHandle(slot)
            }
            None => {
                self.slots.push(Some(view));
                ViewHandle(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn get(&self, handle: ViewHandle) -> Option<&V> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, handle: ViewHandle) -> Option<&mut V> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    pub(crate) fn remove(&mut self, handle: ViewHandle) -> Option<V> {
        let view = self.slots.get_mut(handle.0)?.take()?;
        self.free.push(handle.0);
        Some(view)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// Bounded pool of detached views awaiting reuse. Most recently cached views are reused first.
#[derive(Clone, Debug)]
pub(crate) struct ViewCache {
    capacity: usize,
    handles: Vec<ViewHandle>,
}

impl ViewCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            handles: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `false` when the cache is full; the caller destroys the view instead.
    pub(crate) fn try_put(&mut self, handle: ViewHandle) -> bool {
        if self.handles.len() >= self.capacity {
            return false;
        }
        self.handles.push(handle);
        true
    }

    pub(crate) fn take(&mut self) -> Option<ViewHandle> {
        self.handles.pop()
    }

    /// Changes the capacity and returns the handles that no longer fit, oldest first.
    pub(crate) fn set_capacity(&mut self, capacity: usize) -> Vec<ViewHandle> {
        self.capacity = capacity;
        let surplus = self.handles.len().saturating_sub(capacity);
        self.handles.drain(..surplus).collect()
    }

    pub(crate) fn drain(&mut self) -> Vec<ViewHandle> {
        core::mem::take(&mut self.handles)
    }
}
