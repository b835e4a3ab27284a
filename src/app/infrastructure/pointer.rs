use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(i32)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

/// Fan-out of vertical pointer positions to whoever subscribed.
///
/// The window's event handler publishes into the hub; consumers hold a
/// [`Subscription`] and stop receiving positions when it is dropped.
#[derive(Default)]
pub struct PointerHub {
    listeners: Rc<ListenerList>,
    next_id: Cell<u64>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(i32) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn publish(&self, y: i32) {
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(y);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Live registration with a [`PointerHub`]. Dropping it unregisters.
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
