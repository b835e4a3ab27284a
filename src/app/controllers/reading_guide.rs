use std::cell::Cell;
use std::rc::Rc;

use crate::app::infrastructure::pointer::{PointerHub, Subscription};

/// Horizontal reading marker that follows the pointer while enabled.
///
/// Holds a hub subscription only while active; turning the guide off drops
/// it and forgets the last position.
#[derive(Debug, Default)]
pub struct ReadingGuide {
    position: Rc<Cell<Option<i32>>>,
    subscription: Option<Subscription>,
}

impl ReadingGuide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the subscription in line with the `reading_guide` setting.
    pub fn sync(&mut self, enabled: bool, hub: &PointerHub) {
        match (enabled, self.subscription.is_some()) {
            (true, false) => {
                let position = self.position.clone();
                self.subscription = Some(hub.subscribe(move |y| position.set(Some(y))));
            }
            (false, true) => {
                self.subscription = None;
                self.position.set(None);
            }
            _ => {}
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last pointer y seen while active
    pub fn position(&self) -> Option<i32> {
        self.position.get()
    }

    /// Y coordinate to draw at within a viewport starting at `top` with
    /// height `height`. Falls back to the middle before any pointer movement.
    pub fn line_y(&self, top: i32, height: i32) -> i32 {
        match self.position.get() {
            Some(y) => y.clamp(top, top + height.max(1) - 1),
            None => top + height / 2,
        }
    }
}
