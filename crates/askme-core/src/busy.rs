//! Busy-state tracking for buttons with a request in flight.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use askme_types::event::{Control, UiEvent};
use crate::event_bus::EventBus;

/// Per-control count of in-flight requests.
///
/// A control is busy while its count is non-zero. Transitions into and out
/// of the busy state are published as `UiEvent::BusyChanged`.
#[derive(Clone, Default)]
pub struct Busy {
    counts: Rc<RefCell<HashMap<Control, u32>>>,
}

impl Busy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `control` busy until the returned guard is dropped.
    pub fn acquire(&self, control: Control, bus: &EventBus) -> BusyGuard {
        let became_busy = {
            let mut counts = self.counts.borrow_mut();
            let count = counts.entry(control).or_insert(0);
            *count += 1;
            *count == 1
        };
        if became_busy {
            bus.emit(UiEvent::BusyChanged { control, busy: true });
        }
        BusyGuard {
            busy: self.clone(),
            control,
            bus: bus.clone(),
        }
    }

    pub fn is_busy(&self, control: Control) -> bool {
        self.counts.borrow().get(&control).copied().unwrap_or(0) > 0
    }

    fn release(&self, control: Control, bus: &EventBus) {
        let became_idle = {
            let mut counts = self.counts.borrow_mut();
            match counts.get_mut(&control) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    *count == 0
                }
                _ => false,
            }
        };
        if became_idle {
            bus.emit(UiEvent::BusyChanged { control, busy: false });
        }
    }
}

/// Clears the busy state on drop, on every exit path.
pub struct BusyGuard {
    busy: Busy,
    control: Control,
    bus: EventBus,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.release(self.control, &self.bus);
    }
}
