// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Write-once storage for the detach listener.
//!
//! A view notifies its owner of detachment at most once, through a
//! listener that is set at most once. [`DetachSlot`] makes both halves of
//! that invariant structural: the listener is an `FnOnce` consumed on
//! [`fire`](DetachSlot::fire), and arming an occupied slot fails with
//! [`ListenerAlreadySet`] while leaving the original listener in place.

use alloc::boxed::Box;
use core::fmt;

/// The owner-supplied detach callback.
///
/// Invoked with no arguments, at most once per view, on the thread the
/// host delivers detachment on.
pub type DetachListener = Box<dyn FnOnce()>;

/// Attempted to register a second detach listener on a slot that already
/// holds one.
///
/// This is programmer misuse, not a recoverable runtime condition: it is
/// raised synchronously at the call site and the originally registered
/// listener remains the one that will be notified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerAlreadySet;

impl fmt::Display for ListenerAlreadySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("detach listener has already been set")
    }
}

impl core::error::Error for ListenerAlreadySet {}

enum SlotState {
    Empty,
    Armed(DetachListener),
    Fired,
}

/// Write-once cell holding the detach listener.
///
/// State machine: `Empty → Armed → Fired`, with `Empty → Armed` the only
/// transition a caller can request. An empty slot fires as a no-op and
/// stays empty, so a listener armed afterwards is simply never notified.
pub struct DetachSlot {
    state: SlotState,
}

impl fmt::Debug for DetachSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            SlotState::Empty => "Empty",
            SlotState::Armed(_) => "Armed",
            SlotState::Fired => "Fired",
        };
        f.debug_struct("DetachSlot").field("state", &state).finish()
    }
}

impl Default for DetachSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl DetachSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SlotState::Empty,
        }
    }

    /// Creates a slot with the listener already armed.
    ///
    /// Arming at construction has no error case: a fresh slot cannot
    /// collide with an earlier listener.
    #[must_use]
    pub fn armed(listener: DetachListener) -> Self {
        Self {
            state: SlotState::Armed(listener),
        }
    }

    /// Stores the listener in an empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerAlreadySet`] if a listener was already armed
    /// (whether or not it has fired since). The stored listener is
    /// unaffected.
    pub fn arm(&mut self, listener: DetachListener) -> Result<(), ListenerAlreadySet> {
        match self.state {
            SlotState::Empty => {
                self.state = SlotState::Armed(listener);
                Ok(())
            }
            SlotState::Armed(_) | SlotState::Fired => Err(ListenerAlreadySet),
        }
    }

    /// Invokes and consumes the armed listener, if any.
    ///
    /// Returns whether a listener ran. Firing an empty or already-fired
    /// slot is a no-op, so the listener runs at most once no matter how
    /// often this is called.
    pub fn fire(&mut self) -> bool {
        match core::mem::replace(&mut self.state, SlotState::Fired) {
            SlotState::Armed(listener) => {
                listener();
                true
            }
            SlotState::Empty => {
                self.state = SlotState::Empty;
                false
            }
            SlotState::Fired => false,
        }
    }

    /// Returns whether a listener is armed and has not yet fired.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, SlotState::Armed(_))
    }

    /// Returns whether an armed listener has fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        matches!(self.state, SlotState::Fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counting_listener(count: &Rc<Cell<u32>>) -> DetachListener {
        let count = Rc::clone(count);
        Box::new(move || count.set(count.get() + 1))
    }

    #[test]
    fn fires_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let mut slot = DetachSlot::new();
        slot.arm(counting_listener(&count)).unwrap();
        assert!(slot.is_armed());

        assert!(slot.fire());
        assert_eq!(count.get(), 1);
        assert!(slot.has_fired());

        assert!(!slot.fire());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn armed_constructor_behaves_like_arm() {
        let count = Rc::new(Cell::new(0));
        let mut slot = DetachSlot::armed(counting_listener(&count));
        assert!(slot.is_armed());
        assert_eq!(
            slot.arm(counting_listener(&count)),
            Err(ListenerAlreadySet)
        );
        assert!(slot.fire());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn second_arm_fails_and_keeps_original() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = DetachSlot::new();
        slot.arm(counting_listener(&first)).unwrap();
        assert_eq!(
            slot.arm(counting_listener(&second)),
            Err(ListenerAlreadySet)
        );

        slot.fire();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn arm_after_fire_fails() {
        let count = Rc::new(Cell::new(0));
        let mut slot = DetachSlot::new();
        slot.arm(counting_listener(&count)).unwrap();
        slot.fire();
        assert_eq!(
            slot.arm(counting_listener(&count)),
            Err(ListenerAlreadySet)
        );
    }

    #[test]
    fn empty_slot_fires_as_noop_and_stays_armable() {
        let count = Rc::new(Cell::new(0));
        let mut slot = DetachSlot::new();
        assert!(!slot.fire());
        assert!(!slot.has_fired());

        // Late arm succeeds but there is no second fire in a view's life.
        slot.arm(counting_listener(&count)).unwrap();
        assert!(slot.is_armed());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn error_formats_for_diagnostics() {
        use alloc::string::ToString;
        assert_eq!(
            ListenerAlreadySet.to_string(),
            "detach listener has already been set"
        );
    }
}
