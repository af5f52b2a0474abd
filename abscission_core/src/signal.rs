// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-thread detach observation.
//!
//! Detachment is delivered on whichever thread the host uses for
//! attachment events, while the party that must react (typically a
//! render thread deciding when to exit its frame loop) often runs
//! elsewhere. The adapter itself does no queueing or synchronization;
//! this module gives the owner a minimal handoff primitive instead.
//!
//! [`detach_signal`] returns a connected pair: move the
//! [`DetachNotifier`] into the detach listener, poll the
//! [`DetachWatcher`] from the consuming thread.
//!
//! ```
//! use abscission_core::host::NoopTeardown;
//! use abscission_core::signal::detach_signal;
//! use abscission_core::view::SurfaceLifecycleView;
//!
//! let (notifier, watcher) = detach_signal();
//! let mut view =
//!     SurfaceLifecycleView::with_detached_listener(NoopTeardown, move || notifier.notify());
//!
//! // ... render thread checks watcher.is_detached() each frame ...
//! view.detached_from_window();
//! assert!(watcher.is_detached());
//! ```

use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

/// Creates a connected notifier/watcher pair.
///
/// Both halves are `Send + Sync`; the watcher may be cloned freely.
#[must_use]
pub fn detach_signal() -> (DetachNotifier, DetachWatcher) {
    let flag = Arc::new(AtomicBool::new(false));
    (
        DetachNotifier {
            flag: Arc::clone(&flag),
        },
        DetachWatcher { flag },
    )
}

/// Raises the detach flag; the sending half of [`detach_signal`].
///
/// Intended to be moved into a detach listener. The flag is one-way:
/// once raised it stays raised.
pub struct DetachNotifier {
    flag: Arc<AtomicBool>,
}

impl fmt::Debug for DetachNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetachNotifier")
            .field("raised", &self.flag.load(Ordering::Relaxed))
            .finish()
    }
}

impl DetachNotifier {
    /// Raises the flag. Safe to call from the host's callback thread.
    ///
    /// Release ordering pairs with the watcher's acquire load, so work
    /// the listener did before notifying is visible to the thread that
    /// observes the detachment.
    pub fn notify(self) {
        self.flag.store(true, Ordering::Release);
    }
}

/// Observes the detach flag; the receiving half of [`detach_signal`].
#[derive(Clone)]
pub struct DetachWatcher {
    flag: Arc<AtomicBool>,
}

impl fmt::Debug for DetachWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetachWatcher")
            .field("raised", &self.flag.load(Ordering::Relaxed))
            .finish()
    }
}

impl DetachWatcher {
    /// Returns whether detachment has been signaled.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_lowered() {
        let (_notifier, watcher) = detach_signal();
        assert!(!watcher.is_detached());
    }

    #[test]
    fn notify_raises_for_all_watchers() {
        let (notifier, watcher) = detach_signal();
        let second = watcher.clone();
        notifier.notify();
        assert!(watcher.is_detached());
        assert!(second.is_detached());
    }

    #[test]
    fn dropping_the_notifier_without_notifying_leaves_it_lowered() {
        let (notifier, watcher) = detach_signal();
        drop(notifier);
        assert!(!watcher.is_detached());
    }
}
