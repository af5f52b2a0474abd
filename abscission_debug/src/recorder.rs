// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory lifecycle event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends one
//! [`RecordedEvent`] per lifecycle event, in arrival order. Because a
//! view takes ownership of its installed sink, the log lives behind a
//! shared [`RecorderHandle`]: keep one, install the sink, and read the
//! log at any point afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use abscission_core::surface::{SurfaceFormat, SurfaceSize};
use abscission_core::trace::{ChangedEvent, CreatedEvent, DetachedEvent, TraceSink};

/// One recorded lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// The surface was created.
    Created {
        /// Whether the priming round trip obtained a canvas.
        primed: bool,
    },
    /// The surface's format or size changed.
    Changed {
        /// The host's pixel format.
        format: SurfaceFormat,
        /// New surface dimensions.
        size: SurfaceSize,
    },
    /// The surface is about to be destroyed.
    Destroyed,
    /// The view was detached from the window.
    Detached {
        /// Whether a detach listener got notified.
        listener_notified: bool,
    },
}

type SharedLog = Rc<RefCell<Vec<RecordedEvent>>>;

/// A [`TraceSink`] that appends events to a shared in-memory log.
#[derive(Debug, Default)]
pub struct RecorderSink {
    log: SharedLog,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle observing this recorder's log.
    #[must_use]
    pub fn handle(&self) -> RecorderHandle {
        RecorderHandle {
            log: Rc::clone(&self.log),
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_surface_created(&mut self, e: &CreatedEvent) {
        self.log
            .borrow_mut()
            .push(RecordedEvent::Created { primed: e.primed });
    }

    fn on_surface_changed(&mut self, e: &ChangedEvent) {
        self.log.borrow_mut().push(RecordedEvent::Changed {
            format: e.format,
            size: e.size,
        });
    }

    fn on_surface_destroyed(&mut self) {
        self.log.borrow_mut().push(RecordedEvent::Destroyed);
    }

    fn on_detached(&mut self, e: &DetachedEvent) {
        self.log.borrow_mut().push(RecordedEvent::Detached {
            listener_notified: e.listener_notified,
        });
    }
}

/// Read access to a [`RecorderSink`]'s log, valid while and after the
/// sink is installed in a view.
#[derive(Clone, Debug)]
pub struct RecorderHandle {
    log: SharedLog,
}

impl RecorderHandle {
    /// Returns a snapshot of the recorded events in arrival order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RecordedEvent> {
        self.log.borrow().clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let mut sink = RecorderSink::new();
        let handle = sink.handle();

        sink.on_surface_created(&CreatedEvent { primed: true });
        sink.on_surface_changed(&ChangedEvent {
            format: SurfaceFormat(1),
            size: SurfaceSize::new(640, 480),
        });
        sink.on_surface_destroyed();
        sink.on_detached(&DetachedEvent {
            listener_notified: true,
        });

        assert_eq!(
            handle.snapshot(),
            vec![
                RecordedEvent::Created { primed: true },
                RecordedEvent::Changed {
                    format: SurfaceFormat(1),
                    size: SurfaceSize::new(640, 480),
                },
                RecordedEvent::Destroyed,
                RecordedEvent::Detached {
                    listener_notified: true,
                },
            ]
        );
    }

    #[test]
    fn handle_observes_while_sink_is_installed() {
        use abscission_core::host::NoopTeardown;
        use abscission_core::view::SurfaceLifecycleView;

        let sink = RecorderSink::new();
        let handle = sink.handle();

        let mut view = SurfaceLifecycleView::new(NoopTeardown);
        view.set_trace_sink(Box::new(sink));
        assert!(handle.is_empty());

        view.detached_from_window();
        assert_eq!(
            handle.snapshot(),
            vec![RecordedEvent::Detached {
                listener_notified: false,
            }]
        );
    }

    #[test]
    fn clear_empties_the_log() {
        let mut sink = RecorderSink::new();
        let handle = sink.handle();
        sink.on_surface_destroyed();
        assert_eq!(handle.len(), 1);
        handle.clear();
        assert!(handle.is_empty());
    }
}
