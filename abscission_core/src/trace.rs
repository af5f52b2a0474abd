// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the surface lifecycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the view adapter calls at each lifecycle stage. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead).
//! When **on**, each method performs a single `Option` branch before
//! dispatching.

use alloc::boxed::Box;

use crate::surface::{SurfaceFormat, SurfaceSize};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the host reports the surface as created.
#[derive(Clone, Copy, Debug)]
pub struct CreatedEvent {
    /// Whether the priming round trip obtained a canvas.
    pub primed: bool,
}

/// Emitted when the host reports a surface format or size change.
#[derive(Clone, Copy, Debug)]
pub struct ChangedEvent {
    /// The host's pixel format for the surface.
    pub format: SurfaceFormat,
    /// New surface dimensions.
    pub size: SurfaceSize,
}

/// Emitted when the host detaches the view from the window.
#[derive(Clone, Copy, Debug)]
pub struct DetachedEvent {
    /// Whether a detach listener was armed and got notified.
    pub listener_notified: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives lifecycle events from the view adapter.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the surface is created.
    fn on_surface_created(&mut self, e: &CreatedEvent) {
        _ = e;
    }

    /// Called when the surface's format or size changes.
    fn on_surface_changed(&mut self, e: &ChangedEvent) {
        _ = e;
    }

    /// Called immediately before the surface is destroyed.
    fn on_surface_destroyed(&mut self) {}

    /// Called when the view is detached from the window.
    fn on_detached(&mut self, e: &DetachedEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional owned [`TraceSink`].
///
/// Owned rather than borrowed because the view holding it is long-lived;
/// sinks that need to be read back while installed should log through a
/// shared handle. When the `trace` feature is **off**, every method
/// compiles to nothing. When **on**, each method checks the inner
/// `Option` (one branch) before dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self {
            #[cfg(feature = "trace")]
            sink: None,
        }
    }

    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Installs a sink, replacing any previous one.
    #[inline]
    pub fn set(&mut self, sink: Box<dyn TraceSink>) {
        #[cfg(feature = "trace")]
        {
            self.sink = Some(sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
        }
    }

    /// Removes and returns the installed sink, if any.
    pub fn take_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Emits a [`CreatedEvent`].
    #[inline]
    pub fn surface_created(&mut self, e: &CreatedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_created(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ChangedEvent`].
    #[inline]
    pub fn surface_changed(&mut self, e: &ChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits the surface-destroyed event.
    #[inline]
    pub fn surface_destroyed(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_destroyed();
        }
    }

    /// Emits a [`DetachedEvent`].
    #[inline]
    pub fn detached(&mut self, e: &DetachedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_detached(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_surface_created(&CreatedEvent { primed: true });
        sink.on_surface_changed(&ChangedEvent {
            format: SurfaceFormat(1),
            size: SurfaceSize::new(320, 240),
        });
        sink.on_surface_destroyed();
        sink.on_detached(&DetachedEvent {
            listener_notified: false,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.surface_created(&CreatedEvent { primed: false });
        tracer.surface_destroyed();
        assert!(tracer.take_sink().is_none());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::rc::Rc;
        use core::cell::Cell;

        struct CountingSink {
            detaches: Rc<Cell<u32>>,
        }
        impl TraceSink for CountingSink {
            fn on_detached(&mut self, e: &DetachedEvent) {
                assert!(e.listener_notified);
                self.detaches.set(self.detaches.get() + 1);
            }
        }

        let detaches = Rc::new(Cell::new(0));
        let mut tracer = Tracer::new(Box::new(CountingSink {
            detaches: Rc::clone(&detaches),
        }));
        tracer.detached(&DetachedEvent {
            listener_notified: true,
        });
        assert_eq!(detaches.get(), 1);
    }
}
