// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface lifecycle view adapter.
//!
//! [`SurfaceLifecycleView`] wraps a host view's teardown delegate and
//! implements [`SurfaceObserver`], so every surface event and the
//! detachment of the view route through it. Wrapping the host view *is*
//! the registration: there is no separate subscribe step, and no way for
//! an event to bypass the adapter once the host drives it.
//!
//! The one piece of owner-facing behavior is detach notification: an
//! owner arms a listener (once), and when the host detaches the view the
//! listener is invoked strictly before the host's own teardown runs, so
//! it may still safely reference resources that teardown will release.

use alloc::boxed::Box;
use core::fmt;

use crate::detach::{DetachSlot, ListenerAlreadySet};
use crate::host::HostTeardown;
use crate::observer::SurfaceObserver;
use crate::surface::{self, SurfaceFormat, SurfaceHolder, SurfaceSize};
use crate::trace::{ChangedEvent, CreatedEvent, DetachedEvent, TraceSink, Tracer};

/// Whether the view is still part of the window hierarchy.
///
/// The transition is one-way and host-triggered; `Detached` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// The view is attached; surface events may still arrive.
    Attached,
    /// The host has detached the view; its rendering resources are no
    /// longer valid.
    Detached,
}

/// Configuration for a [`SurfaceLifecycleView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// Perform the defensive acquire/release round trip when the surface
    /// is created. Hosts whose holders initialize eagerly can turn this
    /// off.
    pub prime_on_create: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            prime_on_create: true,
        }
    }
}

/// Bridges host surface lifecycle events to an external owner.
///
/// The host constructs the view (wrapping its teardown delegate), drives
/// the [`SurfaceObserver`] callbacks, and eventually calls
/// [`detached_from_window`](Self::detached_from_window). The owner arms a
/// detach listener (at most one, at most once) and is notified exactly
/// when detachment begins.
///
/// All methods execute on the caller's thread; the view performs no
/// locking and relies on the host not re-entering callbacks concurrently
/// on the same instance.
pub struct SurfaceLifecycleView<V: HostTeardown> {
    host: V,
    slot: DetachSlot,
    attachment: Attachment,
    config: ViewConfig,
    tracer: Tracer,
}

impl<V: HostTeardown> fmt::Debug for SurfaceLifecycleView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceLifecycleView")
            .field("slot", &self.slot)
            .field("attachment", &self.attachment)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<V: HostTeardown> SurfaceLifecycleView<V> {
    /// Creates a view wrapping the host's teardown delegate.
    #[must_use]
    pub fn new(host: V) -> Self {
        Self::with_config(host, ViewConfig::default())
    }

    /// Creates a view with explicit configuration.
    #[must_use]
    pub fn with_config(host: V, config: ViewConfig) -> Self {
        Self {
            host,
            slot: DetachSlot::new(),
            attachment: Attachment::Attached,
            config,
            tracer: Tracer::none(),
        }
    }

    /// Creates a view with the detach listener armed from the start.
    ///
    /// Constructor injection sidesteps the one error this component has:
    /// a listener armed here can never collide with an earlier one.
    #[must_use]
    pub fn with_detached_listener<F>(host: V, listener: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            host,
            slot: DetachSlot::armed(Box::new(listener)),
            attachment: Attachment::Attached,
            config: ViewConfig::default(),
            tracer: Tracer::none(),
        }
    }

    /// Arms the detach listener.
    ///
    /// The listener is invoked with no arguments, at most once, exactly
    /// when the host detaches the view, strictly before the host's own
    /// teardown runs.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerAlreadySet`] if a listener was already armed on
    /// this view. The original listener stays in place and remains the
    /// one that will be notified.
    pub fn set_detached_listener<F>(&mut self, listener: F) -> Result<(), ListenerAlreadySet>
    where
        F: FnOnce() + 'static,
    {
        self.slot.arm(Box::new(listener))
    }

    /// Returns whether a detach listener is armed and not yet notified.
    #[must_use]
    pub fn has_detached_listener(&self) -> bool {
        self.slot.is_armed()
    }

    /// Returns the view's attachment state.
    #[must_use]
    pub fn attachment(&self) -> Attachment {
        self.attachment
    }

    /// Returns an immutable reference to the host delegate.
    #[must_use]
    pub fn host(&self) -> &V {
        &self.host
    }

    /// Returns a mutable reference to the host delegate.
    pub fn host_mut(&mut self) -> &mut V {
        &mut self.host
    }

    /// Consumes the view and returns the host delegate.
    #[must_use]
    pub fn into_host(self) -> V {
        self.host
    }

    /// Installs a lifecycle trace sink (`trace` feature).
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer.set(sink);
    }

    /// Removes and returns the installed trace sink, if any.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take_sink()
    }

    /// Host-invoked: the view is being removed from the window hierarchy.
    ///
    /// Notifies the armed detach listener (if any), **then** runs the
    /// host's default teardown. The ordering is fixed so the listener may
    /// still reference resources the teardown will release. Conventionally
    /// delivered on the UI thread.
    ///
    /// `Detached` is terminal: calling this on an already-detached view
    /// does nothing (no second notification, no second teardown).
    pub fn detached_from_window(&mut self) {
        if self.attachment == Attachment::Detached {
            return;
        }
        let notified = self.slot.fire();
        self.host.teardown();
        self.attachment = Attachment::Detached;
        self.tracer.detached(&DetachedEvent {
            listener_notified: notified,
        });
    }
}

impl<V: HostTeardown, H: SurfaceHolder> SurfaceObserver<H> for SurfaceLifecycleView<V> {
    /// Primes the freshly created surface: one acquire/release round trip
    /// with no drawing, forcing the holder into a fully initialized state.
    fn on_created(&mut self, holder: &mut H) {
        let primed = self.config.prime_on_create && surface::prime(holder);
        self.tracer.surface_created(&CreatedEvent { primed });
    }

    /// Intentionally ignored.
    fn on_changed(&mut self, holder: &mut H, format: SurfaceFormat, size: SurfaceSize) {
        _ = holder;
        self.tracer.surface_changed(&ChangedEvent { format, size });
    }

    /// Intentionally ignored.
    fn on_destroyed(&mut self, holder: &mut H) {
        _ = holder;
        self.tracer.surface_destroyed();
    }
}
