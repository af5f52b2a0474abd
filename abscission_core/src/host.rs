// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host view teardown delegate.
//!
//! When the host removes a view from the window hierarchy it runs a
//! default teardown that releases the view's rendering resources. An
//! adapter built by delegation rather than subclassing needs an explicit
//! handle on that behavior, so the notify-before-teardown ordering can be
//! enforced inside the adapter itself. [`HostTeardown`] is that handle.

/// The host view's default detachment teardown.
///
/// Invoked by [`SurfaceLifecycleView`] strictly after the detach listener
/// has been notified, on the thread the host delivered detachment on.
/// After it returns the view's rendering resources are no longer valid.
///
/// [`SurfaceLifecycleView`]: crate::view::SurfaceLifecycleView
pub trait HostTeardown {
    /// Runs the default detachment teardown.
    fn teardown(&mut self);
}

/// A [`HostTeardown`] with no base behavior.
///
/// For owners embedding the adapter somewhere with nothing to release on
/// detach.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTeardown;

impl HostTeardown for NoopTeardown {
    fn teardown(&mut self) {}
}
