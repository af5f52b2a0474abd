// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface lifecycle observer capability.
//!
//! Host toolkits deliver surface events through a fixed callback
//! interface. [`SurfaceObserver`] restates that interface as an explicit
//! trait composed via delegation, so an adapter can be driven by a test
//! host just as well as by a real one. All methods default to no-ops;
//! implementors override only the events they care about.

use crate::surface::{SurfaceFormat, SurfaceHolder, SurfaceSize};

/// Receives surface lifecycle events from the host.
///
/// The host invokes these with the holder it owns. Which thread they
/// arrive on is a host convention (typically a render thread); the
/// observer must not assume it is the thread the view was created on.
pub trait SurfaceObserver<H: SurfaceHolder> {
    /// Called once the surface exists and can be locked.
    fn on_created(&mut self, holder: &mut H) {
        _ = holder;
    }

    /// Called when the surface's format or size changes.
    fn on_changed(&mut self, holder: &mut H, format: SurfaceFormat, size: SurfaceSize) {
        _ = (holder, format, size);
    }

    /// Called immediately before the surface is destroyed. After this
    /// returns, the surface must not be touched.
    fn on_destroyed(&mut self, holder: &mut H) {
        _ = holder;
    }
}

/// A [`SurfaceObserver`] that ignores all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<H: SurfaceHolder> SurfaceObserver<H> for NoopObserver {}
