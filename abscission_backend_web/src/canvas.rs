// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas element management.
//!
//! [`CanvasHolder`] puts an `HtmlCanvasElement` behind the
//! [`SurfaceHolder`] capability: locking fetches the element's `"2d"`
//! context, unlocking drops it. The browser presents committed canvas
//! state on its own schedule, so there is no explicit post step.
//!
//! [`DomTeardown`] is the web analogue of the host view's base
//! detachment teardown: it removes the canvas element from the document.

use abscission_core::host::HostTeardown;
use abscission_core::surface::SurfaceHolder;
use wasm_bindgen::JsCast as _;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// An `HtmlCanvasElement` behind the [`SurfaceHolder`] capability.
///
/// Element handles are cheap JS references; clone the element into the
/// holder and hand the original to whatever drives rendering.
pub struct CanvasHolder {
    canvas: HtmlCanvasElement,
}

impl core::fmt::Debug for CanvasHolder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasHolder")
            .field("canvas", &"HtmlCanvasElement")
            .finish()
    }
}

impl CanvasHolder {
    /// Creates a holder for the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    /// Returns a reference to the canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl SurfaceHolder for CanvasHolder {
    type Canvas = CanvasRenderingContext2d;

    /// Fetches the `"2d"` context, or [`None`] if the element refuses one
    /// (a context of another kind was already created, or the element is
    /// detached in a way the browser rejects).
    fn lock_canvas(&mut self) -> Option<CanvasRenderingContext2d> {
        let ctx = self.canvas.get_context("2d").ok().flatten()?;
        Some(ctx.unchecked_into())
    }

    fn unlock_canvas_and_post(&mut self, canvas: CanvasRenderingContext2d) {
        // The browser presents committed canvas state on its own; dropping
        // the context handle is the whole release.
        drop(canvas);
    }
}

/// Removes the canvas element from the document on detach.
pub struct DomTeardown {
    canvas: HtmlCanvasElement,
}

impl core::fmt::Debug for DomTeardown {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomTeardown")
            .field("canvas", &"HtmlCanvasElement")
            .finish()
    }
}

impl DomTeardown {
    /// Creates a teardown that will remove `canvas` from the document.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl HostTeardown for DomTeardown {
    fn teardown(&mut self) {
        self.canvas.remove();
    }
}
