// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for abscission.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`CanvasHolder`]: an `HtmlCanvasElement` behind the
//!   [`SurfaceHolder`] capability
//! - [`DomTeardown`]: DOM removal as the base detachment teardown
//!
//! The browser has no explicit surface-destroyed notification; a host
//! application drives the adapter itself, calling
//! `detached_from_window()` when it takes the canvas out of the page.

#![no_std]

mod canvas;

pub use abscission_core::host::HostTeardown;
pub use abscission_core::surface::SurfaceHolder;
pub use canvas::{CanvasHolder, DomTeardown};
