// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for abscission
//! diagnostics.
//!
//! This crate provides [`TraceSink`](abscission_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event
//!   output.
//! - [`recorder::RecorderSink`] — in-memory recording observable through
//!   a shared [`recorder::RecorderHandle`] while the sink is installed.
//! - [`json::export`] — writes a recorded log as JSON lines.

pub mod json;
pub mod pretty;
pub mod recorder;
