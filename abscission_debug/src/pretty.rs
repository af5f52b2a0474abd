// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! lifecycle event to a [`Write`](std::io::Write) destination (default:
//! stderr).

use std::io::Write;

use abscission_core::trace::{ChangedEvent, CreatedEvent, DetachedEvent, TraceSink};

/// Writes human-readable lifecycle lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_surface_created(&mut self, e: &CreatedEvent) {
        let _ = writeln!(self.writer, "[created] primed={}", e.primed);
    }

    fn on_surface_changed(&mut self, e: &ChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[changed] format={} size={}x{}",
            e.format.0, e.size.width, e.size.height
        );
    }

    fn on_surface_destroyed(&mut self) {
        let _ = writeln!(self.writer, "[destroyed]");
    }

    fn on_detached(&mut self, e: &DetachedEvent) {
        let _ = writeln!(self.writer, "[detached] notified={}", e.listener_notified);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abscission_core::surface::{SurfaceFormat, SurfaceSize};

    #[test]
    fn one_line_per_event() {
        let mut buf = Vec::new();
        {
            let mut sink = PrettyPrintSink::with_writer(&mut buf);
            sink.on_surface_created(&CreatedEvent { primed: true });
            sink.on_surface_changed(&ChangedEvent {
                format: SurfaceFormat(4),
                size: SurfaceSize::new(800, 600),
            });
            sink.on_surface_destroyed();
            sink.on_detached(&DetachedEvent {
                listener_notified: false,
            });
        }
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "[created] primed=true\n\
             [changed] format=4 size=800x600\n\
             [destroyed]\n\
             [detached] notified=false\n"
        );
    }
}
