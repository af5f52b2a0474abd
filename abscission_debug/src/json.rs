// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded lifecycle logs.
//!
//! [`export`] writes a recorded log as [JSON lines]: one object per
//! event, tagged with a `"type"` field, suitable for ingestion by log
//! tooling or ad-hoc `jq` queries.
//!
//! [JSON lines]: https://jsonlines.org

use std::io::{self, Write};

use serde_json::json;

use crate::recorder::RecordedEvent;

/// Writes one JSON object per recorded event to the given writer.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    for event in events {
        let value = match *event {
            RecordedEvent::Created { primed } => json!({
                "type": "created",
                "primed": primed,
            }),
            RecordedEvent::Changed { format, size } => json!({
                "type": "changed",
                "format": format.0,
                "width": size.width,
                "height": size.height,
            }),
            RecordedEvent::Destroyed => json!({
                "type": "destroyed",
            }),
            RecordedEvent::Detached { listener_notified } => json!({
                "type": "detached",
                "listener_notified": listener_notified,
            }),
        };
        writeln!(writer, "{value}")?;
    }
    Ok(())
}
