// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface-holder capability.
//!
//! A *surface* is the drawable back-buffer a rendering subsystem draws
//! into; the *holder* is the host-provided object mediating access to it.
//! [`SurfaceHolder`] restates that host contract as a trait so adapters
//! and tests can stand in for the real host object.
//!
//! [`prime`] performs the acquire/release round trip a freshly created
//! surface gets before any real rendering begins.

use core::fmt;

/// Identifies the host's pixel format for a surface.
///
/// Hosts assign format values when a surface changes. Core code passes
/// them through without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceFormat(pub u32);

impl fmt::Debug for SurfaceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceFormat({})", self.0)
    }
}

/// Surface dimensions in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SurfaceSize {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Creates a size from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Mediates access to a host-owned drawable surface.
///
/// The host owns the holder and the surface behind it; implementors vend
/// a canvas handle for the duration of a lock. Locking may fail (hosts
/// refuse to vend a canvas while the surface is not in a drawable state),
/// and callers must not retain the canvas past the matching unlock.
pub trait SurfaceHolder {
    /// The drawable handle vended while the surface is locked.
    type Canvas;

    /// Acquires the drawable canvas, or [`None`] if the surface cannot be
    /// locked right now.
    fn lock_canvas(&mut self) -> Option<Self::Canvas>;

    /// Releases the canvas and presents whatever was drawn into it.
    fn unlock_canvas_and_post(&mut self, canvas: Self::Canvas);
}

/// Acquires and immediately releases the holder's canvas with no drawing
/// performed.
///
/// Performed once when a surface is created, this forces the holder into
/// a fully initialized state before any real rendering begins; it has no
/// other externally visible effect. If the holder refuses the lock, the
/// unlock is skipped and `false` is returned.
pub fn prime<H: SurfaceHolder>(holder: &mut H) -> bool {
    match holder.lock_canvas() {
        Some(canvas) => {
            holder.unlock_canvas_and_post(canvas);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingHolder {
        locks: u32,
        unlocks: u32,
        refuse: bool,
    }

    impl SurfaceHolder for CountingHolder {
        type Canvas = ();

        fn lock_canvas(&mut self) -> Option<()> {
            if self.refuse {
                return None;
            }
            self.locks += 1;
            Some(())
        }

        fn unlock_canvas_and_post(&mut self, (): ()) {
            self.unlocks += 1;
        }
    }

    #[test]
    fn prime_is_a_single_round_trip() {
        let mut holder = CountingHolder {
            locks: 0,
            unlocks: 0,
            refuse: false,
        };
        assert!(prime(&mut holder));
        assert_eq!(holder.locks, 1);
        assert_eq!(holder.unlocks, 1);
    }

    #[test]
    fn prime_skips_unlock_when_lock_refused() {
        let mut holder = CountingHolder {
            locks: 0,
            unlocks: 0,
            refuse: true,
        };
        assert!(!prime(&mut holder));
        assert_eq!(holder.locks, 0);
        assert_eq!(holder.unlocks, 0);
    }

    #[test]
    fn surface_format_is_opaque() {
        let fmt = SurfaceFormat(0x8888);
        assert_eq!(fmt, SurfaceFormat(0x8888));
        assert_ne!(fmt, SurfaceFormat::default());
    }
}
