// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-surface lifecycle adaptation.
//!
//! `abscission_core` bridges the surface lifecycle events of a host
//! windowing toolkit to an external owner that must know precisely when a
//! rendering surface is about to become invalid, typically to join or
//! stop a render thread before the host tears the surface down. It is
//! `no_std` compatible (with `alloc`) and contains no platform code; host
//! integrations live in backend crates.
//!
//! # Architecture
//!
//! The crate is organized around a view adapter that the host drives and
//! an owner observes:
//!
//! ```text
//!   Host toolkit
//!       │  on_created / on_changed / on_destroyed   (SurfaceObserver)
//!       │  detached_from_window()
//!       ▼
//!   SurfaceLifecycleView ──► DetachSlot::fire() ──► owner listener
//!       │                                               │
//!       │  HostTeardown::teardown()                     ▼
//!       ▼                                          DetachWatcher
//!   host base teardown                          (render thread polls)
//! ```
//!
//! **[`surface`]** — The [`SurfaceHolder`](surface::SurfaceHolder)
//! capability mediating access to a host surface, plus the
//! [`prime`](surface::prime) round trip performed on surface creation.
//!
//! **[`observer`]** — The [`SurfaceObserver`](observer::SurfaceObserver)
//! capability the host invokes for surface events. Composed via
//! delegation, never by subclassing a host type, so adapters are testable
//! without a real windowing host.
//!
//! **[`detach`]** — The write-once [`DetachSlot`](detach::DetachSlot)
//! holding the owner's detach listener, and the crate's sole error,
//! [`ListenerAlreadySet`](detach::ListenerAlreadySet).
//!
//! **[`host`]** — The [`HostTeardown`](host::HostTeardown) delegate for
//! the host view's default detachment teardown.
//!
//! **[`view`]** — [`SurfaceLifecycleView`](view::SurfaceLifecycleView),
//! the adapter tying the pieces together.
//!
//! **[`signal`]** — [`detach_signal`](signal::detach_signal), a
//! `Send + Sync` one-way flag for owners whose detach consumer runs on a
//! different thread than the host callbacks.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for lifecycle instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Threading
//!
//! The adapter executes entirely on whatever thread the host invokes its
//! callbacks from. Host toolkits conventionally deliver attachment events
//! on the UI thread and surface events on a render thread; the adapter
//! performs no locking and relies on the host not re-entering callbacks
//! concurrently on the same view. Cross-thread handoff belongs to the
//! owner; see [`signal`].
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod detach;
pub mod host;
pub mod observer;
pub mod signal;
pub mod surface;
pub mod trace;
pub mod view;
