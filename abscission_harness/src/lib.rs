// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable scripted-host doubles for exercising the lifecycle adapter.
//!
//! A real windowing host owns the surface holder, drives the observer
//! callbacks, and eventually detaches the view. [`ScriptedHost`] replays
//! that behavior deterministically: every double appends to one shared
//! [`EventLog`], so cross-component ordering (listener before base
//! teardown, lock before unlock) is observable from a single sequence.
//!
//! [`HolderPathology`] simulates hosts that refuse to vend a canvas.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use abscission_core::detach::ListenerAlreadySet;
use abscission_core::host::HostTeardown;
use abscission_core::observer::SurfaceObserver;
use abscission_core::surface::{SurfaceFormat, SurfaceHolder, SurfaceSize};
use abscission_core::view::{SurfaceLifecycleView, ViewConfig};

/// One entry in the shared host event log, in host order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// The host reported the surface as created.
    Created,
    /// The holder vended a canvas.
    CanvasLocked,
    /// The canvas was returned and posted.
    CanvasUnlocked,
    /// The holder refused to vend a canvas.
    LockRefused,
    /// The host reported a format or size change.
    Changed(SurfaceFormat, SurfaceSize),
    /// The host reported the surface as about to be destroyed.
    Destroyed,
    /// The armed detach listener ran.
    ListenerNotified,
    /// The host's base detachment teardown ran.
    BaseTeardown,
}

/// Shared append-only event log handed to every double.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<HostEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&self, event: HostEvent) {
        self.entries.borrow_mut().push(event);
    }

    /// Returns a snapshot of the log in arrival order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HostEvent> {
        self.entries.borrow().clone()
    }

    /// Returns the number of logged events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns the position of the first occurrence of `event`, if any.
    #[must_use]
    pub fn position(&self, event: HostEvent) -> Option<usize> {
        self.entries.borrow().iter().position(|&e| e == event)
    }

    /// Returns how many times `event` occurs in the log.
    #[must_use]
    pub fn count(&self, event: HostEvent) -> usize {
        self.entries.borrow().iter().filter(|&&e| e == event).count()
    }
}

/// Runtime pathology toggles for the recording holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HolderPathology {
    /// The holder refuses to vend a canvas.
    pub refuse_lock: bool,
}

/// Token standing in for a locked canvas.
///
/// Carries no drawing surface: the harness verifies that nothing is ever
/// drawn, only that locks and unlocks pair up.
#[derive(Debug)]
pub struct CanvasToken(());

/// A [`SurfaceHolder`] double that logs every lock and unlock.
#[derive(Debug)]
pub struct RecordingHolder {
    log: EventLog,
    pathology: HolderPathology,
    locks: usize,
    unlocks: usize,
}

impl RecordingHolder {
    /// Creates a holder appending to `log`.
    #[must_use]
    pub fn new(log: EventLog) -> Self {
        Self::with_pathology(log, HolderPathology::default())
    }

    /// Creates a holder with pathology toggles.
    #[must_use]
    pub fn with_pathology(log: EventLog, pathology: HolderPathology) -> Self {
        Self {
            log,
            pathology,
            locks: 0,
            unlocks: 0,
        }
    }

    /// Updates the pathology toggles mid-script.
    pub fn set_pathology(&mut self, pathology: HolderPathology) {
        self.pathology = pathology;
    }

    /// Returns how many locks the holder has vended.
    #[must_use]
    pub fn lock_count(&self) -> usize {
        self.locks
    }

    /// Returns how many canvases have been returned.
    #[must_use]
    pub fn unlock_count(&self) -> usize {
        self.unlocks
    }
}

impl SurfaceHolder for RecordingHolder {
    type Canvas = CanvasToken;

    fn lock_canvas(&mut self) -> Option<CanvasToken> {
        if self.pathology.refuse_lock {
            self.log.push(HostEvent::LockRefused);
            return None;
        }
        self.locks += 1;
        self.log.push(HostEvent::CanvasLocked);
        Some(CanvasToken(()))
    }

    fn unlock_canvas_and_post(&mut self, canvas: CanvasToken) {
        let CanvasToken(()) = canvas;
        self.unlocks += 1;
        self.log.push(HostEvent::CanvasUnlocked);
    }
}

/// A [`HostTeardown`] double that logs when the base teardown runs.
#[derive(Debug)]
pub struct RecordingTeardown {
    log: EventLog,
}

impl RecordingTeardown {
    /// Creates a teardown appending to `log`.
    #[must_use]
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl HostTeardown for RecordingTeardown {
    fn teardown(&mut self) {
        self.log.push(HostEvent::BaseTeardown);
    }
}

/// One step of scripted host behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostStep {
    /// Report surface creation.
    Create,
    /// Report a format/size change.
    Change(SurfaceFormat, SurfaceSize),
    /// Report impending surface destruction.
    Destroy,
    /// Detach the view from the window.
    Detach,
}

/// Replays host behavior against a wrapped lifecycle view.
///
/// Owns the recording holder and the view, drives the observer callbacks
/// in host order, and exposes the shared log for assertions.
#[derive(Debug)]
pub struct ScriptedHost {
    log: EventLog,
    holder: RecordingHolder,
    view: SurfaceLifecycleView<RecordingTeardown>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedHost {
    /// Creates a host with default view configuration and no pathology.
    #[must_use]
    pub fn new() -> Self {
        Self::with_setup(ViewConfig::default(), HolderPathology::default())
    }

    /// Creates a host with explicit view configuration and pathology.
    #[must_use]
    pub fn with_setup(config: ViewConfig, pathology: HolderPathology) -> Self {
        let log = EventLog::new();
        let holder = RecordingHolder::with_pathology(log.clone(), pathology);
        let view = SurfaceLifecycleView::with_config(RecordingTeardown::new(log.clone()), config);
        Self { log, holder, view }
    }

    /// Returns the shared event log.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Returns the recording holder.
    #[must_use]
    pub fn holder(&self) -> &RecordingHolder {
        &self.holder
    }

    /// Returns the wrapped view.
    #[must_use]
    pub fn view(&self) -> &SurfaceLifecycleView<RecordingTeardown> {
        &self.view
    }

    /// Returns the wrapped view mutably.
    pub fn view_mut(&mut self) -> &mut SurfaceLifecycleView<RecordingTeardown> {
        &mut self.view
    }

    /// Arms a detach listener that logs [`HostEvent::ListenerNotified`].
    ///
    /// # Errors
    ///
    /// Propagates [`ListenerAlreadySet`] from the view, so misuse remains
    /// observable through the harness.
    pub fn arm_detach_listener(&mut self) -> Result<(), ListenerAlreadySet> {
        let log = self.log.clone();
        self.view
            .set_detached_listener(move || log.push(HostEvent::ListenerNotified))
    }

    /// Host step: the surface exists and can be locked.
    pub fn create_surface(&mut self) {
        self.log.push(HostEvent::Created);
        self.view.on_created(&mut self.holder);
    }

    /// Host step: the surface's format or size changed.
    pub fn change_surface(&mut self, format: SurfaceFormat, size: SurfaceSize) {
        self.log.push(HostEvent::Changed(format, size));
        self.view.on_changed(&mut self.holder, format, size);
    }

    /// Host step: the surface is about to be destroyed.
    pub fn destroy_surface(&mut self) {
        self.log.push(HostEvent::Destroyed);
        self.view.on_destroyed(&mut self.holder);
    }

    /// Host step: remove the view from the window hierarchy.
    pub fn detach(&mut self) {
        self.view.detached_from_window();
    }

    /// Replays the steps in order.
    pub fn run(&mut self, steps: &[HostStep]) {
        for &step in steps {
            match step {
                HostStep::Create => self.create_surface(),
                HostStep::Change(format, size) => self.change_surface(format, size),
                HostStep::Destroy => self.destroy_surface(),
                HostStep::Detach => self.detach(),
            }
        }
    }
}
