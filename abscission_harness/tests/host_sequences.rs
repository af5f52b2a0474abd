// Copyright 2026 the Abscission Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests over arbitrary host event sequences.
//!
//! Whatever order a host delivers create/change/destroy/detach in, the
//! adapter must never panic, never notify more than once, never tear
//! down more than once, and never let the base teardown precede the
//! listener.

use abscission_core::surface::{SurfaceFormat, SurfaceSize};
use abscission_core::view::{Attachment, ViewConfig};
use abscission_harness::{HolderPathology, HostEvent, HostStep, ScriptedHost};
use proptest::prelude::*;

fn host_step() -> impl Strategy<Value = HostStep> {
    prop_oneof![
        Just(HostStep::Create),
        (any::<u32>(), 0u32..=8192, 0u32..=8192).prop_map(|(format, w, h)| HostStep::Change(
            SurfaceFormat(format),
            SurfaceSize::new(w, h)
        )),
        Just(HostStep::Destroy),
        Just(HostStep::Detach),
    ]
}

proptest! {
    #[test]
    fn any_sequence_notifies_at_most_once(
        steps in proptest::collection::vec(host_step(), 0..40),
        armed in any::<bool>(),
    ) {
        let mut host = ScriptedHost::new();
        if armed {
            host.arm_detach_listener().unwrap();
        }
        host.run(&steps);

        let notified = host.log().count(HostEvent::ListenerNotified);
        let teardowns = host.log().count(HostEvent::BaseTeardown);
        let detached = steps.contains(&HostStep::Detach);

        prop_assert_eq!(notified, usize::from(armed && detached));
        prop_assert_eq!(teardowns, usize::from(detached));
        if detached {
            prop_assert_eq!(host.view().attachment(), Attachment::Detached);
        }
    }

    #[test]
    fn listener_always_precedes_teardown(
        prefix in proptest::collection::vec(host_step(), 0..20),
        suffix in proptest::collection::vec(host_step(), 0..20),
    ) {
        let mut host = ScriptedHost::new();
        host.arm_detach_listener().unwrap();
        host.run(&prefix);
        host.detach();
        host.run(&suffix);

        let notified = host.log().position(HostEvent::ListenerNotified).unwrap();
        let teardown = host.log().position(HostEvent::BaseTeardown).unwrap();
        prop_assert!(notified < teardown);
    }

    #[test]
    fn locks_and_unlocks_always_pair(
        steps in proptest::collection::vec(host_step(), 0..40),
        refuse_lock in any::<bool>(),
    ) {
        let mut host = ScriptedHost::with_setup(
            ViewConfig::default(),
            HolderPathology { refuse_lock },
        );
        host.run(&steps);

        // The priming round trip is the only canvas access the adapter
        // performs, and it is fully scoped to creation.
        prop_assert_eq!(host.holder().lock_count(), host.holder().unlock_count());
        let creates = steps.iter().filter(|&&s| s == HostStep::Create).count();
        if refuse_lock {
            prop_assert_eq!(host.holder().lock_count(), 0);
            prop_assert_eq!(host.log().count(HostEvent::LockRefused), creates);
        } else {
            prop_assert_eq!(host.holder().lock_count(), creates);
        }
    }

    #[test]
    fn changes_and_destroys_never_touch_the_canvas(
        steps in proptest::collection::vec(host_step(), 0..40),
    ) {
        let mut host = ScriptedHost::new();
        let no_create: Vec<HostStep> = steps
            .into_iter()
            .filter(|s| !matches!(s, HostStep::Create))
            .collect();
        host.run(&no_create);
        prop_assert_eq!(host.holder().lock_count(), 0);
        prop_assert_eq!(host.log().count(HostEvent::CanvasLocked), 0);
    }
}
