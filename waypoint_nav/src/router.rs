// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegate router: forwards protocol calls to the current receiver.
//!
//! ## Overview
//!
//! The router holds exactly one optional receiver, the delegate of the top
//! registry entry, recomputed by the [`Navigator`](crate::Navigator) after
//! every cascade and every new segment. It never walks the registry itself,
//! so intermediate delegates that the cascade is unwinding are never
//! reached.
//!
//! Queries that have no receiver, or whose receiver answers `None`, resolve
//! to the [`RoutingDefaults`].

use alloc::rc::Rc;

use waypoint_stack::Operation;

use crate::delegate::{DelegateRef, Liveness, SegmentDelegate};
use crate::types::{Orientation, OrientationMask};

/// Answers used when no delegate has an opinion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RoutingDefaults {
    /// Orientations allowed when no delegate restricts them.
    pub supported: OrientationMask,
    /// Orientation used when no delegate prefers one.
    pub preferred: Orientation,
}

impl Default for RoutingDefaults {
    fn default() -> Self {
        Self {
            supported: OrientationMask::all(),
            preferred: Orientation::Portrait,
        }
    }
}

/// Forwards each protocol call to the single current receiver.
pub struct DelegateRouter<S, C> {
    receiver: Option<DelegateRef<S, C>>,
    defaults: RoutingDefaults,
}

impl<S, C> core::fmt::Debug for DelegateRouter<S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DelegateRouter")
            .field("receiver", &self.receiver.as_ref().map(Liveness))
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl<S: core::fmt::Debug, C> DelegateRouter<S, C> {
    /// Create a router with no receiver.
    pub fn new(defaults: RoutingDefaults) -> Self {
        Self {
            receiver: None,
            defaults,
        }
    }

    /// The fallback answers.
    pub fn defaults(&self) -> RoutingDefaults {
        self.defaults
    }

    /// Replace the fallback answers.
    pub fn set_defaults(&mut self, defaults: RoutingDefaults) {
        self.defaults = defaults;
    }

    /// Point the router at a new receiver (or none).
    pub fn retarget(&mut self, receiver: Option<DelegateRef<S, C>>) {
        self.receiver = receiver;
    }

    /// The current receiver, if it is still alive.
    pub fn receiver(&self) -> Option<Rc<dyn SegmentDelegate<S, C>>> {
        self.receiver.as_ref().and_then(|r| r.upgrade())
    }

    /// Forward "will show".
    pub fn will_show(&self, screen: &S) {
        if let Some(d) = self.receiver() {
            log::trace!("will_show({screen:?})");
            d.will_show(screen);
        }
    }

    /// Forward "did show".
    pub fn did_show(&self, screen: &S) {
        if let Some(d) = self.receiver() {
            log::trace!("did_show({screen:?})");
            d.did_show(screen);
        }
    }

    /// Orientations allowed right now.
    pub fn supported_orientations(&self) -> OrientationMask {
        self.receiver()
            .and_then(|d| d.supported_orientations())
            .unwrap_or(self.defaults.supported)
    }

    /// Orientation to present in right now.
    pub fn preferred_orientation(&self) -> Orientation {
        self.receiver()
            .and_then(|d| d.preferred_orientation())
            .unwrap_or(self.defaults.preferred)
    }

    /// Interactive driver for `animation`, if the receiver provides one.
    pub fn interaction_controller(&self, animation: &C) -> Option<C> {
        self.receiver()?.interaction_controller(animation)
    }

    /// Custom animation for a transition, if the receiver provides one.
    pub fn animation_controller(&self, operation: Operation, from: &S, to: &S) -> Option<C> {
        log::trace!("animation_controller({operation}, {from:?} -> {to:?})");
        self.receiver()?.animation_controller(operation, from, to)
    }
}
