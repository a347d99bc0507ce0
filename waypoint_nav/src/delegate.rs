// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The forwarded protocol implemented by coordinators.
//!
//! Coordinators implement [`SegmentDelegate`] and hand an `Rc` of themselves
//! to the [`Navigator`]. The navigator only keeps a [`Weak`] reference, so a
//! coordinator that is dropped simply stops receiving calls.

use alloc::rc::{Rc, Weak};

use waypoint_stack::Operation;

use crate::navigator::Navigator;
use crate::types::{Orientation, OrientationMask};

/// Receiver of forwarded navigation events while its segment is topmost.
///
/// `S` is the screen handle type and `C` the caller's opaque
/// transition-controller type.
///
/// Every query has a "no opinion" default: returning `None` lets the
/// [`DelegateRouter`](crate::router::DelegateRouter) fall back to its
/// [`RoutingDefaults`](crate::router::RoutingDefaults).
pub trait SegmentDelegate<S, C = ()> {
    /// A transition towards `screen` is starting.
    fn will_show(&self, screen: &S) {
        let _ = screen;
    }

    /// `screen` is now the settled top of the stack.
    fn did_show(&self, screen: &S) {
        let _ = screen;
    }

    /// Orientations allowed while this segment is on top.
    fn supported_orientations(&self) -> Option<OrientationMask> {
        None
    }

    /// Orientation to present in while this segment is on top.
    fn preferred_orientation(&self) -> Option<Orientation> {
        None
    }

    /// Interactive driver for a transition run by `animation`.
    fn interaction_controller(&self, animation: &C) -> Option<C> {
        let _ = animation;
        None
    }

    /// Custom animation for `operation` from `from` to `to`.
    fn animation_controller(&self, operation: Operation, from: &S, to: &S) -> Option<C> {
        let _ = (operation, from, to);
        None
    }

    /// This segment was invalidated by a stack mutation.
    ///
    /// Called exactly once, after the segment has already been removed from
    /// the registry, so `navigator` reflects the state without it.
    fn disconnect(&self, navigator: &Navigator<S, C>);
}

/// Non-owning handle to a delegate.
pub type DelegateRef<S, C> = Weak<dyn SegmentDelegate<S, C>>;

pub(crate) fn downgrade<S, C, D>(delegate: &Rc<D>) -> DelegateRef<S, C>
where
    D: SegmentDelegate<S, C> + 'static,
{
    let weak: Weak<D> = Rc::downgrade(delegate);
    weak
}

/// Debug stand-in for a delegate reference.
pub(crate) struct Liveness<'a, S, C>(pub(crate) &'a DelegateRef<S, C>);

impl<S, C> core::fmt::Debug for Liveness<'_, S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.strong_count() > 0 {
            f.write_str("live")
        } else {
            f.write_str("expired")
        }
    }
}
