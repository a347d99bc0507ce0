// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for rejected navigation requests.

use waypoint_stack::{Operation, StackError};

/// A navigation request that was rejected.
///
/// These are programmer errors: the request broke the single-transition
/// discipline or a registry invariant. State is left untouched by a rejected
/// stack mutation. An expired delegate is never reported as an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum NavigationError {
    /// The screen stack refused the mutation.
    #[error(transparent)]
    Stack(#[from] StackError),
    /// A segment is already attached at that point.
    #[error("a segment is already attached at this point")]
    DuplicateAttachment,
    /// The attachment point does not sit above the segments below it.
    #[error("attachment point is not above the segments below it")]
    AttachmentOutOfOrder,
    /// The top segment no longer resolves; the cascade has not run yet.
    #[error("the top segment is stale until the pending cascade runs")]
    StaleSegment,
    /// Segments cannot start while a transition is in flight.
    #[error("cannot start a segment while a {in_flight} transition is in flight")]
    SegmentDuringTransition {
        /// The operation whose transition has not settled.
        in_flight: Operation,
    },
}
