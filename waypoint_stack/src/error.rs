// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for rejected stack mutations.

use crate::types::Operation;

/// A mutation the stack refused.
///
/// A rejected mutation leaves the stack exactly as it was.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StackError {
    /// A second mutation was issued before the previous one settled.
    #[error("cannot {requested} while a {in_flight} transition is in flight")]
    TransitionInFlight {
        /// The transition that has not settled yet.
        in_flight: Operation,
        /// The mutation that was rejected.
        requested: Operation,
    },
    /// `finish_transition` or `cancel_transition` without a pending transition.
    #[error("no transition is in flight")]
    NoTransitionInFlight,
    /// An insert index outside `[0, len]`.
    #[error("insert index {index} is out of bounds for a stack of {len} screens")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Stack height at the time of the request.
        len: usize,
    },
    /// The screen is not present in the stack.
    #[error("screen is not in the stack")]
    ScreenNotFound,
    /// The screen is already present in the stack.
    #[error("screen is already in the stack")]
    DuplicateScreen,
}
