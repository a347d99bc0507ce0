// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the screen stack: transitions, operations, and notifications.

use alloc::vec::Vec;

/// How a mutation settles.
///
/// Passed to every animatable [`ScreenStack`](crate::ScreenStack) mutation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Transition {
    /// The did-show notification is returned by the mutation itself.
    #[default]
    Immediate,
    /// The mutation is applied at once, but its did-show notification is held
    /// until [`ScreenStack::finish_transition`](crate::ScreenStack::finish_transition)
    /// or [`ScreenStack::cancel_transition`](crate::ScreenStack::cancel_transition).
    Animated,
}

impl Transition {
    /// Convenience for call sites that carry an `animated` flag.
    #[inline]
    pub const fn animated(animated: bool) -> Self {
        if animated {
            Self::Animated
        } else {
            Self::Immediate
        }
    }
}

/// The kind of mutation that produced a notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// A screen was pushed on top.
    Push,
    /// One or more screens were popped off the top.
    Pop,
    /// A screen was inserted at an arbitrary index.
    Insert,
    /// The whole sequence was replaced.
    Replace,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Insert => "insert",
            Self::Replace => "replace",
        })
    }
}

/// Whether a transition ran to completion or was rolled back.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The mutation is now the settled state of the stack.
    Finished,
    /// The mutation was rolled back to the state before the transition began.
    Cancelled,
}

/// The single notification emitted per settled mutation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DidShow<S> {
    /// The screen now on top, or `None` if the stack is empty.
    pub screen: Option<S>,
    /// The mutation that settled.
    pub operation: Operation,
    /// Whether the mutation finished or was cancelled.
    pub outcome: Outcome,
}

/// When (and whether) a mutation produces its [`DidShow`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement<S> {
    /// The mutation settled synchronously.
    Settled(DidShow<S>),
    /// An animated transition is in flight; the notification comes later.
    Deferred,
    /// Nothing changed, so nothing is emitted.
    Unchanged,
}

impl<S> Settlement<S> {
    /// The notification, if the mutation settled synchronously.
    pub fn did_show(self) -> Option<DidShow<S>> {
        match self {
            Self::Settled(d) => Some(d),
            Self::Deferred | Self::Unchanged => None,
        }
    }
}

/// The result of a stack mutation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Applied<S> {
    /// The mutation that was applied.
    pub operation: Operation,
    /// Screens that left the stack, bottom to top.
    pub removed: Vec<S>,
    /// Notification state for this mutation.
    pub settlement: Settlement<S>,
}
