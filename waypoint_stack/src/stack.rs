// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen stack implementation.
//!
//! ## Overview
//!
//! Holds the ordered screen sequence, bottom to top, and a single pending
//! transition slot. Every mutation is applied to the sequence immediately; an
//! [`Animated`](Transition::Animated) mutation only defers its [`DidShow`]
//! until the caller reports the end of the transition.
//!
//! ## Rules
//!
//! - One transition at a time: any mutation while a transition is in flight
//!   is rejected with [`StackError::TransitionInFlight`].
//! - Screens are unique; pushing or inserting a screen already present is
//!   rejected with [`StackError::DuplicateScreen`].
//! - `pop` never removes the bottom screen. Use
//!   [`replace_all`](ScreenStack::replace_all) to empty the stack.
//! - `insert` always settles immediately.

use alloc::vec::Vec;

use crate::error::StackError;
use crate::types::{Applied, DidShow, Operation, Outcome, Settlement, Transition};

/// Ordered sequence of opaque screen handles.
///
/// `S` only needs identity comparison; screens are never inspected.
#[derive(Clone)]
pub struct ScreenStack<S> {
    screens: Vec<S>,
    in_flight: Option<InFlight<S>>,
}

#[derive(Clone, Debug)]
struct InFlight<S> {
    operation: Operation,
    // Sequence before the transition began; restored on cancel.
    previous: Vec<S>,
}

impl<S: core::fmt::Debug> core::fmt::Debug for ScreenStack<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenStack")
            .field("screens", &self.screens)
            .field("in_flight", &self.in_flight.as_ref().map(|t| t.operation))
            .finish()
    }
}

impl<S> Default for ScreenStack<S> {
    fn default() -> Self {
        Self {
            screens: Vec::new(),
            in_flight: None,
        }
    }
}

impl<S: Clone + PartialEq + core::fmt::Debug> ScreenStack<S> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a settled stack holding `screens`, bottom to top.
    pub fn from_screens(screens: Vec<S>) -> Result<Self, StackError> {
        if has_duplicates(&screens) {
            return Err(StackError::DuplicateScreen);
        }
        Ok(Self {
            screens,
            in_flight: None,
        })
    }

    /// The screens, bottom to top.
    pub fn screens(&self) -> &[S] {
        &self.screens
    }

    /// The top screen, if any.
    pub fn top(&self) -> Option<&S> {
        self.screens.last()
    }

    /// Number of screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether the stack holds no screens.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Index of `screen`, counted from the bottom.
    pub fn position(&self, screen: &S) -> Option<usize> {
        self.screens.iter().position(|s| s == screen)
    }

    /// Whether `screen` is in the stack.
    pub fn contains(&self, screen: &S) -> bool {
        self.position(screen).is_some()
    }

    /// The operation whose transition has not settled yet.
    pub fn in_flight(&self) -> Option<Operation> {
        self.in_flight.as_ref().map(|t| t.operation)
    }

    /// Push `screen` on top.
    pub fn push(&mut self, screen: S, transition: Transition) -> Result<Applied<S>, StackError> {
        self.ensure_idle(Operation::Push)?;
        if self.contains(&screen) {
            log::warn!("rejected push of {screen:?}: already in the stack");
            return Err(StackError::DuplicateScreen);
        }
        let snapshot = self.snapshot(transition);
        self.screens.push(screen);
        Ok(self.begin(Operation::Push, Vec::new(), snapshot))
    }

    /// Pop the top screen.
    ///
    /// The bottom screen stays: on a stack of height 0 or 1 this removes
    /// nothing and emits nothing.
    pub fn pop(&mut self, transition: Transition) -> Result<Applied<S>, StackError> {
        self.ensure_idle(Operation::Pop)?;
        if self.screens.len() <= 1 {
            return Ok(unchanged(Operation::Pop));
        }
        let snapshot = self.snapshot(transition);
        let removed: Vec<S> = self.screens.pop().into_iter().collect();
        Ok(self.begin(Operation::Pop, removed, snapshot))
    }

    /// Pop every screen above `screen`, emitting a single notification.
    ///
    /// Popping to the current top changes nothing and emits nothing.
    pub fn pop_to(&mut self, screen: &S, transition: Transition) -> Result<Applied<S>, StackError> {
        self.ensure_idle(Operation::Pop)?;
        let Some(idx) = self.position(screen) else {
            return Err(StackError::ScreenNotFound);
        };
        if idx + 1 == self.screens.len() {
            return Ok(unchanged(Operation::Pop));
        }
        let snapshot = self.snapshot(transition);
        let removed = self.screens.split_off(idx + 1);
        Ok(self.begin(Operation::Pop, removed, snapshot))
    }

    /// Insert `screen` at `index` (`0..=len`); settles immediately.
    pub fn insert(&mut self, screen: S, index: usize) -> Result<Applied<S>, StackError> {
        self.ensure_idle(Operation::Insert)?;
        let len = self.screens.len();
        if index > len {
            log::warn!("rejected insert at {index}: stack has {len} screens");
            return Err(StackError::IndexOutOfBounds { index, len });
        }
        if self.contains(&screen) {
            log::warn!("rejected insert of {screen:?}: already in the stack");
            return Err(StackError::DuplicateScreen);
        }
        self.screens.insert(index, screen);
        Ok(self.begin(Operation::Insert, Vec::new(), None))
    }

    /// Replace the whole sequence.
    ///
    /// `removed` holds the previous screens that are not part of `screens`.
    pub fn replace_all(
        &mut self,
        screens: Vec<S>,
        transition: Transition,
    ) -> Result<Applied<S>, StackError> {
        self.ensure_idle(Operation::Replace)?;
        if has_duplicates(&screens) {
            log::warn!("rejected replace: duplicate screens in {screens:?}");
            return Err(StackError::DuplicateScreen);
        }
        let snapshot = self.snapshot(transition);
        let previous = core::mem::replace(&mut self.screens, screens);
        let removed = previous
            .into_iter()
            .filter(|s| !self.screens.contains(s))
            .collect();
        Ok(self.begin(Operation::Replace, removed, snapshot))
    }

    /// Report that the in-flight transition finished.
    pub fn finish_transition(&mut self) -> Result<DidShow<S>, StackError> {
        let Some(t) = self.in_flight.take() else {
            return Err(StackError::NoTransitionInFlight);
        };
        Ok(self.notification(t.operation, Outcome::Finished))
    }

    /// Report that the in-flight transition was cancelled.
    ///
    /// The sequence is restored to what it was when the transition began and
    /// the notification names the restored top.
    pub fn cancel_transition(&mut self) -> Result<DidShow<S>, StackError> {
        let Some(t) = self.in_flight.take() else {
            return Err(StackError::NoTransitionInFlight);
        };
        log::debug!("cancelled {} transition; restoring {:?}", t.operation, t.previous);
        self.screens = t.previous;
        Ok(self.notification(t.operation, Outcome::Cancelled))
    }

    fn ensure_idle(&self, requested: Operation) -> Result<(), StackError> {
        match &self.in_flight {
            Some(t) => {
                log::warn!("rejected {requested}: {} transition in flight", t.operation);
                Err(StackError::TransitionInFlight {
                    in_flight: t.operation,
                    requested,
                })
            }
            None => Ok(()),
        }
    }

    fn snapshot(&self, transition: Transition) -> Option<Vec<S>> {
        match transition {
            Transition::Animated => Some(self.screens.clone()),
            Transition::Immediate => None,
        }
    }

    fn begin(
        &mut self,
        operation: Operation,
        removed: Vec<S>,
        snapshot: Option<Vec<S>>,
    ) -> Applied<S> {
        let settlement = match snapshot {
            Some(previous) => {
                self.in_flight = Some(InFlight {
                    operation,
                    previous,
                });
                Settlement::Deferred
            }
            None => Settlement::Settled(self.notification(operation, Outcome::Finished)),
        };
        Applied {
            operation,
            removed,
            settlement,
        }
    }

    fn notification(&self, operation: Operation, outcome: Outcome) -> DidShow<S> {
        DidShow {
            screen: self.screens.last().cloned(),
            operation,
            outcome,
        }
    }
}

fn unchanged<S>(operation: Operation) -> Applied<S> {
    Applied {
        operation,
        removed: Vec::new(),
        settlement: Settlement::Unchanged,
    }
}

fn has_duplicates<S: PartialEq>(screens: &[S]) -> bool {
    screens
        .iter()
        .enumerate()
        .any(|(i, s)| screens[i + 1..].contains(s))
}
