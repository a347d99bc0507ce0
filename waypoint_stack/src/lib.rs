// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Stack: an ordered stack of opaque screens with settled notifications.
//!
//! ## Overview
//!
//! [`ScreenStack`] owns a bottom→top sequence of screen handles and supports
//! push, pop, pop-to, insert-at-index, and replace-all. Each mutation that
//! changes the sequence produces exactly one [`DidShow`] naming the new top,
//! even when several screens leave at once.
//!
//! It knows nothing about who is interested in those notifications; the
//! `waypoint_nav` crate layers segment tracking and delegate routing on top.
//!
//! ## Transitions
//!
//! Mutations take a [`Transition`]. With [`Transition::Immediate`] the
//! notification is returned in the mutation's [`Applied`] result. With
//! [`Transition::Animated`] the sequence changes at once but the notification
//! is held in a single pending slot until the rendering layer calls
//! [`ScreenStack::finish_transition`] or [`ScreenStack::cancel_transition`].
//! While that slot is occupied every further mutation is rejected with
//! [`StackError::TransitionInFlight`].
//!
//! ## Example
//!
//! ```
//! use waypoint_stack::{Operation, ScreenStack, Settlement, Transition};
//!
//! let mut stack: ScreenStack<&str> = ScreenStack::new();
//! stack.push("list", Transition::Immediate).unwrap();
//! stack.push("detail", Transition::Immediate).unwrap();
//! stack.push("edit", Transition::Animated).unwrap();
//! assert!(stack.pop(Transition::Immediate).is_err());
//!
//! let shown = stack.finish_transition().unwrap();
//! assert_eq!(shown.screen, Some("edit"));
//!
//! let applied = stack.pop_to(&"list", Transition::Immediate).unwrap();
//! assert_eq!(applied.removed, vec!["detail", "edit"]);
//! assert!(matches!(applied.settlement, Settlement::Settled(d) if d.operation == Operation::Pop));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod stack;
pub mod types;

pub use error::StackError;
pub use stack::ScreenStack;
pub use types::{Applied, DidShow, Operation, Outcome, Settlement, Transition};
