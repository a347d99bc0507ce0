// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Nav: a segment-tracking navigation core.
//!
//! ## Overview
//!
//! Many short-lived coordinators share one screen stack. Each coordinator owns
//! a contiguous run of screens, its *segment*, and should hear about
//! navigation only while that segment is on top. This crate does that
//! bookkeeping for them:
//!
//! - A [`SegmentRegistry`](crate::registry::SegmentRegistry) records where
//!   each segment begins and holds a weak reference to its delegate.
//! - After every settled stack mutation, the [cascade](crate::cascade) unwinds
//!   invalidated segments top to bottom, calling
//!   [`disconnect`](crate::SegmentDelegate::disconnect) once on each.
//! - The [`DelegateRouter`](crate::router::DelegateRouter) then forwards the
//!   did-show, and every later query, to the single top delegate, or falls
//!   back to [`RoutingDefaults`](crate::router::RoutingDefaults).
//!
//! The screen stack itself comes from [`waypoint_stack`].
//!
//! ## Attachment policies
//!
//! Segments are tracked by stack offset or by screen identity, chosen per
//! [`Navigator`] with [`AttachmentPolicy`](crate::types::AttachmentPolicy).
//! Index tracking shifts with inserts through the
//! [reconciler](crate::reconcile). Identity tracking also notices a screen
//! that was replaced or reordered without the stack height changing.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use waypoint_nav::{Navigator, SegmentDelegate, Transition};
//!
//! struct Flow {
//!     name: &'static str,
//!     log: Rc<RefCell<Vec<String>>>,
//! }
//!
//! impl SegmentDelegate<&'static str> for Flow {
//!     fn did_show(&self, screen: &&'static str) {
//!         self.log.borrow_mut().push(format!("{} shows {}", self.name, screen));
//!     }
//!     fn disconnect(&self, _: &Navigator<&'static str>) {
//!         self.log.borrow_mut().push(format!("{} disconnected", self.name));
//!     }
//! }
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let recipes = Rc::new(Flow { name: "recipes", log: log.clone() });
//! let editor = Rc::new(Flow { name: "editor", log: log.clone() });
//!
//! let mut nav: Navigator<&'static str> = Navigator::new();
//! nav.push_with_new_segment("recipe list", &recipes, Transition::Immediate).unwrap();
//! nav.push_with_new_segment("edit recipe", &editor, Transition::Immediate).unwrap();
//! nav.push("pick measure", Transition::Immediate).unwrap();
//!
//! // One pop over two screens: the editor is disconnected, then the
//! // recipes flow hears about the list exactly once.
//! nav.pop_to(&"recipe list", Transition::Immediate).unwrap();
//! assert_eq!(
//!     log.borrow()[log.borrow().len() - 2..],
//!     ["editor disconnected", "recipes shows recipe list"]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cascade;
pub mod delegate;
pub mod error;
pub mod navigator;
pub mod reconcile;
pub mod registry;
pub mod router;
pub mod types;

#[cfg(test)]
mod testing;

pub use delegate::{DelegateRef, SegmentDelegate};
pub use error::NavigationError;
pub use navigator::{Completion, Navigator, NavigatorConfig};
pub use router::{DelegateRouter, RoutingDefaults};
pub use types::{Attachment, AttachmentPolicy, Orientation, OrientationMask, Position};
pub use waypoint_stack::{DidShow, Operation, Outcome, ScreenStack, StackError, Transition};
