// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disconnect cascade: settle the registry after every did-show.
//!
//! ## Algorithm
//!
//! Look at the top segment:
//!
//! - Its delegate has expired: drop the segment without any call.
//! - Its attachment no longer resolves, or resolves at or below the segment
//!   under it: drop the segment, then call its delegate's
//!   [`disconnect`](crate::SegmentDelegate::disconnect).
//! - Otherwise: stop.
//!
//! Repeat on the new top until a segment is valid or only the root remains.
//! Disconnects therefore arrive strictly top to bottom, each delegate sees a
//! registry that no longer contains its own segment, and a delegate that
//! drops other coordinators from inside `disconnect` is handled on the next
//! step like any other expired reference.
//!
//! Only after the loop stops is the router retargeted and the original
//! did-show forwarded, once, to the final top delegate. Completions queued
//! with [`when_settled`](crate::Navigator::when_settled) run last.

use waypoint_stack::DidShow;

use crate::navigator::Navigator;
use crate::registry::Verdict;

impl<S: Clone + PartialEq + core::fmt::Debug, C> Navigator<S, C> {
    pub(crate) fn settle(&mut self, did_show: DidShow<S>) {
        let removed = self.cascade();
        if removed > 0 {
            log::debug!(
                "cascade removed {removed} segments after {} ({:?}); {} remain",
                did_show.operation,
                did_show.outcome,
                self.registry.len()
            );
        }
        self.retarget();
        if let Some(screen) = &did_show.screen {
            self.router.did_show(screen);
        }
        for completion in core::mem::take(&mut self.completions) {
            completion(did_show.outcome);
        }
    }

    fn cascade(&mut self) -> usize {
        let mut removed = 0;
        while let Some(verdict) = self.registry.check_top(self.stack.screens()) {
            if verdict == Verdict::Valid {
                break;
            }
            let Some(segment) = self.registry.pop_top() else {
                break;
            };
            removed += 1;
            log::trace!("cascade: {verdict:?} segment at {:?}", segment.attachment);
            if verdict == Verdict::Invalid
                && let Some(delegate) = segment.delegate.upgrade()
            {
                delegate.disconnect(self);
            }
        }
        removed
    }
}
