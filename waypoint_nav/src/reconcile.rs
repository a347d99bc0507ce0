// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index reconciliation for inserts below the top of the stack.
//!
//! An insert at offset `p` moves every screen at `p` or above up by one, so
//! every index attachment at `p` or above moves with it. `BelowStack` and
//! screen attachments are untouched; screen attachments are re-checked by
//! the cascade instead.

use crate::registry::Segment;
use crate::types::Attachment;

/// Adjust one attachment for an insert at `at`.
///
/// Returns whether the attachment moved.
pub fn shift_for_insert<S>(attachment: &mut Attachment<S>, at: usize) -> bool {
    match attachment {
        Attachment::Index(i) if *i >= at => {
            *i += 1;
            true
        }
        Attachment::Index(_) | Attachment::BelowStack | Attachment::Screen(_) => false,
    }
}

/// Adjust every segment for an insert at `at`, returning how many moved.
pub(crate) fn reconcile_insert<S, C>(segments: &mut [Segment<S, C>], at: usize) -> usize {
    let mut moved = 0;
    for segment in segments {
        if shift_for_insert(&mut segment.attachment, at) {
            moved += 1;
        }
    }
    moved
}
