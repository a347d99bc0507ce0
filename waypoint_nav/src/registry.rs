// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment registry: the ordered record of who owns which part of the stack.
//!
//! ## Invariants
//!
//! - Ordering: resolved attachment points strictly increase from the bottom
//!   segment to the top segment.
//! - Uniqueness: no two segments share an attachment point.
//! - Root: a root entry always exists below every segment. It has no
//!   attachment point, may have no delegate, and is never removed.
//! - Validity: once the cascade has settled, every segment resolves to a
//!   screen still in the stack.
//!
//! The registry only mutates through the [`Navigator`](crate::Navigator),
//! which runs the cascade after every settled stack mutation. In between, a
//! segment may briefly be stale (its screen already gone, or its delegate
//! dropped).

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::delegate::{DelegateRef, Liveness, SegmentDelegate};
use crate::error::NavigationError;
use crate::types::{Attachment, AttachmentPolicy, Position};

/// One segment: an attachment point plus a non-owning delegate reference.
///
/// A segment owns no screens. It is never changed after creation except by
/// [index reconciliation](crate::reconcile) and by its delegate expiring.
pub struct Segment<S, C> {
    pub(crate) attachment: Attachment<S>,
    pub(crate) delegate: DelegateRef<S, C>,
}

impl<S, C> Segment<S, C> {
    /// Where this segment begins.
    pub fn attachment(&self) -> &Attachment<S> {
        &self.attachment
    }

    /// The delegate, if it is still alive.
    pub fn delegate(&self) -> Option<Rc<dyn SegmentDelegate<S, C>>> {
        self.delegate.upgrade()
    }

    /// Whether the delegate is still alive.
    pub fn is_live(&self) -> bool {
        self.delegate.strong_count() > 0
    }
}

impl<S: core::fmt::Debug, C> core::fmt::Debug for Segment<S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Segment")
            .field("attachment", &self.attachment)
            .field("delegate", &Liveness(&self.delegate))
            .finish()
    }
}

/// What the cascade should do with the top segment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Verdict {
    /// Still attached to a screen in the stack, above the segments below it.
    Valid,
    /// Its screen is gone or out of order; disconnect it.
    Invalid,
    /// Nothing is listening any more; drop it quietly.
    Expired,
}

/// Ordered stack of segments above a root entry.
pub struct SegmentRegistry<S, C> {
    policy: AttachmentPolicy,
    root: Option<DelegateRef<S, C>>,
    segments: Vec<Segment<S, C>>,
}

impl<S: core::fmt::Debug, C> core::fmt::Debug for SegmentRegistry<S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegmentRegistry")
            .field("policy", &self.policy)
            .field("root", &self.root.as_ref().map(Liveness))
            .field("segments", &self.segments)
            .finish()
    }
}

impl<S: Clone + PartialEq + core::fmt::Debug, C> SegmentRegistry<S, C> {
    /// Create a registry holding only an empty root entry.
    pub fn new(policy: AttachmentPolicy) -> Self {
        Self {
            policy,
            root: None,
            segments: Vec::new(),
        }
    }

    /// The attachment policy for new segments.
    pub fn policy(&self) -> AttachmentPolicy {
        self.policy
    }

    /// Number of segments above the root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether only the root entry remains.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments above the root, bottom to top.
    pub fn segments(&self) -> &[Segment<S, C>] {
        &self.segments
    }

    /// Attachment points above the root, bottom to top.
    pub fn attachments(&self) -> impl Iterator<Item = &Attachment<S>> + '_ {
        self.segments.iter().map(|s| &s.attachment)
    }

    /// The topmost segment, if any.
    pub fn top(&self) -> Option<&Segment<S, C>> {
        self.segments.last()
    }

    /// The root entry's delegate, if set and alive.
    pub fn root_delegate(&self) -> Option<Rc<dyn SegmentDelegate<S, C>>> {
        self.root.as_ref().and_then(|r| r.upgrade())
    }

    /// The delegate of the top entry.
    ///
    /// This is the top segment's delegate, or the root's when no segment
    /// remains. An expired top delegate yields `None`; it is pruned by the
    /// next cascade.
    pub fn top_delegate(&self) -> Option<Rc<dyn SegmentDelegate<S, C>>> {
        self.top_delegate_ref().and_then(|d| d.upgrade())
    }

    pub(crate) fn top_delegate_ref(&self) -> Option<DelegateRef<S, C>> {
        match self.segments.last() {
            Some(top) => Some(top.delegate.clone()),
            None => self.root.clone(),
        }
    }

    pub(crate) fn set_root(&mut self, delegate: Option<DelegateRef<S, C>>) {
        self.root = delegate;
    }

    /// The attachment a segment started now would get.
    ///
    /// `None` in identity mode on an empty stack.
    pub(crate) fn attachment_for_top(&self, screens: &[S]) -> Option<Attachment<S>> {
        match self.policy {
            AttachmentPolicy::ByIndex => Some(match screens.len() {
                0 => Attachment::BelowStack,
                n => Attachment::Index(n - 1),
            }),
            AttachmentPolicy::ByIdentity => screens.last().cloned().map(Attachment::Screen),
        }
    }

    /// The attachment a segment started on the screen at `index` would get.
    pub(crate) fn attachment_at(&self, index: usize, screen: &S) -> Attachment<S> {
        match self.policy {
            AttachmentPolicy::ByIndex => Attachment::Index(index),
            AttachmentPolicy::ByIdentity => Attachment::Screen(screen.clone()),
        }
    }

    /// Add a segment on top.
    pub(crate) fn attach(
        &mut self,
        attachment: Attachment<S>,
        delegate: DelegateRef<S, C>,
        screens: &[S],
    ) -> Result<(), NavigationError> {
        let position = self.check_new(&attachment, screens)?;
        self.check_above_top(&attachment, position, screens)?;
        self.push_segment(attachment, delegate);
        Ok(())
    }

    /// Check that a segment for a screen about to be pushed may go on top.
    ///
    /// `screens` is the stack before the push, so the new segment resolves to
    /// one past the current top.
    pub(crate) fn check_push(
        &self,
        attachment: &Attachment<S>,
        screens: &[S],
    ) -> Result<(), NavigationError> {
        self.check_unique(attachment)?;
        self.check_above_top(attachment, Position::At(screens.len()), screens)
    }

    /// Add an already checked segment on top.
    pub(crate) fn push_segment(&mut self, attachment: Attachment<S>, delegate: DelegateRef<S, C>) {
        log::debug!("segment attached at {attachment:?}");
        self.segments.push(Segment {
            attachment,
            delegate,
        });
    }

    /// Add a segment at its ordered place, which may be below the top.
    pub(crate) fn attach_ordered(
        &mut self,
        attachment: Attachment<S>,
        delegate: DelegateRef<S, C>,
        screens: &[S],
    ) -> Result<(), NavigationError> {
        let position = self.check_new(&attachment, screens)?;
        let slot = self.segments.partition_point(|s| {
            s.attachment
                .resolve(screens)
                .is_some_and(|p| p < position)
        });
        log::debug!("segment attached at {attachment:?} ({position:?}), registry slot {slot}");
        self.segments.insert(
            slot,
            Segment {
                attachment,
                delegate,
            },
        );
        Ok(())
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment<S, C>] {
        &mut self.segments
    }

    pub(crate) fn pop_top(&mut self) -> Option<Segment<S, C>> {
        self.segments.pop()
    }

    /// Judge the top segment against `screens`; `None` when only the root remains.
    pub(crate) fn check_top(&self, screens: &[S]) -> Option<Verdict> {
        let top = self.segments.last()?;
        if !top.is_live() {
            return Some(Verdict::Expired);
        }
        let Some(position) = top.attachment.resolve(screens) else {
            return Some(Verdict::Invalid);
        };
        match self.floor(self.segments.len() - 1, screens) {
            Some(floor) if floor >= position => Some(Verdict::Invalid),
            _ => Some(Verdict::Valid),
        }
    }

    // Highest resolvable position among the first `below` segments.
    fn floor(&self, below: usize, screens: &[S]) -> Option<Position> {
        self.segments[..below]
            .iter()
            .rev()
            .find_map(|s| s.attachment.resolve(screens))
    }

    fn check_new(
        &self,
        attachment: &Attachment<S>,
        screens: &[S],
    ) -> Result<Position, NavigationError> {
        self.check_unique(attachment)?;
        attachment.resolve(screens).ok_or_else(|| {
            log::warn!("rejected segment at {attachment:?}: not in the stack");
            NavigationError::AttachmentOutOfOrder
        })
    }

    fn check_unique(&self, attachment: &Attachment<S>) -> Result<(), NavigationError> {
        if self.segments.iter().any(|s| &s.attachment == attachment) {
            log::warn!("rejected segment at {attachment:?}: already attached there");
            return Err(NavigationError::DuplicateAttachment);
        }
        Ok(())
    }

    // The current top must resolve, and strictly below `position`.
    fn check_above_top(
        &self,
        attachment: &Attachment<S>,
        position: Position,
        screens: &[S],
    ) -> Result<(), NavigationError> {
        let Some(top) = self.segments.last() else {
            return Ok(());
        };
        match top.attachment.resolve(screens) {
            None => {
                log::warn!("rejected segment at {attachment:?}: top segment is stale");
                Err(NavigationError::StaleSegment)
            }
            Some(floor) if floor >= position => {
                log::warn!(
                    "rejected segment at {attachment:?}: top segment resolves to {floor:?}"
                );
                Err(NavigationError::AttachmentOutOfOrder)
            }
            Some(_) => Ok(()),
        }
    }
}
