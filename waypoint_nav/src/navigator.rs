// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation-core instance shared by coordinators.
//!
//! ## Usage
//!
//! - Construct one [`Navigator`] per navigation stack (with
//!   [`Navigator::new`] or [`Navigator::with_config`]) and pass it to every
//!   coordinator that needs it. There is no global instance.
//! - Coordinators claim a part of the stack with
//!   [`start_segment`](Navigator::start_segment),
//!   [`push_with_new_segment`](Navigator::push_with_new_segment), or
//!   [`insert_with_new_segment`](Navigator::insert_with_new_segment). From then
//!   on they receive forwarded calls while their segment is on top, and a
//!   single [`disconnect`](SegmentDelegate::disconnect) once it is gone.
//! - The rendering layer reports the end of animated transitions with
//!   [`finish_transition`](Navigator::finish_transition) or
//!   [`cancel_transition`](Navigator::cancel_transition), and asks
//!   orientation and transition questions through the forwarding queries.
//!
//! Delegate callbacks receive shared references only. A coordinator that
//! wants to navigate in response to a callback must defer that request until
//! the current call returns.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use waypoint_stack::{
    Applied, Operation, Outcome, ScreenStack, Settlement, StackError, Transition,
};

use crate::delegate::{SegmentDelegate, downgrade};
use crate::error::NavigationError;
use crate::reconcile::reconcile_insert;
use crate::registry::SegmentRegistry;
use crate::router::{DelegateRouter, RoutingDefaults};
use crate::types::{AttachmentPolicy, Orientation, OrientationMask, Position};

/// Callback run once the in-flight transition settles.
pub type Completion = Box<dyn FnOnce(Outcome)>;

/// Construction-time settings for a [`Navigator`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NavigatorConfig {
    /// How new segments record their attachment point.
    pub policy: AttachmentPolicy,
    /// Answers used when no delegate has an opinion.
    pub defaults: RoutingDefaults,
}

impl NavigatorConfig {
    /// Use `policy` for new segments.
    pub fn with_policy(mut self, policy: AttachmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use `defaults` as the fallback answers.
    pub fn with_defaults(mut self, defaults: RoutingDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Screen stack plus segment tracking and delegate routing.
pub struct Navigator<S, C = ()> {
    pub(crate) stack: ScreenStack<S>,
    pub(crate) registry: SegmentRegistry<S, C>,
    pub(crate) router: DelegateRouter<S, C>,
    pub(crate) completions: Vec<Completion>,
    config: NavigatorConfig,
}

impl<S: core::fmt::Debug, C> core::fmt::Debug for Navigator<S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("stack", &self.stack)
            .field("registry", &self.registry)
            .field("router", &self.router)
            .field("pending_completions", &self.completions.len())
            .finish_non_exhaustive()
    }
}

impl<S: Clone + PartialEq + core::fmt::Debug, C> Default for Navigator<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + PartialEq + core::fmt::Debug, C> Navigator<S, C> {
    /// Create a navigator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    /// Create a navigator with an explicit configuration.
    pub fn with_config(config: NavigatorConfig) -> Self {
        Self {
            stack: ScreenStack::new(),
            registry: SegmentRegistry::new(config.policy),
            router: DelegateRouter::new(config.defaults),
            completions: Vec::new(),
            config,
        }
    }

    /// The configuration this navigator was built with.
    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// The screens, bottom to top.
    pub fn screens(&self) -> &[S] {
        self.stack.screens()
    }

    /// The top screen, if any.
    pub fn top_screen(&self) -> Option<&S> {
        self.stack.top()
    }

    /// The underlying screen stack.
    pub fn stack(&self) -> &ScreenStack<S> {
        &self.stack
    }

    /// The segment registry.
    pub fn registry(&self) -> &SegmentRegistry<S, C> {
        &self.registry
    }

    /// The operation whose transition has not settled yet.
    pub fn in_flight(&self) -> Option<Operation> {
        self.stack.in_flight()
    }

    /// The delegate of the top live segment, or of the root.
    pub fn top_delegate(&self) -> Option<Rc<dyn SegmentDelegate<S, C>>> {
        self.registry.top_delegate()
    }

    /// Install the root entry's delegate. The root is never disconnected.
    pub fn set_root_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: SegmentDelegate<S, C> + 'static,
    {
        self.registry.set_root(Some(downgrade(delegate)));
        self.retarget();
    }

    /// Remove the root entry's delegate.
    pub fn clear_root_delegate(&mut self) {
        self.registry.set_root(None);
        self.retarget();
    }

    /// Start a segment at the current top of the stack.
    ///
    /// In identity mode on an empty stack this is a silent no-op. In index
    /// mode on an empty stack the segment starts below the stack and stays
    /// valid however the stack changes.
    ///
    /// Rejected while a transition is in flight: the registry is only
    /// consistent with the stack once the pending cascade has run.
    pub fn start_segment<D>(&mut self, delegate: &Rc<D>) -> Result<(), NavigationError>
    where
        D: SegmentDelegate<S, C> + 'static,
    {
        if let Some(in_flight) = self.stack.in_flight() {
            log::warn!("rejected start_segment during a {in_flight} transition");
            return Err(NavigationError::SegmentDuringTransition { in_flight });
        }
        let Some(attachment) = self.registry.attachment_for_top(self.stack.screens()) else {
            log::debug!("start_segment on an empty stack ignored in identity mode");
            return Ok(());
        };
        self.registry
            .attach(attachment, downgrade(delegate), self.stack.screens())?;
        self.retarget();
        Ok(())
    }

    /// Push `screen`, then start a segment on it for `delegate`.
    ///
    /// The new delegate receives the push's `will_show` and `did_show`. The
    /// segment is checked before the push, so a rejected request changes
    /// nothing.
    pub fn push_with_new_segment<D>(
        &mut self,
        screen: S,
        delegate: &Rc<D>,
        transition: Transition,
    ) -> Result<(), NavigationError>
    where
        D: SegmentDelegate<S, C> + 'static,
    {
        if let Some(in_flight) = self.stack.in_flight() {
            log::warn!("rejected push during a {in_flight} transition");
            return Err(StackError::TransitionInFlight {
                in_flight,
                requested: Operation::Push,
            }
            .into());
        }
        let before = self.stack.top().cloned();
        let attachment = self.registry.attachment_at(self.stack.len(), &screen);
        self.registry.check_push(&attachment, self.stack.screens())?;
        let applied = self.stack.push(screen, transition)?;
        self.registry.push_segment(attachment, downgrade(delegate));
        self.retarget();
        self.conclude(before, applied);
        Ok(())
    }

    /// Insert `screen` at `index`, then start a segment on it for `delegate`.
    ///
    /// Index attachments at or above `index` shift up by one. The new segment
    /// takes its ordered place, which is below the top unless `index` is the
    /// stack height.
    pub fn insert_with_new_segment<D>(
        &mut self,
        screen: S,
        delegate: &Rc<D>,
        index: usize,
    ) -> Result<(), NavigationError>
    where
        D: SegmentDelegate<S, C> + 'static,
    {
        let before = self.stack.top().cloned();
        let attachment = self.registry.attachment_at(index, &screen);
        let applied = self.stack.insert(screen, index)?;
        self.reconcile(index);
        let attached =
            self.registry
                .attach_ordered(attachment, downgrade(delegate), self.stack.screens());
        self.retarget();
        self.conclude(before, applied);
        attached
    }

    /// Insert `screen` at `index` without starting a segment.
    ///
    /// The top delegate is unchanged; index attachments at or above `index`
    /// shift up by one.
    pub fn insert_shift_only(&mut self, screen: S, index: usize) -> Result<(), NavigationError> {
        let before = self.stack.top().cloned();
        let applied = self.stack.insert(screen, index)?;
        self.reconcile(index);
        self.conclude(before, applied);
        Ok(())
    }

    /// Push `screen` without starting a segment.
    pub fn push(&mut self, screen: S, transition: Transition) -> Result<(), NavigationError> {
        let before = self.stack.top().cloned();
        let applied = self.stack.push(screen, transition)?;
        self.conclude(before, applied);
        Ok(())
    }

    /// Pop the top screen. The bottom screen is never popped.
    pub fn pop(&mut self, transition: Transition) -> Result<Option<S>, NavigationError> {
        let before = self.stack.top().cloned();
        let mut applied = self.stack.pop(transition)?;
        let removed = applied.removed.pop();
        self.conclude(before, applied);
        Ok(removed)
    }

    /// Pop every screen above `screen`, returning them bottom to top.
    pub fn pop_to(&mut self, screen: &S, transition: Transition) -> Result<Vec<S>, NavigationError> {
        let before = self.stack.top().cloned();
        let mut applied = self.stack.pop_to(screen, transition)?;
        let removed = core::mem::take(&mut applied.removed);
        self.conclude(before, applied);
        Ok(removed)
    }

    /// Replace every screen, returning the previous screens that left.
    pub fn replace_all(
        &mut self,
        screens: Vec<S>,
        transition: Transition,
    ) -> Result<Vec<S>, NavigationError> {
        let before = self.stack.top().cloned();
        let mut applied = self.stack.replace_all(screens, transition)?;
        let removed = core::mem::take(&mut applied.removed);
        self.conclude(before, applied);
        Ok(removed)
    }

    /// Remove every screen at or above the top segment's first screen.
    ///
    /// With only the root left this does nothing. A segment that starts below
    /// the stack owns every screen, so unwinding it clears the stack while
    /// the segment itself stays.
    pub fn unwind_top_segment(&mut self, transition: Transition) -> Result<Vec<S>, NavigationError> {
        let Some(top) = self.registry.top() else {
            return Ok(Vec::new());
        };
        match top.attachment().resolve(self.stack.screens()) {
            // Stale; the next cascade removes it.
            None => Ok(Vec::new()),
            Some(Position::BelowStack | Position::At(0)) => {
                self.replace_all(Vec::new(), transition)
            }
            Some(Position::At(first)) => {
                let keep = self.stack.screens()[first - 1].clone();
                self.pop_to(&keep, transition)
            }
        }
    }

    /// Report that the in-flight animated transition finished.
    pub fn finish_transition(&mut self) -> Result<(), NavigationError> {
        let did_show = self.stack.finish_transition()?;
        self.settle(did_show);
        Ok(())
    }

    /// Report that the in-flight animated transition was cancelled.
    ///
    /// The stack returns to its state before the transition began, then the
    /// cascade runs as usual: segments started on screens that did not
    /// survive the rollback are disconnected, and everyone else stays.
    /// Pending completions receive [`Outcome::Cancelled`].
    pub fn cancel_transition(&mut self) -> Result<(), NavigationError> {
        let did_show = self.stack.cancel_transition()?;
        self.settle(did_show);
        Ok(())
    }

    /// Run `completion` once the in-flight transition settles.
    ///
    /// With nothing in flight it runs immediately with [`Outcome::Finished`].
    pub fn when_settled(&mut self, completion: impl FnOnce(Outcome) + 'static) {
        if self.stack.in_flight().is_some() {
            self.completions.push(Box::new(completion));
        } else {
            completion(Outcome::Finished);
        }
    }

    /// Orientations allowed by the top delegate, or the default.
    pub fn supported_orientations(&self) -> OrientationMask {
        self.router.supported_orientations()
    }

    /// Orientation preferred by the top delegate, or the default.
    pub fn preferred_orientation(&self) -> Orientation {
        self.router.preferred_orientation()
    }

    /// Interactive driver for `animation`, from the top delegate.
    pub fn interaction_controller(&self, animation: &C) -> Option<C> {
        self.router.interaction_controller(animation)
    }

    /// Custom animation for a transition, from the top delegate.
    pub fn animation_controller(&self, operation: Operation, from: &S, to: &S) -> Option<C> {
        self.router.animation_controller(operation, from, to)
    }

    pub(crate) fn retarget(&mut self) {
        self.router.retarget(self.registry.top_delegate_ref());
    }

    fn reconcile(&mut self, index: usize) {
        let moved = reconcile_insert(self.registry.segments_mut(), index);
        if moved > 0 {
            log::debug!("insert at {index} shifted {moved} index attachments");
        }
    }

    // Forward `will_show` when the top changed, then settle now or later.
    fn conclude(&mut self, before: Option<S>, applied: Applied<S>) {
        if let Settlement::Unchanged = applied.settlement {
            return;
        }
        if let Some(top) = self.stack.top()
            && before.as_ref() != Some(top)
        {
            self.router.will_show(top);
        }
        if let Settlement::Settled(did_show) = applied.settlement {
            self.settle(did_show);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, Journal, Recorder, Screen};
    use crate::types::Attachment;
    use alloc::vec;
    use core::cell::Cell;

    const NOW: Transition = Transition::Immediate;

    fn navigator(policy: AttachmentPolicy) -> Navigator<Screen, u32> {
        Navigator::with_config(NavigatorConfig::default().with_policy(policy))
    }

    // [A,B] with D1 at index 0; insert X at 0 without a segment.
    #[test]
    fn insert_shift_only_moves_index_attachments() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIndex);
        nav.push("a", NOW).unwrap();
        nav.start_segment(&d1).unwrap();
        nav.push("b", NOW).unwrap();
        journal.take();

        nav.insert_shift_only("x", 0).unwrap();
        assert_eq!(nav.screens(), &["x", "a", "b"]);
        let attachments: Vec<_> = nav.registry().attachments().cloned().collect();
        assert_eq!(attachments, vec![Attachment::Index(1)]);
        assert!(Recorder::is(&nav.top_delegate().unwrap(), &d1));
        // Top unchanged: no will_show, one did_show.
        assert_eq!(journal.take(), vec![Event::DidShow("d1", "b")]);
    }

    #[test]
    fn insert_shift_only_leaves_lower_segments_alone() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIndex);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        nav.push("b", NOW).unwrap();
        nav.push_with_new_segment("c", &d2, NOW).unwrap();

        nav.insert_shift_only("x", 1).unwrap();
        let attachments: Vec<_> = nav.registry().attachments().cloned().collect();
        assert_eq!(attachments, vec![Attachment::Index(0), Attachment::Index(3)]);
        assert!(Recorder::is(&nav.top_delegate().unwrap(), &d2));
        assert!(journal.disconnects().is_empty());

        // The shifted segment still unwinds at the right moment.
        nav.pop_to(&"x", NOW).unwrap();
        assert_eq!(journal.disconnects(), vec!["d2"]);
    }

    #[test]
    fn insert_with_new_segment_below_top() {
        for policy in [AttachmentPolicy::ByIndex, AttachmentPolicy::ByIdentity] {
            let journal = Journal::default();
            let d1 = Recorder::new("d1", &journal);
            let d2 = Recorder::new("d2", &journal);
            let dx = Recorder::new("dx", &journal);
            let mut nav = navigator(policy);
            nav.push_with_new_segment("a", &d1, NOW).unwrap();
            nav.push_with_new_segment("b", &d2, NOW).unwrap();

            nav.insert_with_new_segment("x", &dx, 1).unwrap();
            assert_eq!(nav.screens(), &["a", "x", "b"]);
            assert_eq!(nav.registry().len(), 3);
            assert!(Recorder::is(&nav.top_delegate().unwrap(), &d2));
            if policy == AttachmentPolicy::ByIndex {
                let attachments: Vec<_> = nav.registry().attachments().cloned().collect();
                assert_eq!(
                    attachments,
                    vec![
                        Attachment::Index(0),
                        Attachment::Index(1),
                        Attachment::Index(2)
                    ]
                );
            }

            nav.pop(NOW).unwrap();
            assert_eq!(journal.disconnects(), vec!["d2"]);
            assert!(Recorder::is(&nav.top_delegate().unwrap(), &dx));
        }
    }

    #[test]
    fn insert_with_new_segment_on_top_takes_over() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIdentity);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        journal.take();

        nav.insert_with_new_segment("b", &d2, 1).unwrap();
        assert_eq!(
            journal.take(),
            vec![Event::WillShow("d2", "b"), Event::DidShow("d2", "b")]
        );
    }

    #[test]
    fn out_of_bounds_insert_is_rejected_without_change() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIndex);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        journal.take();

        assert_eq!(
            nav.insert_shift_only("x", 2),
            Err(NavigationError::Stack(StackError::IndexOutOfBounds {
                index: 2,
                len: 1
            }))
        );
        assert_eq!(
            nav.insert_with_new_segment("x", &d1, 5),
            Err(NavigationError::Stack(StackError::IndexOutOfBounds {
                index: 5,
                len: 1
            }))
        );
        assert_eq!(nav.screens(), &["a"]);
        assert_eq!(
            nav.registry().attachments().cloned().collect::<Vec<_>>(),
            vec![Attachment::Index(0)]
        );
        assert!(journal.take().is_empty());
    }

    #[test]
    fn mutation_during_transition_is_rejected() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIdentity);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        nav.push("b", Transition::Animated).unwrap();
        assert_eq!(nav.in_flight(), Some(Operation::Push));

        let err = nav.push_with_new_segment("c", &d2, NOW).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::Stack(StackError::TransitionInFlight { .. })
        ));
        assert!(nav.insert_shift_only("c", 0).is_err());
        assert!(nav.pop(NOW).is_err());
        assert_eq!(nav.screens(), &["a", "b"]);
        assert_eq!(nav.registry().len(), 1);

        nav.finish_transition().unwrap();
        assert_eq!(
            nav.finish_transition(),
            Err(NavigationError::Stack(StackError::NoTransitionInFlight))
        );
        nav.push_with_new_segment("c", &d2, NOW).unwrap();
        assert_eq!(nav.registry().len(), 2);
    }

    // [a] + d1@a, [a,b] + d2@b, animated pop of b, then d3 asks to start.
    #[test]
    fn start_segment_waits_for_the_cascade() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        let d3 = Recorder::new("d3", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIdentity);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        nav.push_with_new_segment("b", &d2, NOW).unwrap();
        nav.pop(Transition::Animated).unwrap();
        journal.take();

        assert_eq!(
            nav.start_segment(&d3),
            Err(NavigationError::SegmentDuringTransition {
                in_flight: Operation::Pop
            })
        );
        assert_eq!(nav.registry().len(), 2);

        nav.finish_transition().unwrap();
        assert_eq!(journal.disconnects(), vec!["d2"]);
        nav.start_segment(&d3).unwrap_err();
        assert!(Recorder::is(&nav.top_delegate().unwrap(), &d1));

        // d3 starts on "b" once it is back; d2 stays disconnected.
        nav.push_with_new_segment("b", &d3, NOW).unwrap();
        nav.push("c", NOW).unwrap();
        nav.pop(NOW).unwrap();
        assert_eq!(journal.disconnects(), vec!["d2"]);
        assert!(Recorder::is(&nav.top_delegate().unwrap(), &d3));
    }

    #[test]
    fn rejected_push_with_new_segment_changes_nothing() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIndex);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        nav.push("b", NOW).unwrap();
        journal.take();

        assert_eq!(
            nav.push_with_new_segment("a", &d2, NOW),
            Err(NavigationError::Stack(StackError::DuplicateScreen))
        );
        nav.pop(Transition::Animated).unwrap();
        journal.take();
        assert_eq!(
            nav.push_with_new_segment("c", &d2, NOW),
            Err(NavigationError::Stack(StackError::TransitionInFlight {
                in_flight: Operation::Pop,
                requested: Operation::Push,
            }))
        );
        assert_eq!(nav.screens(), &["a"]);
        assert_eq!(nav.registry().len(), 1);
        assert!(journal.take().is_empty());
        assert!(Recorder::is(&nav.top_delegate().unwrap(), &d1));
    }

    #[test]
    fn root_delegate_answers_until_cleared_or_dropped() {
        let journal = Journal::default();
        let root = Recorder::new("root", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIdentity);
        assert!(nav.top_delegate().is_none());

        nav.set_root_delegate(&root);
        nav.push("a", NOW).unwrap();
        assert!(Recorder::is(&nav.top_delegate().unwrap(), &root));
        assert_eq!(journal.did_shows(), vec![("root", "a")]);

        nav.clear_root_delegate();
        assert!(nav.top_delegate().is_none());
        nav.push("b", NOW).unwrap();
        assert_eq!(journal.did_shows(), vec![("root", "a")]);

        nav.set_root_delegate(&root);
        drop(root);
        assert!(nav.registry().is_empty());
        assert!(nav.top_delegate().is_none());
        nav.pop(NOW).unwrap();
        assert_eq!(journal.did_shows(), vec![("root", "a")]);
        assert!(journal.disconnects().is_empty());
    }

    #[test]
    fn start_segment_twice_on_same_top_is_rejected() {
        for policy in [AttachmentPolicy::ByIndex, AttachmentPolicy::ByIdentity] {
            let journal = Journal::default();
            let d1 = Recorder::new("d1", &journal);
            let d2 = Recorder::new("d2", &journal);
            let mut nav = navigator(policy);
            nav.push("a", NOW).unwrap();
            nav.start_segment(&d1).unwrap();
            assert_eq!(
                nav.start_segment(&d2),
                Err(NavigationError::DuplicateAttachment)
            );
            assert!(Recorder::is(&nav.top_delegate().unwrap(), &d1));
        }
    }

    #[test]
    fn start_segment_on_empty_stack_depends_on_policy() {
        let journal = Journal::default();
        let d = Recorder::new("d", &journal);

        let mut by_identity = navigator(AttachmentPolicy::ByIdentity);
        by_identity.start_segment(&d).unwrap();
        assert!(by_identity.registry().is_empty());
        assert!(by_identity.top_delegate().is_none());

        let mut by_index = navigator(AttachmentPolicy::ByIndex);
        by_index.start_segment(&d).unwrap();
        assert_eq!(by_index.registry().len(), 1);
        assert!(Recorder::is(&by_index.top_delegate().unwrap(), &d));
    }

    #[test]
    fn queries_follow_the_top_delegate() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        d1.set_orientations(OrientationMask::PORTRAIT);
        d2.set_orientations(OrientationMask::LANDSCAPE);
        d2.set_controller(4);
        let defaults = RoutingDefaults {
            supported: OrientationMask::ALL_BUT_UPSIDE_DOWN,
            preferred: Orientation::LandscapeRight,
        };
        let mut nav: Navigator<Screen, u32> =
            Navigator::with_config(NavigatorConfig::default().with_defaults(defaults));
        assert_eq!(nav.supported_orientations(), OrientationMask::ALL_BUT_UPSIDE_DOWN);

        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        assert_eq!(nav.supported_orientations(), OrientationMask::PORTRAIT);
        assert_eq!(nav.animation_controller(Operation::Push, &"a", &"b"), None);

        nav.push_with_new_segment("b", &d2, NOW).unwrap();
        assert_eq!(nav.supported_orientations(), OrientationMask::LANDSCAPE);
        assert_eq!(nav.preferred_orientation(), Orientation::LandscapeRight);
        assert_eq!(nav.animation_controller(Operation::Pop, &"b", &"a"), Some(4));
        assert_eq!(nav.interaction_controller(&4), Some(4));
        assert_eq!(nav.interaction_controller(&5), None);

        nav.pop(NOW).unwrap();
        assert_eq!(nav.supported_orientations(), OrientationMask::PORTRAIT);
    }

    #[test]
    fn unwind_top_segment_pops_its_screens() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let d2 = Recorder::new("d2", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIdentity);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        nav.push_with_new_segment("b", &d2, NOW).unwrap();
        nav.push("c", NOW).unwrap();

        assert_eq!(nav.unwind_top_segment(NOW).unwrap(), vec!["b", "c"]);
        assert_eq!(journal.disconnects(), vec!["d2"]);

        assert_eq!(nav.unwind_top_segment(NOW).unwrap(), vec!["a"]);
        assert!(nav.screens().is_empty());
        assert_eq!(journal.disconnects(), vec!["d2", "d1"]);

        assert!(nav.unwind_top_segment(NOW).unwrap().is_empty());
    }

    #[test]
    fn when_settled_runs_now_without_transition() {
        let mut nav = navigator(AttachmentPolicy::ByIdentity);
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        nav.when_settled(move |o| flag.set(o == Outcome::Finished));
        assert!(ran.get());
    }

    #[test]
    fn pop_on_root_screen_changes_nothing() {
        let journal = Journal::default();
        let d1 = Recorder::new("d1", &journal);
        let mut nav = navigator(AttachmentPolicy::ByIndex);
        nav.push_with_new_segment("a", &d1, NOW).unwrap();
        journal.take();

        assert_eq!(nav.pop(NOW).unwrap(), None);
        assert_eq!(nav.pop_to(&"a", NOW).unwrap(), Vec::<Screen>::new());
        assert!(journal.take().is_empty());
        assert_eq!(
            nav.pop_to(&"q", NOW),
            Err(NavigationError::Stack(StackError::ScreenNotFound))
        );
    }
}
