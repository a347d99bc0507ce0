// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording delegates shared by the unit tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use waypoint_stack::Operation;

use crate::delegate::SegmentDelegate;
use crate::navigator::Navigator;
use crate::types::OrientationMask;

pub(crate) type Screen = &'static str;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    WillShow(&'static str, Screen),
    DidShow(&'static str, Screen),
    Disconnect(&'static str),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub(crate) fn disconnects(&self) -> Vec<&'static str> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Disconnect(name) => Some(*name),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn did_shows(&self) -> Vec<(&'static str, Screen)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::DidShow(name, screen) => Some((*name, *screen)),
                _ => None,
            })
            .collect()
    }
}

/// A coordinator stand-in that logs every call it receives.
#[derive(Debug)]
pub(crate) struct Recorder {
    name: &'static str,
    journal: Journal,
    orientations: Cell<Option<OrientationMask>>,
    controller: Cell<Option<u32>>,
    // Child coordinators owned by this one; released on disconnect.
    children: RefCell<Vec<Rc<Self>>>,
    // Registry depth observed while being disconnected.
    depth_at_disconnect: Cell<Option<usize>>,
}

impl Recorder {
    pub(crate) fn new(name: &'static str, journal: &Journal) -> Rc<Self> {
        Rc::new(Self {
            name,
            journal: journal.clone(),
            orientations: Cell::new(None),
            controller: Cell::new(None),
            children: RefCell::new(Vec::new()),
            depth_at_disconnect: Cell::new(None),
        })
    }

    pub(crate) fn set_orientations(&self, mask: OrientationMask) {
        self.orientations.set(Some(mask));
    }

    pub(crate) fn set_controller(&self, controller: u32) {
        self.controller.set(Some(controller));
    }

    pub(crate) fn adopt(&self, child: Rc<Self>) {
        self.children.borrow_mut().push(child);
    }

    pub(crate) fn depth_at_disconnect(&self) -> Option<usize> {
        self.depth_at_disconnect.get()
    }

    /// Identity comparison against a routed delegate.
    pub(crate) fn is(delegate: &Rc<dyn SegmentDelegate<Screen, u32>>, expected: &Rc<Self>) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(delegate), Rc::as_ptr(expected))
    }
}

impl SegmentDelegate<Screen, u32> for Recorder {
    fn will_show(&self, screen: &Screen) {
        self.journal.push(Event::WillShow(self.name, screen));
    }

    fn did_show(&self, screen: &Screen) {
        self.journal.push(Event::DidShow(self.name, screen));
    }

    fn supported_orientations(&self) -> Option<OrientationMask> {
        self.orientations.get()
    }

    fn interaction_controller(&self, animation: &u32) -> Option<u32> {
        self.controller.get().filter(|c| c == animation)
    }

    fn animation_controller(&self, _operation: Operation, _from: &Screen, _to: &Screen) -> Option<u32> {
        self.controller.get()
    }

    fn disconnect(&self, navigator: &Navigator<Screen, u32>) {
        self.depth_at_disconnect.set(Some(navigator.registry().len()));
        self.journal.push(Event::Disconnect(self.name));
        self.children.borrow_mut().clear();
    }
}
