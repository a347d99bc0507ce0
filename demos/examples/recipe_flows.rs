// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested flows with animated transitions.
//!
//! A recipe flow starts an editor flow, which pushes a landscape-only photo
//! screen. An interactive back gesture is cancelled halfway, then a
//! multi-level pop unwinds both child flows in one cascade. Finally an
//! onboarding screen is inserted under everything without disturbing the
//! current top delegate.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p waypoint_demos --example recipe_flows`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use waypoint_nav::{
    AttachmentPolicy, Navigator, NavigatorConfig, Operation, OrientationMask, Outcome,
    SegmentDelegate, Transition,
};

type Screen = &'static str;

/// Opaque id of a transition animation owned by the rendering layer.
type Animation = u32;

struct Flow {
    name: &'static str,
    orientations: Option<OrientationMask>,
    animation: Option<Animation>,
    disconnected: Cell<bool>,
    events: Rc<RefCell<Vec<String>>>,
}

impl Flow {
    fn new(name: &'static str, events: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name,
            orientations: None,
            animation: None,
            disconnected: Cell::new(false),
            events: events.clone(),
        }
    }
}

impl SegmentDelegate<Screen, Animation> for Flow {
    fn did_show(&self, screen: &Screen) {
        self.events
            .borrow_mut()
            .push(format!("{} <- did_show({screen})", self.name));
    }

    fn supported_orientations(&self) -> Option<OrientationMask> {
        self.orientations
    }

    fn animation_controller(&self, operation: Operation, from: &Screen, to: &Screen) -> Option<Animation> {
        log::info!("{} asked for a {operation} animation {from} -> {to}", self.name);
        self.animation
    }

    fn disconnect(&self, _navigator: &Navigator<Screen, Animation>) {
        assert!(!self.disconnected.replace(true), "disconnected twice");
        self.events
            .borrow_mut()
            .push(format!("{} <- disconnect", self.name));
    }
}

fn main() {
    env_logger::init();

    let events = Rc::new(RefCell::new(Vec::new()));
    let recipes = Rc::new(Flow::new("recipes", &events));
    let editor = Rc::new(Flow::new("editor", &events));
    let photo = Rc::new(Flow {
        orientations: Some(OrientationMask::LANDSCAPE),
        animation: Some(7),
        ..Flow::new("photo", &events)
    });

    let config = NavigatorConfig::default().with_policy(AttachmentPolicy::ByIndex);
    let mut nav: Navigator<Screen, Animation> = Navigator::with_config(config);

    nav.push_with_new_segment("recipes", &recipes, Transition::Immediate)
        .unwrap();
    nav.push_with_new_segment("edit recipe", &editor, Transition::Immediate)
        .unwrap();
    nav.push("ingredients", Transition::Immediate).unwrap();
    nav.push_with_new_segment("photo", &photo, Transition::Animated)
        .unwrap();
    nav.finish_transition().unwrap();
    println!("== Stack ==\n  {:?}", nav.screens());
    println!(
        "== Orientations on photo ==\n  {:?}",
        nav.supported_orientations()
    );
    assert_eq!(nav.supported_orientations(), OrientationMask::LANDSCAPE);
    assert_eq!(
        nav.animation_controller(Operation::Pop, &"photo", &"ingredients"),
        Some(7)
    );

    // Back gesture starts, then is abandoned.
    nav.pop(Transition::Animated).unwrap();
    let outcome = Rc::new(Cell::new(None));
    let seen = outcome.clone();
    nav.when_settled(move |o| seen.set(Some(o)));
    nav.cancel_transition().unwrap();
    assert_eq!(outcome.get(), Some(Outcome::Cancelled));
    assert_eq!(nav.registry().len(), 3);

    events.borrow_mut().clear();
    nav.pop_to(&"recipes", Transition::Animated).unwrap();
    nav.finish_transition().unwrap();
    println!("== Unwind ==\n  {:?}", events.borrow());
    assert_eq!(
        *events.borrow(),
        vec![
            "photo <- disconnect".to_string(),
            "editor <- disconnect".to_string(),
            "recipes <- did_show(recipes)".to_string(),
        ]
    );

    nav.insert_shift_only("onboarding", 0).unwrap();
    println!(
        "== After insert ==\n  {:?}\n  {:?}",
        nav.screens(),
        nav.registry().attachments().collect::<Vec<_>>()
    );
    assert_eq!(nav.screens(), &["onboarding", "recipes"]);
    assert!(nav.top_delegate().is_some());
    assert_eq!(nav.supported_orientations(), OrientationMask::all());
}
