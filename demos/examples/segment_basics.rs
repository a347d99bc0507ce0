// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment basics.
//!
//! Two coordinators share one stack. Popping back past the second one's
//! screen disconnects it, and the first one hears the did-show exactly once.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p waypoint_demos --example segment_basics`

use std::cell::RefCell;
use std::rc::Rc;

use waypoint_nav::{Navigator, SegmentDelegate, Transition};

type Screen = &'static str;

struct Coordinator {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl SegmentDelegate<Screen> for Coordinator {
    fn will_show(&self, screen: &Screen) {
        self.log
            .borrow_mut()
            .push(format!("{}: will show {screen}", self.name));
    }

    fn did_show(&self, screen: &Screen) {
        self.log
            .borrow_mut()
            .push(format!("{}: did show {screen}", self.name));
    }

    fn disconnect(&self, navigator: &Navigator<Screen>) {
        self.log.borrow_mut().push(format!(
            "{}: disconnected, top is now {:?}",
            self.name,
            navigator.top_screen()
        ));
    }
}

fn main() {
    env_logger::init();

    let log = Rc::new(RefCell::new(Vec::new()));
    let ingredients = Rc::new(Coordinator {
        name: "ingredients",
        log: log.clone(),
    });
    let measures = Rc::new(Coordinator {
        name: "measures",
        log: log.clone(),
    });

    let mut nav: Navigator<Screen> = Navigator::new();
    nav.push("ingredient list", Transition::Immediate).unwrap();
    nav.start_segment(&ingredients).unwrap();
    nav.push_with_new_segment("measure picker", &measures, Transition::Immediate)
        .unwrap();
    println!("== After push ==\n  {:?}", log.borrow());
    log.borrow_mut().clear();

    let popped = nav.pop(Transition::Immediate).unwrap();
    println!("== After pop of {popped:?} ==\n  {:?}", log.borrow());

    assert_eq!(
        *log.borrow(),
        vec![
            "measures: will show ingredient list".to_string(),
            "measures: disconnected, top is now Some(\"ingredient list\")".to_string(),
            "ingredients: did show ingredient list".to_string(),
        ]
    );
}
