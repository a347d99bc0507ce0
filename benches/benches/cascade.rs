// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use waypoint_nav::{AttachmentPolicy, Navigator, NavigatorConfig, SegmentDelegate, Transition};

struct Quiet;

impl SegmentDelegate<u32> for Quiet {
    fn disconnect(&self, navigator: &Navigator<u32>) {
        black_box(navigator.registry().len());
    }
}

fn build(policy: AttachmentPolicy, depth: u32, delegates: &[Rc<Quiet>]) -> Navigator<u32> {
    let mut nav = Navigator::with_config(NavigatorConfig::default().with_policy(policy));
    for (screen, d) in (0..depth).zip(delegates) {
        nav.push_with_new_segment(screen, d, Transition::Immediate)
            .unwrap();
    }
    nav
}

fn bench_unwind(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwind_to_root");
    for &depth in &[8_u32, 64, 256] {
        let delegates: Vec<_> = (0..depth).map(|_| Rc::new(Quiet)).collect();
        group.throughput(Throughput::Elements(u64::from(depth)));
        for policy in [AttachmentPolicy::ByIndex, AttachmentPolicy::ByIdentity] {
            group.bench_function(format!("{policy:?}/{depth}"), |b| {
                b.iter_batched(
                    || build(policy, depth, &delegates),
                    |mut nav| {
                        nav.pop_to(&0, Transition::Immediate).unwrap();
                        black_box(nav.registry().len())
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_insert_at_bottom(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_shift_only");
    for &depth in &[8_u32, 64, 256] {
        let delegates: Vec<_> = (0..depth).map(|_| Rc::new(Quiet)).collect();
        group.bench_function(format!("ByIndex/{depth}"), |b| {
            b.iter_batched(
                || build(AttachmentPolicy::ByIndex, depth, &delegates),
                |mut nav| {
                    nav.insert_shift_only(u32::MAX, 0).unwrap();
                    black_box(nav.top_delegate().is_some())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unwind, bench_insert_at_bottom);
criterion_main!(benches);
