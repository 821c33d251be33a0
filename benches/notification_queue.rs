// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast queue and the focus trap.
//!
//! Measures the performance of:
//! - Enqueueing past capacity (eviction path)
//! - Ticking a full queue through expiry and removal
//! - Tab cycling inside a dialog with many controls

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use weightlog::ui::focus::{self, Element, VirtualDocument};
use weightlog::ui::notifications::NotificationQueue;

/// Benchmark enqueue on a queue that is already full.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");
    let t0 = Instant::now();

    group.bench_function("enqueue_full", |b| {
        let mut queue = NotificationQueue::new();
        for i in 0..5 {
            queue.info(format!("seed {i}"), None, t0);
        }
        b.iter(|| {
            black_box(queue.success("Saved", None, t0));
        });
    });

    group.finish();
}

/// Benchmark a full expire-then-remove cycle.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");
    let t0 = Instant::now();

    group.bench_function("tick_full_cycle", |b| {
        b.iter(|| {
            let mut queue = NotificationQueue::new();
            for i in 0..5 {
                queue.error(format!("failure {i}"), None, t0);
            }
            queue.tick(t0 + Duration::from_secs(6));
            queue.tick(t0 + Duration::from_secs(7));
            black_box(queue.is_empty());
        });
    });

    group.finish();
}

/// Benchmark Tab cycling; the tabbable set is recomputed on every press.
fn bench_focus_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_trap");

    let mut doc = VirtualDocument::new();
    let root = doc.append(doc.body(), Element::container().with_tab_index(-1));
    for i in 0..50 {
        doc.append(root, Element::button(format!("Action {i}")));
    }

    group.bench_function("cycle_50", |b| {
        b.iter(|| {
            black_box(focus::cycle(&mut doc, root, false));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_tick, bench_focus_cycle);
criterion_main!(benches);
