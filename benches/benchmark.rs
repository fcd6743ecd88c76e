use std::{
    ptr::NonNull,
    sync::{Arc, Weak as ArcWeak},
    thread,
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intrc::{Irc, RefCount, RefCounted, Weak};

//cargo bench

struct Node {
    rc: RefCount,
    value: u64,
}

unsafe impl RefCounted for Node {
    unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount {
        unsafe { &(*this.as_ptr()).rc }
    }
}

fn node() -> Node {
    Node {
        rc: RefCount::new(),
        value: 100,
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("New Irc", |b| b.iter(new_irc));
    c.bench_function("New Arc", |b| b.iter(new_arc));
    c.bench_function("Multiple clone Irc", |b| b.iter(multi_clone_irc));
    c.bench_function("Multiple clone Arc", |b| b.iter(multi_clone_arc));
    c.bench_function("Multiple deref Irc", |b| b.iter(multi_deref_irc));
    c.bench_function("Multiple deref Arc", |b| b.iter(multi_deref_arc));
    c.bench_function("Multiple upgrade Irc", |b| b.iter(multi_upgrade_irc));
    c.bench_function("Multiple upgrade Arc", |b| b.iter(multi_upgrade_arc));
    c.bench_function("Multiple threads Irc", |b| b.iter(multi_thread_irc));
    c.bench_function("Multiple threads Arc", |b| b.iter(multi_thread_arc));
}

fn new_irc() {
    black_box(Irc::new(node()));
}

fn new_arc() {
    black_box(Arc::new(100u64));
}

fn multi_clone_irc() {
    let irc = Irc::new(node());
    for _ in 0..100 {
        black_box(irc.clone());
    }
}

fn multi_clone_arc() {
    let arc = Arc::new(100u64);
    for _ in 0..100 {
        black_box(arc.clone());
    }
}

fn multi_deref_irc() {
    let irc = Irc::new(node());
    for _ in 0..100 {
        black_box(irc.value);
    }
}

fn multi_deref_arc() {
    let arc = Arc::new(100u64);
    for _ in 0..100 {
        black_box(*arc);
    }
}

fn multi_upgrade_irc() {
    let irc = Irc::new(node());
    let weak = Irc::downgrade(&irc);
    for _ in 0..100 {
        black_box(Weak::lock(&weak));
    }
}

fn multi_upgrade_arc() {
    let arc = Arc::new(100u64);
    let weak: ArcWeak<u64> = Arc::downgrade(&arc);
    for _ in 0..100 {
        black_box(weak.upgrade());
    }
}

fn multi_thread_irc() {
    let irc = Irc::new(node());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let weak = Irc::downgrade(&irc);
            thread::spawn(move || {
                for _ in 0..1000 {
                    black_box(Weak::lock(&weak));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

fn multi_thread_arc() {
    let arc = Arc::new(100u64);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let weak = Arc::downgrade(&arc);
            thread::spawn(move || {
                for _ in 0..1000 {
                    black_box(weak.upgrade());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
