//! Atomic primitives used by the counters. With the `loom` feature enabled these come from
//! `loom` so the protocol can be model checked.

#[cfg(not(target_has_atomic = "ptr"))]
compile_error!("Cannot use `Irc` on a system without atomics.");

#[cfg(feature = "loom")]
pub(crate) use loom::sync::atomic::{fence, AtomicUsize, Ordering};

#[cfg(not(feature = "loom"))]
pub(crate) use core::sync::atomic::{fence, AtomicUsize, Ordering};
