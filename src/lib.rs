//! `Irc<T>` is a thread-safe smart pointer whose reference counts live inside the object it
//! points at. `Irc<T>` stands for: Intrusive Reference Counted.
//! It provides shared ownership like `Arc<T>`, but because the counts are embedded in `T` no
//! control block is ever allocated, and a raw pointer to an object is enough to get a handle to
//! it back.
//!
//! A managed type embeds a [`RefCount`] and implements [`RefCounted`], which supplies the five
//! counting primitives the handles rely on: acquire and release a strong reference, acquire and
//! release a weak reference, and try to upgrade a weak reference. Defaults are provided for all
//! of them; a type only has to say where its `RefCount` is.
//!
//! A cycle between `Irc` pointers cannot be freed as the strong counts never reach zero. The
//! solution is a [`Weak<T>`], a non-owning observer. When the last `Irc` goes away the object is
//! finalized (dropped in place), but its storage stays allocated until the last `Weak` goes away
//! too, so weak handles can still read the counts and compare addresses. Upgrading a `Weak` is
//! lock-free and races safely with the final release on other threads.

#![cfg_attr(all(feature = "nostd", not(test)), no_std)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod cast;
pub mod count;
pub mod irc;
mod sync;

pub use crate::cast::{Downcast, Upcast};
pub use crate::count::{reclaim_boxed, RefCount, RefCounted};
pub use crate::irc::{Irc, Weak};
