//! Conversions between handles of related element types.
//!
//! Rust has no inheritance, so "related" is declared: [`Upcast`] for conversions that always
//! succeed (typically a concrete type to a trait object it implements) and [`Downcast`] for
//! checked narrowing (typically a trait object back to a concrete type through [`Any`]).
//! Both are compile-time capabilities: a conversion between types without an impl does not build.
//!
//! ```
//! use core::{any::Any, ptr::NonNull};
//! use intrc::{Downcast, Irc, RefCount, RefCounted, Upcast};
//!
//! /// # Safety
//! /// Implementors are `#[repr(C)]` with their `RefCount` as the first field.
//! unsafe trait Shape: Any {
//!     fn as_any(&self) -> &dyn Any;
//! }
//!
//! unsafe impl RefCounted for dyn Shape {
//!     unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount {
//!         // The object may already be finalized, so only the counts are touched.
//!         unsafe { &*this.as_ptr().cast::<RefCount>() }
//!     }
//! }
//!
//! #[repr(C)]
//! struct Square {
//!     rc: RefCount,
//!     side: f64,
//! }
//!
//! unsafe impl RefCounted for Square {
//!     unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount {
//!         unsafe { &(*this.as_ptr()).rc }
//!     }
//! }
//!
//! unsafe impl Shape for Square {
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! unsafe impl Upcast<dyn Shape> for Square {
//!     fn upcast(this: NonNull<Self>) -> NonNull<dyn Shape> {
//!         this
//!     }
//! }
//!
//! unsafe impl Downcast<Square> for dyn Shape {
//!     fn downcast(this: &Self) -> Option<&Square> {
//!         this.as_any().downcast_ref()
//!     }
//! }
//!
//! let shape: Irc<dyn Shape> = Irc::upcast(Irc::new(Square { rc: RefCount::new(), side: 2.0 }));
//! let square: Irc<Square> = Irc::downcast(&shape);
//! assert_eq!(square.side, 2.0);
//! assert_eq!(Irc::strong_count(&shape), 2);
//! ```

#[cfg(doc)]
use core::any::Any;
use core::ptr::NonNull;

use crate::RefCounted;

/// Infallible conversion of a pointer to `Self` into a pointer to `U`.
///
/// # Safety
/// The returned pointer must address the same object, `U::ref_count` must resolve to the same
/// [`RefCount`](crate::RefCount) as `Self::ref_count`, and `U::finalize`/`U::reclaim` must be
/// valid for the object (for a `dyn Trait` target the defaults are).
pub unsafe trait Upcast<U: ?Sized + RefCounted>: RefCounted {
    fn upcast(this: NonNull<Self>) -> NonNull<U>;
}

// SAFETY: the identity conversion.
unsafe impl<T: ?Sized + RefCounted> Upcast<T> for T {
    #[inline]
    fn upcast(this: NonNull<Self>) -> NonNull<T> {
        this
    }
}

/// Checked conversion of a live `Self` into a `U`, returning `None` if the object is not a `U`.
///
/// # Safety
/// On success the returned reference must address the same object, sharing the same
/// [`RefCount`](crate::RefCount), and `U`'s lifecycle hooks must be valid for it.
pub unsafe trait Downcast<U: ?Sized + RefCounted>: RefCounted {
    fn downcast(this: &Self) -> Option<&U>;
}
