use core::{alloc::Layout, fmt::Debug, ptr::NonNull};

use alloc::alloc::dealloc;

use crate::sync::{fence, AtomicUsize, Ordering};

pub(crate) const MAX_REFCOUNT: usize = (isize::MAX) as usize;

/// The pair of counters a managed type embeds to be usable with [`Irc`](crate::Irc) and
/// [`Weak`](crate::Weak).
///
/// A fresh `RefCount` starts with one strong reference (owned by the first `Irc` built over the
/// object) and no weak references. The weak word additionally holds one reference on behalf of
/// all strong owners together; it is given back right after the object is finalized, so storage
/// is reclaimed by whichever side lets go last.
///
/// `RefCount` has no drop glue. Its counters stay readable after the object embedding it has been
/// finalized, which is what lets weak handles outlive the object's contents.
///
/// Cloning a `RefCount` does not copy the counts: the clone is a brand new `RefCount`, so a
/// cloned object starts out with its own single owner.
/// ```
/// use intrc::RefCount;
///
/// let counts = RefCount::new();
/// assert_eq!(counts.strong_count(), 1);
/// assert_eq!(counts.weak_count(), 0);
/// assert!(counts.is_unique());
/// ```
///
/// Only the handles move the counts. Changing them by hand takes `unsafe`:
/// ```compile_fail,E0133
/// use intrc::RefCount;
///
/// let counts = RefCount::new();
/// let _ = counts.dec_strong();
/// ```
pub struct RefCount {
    strong: AtomicUsize,
    weak: AtomicUsize,
}

impl RefCount {
    /// Counts for an object about to be handed to its first strong owner.
    #[inline]
    pub fn new() -> Self {
        RefCount {
            strong: AtomicUsize::new(1),
            weak: AtomicUsize::new(1),
        }
    }

    /// Snapshot of the strong count.
    #[inline]
    pub fn strong_count(&self) -> usize {
        self.strong.load(Ordering::Relaxed)
    }

    /// Snapshot of the number of weak references, not including the one held collectively by the
    /// strong owners. Racing with the last strong release it may briefly read one too high.
    #[inline]
    pub fn weak_count(&self) -> usize {
        let weak = self.weak.load(Ordering::Relaxed);
        if self.strong.load(Ordering::Relaxed) > 0 {
            weak.saturating_sub(1)
        } else {
            weak
        }
    }

    /// Whether exactly one strong reference exists right now.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.strong_count() == 1
    }

    /// Whether the object has not been finalized. Once this returns `false` it never returns
    /// `true` again.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.strong_count() > 0
    }

    /// Take one more strong reference.
    ///
    /// # Safety
    /// The caller must already own a strong reference to the object embedding these counts.
    #[inline]
    pub unsafe fn inc_strong(&self) {
        let prev = self.strong.fetch_add(1, Ordering::Relaxed);
        if prev > MAX_REFCOUNT {
            panic!("Overflow of maximum strong reference count.");
        }
    }

    /// Give back one strong reference. Returns `true` for exactly one caller: the one whose
    /// decrement took the count to zero, which must then finalize the object.
    ///
    /// # Safety
    /// The caller must own the strong reference it gives back and must not use it afterwards.
    /// On `true` the caller is responsible for finalizing the object and then giving back the
    /// weak reference the strong owners held together.
    #[inline]
    #[must_use]
    pub unsafe fn dec_strong(&self) -> bool {
        if self.strong.fetch_sub(1, Ordering::Release) != 1 {
            return false;
        }
        // Pairs with the release decrements of every other owner.
        fence(Ordering::Acquire);
        true
    }

    /// Take one more weak reference.
    ///
    /// # Safety
    /// The caller must own a strong or weak reference to the object embedding these counts.
    #[inline]
    pub unsafe fn inc_weak(&self) {
        let prev = self.weak.fetch_add(1, Ordering::Relaxed);
        if prev > MAX_REFCOUNT {
            panic!("Overflow of maximum weak reference count.");
        }
    }

    /// Give back one weak reference. Returns `true` for exactly one caller: the one that must
    /// reclaim the storage.
    ///
    /// # Safety
    /// The caller must own the weak reference it gives back and must not use it afterwards.
    /// On `true` the caller is responsible for reclaiming the storage.
    #[inline]
    #[must_use]
    pub unsafe fn dec_weak(&self) -> bool {
        if self.weak.fetch_sub(1, Ordering::Release) != 1 {
            return false;
        }
        fence(Ordering::Acquire);
        true
    }

    /// Take a strong reference only if the object is still alive.
    ///
    /// Zero is terminal: the decrement that reached it is the one finalizing the object, so the
    /// increment is refused rather than resurrecting it. The acquire on success synchronizes with
    /// the release decrements, so the new owner sees every write made by previous owners.
    ///
    /// # Safety
    /// The caller must own a weak reference to the object embedding these counts. On `true` it
    /// also owns a new strong reference, which it must eventually give back.
    #[inline]
    pub unsafe fn try_inc_strong(&self) -> bool {
        let mut n = self.strong.load(Ordering::Relaxed);
        loop {
            if n == 0 {
                return false;
            }
            if n > MAX_REFCOUNT {
                panic!("Overflow of maximum strong reference count.");
            }
            match self
                .strong
                .compare_exchange_weak(n, n + 1, Ordering::Acquire, Ordering::Relaxed)
            {
                Ok(_) => return true,
                Err(actual) => n = actual,
            }
        }
    }

    /// Whether these are the counts [`RefCount::new`] produces: one strong reference and no weak
    /// ones.
    #[inline]
    pub(crate) fn is_fresh(&self) -> bool {
        self.strong.load(Ordering::Relaxed) == 1 && self.weak.load(Ordering::Relaxed) == 1
    }

    #[cfg(all(test, not(feature = "loom")))]
    pub(crate) fn store(&self, strong: usize, weak: usize) {
        self.strong.store(strong, Ordering::Relaxed);
        self.weak.store(weak, Ordering::Relaxed);
    }
}

impl Default for RefCount {
    fn default() -> Self {
        RefCount::new()
    }
}

impl Clone for RefCount {
    /// Returns fresh counts; the counts of the source are left alone.
    fn clone(&self) -> Self {
        RefCount::new()
    }
}

impl Debug for RefCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefCount")
            .field("strong", &self.strong_count())
            .field("weak", &self.weak_count())
            .finish()
    }
}

/// A type that embeds a [`RefCount`] and can therefore be shared through [`Irc`](crate::Irc)
/// and observed through [`Weak`](crate::Weak).
///
/// Only [`ref_count`](RefCounted::ref_count) is required. The five primitives come with default
/// implementations built on [`RefCount`], and the two lifecycle hooks default to dropping the
/// value in place and freeing storage obtained from a [`Box`](alloc::boxed::Box). Dispatch is
/// static: handles call these as associated functions of `T`.
///
/// Every primitive takes a raw `NonNull<Self>` because after finalization the object's contents
/// are gone and no `&Self` may be formed for it anymore; only the counts are still readable.
///
/// # Safety
/// Implementors guarantee that:
/// - `ref_count` returns the same `RefCount` for the whole life of the storage, and does not
///   read anything `finalize` destroys;
/// - `reclaim` releases the storage the same way it was allocated (the default matches
///   `Box::new`/`Box::leak`);
/// - overridden primitives keep the contracts documented on each of them.
///
/// ```
/// use core::ptr::NonNull;
/// use intrc::{Irc, RefCount, RefCounted};
///
/// struct Node {
///     rc: RefCount,
///     value: u32,
/// }
///
/// unsafe impl RefCounted for Node {
///     unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount {
///         unsafe { &(*this.as_ptr()).rc }
///     }
/// }
///
/// let node = Irc::new(Node { rc: RefCount::new(), value: 7 });
/// assert_eq!(node.value, 7);
/// ```
pub unsafe trait RefCounted {
    /// Locate the embedded counts.
    ///
    /// This is also called on objects that have already been finalized, when a [`Weak`] locks
    /// or goes away after the last strong release. Implementations must reach the `RefCount`
    /// from the raw pointer alone: no `&Self` may be formed and no method of `Self` called,
    /// since the rest of the object may already be dropped. For a trait object, keep the
    /// `RefCount` at a known offset (for instance the first field of `#[repr(C)]`
    /// implementors) and cast the pointer to it.
    ///
    /// [`Weak`]: crate::Weak
    ///
    /// # Safety
    /// `this` must point at storage that has not been reclaimed.
    unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount;

    /// Destroy the contents of the object once its strong count reaches zero. Storage must stay
    /// allocated, and the counts readable, until [`reclaim`](RefCounted::reclaim).
    ///
    /// # Safety
    /// Called exactly once, by the release that observed the strong count reach zero.
    #[inline]
    unsafe fn finalize(this: NonNull<Self>) {
        unsafe { core::ptr::drop_in_place(this.as_ptr()) };
    }

    /// Free the storage once the object has been finalized and no weak reference is left.
    ///
    /// # Safety
    /// Called exactly once, after `finalize`.
    #[inline]
    unsafe fn reclaim(this: NonNull<Self>) {
        unsafe { reclaim_boxed(this) };
    }

    /// Acquire a strong reference.
    ///
    /// # Safety
    /// The caller must already hold a strong reference to `this`.
    #[inline]
    unsafe fn add_strong_ref(this: NonNull<Self>) {
        unsafe { Self::ref_count(this).inc_strong() };
    }

    /// Release a strong reference, finalizing the object if it was the last one.
    ///
    /// # Safety
    /// The caller must own the strong reference being released.
    #[inline]
    unsafe fn release_strong_ref(this: NonNull<Self>) {
        if !unsafe { Self::ref_count(this).dec_strong() } {
            return;
        }
        log::trace!(target: "intrc", "finalizing object at {:p}", this.cast::<u8>());
        unsafe { Self::finalize(this) };
        // Give back the weak reference the strong owners held together.
        unsafe { Self::release_weak_ref(this) };
    }

    /// Acquire a weak reference.
    ///
    /// # Safety
    /// The caller must hold a strong or weak reference to `this`.
    #[inline]
    unsafe fn add_weak_ref(this: NonNull<Self>) {
        unsafe { Self::ref_count(this).inc_weak() };
    }

    /// Release a weak reference, reclaiming storage if nothing else refers to it.
    ///
    /// # Safety
    /// The caller must own the weak reference being released.
    #[inline]
    unsafe fn release_weak_ref(this: NonNull<Self>) {
        if !unsafe { Self::ref_count(this).dec_weak() } {
            return;
        }
        log::trace!(target: "intrc", "reclaiming storage at {:p}", this.cast::<u8>());
        unsafe { Self::reclaim(this) };
    }

    /// Try to turn a weak reference into an additional strong one. Returns `false` once the
    /// strong count has reached zero; never both succeeds and lets the finalizer run.
    ///
    /// # Safety
    /// The caller must hold a weak reference to `this`.
    #[inline]
    unsafe fn try_upgrade_weak(this: NonNull<Self>) -> bool {
        unsafe { Self::ref_count(this).try_inc_strong() }
    }
}

/// Free storage that was allocated by `Box` and whose contents have already been dropped.
/// This is what [`RefCounted::reclaim`] does by default; custom `reclaim` hooks that only want to
/// observe reclamation can forward to it.
///
/// # Safety
/// `this` must come from a `Box<T>` (possibly unsize-coerced) whose value was dropped in place
/// and must not be used afterwards.
pub unsafe fn reclaim_boxed<T: ?Sized>(this: NonNull<T>) {
    let layout = Layout::for_value(unsafe { this.as_ref() });
    if layout.size() != 0 {
        unsafe { dealloc(this.as_ptr().cast(), layout) };
    }
}
