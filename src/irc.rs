use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Pointer},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::Deref,
    panic::{RefUnwindSafe, UnwindSafe},
    ptr::{self, NonNull},
};

use alloc::boxed::Box;

use crate::{Downcast, RefCounted, Upcast};

/// `Irc` is an intrusive, reference counted, nullable smart pointer.
/// `Irc` stands for: Intrusive Reference Counted.
///
/// Like `Arc<T>` it provides thread-safe shared ownership, but the counts live inside the pointee:
/// `T` embeds a [`RefCount`](crate::RefCount) and implements [`RefCounted`]. Sharing an object
/// therefore never allocates a control block, and a raw pointer to the object is enough to
/// recover a handle to it (see [`Irc::from_raw`]).
///
/// ## Null handles
/// An `Irc<T>` may be null. A failed [`Weak::lock`], a failed [`Irc::downcast`] and
/// [`Irc::default`] all produce null handles. Check with [`Irc::is_null`] or [`Irc::get`] before
/// dereferencing: [`Deref`] on a null handle panics.
///
/// ## Breaking reference cycles with `Weak<T>`
/// Cycles of `Irc` pointers are never freed. A [`Weak<T>`] observes the object without keeping it
/// alive; it only keeps the storage (and thus the counts) valid, and has to be locked back into
/// an `Irc<T>` to reach the data.
///
/// ## Drop behavior
/// Dropping a non-null `Irc<T>` releases one strong reference. The release that takes the strong
/// count to zero finalizes the object (by default, drops it in place). The storage itself is
/// reclaimed once no `Weak<T>` refers to it either.
///
/// To prevent name clashes with `T`'s methods, `Irc<T>`'s functions are associated.
///
/// ## Examples
///
/// ```
/// use core::ptr::NonNull;
/// use intrc::{Irc, RefCount, RefCounted, Weak};
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
/// let a = Irc::new(Node { rc: RefCount::new(), value: 100 });
/// let b = a.clone();
/// assert_eq!(b.value, 100);
/// assert_eq!(Irc::strong_count(&a), 2);
///
/// let weak = Irc::downgrade(&a);
/// drop(a);
/// drop(b);
/// assert!(Irc::is_null(&Weak::lock(&weak)));
/// ```
///
/// Example with multiple threads:
/// ```
/// use core::ptr::NonNull;
/// use std::thread;
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
/// let irc = Irc::new(Node { rc: RefCount::new(), value: 100 });
/// let moved = irc.clone();
/// let handle = thread::spawn(move || moved.value);
///
/// assert_eq!(handle.join().unwrap(), 100);
/// assert_eq!(Irc::strong_count(&irc), 1);
/// ```
pub struct Irc<T: ?Sized + RefCounted> {
    ptr: Option<NonNull<T>>,
    phantom: PhantomData<T>,
}

unsafe impl<T: ?Sized + RefCounted + Sync + Send> Send for Irc<T> {}
unsafe impl<T: ?Sized + RefCounted + Sync + Send> Sync for Irc<T> {}

/// Address of the object, without metadata, for identity comparisons.
#[inline]
fn addr<T: ?Sized>(ptr: Option<NonNull<T>>) -> *const u8 {
    match ptr {
        Some(ptr) => ptr.cast::<u8>().as_ptr() as *const u8,
        None => ptr::null(),
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn null_deref() -> ! {
    panic!("Dereferenced a null `Irc`.");
}

impl<T: RefCounted> Irc<T> {
    /// Box `value` and become its first owner.
    ///
    /// `value` must carry fresh counts (one strong reference, no weak ones), which is what
    /// [`RefCount::new`](crate::RefCount::new) produces. That initial strong reference is
    /// adopted rather than incremented.
    #[inline]
    pub fn new(value: T) -> Self {
        Irc::from_box(Box::new(value))
    }
}

impl<T: ?Sized + RefCounted> Irc<T> {
    /// A handle that points at nothing.
    #[inline]
    pub const fn null() -> Self {
        Irc {
            ptr: None,
            phantom: PhantomData,
        }
    }

    /// Take ownership of a boxed object carrying fresh counts. Works for unsized `T`, so a
    /// `Box<dyn Trait>` can be shared directly.
    ///
    /// # Panics
    /// Panics if the counts are not the ones [`RefCount::new`](crate::RefCount::new) produces.
    #[inline]
    pub fn from_box(value: Box<T>) -> Self {
        assert!(
            unsafe { T::ref_count(NonNull::from(&*value)) }.is_fresh(),
            "`Irc::from_box` requires an object with fresh counts"
        );
        let ptr = NonNull::from(Box::leak(value));
        Irc {
            ptr: Some(ptr),
            phantom: PhantomData,
        }
    }

    /// Build a handle over a raw pointer.
    ///
    /// With `add_ref` a strong reference is acquired for the new handle. Without it the handle
    /// adopts a strong reference the caller already owns, for instance one handed out by
    /// [`Irc::detach`] or [`Weak::get_locked`]. A `None` pointer yields a null handle either way.
    ///
    /// # Safety
    /// `ptr`, if non-null, must point at a live object managed by these handles. With `add_ref`
    /// the caller must hold a strong reference for the duration of the call; without it the
    /// caller must own exactly the strong reference being adopted, and gives it up.
    ///
    /// ```
    /// # use core::ptr::NonNull;
    /// # use intrc::{Irc, RefCount, RefCounted};
    /// # struct Node { rc: RefCount }
    /// # unsafe impl RefCounted for Node {
    /// #     unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount {
    /// #         unsafe { &(*this.as_ptr()).rc }
    /// #     }
    /// # }
    /// let mut irc = Irc::new(Node { rc: RefCount::new() });
    /// let raw = Irc::detach(&mut irc);
    /// assert!(Irc::is_null(&irc));
    ///
    /// let irc = unsafe { Irc::from_raw(raw, false) };
    /// assert_eq!(Irc::strong_count(&irc), 1);
    /// ```
    #[inline]
    pub unsafe fn from_raw(ptr: Option<NonNull<T>>, add_ref: bool) -> Self {
        if let (Some(ptr), true) = (ptr, add_ref) {
            unsafe { T::add_strong_ref(ptr) };
        }
        Irc {
            ptr,
            phantom: PhantomData,
        }
    }

    /// Whether this handle points at nothing.
    #[inline]
    pub fn is_null(this: &Self) -> bool {
        this.ptr.is_none()
    }

    /// The object, or `None` for a null handle.
    #[inline]
    pub fn get(this: &Self) -> Option<&T> {
        this.ptr.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// The raw pointer held by this handle. Ownership is not transferred.
    #[inline]
    pub fn as_ptr(this: &Self) -> Option<NonNull<T>> {
        this.ptr
    }

    /// Clear the handle and hand its strong reference to the caller, who must eventually give it
    /// back through [`Irc::from_raw`] with `add_ref == false` or [`RefCounted::release_strong_ref`].
    #[inline]
    pub fn detach(this: &mut Self) -> Option<NonNull<T>> {
        this.ptr.take()
    }

    /// Consuming form of [`Irc::detach`].
    #[inline]
    pub fn into_raw(this: Self) -> Option<NonNull<T>> {
        let mut this = this;
        Irc::detach(&mut this)
    }

    /// Point this handle at `ptr` and release whatever it pointed at before.
    ///
    /// The new target is acquired before the old one is released, so resetting a handle to the
    /// object it already points at leaves the object alive and its count unchanged.
    ///
    /// # Safety
    /// Same contract as [`Irc::from_raw`].
    #[inline]
    pub unsafe fn reset_raw(this: &mut Self, ptr: Option<NonNull<T>>, add_ref: bool) {
        let old = mem::replace(this, unsafe { Irc::from_raw(ptr, add_ref) });
        drop(old);
    }

    /// Release the current target, if any, and leave the handle null.
    #[inline]
    pub fn reset(this: &mut Self) {
        drop(mem::take(this));
    }

    #[inline]
    pub fn swap(this: &mut Self, other: &mut Self) {
        mem::swap(this, other);
    }

    /// Create a `Weak<T>` observing the same object. This increments the weak count.
    /// A null handle downgrades to a null `Weak`.
    #[inline]
    pub fn downgrade(this: &Self) -> Weak<T> {
        if let Some(ptr) = this.ptr {
            unsafe { T::add_weak_ref(ptr) };
        }
        Weak {
            ptr: this.ptr,
            phantom: PhantomData,
        }
    }

    /// Number of strong references to the object, 0 for a null handle.
    #[inline]
    pub fn strong_count(this: &Self) -> usize {
        match this.ptr {
            Some(ptr) => unsafe { T::ref_count(ptr) }.strong_count(),
            None => 0,
        }
    }

    /// Number of weak references to the object, 0 for a null handle.
    #[inline]
    pub fn weak_count(this: &Self) -> usize {
        match this.ptr {
            Some(ptr) => unsafe { T::ref_count(ptr) }.weak_count(),
            None => 0,
        }
    }

    /// Whether this is the only strong reference to the object.
    #[inline]
    pub fn is_unique(this: &Self) -> bool {
        Irc::strong_count(this) == 1
    }

    /// Checks if two handles point at the same object. Two null handles are equal.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        addr(this.ptr) == addr(other.ptr)
    }

    /// Convert into a handle of a wider type sharing the same reference. Never fails and leaves
    /// the counts untouched.
    #[inline]
    pub fn upcast<U>(this: Self) -> Irc<U>
    where
        T: Upcast<U>,
        U: ?Sized + RefCounted,
    {
        Irc {
            ptr: Irc::into_raw(this).map(<T as Upcast<U>>::upcast),
            phantom: PhantomData,
        }
    }

    /// A new handle of a narrower type sharing the object, or a null handle if the object is not
    /// a `U`. Only a successful cast touches the strong count.
    #[inline]
    pub fn downcast<U>(this: &Self) -> Irc<U>
    where
        T: Downcast<U>,
        U: ?Sized + RefCounted,
    {
        match Irc::get(this).and_then(<T as Downcast<U>>::downcast) {
            Some(target) => unsafe { Irc::from_raw(Some(NonNull::from(target)), true) },
            None => Irc::null(),
        }
    }
}

impl<T: ?Sized + RefCounted> Deref for Irc<T> {
    type Target = T;

    /// Get an immutable reference to the object.
    ///
    /// # Panics
    /// If the handle is null.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &Self::Target {
        match self.ptr {
            Some(ptr) => unsafe { &*ptr.as_ptr() },
            None => null_deref(),
        }
    }
}

impl<T: ?Sized + RefCounted> Drop for Irc<T> {
    #[inline]
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr {
            unsafe { T::release_strong_ref(ptr) };
        }
    }
}

impl<T: ?Sized + RefCounted> Clone for Irc<T> {
    /// Clone an `Irc<T>` (increment the strong count).
    /// It will panic if the strong count overflows.
    #[inline]
    fn clone(&self) -> Self {
        if let Some(ptr) = self.ptr {
            unsafe { T::add_strong_ref(ptr) };
        }
        Irc {
            ptr: self.ptr,
            phantom: PhantomData,
        }
    }
}

impl<T: ?Sized + RefCounted> Default for Irc<T> {
    #[inline]
    fn default() -> Self {
        Irc::null()
    }
}

impl<T: ?Sized + RefCounted> AsRef<T> for Irc<T> {
    #[track_caller]
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T: ?Sized + RefCounted + Display> Display for Irc<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match Irc::get(self) {
            Some(value) => Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

impl<T: ?Sized + RefCounted + Debug> Debug for Irc<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match Irc::get(self) {
            Some(value) => Debug::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

impl<T: ?Sized + RefCounted> Pointer for Irc<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Pointer::fmt(&addr(self.ptr), f)
    }
}

impl<T: RefCounted> From<T> for Irc<T> {
    /// Equivalent to [`Irc::new`].
    fn from(value: T) -> Self {
        Irc::new(value)
    }
}

impl<T: ?Sized + RefCounted> From<Box<T>> for Irc<T> {
    /// Equivalent to [`Irc::from_box`].
    fn from(value: Box<T>) -> Self {
        Irc::from_box(value)
    }
}

impl<T: ?Sized + RefCounted, U: ?Sized + RefCounted> PartialEq<Irc<U>> for Irc<T> {
    /// Identity comparison: equal when both point at the same object (or both are null).
    #[inline]
    fn eq(&self, other: &Irc<U>) -> bool {
        addr(self.ptr) == addr(other.ptr)
    }
}

impl<T: ?Sized + RefCounted> Eq for Irc<T> {}

impl<T: ?Sized + RefCounted> PartialEq<NonNull<T>> for Irc<T> {
    #[inline]
    fn eq(&self, other: &NonNull<T>) -> bool {
        addr(self.ptr) == addr(Some(*other))
    }
}

impl<T: ?Sized + RefCounted> PartialEq<Irc<T>> for NonNull<T> {
    #[inline]
    fn eq(&self, other: &Irc<T>) -> bool {
        other == self
    }
}

impl<T: ?Sized + RefCounted> PartialEq<Option<NonNull<T>>> for Irc<T> {
    /// Comparing against `None` tests for a null handle.
    #[inline]
    fn eq(&self, other: &Option<NonNull<T>>) -> bool {
        addr(self.ptr) == addr(*other)
    }
}

impl<T: ?Sized + RefCounted> PartialEq<Irc<T>> for Option<NonNull<T>> {
    #[inline]
    fn eq(&self, other: &Irc<T>) -> bool {
        other == self
    }
}

impl<T: ?Sized + RefCounted> PartialOrd for Irc<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized + RefCounted> Ord for Irc<T> {
    /// Orders handles by the address of the object, null first.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        addr(self.ptr).cmp(&addr(other.ptr))
    }
}

impl<T: ?Sized + RefCounted> Hash for Irc<T> {
    /// Hashes the address, consistent with the identity `Eq`.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        addr(self.ptr).hash(state);
    }
}

impl<T: ?Sized + RefCounted> Unpin for Irc<T> {}

impl<T: ?Sized + RefCounted + RefUnwindSafe> UnwindSafe for Irc<T> {}

/// `Weak<T>` is a non-owning reference to an object shared through [`Irc<T>`]. It does not keep
/// the object alive (which can be finalized), only its storage, so the counts stay readable and
/// the address stays comparable. `Weak<T>` cannot access the object directly and must be locked
/// into an `Irc<T>` to do so.
///
/// One use case of a `Weak<T>` is a tree: parents own their children through `Irc<T>`, and
/// children point back at their parents through `Weak<T>`.
///
/// Locking races safely with the last strong release on another thread: it either returns a
/// handle that keeps the object alive until that handle is dropped, or a null handle. It never
/// returns a handle to an object that is being finalized.
///
/// Like `Irc<T>`, a `Weak<T>` may be null and its functions are associated.
///
/// # Examples
///
/// ```
/// use core::ptr::NonNull;
/// use intrc::{Irc, RefCount, RefCounted, Weak};
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
/// let irc = Irc::new(Node { rc: RefCount::new(), value: 100 });
/// let weak = Irc::downgrade(&irc);
/// let locked = Weak::lock(&weak);
/// assert_eq!(locked.value, 100);
///
/// drop(irc);
/// drop(locked);
/// assert!(Weak::upgrade(&weak).is_none());
/// ```
pub struct Weak<T: ?Sized + RefCounted> {
    ptr: Option<NonNull<T>>,
    phantom: PhantomData<T>,
}

unsafe impl<T: ?Sized + RefCounted + Sync + Send> Send for Weak<T> {}
unsafe impl<T: ?Sized + RefCounted + Sync + Send> Sync for Weak<T> {}

impl<T: ?Sized + RefCounted> Weak<T> {
    /// A weak handle that observes nothing. Locking it always fails.
    #[inline]
    pub const fn null() -> Self {
        Weak {
            ptr: None,
            phantom: PhantomData,
        }
    }

    /// Build a weak handle over a raw pointer, acquiring a weak reference when `add_ref` is set
    /// and adopting one the caller owns otherwise.
    ///
    /// # Safety
    /// `ptr`, if non-null, must point at storage managed by these handles that has not been
    /// reclaimed. With `add_ref` the caller must hold a strong or weak reference for the duration
    /// of the call; without it the caller must own exactly the weak reference being adopted.
    #[inline]
    pub unsafe fn from_raw(ptr: Option<NonNull<T>>, add_ref: bool) -> Self {
        if let (Some(ptr), true) = (ptr, add_ref) {
            unsafe { T::add_weak_ref(ptr) };
        }
        Weak {
            ptr,
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn is_null(this: &Self) -> bool {
        this.ptr.is_none()
    }

    /// The observed address. It may only be compared, never dereferenced: the object may already
    /// have been finalized.
    #[inline]
    pub fn as_ptr(this: &Self) -> Option<NonNull<T>> {
        this.ptr
    }

    /// Clear the handle and hand its weak reference to the caller.
    #[inline]
    pub fn detach(this: &mut Self) -> Option<NonNull<T>> {
        this.ptr.take()
    }

    #[inline]
    pub fn into_raw(this: Self) -> Option<NonNull<T>> {
        let mut this = this;
        Weak::detach(&mut this)
    }

    /// Point this handle at `ptr`, then release the previous target.
    ///
    /// # Safety
    /// Same contract as [`Weak::from_raw`].
    #[inline]
    pub unsafe fn reset_raw(this: &mut Self, ptr: Option<NonNull<T>>, add_ref: bool) {
        let old = mem::replace(this, unsafe { Weak::from_raw(ptr, add_ref) });
        drop(old);
    }

    #[inline]
    pub fn reset(this: &mut Self) {
        drop(mem::take(this));
    }

    #[inline]
    pub fn swap(this: &mut Self, other: &mut Self) {
        mem::swap(this, other);
    }

    /// Try to obtain a strong handle to the object.
    ///
    /// Returns a null `Irc<T>` if this handle is null or the object's strong count has already
    /// reached zero. On success the strong reference taken by the upgrade is adopted by the
    /// returned handle.
    ///
    /// ```
    /// # use core::ptr::NonNull;
    /// # use intrc::{Irc, RefCount, RefCounted, Weak};
    /// # struct Node { rc: RefCount }
    /// # unsafe impl RefCounted for Node {
    /// #     unsafe fn ref_count<'a>(this: NonNull<Self>) -> &'a RefCount {
    /// #         unsafe { &(*this.as_ptr()).rc }
    /// #     }
    /// # }
    /// let irc = Irc::new(Node { rc: RefCount::new() });
    /// let weak = Irc::downgrade(&irc);
    ///
    /// let locked = Weak::lock(&weak);
    /// assert!(locked == irc);
    /// assert_eq!(Irc::strong_count(&irc), 2);
    ///
    /// drop(locked);
    /// drop(irc);
    /// assert!(Irc::is_null(&Weak::lock(&weak)));
    /// ```
    #[inline]
    pub fn lock(this: &Self) -> Irc<T> {
        unsafe { Irc::from_raw(Weak::get_locked(this), false) }
    }

    /// The upgrade protocol with a raw result. On success the caller owns one strong reference
    /// and must give it back, typically by wrapping it with [`Irc::from_raw`] and
    /// `add_ref == false`, or through [`RefCounted::release_strong_ref`].
    #[inline]
    pub fn get_locked(this: &Self) -> Option<NonNull<T>> {
        let ptr = this.ptr?;
        if unsafe { T::try_upgrade_weak(ptr) } {
            Some(ptr)
        } else {
            None
        }
    }

    /// [`Weak::lock`], with failure expressed as `None`.
    #[inline]
    pub fn upgrade(this: &Self) -> Option<Irc<T>> {
        Weak::get_locked(this).map(|ptr| unsafe { Irc::from_raw(Some(ptr), false) })
    }

    /// Number of strong references to the observed object; 0 once it has been finalized or for a
    /// null handle.
    #[inline]
    pub fn strong_count(this: &Self) -> usize {
        match this.ptr {
            Some(ptr) => unsafe { T::ref_count(ptr) }.strong_count(),
            None => 0,
        }
    }

    #[inline]
    pub fn weak_count(this: &Self) -> usize {
        match this.ptr {
            Some(ptr) => unsafe { T::ref_count(ptr) }.weak_count(),
            None => 0,
        }
    }

    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        addr(this.ptr) == addr(other.ptr)
    }

    /// Convert into a weak handle of a wider type observing the same storage, without touching
    /// the counts.
    #[inline]
    pub fn upcast<U>(this: Self) -> Weak<U>
    where
        T: Upcast<U>,
        U: ?Sized + RefCounted,
    {
        Weak {
            ptr: Weak::into_raw(this).map(<T as Upcast<U>>::upcast),
            phantom: PhantomData,
        }
    }
}

impl<T: ?Sized + RefCounted> Drop for Weak<T> {
    #[inline]
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr {
            unsafe { T::release_weak_ref(ptr) };
        }
    }
}

impl<T: ?Sized + RefCounted> Clone for Weak<T> {
    /// Clone a `Weak<T>` (increment the weak count).
    #[inline]
    fn clone(&self) -> Self {
        if let Some(ptr) = self.ptr {
            unsafe { T::add_weak_ref(ptr) };
        }
        Weak {
            ptr: self.ptr,
            phantom: PhantomData,
        }
    }
}

impl<T: ?Sized + RefCounted> Default for Weak<T> {
    #[inline]
    fn default() -> Self {
        Weak::null()
    }
}

impl<T: ?Sized + RefCounted> From<&Irc<T>> for Weak<T> {
    /// Equivalent to [`Irc::downgrade`].
    fn from(value: &Irc<T>) -> Self {
        Irc::downgrade(value)
    }
}

impl<T: ?Sized + RefCounted> Debug for Weak<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("(Weak)")
    }
}

impl<T: ?Sized + RefCounted, U: ?Sized + RefCounted> PartialEq<Weak<U>> for Weak<T> {
    /// Identity comparison; valid even after the object has been finalized.
    #[inline]
    fn eq(&self, other: &Weak<U>) -> bool {
        addr(self.ptr) == addr(other.ptr)
    }
}

impl<T: ?Sized + RefCounted> Eq for Weak<T> {}

impl<T: ?Sized + RefCounted> Hash for Weak<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        addr(self.ptr).hash(state);
    }
}

impl<T: ?Sized + RefCounted> Unpin for Weak<T> {}
