//! Single-threaded shared mutable handle.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Reference-counted interior mutability for lists, maps and frames.
///
/// Cloning a `Shared` aliases the same storage. Not `Send`: one
/// environment per thread.
#[repr(transparent)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the storage, used as an identity key.
    #[inline]
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.0).finish()
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}
