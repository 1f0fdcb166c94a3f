//! Arena allocation for synthesized trees.
//!
//! Every node, node list, and string owned by one file's tree is allocated
//! from a single bump arena. The tree is freed all at once when the arena
//! drops, which keeps parent/original back-references as plain borrows.

use bumpalo::Bump;

/// The arena backing one file's syntax tree.
///
/// Ownership of the tree flows strictly parent-to-child; the arena is the
/// actual owner of every allocation, so weak back-references (`parent`,
/// `original`) are ordinary `&'a` borrows with no lifetime bookkeeping.
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Create a new arena with default capacity.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with the specified initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocate a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocate a slice of `Copy` elements in the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Move a Vec's elements into the arena as a slice.
    pub fn alloc_vec<T>(&self, vec: Vec<T>) -> &[T] {
        if vec.is_empty() {
            return &[];
        }
        let mut vec = std::mem::ManuallyDrop::new(vec);
        let len = vec.len();
        let ptr = vec.as_ptr();
        let slice = self.bump.alloc_slice_fill_with(len, |i| {
            // SAFETY: i < len, and each element is read exactly once.
            // ManuallyDrop prevents the Vec destructor from running, so
            // elements won't be double-freed even if this closure panics
            // partway through.
            unsafe { std::ptr::read(ptr.add(i)) }
        });
        // All elements have been moved out; set len to 0 so that if
        // ManuallyDrop is ever manually dropped, it won't try to drop
        // moved-from elements.
        unsafe {
            vec.set_len(0);
        }
        slice
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_vec_moves_elements() {
        let arena = AstArena::new();
        let slice = arena.alloc_vec(vec![String::from("a"), String::from("b")]);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0], "a");
        assert_eq!(slice[1], "b");
    }

    #[test]
    fn test_alloc_vec_empty() {
        let arena = AstArena::new();
        let slice: &[u32] = arena.alloc_vec(Vec::new());
        assert!(slice.is_empty());
    }
}
