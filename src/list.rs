extern crate alloc;

use alloc::boxed::Box;
use alloc::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

/// A node in the doubly linked list.
///
/// Contains a value and pointers to the previous and next entries.
/// This structure is not meant to be used directly by users of the `List`.
pub struct Entry<T> {
    /// The value stored in this entry. Uses MaybeUninit to allow for sigil nodes.
    val: mem::MaybeUninit<T>,
    /// Pointer to the previous entry in the list.
    prev: *mut Entry<T>,
    /// Pointer to the next entry in the list.
    next: *mut Entry<T>,
}

impl<T> Entry<T> {
    /// Creates a new entry with the given value.
    fn new(val: T) -> Self {
        Entry {
            val: mem::MaybeUninit::new(val),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Creates a new sigil (sentinel) entry without initializing the value.
    ///
    /// Sigil entries are used as head and tail markers in the list.
    fn new_sigil() -> Self {
        Entry {
            val: mem::MaybeUninit::uninit(),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Safely extracts the value from this entry.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it assumes the value is initialized.
    /// Should only be called on non-sigil nodes.
    pub unsafe fn get_value(&self) -> &T {
        // SAFETY: the caller guarantees this is a non-sigil node, whose value
        // was initialized in `Entry::new`
        unsafe { self.val.assume_init_ref() }
    }

    /// Safely extracts a mutable reference to the value from this entry.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it assumes the value is initialized.
    /// Should only be called on non-sigil nodes.
    pub unsafe fn get_value_mut(&mut self) -> &mut T {
        // SAFETY: the caller guarantees this is a non-sigil node, whose value
        // was initialized in `Entry::new`
        unsafe { self.val.assume_init_mut() }
    }

    /// Consumes the entry and moves the value out of it.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it assumes the value is initialized.
    /// Should only be called on non-sigil nodes.
    pub unsafe fn into_value(self) -> T {
        // SAFETY: the caller guarantees this is a non-sigil node, whose value
        // was initialized in `Entry::new`
        unsafe { self.val.assume_init() }
    }
}

/// A doubly linked list with O(1) structural operations.
///
/// The list provides O(1) insertion at the front, removal of an arbitrary
/// node, and removal at the back. It uses sentinel nodes (sigils) at the head
/// and tail to simplify operations, and exclusively owns the lifetime of its
/// nodes: nodes are allocated in `add` and freed when removed or when the
/// list is dropped.
///
/// The list itself is unbounded; callers that bound the number of entries
/// enforce their limit by removing from the back after inserting.
pub struct List<T> {
    /// Current number of items in the list.
    len: usize,
    /// Pointer to the head sentinel node.
    head: *mut Entry<T>,
    /// Pointer to the tail sentinel node.
    tail: *mut Entry<T>,
}

impl<T> List<T> {
    /// Creates a new empty list.
    ///
    /// This method sets up the sentinel nodes and links them together.
    pub fn new() -> List<T> {
        let head = Box::into_raw(Box::new(Entry::new_sigil()));
        let tail = Box::into_raw(Box::new(Entry::new_sigil()));

        let list = List { len: 0, head, tail };

        unsafe {
            // SAFETY: head and tail are newly allocated and valid pointers
            (*list.head).next = list.tail;
            (*list.tail).prev = list.head;
        }

        list
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value to the front of the list.
    ///
    /// Returns a pointer to the newly created entry. The pointer stays valid
    /// until the entry is removed from the list or the list is dropped.
    pub fn add(&mut self, v: T) -> *mut Entry<T> {
        // SAFETY: Box::into_raw creates a valid raw pointer and we're using NonNull
        // to assert its non-nullness
        let node = unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(Entry::new(v)))) };
        // SAFETY: node is a newly allocated entry that is not part of any list yet
        unsafe { self.attach(node.as_ptr()) };
        self.len += 1;
        node.as_ptr()
    }

    /// Removes the first (most recently added) item from the list.
    ///
    /// Returns the removed entry if the list is not empty.
    pub fn remove_first(&mut self) -> Option<Box<Entry<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: Both head and tail are valid pointers initialized in `new`,
        // and we know the list is not empty, so there's at least one element between them
        let next = unsafe { (*self.head).next };
        if next != self.tail {
            unsafe {
                self._detach(next);
            }
            self.len -= 1;
            // SAFETY: next is a valid pointer as we just detached it
            unsafe { Some(Box::from_raw(next)) }
        } else {
            None
        }
    }

    /// Removes the last (least recently added) item from the list.
    ///
    /// Returns the removed entry if the list is not empty.
    pub fn remove_last(&mut self) -> Option<Box<Entry<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: Both head and tail are valid pointers initialized in `new`,
        // and we know the list is not empty, so there's at least one element between them
        let prev = unsafe { (*self.tail).prev };
        if prev != self.head {
            unsafe {
                self._detach(prev);
            }
            self.len -= 1;
            // SAFETY: prev is a valid pointer as we just detached it
            unsafe { Some(Box::from_raw(prev)) }
        } else {
            None
        }
    }

    /// Detaches a node from the list and returns it as a Box.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it takes a raw pointer parameter.
    /// The caller must ensure that `node` is a valid pointer to a node in the list
    /// (not null, not freed, and actually part of this list).
    pub unsafe fn remove(&mut self, node: *mut Entry<T>) -> Option<Box<Entry<T>>> {
        if self.is_empty() || node.is_null() || node == self.head || node == self.tail {
            return None;
        }

        unsafe {
            // SAFETY: Caller guarantees node is valid and part of this list
            self._detach(node);
            self.len -= 1;

            Some(Box::from_raw(node))
        }
    }

    /// Detaches a node from the list without deallocating it.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it dereferences raw pointers.
    /// The caller must ensure that `node` is a valid pointer to a node in the list
    /// (not null, not freed, and actually part of this list).
    unsafe fn _detach(&mut self, node: *mut Entry<T>) {
        // SAFETY: The caller guarantees that node is a valid entry in the list,
        // which means its prev and next pointers are also valid entries.
        unsafe {
            (*(*node).prev).next = (*node).next;
            (*(*node).next).prev = (*node).prev;
        }
    }

    /// Attaches a node after the head sentinel node.
    ///
    /// This effectively makes the node the first item in the list.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it dereferences raw pointers.
    /// The caller must ensure that `node` is a valid pointer to a node that is
    /// not already in the list (e.g., newly allocated or previously detached).
    unsafe fn attach(&mut self, node: *mut Entry<T>) {
        // SAFETY: head is a valid pointer initialized in `new`, and the caller
        // guarantees that node is a valid entry not already in the list
        unsafe {
            (*node).next = (*self.head).next;
            (*node).prev = self.head;
            (*self.head).next = node;
            (*(*node).next).prev = node;
        }
    }

    /// Moves a node to the front of the list (after the head sentinel).
    ///
    /// # Safety
    ///
    /// This function is unsafe because it dereferences raw pointers.
    /// The caller must ensure that `node` points to a valid entry in the list.
    pub unsafe fn move_to_front(&mut self, node: *mut Entry<T>) {
        if node.is_null() || node == self.head || node == self.tail {
            return;
        }

        // SAFETY: head is a valid pointer and the caller guarantees node is a
        // valid entry in the list
        unsafe {
            // If the node is already the first item, do nothing
            if (*self.head).next == node {
                return;
            }

            self._detach(node);
            self.attach(node);
        }
    }

    /// Returns an iterator over the values from front (most recently added)
    /// to back (least recently added).
    ///
    /// Iteration does not reorder the list.
    pub fn iter(&self) -> Iter<'_, T> {
        // SAFETY: head is a valid pointer initialized in `new`
        let next = unsafe { (*self.head).next };
        Iter {
            next,
            tail: self.tail,
            _marker: PhantomData,
        }
    }

    /// Clears the list, removing all entries.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }
}

impl<T> Drop for List<T> {
    /// Cleans up all resources used by the list.
    ///
    /// This includes:
    /// 1. Removing and deallocating all regular entries
    /// 2. Deallocating the sentinel nodes
    fn drop(&mut self) {
        // Remove all entries
        self.clear();

        // Free the sentinel nodes
        // SAFETY: head and tail are valid pointers initialized in `new` and never modified
        // except to be replaced with null when freed. We check for null here as an extra precaution.
        unsafe {
            if !self.head.is_null() {
                let _ = Box::from_raw(self.head);
                self.head = ptr::null_mut();
            }
            if !self.tail.is_null() {
                let _ = Box::from_raw(self.tail);
                self.tail = ptr::null_mut();
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("length", &self.len).finish()
    }
}

/// An iterator over the values of a `List`, front to back.
pub struct Iter<'a, T> {
    next: *mut Entry<T>,
    tail: *mut Entry<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next == self.tail {
            return None;
        }
        // SAFETY: next is a non-sigil entry of the list the iterator borrows,
        // and nodes between head and tail always hold initialized values
        unsafe {
            let value = (*self.next).get_value();
            self.next = (*self.next).next;
            Some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn test_construct() {
        let list = List::<u32>::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(!list.head.is_null());
        assert!(!list.tail.is_null());
    }

    #[test]
    fn test_add_items() {
        let mut list = List::<u32>::new();
        let node1 = list.add(10);
        let node2 = list.add(20);
        assert_eq!(list.len(), 2);
        assert_ne!(node1, node2);
    }

    #[test]
    fn test_remove_first_and_last() {
        let mut list = List::<u32>::new();

        // Removing from an empty list yields nothing
        assert!(list.remove_first().is_none());
        assert!(list.remove_last().is_none());

        let _node1 = list.add(10);
        let _node2 = list.add(20);
        let _node3 = list.add(30);
        assert_eq!(list.len(), 3);

        // Remove first item (should be 30, since we add to front)
        let first = list.remove_first().unwrap();
        assert_eq!(unsafe { first.into_value() }, 30);
        assert_eq!(list.len(), 2);

        // Remove last item (should be 10)
        let last = list.remove_last().unwrap();
        assert_eq!(unsafe { last.into_value() }, 10);
        assert_eq!(list.len(), 1);

        // Check remaining item (should be 20)
        let last_remaining = list.remove_first().unwrap();
        assert_eq!(unsafe { last_remaining.into_value() }, 20);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_arbitrary_node() {
        let mut list = List::<u32>::new();

        let _node1 = list.add(10);
        let node2 = list.add(20);
        let _node3 = list.add(30);

        // Remove the interior node
        let removed = unsafe { list.remove(node2) }.unwrap();
        assert_eq!(unsafe { removed.into_value() }, 20);
        assert_eq!(list.len(), 2);

        // Remaining order is unchanged: 30, 10
        let values: Vec<u32> = list.iter().copied().collect();
        assert_eq!(values, [30, 10]);
    }

    #[test]
    fn test_remove_rejects_sigils() {
        let mut list = List::<u32>::new();
        let _node = list.add(10);

        let head = list.head;
        let tail = list.tail;
        assert!(unsafe { list.remove(head) }.is_none());
        assert!(unsafe { list.remove(tail) }.is_none());
        assert!(unsafe { list.remove(ptr::null_mut()) }.is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = List::<u32>::new();

        // Add items: front->30->20->10->back
        let node1 = list.add(10);
        let _node2 = list.add(20);
        let _node3 = list.add(30);

        // Move the last item (10) to front: front->10->30->20->back
        unsafe {
            list.move_to_front(node1);
        }

        let values: Vec<u32> = list.iter().copied().collect();
        assert_eq!(values, [10, 30, 20]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_move_to_front_of_front_node_is_noop() {
        let mut list = List::<u32>::new();

        let _node1 = list.add(10);
        let node2 = list.add(20);

        unsafe {
            list.move_to_front(node2);
        }

        let values: Vec<u32> = list.iter().copied().collect();
        assert_eq!(values, [20, 10]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_update_value_in_place() {
        let mut list = List::<u32>::new();
        let node = list.add(10);

        unsafe {
            let old = mem::replace((*node).get_value_mut(), 99);
            assert_eq!(old, 10);
            assert_eq!(*(*node).get_value(), 99);
        }
    }

    #[test]
    fn test_iter_order() {
        let mut list = List::<u32>::new();
        assert!(list.iter().next().is_none());

        list.add(1);
        list.add(2);
        list.add(3);

        let values: Vec<u32> = list.iter().copied().collect();
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn test_clear() {
        let mut list = List::<u32>::new();

        let _node1 = list.add(10);
        let _node2 = list.add(20);
        let _node3 = list.add(30);
        assert_eq!(list.len(), 3);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());

        // Should be able to add new items
        let _node4 = list.add(40);
        assert_eq!(list.len(), 1);
    }

    struct ComplexValue {
        pub a: u32,
        pub b: String,
    }

    #[test]
    fn test_list_complex_values() {
        let mut list = List::<ComplexValue>::new();

        let node1 = list.add(ComplexValue {
            a: 1,
            b: String::from("one"),
        });
        let node2 = list.add(ComplexValue {
            a: 2,
            b: String::from("two"),
        });

        // Update in place through the node pointer
        unsafe {
            let value = (*node1).get_value_mut();
            value.a = 3;
            value.b = String::from("three");
        }
        unsafe {
            let value = (*node1).get_value();
            assert_eq!(value.a, 3);
            assert_eq!(value.b, "three");
        }

        unsafe {
            let value = (*node2).get_value_mut();
            value.a = 4;
            value.b.push_str("_modified");
        }
        unsafe {
            let value = (*node2).get_value();
            assert_eq!(value.a, 4);
            assert_eq!(value.b, "two_modified");
        }
    }

    #[test]
    fn test_length_consistency_after_complex_operations() {
        let mut list = List::<u32>::new();

        let node1 = list.add(10);
        let node2 = list.add(20);
        let node3 = list.add(30);
        assert_eq!(list.len(), 3);

        // Moving nodes around does not change the length
        unsafe {
            list.move_to_front(node1);
        }
        assert_eq!(list.len(), 3);

        unsafe {
            list.move_to_front(node3);
        }
        assert_eq!(list.len(), 3);

        let _r1 = unsafe { list.remove(node2) }.unwrap();
        assert_eq!(list.len(), 2);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());

        let _new_node = list.add(100);
        assert_eq!(list.len(), 1);
    }
}
