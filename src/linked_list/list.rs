use super::{Iter, IterMut, Link, Node};
use crate::error::{Error, Result};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use tracing::debug;

/// A singly linked list with constant time access to both ends.
///
/// Every node is exclusively owned by the list: `head` and the `next` links own the
/// allocations, while `tail` is only a shortcut to the last one
pub struct LinkedList<T> {
    pub(super) head: Link<T>,
    tail: Link<T>,
    pub(super) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// The raw links are only ever used as owned boxes
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Return the number of values in the list
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all values
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            // Safe since `tail` always points to a live node owned by this list
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Insert `value` so that it ends up at position `index`.
    /// `index == len()` is valid and appends to the list
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_bounds(index, self.len + 1)?;
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            // 0 < index < len, so the previous node exists and is not the tail
            if let Some(prev) = self.node_at(index - 1) {
                unsafe {
                    let prev = &mut *prev.as_ptr();
                    prev.next = Some(Node::alloc(value, prev.next));
                }
                self.len += 1;
            }
        }
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(unsafe { self.unlink(None, head) })
    }

    /// Remove the last value. This has to walk the whole list to find the new tail
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let prev = match self.len {
            1 => None,
            len => self.node_at(len - 2),
        };
        Some(unsafe { self.unlink(prev, tail) })
    }

    /// Remove the first occurrence of `value`. Return whether something was removed
    pub fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                if (*node.as_ptr()).value == *value {
                    self.unlink(prev, node);
                    return true;
                }
                current = (*node.as_ptr()).next;
            }
            prev = Some(node);
        }
        false
    }

    /// Remove and return the value at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.check_bounds(index, self.len)?;
        let prev = match index {
            0 => None,
            _ => self.node_at(index - 1),
        };
        let target = match prev {
            Some(prev) => unsafe { (*prev.as_ptr()).next },
            None => self.head,
        };
        match target {
            Some(target) => Ok(unsafe { self.unlink(prev, target) }),
            None => Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Replace the first occurrence of `old` by `new`. Return whether a value was replaced
    pub fn update(&mut self, old: &T, new: T) -> bool
    where
        T: PartialEq,
    {
        match self.iter_mut().find(|value| **value == *old) {
            Some(value) => {
                *value = new;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Return the position of the first occurrence of `value`
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Return the value at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.check_bounds(index, self.len)?;
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Iterate over mutable references, allowing values to be changed in place
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut::new(self)
    }

    /// Build a new list with clones of the values accepted by `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> LinkedList<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(*value)).cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Return the node at `index`, if any
    fn node_at(&self, index: usize) -> Link<T> {
        let mut current = self.head;
        for _ in 0..index {
            current = unsafe { (*current?.as_ptr()).next };
        }
        current
    }

    fn check_bounds(&self, index: usize, limit: usize) -> Result<()> {
        if index < limit {
            Ok(())
        } else {
            debug!(index, len = self.len, "index out of bounds");
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Detach `target` from the list and return its value.
    /// `prev` must be the node right before `target`, or `None` if `target` is the head
    unsafe fn unlink(&mut self, prev: Link<T>, target: NonNull<Node<T>>) -> T {
        let (value, next) = Node::free(target);
        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }
        if next.is_none() {
            self.tail = prev;
        }
        self.len -= 1;
        value
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Render as `Head -> 1 -> 2 -> nil`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Head -> ")?;
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "nil")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn list_of(values: &[i32]) -> LinkedList<i32> {
        values.iter().cloned().collect()
    }

    #[test]
    fn push_both_ends() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_at_positions() {
        let mut list = list_of(&[1, 3]);
        list.insert_at(1, 2).unwrap();
        list.insert_at(0, 0).unwrap();
        list.insert_at(4, 4).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.back(), Some(&4));
        assert_eq!(
            list.insert_at(6, 9),
            Err(Error::IndexOutOfBounds { index: 6, len: 5 })
        );
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn insert_at_into_empty() {
        let mut list = LinkedList::new();
        list.insert_at(0, 7).unwrap();
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
    }

    #[test]
    fn pop_keeps_tail_consistent() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        // The list is still usable after being emptied
        list.push_back(5);
        assert_eq!(list.front(), Some(&5));
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn remove_first_occurrence() {
        let mut list = list_of(&[1, 2, 3, 2]);
        assert!(list.remove_first(&2));
        assert_eq!(list.to_vec(), vec![1, 3, 2]);
        assert!(list.remove_first(&2));
        assert_eq!(list.back(), Some(&3));
        assert!(!list.remove_first(&9));
        assert!(list.remove_first(&1));
        assert!(list.remove_first(&3));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
    }

    #[test]
    fn remove_at_positions() {
        let mut list = list_of(&[10, 20, 30, 40]);
        assert_eq!(list.remove_at(3), Ok(40));
        assert_eq!(list.back(), Some(&30));
        assert_eq!(list.remove_at(1), Ok(20));
        assert_eq!(list.remove_at(0), Ok(10));
        assert_eq!(
            list.remove_at(1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(list.remove_at(0), Ok(30));
        assert_eq!(list.remove_at(0), Err(Error::Empty));
    }

    #[test]
    fn lookups() {
        let mut list = list_of(&[5, 6, 7]);
        assert!(list.contains(&6));
        assert!(!list.contains(&8));
        assert_eq!(list.position(&7), Some(2));
        assert_eq!(list.position(&8), None);
        assert_eq!(list.get(1), Ok(&6));
        assert_eq!(
            list.get(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(list.update(&6, 60));
        assert!(!list.update(&6, 61));
        assert_eq!(list.to_vec(), vec![5, 60, 7]);

        list.clear();
        assert_eq!(list.get(0), Err(Error::Empty));
    }

    #[test]
    fn filter_and_for_each() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        for value in list.iter_mut() {
            *value *= 10;
        }
        let even = list.filter(|v| v % 20 == 0);
        assert_eq!(even.to_vec(), vec![20, 40, 60]);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn display() {
        assert_eq!(list_of(&[1, 2]).to_string(), "Head -> 1 -> 2 -> nil");
        assert_eq!(LinkedList::<i32>::new().to_string(), "Head -> nil");
        assert_eq!(format!("{:?}", list_of(&[1, 2])), "[1, 2]");
    }

    #[test]
    fn clone_and_eq() {
        let list = list_of(&[1, 2, 3]);
        let mut cloned = list.clone();
        assert_eq!(list, cloned);
        cloned.push_back(4);
        assert_ne!(list, cloned);
    }
}
