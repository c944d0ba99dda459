use crate::linked_list::{Iter, LinkedList};
use std::fmt;
use std::iter::FromIterator;

/// First-in first-out queue. Both `enqueue` and `dequeue` run in constant time
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Add a value at the rear
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Remove the value at the front
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Return the value at the front without removing it
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    /// Iterate from front to rear
    pub fn iter(&self) -> Iter<T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    /// Render as `[1, 2, 3]`, front first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
