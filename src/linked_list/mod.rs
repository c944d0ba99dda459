mod iter;
mod list;

pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;

use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Move a new node to the heap. Ownership of the allocation is handed to the caller,
    /// that must eventually release it with `Node::free`
    fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Release a node previously created by `Node::alloc`, returning its content.
    /// No other pointer to this node may be dereferenced afterwards
    unsafe fn free(node: NonNull<Node<T>>) -> (T, Link<T>) {
        let Node { value, next } = *Box::from_raw(node.as_ptr());
        (value, next)
    }
}
