//! Generic double-ended queue used as a FIFO work list and as the path
//! result container.

use std::collections::VecDeque;

/// A growable double-ended queue.
///
/// Thin wrapper over [`VecDeque`] (a growable ring buffer) exposing the
/// vocabulary the pathfinding code uses: `push`/`pop` operate on the top
/// (back) end, `unshift`/`shift` on the bottom (front) end, all O(1)
/// amortized. Cheap prepending is what makes backward path reconstruction
/// linear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    /// Create an empty deque.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Number of elements held.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `value` at the top end.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the element at the top end.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Prepend `value` at the bottom end.
    #[inline]
    pub fn unshift(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Remove and return the element at the bottom end.
    #[inline]
    pub fn shift(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Peek at the top end.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.back()
    }

    /// Peek at the bottom end.
    #[inline]
    pub fn bottom(&self) -> Option<&T> {
        self.items.front()
    }

    /// Iterate bottom to top without consuming.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            items: VecDeque::from(values),
        }
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            items: VecDeque::from(values),
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
