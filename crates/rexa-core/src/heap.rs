//! Mergeable priority queue implemented as a pairing heap.

/// A heap-ordered multiway tree. The root holds the minimum; children are
/// arbitrary pairing heaps themselves.
#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

/// A min-ordered pairing heap under a caller-supplied strict less-than
/// relation.
///
/// Insertion is a two-way merge in O(1); extraction pairwise-merges the
/// root's children (adjacent pairs first, then a backwards fold), which
/// keeps extraction O(log n) amortized. Equal elements may be extracted in
/// either order: the heap is not stable.
///
/// Extracting from an empty heap returns `None`, never an error.
pub struct PairingHeap<T, F> {
    root: Option<Box<Node<T>>>,
    len: usize,
    is_less: F,
}

impl<T, F: Fn(&T, &T) -> bool> PairingHeap<T, F> {
    /// Create an empty heap ordered by `is_less`.
    pub fn new(is_less: F) -> Self {
        Self {
            root: None,
            len: 0,
            is_less,
        }
    }

    /// Create a heap holding all of `values`.
    pub fn from(values: impl IntoIterator<Item = T>, is_less: F) -> Self {
        let mut heap = Self::new(is_less);
        for value in values {
            heap.push(value);
        }
        heap
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The minimum element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Insert a value in amortized O(1).
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            children: Vec::new(),
        });
        let root = self.root.take();
        self.root = merge(root, Some(node), &self.is_less);
        self.len += 1;
    }

    /// Remove and return the minimum element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        self.len -= 1;
        let Node { value, children } = *root;
        self.root = merge_pairs(children, &self.is_less);
        Some(value)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

/// Merge two heaps: the root that is not less than the other becomes a
/// child of the winner.
fn merge<T>(
    a: Option<Box<Node<T>>>,
    b: Option<Box<Node<T>>>,
    is_less: &impl Fn(&T, &T) -> bool,
) -> Option<Box<Node<T>>> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => Some(meld(a, b, is_less)),
    }
}

fn meld<T>(a: Box<Node<T>>, b: Box<Node<T>>, is_less: &impl Fn(&T, &T) -> bool) -> Box<Node<T>> {
    if is_less(&a.value, &b.value) {
        let mut a = a;
        a.children.push(*b);
        a
    } else {
        let mut b = b;
        b.children.push(*a);
        b
    }
}

/// The classic two-pass pairing: merge adjacent pairs left to right, then
/// fold the results right to left. Iterative so deep heaps cannot overflow
/// the stack.
fn merge_pairs<T>(children: Vec<Node<T>>, is_less: &impl Fn(&T, &T) -> bool) -> Option<Box<Node<T>>> {
    let mut paired: Vec<Box<Node<T>>> = Vec::with_capacity(children.len().div_ceil(2));

    let mut it = children.into_iter();
    while let Some(first) = it.next() {
        let first = Box::new(first);
        match it.next() {
            Some(second) => paired.push(meld(first, Box::new(second), is_less)),
            None => paired.push(first),
        }
    }

    let mut acc: Option<Box<Node<T>>> = None;
    for node in paired.into_iter().rev() {
        acc = match acc {
            None => Some(node),
            Some(prev) => Some(meld(node, prev, is_less)),
        };
    }
    acc
}
