use crate::order::{HeapOrder, Max, Min, Mode};
use std::fmt;

/// Slot count a fresh heap starts with, and also the amount it grows by.
/// The count includes the root's reserved slot, so a fresh heap holds `DEFAULT_CAPACITY - 1`
/// elements before it grows.
pub const DEFAULT_CAPACITY: usize = 10;

#[inline]
const fn grow(capacity: usize) -> usize {
    capacity + DEFAULT_CAPACITY
}

/// Array-backed binary heap whose top is chosen by the policy `O`.
///
/// Element `i` has children `2i + 1` and `2i + 2`. Every parent precedes or ties with its children.
#[derive(Clone, Debug)]
pub struct Heap<T, O = Mode> {
    data: Vec<T>,
    capacity: usize,
    order: O,
}

pub type MinHeap<T> = Heap<T, Min>;
pub type MaxHeap<T> = Heap<T, Max>;

impl<T: Ord> Heap<T, Mode> {
    /// Pushes every item of `iter` in iteration order. The mode is fixed for the heap's lifetime.
    ///
    /// O(n log n)
    #[inline]
    pub fn new<Iter: IntoIterator<Item = T>>(iter: Iter, mode: Mode) -> Self {
        Self::with_order(iter, mode)
    }

    /// O(1)
    #[inline]
    pub fn mode(&self) -> Mode {
        self.order
    }
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    #[inline]
    fn empty(order: O) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY - 1),
            capacity: DEFAULT_CAPACITY,
            order,
        }
    }

    /// Same as `new`, but with any ordering policy.
    ///
    /// O(n log n)
    pub fn with_order<Iter: IntoIterator<Item = T>>(iter: Iter, order: O) -> Self {
        let mut heap = Self::empty(order);
        heap.extend(iter);
        heap
    }

    /// O(1)
    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Slots currently available, the reserved root slot included. Always greater than `len()`.
    ///
    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Elements in storage order. The order is not sorted.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates in storage order. Each call starts over from the current contents.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// O(log n), plus an O(n) reallocation once every `DEFAULT_CAPACITY` pushes since growth
    /// is additive.
    pub fn push(&mut self, value: T) {
        if self.capacity <= self.len() + 1 {
            self.capacity = grow(self.capacity);
            self.data.reserve_exact(self.capacity - 1 - self.len());
        }

        self.data.push(value);
        self.sift_up(self.len() - 1);
    }

    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0);

        top
    }

    /// Removes the first element equal to `value` in storage order. Returns `None`, leaving
    /// the heap untouched, if there is none.
    ///
    /// The last element takes the vacated slot. Sifting restarts from the root. Then the
    /// moved element is sifted from its new slot, because a root pass cannot reach deeper
    /// violations.
    ///
    /// O(n)
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.data.iter().position(|x| x == value)?;
        let removed = self.data.swap_remove(index);

        self.sift_down(0);
        if index < self.len() {
            self.sift_up(index);
            self.sift_down(index);
        }

        Some(removed)
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.order.precedes(&self.data[node], &self.data[parent]) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        loop {
            let left = 2 * node + 1;
            let right = left + 1;

            if self.len() <= left {
                break;
            }

            // Ties go to the left child.
            let best = if right < self.len()
                && self.order.precedes(&self.data[right], &self.data[left])
            {
                right
            } else {
                left
            };

            if self.order.precedes(&self.data[best], &self.data[node]) {
                self.data.swap(node, best);
                node = best;
            } else {
                break;
            }
        }
    }
}

impl<T, O: HeapOrder<T> + Default> Default for Heap<T, O> {
    #[inline]
    fn default() -> Self {
        Self::empty(O::default())
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<T, O: HeapOrder<T> + Default> std::iter::FromIterator<T> for Heap<T, O> {
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        Self::with_order(iter, O::default())
    }
}

impl<'a, T, O> IntoIterator for &'a Heap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, O> IntoIterator for Heap<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: fmt::Display, O> fmt::Display for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        Ok(())
    }
}
