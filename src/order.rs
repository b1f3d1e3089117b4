use std::cmp::Ordering;

/// Decides which of two elements belongs closer to the root.
pub trait HeapOrder<T> {
    /// `true` iff `a` has to sit strictly above `b`. Equal elements never precede each other.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Ordering flag picked at runtime when a heap is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Smallest element on top.
    Min,
    /// Largest element on top.
    Max,
}

impl Mode {
    #[inline]
    pub const fn is_min(self) -> bool {
        matches!(self, Mode::Min)
    }
}

impl<T: Ord> HeapOrder<T> for Mode {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        match self {
            Mode::Min => Min.precedes(a, b),
            Mode::Max => Max.precedes(a, b),
        }
    }
}

/// Min-heap order fixed in the type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl<T: Ord> HeapOrder<T> for Min {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Less
    }
}

/// Max-heap order fixed in the type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl<T: Ord> HeapOrder<T> for Max {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Greater
    }
}

impl From<Min> for Mode {
    fn from(_: Min) -> Self {
        Mode::Min
    }
}

impl From<Max> for Mode {
    fn from(_: Max) -> Self {
        Mode::Max
    }
}
