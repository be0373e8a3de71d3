//! Fixed-capacity, array-backed sequence storage.
//!
//! Used to stage outgoing words and transmit commands without reallocating.
//! Nothing here knows about the protocol.

use std::fmt;

/// A sequence of at most `N` elements stored inline.
#[derive(Clone)]
pub struct BoundedVec<T, const N: usize> {
    data: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> BoundedVec<T, N> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            len: 0,
        }
    }

    /// Appends `value`, returning `false` (and leaving the sequence unchanged) when full.
    pub fn push(&mut self, value: T) -> bool {
        if self.len >= N {
            return false;
        }
        self.data[self.len] = value;
        self.len += 1;
        true
    }

    /// Appends every element of `values`, or none of them if they would not all fit.
    pub fn append(&mut self, values: &[T]) -> bool {
        if values.len() > self.remaining() {
            return false;
        }
        self.data[self.len..self.len + values.len()].copy_from_slice(values);
        self.len += values.len();
        true
    }

    /// Appends `value`; when full, the oldest element is dropped to make room.
    pub fn shift_and_push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        if self.len < N {
            self.data[self.len] = value;
            self.len += 1;
        } else {
            self.data.copy_within(1.., 0);
            self.data[N - 1] = value;
        }
    }
}

impl<T, const N: usize> BoundedVec<T, N> {
    /// Removes every element. Capacity is unaffected.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when a further `push` would be rejected.
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Fixed maximum number of elements.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free slots left before the sequence is full.
    pub fn remaining(&self) -> usize {
        N - self.len
    }

    /// Element at `index`, if stored.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Stored elements, oldest first.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Iterates stored elements, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVec")
            .field("len", &self.len)
            .field("capacity", &N)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
