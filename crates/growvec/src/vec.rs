//! The growable sequence type.
//!
//! [`GrowVec`] owns a contiguous backing store split into an explicit
//! contract capacity and a logical length. The contract capacity, not
//! the allocator's actual reservation (which may round up), drives every
//! observable growth decision, so the doubling trajectory is exact:
//! filling a sequence to capacity never reallocates, and the first append
//! past it multiplies the capacity by the growth factor.

use std::fmt;

use crate::config::GrowthConfig;
use crate::error::GrowVecError;

/// A contiguous, index-addressed sequence with amortized O(1) append.
///
/// All operations are total. Fallible reads (`get`, `pop`, `remove`)
/// return `Option`; fallible writes (`set`, `insert`) return `bool` and
/// perform no mutation on rejection. There is no panicking positional
/// accessor; `GrowVec` deliberately does not implement `Index`.
///
/// Capacity is monotonic for the lifetime of the instance: `pop`,
/// `remove`, and `clear` retain the backing storage.
pub struct GrowVec<T> {
    /// Backing storage. `buf.len()` is the logical length; reserve space
    /// up to `capacity` holds no initialised elements.
    buf: Vec<T>,
    /// Contract capacity: the slot count observable through
    /// [`GrowVec::capacity`]. Grows on demand, never shrinks.
    capacity: usize,
    /// Multiplier applied on each growth. Always at least 2.
    growth_factor: usize,
}

impl<T> GrowVec<T> {
    /// Create an empty sequence with the default capacity of 8 slots.
    pub fn new() -> Self {
        Self::with_capacity(GrowthConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty sequence with the given slot count.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`GrowVec::with_config`] for a
    /// non-panicking constructor.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1 (got 0)");
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            growth_factor: GrowthConfig::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Create an empty sequence from a validated configuration.
    ///
    /// Returns `Err(GrowVecError::InvalidConfig)` if the config names a
    /// zero initial capacity or a growth factor below 2.
    pub fn with_config(config: GrowthConfig) -> Result<Self, GrowVecError> {
        config.validate()?;
        Ok(Self {
            buf: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            growth_factor: config.growth_factor,
        })
    }

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current contract capacity in slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remaining slots before the next growth: `capacity - len`.
    pub fn spare_capacity(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Reserved backing-store size in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }

    /// Append an element, growing if the write would exceed capacity.
    ///
    /// Returns the new length. Growth multiplies the capacity by the
    /// growth factor, repeated until sufficient. Pushing exactly up to
    /// the current capacity does not reallocate.
    pub fn push(&mut self, item: T) -> usize {
        self.grow_to_fit(self.buf.len() + 1);
        self.buf.push(item);
        self.buf.len()
    }

    /// Append every element of `items` in order. Returns the new length.
    pub fn push_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.push(item);
        }
        self.buf.len()
    }

    /// Remove and return the last element, or `None` when empty.
    ///
    /// Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Borrow the element at `index`, or `None` outside `[0, len)`.
    ///
    /// Indices in the reserve space `[len, capacity)` are not readable.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Overwrite the element at `index`.
    ///
    /// Returns `true` on success. For `index >= len`, including slots in
    /// the reserve space, returns `false` and performs no mutation.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.buf.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// The valid range is `[0, len]`; inserting at `index == len` is an
    /// append. Grows first when the sequence is full. For `index > len`,
    /// returns `false` and performs no mutation.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.buf.len() {
            return false;
        }
        self.grow_to_fit(self.buf.len() + 1);
        self.buf.insert(index, value);
        true
    }

    /// Remove the element at `index`, shifting later elements one slot
    /// left. Returns the removed element, or `None` for `index >= len`
    /// (no mutation).
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.buf.len() {
            Some(self.buf.remove(index))
        } else {
            None
        }
    }

    /// Drop all elements. Capacity is retained for reuse.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Borrow the logical elements `[0, len)` as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Iterate over the logical elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Consume the sequence and return its elements as a `Vec`.
    ///
    /// No elements are cloned; the reserve space is discarded.
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    /// Grow the contract capacity until it covers `required` slots.
    ///
    /// Multiplies by the growth factor per step; if the multiply would
    /// overflow `usize`, falls back to an exact fit. No-op while
    /// `required <= capacity`.
    fn grow_to_fit(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }
        let mut cap = self.capacity;
        while cap < required {
            cap = match cap.checked_mul(self.growth_factor) {
                Some(next) => next,
                None => required,
            };
        }
        self.buf.reserve_exact(cap - self.buf.len());
        self.capacity = cap;
    }
}

impl<T: Clone> GrowVec<T> {
    /// Copy the logical elements `[0, len)` into a new, independently
    /// owned `Vec`.
    ///
    /// Mutating the returned `Vec` never affects this sequence.
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.clone()
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Clone preserves the contract capacity, not just the elements.
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend(self.buf.iter().cloned());
        Self {
            buf,
            capacity: self.capacity,
            growth_factor: self.growth_factor,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.buf)
            .finish()
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.push_all(iter);
        seq
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
