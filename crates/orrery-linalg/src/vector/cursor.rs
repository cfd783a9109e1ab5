//! Cursors for writing and reading vector elements in sequence.

use std::mem;

use super::Vector;

/// Writes elements one after another into a vector.
///
/// Returned by [`Vector::fill`] and [`Vector::assign_at`]. Writing past the last element does
/// nothing.
///
/// # Examples
///
/// ```
/// # use orrery_linalg::*;
/// let mut v = Vec4::ZERO;
/// let cursor = v.fill().put(1).put(2).put(3);
/// assert_eq!(cursor.remaining(), 1);
/// assert_eq!(v, vec4(1, 2, 3, 0));
/// ```
#[derive(Debug)]
pub struct FillCursor<'a, T> {
    slots: &'a mut [T],
    position: usize,
}

impl<'a, T> FillCursor<'a, T> {
    fn new(slots: &'a mut [T], position: usize) -> Self {
        Self { slots, position }
    }

    /// Writes `value` to the current slot and advances.
    pub fn put(mut self, value: T) -> Self {
        if let Some((slot, rest)) = mem::take(&mut self.slots).split_first_mut() {
            *slot = value;
            self.slots = rest;
            self.position += 1;
        }
        self
    }

    /// Writes values until either `values` or the vector runs out.
    pub fn put_all(self, values: impl IntoIterator<Item = T>) -> Self {
        let mut cursor = self;
        for value in values {
            if cursor.is_full() {
                break;
            }
            cursor = cursor.put(value);
        }
        cursor
    }

    /// Index of the slot the next value is written to.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Reads elements one after another out of a vector.
///
/// Returned by [`Vector::drain`]. Reading past the last element leaves the destination untouched.
/// The vector itself is not modified.
///
/// # Examples
///
/// ```
/// # use orrery_linalg::*;
/// let v = vec3(1, 2, 3);
/// let (mut a, mut b) = (0, 0);
/// v.drain().take_into(&mut a).take_into(&mut b);
/// assert_eq!((a, b), (1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DrainCursor<'a, T> {
    slots: &'a [T],
}

impl<'a, T: Clone> DrainCursor<'a, T> {
    /// Stores the current element in `out` and advances.
    pub fn take_into(mut self, out: &mut T) -> Self {
        if let Some(value) = self.next() {
            *out = value.clone();
        }
        self
    }
}

impl<'a, T> Iterator for DrainCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.slots.split_first()?;
        self.slots = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<'a, T> ExactSizeIterator for DrainCursor<'a, T> {}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a cursor that writes elements starting at index 0.
    pub fn fill(&mut self) -> FillCursor<'_, T> {
        FillCursor::new(&mut self.0, 0)
    }

    /// Returns a cursor that reads elements starting at index 0.
    pub fn drain(&self) -> DrainCursor<'_, T> {
        DrainCursor { slots: &self.0 }
    }

    /// Copies as many of `values` as fit into `self`, starting at `offset`.
    ///
    /// A negative `offset` counts back from the end of `self`, not of `values`: `-1` writes the
    /// first of `values` into the last element of `self` and drops the rest. Offsets outside of
    /// `-N..N` are not an error: nothing is written and the returned cursor is already full.
    ///
    /// Returns a cursor positioned after the last element written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let mut v = Vec4::ZERO;
    /// v.assign_at(1, [7, 8]);
    /// assert_eq!(v, vec4(0, 7, 8, 0));
    ///
    /// v.assign_at(-1, [5, 6]);
    /// assert_eq!(v, vec4(0, 7, 8, 5));
    ///
    /// let cursor = v.assign_at(9, [1]);
    /// assert!(cursor.is_full());
    /// assert_eq!(v, vec4(0, 7, 8, 5));
    /// ```
    pub fn assign_at(
        &mut self,
        offset: isize,
        values: impl IntoIterator<Item = T>,
    ) -> FillCursor<'_, T> {
        let start = if offset < 0 {
            N.checked_sub(offset.unsigned_abs())
        } else {
            Some(offset.unsigned_abs()).filter(|&start| start < N)
        };
        match start {
            Some(start) => FillCursor::new(&mut self.0[start..], start).put_all(values),
            None => FillCursor::new(Default::default(), N),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4, Vec3};

    #[test]
    fn fill_stops_at_end() {
        let mut v = Vec3::ZERO;
        let cursor = v.fill().put(1).put(2).put(3).put(4);
        assert!(cursor.is_full());
        assert_eq!(cursor.position(), 3);
        assert_eq!(v, vec3(1, 2, 3));

        let cursor = v.fill().put_all([9, 8, 7, 6, 5]);
        assert_eq!(cursor.position(), 3);
        assert_eq!(v, vec3(9, 8, 7));
    }

    #[test]
    fn drain_stops_at_end() {
        let v = vec3(1, 2, 3);
        let (mut a, mut b, mut c, mut d) = (0, 0, 0, -1);
        let rest = v
            .drain()
            .take_into(&mut a)
            .take_into(&mut b)
            .take_into(&mut c)
            .take_into(&mut d);
        assert_eq!((a, b, c, d), (1, 2, 3, -1));
        assert_eq!(rest.len(), 0);
        assert_eq!(v.drain().skip(1).copied().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn assign_at_offsets() {
        let mut v = vec4(0, 0, 0, 0);
        let cursor = v.assign_at(2, [1, 2, 3]);
        assert_eq!(cursor.position(), 4);
        assert_eq!(v, vec4(0, 0, 1, 2));

        let cursor = v.assign_at(-4, [5]);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 3);
        cursor.put(6);
        assert_eq!(v, vec4(5, 6, 1, 2));

        assert!(v.assign_at(-5, [9]).is_full());
        assert!(v.assign_at(4, [9]).is_full());
        assert!(v.assign_at(isize::MIN, [9]).is_full());
        assert_eq!(v, vec4(5, 6, 1, 2));
    }

    #[test]
    fn negative_offset_counts_from_destination_end() {
        let mut v = vec4(0, 0, 0, 0);
        let cursor = v.assign_at(-2, [1, 2, 3, 4, 5, 6]);
        assert!(cursor.is_full());
        assert_eq!(v, vec4(0, 0, 1, 2));

        let mut v = vec3(0, 0, 0);
        v.assign_at(-3, [7]);
        assert_eq!(v, vec3(7, 0, 0));
    }
}
