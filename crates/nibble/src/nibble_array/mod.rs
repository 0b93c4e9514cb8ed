use {
    crate::error::{BufferSizeSnafu, InvalidValueSnafu, OutOfRangeSnafu, Result},
    common::dsa::{Nibbles, NibblesMut},
    snafu::prelude::*,
    std::iter::FusedIterator,
};


/// A fixed-length sequence of values in `[0, 16)`.
///
/// Slot `i` is the high nibble of byte `i / 2` when `i` is even and the low
/// nibble when it is odd. An odd length leaves the low nibble of the last
/// byte unused.
///
/// Negative indices count from the end: `-1` is the last slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NibbleArray {
    len: usize,
    bytes: Box<[u8]>,
}

impl NibbleArray {
    pub const DEFAULT_LEN: usize = 255;

    pub fn new(len: usize) -> Self {
        let bytes = vec![0; Self::storage_len(len)].into_boxed_slice();
        tracing::trace!(len, bytes = bytes.len(), "allocated nibble array");

        Self { len, bytes }
    }

    /// Adopts a raw buffer laid out as [`NibbleArray::as_bytes`] returns it.
    pub fn from_bytes(len: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = Self::storage_len(len);
        ensure!(
            bytes.len() == expected,
            BufferSizeSnafu {
                expected,
                actual: bytes.len(),
            }
        );
        tracing::debug!(len, bytes = expected, "adopted nibble array buffer");

        Ok(Self {
            len,
            bytes: bytes.into_boxed_slice(),
        })
    }

    pub fn storage_len(len: usize) -> usize {
        len.div_ceil(2)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Maps `index` in `[-len, len)` to a slot.
    fn position(&self, index: isize) -> Result<usize> {
        let pos = if index < 0 {
            self.len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs()).filter(|&pos| pos < self.len)
        };

        pos.context(OutOfRangeSnafu {
            index,
            len: self.len,
        })
    }

    pub fn get(&self, index: isize) -> Result<u8> {
        let pos = self.position(index)?;
        Ok(Nibbles::new(&self.bytes).get(pos))
    }

    pub fn set<V: Into<i64>>(&mut self, index: isize, value: V) -> Result<()> {
        let pos = self.position(index)?;

        let value = value.into();
        let nibble = u8::try_from(value)
            .ok()
            .filter(|&nibble| nibble < 16)
            .context(InvalidValueSnafu { value })?;

        NibblesMut::new(&mut self.bytes).put(pos, nibble);
        Ok(())
    }

    /// A cursor over all slots in index order. Each call starts from slot 0.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bytes: &self.bytes,
            front: 0,
            back: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl Default for NibbleArray {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

impl<'a> IntoIterator for &'a NibbleArray {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = Nibbles::new(self.bytes).get(self.front);
        self.front += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(Nibbles::new(self.bytes).get(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
