use {
    crate::error::{BufferSizeSnafu, OutOfRangeSnafu, Result},
    common::dsa::{bitmap::Ones, Bitmap, BitmapMut},
    snafu::prelude::*,
};


/// A fixed-capacity set of integers in `[0, capacity)`.
///
/// Element `e` lives in bit `e % 8` of byte `e / 8`, counting from the most
/// significant bit, so element 0 is `0b1000_0000` of the first byte. The
/// buffer holds `capacity / 8 + 1` bytes; bits past `capacity` are slack and
/// can never be set or queried.
///
/// Elements can be added but not removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    capacity: usize,
    bytes: Box<[u8]>,
}

impl BitSet {
    pub const DEFAULT_CAPACITY: usize = 255;

    pub fn new(capacity: usize) -> Self {
        let bytes = vec![0; Self::storage_len(capacity)].into_boxed_slice();
        tracing::trace!(capacity, bytes = bytes.len(), "allocated bit set");

        Self { capacity, bytes }
    }

    /// Adopts a raw buffer laid out as [`BitSet::as_bytes`] returns it.
    pub fn from_bytes(capacity: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = Self::storage_len(capacity);
        ensure!(
            bytes.len() == expected,
            BufferSizeSnafu {
                expected,
                actual: bytes.len(),
            }
        );
        tracing::debug!(capacity, bytes = expected, "adopted bit set buffer");

        Ok(Self {
            capacity,
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Number of bytes backing a set of the given capacity.
    pub fn storage_len(capacity: usize) -> usize {
        capacity / 8 + 1
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn check(&self, element: usize) -> Result<()> {
        ensure!(
            element < self.capacity,
            OutOfRangeSnafu {
                element,
                capacity: self.capacity,
            }
        );
        Ok(())
    }

    pub fn set(&mut self, element: usize) -> Result<()> {
        self.check(element)?;
        BitmapMut::new(&mut self.bytes).set(element);
        Ok(())
    }

    pub fn contains(&self, element: usize) -> Result<bool> {
        self.check(element)?;
        Ok(Bitmap::new(&self.bytes).is_set(element))
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ones: Bitmap::new(&self.bytes).ones(),
            capacity: self.capacity,
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl Default for BitSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a> {
    ones: Ones<'a>,
    capacity: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // slack bits only sit at the tail, past every real member
        self.ones.next().filter(|&element| element < self.capacity)
    }
}
