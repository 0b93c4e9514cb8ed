//! Bit views over byte slices.
//!
//! Bits are addressed from the most significant end of each byte: bit 0 is
//! `0b1000_0000` of byte 0, bit 7 is `0b0000_0001` of byte 0, bit 8 is the
//! high bit of byte 1 and so on. Callers validate indices; an index past the
//! end of the slice panics.

#[inline]
fn mask(idx: usize) -> u8 {
    0x80 >> (idx & 7)
}

pub struct BitmapMut<'a>(&'a mut [u8]);

impl<'a> BitmapMut<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self(bytes)
    }

    fn byte_for_index_mut(&mut self, idx: usize) -> &mut u8 {
        &mut self.0[idx >> 3]
    }

    pub fn set(&mut self, idx: usize) {
        *self.byte_for_index_mut(idx) |= mask(idx);
    }

    pub fn is_set(&self, idx: usize) -> bool {
        Bitmap::new(&*self.0).is_set(idx)
    }
}

pub struct Bitmap<'a>(&'a [u8]);

impl<'a> Bitmap<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    fn byte_for_index(&self, idx: usize) -> u8 {
        self.0[idx >> 3]
    }

    pub fn is_set(&self, idx: usize) -> bool {
        (self.byte_for_index(idx) >> (7 - (idx & 7))) & 1 == 1
    }

    /// Positions of all set bits in ascending order, padding included.
    pub fn ones(&self) -> Ones<'a> {
        Ones {
            bytes: self.0,
            next: 0,
            base: 0,
            word: 0,
        }
    }
}

/// Ascending set-bit positions of a byte slice. Zero bytes are skipped whole.
#[derive(Clone)]
pub struct Ones<'a> {
    bytes: &'a [u8],
    next: usize,
    base: usize,
    word: u8,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word == 0 {
            self.word = *self.bytes.get(self.next)?;
            self.base = self.next << 3;
            self.next += 1;
        }

        let lead = self.word.leading_zeros() as usize;
        self.word &= !mask(lead);

        Some(self.base + lead)
    }
}
