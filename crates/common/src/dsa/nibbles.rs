//! Nibble views over byte slices.
//!
//! Nibble `2n` is the high half of byte `n` and nibble `2n + 1` its low half.

/// Shift that moves nibble `idx` into the low four bits of its byte.
#[inline]
fn shift(idx: usize) -> u32 {
    if idx & 1 == 0 {
        4
    } else {
        0
    }
}

pub struct Nibbles<'a>(&'a [u8]);

impl<'a> Nibbles<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    pub fn get(&self, idx: usize) -> u8 {
        let shift = shift(idx);
        (self.0[idx >> 1] & (0x0F << shift)) >> shift
    }
}

pub struct NibblesMut<'a>(&'a mut [u8]);

impl<'a> NibblesMut<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self(bytes)
    }

    /// Overwrites nibble `idx`, leaving the other half of its byte untouched.
    pub fn put(&mut self, idx: usize, value: u8) {
        debug_assert!(value < 16);

        let shift = shift(idx);
        let mask = 0x0Fu8 << shift;
        let byte = &mut self.0[idx >> 1];

        *byte = (*byte & !mask) | ((value << shift) & mask);
    }
}
