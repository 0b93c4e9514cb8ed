//! A fixed-length array of 4-bit values packed two per byte.

pub mod error;
mod nibble_array;

pub use {
    error::{Error, Result},
    nibble_array::{Iter, NibbleArray},
};
