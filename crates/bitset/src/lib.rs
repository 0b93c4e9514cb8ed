//! A dense set over `[0, capacity)` storing one bit per element.

mod bit_set;
pub mod error;

pub use {
    bit_set::{BitSet, Iter},
    error::{Error, Result},
};
