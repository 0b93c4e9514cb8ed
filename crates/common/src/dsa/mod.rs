pub mod bitmap;
pub mod nibbles;

pub use {
    bitmap::{Bitmap, BitmapMut},
    nibbles::{Nibbles, NibblesMut},
};
