pub mod dsa;
pub mod fmt;
