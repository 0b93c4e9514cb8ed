use snafu::{prelude::*, Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("element {} out of range (len={})", element, capacity))]
    OutOfRange {
        backtrace: Backtrace,
        element: usize,
        capacity: usize,
    },

    #[snafu(display(
        "buffer of {} bytes does not fit capacity, expected {} bytes",
        actual,
        expected
    ))]
    BufferSize {
        backtrace: Backtrace,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
