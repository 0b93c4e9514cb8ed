use snafu::{prelude::*, Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("index {} out of range (len={})", index, len))]
    OutOfRange {
        backtrace: Backtrace,
        index: isize,
        len: usize,
    },

    #[snafu(display("nibble {} must be in range(0, 16)", value))]
    InvalidValue { backtrace: Backtrace, value: i64 },

    #[snafu(display(
        "buffer of {} bytes does not fit length, expected {} bytes",
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
