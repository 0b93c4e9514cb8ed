use {
    snafu::{prelude::*, Backtrace},
    std::path::PathBuf,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed with bit set, source: {}", source))]
    BitSet {
        #[snafu(backtrace)]
        source: bitset::Error,
    },

    #[snafu(display("Failed with nibble array, source: {}", source))]
    Nibble {
        #[snafu(backtrace)]
        source: nibble::Error,
    },

    #[snafu(display("Failed with decoding, source: {}", source))]
    Decode { source: common::fmt::Error },

    #[snafu(display("invalid assignment `{}`, expected INDEX=VALUE", input))]
    Assignment { backtrace: Backtrace, input: String },

    #[snafu(display("Failed to write output, source: {}", source))]
    Write {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    #[snafu(display("Failed to dump buffer to {}, source: {}", path.display(), source))]
    Dump {
        backtrace: Backtrace,
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
