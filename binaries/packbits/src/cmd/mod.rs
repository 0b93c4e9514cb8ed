mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

use {
    bitset::BitSet,
    common::fmt::{parse_binary_string, to_binary_string},
    nibble::NibbleArray,
    snafu::prelude::*,
    std::{fmt::Display, fs, io::Write, path::PathBuf},
};

/// How a built container is reported.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print each backing byte as binary digits instead of the logical values.
    pub raw: bool,
    /// Also write the backing bytes, unmodified, to this file.
    pub dump: Option<PathBuf>,
}

pub fn build_bitset<W: Write>(
    capacity: usize,
    elements: &[usize],
    options: &Options,
    out: &mut W,
) -> Result<BitSet> {
    let mut bitset = BitSet::new(capacity);
    for &element in elements {
        bitset.set(element).context(error::BitSetSnafu)?;
    }

    report(out, bitset.as_bytes(), bitset.iter(), options)?;

    Ok(bitset)
}

pub fn build_nibbles<W: Write, S: AsRef<str>>(
    len: usize,
    assignments: &[S],
    options: &Options,
    out: &mut W,
) -> Result<NibbleArray> {
    let mut nibbles = NibbleArray::new(len);
    for assignment in assignments {
        let (index, value) = parse_assignment(assignment.as_ref())?;
        nibbles.set(index, value).context(error::NibbleSnafu)?;
    }

    report(out, nibbles.as_bytes(), nibbles.iter(), options)?;

    Ok(nibbles)
}

/// Reads binary-digit bytes as the buffer of a bit set and prints its members.
pub fn decode_bitset<W: Write, S: AsRef<str>>(
    capacity: usize,
    bytes: &[S],
    out: &mut W,
) -> Result<BitSet> {
    let bytes = bytes
        .iter()
        .map(|byte| parse_binary_string(byte.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .context(error::DecodeSnafu)?;

    let bitset = BitSet::from_bytes(capacity, bytes).context(error::BitSetSnafu)?;

    report(out, bitset.as_bytes(), bitset.iter(), &Options::default())?;

    Ok(bitset)
}

fn parse_assignment(input: &str) -> Result<(isize, i64)> {
    let parsed: Option<(isize, i64)> = input.split_once('=').and_then(|(index, value)| {
        Some((index.trim().parse().ok()?, value.trim().parse().ok()?))
    });

    parsed.context(error::AssignmentSnafu { input })
}

fn report<W, I>(out: &mut W, bytes: &[u8], values: I, options: &Options) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    if options.raw {
        for &byte in bytes {
            writeln!(out, "{}", to_binary_string(byte)).context(error::WriteSnafu)?;
        }
    } else {
        for value in values {
            writeln!(out, "{}", value).context(error::WriteSnafu)?;
        }
    }

    if let Some(path) = &options.dump {
        fs::write(path, bytes).context(error::DumpSnafu { path })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "dumped buffer");
    }

    Ok(())
}
