use {
    bitset::BitSet,
    clap::{arg, value_parser, ArgMatches, Command},
    nibble::NibbleArray,
    packbits::cmd::{self, Error as ExecutionError, Options},
    snafu::prelude::*,
    std::{env, io, path::PathBuf, process},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("the `{}` environment variable holds `{}`, which is not a size", var, value))]
    InvalidSize { var: &'static str, value: String },

    #[snafu(display("{}", source))]
    ExecuteCommand {
        #[snafu(backtrace)]
        source: ExecutionError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const PACKBITS_CAPACITY: &str = "PACKBITS_CAPACITY";
const PACKBITS_LENGTH: &str = "PACKBITS_LENGTH";
const PACKBITS_LOG: &str = "PACKBITS_LOG";

const BITSET: &str = "bitset";
const NIBBLES: &str = "nibbles";
const DECODE: &str = "decode";

fn capacity_arg() -> clap::Arg {
    arg!(-c --capacity <N> "exclusive upper bound on elements")
        .required(false)
        .value_parser(value_parser!(usize))
}

fn output_args() -> [clap::Arg; 2] {
    [
        arg!(--raw "print the backing bytes instead of the values"),
        arg!(-o --dump <PATH> "write the backing bytes to a file")
            .required(false)
            .value_parser(value_parser!(PathBuf)),
    ]
}

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .subcommand(
            Command::new(BITSET)
                .about("add elements to a bit set and print its members")
                .arg(capacity_arg())
                .args(output_args())
                .arg(arg!([ELEMENT] ... "elements to add").value_parser(value_parser!(usize))),
        )
        .subcommand(
            Command::new(NIBBLES)
                .about("assign values in a nibble array and print every slot")
                .arg(
                    arg!(-l --length <N> "number of slots")
                        .required(false)
                        .value_parser(value_parser!(usize)),
                )
                .args(output_args())
                .arg(
                    arg!([ASSIGNMENT] ... "INDEX=VALUE pairs, negative indices count from the end")
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new(DECODE)
                .about("read binary-digit bytes as a bit set buffer and print its members")
                .arg(capacity_arg())
                .arg(arg!(<BYTE> ... "backing bytes, e.g. 11111001")),
        )
}

fn main() {
    init_tracing();

    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(PACKBITS_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

/// Takes a size from the command line, then the environment, then the default.
fn size(matches: &ArgMatches, id: &str, var: &'static str, default: usize) -> Result<usize> {
    if let Some(&value) = matches.get_one::<usize>(id) {
        return Ok(value);
    }

    match env::var(var) {
        Ok(value) => {
            let parsed = value.trim().parse::<usize>().ok();
            parsed.context(InvalidSizeSnafu { var, value })
        }
        Err(_) => Ok(default),
    }
}

fn options(matches: &ArgMatches) -> Options {
    Options {
        raw: matches.get_flag("raw"),
        dump: matches.get_one::<PathBuf>("dump").cloned(),
    }
}

fn strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();
    let mut stdout = io::stdout().lock();

    match matches.subcommand() {
        Some((BITSET, sub_matches)) => {
            let capacity = size(
                sub_matches,
                "capacity",
                PACKBITS_CAPACITY,
                BitSet::DEFAULT_CAPACITY,
            )?;
            let elements: Vec<usize> = sub_matches
                .get_many::<usize>("ELEMENT")
                .map(|values| values.copied().collect())
                .unwrap_or_default();
            tracing::debug!(capacity, elements = elements.len(), "building bit set");

            cmd::build_bitset(capacity, &elements, &options(sub_matches), &mut stdout)
                .context(ExecuteCommandSnafu)?;
        }
        Some((NIBBLES, sub_matches)) => {
            let len = size(
                sub_matches,
                "length",
                PACKBITS_LENGTH,
                NibbleArray::DEFAULT_LEN,
            )?;
            let assignments = strings(sub_matches, "ASSIGNMENT");
            tracing::debug!(len, assignments = assignments.len(), "building nibble array");

            cmd::build_nibbles(len, &assignments, &options(sub_matches), &mut stdout)
                .context(ExecuteCommandSnafu)?;
        }
        Some((DECODE, sub_matches)) => {
            let capacity = size(
                sub_matches,
                "capacity",
                PACKBITS_CAPACITY,
                BitSet::DEFAULT_CAPACITY,
            )?;
            let bytes = strings(sub_matches, "BYTE");

            cmd::decode_bitset(capacity, &bytes, &mut stdout).context(ExecuteCommandSnafu)?;
        }
        _ => unreachable!(),
    }

    Ok(())
}
