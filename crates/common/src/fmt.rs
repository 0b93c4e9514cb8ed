use {snafu::prelude::*, std::num::ParseIntError};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("`{}` is not a binary byte: {}", input, source))]
    ParseBinary {
        input: String,
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders a byte as eight binary digits, most significant first.
pub fn to_binary_string(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Parses up to eight binary digits into a byte.
pub fn parse_binary_string(input: &str) -> Result<u8> {
    u8::from_str_radix(input, 2).context(ParseBinarySnafu { input })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded() {
        assert_eq!(to_binary_string(2), "00000010");
        assert_eq!(to_binary_string(249), "11111001");
        assert_eq!(to_binary_string(255), "11111111");
    }

    #[test]
    fn parses() -> Result<()> {
        assert_eq!(parse_binary_string("00000010")?, 2);
        assert_eq!(parse_binary_string("11010011")?, 211);
        assert_eq!(parse_binary_string("101")?, 5);
        assert_eq!(to_binary_string(parse_binary_string("11010011")?), "11010011");

        Ok(())
    }

    #[test]
    fn rejects_non_binary() {
        assert!(matches!(
            parse_binary_string("00000012"),
            Err(Error::ParseBinary { .. })
        ));
        assert!(parse_binary_string("100000000").is_err());
        assert!(parse_binary_string("").is_err());
    }
}
