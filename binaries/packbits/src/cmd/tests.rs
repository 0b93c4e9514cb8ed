use {
    super::*,
    std::fs,
    tempfile::tempdir,
};

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_members_ascending() -> Result<()> {
    let mut out: Vec<u8> = Vec::new();

    build_bitset(16, &[0, 3, 6, 11, 2, 8], &Options::default(), &mut out)?;

    assert_eq!(lines(out), vec!["0", "2", "3", "6", "8", "11"]);

    Ok(())
}

#[test]
fn prints_raw_bytes() -> Result<()> {
    let mut out: Vec<u8> = Vec::new();
    let options = Options {
        raw: true,
        dump: None,
    };

    build_bitset(10, &[0, 1, 2, 3, 4, 7], &options, &mut out)?;

    assert_eq!(lines(out), vec!["11111001", "00000000"]);

    Ok(())
}

#[test]
fn bitset_out_of_range() {
    let mut out: Vec<u8> = Vec::new();

    let result = build_bitset(20, &[15, 21], &Options::default(), &mut out);

    assert!(matches!(
        result,
        Err(Error::BitSet {
            source: bitset::Error::OutOfRange { element: 21, .. }
        })
    ));
    assert!(out.is_empty());
}

#[test]
fn applies_assignments() -> Result<()> {
    let mut out: Vec<u8> = Vec::new();

    let nibbles = build_nibbles(5, &["2=10", "3=14", "-1=7"], &Options::default(), &mut out)?;

    assert_eq!(nibbles.as_bytes(), &[0x00, 0xAE, 0x70]);
    assert_eq!(lines(out), vec!["0", "0", "10", "14", "7"]);

    Ok(())
}

#[test]
fn rejects_bad_assignments() {
    let mut out: Vec<u8> = Vec::new();

    assert!(matches!(
        build_nibbles(5, &["3=17"], &Options::default(), &mut out),
        Err(Error::Nibble {
            source: nibble::Error::InvalidValue { value: 17, .. }
        })
    ));
    assert!(matches!(
        build_nibbles(5, &["6=4"], &Options::default(), &mut out),
        Err(Error::Nibble {
            source: nibble::Error::OutOfRange { index: 6, .. }
        })
    ));
    assert!(matches!(
        build_nibbles(5, &["3"], &Options::default(), &mut out),
        Err(Error::Assignment { .. })
    ));
    assert!(matches!(
        build_nibbles(5, &["x=1"], &Options::default(), &mut out),
        Err(Error::Assignment { .. })
    ));
}

#[test]
fn decodes_bytes() -> Result<()> {
    let mut out: Vec<u8> = Vec::new();

    let bitset = decode_bitset(8, &["11111001", "0"], &mut out)?;

    assert_eq!(bitset.to_vec(), vec![0, 1, 2, 3, 4, 7]);
    assert_eq!(lines(out), vec!["0", "1", "2", "3", "4", "7"]);

    Ok(())
}

#[test]
fn decode_rejects_bad_input() {
    let mut out: Vec<u8> = Vec::new();

    assert!(matches!(
        decode_bitset(8, &["2"], &mut out),
        Err(Error::Decode { .. })
    ));
    assert!(matches!(
        decode_bitset(16, &["1", "1"], &mut out),
        Err(Error::BitSet {
            source: bitset::Error::BufferSize { .. }
        })
    ));
}

#[test]
fn dumps_backing_bytes() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    let bits_path = temp_dir.path().join("bits.bin");
    let nibbles_path = temp_dir.path().join("nibbles.bin");

    let mut out: Vec<u8> = Vec::new();
    let bitset = build_bitset(
        20,
        &[15],
        &Options {
            raw: false,
            dump: Some(bits_path.clone()),
        },
        &mut out,
    )?;
    build_nibbles(
        3,
        &["0=10", "1=3"],
        &Options {
            raw: false,
            dump: Some(nibbles_path.clone()),
        },
        &mut out,
    )?;

    assert_eq!(fs::read(&bits_path).unwrap(), bitset.as_bytes());
    assert_eq!(fs::read(&bits_path).unwrap(), vec![0x00, 0x01, 0x00]);
    assert_eq!(fs::read(&nibbles_path).unwrap(), vec![0xA3, 0x00]);

    temp_dir.close().unwrap();

    Ok(())
}

#[test]
fn dump_to_missing_directory_fails() {
    let temp_dir = tempdir().unwrap();
    let options = Options {
        raw: false,
        dump: Some(temp_dir.path().join("missing").join("bits.bin")),
    };

    assert!(matches!(
        build_bitset(8, &[1], &options, &mut Vec::<u8>::new()),
        Err(Error::Dump { .. })
    ));
}
