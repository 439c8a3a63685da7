use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

/// Reads an API name list, one export name per line.
pub fn load_api_names(filename: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let mut buffer = Vec::new();
    let mut f = File::open(filename)?;
    f.read_to_end(&mut buffer)?;
    Ok(parse_names_bytes(&buffer))
}

/// Splits raw name list bytes into candidate names. Line endings are
/// stripped and empty lines skipped, any other whitespace is part of the
/// name.
pub fn parse_names_bytes(data: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(data)
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
