//! Text operand listings. Instruction decoding belongs to whatever produced
//! the listing, the crate only consumes the flattened records:
//!
//! ```text
//! # comment
//! <address> <value> [<value> ...]
//! ```
//!
//! Numbers are hexadecimal with a `0x` prefix or decimal. One record per
//! line, slots in operand order.

use crate::matcher::OperandRecord;
use anyhow::Context;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{line_ending, one_of};
use nom::character::{is_digit, is_hex_digit, is_space};
use nom::combinator::eof;
use nom::multi::{many0, many1};
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum ListingError {
    #[error("listing line {0} is malformed, expected '<address> <value> ...'")]
    MalformedLine(usize),
    #[error("listing line {0} has an address but no operand values")]
    MissingValues(usize),
}

fn str_to_digit(bytes: &[u8]) -> u64 {
    // Only used on spans nom has already identified as digits so it won't fail
    std::str::from_utf8(bytes)
        .unwrap()
        .parse()
        .unwrap_or_default()
}

fn str_to_hex(bytes: &[u8]) -> u64 {
    u64::from_str_radix(std::str::from_utf8(bytes).unwrap(), 16).unwrap_or_default()
}

fn read_hexadecimal(input: &[u8]) -> IResult<&[u8], u64> {
    preceded(alt((tag(b"0x"), tag(b"0X"))), take_while1(is_hex_digit))(input)
        .map(|(b, v)| (b, str_to_hex(v)))
}

fn read_decimal(s: &[u8]) -> IResult<&[u8], u64> {
    take_while1(is_digit)(s).map(|(b, v)| (b, str_to_digit(v)))
}

fn read_number(s: &[u8]) -> IResult<&[u8], u64> {
    alt((read_hexadecimal, read_decimal))(s)
}

fn strip_whitespace(s: &[u8]) -> IResult<&[u8], ()> {
    one_of(&b" \n\r\t"[..])(s).map(|(b, _)| (b, ()))
}

fn strip_comments(s: &[u8]) -> IResult<&[u8], ()> {
    delimited(
        tag(b"#"),
        take_while(|c| c != b'\n' && c != b'\r'),
        alt((line_ending, eof)),
    )(s)
    .map(|(b, _)| (b, ()))
}

fn skip_to_content(s: &[u8]) -> IResult<&[u8], ()> {
    many0(alt((strip_whitespace, strip_comments)))(s).map(|(b, _)| (b, ()))
}

fn end_of_record(s: &[u8]) -> IResult<&[u8], ()> {
    tuple((take_while(is_space), alt((line_ending, eof))))(s).map(|(b, _)| (b, ()))
}

fn read_record(s: &[u8]) -> IResult<&[u8], OperandRecord> {
    tuple((
        read_number,
        many1(preceded(take_while1(is_space), read_number)),
        end_of_record,
    ))(s)
    .map(|(b, (address, values, _))| (b, OperandRecord { address, values }))
}

fn bare_address(s: &[u8]) -> bool {
    tuple((read_number, end_of_record))(s).is_ok()
}

fn line_number(data: &[u8], remaining: &[u8]) -> usize {
    let consumed = data.len() - remaining.len();
    data[..consumed].iter().filter(|c| **c == b'\n').count() + 1
}

pub fn parse_listing_bytes(data: &[u8]) -> Result<Vec<OperandRecord>, ListingError> {
    let mut records = Vec::new();
    let mut input = data;
    loop {
        input = match skip_to_content(input) {
            Ok((bytes, _)) => bytes,
            Err(_) => break,
        };
        if input.is_empty() {
            break;
        }
        match read_record(input) {
            Ok((bytes, record)) => {
                records.push(record);
                input = bytes;
            }
            Err(_) => {
                let line = line_number(data, input);
                return Err(if bare_address(input) {
                    ListingError::MissingValues(line)
                } else {
                    ListingError::MalformedLine(line)
                });
            }
        }
    }
    Ok(records)
}

pub fn load_listing(filename: impl AsRef<Path>) -> anyhow::Result<Vec<OperandRecord>> {
    let path = filename.as_ref();
    let data = fs::read(path)
        .with_context(|| format!("Failed to read operand listing {}", path.display()))?;
    let records = parse_listing_bytes(&data)?;
    Ok(records)
}
