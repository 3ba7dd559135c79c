//! Month-length almanac and the year-start index derived from it.
//!
//! Bikram Sambat month lengths follow no arithmetic rule; they are published
//! year by year. The almanac for BS 1970–2099 is embedded from
//! `data/month_lengths.txt`, one line per year:
//!
//! ```text
//! 1970 511aba
//! ```
//!
//! The hex word packs twelve 2-bit fields. Bits `2m..=2m+1` hold the number
//! of days month `m + 1` has beyond 29, so every month is 29 to 32 days long.
//!
//! Both the decoded words and the index are built on first use and shared for
//! the rest of the process.

use std::num::ParseIntError;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::Error;

/// First year covered by the almanac.
pub const FIRST_YEAR: i32 = 1970;

/// Days every month has at least.
const BASE_MONTH_LENGTH: u32 = 29;

static RAW_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/month_lengths.txt"));

struct Tables {
    words: Box<[u32]>,
    year_start: Box<[u32]>,
    total_days: u32,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(init)
}

fn init() -> Tables {
    let words = decode_raw(RAW_DATA).unwrap_or_else(|e| panic!("error parsing month table: {e}"));
    let (year_start, total_days) = build(&words);
    debug!(
        first_year = FIRST_YEAR,
        last_year = FIRST_YEAR + words.len() as i32 - 1,
        total_days,
        "Bikram Sambat month table initialised"
    );
    Tables {
        words,
        year_start,
        total_days,
    }
}

/// Returns the decoded almanac, one word per year starting at
/// [`FIRST_YEAR`].
pub fn decode() -> &'static [u32] {
    &tables().words
}

/// Returns the year-start index: entry `i` is the number of days in all
/// tabulated years before `FIRST_YEAR + i`.
pub fn year_start_index() -> &'static [u32] {
    &tables().year_start
}

/// Days in all tabulated years before the one at `year_index`.
///
/// Returns `None` past the last tabulated year.
pub fn total_days_before(year_index: usize) -> Option<u32> {
    year_start_index().get(year_index).copied()
}

/// Days in the whole almanac.
pub fn total_days_in_table() -> u32 {
    tables().total_days
}

/// Position of `year` in the almanac, or `YearOutOfRange`.
pub(crate) fn year_index(year: i32) -> Result<usize, Error> {
    year.checked_sub(FIRST_YEAR)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < decode().len())
        .ok_or(Error::YearOutOfRange { year })
}

/// Number of days in the given month.
///
/// # Example
///
/// ```
/// use sambat::bikram_sambat::table;
///
/// assert_eq!(Ok(31), table::month_length(1970, 1));
/// assert!(table::month_length(1969, 1).is_err());
/// ```
pub fn month_length(year: i32, month: u32) -> Result<u32, Error> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { month });
    }
    let word = decode()[year_index(year)?];
    Ok(word_month_length(word, month))
}

fn word_month_length(word: u32, month: u32) -> u32 {
    BASE_MONTH_LENGTH + ((word >> (2 * (month - 1))) & 3)
}

fn word_year_length(word: u32) -> u32 {
    (1..=12).map(|m| word_month_length(word, m)).sum()
}

/// Builds the year-start index for `words`, together with the total number
/// of days they cover.
pub fn build(words: &[u32]) -> (Box<[u32]>, u32) {
    let mut index = Vec::with_capacity(words.len());
    let mut total = 0;
    for &word in words {
        index.push(total);
        total += word_year_length(word);
    }
    (index.into_boxed_slice(), total)
}

fn decode_raw(raw: &str) -> Result<Box<[u32]>, RawDataError> {
    use ErrorType::*;
    let mut res = Vec::new();
    for (line_num, line) in (1usize..).zip(raw.lines()) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut it = line.split_whitespace();
        let year: i32 = require_next(&mut it, line_num, 1)?
            .parse()
            .map_err(|e| RawDataError::new(line_num, 1, InvalidInt(e)))?;
        let expected = FIRST_YEAR + res.len() as i32;
        if year != expected {
            return Err(RawDataError::new(line_num, 1, UnexpectedYear { year, expected }));
        }
        let word = u32::from_str_radix(require_next(&mut it, line_num, 2)?, 16)
            .map_err(|e| RawDataError::new(line_num, 2, InvalidInt(e)))?;
        if word >> 24 != 0 {
            return Err(RawDataError::new(line_num, 2, WordTooWide(word)));
        }
        res.push(word);
    }
    if res.is_empty() {
        return Err(RawDataError::new(0, 0, Empty));
    }
    Ok(res.into_boxed_slice())
}

fn require_next<'a, I: Iterator<Item = &'a str>>(
    it: &mut I,
    line_num: usize,
    field_num: usize,
) -> Result<&'a str, RawDataError> {
    it.next()
        .ok_or_else(|| RawDataError::new(line_num, field_num, ErrorType::MissingField))
}

#[derive(Debug, thiserror::Error)]
#[error("line {line_num}, field {field_num}: {reason}")]
struct RawDataError {
    pub line_num: usize,
    pub field_num: usize,
    pub reason: ErrorType,
}

impl RawDataError {
    fn new(line_num: usize, field_num: usize, reason: ErrorType) -> Self {
        Self {
            line_num,
            field_num,
            reason,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ErrorType {
    #[error("invalid number: {0}")]
    InvalidInt(ParseIntError),
    #[error("missing field")]
    MissingField,
    #[error("year {year} where {expected} was expected")]
    UnexpectedYear { year: i32, expected: i32 },
    #[error("word {0:#x} has bits above the twelfth month")]
    WordTooWide(u32),
    #[error("no years in table")]
    Empty,
}
