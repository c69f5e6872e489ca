// Record Entity - One catalogued book
//
// A plain value type: identifier, title, author, price. Records are written
// and read in a delimited quoted line format and compared with a fixed
// absolute tolerance on price, so values survive textual round-trips without
// spurious inequality from floating-point noise.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quoted::{read_quoted, skip_whitespace, write_quoted};

/// Absolute tolerance below which two prices are treated as equal.
pub const PRICE_EPSILON: f64 = 1.0e-4;

// ============================================================================
// RECORD
// ============================================================================

/// One catalogued book: identifier, title, author, price.
///
/// The identifier is arbitrary text (typically an ISBN); no format or
/// uniqueness checks are made here. Price is a bare magnitude - zero and
/// negative values are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    identifier: String,
    title: String,
    author: String,
    price: f64,
}

impl Record {
    /// Create a record from borrowed text fields and a price.
    pub fn new(identifier: &str, title: &str, author: &str, price: f64) -> Self {
        Record {
            identifier: identifier.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            price,
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    pub fn set_identifier(&mut self, identifier: &str) {
        self.identifier = identifier.to_string();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    // ========================================================================
    // PARSING
    // ========================================================================

    /// Read one record off a sequential character source, matching the
    /// `Display` format: quoted identifier, delimiter, quoted title,
    /// delimiter, quoted author, delimiter, decimal price. Leading whitespace
    /// is skipped before every token; the delimiter character is consumed but
    /// its value is not validated.
    ///
    /// The update is atomic: `self` is overwritten only if every token was
    /// read successfully, otherwise it is left untouched and the error names
    /// the token that failed. The source is left wherever reading stopped, so
    /// successive records can be read off one stream.
    pub fn read_from<I>(&mut self, input: &mut Peekable<I>) -> Result<(), ParseRecordError>
    where
        I: Iterator<Item = char>,
    {
        let mut working = Record::default();

        working.identifier = read_field(input, "identifier")?;
        consume_delimiter(input, "identifier")?;
        working.title = read_field(input, "title")?;
        consume_delimiter(input, "title")?;
        working.author = read_field(input, "author")?;
        consume_delimiter(input, "author")?;
        working.price = read_price(input)?;

        *self = working;
        Ok(())
    }

    // ========================================================================
    // ORDERING
    // ========================================================================

    /// Total order over records: identifier, then author, then title, then
    /// price. Prices closer than [`PRICE_EPSILON`] tie at the final tier, the
    /// same condition under which `==` treats them as equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        let ord = self.identifier.cmp(&other.identifier);
        if ord != Ordering::Equal {
            return ord;
        }
        let ord = self.author.cmp(&other.author);
        if ord != Ordering::Equal {
            return ord;
        }
        let ord = self.title.cmp(&other.title);
        if ord != Ordering::Equal {
            return ord;
        }
        if (self.price - other.price).abs() >= PRICE_EPSILON {
            return self.price.total_cmp(&other.price);
        }
        Ordering::Equal
    }
}

// ============================================================================
// FORMAT / PARSE SURFACE
// ============================================================================

impl fmt::Display for Record {
    /// `"<identifier>", "<title>", "<author>", <price>` - text fields quoted
    /// per [`write_quoted`], price in its natural decimal form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.identifier)?;
        f.write_str(", ")?;
        write_quoted(f, &self.title)?;
        f.write_str(", ")?;
        write_quoted(f, &self.author)?;
        f.write_str(", ")?;
        write!(f, "{}", self.price)
    }
}

impl FromStr for Record {
    type Err = ParseRecordError;

    /// Parse one record from the front of `s`. Input remaining after the
    /// price is ignored - line framing is the caller's convention.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut record = Record::default();
        record.read_from(&mut s.chars().peekable())?;
        Ok(record)
    }
}

// ============================================================================
// RELATIONAL OPERATORS
// ============================================================================

impl PartialEq for Record {
    /// Text fields compared exactly; prices equal when within
    /// [`PRICE_EPSILON`]. `Eq` is deliberately not implemented: tolerance
    /// equality is not transitive over arbitrary prices.
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.title == other.title
            && self.author == other.author
            && (self.price - other.price).abs() < PRICE_EPSILON
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// Why a record could not be read. The target record is untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRecordError {
    /// A quoted text field was missing, unquoted, or unterminated.
    Field(&'static str),
    /// The input ended where a delimiter was expected.
    Delimiter(&'static str),
    /// The price token was missing or not a decimal number.
    Price,
}

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRecordError::Field(field) => {
                write!(f, "malformed or missing quoted {} field", field)
            }
            ParseRecordError::Delimiter(after) => {
                write!(f, "missing delimiter after {} field", after)
            }
            ParseRecordError::Price => write!(f, "invalid price token"),
        }
    }
}

impl std::error::Error for ParseRecordError {}

// ============================================================================
// TOKEN READERS
// ============================================================================

fn read_field<I>(input: &mut Peekable<I>, field: &'static str) -> Result<String, ParseRecordError>
where
    I: Iterator<Item = char>,
{
    read_quoted(input).ok_or(ParseRecordError::Field(field))
}

/// Consume one delimiter character. Its value is not checked, only its
/// presence - a missing delimiter shifts the next token and fails there or
/// here at end of input.
fn consume_delimiter<I>(input: &mut Peekable<I>, after: &'static str) -> Result<(), ParseRecordError>
where
    I: Iterator<Item = char>,
{
    skip_whitespace(input);
    input.next().map(|_| ()).ok_or(ParseRecordError::Delimiter(after))
}

fn read_price<I>(input: &mut Peekable<I>) -> Result<f64, ParseRecordError>
where
    I: Iterator<Item = char>,
{
    skip_whitespace(input);
    let mut token = String::new();
    while let Some(ch) = input.next_if(|ch| matches!(ch, '0'..='9' | '+' | '-' | '.' | 'e' | 'E')) {
        token.push(ch);
    }
    token.parse().map_err(|_| ParseRecordError::Price)
}

// ============================================================================
// TESTS
// ============================================================================
