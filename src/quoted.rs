// Quoting Convention - Reversible field escaping
// Shared by the write and read sides of the record format

use std::iter::Peekable;

/// Write `field` to `out` wrapped in double quotes, escaping any embedded
/// `"` or `\` with a backslash so the token round-trips through `read_quoted`.
pub fn write_quoted<W: std::fmt::Write>(out: &mut W, field: &str) -> std::fmt::Result {
    out.write_char('"')?;
    for ch in field.chars() {
        if ch == '"' || ch == '\\' {
            out.write_char('\\')?;
        }
        out.write_char(ch)?;
    }
    out.write_char('"')
}

/// Read one quoted field from a sequential character source.
///
/// Skips leading whitespace, requires an opening `"`, then consumes characters
/// until the closing `"`. A backslash escapes the character after it.
///
/// Returns `None` if the opening quote is missing, the field is unterminated,
/// or the input ends on a dangling escape. On `None` the source is left
/// wherever reading stopped.
pub fn read_quoted<I>(input: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = char>,
{
    skip_whitespace(input);
    if input.next_if_eq(&'"').is_none() {
        return None;
    }

    let mut field = String::new();
    loop {
        match input.next()? {
            '\\' => field.push(input.next()?),
            '"' => return Some(field),
            ch => field.push(ch),
        }
    }
}

/// Consume leading whitespace, formatted-input style.
pub(crate) fn skip_whitespace<I>(input: &mut Peekable<I>)
where
    I: Iterator<Item = char>,
{
    while input.next_if(|ch| ch.is_whitespace()).is_some() {}
}

// ============================================================================
// TESTS
// ============================================================================
