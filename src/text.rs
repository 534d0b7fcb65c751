//! Decimal text conversion.
//!
//! [`parse_decimal`] and [`write_decimal`] are exact inverses over canonical
//! values: every magnitude formatted here parses back to the same limbs. Both
//! work on sign + limb parts; assembling the parts into a
//! [`BigInt`](crate::BigInt) is the type's job.

use std::fmt;

use crate::error::{ParseBigIntError, ParseResult};
use crate::limb::{Limb, DIGITS_PER_LIMB};

/// Parse `sign? digit+` into a sign flag and a canonical magnitude.
///
/// Leading zero characters are stripped before chunking, so the produced
/// magnitude never carries a leading zero limb. An all-zero input (including
/// `"-0"`) yields canonical non-negative zero.
///
/// # Errors
///
/// Returns [`ParseBigIntError`] if the input is empty, is only a sign
/// character, or contains anything other than ASCII digits after the
/// optional sign.
pub(crate) fn parse_decimal(input: &str) -> ParseResult<(bool, Vec<Limb>)> {
    if input.is_empty() {
        return Err(ParseBigIntError::Empty);
    }

    let (negative, digits) = match input.strip_prefix(['+', '-']) {
        Some(rest) if rest.is_empty() => return Err(ParseBigIntError::SignOnly),
        Some(rest) => (input.starts_with('-'), rest),
        None => (false, input),
    };

    // Reject non-digits up front; the byte slicing below assumes pure ASCII.
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseBigIntError::InvalidDigit(bad));
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok((false, vec![0]));
    }

    // Chunk into groups of nine from the right, least-significant group
    // first. The leading group may be shorter.
    let mut limbs = Vec::with_capacity(digits.len().div_ceil(DIGITS_PER_LIMB));
    let mut rest = digits.as_bytes();
    while rest.len() > DIGITS_PER_LIMB {
        let (head, tail) = rest.split_at(rest.len() - DIGITS_PER_LIMB);
        limbs.push(limb_from_digits(tail));
        rest = head;
    }
    limbs.push(limb_from_digits(rest));

    Ok((negative, limbs))
}

/// Convert a run of at most [`DIGITS_PER_LIMB`] ASCII digits to a limb value
/// by plain decimal accumulation.
fn limb_from_digits(digits: &[u8]) -> Limb {
    debug_assert!(!digits.is_empty() && digits.len() <= DIGITS_PER_LIMB);
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + Limb::from(d - b'0'))
}

/// Write a sign flag and canonical magnitude as decimal text.
///
/// Canonical zero prints as `"0"` with no sign. Otherwise the
/// most-significant limb prints unpadded and every following limb is
/// zero-padded to exactly [`DIGITS_PER_LIMB`] characters.
pub(crate) fn write_decimal(
    f: &mut fmt::Formatter<'_>,
    negative: bool,
    limbs: &[Limb],
) -> fmt::Result {
    if limbs == [0] {
        return f.write_str("0");
    }

    if negative {
        f.write_str("-")?;
    }

    let mut iter = limbs.iter().rev();
    if let Some(top) = iter.next() {
        write!(f, "{top}")?;
    }
    for limb in iter {
        write!(f, "{limb:0width$}", width = DIGITS_PER_LIMB)?;
    }

    Ok(())
}
