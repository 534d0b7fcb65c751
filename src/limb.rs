//! Limb-level arithmetic on base-10^9 magnitudes.
//!
//! A magnitude is a slice of [`Limb`]s ordered least-significant limb first.
//! Nothing here knows about signs: callers handle sign dispatch and keep
//! magnitudes canonical (no leading zero limbs, all-zero collapses to `[0]`).

use std::cmp::Ordering;

/// One stored digit of a magnitude, in `[0, BASE)`.
pub(crate) type Limb = u32;

/// Accumulator wide enough for any limb sum or difference.
type Wide = u64;

/// Number of decimal characters covered by one limb.
pub(crate) const DIGITS_PER_LIMB: usize = 9;

/// The representation base, 10^[`DIGITS_PER_LIMB`].
pub(crate) const BASE: Limb = 1_000_000_000;

// Two limbs must multiply without overflowing the accumulator, so a future
// product routine can reuse the same Wide type.
const _: () = assert!((BASE as Wide).checked_mul(BASE as Wide).is_some());

/// Sum two limbs plus an incoming carry. Returns the limb to store and the
/// carry (0 or 1) to propagate toward the more significant position.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn add_with_carry(lhs: Limb, rhs: Limb, carry: Limb) -> (Limb, Limb) {
    let sum = Wide::from(lhs) + Wide::from(rhs) + Wide::from(carry);
    if sum >= Wide::from(BASE) {
        ((sum - Wide::from(BASE)) as Limb, 1)
    } else {
        (sum as Limb, 0)
    }
}

/// Subtract `rhs` plus an incoming borrow from `lhs`. Returns the limb to
/// store and the borrow (0 or 1) taken from the more significant position.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn sub_with_borrow(lhs: Limb, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
    let take = Wide::from(rhs) + Wide::from(borrow);
    if take > Wide::from(lhs) {
        ((Wide::from(BASE) + Wide::from(lhs) - take) as Limb, 1)
    } else {
        ((Wide::from(lhs) - take) as Limb, 0)
    }
}

/// Compare two canonical magnitudes.
///
/// Relies on the no-leading-zero-limb invariant: a longer magnitude is always
/// strictly larger. Equal lengths fall back to a most-significant-first scan.
pub(crate) fn compare(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// Drop leading (most-significant) zero limbs down to canonical form.
///
/// An all-zero magnitude collapses to exactly `[0]`.
pub(crate) fn trim_leading_zeros(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
}
