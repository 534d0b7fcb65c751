use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ParseBigIntError;
use crate::limb::{self, Limb, BASE};
use crate::text;

/// An arbitrary-precision signed integer.
///
/// The value is a sign flag plus a magnitude of base-10^9 limbs stored
/// least-significant first. Three invariants hold between operations:
///
/// - the magnitude always has at least one limb,
/// - the most-significant limb is nonzero unless the value is zero, in which
///   case the magnitude is exactly `[0]`,
/// - zero is never negative, so `-0` does not exist as a distinct value.
///
/// Each instance exclusively owns its limbs: cloning deep-copies the
/// magnitude, moving transfers it. Arithmetic never fails; magnitudes grow
/// as needed.
///
/// ```rust
/// use decint::BigInt;
///
/// let a: BigInt = "123456789123456789".parse().unwrap();
/// let b = BigInt::from(1_u64);
/// assert_eq!((a + b).to_string(), "123456789123456790");
/// ```
#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    limbs: Vec<Limb>,
}

impl BigInt {
    /// The canonical zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            limbs: vec![0],
        }
    }

    /// Check whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Check whether this value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Core conversion: build a [`BigInt`] from an unsigned magnitude and a
    /// sign flag.
    ///
    /// Working on the unsigned value lets the minimum signed native values
    /// (whose positive counterparts do not fit their own type) convert
    /// without overflow.
    #[allow(clippy::cast_possible_truncation)]
    fn from_unsigned_with_sign(mut value: u128, negative: bool) -> Self {
        if value == 0 {
            return Self::zero();
        }

        let mut limbs = Vec::new();
        while value > 0 {
            limbs.push((value % u128::from(BASE)) as Limb);
            value /= u128::from(BASE);
        }

        Self { negative, limbs }
    }

    /// Magnitude addition, limb-wise with carry propagation.
    ///
    /// Precondition: `self` and `other` have the same sign, so the sign never
    /// changes here.
    fn magnitude_add(&mut self, other: &Self) {
        if self.limbs.len() < other.limbs.len() {
            self.limbs.resize(other.limbs.len(), 0);
        }

        let mut carry = 0;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let rhs = other.limbs.get(i).copied().unwrap_or(0);
            let (sum, next) = limb::add_with_carry(*limb, rhs, carry);
            *limb = sum;
            carry = next;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Magnitude subtraction, limb-wise with borrow propagation.
    ///
    /// Precondition: `self` and `other` have the same sign. When `other` has
    /// the larger magnitude the operands are conceptually swapped and the
    /// sign flips; this is the only place a subtraction can change the sign.
    fn magnitude_sub(&mut self, other: &Self) {
        let swapped = limb::compare(&self.limbs, &other.limbs) == Ordering::Less;
        if swapped {
            self.negative = !self.negative;
            self.limbs.resize(other.limbs.len(), 0);
        }

        let mut borrow = 0;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let (lhs, rhs) = if swapped {
                (other.limbs[i], *limb)
            } else {
                (*limb, other.limbs.get(i).copied().unwrap_or(0))
            };
            let (diff, next) = limb::sub_with_borrow(lhs, rhs, borrow);
            *limb = diff;
            borrow = next;
        }
        // The larger magnitude is on the left, so nothing can be left over.
        assert_eq!(borrow, 0, "leftover borrow after magnitude subtraction");

        limb::trim_leading_zeros(&mut self.limbs);
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Restore canonical zero after sign dispatch: the flip-back in
    /// [`AddAssign`]/[`SubAssign`] can otherwise reconstruct `-0`.
    fn canonicalize_zero(&mut self) {
        if self.is_zero() {
            self.negative = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

impl AddAssign<&BigInt> for BigInt {
    /// Sign dispatch: matching signs add magnitudes; mixed signs reduce to a
    /// magnitude subtraction under sign inversion.
    fn add_assign(&mut self, other: &BigInt) {
        if self.negative == other.negative {
            self.magnitude_add(other);
        } else {
            self.negative = !self.negative;
            *self -= other;
            self.negative = !self.negative;
        }
        self.canonicalize_zero();
    }
}

impl SubAssign<&BigInt> for BigInt {
    /// Sign dispatch: matching signs subtract magnitudes; mixed signs reduce
    /// to a magnitude addition under sign inversion.
    fn sub_assign(&mut self, other: &BigInt) {
        if self.negative == other.negative {
            self.magnitude_sub(other);
        } else {
            self.negative = !self.negative;
            *self += other;
            self.negative = !self.negative;
        }
        self.canonicalize_zero();
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, other: BigInt) {
        *self += &other;
    }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, other: BigInt) {
        *self -= &other;
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, other: &BigInt) -> BigInt {
        self += other;
        self
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, other: BigInt) -> BigInt {
        self += &other;
        self
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        self.clone() + other
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        self.clone() + &other
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, other: &BigInt) -> BigInt {
        self -= other;
        self
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, other: BigInt) -> BigInt {
        self -= &other;
        self
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        self.clone() - other
    }
}

impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        self.clone() - &other
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    /// Flip the sign. Zero stays non-negative.
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_zero() && other.is_zero() {
            return Ordering::Equal;
        }

        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        // Same sign: magnitude order, reversed for negatives (the shorter
        // magnitude is closer to zero, hence greater).
        let magnitudes = limb::compare(&self.limbs, &other.limbs);
        if self.negative {
            magnitudes.reverse()
        } else {
            magnitudes
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_unsigned_with_sign(u128::from(value), false)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        // i64::MIN has no positive i64 counterpart; unsigned_abs avoids the
        // overflowing negation.
        Self::from_unsigned_with_sign(u128::from(value.unsigned_abs()), value < 0)
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        Self::from_unsigned_with_sign(value, false)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        Self::from_unsigned_with_sign(value.unsigned_abs(), value < 0)
    }
}

// Smaller unsigned types — widen to u64
impl From<u8> for BigInt {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u16> for BigInt {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

// Smaller signed types — widen to i64
impl From<i8> for BigInt {
    fn from(value: i8) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i16> for BigInt {
    fn from(value: i16) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, limbs) = text::parse_decimal(s)?;
        Ok(Self { negative, limbs })
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_decimal(f, self.negative, &self.limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn test_zero_is_canonical() {
        let zero = BigInt::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(zero.to_string(), "0");
        assert_eq!(BigInt::default(), zero);
    }

    #[test]
    fn test_neg_flips_sign_but_not_zero() {
        let a = bi("42");
        assert_eq!((-&a).to_string(), "-42");
        assert_eq!((-(-&a)).to_string(), "42");

        let zero = BigInt::zero();
        assert!(!(-zero).is_negative());
    }

    #[test]
    fn test_from_u64_matches_parse() {
        let cases: &[u64] = &[0, 1, 9, 42, 999_999_999, 1_000_000_000, 123_456_789, u64::MAX];
        for &n in cases {
            assert_eq!(
                BigInt::from(n),
                bi(&n.to_string()),
                "From<u64> mismatch for {n}"
            );
        }
    }

    #[test]
    fn test_from_i64_matches_parse() {
        let cases: &[i64] = &[
            i64::MIN,
            -123_456_789,
            -1_000_000_000,
            -1,
            0,
            1,
            1_000_000_000,
            123_456_789,
            i64::MAX,
        ];
        for &n in cases {
            assert_eq!(
                BigInt::from(n),
                bi(&n.to_string()),
                "From<i64> mismatch for {n}"
            );
        }
    }

    #[test]
    fn test_from_i128_extremes() {
        let cases: &[i128] = &[i128::MIN, -1, 0, 1, i128::MAX];
        for &n in cases {
            assert_eq!(BigInt::from(n).to_string(), n.to_string());
        }
    }

    #[test]
    fn test_from_u128_max() {
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_from_small_types_widen() {
        assert_eq!(BigInt::from(42_u8), BigInt::from(42_u64));
        assert_eq!(BigInt::from(42_u16), BigInt::from(42_u64));
        assert_eq!(BigInt::from(42_u32), BigInt::from(42_u64));
        assert_eq!(BigInt::from(-7_i8), BigInt::from(-7_i64));
        assert_eq!(BigInt::from(-7_i16), BigInt::from(-7_i64));
        assert_eq!(BigInt::from(-7_i32), BigInt::from(-7_i64));
    }

    #[test]
    fn test_add_carry_across_limbs() {
        assert_eq!((bi("999999999") + bi("1")).to_string(), "1000000000");
        assert_eq!(
            (bi("999999999999999999") + bi("1")).to_string(),
            "1000000000000000000"
        );
        // Carry ripples through the longer operand past the shorter one
        assert_eq!(
            (bi("1") + bi("1000000000000000000000000002")).to_string(),
            "1000000000000000000000000003"
        );
    }

    #[test]
    fn test_add_appends_final_carry_limb() {
        let sum = bi("123456789123456789") + bi("123456789123456789");
        assert_eq!(sum.to_string(), "246913578246913578");

        let overflow = bi("999999999999999999") + bi("999999999999999999");
        assert_eq!(overflow.to_string(), "1999999999999999998");
    }

    #[test]
    fn test_sub_borrow_across_limbs() {
        assert_eq!((bi("1000000000") - bi("1")).to_string(), "999999999");
        assert_eq!(
            (bi("1000000000000000000") - bi("1")).to_string(),
            "999999999999999999"
        );
    }

    #[test]
    fn test_sub_swaps_and_flips_sign() {
        assert_eq!(
            (bi("1000000000000000000000000001") - bi("1000000000000000000000000002"))
                .to_string(),
            "-1"
        );
        assert_eq!(
            (bi("0") - bi("123456789123456789123456789")).to_string(),
            "-123456789123456789123456789"
        );
    }

    #[test]
    fn test_sub_equal_operands_gives_canonical_zero() {
        for text in ["0", "7", "-7", "123456789123456789123456789"] {
            let a = bi(text);
            let diff = &a - &a;
            assert!(diff.is_zero(), "{text} - {text} should be zero");
            assert!(!diff.is_negative(), "{text} - {text} must not be -0");
            assert_eq!(diff.to_string(), "0");
        }
    }

    #[test]
    fn test_mixed_sign_add_landing_on_zero_is_canonical() {
        // The dispatch path flips signs around the inner subtraction; the
        // result must still come out as non-negative zero.
        let sum = bi("1") + bi("-1");
        assert!(sum.is_zero());
        assert!(!sum.is_negative());
        assert_eq!(sum.to_string(), "0");

        let diff = bi("-5") - bi("-5");
        assert!(!diff.is_negative());
    }

    #[test]
    fn test_assign_variants_match_binary_ops() {
        let mut a = bi("123456789123456789");
        a += bi("1");
        assert_eq!(a, bi("123456789123456790"));

        a -= &bi("123456789123456790");
        assert!(a.is_zero());
    }

    #[test]
    fn test_ordering_across_signs() {
        let negative = bi("-123456789123456789123456789");
        let zero = BigInt::zero();
        let positive = bi("123456789123456789123456789");

        assert!(negative < zero);
        assert!(zero < positive);
        assert!(negative < positive);
    }

    #[test]
    fn test_ordering_negative_length_shortcut() {
        // Fewer limbs with a negative sign means closer to zero, so greater
        let short = bi("-5");
        let long = bi("-1000000000000000000");
        assert!(long < short);
        assert!(short > long);
    }

    #[test]
    fn test_ordering_equal_length_scan() {
        assert!(bi("123456789000000001") < bi("123456789000000002"));
        assert!(bi("-123456789000000001") > bi("-123456789000000002"));
    }

    #[test]
    fn test_equality_through_parse() {
        assert_eq!(bi("000123"), bi("123"));
        assert_eq!(bi("-0"), bi("0"));
        assert_ne!(bi("123"), bi("-123"));
    }
}
