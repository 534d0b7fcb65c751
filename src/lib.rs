//! # decint
//!
//! Arbitrary-precision signed integers with decimal-oriented storage.
//!
//! A [`BigInt`] keeps its magnitude as base-10^9 limbs, least-significant
//! limb first. The base is chosen so that two limbs multiply without
//! overflowing a 64-bit accumulator and each limb maps to exactly nine
//! decimal characters, which makes parsing and formatting straight chunk
//! conversions.
//!
//! Supported operations: construction from decimal text or any native
//! integer type, addition, subtraction, negation, total ordering, and
//! canonical decimal formatting. Parsing and formatting are exact inverses:
//! for every value `x`, `x.to_string().parse()` returns `x` again. Canonical
//! form is unique: no leading zero limbs, and zero is always non-negative,
//! so `"-0"` parses to plain zero.
//!
//! ## Examples
//!
//! ```rust
//! use decint::BigInt;
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b: BigInt = "-23456789123456789".parse().unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "100000000000000000");
//! assert_eq!((&a - &a).to_string(), "0");
//! assert!(b < a);
//! ```
//!
//! Values are plain owned data: cloning deep-copies the limbs, no operation
//! shares state, and there is no internal synchronization to pay for.

pub(crate) mod error;
pub(crate) mod integer;
pub(crate) mod limb;
pub(crate) mod text;

// Re-export main types
pub use error::{ParseBigIntError, ParseResult};
pub use integer::BigInt;
