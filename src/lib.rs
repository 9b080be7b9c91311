//! Fixed-width integers built by doubling a narrower integer.
//!
//! `DoubleWidth<H>` stores a value as a signed or unsigned `high` limb and an unsigned `low`
//! limb. It implements `Limb` itself, so the construction nests:
//!
//! ```
//! use x17wide::DoubleWidth;
//!
//! type I128 = DoubleWidth<i64>;
//! type I256 = DoubleWidth<I128>;
//!
//! let a = I128::from_value(2241543570477705381_i64);
//! let b = I128::from_value(186319822866995413_i64);
//! let (high, low) = a.widening_mul(b);
//! assert!(high.is_zero());
//! assert_eq!(I128::from_bits(low).quotient_and_remainder(b), (a, I128::ZERO));
//!
//! assert_eq!(I256::MIN.leading_zeros(), 0);
//! ```
//!
//! Every operation comes in an overflow-reporting form (`overflowing_*`, `checked_*`,
//! `wrapping_*`) and a trapping form (the `std::ops` operators), which aborts through
//! `error::fatal()`.

pub mod error;
pub mod limb;

mod arith;
mod bitwise;
mod convert;
mod div;
mod double_width;
mod inspect;
mod mul;
mod ops;

pub use convert::NativeInt;
pub use double_width::{DoubleWidth, Low};
pub use error::{Error, ErrorKind};
pub use limb::{Limb, WORD_BITS, Word, Words};

/// Builds a `DoubleWidth` from its `(high, low)` limbs.
#[macro_export]
macro_rules! dw {
	($high:expr, $low:expr $(,)?) => {
		$crate::DoubleWidth::from_parts($high, $low)
	};
}
