use crate::double_width::{DoubleWidth, Low};
use crate::error::{Error, cold_path, fatal};
use crate::limb::Limb;

impl<H: Limb> DoubleWidth<H> {
	/// Truncating division: the quotient is rounded toward zero and the remainder has the
	/// sign of `self`.
	///
	/// Aborts if `rhs` is zero or if the quotient overflows (`MIN / -1`).
	#[track_caller]
	pub fn quotient_and_remainder(self, rhs: Self) -> (Self, Self) {
		if rhs.is_zero() || self.__is_min_div_minus_one(rhs) {
			fatal(Error::new_overflow("DoubleWidth::quotient_and_remainder()"));
		}
		self.__quotient_and_remainder(rhs)
	}

	/// Returns:
	///     (quotient, overflow)
	///
	/// For a zero `rhs` and for `MIN / -1` the overflow is reported and `self` is returned.
	#[inline]
	pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
		if rhs.is_zero() || self.__is_min_div_minus_one(rhs) {
			cold_path();
			return (self, true);
		}
		(self.__quotient_and_remainder(rhs).0, false)
	}

	/// Returns:
	///     (remainder, overflow)
	///
	/// For a zero `rhs` and for `MIN % -1` the overflow is reported and `self` is returned.
	#[inline]
	pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
		if rhs.is_zero() || self.__is_min_div_minus_one(rhs) {
			cold_path();
			return (self, true);
		}
		(self.__quotient_and_remainder(rhs).1, false)
	}

	#[inline]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		match self.overflowing_div(rhs) {
			(value, false) => Some(value),
			_ => None,
		}
	}

	#[inline]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		match self.overflowing_rem(rhs) {
			(value, false) => Some(value),
			_ => None,
		}
	}

	/// `MIN / -1` wraps to `MIN`. Aborts if `rhs` is zero.
	#[track_caller]
	pub fn wrapping_div(self, rhs: Self) -> Self {
		if rhs.is_zero() {
			fatal(Error::new_overflow("DoubleWidth::wrapping_div()"));
		}
		if self.__is_min_div_minus_one(rhs) {
			return Self::MIN;
		}
		self.__quotient_and_remainder(rhs).0
	}

	/// `MIN % -1` wraps to zero. Aborts if `rhs` is zero.
	#[track_caller]
	pub fn wrapping_rem(self, rhs: Self) -> Self {
		if rhs.is_zero() {
			fatal(Error::new_overflow("DoubleWidth::wrapping_rem()"));
		}
		if self.__is_min_div_minus_one(rhs) {
			return Self::ZERO;
		}
		self.__quotient_and_remainder(rhs).1
	}

	/// Divides a dividend twice as wide as `self`, given as `(high, low)`, by `self`.
	///
	/// Returns:
	///     (quotient, remainder)
	///
	/// The quotient is truncated to `BITS` bits when it does not fit. This is logged as a
	/// warning, but not reported. Use `dividing_full_width_reporting_overflow()` when the
	/// caller cannot guarantee `|high| < |self|`. Aborts if `self` is zero.
	#[track_caller]
	pub fn dividing_full_width(self, dividend: (Self, DoubleWidth<Low<H>>)) -> (Self, Self) {
		if self.is_zero() {
			fatal(Error::new_overflow("DoubleWidth::dividing_full_width()"));
		}
		let (result, overflow) = self.dividing_full_width_reporting_overflow(dividend);
		if overflow {
			log::warn!(
				"DoubleWidth::dividing_full_width(): quotient truncated to {} bits",
				Self::BITS
			);
		}
		result
	}

	/// Like `dividing_full_width()`, but reports whether the quotient fits `Self`.
	///
	/// Returns:
	///     ((quotient, remainder), overflow)
	///
	/// The remainder always fits. For a zero divisor the overflow is reported and the
	/// result is the truncated dividend and zero.
	pub fn dividing_full_width_reporting_overflow(
		self, dividend: (Self, DoubleWidth<Low<H>>),
	) -> ((Self, Self), bool) {
		// Widen both operands one more level and divide there.
		let lhs = DoubleWidth::<Self> { high: dividend.0, low: dividend.1 };
		let rhs = DoubleWidth::<Self>::from_limb(self);

		if rhs.is_zero() || lhs.__is_min_div_minus_one(rhs) {
			cold_path();
			return ((Self::from_bits(dividend.1), Self::ZERO), true);
		}

		let (quotient, remainder) = lhs.__quotient_and_remainder(rhs);
		let remainder = Self::from_bits(remainder.low);
		match Self::from_limb_exact(quotient) {
			Some(quotient) => ((quotient, remainder), false),
			None => ((Self::from_bits(quotient.low), remainder), true),
		}
	}

	#[inline]
	fn __is_min_div_minus_one(self, rhs: Self) -> bool {
		Self::SIGNED && self == Self::MIN && rhs == Self::all_ones()
	}

	/// Preconditions:
	/// - rhs != 0
	/// - !(self == MIN && rhs == -1)
	fn __quotient_and_remainder(self, rhs: Self) -> (Self, Self) {
		let negative_quotient = self.is_negative() != rhs.is_negative();
		let negative_remainder = self.is_negative();

		let (quotient, remainder) =
			DoubleWidth::<Low<H>>::__divide_magnitudes(self.magnitude(), rhs.magnitude());

		let quotient = Self::from_bits(quotient);
		let remainder = Self::from_bits(remainder);
		(
			if negative_quotient { quotient.wrapping_neg() } else { quotient },
			if negative_remainder { remainder.wrapping_neg() } else { remainder },
		)
	}

	/// Restoring long division of unsigned values.
	///
	/// Preconditions:
	/// - `Self` is unsigned
	/// - rhs != 0
	fn __divide_magnitudes(lhs: Self, rhs: Self) -> (Self, Self) {
		debug_assert!(!Self::SIGNED);
		debug_assert!(!rhs.is_zero());

		let lhs_zeros = lhs.leading_zeros();
		let rhs_zeros = rhs.leading_zeros();
		if rhs_zeros < lhs_zeros {
			// rhs > lhs
			return (Self::ZERO, lhs);
		}

		// The quotient has at most `BITS - skipped` significant bits. The top `skipped` bits
		// of `lhs` are smaller than `rhs`, so they can go to the remainder right away.
		let skipped = lhs_zeros + (Self::BITS - rhs_zeros) - 1;
		let mut remainder = lhs.smart_shr((Self::BITS - skipped) as i64);
		let mut dividend = lhs.masked_shl(skipped);
		let mut quotient = Self::ZERO;

		log::trace!(
			"DoubleWidth: {}-bit division, {} quotient bits to compute",
			Self::BITS,
			Self::BITS - skipped
		);

		for _ in skipped..Self::BITS {
			let top_bit = dividend.leading_zeros() == 0;
			remainder = remainder.masked_shl(1) | if top_bit { Self::ONE } else { Self::ZERO };
			dividend = dividend.masked_shl(1);
			quotient = quotient.masked_shl(1);

			if remainder >= rhs {
				remainder = remainder.wrapping_sub(rhs);
				quotient = quotient | Self::ONE;
			}
		}

		(quotient, remainder)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::{init_logging, samples_i128, samples_i16, samples_u128, samples_u16};

	type I16 = DoubleWidth<i8>;
	type U16 = DoubleWidth<u8>;
	type I128 = DoubleWidth<i64>;
	type U128 = DoubleWidth<u64>;

	#[test]
	fn test_full_width_scenario() {
		init_logging();
		let product = I128::from_parts(22640526660490081, 7959093232766896457);
		let divisor = I128::from_parts(0, 2241543570477705381);
		assert_eq!(product.quotient_and_remainder(divisor), (I128::from_value(186319822866995413_i64), I128::ZERO));
	}

	#[test]
	fn test_div_16() {
		for a in samples_i16() {
			for b in samples_i16() {
				let (x, y) = (I16::from_value(a), I16::from_value(b));
				let expected = if b == 0 { (a, true) } else { a.overflowing_div(b) };
				assert_eq!(x.overflowing_div(y), (I16::from_value(expected.0), expected.1), "{} / {}", a, b);

				let expected = match a.checked_rem(b) {
					Some(r) => (r, false),
					None => (a, true),
				};
				assert_eq!(x.overflowing_rem(y), (I16::from_value(expected.0), expected.1), "{} % {}", a, b);
			}
		}
		for a in samples_u16() {
			for b in samples_u16() {
				let (x, y) = (U16::from_value(a), U16::from_value(b));
				assert_eq!(x.checked_div(y), a.checked_div(b).map(U16::from_value));
				assert_eq!(x.checked_rem(y), a.checked_rem(b).map(U16::from_value));
			}
		}
	}

	#[test]
	fn test_div_128() {
		for a in samples_i128() {
			for b in samples_i128() {
				let (x, y) = (I128::from_value(a), I128::from_value(b));
				assert_eq!(x.checked_div(y), a.checked_div(b).map(I128::from_value), "{} / {}", a, b);
				assert_eq!(x.checked_rem(y), a.checked_rem(b).map(I128::from_value), "{} % {}", a, b);
			}
		}
		for a in samples_u128() {
			for b in samples_u128() {
				let (x, y) = (U128::from_value(a), U128::from_value(b));
				assert_eq!(x.checked_div(y), a.checked_div(b).map(U128::from_value));
				assert_eq!(x.checked_rem(y), a.checked_rem(b).map(U128::from_value));
			}
		}
	}

	#[test]
	fn test_div_identities() {
		for a in samples_i128() {
			for b in samples_i128() {
				let (x, y) = (I128::from_value(a), I128::from_value(b));
				let (Some(q), Some(r)) = (x.checked_div(y), x.checked_rem(y)) else {
					continue;
				};
				assert_eq!(q.checked_mul(y).and_then(|p| p.checked_add(r)), Some(x));
				assert!(r.is_zero() || r.is_negative() == x.is_negative());
				assert!(r.magnitude() < y.magnitude());
			}
		}
	}

	#[test]
	fn test_div_overflow() {
		let minus_one = I128::from_value(-1);
		assert_eq!(I128::MIN.overflowing_div(minus_one), (I128::MIN, true));
		assert_eq!(I128::MIN.overflowing_rem(minus_one), (I128::MIN, true));
		assert_eq!(I128::from_value(5).overflowing_div(I128::ZERO), (I128::from_value(5), true));
		assert_eq!(U128::MAX.overflowing_rem(U128::ZERO), (U128::MAX, true));
		assert_eq!(I128::MIN.overflowing_div(I128::ONE), (I128::MIN, false));
		assert_eq!(I128::MIN.checked_div(I128::from_value(2)), Some(I128::from_value(i128::MIN / 2)));

		assert_eq!(I128::MIN.wrapping_div(minus_one), I128::MIN);
		assert_eq!(I128::MIN.wrapping_rem(minus_one), I128::ZERO);
		assert_eq!(I128::from_value(-7).wrapping_div(I128::from_value(2)), I128::from_value(-3));
		assert_eq!(I128::from_value(-7).wrapping_rem(I128::from_value(2)), I128::from_value(-1));
	}

	#[test]
	#[should_panic(expected = "DoubleWidth::wrapping_rem()")]
	fn test_wrapping_rem_by_zero() {
		let _ = U128::ONE.wrapping_rem(U128::ZERO);
	}

	#[test]
	#[should_panic(expected = "DoubleWidth::quotient_and_remainder()")]
	fn test_div_by_zero_traps() {
		let _ = I128::ONE.quotient_and_remainder(I128::ZERO);
	}

	#[test]
	fn test_dividing_full_width() {
		init_logging();
		let three = I128::from_value(3);
		let dividend = (I128::ZERO, U128::from_value(i128::MAX as u128));
		let quotient = I128::from_value(56713727820156410577229101238628035242_i128);
		assert_eq!(three.dividing_full_width(dividend), (quotient, I128::ONE));

		// -(2**120 + 7) sign-extended to 256 bits
		let dividend = (I128::from_value(-1), I128::from_value(-((1_i128 << 120) + 7)).to_bits());
		let (result, overflow) =
			I128::from_value(1000003).dividing_full_width_reporting_overflow(dividend);
		assert_eq!(
			result,
			(I128::from_value(-1329224008112891534229204372667_i128), I128::from_value(-226582))
		);
		assert_eq!(overflow, false);
	}

	#[test]
	fn test_dividing_full_width_truncates() {
		init_logging();
		// 2**128 / 1 does not fit 128 bits
		let dividend = (I128::ONE, U128::ZERO);
		assert_eq!(I128::ONE.dividing_full_width_reporting_overflow(dividend), ((I128::ZERO, I128::ZERO), true));
		assert_eq!(I128::ONE.dividing_full_width(dividend), (I128::ZERO, I128::ZERO));

		// (2**129 + 5) / 2
		let dividend = (U128::from_value(2), U128::from_value(5));
		let ((_, remainder), overflow) = U128::from_value(2).dividing_full_width_reporting_overflow(dividend);
		assert_eq!((remainder, overflow), (U128::ONE, true));

		let dividend = DoubleWidth::<I128>::from_value(7).into_parts();
		assert_eq!(I128::ZERO.dividing_full_width_reporting_overflow(dividend).1, true);
	}

	#[test]
	fn test_widening_mul_then_divide() {
		for a in samples_i128() {
			for b in samples_i128() {
				if b == 0 {
					continue;
				}
				let (x, y) = (I128::from_value(a), I128::from_value(b));
				let product = x.widening_mul(y);
				assert_eq!(y.dividing_full_width_reporting_overflow(product), ((x, I128::ZERO), false));
			}
		}
		for a in samples_u128() {
			for b in samples_u128() {
				if b == 0 {
					continue;
				}
				let (x, y) = (U128::from_value(a), U128::from_value(b));
				let (high, low) = x.widening_mul(y);
				assert_eq!(y.dividing_full_width((high, low)), (x, U128::ZERO));
			}
		}
	}

	#[test]
	fn test_nested_div() {
		type I32 = DoubleWidth<I16>;
		for a in [i32::MIN, -1_000_000_007, -65536, -1, 0, 1, 65535, 999_999_937, i32::MAX] {
			for b in [i32::MIN, -65537, -3, -1, 1, 2, 255, 65536, i32::MAX] {
				let (x, y) = (I32::from_value(a), I32::from_value(b));
				assert_eq!(x.checked_div(y), a.checked_div(b).map(I32::from_value), "{} / {}", a, b);
				assert_eq!(x.checked_rem(y), a.checked_rem(b).map(I32::from_value), "{} % {}", a, b);
			}
		}
	}
}
