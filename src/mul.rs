use crate::double_width::{DoubleWidth, Low};
use crate::limb::{Limb, Word};

/// Returns:
///     (value, carries)
/// Where:
///     value = sum(terms) % 2**BITS
///     carries = sum(terms) / 2**BITS
#[inline]
fn add_lane<M: Limb, const N: usize>(terms: [M; N]) -> (M, Word) {
	let mut value = M::ZERO;
	let mut carries: Word = 0;
	for term in terms {
		let (sum, carry) = value.overflowing_add(term);
		value = sum;
		carries += carry as Word;
	}
	(value, carries)
}

impl<H: Limb> DoubleWidth<H> {
	/// Full product of `self` and `rhs`, nothing is discarded.
	///
	/// Returns:
	///     (high, low)
	/// Where:
	///     high * 2**BITS + low == self * rhs
	pub fn widening_mul(self, rhs: Self) -> (Self, DoubleWidth<Low<H>>) {
		let negative = self.is_negative() != rhs.is_negative();
		let a = self.magnitude();
		let b = rhs.magnitude();

		// (high, low) partial products of the limbs
		let ll = a.low.widening_mul(b.low);
		let lh = a.low.widening_mul(b.high);
		let hl = a.high.widening_mul(b.low);
		let hh = a.high.widening_mul(b.high);

		//          [ ll.0 ll.1 ]
		//     [ lh.0 lh.1 ]
		//     [ hl.0 hl.1 ]
		// [ hh.0 hh.1 ]
		let (r1, carries) = add_lane([ll.0, lh.1, hl.1]);
		let carry = <Low<H> as Limb>::from_word_truncating(carries);
		let (r2, carries) = add_lane([lh.0, hl.0, hh.1, carry]);
		let carry = <Low<H> as Limb>::from_word_truncating(carries);
		// the full product of two magnitudes always fits, so this cannot overflow
		let (r3, _) = hh.0.overflowing_add(carry);

		let high = DoubleWidth::<Low<H>> { high: r3, low: r2 };
		let low = DoubleWidth::<Low<H>> { high: r1, low: ll.1 };
		if !negative {
			return (Self::from_bits(high), low);
		}

		// negate the 4-limb value
		let (low, carry) = (!low).overflowing_add(DoubleWidth::ONE);
		let high = if carry { (!high).wrapping_add(DoubleWidth::ONE) } else { !high };
		(Self::from_bits(high), low)
	}

	/// Returns:
	///     (value, overflow)
	/// Where:
	///     value = (self * rhs) % 2**BITS
	///     overflow = self * rhs is not representable
	#[inline]
	pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let (high, low) = self.widening_mul(rhs);
		let value = Self::from_bits(low);

		// The product fits if the discarded half is just the sign extension of `value`:
		// all ones for a negative product, all zeros otherwise. For signed types this also
		// catches a non-negative product that landed on the sign bit.
		(value, high != value.sign_fill())
	}

	#[inline]
	pub fn wrapping_mul(self, rhs: Self) -> Self {
		self.overflowing_mul(rhs).0
	}

	#[inline]
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		match self.overflowing_mul(rhs) {
			(value, false) => Some(value),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dw;
	use crate::testutil::{samples_i128, samples_i16, samples_u128, samples_u16};

	type I16 = DoubleWidth<i8>;
	type U16 = DoubleWidth<u8>;
	type I128 = DoubleWidth<i64>;
	type U128 = DoubleWidth<u64>;

	#[test]
	fn test_full_width_scenario() {
		let (high, low) = Limb::widening_mul(2241543570477705381_i64, 186319822866995413_i64);
		assert_eq!((high, low), (22640526660490081, 7959093232766896457));

		let a = I128::from_value(2241543570477705381_i64);
		let b = I128::from_value(186319822866995413_i64);
		let (high, low) = a.widening_mul(b);
		assert_eq!(high, I128::ZERO);
		assert_eq!(low, dw!(22640526660490081_u64, 7959093232766896457));
	}

	#[test]
	fn test_widening_mul_i16() {
		for a in samples_i16() {
			for b in samples_i16() {
				let product = a as i32 * b as i32;
				let (high, low) = I16::from_value(a).widening_mul(I16::from_value(b));
				assert_eq!(high, I16::from_value((product >> 16) as i16), "{} * {}", a, b);
				assert_eq!(low, U16::from_value(product as u16), "{} * {}", a, b);
			}
		}
	}

	#[test]
	fn test_overflowing_mul_16() {
		for a in samples_i16() {
			for b in samples_i16() {
				let (value, overflow) = a.overflowing_mul(b);
				assert_eq!(
					I16::from_value(a).overflowing_mul(I16::from_value(b)),
					(I16::from_value(value), overflow),
					"{} * {}",
					a,
					b
				);
			}
		}
		for a in samples_u16() {
			for b in samples_u16() {
				let (value, overflow) = a.overflowing_mul(b);
				assert_eq!(
					U16::from_value(a).overflowing_mul(U16::from_value(b)),
					(U16::from_value(value), overflow)
				);
			}
		}
	}

	#[test]
	fn test_mul_128() {
		for a in samples_i128() {
			for b in samples_i128() {
				let (high, low) = Limb::widening_mul(a, b);
				let expected = (I128::from_value(high), U128::from_value(low));
				assert_eq!(I128::from_value(a).widening_mul(I128::from_value(b)), expected);

				let (value, overflow) = a.overflowing_mul(b);
				assert_eq!(
					I128::from_value(a).overflowing_mul(I128::from_value(b)),
					(I128::from_value(value), overflow),
					"{} * {}",
					a,
					b
				);
			}
		}
		for a in samples_u128() {
			for b in samples_u128() {
				let (high, low) = Limb::widening_mul(a, b);
				let expected = (U128::from_value(high), U128::from_value(low));
				assert_eq!(U128::from_value(a).widening_mul(U128::from_value(b)), expected);
				assert_eq!(U128::from_value(a).checked_mul(U128::from_value(b)).is_none(), high != 0);
			}
		}
	}

	#[test]
	fn test_mul_boundaries() {
		let minus_one = I128::from_value(-1);
		assert_eq!(I128::MIN.overflowing_mul(minus_one), (I128::MIN, true));
		assert_eq!(minus_one.overflowing_mul(I128::MIN), (I128::MIN, true));
		assert_eq!(I128::MIN.overflowing_mul(I128::ONE), (I128::MIN, false));
		assert_eq!(I128::from_value(-5).overflowing_mul(I128::ZERO), (I128::ZERO, false));
		assert_eq!(I128::ZERO.overflowing_mul(I128::from_value(-5)), (I128::ZERO, false));

		// 2**63 * 2**64 lands exactly on the sign bit
		let a = I128::from_value(1_i128 << 63);
		let b = I128::from_value(1_i128 << 64);
		assert_eq!(a.overflowing_mul(b), (I128::MIN, true));
		assert_eq!(a.overflowing_mul(b.wrapping_neg()), (I128::MIN, false));
	}

	#[test]
	fn test_nested_mul() {
		type U32 = DoubleWidth<U16>;
		type I32 = DoubleWidth<I16>;
		for a in [0_u32, 1, 3, 0xffff, 0x1_0001, 0xdead_beef, u32::MAX] {
			for b in [0_u32, 2, 0xffff, 0x8000_0000, u32::MAX] {
				let product = a as u64 * b as u64;
				let (high, low) = U32::from_value(a).widening_mul(U32::from_value(b));
				assert_eq!(high, U32::from_value((product >> 32) as u32));
				assert_eq!(low, U32::from_value(product as u32));
			}
		}
		for a in [i32::MIN, -65537, -1, 0, 1, 65535, i32::MAX] {
			for b in [i32::MIN, -3, -1, 0, 7, i32::MAX] {
				let (value, overflow) = a.overflowing_mul(b);
				assert_eq!(
					I32::from_value(a).overflowing_mul(I32::from_value(b)),
					(I32::from_value(value), overflow)
				);
			}
		}
	}
}
