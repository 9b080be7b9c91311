use crate::double_width::{DoubleWidth, Low};
use crate::limb::Limb;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl<H: Limb> DoubleWidth<H> {
	/// Shifts left by `rhs % BITS`.
	pub fn masked_shl(self, rhs: u32) -> Self {
		let amount = rhs % Self::BITS;
		let limb_bits = <Low<H> as Limb>::BITS;

		if amount >= limb_bits {
			let high = H::from_bits(self.low.masked_shl(amount - limb_bits));
			return Self { high, low: <Low<H> as Limb>::ZERO };
		}
		if amount == 0 {
			return self;
		}

		// the top `amount` bits of `low` spill into `high`
		let spill = H::from_bits(self.low.masked_shr(limb_bits - amount));
		Self {
			high: self.high.masked_shl(amount) | spill,
			low: self.low.masked_shl(amount),
		}
	}

	/// Shifts right by `rhs % BITS`. The shift is arithmetic for signed types.
	pub fn masked_shr(self, rhs: u32) -> Self {
		let amount = rhs % Self::BITS;
		let limb_bits = <Low<H> as Limb>::BITS;

		if amount >= limb_bits {
			let high = if self.is_negative() { !H::ZERO } else { H::ZERO };
			let low = self.high.masked_shr(amount - limb_bits).to_bits();
			return Self { high, low };
		}
		if amount == 0 {
			return self;
		}

		// the bottom `amount` bits of `high` spill into `low`
		let spill = self.high.to_bits().masked_shl(limb_bits - amount);
		Self {
			high: self.high.masked_shr(amount),
			low: self.low.masked_shr(amount) | spill,
		}
	}

	/// Shifts left by `rhs`. A negative `rhs` shifts right, and `|rhs| >= BITS` shifts
	/// everything out.
	#[inline]
	pub fn smart_shl(self, rhs: i64) -> Self {
		<Self as Limb>::smart_shl(self, rhs)
	}

	/// Shifts right by `rhs`. A negative `rhs` shifts left, and `|rhs| >= BITS` leaves zero
	/// for non-negative values and all ones for negative ones.
	#[inline]
	pub fn smart_shr(self, rhs: i64) -> Self {
		<Self as Limb>::smart_shr(self, rhs)
	}
}

impl<H: Limb> Not for DoubleWidth<H> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self { high: !self.high, low: !self.low }
	}
}

macro_rules! impl_bit_op {
	($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
		impl<H: Limb> $Op for DoubleWidth<H> {
			type Output = Self;

			#[inline]
			fn $op(self, rhs: Self) -> Self {
				Self {
					high: $Op::$op(self.high, rhs.high),
					low: $Op::$op(self.low, rhs.low),
				}
			}
		}

		impl<H: Limb> $OpAssign for DoubleWidth<H> {
			#[inline]
			fn $op_assign(&mut self, rhs: Self) {
				*self = $Op::$op(*self, rhs);
			}
		}
	};
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

/// `<<` is the smart shift. Use `masked_shl()` for the masking one.
impl<H: Limb> Shl<i64> for DoubleWidth<H> {
	type Output = Self;

	#[inline]
	fn shl(self, rhs: i64) -> Self {
		self.smart_shl(rhs)
	}
}

/// `>>` is the smart shift. Use `masked_shr()` for the masking one.
impl<H: Limb> Shr<i64> for DoubleWidth<H> {
	type Output = Self;

	#[inline]
	fn shr(self, rhs: i64) -> Self {
		self.smart_shr(rhs)
	}
}

impl<H: Limb> ShlAssign<i64> for DoubleWidth<H> {
	#[inline]
	fn shl_assign(&mut self, rhs: i64) {
		*self = self.smart_shl(rhs);
	}
}

impl<H: Limb> ShrAssign<i64> for DoubleWidth<H> {
	#[inline]
	fn shr_assign(&mut self, rhs: i64) {
		*self = self.smart_shr(rhs);
	}
}
