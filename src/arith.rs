use crate::double_width::{DoubleWidth, Low};
use crate::limb::Limb;

impl<H: Limb> DoubleWidth<H> {
	/// Absolute value as the unsigned counterpart.
	///
	/// Never overflows: `MIN.magnitude() == 2**(BITS - 1)`.
	#[inline]
	pub fn magnitude(self) -> DoubleWidth<Low<H>> {
		let bits = self.to_bits();
		if !self.is_negative() {
			return bits;
		}

		// two's complement: invert both limbs, then add one across the limb boundary
		let (low, carry) = (!bits.low).overflowing_add(<Low<H> as Limb>::ONE);
		let high = !bits.high;
		let high = if carry { high.overflowing_add(<Low<H> as Limb>::ONE).0 } else { high };
		DoubleWidth { high, low }
	}

	/// Returns:
	///     (negative, magnitude)
	///
	/// This is what a radix formatter needs: it can print `magnitude` using unsigned
	/// arithmetic only and prepend the sign.
	#[inline]
	pub fn sign_and_magnitude(self) -> (bool, DoubleWidth<Low<H>>) {
		(self.is_negative(), self.magnitude())
	}

	/// Returns:
	///     (value, overflow)
	/// Where:
	///     value = (self + rhs) % 2**BITS
	///     overflow = self + rhs is not representable
	#[inline]
	pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let (low, carry) = self.low.overflowing_add(rhs.low);
		let (high, overflow) = self.high.overflowing_add(rhs.high);

		// The carry overflows `high` exactly when `high` already sits at `MAX`.
		let (high, carry_overflow) = if carry { high.overflowing_add(H::ONE) } else { (high, false) };

		// Both flags are set only for signed `high` that wrapped from `MIN - 1` to `MAX`
		// and was brought back to `MIN` by the carry. That sum is representable.
		(Self { high, low }, overflow != carry_overflow)
	}

	/// Returns:
	///     (value, overflow)
	/// Where:
	///     value = (self - rhs) % 2**BITS
	///     overflow = self - rhs is not representable
	#[inline]
	pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let (low, borrow) = self.low.overflowing_sub(rhs.low);
		let (high, overflow) = self.high.overflowing_sub(rhs.high);

		// The borrow overflows `high` exactly when `high` already sits at `MIN`.
		let (high, borrow_overflow) =
			if borrow { high.overflowing_sub(H::ONE) } else { (high, false) };

		(Self { high, low }, overflow != borrow_overflow)
	}

	/// Overflows for every non-zero unsigned value and for signed `MIN`.
	#[inline]
	pub fn overflowing_neg(self) -> (Self, bool) {
		Self::ZERO.overflowing_sub(self)
	}

	#[inline]
	pub fn wrapping_neg(self) -> Self {
		self.overflowing_neg().0
	}

	#[inline]
	pub fn checked_neg(self) -> Option<Self> {
		match self.overflowing_neg() {
			(value, false) => Some(value),
			_ => None,
		}
	}

	#[inline]
	pub fn wrapping_add(self, rhs: Self) -> Self {
		self.overflowing_add(rhs).0
	}

	#[inline]
	pub fn wrapping_sub(self, rhs: Self) -> Self {
		self.overflowing_sub(rhs).0
	}

	#[inline]
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		match self.overflowing_add(rhs) {
			(value, false) => Some(value),
			_ => None,
		}
	}

	#[inline]
	pub fn checked_sub(self, rhs: Self) -> Option<Self> {
		match self.overflowing_sub(rhs) {
			(value, false) => Some(value),
			_ => None,
		}
	}
}
