use crate::double_width::DoubleWidth;
use crate::error::{Error, fatal};
use crate::limb::Limb;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

// The operators trap on overflow, on a zero divisor and on `MIN / -1`.
// The `overflowing_*`, `wrapping_*` and `checked_*` methods are the non-trapping forms.

macro_rules! impl_trapping_op {
	($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $overflowing:ident, $what:literal) => {
		impl<H: Limb> $Op for DoubleWidth<H> {
			type Output = Self;

			#[inline]
			#[track_caller]
			fn $op(self, rhs: Self) -> Self {
				match self.$overflowing(rhs) {
					(value, false) => value,
					_ => fatal(Error::new_overflow($what)),
				}
			}
		}

		impl<H: Limb> $OpAssign for DoubleWidth<H> {
			#[inline]
			#[track_caller]
			fn $op_assign(&mut self, rhs: Self) {
				*self = $Op::$op(*self, rhs);
			}
		}
	};
}

impl_trapping_op!(Add, add, AddAssign, add_assign, overflowing_add, "DoubleWidth::add()");
impl_trapping_op!(Sub, sub, SubAssign, sub_assign, overflowing_sub, "DoubleWidth::sub()");
impl_trapping_op!(Mul, mul, MulAssign, mul_assign, overflowing_mul, "DoubleWidth::mul()");
impl_trapping_op!(Div, div, DivAssign, div_assign, overflowing_div, "DoubleWidth::div()");
impl_trapping_op!(Rem, rem, RemAssign, rem_assign, overflowing_rem, "DoubleWidth::rem()");

impl<H: Limb> Neg for DoubleWidth<H> {
	type Output = Self;

	#[inline]
	#[track_caller]
	fn neg(self) -> Self {
		match self.overflowing_neg() {
			(value, false) => value,
			_ => fatal(Error::new_overflow("DoubleWidth::neg()")),
		}
	}
}
