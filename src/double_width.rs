use crate::limb::{Limb, Word, Words};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// The unsigned half of a `DoubleWidth<H>`.
pub type Low<H> = <H as Limb>::Magnitude;

/// A fixed-width integer twice as wide as `H`.
///
/// The value is `high * 2**H::BITS + low` in two's complement. `low` is always unsigned and
/// `high` carries the sign, so `DoubleWidth<i64>` is a signed 128-bit integer and
/// `DoubleWidth<u64>` an unsigned one. Since `DoubleWidth<H>` is itself a `Limb`,
/// `DoubleWidth<DoubleWidth<i64>>` is a signed 256-bit integer, and so on.
///
/// The intended use is holding full-width intermediate results of native arithmetic,
/// e.g. the 128-bit product of two 64-bit values, as a first-class value.
#[derive(Clone, Copy)]
pub struct DoubleWidth<H: Limb> {
	pub(crate) high: H,
	pub(crate) low: Low<H>,
}

impl<H: Limb> DoubleWidth<H> {
	pub const BITS: u32 = 2 * H::BITS;
	pub const SIGNED: bool = H::SIGNED;

	pub const ZERO: Self = Self { high: H::ZERO, low: <Low<H> as Limb>::ZERO };
	pub const ONE: Self = Self { high: H::ZERO, low: <Low<H> as Limb>::ONE };
	pub const MIN: Self = Self { high: H::MIN, low: <Low<H> as Limb>::MIN };
	pub const MAX: Self = Self { high: H::MAX, low: <Low<H> as Limb>::MAX };

	#[inline]
	pub const fn zero() -> Self {
		Self::ZERO
	}

	#[inline]
	pub const fn from_parts(high: H, low: Low<H>) -> Self {
		Self { high, low }
	}

	#[inline]
	pub const fn high(self) -> H {
		self.high
	}

	#[inline]
	pub const fn low(self) -> Low<H> {
		self.low
	}

	#[inline]
	pub const fn into_parts(self) -> (H, Low<H>) {
		(self.high, self.low)
	}

	#[inline]
	pub fn is_zero(self) -> bool {
		self == Self::ZERO
	}

	#[inline]
	pub fn is_negative(self) -> bool {
		self.high.is_negative()
	}

	/// Reinterprets the bits as the unsigned counterpart.
	#[inline]
	pub fn to_bits(self) -> DoubleWidth<Low<H>> {
		DoubleWidth { high: self.high.to_bits(), low: self.low }
	}

	#[inline]
	pub fn from_bits(bits: DoubleWidth<Low<H>>) -> Self {
		Self { high: H::from_bits(bits.high), low: bits.low }
	}

	/// All bits set, i.e. `-1` for signed and `MAX` for unsigned types.
	#[inline]
	pub(crate) fn all_ones() -> Self {
		!Self::ZERO
	}

	/// The value `self` would have if it was sign-extended to twice its width and then
	/// split. This is `all_ones()` for negative values and zero otherwise.
	#[inline]
	pub(crate) fn sign_fill(self) -> Self {
		if self.is_negative() { Self::all_ones() } else { Self::ZERO }
	}
}

impl<H: Limb> Default for DoubleWidth<H> {
	#[inline]
	fn default() -> Self {
		Self::ZERO
	}
}

//--------------------------------------------------------------------------------------------------
// ordering & identity

impl<H: Limb> PartialEq for DoubleWidth<H> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.high == other.high && self.low == other.low
	}
}

impl<H: Limb> Eq for DoubleWidth<H> {}

impl<H: Limb> Ord for DoubleWidth<H> {
	/// `high` carries the sign, so comparing it first orders signed values correctly.
	/// `low` is unsigned in both cases.
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.high.cmp(&other.high).then_with(|| self.low.cmp(&other.low))
	}
}

impl<H: Limb> PartialOrd for DoubleWidth<H> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<H: Limb> Hash for DoubleWidth<H> {
	fn hash<S: Hasher>(&self, state: &mut S) {
		// Hashers are order-sensitive, so (a, b) and (b, a) feed different streams.
		self.high.hash(state);
		self.low.hash(state);
	}
}

impl<H: Limb> std::fmt::Debug for DoubleWidth<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DoubleWidth").field("high", &self.high).field("low", &self.low).finish()
	}
}

//--------------------------------------------------------------------------------------------------
// nesting

impl<H: Limb> Limb for DoubleWidth<H> {
	type Magnitude = DoubleWidth<Low<H>>;

	const BITS: u32 = 2 * H::BITS;
	const SIGNED: bool = H::SIGNED;
	const ZERO: Self = Self { high: H::ZERO, low: <Low<H> as Limb>::ZERO };
	const ONE: Self = Self { high: H::ZERO, low: <Low<H> as Limb>::ONE };
	const MIN: Self = Self { high: H::MIN, low: <Low<H> as Limb>::MIN };
	const MAX: Self = Self { high: H::MAX, low: <Low<H> as Limb>::MAX };

	#[inline]
	fn is_negative(self) -> bool {
		DoubleWidth::is_negative(self)
	}

	#[inline]
	fn to_bits(self) -> Self::Magnitude {
		DoubleWidth::to_bits(self)
	}

	#[inline]
	fn from_bits(bits: Self::Magnitude) -> Self {
		DoubleWidth::from_bits(bits)
	}

	#[inline]
	fn magnitude(self) -> Self::Magnitude {
		DoubleWidth::magnitude(self)
	}

	#[inline]
	fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		DoubleWidth::overflowing_add(self, rhs)
	}

	#[inline]
	fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		DoubleWidth::overflowing_sub(self, rhs)
	}

	#[inline]
	fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		DoubleWidth::overflowing_mul(self, rhs)
	}

	#[inline]
	fn widening_mul(self, rhs: Self) -> (Self, Self::Magnitude) {
		DoubleWidth::widening_mul(self, rhs)
	}

	#[inline]
	fn overflowing_div(self, rhs: Self) -> (Self, bool) {
		DoubleWidth::overflowing_div(self, rhs)
	}

	#[inline]
	fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
		DoubleWidth::overflowing_rem(self, rhs)
	}

	#[inline]
	fn masked_shl(self, rhs: u32) -> Self {
		DoubleWidth::masked_shl(self, rhs)
	}

	#[inline]
	fn masked_shr(self, rhs: u32) -> Self {
		DoubleWidth::masked_shr(self, rhs)
	}

	#[inline]
	fn leading_zeros(self) -> u32 {
		DoubleWidth::leading_zeros(self)
	}

	#[inline]
	fn trailing_zeros(self) -> u32 {
		DoubleWidth::trailing_zeros(self)
	}

	#[inline]
	fn count_ones(self) -> u32 {
		DoubleWidth::count_ones(self)
	}

	#[inline]
	fn swap_bytes(self) -> Self {
		DoubleWidth::swap_bytes(self)
	}

	#[inline]
	fn words(self) -> Words {
		DoubleWidth::words(self)
	}

	#[inline]
	fn from_word_truncating(word: Word) -> Self {
		DoubleWidth::from_truncating_bits(word)
	}

	#[inline]
	fn from_i128_truncating(value: i128) -> Self {
		DoubleWidth::__from_i128_truncating(value)
	}

	#[inline]
	fn from_u128_truncating(value: u128) -> Self {
		DoubleWidth::__from_u128_truncating(value)
	}

	#[inline]
	fn from_i128_exact(value: i128) -> Option<Self> {
		DoubleWidth::__from_i128_exact(value)
	}

	#[inline]
	fn from_u128_exact(value: u128) -> Option<Self> {
		DoubleWidth::__from_u128_exact(value)
	}

	#[inline]
	fn to_i128_exact(self) -> Option<i128> {
		DoubleWidth::__to_i128_exact(self)
	}

	#[inline]
	fn to_u128_exact(self) -> Option<u128> {
		DoubleWidth::__to_u128_exact(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dw;
	use std::collections::HashSet;
	use std::hash::DefaultHasher;

	fn hash_of<T: Hash>(value: T) -> u64 {
		let mut hasher = DefaultHasher::new();
		value.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_parts() {
		let a = DoubleWidth::<i32>::from_parts(-7, 9);
		assert_eq!(a.high(), -7);
		assert_eq!(a.low(), 9);
		assert_eq!(a.into_parts(), (-7, 9));

		for high in [i8::MIN, -1, 0, 1, i8::MAX] {
			for low in [0, 1, 127, 128, u8::MAX] {
				let a = DoubleWidth::<i8>::from_parts(high, low);
				assert_eq!((a.high(), a.low()), (high, low));
			}
		}
	}

	#[test]
	fn test_constants() {
		assert_eq!(DoubleWidth::<i64>::BITS, 128);
		assert_eq!(DoubleWidth::<DoubleWidth<u8>>::BITS, 32);
		assert_eq!(DoubleWidth::<i64>::MIN, dw!(i64::MIN, 0));
		assert_eq!(DoubleWidth::<i64>::MAX, dw!(i64::MAX, u64::MAX));
		assert_eq!(DoubleWidth::<u64>::MIN, dw!(0_u64, 0));
		assert_eq!(DoubleWidth::<u64>::MAX, dw!(u64::MAX, u64::MAX));
		assert_eq!(DoubleWidth::<i16>::zero(), DoubleWidth::default());
		assert_eq!(DoubleWidth::<i16>::SIGNED, true);
		assert_eq!(<DoubleWidth<u16> as Limb>::SIGNED, false);
	}

	#[test]
	fn test_ordering() {
		let minus_one = dw!(-1_i64, u64::MAX);
		let zero = DoubleWidth::<i64>::ZERO;
		let big = dw!(0_i64, u64::MAX);
		let bigger = dw!(1_i64, 0);

		assert!(DoubleWidth::<i64>::MIN < minus_one);
		assert!(minus_one < zero);
		assert!(zero < big);
		assert!(big < bigger);
		assert!(bigger < DoubleWidth::<i64>::MAX);

		// `low` is compared as unsigned even for signed values
		assert!(dw!(-1_i64, 0) < dw!(-1_i64, u64::MAX));
		assert!(dw!(0_u64, u64::MAX) < dw!(1_u64, 0));
	}

	#[test]
	fn test_ordering_matches_native() {
		for a in (i16::MIN..=i16::MAX).step_by(251) {
			for b in (i16::MIN..=i16::MAX).step_by(257) {
				let x = DoubleWidth::<i8>::from_value(a);
				let y = DoubleWidth::<i8>::from_value(b);
				assert_eq!(x.cmp(&y), a.cmp(&b), "{} <=> {}", a, b);
				assert_eq!(x == y, a == b);
			}
		}
	}

	#[test]
	fn test_hash() {
		let a = dw!(3_u64, 5);
		let b = dw!(3_u64, 5);
		assert_eq!(hash_of(a), hash_of(b));
		assert_ne!(hash_of(dw!(3_u64, 5)), hash_of(dw!(5_u64, 3)));

		let set: HashSet<DoubleWidth<i32>> =
			(-100..100).map(|i| DoubleWidth::from_value(i * 1_000_000_007_i64)).collect();
		assert_eq!(set.len(), 200);
		assert!(set.contains(&DoubleWidth::from_value(-1_000_000_007_i64)));
	}

	#[test]
	fn test_debug() {
		let a = dw!(-1_i8, 2);
		assert_eq!(format!("{:?}", a), "DoubleWidth { high: -1, low: 2 }");
	}
}
