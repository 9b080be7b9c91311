use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Machine word used by the word view and by literal construction.
pub type Word = usize;

pub const WORD_BITS: u32 = Word::BITS;

/// Bit pattern of a value as machine words, least significant first.
///
/// Four words cover 256 bits on 64-bit targets without touching the heap.
pub type Words = SmallVec<[Word; 4]>;

/// Capabilities a fixed-width integer must provide to be one half of a `DoubleWidth`.
///
/// `DoubleWidth<H>` implements this trait itself, so composites nest.
pub trait Limb:
	Copy
	+ Default
	+ Eq
	+ Ord
	+ Hash
	+ Debug
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Output = Self>
	+ BitOr<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
{
	/// The unsigned type with the same width. For unsigned limbs this is `Self`.
	type Magnitude: Limb<Magnitude = Self::Magnitude>;

	const BITS: u32;
	const SIGNED: bool;
	const ZERO: Self;
	const ONE: Self;
	const MIN: Self;
	const MAX: Self;

	#[inline]
	fn is_negative(self) -> bool {
		Self::SIGNED && self < Self::ZERO
	}

	/// Reinterprets the bits as the unsigned counterpart.
	fn to_bits(self) -> Self::Magnitude;

	/// Reinterprets unsigned bits as `Self`.
	fn from_bits(bits: Self::Magnitude) -> Self;

	/// Absolute value. Never overflows, `MIN.magnitude() == 2**(BITS - 1)`.
	fn magnitude(self) -> Self::Magnitude;

	fn overflowing_add(self, rhs: Self) -> (Self, bool);
	fn overflowing_sub(self, rhs: Self) -> (Self, bool);
	fn overflowing_mul(self, rhs: Self) -> (Self, bool);

	/// Returns:
	///     (high, low)
	/// Where:
	///     high * 2**BITS + low == self * rhs
	fn widening_mul(self, rhs: Self) -> (Self, Self::Magnitude);

	/// Reports overflow for a zero divisor and for `MIN / -1`, returning `self` in both cases.
	fn overflowing_div(self, rhs: Self) -> (Self, bool);

	/// Reports overflow for a zero divisor and for `MIN % -1`.
	fn overflowing_rem(self, rhs: Self) -> (Self, bool);

	/// Shifts left by `rhs % BITS`.
	fn masked_shl(self, rhs: u32) -> Self;

	/// Shifts right by `rhs % BITS`. The shift is arithmetic for signed types.
	fn masked_shr(self, rhs: u32) -> Self;

	/// Shifts left by `rhs`. Negative amounts shift right and amounts of `BITS` or more
	/// shift everything out.
	#[inline]
	fn smart_shl(self, rhs: i64) -> Self {
		if rhs < 0 { shr_saturating(self, rhs.unsigned_abs()) } else { shl_saturating(self, rhs as u64) }
	}

	/// Shifts right by `rhs`. Negative amounts shift left and amounts of `BITS` or more
	/// leave only the sign fill.
	#[inline]
	fn smart_shr(self, rhs: i64) -> Self {
		if rhs < 0 { shl_saturating(self, rhs.unsigned_abs()) } else { shr_saturating(self, rhs as u64) }
	}

	fn leading_zeros(self) -> u32;
	fn trailing_zeros(self) -> u32;
	fn count_ones(self) -> u32;
	fn swap_bytes(self) -> Self;

	/// The bit pattern as machine words, least significant first.
	/// Values narrower than a word are sign-extended into a single word.
	fn words(self) -> Words;

	/// Keeps the lowest `BITS` bits of `word`.
	fn from_word_truncating(word: Word) -> Self;

	/// Keeps the lowest `BITS` bits of `value`, sign-extending if `BITS > 128`.
	fn from_i128_truncating(value: i128) -> Self;

	/// Keeps the lowest `BITS` bits of `value`, zero-extending if `BITS > 128`.
	fn from_u128_truncating(value: u128) -> Self;

	fn from_i128_exact(value: i128) -> Option<Self>;
	fn from_u128_exact(value: u128) -> Option<Self>;
	fn to_i128_exact(self) -> Option<i128>;
	fn to_u128_exact(self) -> Option<u128>;
}

#[inline]
fn shl_saturating<L: Limb>(a: L, amount: u64) -> L {
	if amount >= L::BITS as u64 { L::ZERO } else { a.masked_shl(amount as u32) }
}

#[inline]
fn shr_saturating<L: Limb>(a: L, amount: u64) -> L {
	if amount < L::BITS as u64 {
		a.masked_shr(amount as u32)
	} else if a.is_negative() {
		!L::ZERO
	} else {
		L::ZERO
	}
}

//--------------------------------------------------------------------------------------------------
// primitive limbs

/// Returns:
///     (high, low)
/// Where:
///     high * 2**128 + low == a * b
#[inline]
const fn mul_u128(a: u128, b: u128) -> (u128, u128) {
	const HALF: u32 = 64;
	const MASK: u128 = u64::MAX as u128;

	let (a1, a0) = (a >> HALF, a & MASK);
	let (b1, b0) = (b >> HALF, b & MASK);

	let p00 = a0 * b0;
	let p01 = a0 * b1;
	let p10 = a1 * b0;
	let p11 = a1 * b1;

	// at most 3 * (2**64 - 1)
	let mid = (p00 >> HALF) + (p01 & MASK) + (p10 & MASK);

	let low = (p00 & MASK) | (mid << HALF);
	let high = p11 + (p01 >> HALF) + (p10 >> HALF) + (mid >> HALF);
	(high, low)
}

#[inline]
const fn mul_i128(a: i128, b: i128) -> (i128, u128) {
	let (high, low) = mul_u128(a.unsigned_abs(), b.unsigned_abs());
	if (a < 0) != (b < 0) {
		let low = (!low).wrapping_add(1);
		let high = (!high).wrapping_add((low == 0) as u128);
		(high as i128, low)
	} else {
		(high as i128, low)
	}
}

macro_rules! impl_limb {
	($t:ty, $u:ty, $signed:expr, |$a:ident, $b:ident| $widening_mul:expr) => {
		impl Limb for $t {
			type Magnitude = $u;

			const BITS: u32 = <$t>::BITS;
			const SIGNED: bool = $signed;
			const ZERO: Self = 0;
			const ONE: Self = 1;
			const MIN: Self = <$t>::MIN;
			const MAX: Self = <$t>::MAX;

			#[inline]
			fn to_bits(self) -> $u {
				self as $u
			}

			#[inline]
			fn from_bits(bits: $u) -> Self {
				bits as $t
			}

			#[inline]
			fn magnitude(self) -> $u {
				let bits = self as $u;
				if Limb::is_negative(self) { bits.wrapping_neg() } else { bits }
			}

			#[inline]
			fn overflowing_add(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_add(self, rhs)
			}

			#[inline]
			fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_sub(self, rhs)
			}

			#[inline]
			fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_mul(self, rhs)
			}

			#[inline]
			fn widening_mul(self, rhs: Self) -> (Self, $u) {
				let ($a, $b) = (self, rhs);
				$widening_mul
			}

			#[inline]
			fn overflowing_div(self, rhs: Self) -> (Self, bool) {
				if rhs == 0 { (self, true) } else { <$t>::overflowing_div(self, rhs) }
			}

			#[inline]
			fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
				if rhs == 0 { (self, true) } else { <$t>::overflowing_rem(self, rhs) }
			}

			#[inline]
			fn masked_shl(self, rhs: u32) -> Self {
				self.wrapping_shl(rhs)
			}

			#[inline]
			fn masked_shr(self, rhs: u32) -> Self {
				self.wrapping_shr(rhs)
			}

			#[inline]
			fn leading_zeros(self) -> u32 {
				<$t>::leading_zeros(self)
			}

			#[inline]
			fn trailing_zeros(self) -> u32 {
				<$t>::trailing_zeros(self)
			}

			#[inline]
			fn count_ones(self) -> u32 {
				<$t>::count_ones(self)
			}

			#[inline]
			fn swap_bytes(self) -> Self {
				<$t>::swap_bytes(self)
			}

			fn words(self) -> Words {
				// sign-extends signed types, zero-extends unsigned ones
				let bits = self as i128 as u128;
				let count = (Self::BITS / WORD_BITS).max(1);
				(0..count).map(|i| (bits >> (i * WORD_BITS)) as Word).collect()
			}

			#[inline]
			fn from_word_truncating(word: Word) -> Self {
				word as $t
			}

			#[inline]
			fn from_i128_truncating(value: i128) -> Self {
				value as $t
			}

			#[inline]
			fn from_u128_truncating(value: u128) -> Self {
				value as $t
			}

			#[inline]
			fn from_i128_exact(value: i128) -> Option<Self> {
				<$t>::try_from(value).ok()
			}

			#[inline]
			fn from_u128_exact(value: u128) -> Option<Self> {
				<$t>::try_from(value).ok()
			}

			#[inline]
			fn to_i128_exact(self) -> Option<i128> {
				i128::try_from(self).ok()
			}

			#[inline]
			fn to_u128_exact(self) -> Option<u128> {
				u128::try_from(self).ok()
			}
		}
	};
}

macro_rules! impl_narrow_limb {
	($t:ty, $u:ty, $signed:expr, $double:ty) => {
		impl_limb!($t, $u, $signed, |a, b| {
			let t = (a as $double) * (b as $double);
			((t >> <$t>::BITS) as $t, t as $u)
		});
	};
}

impl_narrow_limb!(i8, u8, true, i16);
impl_narrow_limb!(u8, u8, false, u16);
impl_narrow_limb!(i16, u16, true, i32);
impl_narrow_limb!(u16, u16, false, u32);
impl_narrow_limb!(i32, u32, true, i64);
impl_narrow_limb!(u32, u32, false, u64);
impl_narrow_limb!(i64, u64, true, i128);
impl_narrow_limb!(u64, u64, false, u128);
impl_limb!(i128, u128, true, |a, b| mul_i128(a, b));
impl_limb!(u128, u128, false, |a, b| mul_u128(a, b));
