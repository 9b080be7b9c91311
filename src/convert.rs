use crate::double_width::{DoubleWidth, Low};
use crate::error::{Error, assert, cold_path, fatal};
use crate::limb::{Limb, WORD_BITS, Word};

/// Primitive integers that can be converted to and from any `Limb`.
pub trait NativeInt: Copy {
	/// Returns `None` if the value does not fit `L`.
	fn to_limb<L: Limb>(self) -> Option<L>;

	/// Returns `None` if the value does not fit `Self`.
	fn from_limb<L: Limb>(limb: L) -> Option<Self>;
}

macro_rules! impl_native_int {
	(signed: $($t:ty),*) => {$(
		impl NativeInt for $t {
			#[inline]
			fn to_limb<L: Limb>(self) -> Option<L> {
				L::from_i128_exact(self as i128)
			}

			#[inline]
			fn from_limb<L: Limb>(limb: L) -> Option<Self> {
				limb.to_i128_exact().and_then(|value| <$t>::try_from(value).ok())
			}
		}
	)*};
	(unsigned: $($t:ty),*) => {$(
		impl NativeInt for $t {
			#[inline]
			fn to_limb<L: Limb>(self) -> Option<L> {
				L::from_u128_exact(self as u128)
			}

			#[inline]
			fn from_limb<L: Limb>(limb: L) -> Option<Self> {
				limb.to_u128_exact().and_then(|value| <$t>::try_from(value).ok())
			}
		}
	)*};
}

impl_native_int!(signed: i8, i16, i32, i64, i128, isize);
impl_native_int!(unsigned: u8, u16, u32, u64, u128, usize);

impl<H: Limb> DoubleWidth<H> {
	/// Converts `source` if it is representable, returns `None` otherwise.
	#[inline]
	pub fn from_exact<N: NativeInt>(source: N) -> Option<Self> {
		source.to_limb()
	}

	#[inline]
	pub fn try_from_value<N: NativeInt>(source: N) -> Result<Self, Error> {
		Self::from_exact(source).ok_or_else(|| {
			cold_path();
			Error::new_out_of_range("DoubleWidth::from_value()")
		})
	}

	/// Converts `source`. Aborts if the value is not representable.
	#[inline]
	#[track_caller]
	pub fn from_value<N: NativeInt>(source: N) -> Self {
		match Self::try_from_value(source) {
			Ok(value) => value,
			Err(err) => fatal(err),
		}
	}

	/// Converts to a primitive integer if the value fits.
	#[inline]
	pub fn to_exact<N: NativeInt>(self) -> Option<N> {
		N::from_limb(self)
	}

	/// Converts any limb, including another `DoubleWidth`, if its value is representable.
	///
	/// Widening always succeeds between types of the same signedness. Narrowing checks
	/// that the dropped bits are only the sign extension.
	pub fn from_limb_exact<L: Limb>(source: L) -> Option<Self> {
		Self::try_from_limb(source).ok()
	}

	pub fn try_from_limb<L: Limb>(source: L) -> Result<Self, Error> {
		let words = source.magnitude().words();
		Self::try_from_literal(&words, source.is_negative())
			.map_err(|_| Error::new_out_of_range("DoubleWidth::from_limb()"))
	}

	/// Like `from_limb_exact()`, but aborts if the value is not representable.
	#[track_caller]
	pub fn from_limb<L: Limb>(source: L) -> Self {
		match Self::try_from_limb(source) {
			Ok(value) => value,
			Err(err) => fatal(err),
		}
	}

	/// Low `BITS` bits of `word`. The bits above `low` go to `high`, nothing is sign-extended.
	#[inline]
	pub fn from_truncating_bits(word: Word) -> Self {
		let low_bits = <Low<H> as Limb>::BITS;
		let high = if low_bits >= WORD_BITS { H::ZERO } else { H::from_word_truncating(word >> low_bits) };
		Self { high, low: <Low<H> as Limb>::from_word_truncating(word) }
	}

	/// Builds a value from the magnitude of a literal, given as machine words ordered from
	/// the least significant, and its sign. Aborts if the literal is out of range.
	#[track_caller]
	pub fn from_literal(words: &[Word], negative: bool) -> Self {
		match Self::try_from_literal(words, negative) {
			Ok(value) => value,
			Err(err) => fatal(err),
		}
	}

	pub fn try_from_literal(words: &[Word], negative: bool) -> Result<Self, Error> {
		let magnitude = Self::__literal_magnitude(words)?;

		// Largest magnitude a signed value can hold is 2**(BITS - 1), and only for MIN.
		let sign_bit = DoubleWidth::<Low<H>>::ONE.masked_shl(Self::BITS - 1);

		if negative {
			if magnitude.is_zero() {
				return Ok(Self::ZERO);
			}
			assert(Self::SIGNED && magnitude <= sign_bit, || {
				Error::new_out_of_range("DoubleWidth::from_literal()")
			})?;
			Ok(Self::from_bits(magnitude).wrapping_neg())
		} else {
			assert(!Self::SIGNED || magnitude < sign_bit, || {
				Error::new_out_of_range("DoubleWidth::from_literal()")
			})?;
			Ok(Self::from_bits(magnitude))
		}
	}

	fn __literal_magnitude(words: &[Word]) -> Result<DoubleWidth<Low<H>>, Error> {
		let err = || Error::new_out_of_range("DoubleWidth::from_literal()");

		// Fast path: the whole literal is one machine word.
		match words {
			[] => return Ok(DoubleWidth::ZERO),
			[word] => return DoubleWidth::from_u128_exact(*word as u128).ok_or_else(err),
			_ => {},
		}

		let bits = Self::BITS as u64;
		let mut magnitude = DoubleWidth::<Low<H>>::ZERO;
		for (i, &word) in words.iter().enumerate() {
			if word == 0 {
				continue;
			}
			let shift = i as u64 * WORD_BITS as u64;
			assert(shift < bits, err)?;

			let room = bits - shift;
			if room < WORD_BITS as u64 {
				assert(word >> room == 0, err)?;
			}

			let chunk = DoubleWidth::<Low<H>>::from_truncating_bits(word);
			magnitude = magnitude | chunk.masked_shl(shift as u32);
		}
		Ok(magnitude)
	}

	//----------------------------------------------------------------------------------------------
	// conversion hooks of the `Limb` trait

	pub(crate) fn __from_i128_exact(value: i128) -> Option<Self> {
		if value < 0 && !H::SIGNED {
			return None;
		}

		let low_bits = <Low<H> as Limb>::BITS;
		let low = <Low<H> as Limb>::from_i128_truncating(value);
		if low_bits >= i128::BITS {
			// `low` alone holds the value, `high` is its sign extension
			let high = if value < 0 { !H::ZERO } else { H::ZERO };
			return Some(Self { high, low });
		}

		let high = H::from_i128_exact(value >> low_bits)?;
		Some(Self { high, low })
	}

	pub(crate) fn __from_u128_exact(value: u128) -> Option<Self> {
		let low_bits = <Low<H> as Limb>::BITS;
		let low = <Low<H> as Limb>::from_u128_truncating(value);
		if low_bits >= u128::BITS {
			return Some(Self { high: H::ZERO, low });
		}

		let high = H::from_u128_exact(value >> low_bits)?;
		Some(Self { high, low })
	}

	pub(crate) fn __from_i128_truncating(value: i128) -> Self {
		let low_bits = <Low<H> as Limb>::BITS;
		let high = H::from_i128_truncating(value >> low_bits.min(i128::BITS - 1));
		Self { high, low: <Low<H> as Limb>::from_i128_truncating(value) }
	}

	pub(crate) fn __from_u128_truncating(value: u128) -> Self {
		let low_bits = <Low<H> as Limb>::BITS;
		let high =
			if low_bits >= u128::BITS { H::ZERO } else { H::from_u128_truncating(value >> low_bits) };
		Self { high, low: <Low<H> as Limb>::from_u128_truncating(value) }
	}

	pub(crate) fn __to_u128_exact(self) -> Option<u128> {
		if self.is_negative() {
			return None;
		}

		let low_bits = <Low<H> as Limb>::BITS;
		if low_bits >= u128::BITS {
			return if self.high == H::ZERO { self.low.to_u128_exact() } else { None };
		}

		let high = self.high.to_u128_exact()?;
		if high >> (u128::BITS - low_bits) != 0 {
			return None;
		}
		Some((high << low_bits) | self.low.to_u128_exact()?)
	}

	pub(crate) fn __to_i128_exact(self) -> Option<i128> {
		let magnitude = self.magnitude().__to_u128_exact()?;
		if self.is_negative() {
			// -(2**127) is the only negative value whose magnitude is not an i128
			if magnitude > 1 << 127 {
				return None;
			}
			Some((magnitude as i128).wrapping_neg())
		} else {
			i128::try_from(magnitude).ok()
		}
	}
}
