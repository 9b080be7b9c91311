use crate::double_width::{DoubleWidth, Low};
use crate::error::{Error, fatal};
use crate::limb::{Limb, WORD_BITS, Words};

impl<H: Limb> DoubleWidth<H> {
	/// Number of zero bits above the most significant one bit. `BITS` for zero.
	#[inline]
	pub fn leading_zeros(self) -> u32 {
		if self.high == H::ZERO {
			<Low<H> as Limb>::BITS + self.low.leading_zeros()
		} else {
			self.high.leading_zeros()
		}
	}

	/// Number of zero bits below the least significant one bit. `BITS` for zero.
	#[inline]
	pub fn trailing_zeros(self) -> u32 {
		if self.low == <Low<H> as Limb>::ZERO {
			<Low<H> as Limb>::BITS + self.high.trailing_zeros()
		} else {
			self.low.trailing_zeros()
		}
	}

	#[inline]
	pub fn count_ones(self) -> u32 {
		self.high.count_ones() + self.low.count_ones()
	}

	/// Reverses the byte order of the whole value.
	#[inline]
	pub fn swap_bytes(self) -> Self {
		Self {
			high: H::from_bits(self.low.swap_bytes()),
			low: self.high.to_bits().swap_bytes(),
		}
	}

	/// The bit pattern as machine words, least significant first.
	///
	/// Limbs narrower than a word are packed into a single word. Signed values are
	/// sign-extended into the most significant word.
	///
	/// Aborts if the limb width neither divides nor is a multiple of `WORD_BITS`.
	#[track_caller]
	pub fn words(self) -> Words {
		match self.try_words() {
			Ok(words) => words,
			Err(e) => fatal(e),
		}
	}

	/// Like `words()`, but reports an unsupported limb width as an error.
	pub fn try_words(self) -> Result<Words, Error> {
		let limb_bits = <Low<H> as Limb>::BITS;

		if limb_bits >= WORD_BITS {
			if limb_bits % WORD_BITS != 0 {
				return Err(Error::new_unsupported_layout("DoubleWidth::words()"));
			}
			let mut words = self.low.words();
			words.extend(self.high.words());
			return Ok(words);
		}

		if WORD_BITS % limb_bits != 0 || 2 * limb_bits > WORD_BITS {
			return Err(Error::new_unsupported_layout("DoubleWidth::words()"));
		}

		// both limbs fit in one word
		let low = self.low.words()[0];
		let high = self.high.words()[0];
		let mut words = Words::new();
		words.push(low | (high << limb_bits));
		Ok(words)
	}
}
