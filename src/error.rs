#[derive(PartialEq, Clone, Copy)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ErrorKind {
	/// A conversion or literal does not fit the target width.
	OutOfRange,
	/// Arithmetic overflow, including division by zero and `MIN / -1`.
	Overflow,
	/// The word view is not defined for this limb width.
	UnsupportedLayout,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let what = match self.kind {
			ErrorKind::OutOfRange => "value outside representable range",
			ErrorKind::Overflow => "arithmetic overflow",
			ErrorKind::UnsupportedLayout => "unsupported limb layout",
		};
		write!(f, "{}: {}", self.message, what)
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	pub fn new_out_of_range(msg: &'static str) -> Self {
		Self::new(ErrorKind::OutOfRange, msg)
	}

	pub fn new_overflow(msg: &'static str) -> Self {
		Self::new(ErrorKind::Overflow, msg)
	}

	pub fn new_unsupported_layout(msg: &'static str) -> Self {
		Self::new(ErrorKind::UnsupportedLayout, msg)
	}
}

#[cold]
#[inline(never)]
pub(crate) fn cold_path() {}

#[inline(always)]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what {
		Ok(())
	} else {
		cold_path();
		Err(err())
	}
}

/// Reports a precondition violation and aborts the current thread.
///
/// All trapping operations end up here, so a debugger breakpoint on this function
/// catches every overflow.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(err: Error) -> ! {
	log::error!("{}", err);
	panic!("{}", err)
}
