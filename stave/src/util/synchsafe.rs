//! Utilities for working with unsynchronized ID3v2 content
//!
//! To keep a decoder from mistaking tag content for an MPEG frame sync, ID3v2 can store
//! sizes with the high bit of every byte left clear ("synchsafe" integers), and can insert
//! a `0x00` after every `0xFF` in content ("unsynchronisation"). Reading those back means
//! packing the 7-bit groups together again, and dropping the inserted null bytes.

use crate::error::Result;

use std::io::Read;

/// A reader for unsynchronized content
///
/// Every `0xFF 0x00` pair in the source is collapsed to a lone `0xFF`. Anything else,
/// including `0xFF` followed by a non-null byte, passes through untouched.
///
/// # Examples
///
/// ```rust
/// use stave::util::synchsafe::UnsynchronizedStream;
/// use std::io::{Cursor, Read};
///
/// fn main() -> stave::error::Result<()> {
/// // Two `0xFF 0x00` pairs, with ordinary content between them
/// let content = [0xFF, 0x00, 0xE0, 0x22, 0xFF, 0x00];
///
/// let mut unsynchronized_reader = UnsynchronizedStream::new(Cursor::new(content));
///
/// let mut unsynchronized_content = Vec::new();
/// unsynchronized_reader.read_to_end(&mut unsynchronized_content)?;
///
/// // The null bytes following `0xFF` are gone
/// assert_eq!(unsynchronized_content, [0xFF, 0xE0, 0x22, 0xFF]);
/// # Ok(()) }
/// ```
pub struct UnsynchronizedStream<R> {
	reader: R,
	// Same buffer size as `BufReader`
	buf: [u8; 8 * 1024],
	bytes_available: usize,
	pos: usize,
	last_byte_was_ff: bool,
}

impl<R> UnsynchronizedStream<R> {
	/// Create a new [`UnsynchronizedStream`]
	///
	/// # Examples
	///
	/// ```rust
	/// use stave::util::synchsafe::UnsynchronizedStream;
	/// use std::io::Cursor;
	///
	/// let reader = Cursor::new([0xFF, 0x00, 0xE0]);
	/// let unsynchronized_reader = UnsynchronizedStream::new(reader);
	/// ```
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			buf: [0; 8 * 1024],
			bytes_available: 0,
			pos: 0,
			last_byte_was_ff: false,
		}
	}

	/// Extract the reader, discarding the [`UnsynchronizedStream`]
	pub fn into_inner(self) -> R {
		self.reader
	}
}

impl<R: Read> Read for UnsynchronizedStream<R> {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		let dest_len = buf.len();
		if dest_len == 0 {
			return Ok(0);
		}

		let mut dest_pos = 0;
		while dest_pos < dest_len {
			if self.pos >= self.bytes_available {
				self.bytes_available = self.reader.read(&mut self.buf)?;
				self.pos = 0;
			}

			// Exhausted the reader
			if self.bytes_available == 0 {
				break;
			}

			if self.last_byte_was_ff {
				self.last_byte_was_ff = false;

				// Only skip the next byte if this is valid unsynchronization,
				// otherwise just continue as normal
				if self.buf[self.pos] == 0 {
					self.pos += 1;
					continue;
				}
			}

			let current_byte = self.buf[self.pos];
			buf[dest_pos] = current_byte;
			dest_pos += 1;
			self.pos += 1;

			if current_byte == 0xFF {
				self.last_byte_was_ff = true;
			}
		}

		Ok(dest_pos)
	}
}

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// The integer type that this can be widened to for use in [`SynchsafeInteger::widening_synch`]
	type WideningType;

	/// Unsynchronise a synchsafe integer
	///
	/// This packs the low 7 bits of every byte back into a plain integer. It is the
	/// decode direction: tag header sizes and ID3v2.4 frame sizes are stored this way.
	///
	/// # Examples
	///
	/// ```rust
	/// use stave::util::synchsafe::SynchsafeInteger;
	///
	/// // A 4-byte synchsafe size, as it appears in a tag header
	/// let stored = u32::from_be_bytes([0x00, 0x00, 0x02, 0x01]);
	/// assert_eq!(stored.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;

	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use stave::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> stave::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let number = 0xFFF_FFFF_u32;
	/// let synchsafe = number.synch()?;
	///
	/// // Each byte has 7 set bits and an MSB of 0
	/// assert_eq!(synchsafe, 0b01111111_01111111_01111111_01111111_u32);
	///
	/// // And round-trips
	/// assert_eq!(synchsafe.unsynch(), number);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Create a synchsafe integer, widening to the next available integer type
	///
	/// # Examples
	///
	/// ```rust
	/// use stave::util::synchsafe::SynchsafeInteger;
	///
	/// // 0b11111111 doesn't fit in a synchsafe u8, widen to a u16
	/// let large_number = u8::MAX;
	///
	/// // 0b00000001_01111111
	/// let large_number_synchsafe = large_number.widening_synch();
	///
	/// assert_eq!(large_number_synchsafe.unsynch(), u16::from(large_number));
	/// ```
	fn widening_synch(self) -> Self::WideningType;
}

macro_rules! impl_synchsafe {
	(
		$ty:ty, $widening_ty:ty,
		unsynch($u:ident) $unsynch_body:block;
		synch($n:ident) $body:block;
		widening_synch($w:ident) $widening_body:block
	) => {
		#[allow(unused_parens)]
		impl SynchsafeInteger for $ty {
			type WideningType = $widening_ty;

			fn unsynch(self) -> Self {
				let $u = self;
				$unsynch_body
			}

			fn synch(self) -> Result<Self> {
				const MAXIMUM_INTEGER: $ty = {
					let num_bytes = core::mem::size_of::<$ty>();
					// 7 bits are available per byte, shave off 1 bit per byte
					<$ty>::MAX >> num_bytes
				};

				if self > MAXIMUM_INTEGER {
					crate::macros::err!(TooMuchData);
				}

				let $n = self;
				Ok($body)
			}

			fn widening_synch(self) -> Self::WideningType {
				let mut $w = <$widening_ty>::MIN;
				let $n = self;
				$widening_body;
				$w
			}
		}
	};
}

impl_synchsafe! {
	u8, u16,
	unsynch(u) {
		(u & 0x7F)
	};
	synch(n) {
		(n & 0x7F)
	};
	widening_synch(w) {
		w |= u16::from(n & 0x7F);
		w |= u16::from(n & 0x80) << 1;
	}
}

impl_synchsafe! {
	u16, u32,
	unsynch(u) {
		((u & 0x7F00) >> 1) | (u & 0x7F)
	};
	synch(n) {
		(n & 0x7F) |
		((n & (0x7F << 7)) << 1)
	};
	widening_synch(w) {
		w |= u32::from(n & 0x7F);
		w |= u32::from((n & (0x7F << 7)) << 1);
		w |= u32::from(n & (0x03 << 14)) << 2;
	}
}

impl_synchsafe! {
	u32, u64,
	unsynch(u) {
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	};
	synch(n) {
		(n & 0x7F) |
		((n & (0x7F << 7)) << 1) |
		((n & (0x7F << 14)) << 2) |
		((n & (0x7F << 21)) << 3)
	};
	widening_synch(w) {
		w |= u64::from(n & 0x7F);
		w |= u64::from(n & (0x7F << 7)) << 1;
		w |= u64::from(n & (0x7F << 14)) << 2;
		w |= u64::from(n & (0x7F << 21)) << 3;
		w |= u64::from(n & (0x0F << 28)) << 4;
	}
}
