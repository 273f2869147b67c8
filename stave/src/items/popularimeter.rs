use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

/// An `ID3v2` popularimeter frame
///
/// A rating (1-255, 0 for unknown) and a play counter, keyed by the rater's
/// email. A tag may carry one per email, so equality and hashing lean on the
/// email alone.
#[derive(Clone, Debug, Eq)]
pub struct PopularimeterFrame {
	pub(crate) header: FrameHeader,
	/// The email of the user who rated the file
	pub email: String,
	/// The rating itself
	pub rating: u8,
	/// The big-endian counter bytes, as stored
	pub counter: Vec<u8>,
}

impl PartialEq for PopularimeterFrame {
	fn eq(&self, other: &Self) -> bool {
		self.email == other.email
	}
}

impl Hash for PopularimeterFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.email.hash(state);
	}
}

impl PopularimeterFrame {
	/// Decode a POPM body: terminated email, rating byte, counter bytes
	///
	/// The counter may be empty, some writers omit it entirely.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let mut cursor = content;
		let email = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		let Some((&rating, counter)) = cursor.split_first() else {
			err!(BadFrameLength);
		};

		Ok(Self {
			header,
			email,
			rating,
			counter: counter.to_vec(),
		})
	}

	/// The number of plays, saturating at [`u64::MAX`]
	#[must_use]
	pub fn play_count(&self) -> u64 {
		if self.counter.len() > 8 {
			return u64::MAX;
		}

		let mut bytes = [0u8; 8];
		bytes[8 - self.counter.len()..].copy_from_slice(&self.counter);
		u64::from_be_bytes(bytes)
	}
}
