use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

/// An `ID3v2` unique file identifier frame
///
/// A database identifier for the file, keyed by the database's owner. A tag may
/// carry one per owner, so equality and hashing lean on the owner alone.
#[derive(Clone, Debug, Eq)]
pub struct UniqueFileIdentifierFrame {
	pub(crate) header: FrameHeader,
	/// The database this identifier belongs to
	pub owner: String,
	/// The identifier itself, up to 64 bytes of anything
	pub identifier: Vec<u8>,
}

impl PartialEq for UniqueFileIdentifierFrame {
	fn eq(&self, other: &Self) -> bool {
		self.owner == other.owner
	}
}

impl Hash for UniqueFileIdentifierFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.owner.hash(state);
	}
}

impl UniqueFileIdentifierFrame {
	/// Decode a UFID body: terminated owner, then the identifier
	///
	/// A body too short to hold an owner and identifier decodes to an empty
	/// frame.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 2 {
			return Ok(Self {
				header,
				owner: String::new(),
				identifier: Vec::new(),
			});
		}

		let mut cursor = content;
		let owner = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		Ok(Self {
			header,
			owner,
			identifier: cursor.to_vec(),
		})
	}
}
