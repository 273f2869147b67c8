use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

/// An extended `ID3v2` URL frame
///
/// This is used in the "WXXX" frame, where the frames are told apart by
/// descriptions rather than their identifiers. The description uses the
/// declared encoding, the URL itself is always Latin-1.
#[derive(Clone, Debug, Eq)]
pub struct ExtendedUrlFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The URL
	pub content: String,
}

impl PartialEq for ExtendedUrlFrame {
	fn eq(&self, other: &Self) -> bool {
		self.description == other.description
	}
}

impl Hash for ExtendedUrlFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.description.hash(state);
	}
}

impl ExtendedUrlFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 2 {
			return Ok(Self {
				header,
				encoding: TextEncoding::Latin1,
				description: String::new(),
				content: String::new(),
			});
		}

		let encoding = verify_encoding(content[0], header.version)?;

		let mut cursor = &content[1..];
		let description = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?
		.content;
		let url = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(TextEncoding::Latin1),
		)?
		.content;

		Ok(Self {
			header,
			encoding,
			description,
			content: url,
		})
	}
}
