use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

/// An `ID3v2` text information frame
///
/// This covers every "T..." identifier except TXXX and the involved people
/// lists, in all three versions.
#[derive(Clone, Debug, Eq)]
pub struct TextInformationFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	pub value: String,
}

impl PartialEq for TextInformationFrame {
	fn eq(&self, other: &Self) -> bool {
		self.header.id == other.header.id
	}
}

impl Hash for TextInformationFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.header.id.hash(state);
	}
}

impl TextInformationFrame {
	/// Decode a text frame body
	///
	/// A body of 2 bytes or fewer has no room for an encoding marker and a
	/// value, and yields an empty value rather than an error.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 2 {
			return Ok(Self {
				header,
				encoding: TextEncoding::Latin1,
				value: String::new(),
			});
		}

		let encoding = verify_encoding(content[0], header.version)?;

		let mut cursor = &content[1..];
		let value = decode_text(&mut cursor, TextDecodeOptions::new().encoding(encoding))?.content;

		Ok(Self {
			header,
			encoding,
			value,
		})
	}
}
