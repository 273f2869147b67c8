use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

/// An extended `ID3v2` text frame
///
/// This is used in the "TXXX" frame, where the frames are told apart by
/// descriptions rather than their identifiers. This means for each
/// `ExtendedTextFrame` in the tag, the description must be unique.
#[derive(Clone, Debug, Eq)]
pub struct ExtendedTextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and content
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl PartialEq for ExtendedTextFrame {
	fn eq(&self, other: &Self) -> bool {
		self.description == other.description
	}
}

impl Hash for ExtendedTextFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.description.hash(state);
	}
}

impl ExtendedTextFrame {
	/// Decode a TXXX body: encoding, terminated description, content
	///
	/// The description may be the only string carrying a BOM; its byte order
	/// carries over to the content.
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
		)?;

		let mut value_options = TextDecodeOptions::new().encoding(encoding);
		if encoding == TextEncoding::UTF16 {
			value_options = value_options.bom(description.bom);
		}
		let frame_content = decode_text(&mut cursor, value_options)?.content;

		Ok(Self {
			header,
			encoding,
			description: description.content,
			content: frame_content,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::ExtendedTextFrame;
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;
	use crate::util::text::TextEncoding;

	use std::borrow::Cow;

	fn header() -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed("TXXX")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn latin1_pair() {
		let frame = ExtendedTextFrame::parse(b"\x00replaygain_track_gain\x00-7.43 dB", header())
			.unwrap();

		assert_eq!(frame.description, "replaygain_track_gain");
		assert_eq!(frame.content, "-7.43 dB");
	}

	#[test_log::test]
	fn description_bom_carries_over() {
		// Only the description has a BOM, the content inherits its byte order
		let mut content = vec![0x01, 0xFF, 0xFE];
		for ch in "key".encode_utf16() {
			content.extend_from_slice(&ch.to_le_bytes());
		}
		content.extend_from_slice(&[0x00, 0x00]);
		for ch in "value".encode_utf16() {
			content.extend_from_slice(&ch.to_le_bytes());
		}

		let frame = ExtendedTextFrame::parse(&content, header()).unwrap();

		assert_eq!(frame.encoding, TextEncoding::UTF16);
		assert_eq!(frame.description, "key");
		assert_eq!(frame.content, "value");
	}
}
