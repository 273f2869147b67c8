//! The frames that carry an ISO-639-2 language code: COMM, USLT, and USER

use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

// Generic body for a frame with a language and a described text, shared
// between `CommentFrame` and `UnsynchronizedTextFrame`
struct LanguageFrame {
	encoding: TextEncoding,
	language: [u8; 3],
	description: String,
	content: String,
}

impl LanguageFrame {
	fn empty() -> Self {
		Self {
			encoding: TextEncoding::Latin1,
			language: [0; 3],
			description: String::new(),
			content: String::new(),
		}
	}

	fn parse(content: &[u8], header: &FrameHeader) -> Result<Self> {
		let encoding = verify_encoding(content[0], header.version)?;

		let language: [u8; 3] = content[1..4].try_into().unwrap();

		let mut cursor = &content[4..];
		let description = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?;

		// The description may be the only string with a BOM
		let mut content_options = TextDecodeOptions::new().encoding(encoding);
		if encoding == TextEncoding::UTF16 {
			content_options = content_options.bom(description.bom);
		}
		let text = decode_text(&mut cursor, content_options)?.content;

		Ok(Self {
			encoding,
			language,
			description: description.content,
			content: text,
		})
	}
}

/// An `ID3v2` comment frame
///
/// Similar to "TXXX" and "WXXX" frames, comments are told apart by their
/// descriptions.
#[derive(Clone, Debug, Eq)]
pub struct CommentFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and comment text
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The actual comment
	pub content: String,
}

impl PartialEq for CommentFrame {
	fn eq(&self, other: &Self) -> bool {
		self.description == other.description
	}
}

impl Hash for CommentFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.description.hash(state);
	}
}

impl CommentFrame {
	/// Decode a COMM body
	///
	/// A body of 4 bytes or fewer has no room for the fixed fields and a
	/// comment, and yields an empty frame rather than an error.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let body = if content.len() <= 4 {
			LanguageFrame::empty()
		} else {
			LanguageFrame::parse(content, &header)?
		};

		Ok(Self {
			header,
			encoding: body.encoding,
			language: body.language,
			description: body.description,
			content: body.content,
		})
	}
}

/// An `ID3v2` unsynchronised lyrics/text frame
///
/// Similar to "TXXX" and "WXXX" frames, USLT frames are told apart by their
/// descriptions.
#[derive(Clone, Debug, Eq)]
pub struct UnsynchronizedTextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and lyrics
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The lyrics/text transcription
	pub content: String,
}

impl PartialEq for UnsynchronizedTextFrame {
	fn eq(&self, other: &Self) -> bool {
		self.description == other.description
	}
}

impl Hash for UnsynchronizedTextFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.description.hash(state);
	}
}

impl UnsynchronizedTextFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let body = if content.len() <= 4 {
			LanguageFrame::empty()
		} else {
			LanguageFrame::parse(content, &header)?
		};

		Ok(Self {
			header,
			encoding: body.encoding,
			language: body.language,
			description: body.description,
			content: body.content,
		})
	}
}

/// An `ID3v2` terms of use frame
///
/// The "USER" body is a language and a text with no description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TermsOfUseFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// The terms of use
	pub content: String,
}

impl TermsOfUseFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 4 {
			return Ok(Self {
				header,
				encoding: TextEncoding::Latin1,
				language: [0; 3],
				content: String::new(),
			});
		}

		let encoding = verify_encoding(content[0], header.version)?;
		let language: [u8; 3] = content[1..4].try_into().unwrap();

		let mut cursor = &content[4..];
		let text = decode_text(&mut cursor, TextDecodeOptions::new().encoding(encoding))?.content;

		Ok(Self {
			header,
			encoding,
			language,
			content: text,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::{CommentFrame, TermsOfUseFrame, UnsynchronizedTextFrame};
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;
	use crate::util::text::TextEncoding;

	use std::borrow::Cow;

	fn header(id: &'static str) -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed(id)),
			Id3v2Version::V3,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn comment_fields() {
		let frame = CommentFrame::parse(
			b"\x00engComment\x00This is a comment",
			header("COMM"),
		)
		.unwrap();

		assert_eq!(frame.encoding, TextEncoding::Latin1);
		assert_eq!(&frame.language, b"eng");
		assert_eq!(frame.description, "Comment");
		assert_eq!(frame.content, "This is a comment");
	}

	#[test_log::test]
	fn short_comment_is_empty() {
		let frame = CommentFrame::parse(b"\x00eng", header("COMM")).unwrap();

		assert_eq!(frame.language, [0; 3]);
		assert_eq!(frame.description, "");
		assert_eq!(frame.content, "");
	}

	#[test_log::test]
	fn lyrics_with_description_only_bom() {
		let mut content = Vec::from(*b"\x01eng");
		content.extend_from_slice(&[0xFF, 0xFE]);
		for ch in "desc".encode_utf16() {
			content.extend_from_slice(&ch.to_le_bytes());
		}
		content.extend_from_slice(&[0x00, 0x00]);
		for ch in "Somewhere".encode_utf16() {
			content.extend_from_slice(&ch.to_le_bytes());
		}

		let frame = UnsynchronizedTextFrame::parse(&content, header("USLT")).unwrap();

		assert_eq!(frame.description, "desc");
		assert_eq!(frame.content, "Somewhere");
	}

	#[test_log::test]
	fn terms_of_use_has_no_description() {
		let frame = TermsOfUseFrame::parse(b"\x00engAll rights reserved", header("USER")).unwrap();

		assert_eq!(&frame.language, b"eng");
		assert_eq!(frame.content, "All rights reserved");
	}
}
