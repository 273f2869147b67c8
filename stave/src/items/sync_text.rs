use crate::error::{ErrorKind, Result, StaveError};
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::items::TimestampFormat;
use crate::macros::err;
use crate::util::text::{
	TextDecodeOptions, TextEncoding, decode_text, utf16_decode_terminated_maybe_bom,
};

use byteorder::{BigEndian, ReadBytesExt};

/// The type of text stored in a [`SynchronizedTextFrame`]
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SyncTextContentType {
	Other = 0,
	Lyrics = 1,
	TextTranscription = 2,
	PartName = 3,
	Events = 4,
	Chord = 5,
	Trivia = 6,
}

impl SyncTextContentType {
	/// Get a `SyncTextContentType` from a u8
	///
	/// Out-of-range markers fall back to [`SyncTextContentType::Other`].
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			1 => Self::Lyrics,
			2 => Self::TextTranscription,
			3 => Self::PartName,
			4 => Self::Events,
			5 => Self::Chord,
			6 => Self::Trivia,
			_ => Self::Other,
		}
	}
}

/// An `ID3v2` synchronized text frame
///
/// Text fragments keyed to timestamps, most often lyrics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SynchronizedTextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and the text fragments
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// The unit of the timestamps
	pub timestamp_format: TimestampFormat,
	/// The type of content stored
	pub content_type: SyncTextContentType,
	/// Unique content description
	pub description: Option<String>,
	/// The timestamped text fragments, in stored order
	pub content: Vec<(u32, String)>,
}

impl SynchronizedTextFrame {
	/// Decode a SYLT body
	///
	/// The fragment list ends when a fragment has no complete timestamp after
	/// it, the dangling text is dropped.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() < 7 {
			err!(BadFrameLength);
		}

		let encoding = verify_encoding(content[0], header.version)?;
		// Infallible, length checked above
		let language: [u8; 3] = content[1..4].try_into().unwrap();
		let timestamp_format = TimestampFormat::from_u8(content[4])
			.ok_or_else(|| StaveError::new(ErrorKind::BadTimestampFormat))?;
		let content_type = SyncTextContentType::from_u8(content[5]);

		let mut cursor = &content[6..];
		let description = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?;

		// The description may be the only string with a byte order mark, every
		// later fragment then shares its byte order
		let mut endianness: fn([u8; 2]) -> u16 = u16::from_le_bytes;
		if encoding == TextEncoding::UTF16 {
			endianness = match description.bom {
				[0xFF, 0xFE] => u16::from_le_bytes,
				[0xFE, 0xFF] => u16::from_be_bytes,
				_ => err!(TextDecode("UTF-16 string is missing a BOM")),
			};
		}

		let mut fragments = Vec::new();
		while !cursor.is_empty() {
			let text;
			if encoding == TextEncoding::UTF16 {
				let (decoded, _) = utf16_decode_terminated_maybe_bom(&mut cursor, endianness)?;
				text = decoded;
			} else {
				text = decode_text(
					&mut cursor,
					TextDecodeOptions::new().encoding(encoding).terminated(true),
				)?
				.content;
			}

			if cursor.len() < 4 {
				break;
			}

			let timestamp = cursor.read_u32::<BigEndian>()?;
			fragments.push((timestamp, text));
		}

		Ok(Self {
			header,
			encoding,
			language,
			timestamp_format,
			content_type,
			description: description.text_or_none(),
			content: fragments,
		})
	}
}
