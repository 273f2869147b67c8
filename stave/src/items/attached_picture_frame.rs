use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::header::Id3v2Version;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text, latin1_decode};

/// An `ID3v2` attached picture frame
///
/// "APIC" in ID3v2.3/ID3v2.4, "PIC" in ID3v2.2. The legacy body replaces the
/// MIME string with a fixed 3-byte image format ("PNG", "JPG", ...); it is
/// surfaced through [`mime_type`](Self::mime_type) either way.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The picture's MIME type, or the 3-character image format for ID3v2.2
	pub mime_type: String,
	/// The published picture type marker
	///
	/// See [`picture_type_name`](Self::picture_type_name) for the label.
	pub picture_type: u8,
	/// A description of the picture
	pub description: String,
	/// The binary image data
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Decode an APIC/PIC body: encoding, MIME (or legacy format), type
	/// marker, terminated description, image data
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let Some((&encoding_byte, mut cursor)) = content.split_first() else {
			err!(BadFrameLength);
		};
		let encoding = verify_encoding(encoding_byte, header.version)?;

		let mime_type;
		if header.version == Id3v2Version::V2 {
			if cursor.len() < 3 {
				err!(BadFrameLength);
			}

			mime_type = latin1_decode(&cursor[..3]);
			cursor = &cursor[3..];
		} else {
			mime_type = decode_text(
				&mut cursor,
				TextDecodeOptions::new()
					.encoding(TextEncoding::Latin1)
					.terminated(true),
			)?
			.content;
		}

		let Some((&picture_type, rest)) = cursor.split_first() else {
			err!(BadFrameLength);
		};
		cursor = rest;

		let description = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?
		.content;

		Ok(Self {
			header,
			encoding,
			mime_type,
			picture_type,
			description,
			data: cursor.to_vec(),
		})
	}

	/// The published label for [`picture_type`](Self::picture_type)
	///
	/// Out-of-range markers fall back to `"Other"`.
	#[must_use]
	pub fn picture_type_name(&self) -> &'static str {
		match self.picture_type {
			0x01 => "32x32 pixels 'file icon' (PNG only)",
			0x02 => "Other file icon",
			0x03 => "Cover (front)",
			0x04 => "Cover (back)",
			0x05 => "Leaflet page",
			0x06 => "Media (e.g. label side of CD)",
			0x07 => "Lead artist/lead performer/soloist",
			0x08 => "Artist/performer",
			0x09 => "Conductor",
			0x0A => "Band/Orchestra",
			0x0B => "Composer",
			0x0C => "Lyricist/text writer",
			0x0D => "Recording Location",
			0x0E => "During recording",
			0x0F => "During performance",
			0x10 => "Movie/video screen capture",
			0x11 => "A bright coloured fish",
			0x12 => "Illustration",
			0x13 => "Band/artist logotype",
			0x14 => "Publisher/Studio logotype",
			_ => "Other",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::AttachedPictureFrame;
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;
	use crate::util::text::TextEncoding;

	use std::borrow::Cow;

	fn header(id: &'static str, version: Id3v2Version) -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed(id)),
			version,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn front_cover() {
		let mut content = Vec::from(&b"\x00image/jpeg\x00\x03Something\x00"[..]);
		content.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);

		let frame =
			AttachedPictureFrame::parse(&content, header("APIC", Id3v2Version::V3)).unwrap();

		assert_eq!(frame.encoding, TextEncoding::Latin1);
		assert_eq!(frame.mime_type, "image/jpeg");
		assert_eq!(frame.picture_type, 3);
		assert_eq!(frame.picture_type_name(), "Cover (front)");
		assert_eq!(frame.description, "Something");
		assert_eq!(frame.data, &[0xFF, 0xD8, 0xFF, 0xE0]);
	}

	#[test_log::test]
	fn legacy_body_has_a_fixed_image_format() {
		let mut content = Vec::from(&b"\x00PNG\x03icon\x00"[..]);
		content.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47]);

		let frame = AttachedPictureFrame::parse(&content, header("PIC", Id3v2Version::V2)).unwrap();

		assert_eq!(frame.mime_type, "PNG");
		assert_eq!(frame.description, "icon");
		assert_eq!(frame.data, &[0x89, 0x50, 0x4E, 0x47]);
	}

	#[test_log::test]
	fn out_of_range_type_is_other() {
		let frame =
			AttachedPictureFrame::parse(b"\x00image/png\x00\x42x\x00", header("APIC", Id3v2Version::V4))
				.unwrap();

		assert_eq!(frame.picture_type, 0x42);
		assert_eq!(frame.picture_type_name(), "Other");
	}
}
