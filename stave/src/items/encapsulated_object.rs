use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

/// An `ID3v2` general encapsulated object frame
///
/// Arbitrary file content riding along in the tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneralEncapsulatedObject {
	pub(crate) header: FrameHeader,
	/// The text encoding of `file_name` and `descriptor`
	pub encoding: TextEncoding,
	/// The file's mimetype
	pub mime_type: Option<String>,
	/// The file's name
	pub file_name: Option<String>,
	/// A unique content descriptor
	pub descriptor: Option<String>,
	/// The file's content
	pub data: Vec<u8>,
}

impl GeneralEncapsulatedObject {
	/// Decode a GEOB body: encoding, MIME type, file name, descriptor, data
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let Some((&encoding_byte, mut cursor)) = content.split_first() else {
			err!(BadFrameLength);
		};
		let encoding = verify_encoding(encoding_byte, header.version)?;

		let mime_type = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?;

		let options = TextDecodeOptions::new().encoding(encoding).terminated(true);
		let file_name = decode_text(&mut cursor, options)?;
		let descriptor = decode_text(&mut cursor, options)?;

		Ok(Self {
			header,
			encoding,
			mime_type: mime_type.text_or_none(),
			file_name: file_name.text_or_none(),
			descriptor: descriptor.text_or_none(),
			data: cursor.to_vec(),
		})
	}
}
