use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::header::Id3v2Version;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text, latin1_decode};

/// An `ID3v2` linked information frame
///
/// Points at a frame stored in another file or tag instead of repeating it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinkedInformationFrame {
	pub(crate) header: FrameHeader,
	/// The identifier of the linked frame
	///
	/// 3 characters in `ID3v2.2`/`ID3v2.3`, 4 in `ID3v2.4`.
	pub target_id: String,
	/// Where the linked frame lives
	pub url: String,
	/// Additional data needed to locate the linked frame
	pub additional_data: Vec<u8>,
}

impl LinkedInformationFrame {
	/// Decode a LINK/LNK body: target identifier, terminated URL, extra data
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		// ID3v2.3 kept the 3-character target field even though its own
		// identifiers grew to 4
		let id_len = match header.version {
			Id3v2Version::V2 | Id3v2Version::V3 => 3,
			Id3v2Version::V4 => 4,
		};

		if content.len() < id_len {
			err!(BadFrameLength);
		}

		let target_id = latin1_decode(&content[..id_len]);
		let mut cursor = &content[id_len..];

		let url = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		Ok(Self {
			header,
			target_id,
			url,
			additional_data: cursor.to_vec(),
		})
	}
}
