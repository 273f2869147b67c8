use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use byteorder::{BigEndian, ReadBytesExt};

/// An `ID3v2` audio encryption frame
///
/// Points at whoever can supply the decryption details for the audio. A body that
/// opens with the terminator has no contact to offer, and the whole frame defaults
/// to empty rather than failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AudioEncryptionFrame {
	pub(crate) header: FrameHeader,
	/// Where to reach the owner of the encryption details
	pub contact_url: String,
	/// Where the unencrypted audio preview starts, in frames
	pub preview_start: u16,
	/// The length of the preview, in frames
	pub preview_length: u16,
	/// Method-specific encryption data
	pub encryption_data: Vec<u8>,
}

impl AudioEncryptionFrame {
	/// Decode an AENC body: terminated contact URL, preview start/length, data
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let mut cursor = content;
		let contact_url = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		// No contact means no way to decrypt, the remaining fields carry nothing
		if contact_url.is_empty() || cursor.len() < 4 {
			return Ok(Self {
				header,
				contact_url: String::new(),
				preview_start: 0,
				preview_length: 0,
				encryption_data: Vec::new(),
			});
		}

		let preview_start = cursor.read_u16::<BigEndian>()?;
		let preview_length = cursor.read_u16::<BigEndian>()?;

		Ok(Self {
			header,
			contact_url,
			preview_start,
			preview_length,
			encryption_data: cursor.to_vec(),
		})
	}
}
