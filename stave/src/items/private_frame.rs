use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

/// An `ID3v2` private frame
///
/// Program-specific data only the owner knows how to interpret.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrivateFrame {
	pub(crate) header: FrameHeader,
	/// Who wrote the data
	pub owner: String,
	/// The private data itself
	pub private_data: Vec<u8>,
}

impl PrivateFrame {
	/// Decode a PRIV body: terminated owner, then the data
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
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
			private_data: cursor.to_vec(),
		})
	}
}
