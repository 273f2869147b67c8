use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

/// An `ID3v2` group identification registration frame
///
/// Registers a group symbol, which other frames reference through their
/// grouping identity flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupIdentificationFrame {
	pub(crate) header: FrameHeader,
	/// Who registered the group
	pub owner: String,
	/// The group symbol being registered
	pub symbol: u8,
	/// Group-dependent data
	pub data: Vec<u8>,
}

impl GroupIdentificationFrame {
	/// Decode a GRID body: terminated owner, symbol, dependent data
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let mut cursor = content;
		let owner = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		let Some((&symbol, rest)) = cursor.split_first() else {
			err!(BadFrameLength);
		};

		Ok(Self {
			header,
			owner,
			symbol,
			data: rest.to_vec(),
		})
	}
}
