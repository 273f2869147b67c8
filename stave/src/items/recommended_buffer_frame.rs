use crate::error::Result;
use crate::frame::header::FrameHeader;

use byteorder::{BigEndian, ByteOrder};

/// An `ID3v2` recommended buffer size frame
///
/// A hint for streaming players: how much to buffer, and whether another tag
/// may show up inside the stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecommendedBufferFrame {
	pub(crate) header: FrameHeader,
	/// The recommended buffer size, in bytes
	pub buffer_size: u32,
	/// Whether an ID3 tag may appear embedded in the audio stream
	pub embedded_info: bool,
	/// The offset to the next tag, when the writer knew it
	pub next_tag_offset: Option<u32>,
}

impl RecommendedBufferFrame {
	/// Decode an RBUF body: 3-byte size, info bit, optional 4-byte offset
	///
	/// A body too short for the size and flag decodes to a zeroed hint.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() < 4 {
			return Ok(Self {
				header,
				buffer_size: 0,
				embedded_info: false,
				next_tag_offset: None,
			});
		}

		let buffer_size = BigEndian::read_u24(&content[..3]);
		let embedded_info = content[3] & 1 == 1;

		let mut next_tag_offset = None;
		if content.len() >= 8 {
			next_tag_offset = Some(BigEndian::read_u32(&content[4..8]));
		}

		Ok(Self {
			header,
			buffer_size,
			embedded_info,
			next_tag_offset,
		})
	}
}
