use crate::error::Result;
use crate::frame::header::FrameHeader;

use byteorder::{BigEndian, ByteOrder};

/// An `ID3v2.4` seek frame
///
/// The offset from the end of this tag to the start of the next one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeekFrame {
	pub(crate) header: FrameHeader,
	/// The offset to the next tag, in bytes
	pub offset: u32,
}

impl SeekFrame {
	/// Decode a SEEK body, a single 4-byte offset
	///
	/// A shorter body decodes to an offset of zero.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() < 4 {
			log::debug!("Seek offset is shorter than 4 bytes, dropping it");
			return Ok(Self { header, offset: 0 });
		}

		Ok(Self {
			header,
			offset: BigEndian::read_u32(&content[..4]),
		})
	}
}
