use crate::error::Result;
use crate::frame::header::FrameHeader;

/// A frame kept as raw bytes
///
/// This covers the frames whose bodies are opaque by design (EQUA, ENCR, RVAD)
/// and any frame that arrived encrypted, whatever its identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryFrame {
	pub(crate) header: FrameHeader,
	/// The body, exactly as stored
	pub data: Vec<u8>,
}

impl BinaryFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		Ok(Self {
			header,
			data: content.to_vec(),
		})
	}
}
