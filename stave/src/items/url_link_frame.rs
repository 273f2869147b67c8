use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::text::latin1_decode;

use std::hash::{Hash, Hasher};

/// An `ID3v2` URL link frame
///
/// This covers every "W..." identifier except WXXX. The body is the URL
/// itself, always Latin-1, with no leading encoding marker.
#[derive(Clone, Debug, Eq)]
pub struct UrlLinkFrame {
	pub(crate) header: FrameHeader,
	/// The URL
	pub url: String,
}

impl PartialEq for UrlLinkFrame {
	fn eq(&self, other: &Self) -> bool {
		self.header.id == other.header.id
	}
}

impl Hash for UrlLinkFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.header.id.hash(state);
	}
}

impl UrlLinkFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		Ok(Self {
			header,
			url: latin1_decode(content),
		})
	}
}
