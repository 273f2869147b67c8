use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::macros::err;

/// An `ID3v2.4` signature frame
///
/// A signature over the tag, attributed to a group registered through
/// [`GroupIdentificationFrame`](crate::GroupIdentificationFrame).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureFrame {
	pub(crate) header: FrameHeader,
	/// The group symbol of the signer
	pub group_symbol: u8,
	/// The signature bytes
	pub signature: Vec<u8>,
}

impl SignatureFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let Some((&group_symbol, signature)) = content.split_first() else {
			err!(BadFrameLength);
		};

		Ok(Self {
			header,
			group_symbol,
			signature: signature.to_vec(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::SignatureFrame;
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;

	use std::borrow::Cow;

	#[test_log::test]
	fn symbol_then_signature() {
		let header = FrameHeader::new(
			FrameId::new(Cow::Borrowed("SIGN")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		);

		let frame = SignatureFrame::parse(&[0x80, 0xDE, 0xAD], header).unwrap();
		assert_eq!(frame.group_symbol, 0x80);
		assert_eq!(frame.signature, &[0xDE, 0xAD]);
	}
}
