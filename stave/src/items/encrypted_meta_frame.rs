use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

/// An `ID3v2.2` encrypted meta frame
///
/// The legacy "CRM" frame. Later revisions replaced it with the per-frame
/// encryption flag, so this only ever arrives from an `ID3v2.2` tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncryptedMetaFrame {
	pub(crate) header: FrameHeader,
	/// Whether the owner and explanation are UTF-16 encoded
	pub utf16: bool,
	/// Who encrypted the block
	pub owner: String,
	/// What the block contains, for a reader without the decryption details
	pub explanation: String,
	/// The encrypted data
	pub encrypted_block: Vec<u8>,
}

impl EncryptedMetaFrame {
	/// Decode a CRM body: text marker, owner, explanation, encrypted block
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let Some((&marker, mut cursor)) = content.split_first() else {
			err!(BadFrameLength);
		};

		let utf16 = marker == 1;
		let encoding = if utf16 {
			TextEncoding::UTF16
		} else {
			TextEncoding::Latin1
		};

		let owner = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?;

		let mut explanation_options = TextDecodeOptions::new().encoding(encoding).terminated(true);
		if utf16 {
			explanation_options = explanation_options.bom(owner.bom);
		}
		let explanation = decode_text(&mut cursor, explanation_options)?.content;

		Ok(Self {
			header,
			utf16,
			owner: owner.content,
			explanation,
			encrypted_block: cursor.to_vec(),
		})
	}
}
