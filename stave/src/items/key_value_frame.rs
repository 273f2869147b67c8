use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

/// An `ID3v2` key-value frame
///
/// The involved people ("IPLS") and the v2.4 role lists ("TIPL"/"TMCL") all
/// store alternating null-terminated strings. Keys can repeat.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyValueFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The key value pairs, in stored order
	pub key_value_pairs: Vec<(String, String)>,
}

impl KeyValueFrame {
	/// Decode alternating terminated strings into pairs
	///
	/// A dangling key with no value is dropped.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let Some((&encoding_byte, mut cursor)) = content.split_first() else {
			err!(BadFrameLength);
		};
		let encoding = verify_encoding(encoding_byte, header.version)?;

		let mut pairs = Vec::new();
		let mut options = TextDecodeOptions::new().encoding(encoding).terminated(true);

		// The first pair is read separately, it may be the only one with a
		// byte order mark
		let first_key = decode_text(&mut cursor, options)?;
		if first_key.bytes_read == 0 {
			return Ok(Self {
				header,
				encoding,
				key_value_pairs: pairs,
			});
		}

		if encoding == TextEncoding::UTF16 {
			options = options.bom(first_key.bom);
		}

		pairs.push((first_key.content, decode_text(&mut cursor, options)?.content));

		loop {
			let key = decode_text(&mut cursor, options)?;
			let value = decode_text(&mut cursor, options)?;
			if key.bytes_read == 0 || value.bytes_read == 0 {
				break;
			}

			pairs.push((key.content, value.content));
		}

		Ok(Self {
			header,
			encoding,
			key_value_pairs: pairs,
		})
	}
}
