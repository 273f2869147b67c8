use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text, utf8_decode};

/// An `ID3v2` ownership frame
///
/// A receipt: what was paid, when, and to whom.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnershipFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the seller
	pub encoding: TextEncoding,
	/// The price paid, a currency code followed by the amount (e.g. "USD5.00")
	pub price_paid: String,
	/// The date of purchase, as "YYYYMMDD"
	pub date_of_purchase: String,
	/// The seller's name
	pub seller: String,
}

impl OwnershipFrame {
	/// Decode an OWNE body: encoding, terminated price, 8-byte date, seller
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let Some((&encoding_byte, mut cursor)) = content.split_first() else {
			err!(BadFrameLength);
		};
		let encoding = verify_encoding(encoding_byte, header.version)?;

		let price_paid = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		if cursor.len() < 8 {
			err!(BadFrameLength);
		}
		let date_of_purchase = utf8_decode(cursor[..8].to_vec())?;
		cursor = &cursor[8..];

		let seller = decode_text(&mut cursor, TextDecodeOptions::new().encoding(encoding))?.content;

		Ok(Self {
			header,
			encoding,
			price_paid,
			date_of_purchase,
			seller,
		})
	}
}
