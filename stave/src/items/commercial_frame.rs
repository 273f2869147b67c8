use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::frame::header::FrameHeader;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text, latin1_decode};

/// An `ID3v2` commercial frame
///
/// An offer to buy the file, with an optional seller logo at the end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommercialFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the seller name and description
	pub encoding: TextEncoding,
	/// The price, a currency code followed by the amount (e.g. "USD5.00")
	pub price: String,
	/// The date the offer expires, as "YYYYMMDD"
	pub valid_until: String,
	/// Where to make the purchase
	pub contact_url: String,
	/// How the audio is delivered when bought
	pub received_as: u8,
	/// The seller's name
	pub seller: String,
	/// A short description of the product
	pub description: String,
	/// The MIME type of the seller logo
	pub logo_mime_type: String,
	/// The seller logo image data
	pub logo: Vec<u8>,
}

impl CommercialFrame {
	/// Decode a COMR body
	///
	/// A body too short to hold even the encoding marker and price decodes to an
	/// empty offer.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 2 {
			return Ok(Self {
				header,
				encoding: TextEncoding::Latin1,
				price: String::new(),
				valid_until: String::new(),
				contact_url: String::new(),
				received_as: 0,
				seller: String::new(),
				description: String::new(),
				logo_mime_type: String::new(),
				logo: Vec::new(),
			});
		}

		let encoding = verify_encoding(content[0], header.version)?;
		let mut cursor = &content[1..];

		let latin1_terminated = TextDecodeOptions::new()
			.encoding(TextEncoding::Latin1)
			.terminated(true);

		let price = decode_text(&mut cursor, latin1_terminated)?.content;

		if cursor.len() < 8 {
			err!(BadFrameLength);
		}
		let valid_until = latin1_decode(&cursor[..8]);
		cursor = &cursor[8..];

		let contact_url = decode_text(&mut cursor, latin1_terminated)?.content;

		let Some((&received_as, rest)) = cursor.split_first() else {
			err!(BadFrameLength);
		};
		cursor = rest;

		let seller = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?;

		// The seller may hold the only byte order mark in the frame
		let mut description_options = TextDecodeOptions::new().encoding(encoding).terminated(true);
		if encoding == TextEncoding::UTF16 {
			description_options = description_options.bom(seller.bom);
		}
		let description = decode_text(&mut cursor, description_options)?.content;

		let logo_mime_type = decode_text(&mut cursor, latin1_terminated)?.content;

		Ok(Self {
			header,
			encoding,
			price,
			valid_until,
			contact_url,
			received_as,
			seller: seller.content,
			description,
			logo_mime_type,
			logo: cursor.to_vec(),
		})
	}
}
