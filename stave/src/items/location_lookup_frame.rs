use crate::error::Result;
use crate::frame::header::FrameHeader;

use byteorder::{BigEndian, ByteOrder};

/// An `ID3v2` MPEG location lookup table frame
///
/// Maps time offsets to byte offsets for fast seeking. The deviation bits are
/// kept packed; interpreting them needs the two bit-width fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocationLookupFrame {
	pub(crate) header: FrameHeader,
	/// MPEG frames between each reference point
	pub frames_between_references: u16,
	/// Bytes between each reference point
	pub bytes_between_references: u32,
	/// Milliseconds between each reference point
	pub milliseconds_between_references: u32,
	/// Bits used for the byte deviation of each reference
	pub bits_for_bytes_deviation: u8,
	/// Bits used for the millisecond deviation of each reference
	pub bits_for_milliseconds_deviation: u8,
	/// The packed deviation bits for every reference point
	pub deviations: Vec<u8>,
}

impl LocationLookupFrame {
	/// Decode an MLLT body: the 10-byte fixed header, then the packed deviations
	///
	/// A body too short for the fixed header decodes to an empty table.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 10 {
			return Ok(Self {
				header,
				frames_between_references: 0,
				bytes_between_references: 0,
				milliseconds_between_references: 0,
				bits_for_bytes_deviation: 0,
				bits_for_milliseconds_deviation: 0,
				deviations: Vec::new(),
			});
		}

		Ok(Self {
			header,
			frames_between_references: BigEndian::read_u16(&content[..2]),
			bytes_between_references: BigEndian::read_u24(&content[2..5]),
			milliseconds_between_references: BigEndian::read_u24(&content[5..8]),
			bits_for_bytes_deviation: content[8],
			bits_for_milliseconds_deviation: content[9],
			deviations: content[10..].to_vec(),
		})
	}
}
