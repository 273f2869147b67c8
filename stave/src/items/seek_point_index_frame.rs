use crate::error::Result;
use crate::frame::header::FrameHeader;

use byteorder::{BigEndian, ByteOrder};

/// An `ID3v2.4` audio seek point index frame
///
/// Fractional positions into the indexed region, for seeking without a full
/// scan. The fraction bytes are kept packed, their width is `bits_per_point`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeekPointIndexFrame {
	pub(crate) header: FrameHeader,
	/// Where the indexed region starts, in bytes
	pub indexed_data_start: u32,
	/// The length of the indexed region, in bytes
	pub indexed_data_length: u32,
	/// The number of index points
	pub point_count: u16,
	/// Bits per index point, 8 or 16
	pub bits_per_point: u8,
	/// The packed index fractions
	pub fraction_data: Vec<u8>,
}

impl SeekPointIndexFrame {
	/// Decode an ASPI body: start, length, count, bit width, fractions
	///
	/// A body too short for the fixed fields, a bit width that is not a whole
	/// number of bytes, or a fraction region that disagrees with the declared
	/// count all decode to a zeroed index.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() < 12 {
			return Ok(Self::zeroed(header));
		}

		let indexed_data_start = BigEndian::read_u32(&content[..4]);
		let indexed_data_length = BigEndian::read_u32(&content[4..8]);
		let point_count = BigEndian::read_u16(&content[8..10]);
		let bits_per_point = content[10];
		let fraction_data = &content[11..];

		if bits_per_point == 0 || bits_per_point % 8 != 0 {
			log::debug!("Seek point index has an unusable bit width: {bits_per_point}");
			return Ok(Self::zeroed(header));
		}

		let expected = usize::from(point_count) * usize::from(bits_per_point / 8);
		if fraction_data.len() != expected {
			log::debug!(
				"Seek point index disagrees with its own count, expected {expected} bytes, found {}",
				fraction_data.len()
			);
			return Ok(Self::zeroed(header));
		}

		Ok(Self {
			header,
			indexed_data_start,
			indexed_data_length,
			point_count,
			bits_per_point,
			fraction_data: fraction_data.to_vec(),
		})
	}

	fn zeroed(header: FrameHeader) -> Self {
		Self {
			header,
			indexed_data_start: 0,
			indexed_data_length: 0,
			point_count: 0,
			bits_per_point: 0,
			fraction_data: Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::SeekPointIndexFrame;
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;

	use std::borrow::Cow;

	fn header() -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed("ASPI")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		)
	}

	fn body(count: u16, bits: u8, fractions: &[u8]) -> Vec<u8> {
		let mut content = Vec::new();
		content.extend_from_slice(&4096u32.to_be_bytes());
		content.extend_from_slice(&1_000_000u32.to_be_bytes());
		content.extend_from_slice(&count.to_be_bytes());
		content.push(bits);
		content.extend_from_slice(fractions);
		content
	}

	#[test_log::test]
	fn well_formed_index() {
		let frame =
			SeekPointIndexFrame::parse(&body(3, 8, &[0x10, 0x80, 0xF0]), header()).unwrap();

		assert_eq!(frame.indexed_data_start, 4096);
		assert_eq!(frame.indexed_data_length, 1_000_000);
		assert_eq!(frame.point_count, 3);
		assert_eq!(frame.bits_per_point, 8);
		assert_eq!(frame.fraction_data, &[0x10, 0x80, 0xF0]);
	}

	#[test_log::test]
	fn count_mismatch_is_a_zeroed_index() {
		let frame = SeekPointIndexFrame::parse(&body(3, 16, &[0x10, 0x80]), header()).unwrap();

		assert_eq!(frame.point_count, 0);
		assert!(frame.fraction_data.is_empty());
	}

	#[test_log::test]
	fn ragged_bit_width_is_a_zeroed_index() {
		let frame = SeekPointIndexFrame::parse(&body(2, 7, &[0x10, 0x80]), header()).unwrap();
		assert_eq!(frame.point_count, 0);
	}
}
