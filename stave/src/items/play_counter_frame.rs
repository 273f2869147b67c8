use crate::error::Result;
use crate::frame::header::FrameHeader;

/// An `ID3v2` play counter frame
///
/// The counter is kept as stored. It is at least 32 bits on the wire and grows
/// a byte whenever it would overflow, so a pathological writer can produce one
/// wider than any fixed integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayCounterFrame {
	pub(crate) header: FrameHeader,
	/// The big-endian counter bytes, as stored
	pub counter: Vec<u8>,
}

impl PlayCounterFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		Ok(Self {
			header,
			counter: content.to_vec(),
		})
	}

	/// The number of plays, saturating at [`u64::MAX`]
	#[must_use]
	pub fn play_count(&self) -> u64 {
		if self.counter.len() > 8 {
			return u64::MAX;
		}

		let mut bytes = [0u8; 8];
		bytes[8 - self.counter.len()..].copy_from_slice(&self.counter);
		u64::from_be_bytes(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::PlayCounterFrame;
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;

	use std::borrow::Cow;

	fn header() -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed("PCNT")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn four_byte_counter() {
		let frame = PlayCounterFrame::parse(&1512u32.to_be_bytes(), header()).unwrap();
		assert_eq!(frame.play_count(), 1512);
	}

	#[test_log::test]
	fn widened_counter() {
		// Five bytes, the counter grew past 32 bits
		let frame = PlayCounterFrame::parse(&[0x01, 0x00, 0x00, 0x00, 0x00], header()).unwrap();
		assert_eq!(frame.play_count(), 1 << 32);
	}

	#[test_log::test]
	fn oversized_counter_saturates() {
		let frame = PlayCounterFrame::parse(&[0xFF; 9], header()).unwrap();
		assert_eq!(frame.play_count(), u64::MAX);
	}
}
