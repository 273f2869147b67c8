use crate::error::{ErrorKind, Result, StaveError};
use crate::frame::header::FrameHeader;
use crate::items::TimestampFormat;

use byteorder::{BigEndian, ReadBytesExt};

/// A single tempo change in a [`SynchronizedTempoFrame`]
///
/// Tempo 0 marks a beat-free passage and 1 a single beat stroke. Values above
/// 255 arrive as a `0xFF` byte plus an extension byte, giving a range up to 510
/// BPM.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TempoCode {
	/// The tempo, in beats per minute
	pub tempo: u16,
	/// When the tempo takes effect, in the frame's timestamp unit
	pub timestamp: u32,
}

/// An `ID3v2` synchronized tempo codes frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SynchronizedTempoFrame {
	pub(crate) header: FrameHeader,
	/// The unit of the tempo timestamps
	pub timestamp_format: TimestampFormat,
	/// The tempo changes, in stored order
	pub tempo_codes: Vec<TempoCode>,
}

impl SynchronizedTempoFrame {
	/// Decode a SYTC body: timestamp format, then tempo records
	///
	/// The record list ends when a full record no longer fits.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let timestamp_format = TimestampFormat::from_u8(content[0])
			.ok_or_else(|| StaveError::new(ErrorKind::BadTimestampFormat))?;
		let mut cursor = &content[1..];

		let mut tempo_codes = Vec::new();
		while cursor.len() >= 5 {
			let mut tempo = u16::from(cursor.read_u8()?);
			if tempo == 255 {
				if cursor.len() < 5 {
					break;
				}

				tempo += u16::from(cursor.read_u8()?);
			}

			let timestamp = cursor.read_u32::<BigEndian>()?;
			tempo_codes.push(TempoCode { tempo, timestamp });
		}

		Ok(Self {
			header,
			timestamp_format,
			tempo_codes,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::{SynchronizedTempoFrame, TempoCode};
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;
	use crate::items::TimestampFormat;

	use std::borrow::Cow;

	fn header() -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed("SYTC")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn tempo_records() {
		let mut content = vec![0x02];
		content.push(120);
		content.extend_from_slice(&0u32.to_be_bytes());
		// 255 + 45 = 300 BPM
		content.extend_from_slice(&[0xFF, 45]);
		content.extend_from_slice(&60_000u32.to_be_bytes());

		let frame = SynchronizedTempoFrame::parse(&content, header()).unwrap();

		assert_eq!(frame.timestamp_format, TimestampFormat::MS);
		assert_eq!(
			frame.tempo_codes,
			vec![
				TempoCode {
					tempo: 120,
					timestamp: 0
				},
				TempoCode {
					tempo: 300,
					timestamp: 60_000
				}
			]
		);
	}

	#[test_log::test]
	fn extended_tempo_without_room_is_dropped() {
		let mut content = vec![0x01, 60];
		content.extend_from_slice(&10u32.to_be_bytes());
		// An extended record with no room for its timestamp
		content.extend_from_slice(&[0xFF, 0x01, 0x00, 0x00, 0x00]);

		let frame = SynchronizedTempoFrame::parse(&content, header()).unwrap();
		assert_eq!(frame.tempo_codes.len(), 1);
	}
}
