use crate::error::{ErrorKind, Result, StaveError};
use crate::frame::header::FrameHeader;
use crate::items::TimestampFormat;

use byteorder::{BigEndian, ReadBytesExt};

/// A single event in an [`EventTimingCodesFrame`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
	/// The published event type marker
	pub event_type: u8,
	/// When the event occurs, in the frame's timestamp unit
	pub timestamp: u32,
}

/// An `ID3v2` event timing codes frame
///
/// Key points in the audio (intro end, verse start, ...) keyed to timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventTimingCodesFrame {
	pub(crate) header: FrameHeader,
	/// The unit of the event timestamps
	pub timestamp_format: TimestampFormat,
	/// The events, in stored order
	pub events: Vec<Event>,
}

impl EventTimingCodesFrame {
	/// Decode an ETCO body: timestamp format, then 5-byte event records
	///
	/// The record list ends when fewer than 5 bytes remain.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let timestamp_format = TimestampFormat::from_u8(content[0])
			.ok_or_else(|| StaveError::new(ErrorKind::BadTimestampFormat))?;
		let mut cursor = &content[1..];

		let mut events = Vec::new();
		while cursor.len() >= 5 {
			let event_type = cursor.read_u8()?;
			let timestamp = cursor.read_u32::<BigEndian>()?;

			events.push(Event {
				event_type,
				timestamp,
			});
		}

		Ok(Self {
			header,
			timestamp_format,
			events,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::{Event, EventTimingCodesFrame};
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;
	use crate::items::TimestampFormat;

	use std::borrow::Cow;

	fn header() -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed("ETCO")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn event_records() {
		let mut content = vec![0x02];
		content.push(0x03); // intro end
		content.extend_from_slice(&15_000u32.to_be_bytes());
		content.push(0x11); // energy change
		content.extend_from_slice(&240_000u32.to_be_bytes());

		let frame = EventTimingCodesFrame::parse(&content, header()).unwrap();

		assert_eq!(frame.timestamp_format, TimestampFormat::MS);
		assert_eq!(
			frame.events,
			vec![
				Event {
					event_type: 0x03,
					timestamp: 15_000
				},
				Event {
					event_type: 0x11,
					timestamp: 240_000
				}
			]
		);
	}

	#[test_log::test]
	fn partial_record_is_dropped() {
		let mut content = vec![0x01, 0x03];
		content.extend_from_slice(&100u32.to_be_bytes());
		content.extend_from_slice(&[0x04, 0x00]);

		let frame = EventTimingCodesFrame::parse(&content, header()).unwrap();
		assert_eq!(frame.events.len(), 1);
	}

	#[test_log::test]
	fn invalid_timestamp_format_is_an_error() {
		assert!(EventTimingCodesFrame::parse(&[0x09, 0x03], header()).is_err());
	}
}
