use crate::error::{ErrorKind, Result, StaveError};
use crate::frame::header::FrameHeader;
use crate::items::TimestampFormat;

/// An `ID3v2` position synchronisation frame
///
/// Where in the audio playback was interrupted. The position is at least 32
/// bits on the wire but may be wider, so it is kept as stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionSyncFrame {
	pub(crate) header: FrameHeader,
	/// The unit of the position
	pub timestamp_format: TimestampFormat,
	/// The big-endian position bytes, as stored
	pub position: Vec<u8>,
}

impl PositionSyncFrame {
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let timestamp_format = TimestampFormat::from_u8(content[0])
			.ok_or_else(|| StaveError::new(ErrorKind::BadTimestampFormat))?;

		Ok(Self {
			header,
			timestamp_format,
			position: content[1..].to_vec(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::PositionSyncFrame;
	use crate::frame::FrameFlags;
	use crate::frame::header::{FrameHeader, FrameId};
	use crate::header::Id3v2Version;
	use crate::items::TimestampFormat;

	use std::borrow::Cow;

	fn header() -> FrameHeader {
		FrameHeader::new(
			FrameId::new(Cow::Borrowed("POSS")),
			Id3v2Version::V4,
			0,
			FrameFlags::default(),
		)
	}

	#[test_log::test]
	fn format_and_position() {
		let mut content = vec![0x02];
		content.extend_from_slice(&90_000u32.to_be_bytes());

		let frame = PositionSyncFrame::parse(&content, header()).unwrap();

		assert_eq!(frame.timestamp_format, TimestampFormat::MS);
		assert_eq!(frame.position, 90_000u32.to_be_bytes());
	}

	#[test_log::test]
	fn invalid_format_is_an_error() {
		assert!(PositionSyncFrame::parse(&[0x00, 0x01], header()).is_err());
	}
}
