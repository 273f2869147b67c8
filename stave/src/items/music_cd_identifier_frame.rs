use crate::error::Result;
use crate::frame::header::FrameHeader;

/// An `ID3v2` music CD identifier frame
///
/// The table of contents of the source CD, used to look the disc up in
/// databases like CDDB.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MusicCdIdentifierFrame {
	pub(crate) header: FrameHeader,
	/// The CD table of contents header
	pub disc_header: [u8; 4],
	/// One 8-byte record per track
	pub tracks: Vec<[u8; 8]>,
}

impl MusicCdIdentifierFrame {
	/// Decode an MCDI body: 4-byte disc header, then 8-byte track records
	///
	/// A body too short for the disc header and at least two track records
	/// decodes to an empty identifier. A trailing partial record is dropped.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() <= 19 {
			return Ok(Self {
				header,
				disc_header: [0; 4],
				tracks: Vec::new(),
			});
		}

		// Infallible, length checked above
		let disc_header: [u8; 4] = content[..4].try_into().unwrap();

		let tracks = content[4..]
			.chunks_exact(8)
			.map(|record| record.try_into().unwrap())
			.collect();

		Ok(Self {
			header,
			disc_header,
			tracks,
		})
	}
}
