use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::math::scale_percentage;

use byteorder::{BigEndian, ByteOrder};

/// An `ID3v2` reverb settings frame
///
/// A fixed 12-byte layout. The feedback and premix levels are stored as a
/// fraction of the full 8-bit range, see the percentage accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReverbFrame {
	pub(crate) header: FrameHeader,
	/// Left channel reverb, in milliseconds
	pub reverb_left: u16,
	/// Right channel reverb, in milliseconds
	pub reverb_right: u16,
	/// Bounces on the left channel
	pub bounces_left: u8,
	/// Bounces on the right channel
	pub bounces_right: u8,
	/// Feedback from left to left
	pub feedback_left_to_left: u8,
	/// Feedback from left to right
	pub feedback_left_to_right: u8,
	/// Feedback from right to right
	pub feedback_right_to_right: u8,
	/// Feedback from right to left
	pub feedback_right_to_left: u8,
	/// Premix from left to right
	pub premix_left_to_right: u8,
	/// Premix from right to left
	pub premix_right_to_left: u8,
}

impl ReverbFrame {
	/// Decode an RVRB body
	///
	/// Anything other than exactly 12 bytes decodes to a frame with no content,
	/// see [`is_empty`](Self::is_empty).
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		if content.len() != 12 {
			log::debug!("Reverb settings are not 12 bytes, dropping the content");
			return Ok(Self {
				header,
				reverb_left: 0,
				reverb_right: 0,
				bounces_left: 0,
				bounces_right: 0,
				feedback_left_to_left: 0,
				feedback_left_to_right: 0,
				feedback_right_to_right: 0,
				feedback_right_to_left: 0,
				premix_left_to_right: 0,
				premix_right_to_left: 0,
			});
		}

		Ok(Self {
			header,
			reverb_left: BigEndian::read_u16(&content[..2]),
			reverb_right: BigEndian::read_u16(&content[2..4]),
			bounces_left: content[4],
			bounces_right: content[5],
			feedback_left_to_left: content[6],
			feedback_left_to_right: content[7],
			feedback_right_to_right: content[8],
			feedback_right_to_left: content[9],
			premix_left_to_right: content[10],
			premix_right_to_left: content[11],
		})
	}

	/// Whether every field is zero, as happens when the stored body was malformed
	#[must_use]
	pub fn is_empty(&self) -> bool {
		let Self {
			header: _,
			reverb_left,
			reverb_right,
			bounces_left,
			bounces_right,
			feedback_left_to_left,
			feedback_left_to_right,
			feedback_right_to_right,
			feedback_right_to_left,
			premix_left_to_right,
			premix_right_to_left,
		} = self;

		*reverb_left == 0
			&& *reverb_right == 0
			&& *bounces_left == 0
			&& *bounces_right == 0
			&& *feedback_left_to_left == 0
			&& *feedback_left_to_right == 0
			&& *feedback_right_to_right == 0
			&& *feedback_right_to_left == 0
			&& *premix_left_to_right == 0
			&& *premix_right_to_left == 0
	}

	/// The left to left feedback as a percentage
	#[must_use]
	pub fn feedback_left_to_left_percent(&self) -> u8 {
		scale_percentage(u32::from(self.feedback_left_to_left), 8)
	}

	/// The left to right feedback as a percentage
	#[must_use]
	pub fn feedback_left_to_right_percent(&self) -> u8 {
		scale_percentage(u32::from(self.feedback_left_to_right), 8)
	}

	/// The right to right feedback as a percentage
	#[must_use]
	pub fn feedback_right_to_right_percent(&self) -> u8 {
		scale_percentage(u32::from(self.feedback_right_to_right), 8)
	}

	/// The right to left feedback as a percentage
	#[must_use]
	pub fn feedback_right_to_left_percent(&self) -> u8 {
		scale_percentage(u32::from(self.feedback_right_to_left), 8)
	}

	/// The left to right premix as a percentage
	#[must_use]
	pub fn premix_left_to_right_percent(&self) -> u8 {
		scale_percentage(u32::from(self.premix_left_to_right), 8)
	}

	/// The right to left premix as a percentage
	#[must_use]
	pub fn premix_right_to_left_percent(&self) -> u8 {
		scale_percentage(u32::from(self.premix_right_to_left), 8)
	}
}
