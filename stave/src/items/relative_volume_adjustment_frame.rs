use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

use byteorder::{BigEndian, ReadBytesExt};

/// A channel identifier used in the RVA2 frame
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[allow(missing_docs)]
pub enum ChannelType {
	Other = 0,
	MasterVolume = 1,
	FrontRight = 2,
	FrontLeft = 3,
	BackRight = 4,
	BackLeft = 5,
	FrontCentre = 6,
	BackCentre = 7,
	Subwoofer = 8,
}

impl ChannelType {
	/// Get a `ChannelType` from a u8
	///
	/// Out-of-range markers fall back to [`ChannelType::Other`].
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			1 => Self::MasterVolume,
			2 => Self::FrontRight,
			3 => Self::FrontLeft,
			4 => Self::BackRight,
			5 => Self::BackLeft,
			6 => Self::FrontCentre,
			7 => Self::BackCentre,
			8 => Self::Subwoofer,
			_ => Self::Other,
		}
	}
}

/// Volume adjustment information for a specific channel
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ChannelInformation {
	/// The channel this describes
	pub channel_type: ChannelType,
	/// The adjustment in 1/512 dB steps, giving +/- 64 dB of range
	pub volume_adjustment: i16,
	/// The number of bits the peak volume occupies, 0 meaning no peak is stored
	pub bits_representing_peak: u8,
	/// The peak volume, when one is stored
	pub peak_volume: Option<Vec<u8>>,
}

impl ChannelInformation {
	/// The volume adjustment in dB
	#[must_use]
	pub fn adjustment_db(&self) -> f64 {
		f64::from(self.volume_adjustment) / 512.0
	}
}

/// An `ID3v2.4` relative volume adjustment frame
///
/// A tag may carry several of these, distinguished by their identification
/// strings. Equality and hashing lean on the identification alone.
#[derive(Clone, Debug, Eq)]
pub struct RelativeVolumeAdjustmentFrame {
	pub(crate) header: FrameHeader,
	/// The situation or device this adjustment applies to
	pub identification: String,
	/// The per-channel adjustments, in stored order
	pub channels: Vec<ChannelInformation>,
}

impl PartialEq for RelativeVolumeAdjustmentFrame {
	fn eq(&self, other: &Self) -> bool {
		self.identification == other.identification
	}
}

impl Hash for RelativeVolumeAdjustmentFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.identification.hash(state);
	}
}

impl RelativeVolumeAdjustmentFrame {
	/// Decode an RVA2 body: terminated identification, then channel records
	///
	/// A record is a channel type, a 2-byte adjustment, a peak bit width, and
	/// that many bits of peak volume rounded up to whole bytes. The list ends
	/// when a full record no longer fits.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let mut cursor = content;
		let identification = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		let mut channels = Vec::new();
		while cursor.len() >= 4 {
			let channel_type = ChannelType::from_u8(cursor.read_u8()?);
			let volume_adjustment = cursor.read_i16::<BigEndian>()?;
			let bits_representing_peak = cursor.read_u8()?;

			let mut peak_volume = None;
			if bits_representing_peak > 0 {
				let peak_len = ((u16::from(bits_representing_peak) + 7) >> 3) as usize;
				if cursor.len() < peak_len {
					break;
				}

				peak_volume = Some(cursor[..peak_len].to_vec());
				cursor = &cursor[peak_len..];
			}

			channels.push(ChannelInformation {
				channel_type,
				volume_adjustment,
				bits_representing_peak,
				peak_volume,
			});
		}

		Ok(Self {
			header,
			identification,
			channels,
		})
	}
}
