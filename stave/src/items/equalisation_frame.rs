use crate::error::Result;
use crate::frame::header::FrameHeader;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::hash::{Hash, Hasher};

use byteorder::{BigEndian, ReadBytesExt};

/// How the points of an [`EqualisationFrame`] are connected
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InterpolationMethod {
	/// No interpolation, each point is a band on its own
	Band = 0,
	/// Linear interpolation between adjacent points
	Linear = 1,
}

impl InterpolationMethod {
	/// Get an `InterpolationMethod` from a u8
	///
	/// Anything other than 0 interpolates linearly.
	pub fn from_u8(byte: u8) -> Self {
		if byte == 0 {
			Self::Band
		} else {
			Self::Linear
		}
	}
}

/// A single point on an equalisation curve
///
/// Both fields are stored as published. The frequency unit is half-Hz and the
/// volume unit is 1/512 dB, see the accessors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EqualisationPoint {
	/// The frequency, in half-Hz steps
	pub frequency: u16,
	/// The volume adjustment, in 1/512 dB steps
	pub volume: i16,
}

impl EqualisationPoint {
	/// The frequency in Hz
	#[must_use]
	pub fn frequency_hz(&self) -> f64 {
		f64::from(self.frequency) / 2.0
	}

	/// The volume adjustment in dB
	#[must_use]
	pub fn volume_db(&self) -> f64 {
		f64::from(self.volume) / 512.0
	}
}

/// An `ID3v2.4` equalisation frame
///
/// A tag may carry several of these, distinguished by their identification
/// strings. Equality and hashing lean on the identification alone.
#[derive(Clone, Debug, Eq)]
pub struct EqualisationFrame {
	pub(crate) header: FrameHeader,
	/// How the curve is interpolated between points
	pub interpolation_method: InterpolationMethod,
	/// The identification string for this curve
	pub identification: String,
	/// The points of the curve, in stored order
	pub points: Vec<EqualisationPoint>,
}

impl PartialEq for EqualisationFrame {
	fn eq(&self, other: &Self) -> bool {
		self.identification == other.identification
	}
}

impl Hash for EqualisationFrame {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.identification.hash(state);
	}
}

impl EqualisationFrame {
	/// Decode an EQU2 body: interpolation method, identification, curve points
	///
	/// The point list ends when fewer than 4 bytes remain, a dangling partial
	/// point is dropped.
	pub(crate) fn parse(content: &[u8], header: FrameHeader) -> Result<Self> {
		let interpolation_method = InterpolationMethod::from_u8(content[0]);
		let mut cursor = &content[1..];

		let identification = decode_text(
			&mut cursor,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		let mut points = Vec::new();
		while cursor.len() >= 4 {
			let frequency = cursor.read_u16::<BigEndian>()?;
			let volume = cursor.read_i16::<BigEndian>()?;

			points.push(EqualisationPoint { frequency, volume });
		}

		Ok(Self {
			header,
			interpolation_method,
			identification,
			points,
		})
	}
}
