use super::FrameFlags;
use crate::error::Result;
use crate::header::Id3v2Version;
use crate::util::io::BoundedReader;
use crate::util::synchsafe::SynchsafeInteger;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// An `ID3v2` frame ID
///
/// Frames keep the identifier they arrived with. A 3-character ID3v2.2 name is
/// not rewritten to its modern form during a parse; [`upgrade_v2`](crate::upgrade_v2)
/// maps between the two when a caller wants to normalize.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub enum FrameId {
	/// A 4-character `ID3v2.3`/`ID3v2.4` identifier
	Valid(Cow<'static, str>),
	/// A 3-character `ID3v2.2` identifier
	Outdated(Cow<'static, str>),
}

impl FrameId {
	pub(crate) fn new(id: Cow<'static, str>) -> Self {
		match id.len() {
			3 => FrameId::Outdated(id),
			_ => FrameId::Valid(id),
		}
	}

	/// Whether this is a legacy (`ID3v2.2`) identifier
	pub fn is_outdated(&self) -> bool {
		matches!(self, FrameId::Outdated(_))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		match self {
			FrameId::Valid(v) | FrameId::Outdated(v) => v,
		}
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// An `ID3v2` frame header
///
/// One of these is embedded in every decoded frame, carrying the identifier,
/// the tag version the frame arrived in, its declared body size, and its flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	pub(crate) version: Id3v2Version,
	pub(crate) size: u32,
	/// The frame's flags
	pub flags: FrameFlags,
}

impl FrameHeader {
	pub(crate) const fn new(
		id: FrameId,
		version: Id3v2Version,
		size: u32,
		flags: FrameFlags,
	) -> Self {
		Self {
			id,
			version,
			size,
			flags,
		}
	}

	/// Get the ID of the frame
	pub const fn id(&self) -> &FrameId {
		&self.id
	}

	/// The tag version the frame arrived in
	pub const fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The number of body bytes the frame occupied in the stream
	///
	/// This is the size declared in the frame header, fixed at decode time. Where
	/// a decoder trims or inflates the body (terminators, decompression), this
	/// still reports the bytes consumed from the stream.
	pub const fn size(&self) -> u32 {
		self.size
	}
}

/// Read an `ID3v2.3`/`ID3v2.4` frame header
///
/// Returns `Ok(None)` when the frame stream has ended, either because the declared
/// tag region is exhausted or because the next byte begins the trailing padding.
///
/// The name bytes are returned raw. A name that is not valid UTF-8 cannot match any
/// registry entry, and the caller treats it like any other unknown frame.
pub(crate) fn parse_header<R>(
	reader: &mut BoundedReader<R>,
	size: &mut u32,
	synchsafe: bool,
) -> Result<Option<(Vec<u8>, FrameFlags)>>
where
	R: Read,
{
	let name = reader.next_bytes(4)?;
	if name.len() != 4 {
		return Ok(None);
	}

	// Assume we just started reading padding
	if name[0] == 0 {
		return Ok(None);
	}

	let remainder = reader.next_bytes(6)?;
	if remainder.len() != 6 {
		return Ok(None);
	}

	// v4 frame sizes are synchsafe, v3 sizes are plain big-endian
	*size = BigEndian::read_u32(&remainder[..4]);
	if synchsafe {
		*size = size.unsynch();
	}

	let flags = u16::from_be_bytes([remainder[4], remainder[5]]);
	let flags = if synchsafe {
		FrameFlags::parse_id3v24(flags)
	} else {
		FrameFlags::parse_id3v23(flags)
	};

	Ok(Some((name, flags)))
}

/// Read an `ID3v2.2` frame header
///
/// Same contract as [`parse_header`], with the legacy 3-byte name and 3-byte
/// plain big-endian size. These headers carry no flag bytes.
pub(crate) fn parse_v2_header<R>(
	reader: &mut BoundedReader<R>,
	size: &mut u32,
) -> Result<Option<(Vec<u8>, FrameFlags)>>
where
	R: Read,
{
	let name = reader.next_bytes(3)?;
	if name.len() != 3 {
		return Ok(None);
	}

	if name[0] == 0 {
		return Ok(None);
	}

	let size_bytes = reader.next_bytes(3)?;
	if size_bytes.len() != 3 {
		return Ok(None);
	}

	*size = u32::from_be_bytes([0, size_bytes[0], size_bytes[1], size_bytes[2]]);

	Ok(Some((name, FrameFlags::default())))
}
