use crate::error::Result;
use crate::macros::err;
use crate::util::io::BoundedReader;
use crate::util::synchsafe::SynchsafeInteger;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	///
	/// This is surfaced as stored. The frame stream is read as-is; only the per-frame
	/// unsynchronisation flag of ID3v2.4 (see [`FrameFlags::unsynchronisation`](crate::FrameFlags))
	/// changes how a body is decoded.
	pub unsynchronisation: bool,
	/// Indicates that an extended header follows this one
	pub extended: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	///
	/// Only meaningful in ID3v2.4, always `false` for earlier versions.
	pub footer: bool,
}

/// The ID3v2 tag header
///
/// This is the fixed 10 bytes every ID3v2 tag starts with: the `"ID3"` identifier, the
/// version pair, a flag byte, and the synchsafe size of everything that follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The major version of the tag
	pub version: Id3v2Version,
	/// The revision within the major version
	pub revision: u8,
	/// Flags that apply to the entire tag
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; 10];
		bytes.read_exact(&mut header)?;

		if &header[..3] != b"ID3" {
			err!(FakeTag);
		}

		// Version is stored as [major, revision]
		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			major => err!(BadVersion(major, header[4])),
		};

		let revision = header[4];
		let flags = header[5];

		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended: flags & 0x40 == 0x40,
			experimental: flags & 0x20 == 0x20,
			footer: version == Id3v2Version::V4 && flags & 0x10 == 0x10,
		};

		// The header size is synchsafe in every version, unlike frame sizes
		let size = BigEndian::read_u32(&header[6..]).unsynch();

		Ok(Id3v2Header {
			version,
			revision,
			flags: flags_parsed,
			size,
		})
	}
}

/// The optional extended header
///
/// Its 10 bytes (and the 4 CRC bytes, when declared) sit between the tag header and the
/// first frame, and count toward the declared tag size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtendedHeader {
	/// The size of the extended header, a plain big-endian integer
	pub size: u32,
	/// The two raw flag bytes
	pub flag_bytes: [u8; 2],
	/// The declared padding size, a plain big-endian integer
	pub padding: u32,
	/// Whether the first flag byte declares a CRC
	pub has_crc: bool,
	/// The CRC content, when declared **and** actually present in the stream
	pub crc: Option<[u8; 4]>,
}

impl ExtendedHeader {
	/// Returns `Ok(None)` when the declared tag region ends inside the extended header,
	/// in which case the caller should finish with an empty frame list.
	pub(crate) fn parse<R>(reader: &mut BoundedReader<R>) -> Result<Option<Self>>
	where
		R: Read,
	{
		log::debug!("Parsing extended header");

		let content = reader.next_bytes(10)?;
		if content.len() != 10 {
			log::warn!("Tag too small to hold its extended header, stopping");
			return Ok(None);
		}

		let size = BigEndian::read_u32(&content[..4]);
		let flag_bytes = [content[4], content[5]];
		let padding = BigEndian::read_u32(&content[6..]);

		let has_crc = content[4] & 0x80 == 0x80;
		let mut crc = None;
		if has_crc {
			// A soft stop here leaves the checksum out, and the frame loop
			// will end on its first read
			let crc_content = reader.next_bytes(4)?;
			crc = <[u8; 4]>::try_from(crc_content.as_slice()).ok();
		}

		Ok(Some(ExtendedHeader {
			size,
			flag_bytes,
			padding,
			has_crc,
			crc,
		}))
	}
}
