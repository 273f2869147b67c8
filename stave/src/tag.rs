//! The decoded tag and its query surface
//!
//! An [`Id3v2Tag`] is a decode result: it is filled by one linear pass over the byte
//! source and never mutated afterwards. Frames keep their arrival order, duplicate
//! identifiers included.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::frame::Frame;
use crate::header::{ExtendedHeader, Id3v2Header, Id3v2TagFlags, Id3v2Version};
use crate::util::upgrade::upgrade_v2;

use std::io::Read;

/// An `ID3v2` tag
///
/// The tag holds its frames in the order they appeared in the stream. Duplicate
/// identifiers are legal and preserved; the accessors return the first match.
///
/// ## Conversions
///
/// ### From a reader
///
/// The tag is read with [`Id3v2Tag::parse`], which expects the reader to be
/// positioned at the `"ID3"` magic. Locating the tag inside a file is the
/// caller's job.
#[derive(Clone, Debug, PartialEq)]
pub struct Id3v2Tag {
	pub(crate) header: Id3v2Header,
	pub(crate) extended: Option<ExtendedHeader>,
	pub(crate) frames: Vec<Frame>,
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	/// Parse an `ID3v2` tag from a reader
	///
	/// The reader must be positioned at the start of the tag, the 10 header bytes
	/// beginning with `"ID3"`.
	///
	/// # Errors
	///
	/// * The magic is missing ([`ErrorKind::FakeTag`](crate::error::ErrorKind::FakeTag))
	///   or the major version is unsupported ([`ErrorKind::BadVersion`](crate::error::ErrorKind::BadVersion))
	/// * The reader faults, or an allocation guard trips
	/// * With [`ParsingMode::Strict`](crate::config::ParsingMode::Strict), any frame
	///   body that fails to decode
	///
	/// Everything else is absorbed into the returned tag, which may be partial or
	/// empty. See [`ParsingMode`](crate::config::ParsingMode) for the full policy.
	///
	/// # Examples
	///
	/// ```rust
	/// use stave::config::ParseOptions;
	/// use stave::tag::Id3v2Tag;
	///
	/// # fn main() -> stave::error::Result<()> {
	/// let mut bytes = Vec::new();
	/// bytes.extend_from_slice(b"ID3\x03\x00\x00\x00\x00\x00\x17");
	/// bytes.extend_from_slice(b"TPE1");
	/// bytes.extend_from_slice(&13u32.to_be_bytes());
	/// bytes.extend_from_slice(&[0, 0]);
	/// bytes.extend_from_slice(b"\x00Cult of Luna");
	///
	/// let mut reader = std::io::Cursor::new(bytes);
	/// let tag = Id3v2Tag::parse(&mut reader, ParseOptions::new())?;
	///
	/// assert_eq!(tag.len(), 1);
	/// assert_eq!(tag.get_artist(), Some("Cult of Luna"));
	/// # Ok(()) }
	/// ```
	pub fn parse<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		let header = Id3v2Header::parse(reader)?;
		crate::read::parse_id3v2(reader, header, parse_options)
	}

	/// The tag header the stream started with
	pub fn header(&self) -> &Id3v2Header {
		&self.header
	}

	/// The extended header, when the tag declared one
	///
	/// `None` when the extended flag was unset, and also when the declared tag
	/// region ended before a whole extended header could be read.
	pub fn extended_header(&self) -> Option<&ExtendedHeader> {
		self.extended.as_ref()
	}

	/// The version of the tag
	///
	/// Frames are never upgraded between versions; each frame also reports this
	/// value through [`Frame::version`].
	pub fn version(&self) -> Id3v2Version {
		self.header.version
	}

	/// Returns the [`Id3v2TagFlags`]
	pub fn flags(&self) -> Id3v2TagFlags {
		self.header.flags
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag contains any frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns an iterator over the tag's frames, in arrival order
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}

	/// Gets a [`Frame`] from an id
	///
	/// When the identifier occurs more than once, the first occurrence wins.
	pub fn get_frame(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.id_str() == id)
	}

	/// Gets the text for a frame
	///
	/// This only matches text information frames; a binary or structured frame
	/// under the same identifier returns `None`. `TXXX` frames are told apart by
	/// description, not identifier, and are not covered here.
	pub fn get_text(&self, id: &str) -> Option<&str> {
		if let Some(Frame::Text(text)) = self.get_frame(id) {
			return Some(&text.value);
		}

		None
	}

	/// The artist, via the first non-empty of `TPE1`, `TPE2`, `TPE3`, `TPE4`
	///
	/// Legacy `ID3v2.2` names (`TP1`..`TP4`) participate through the alias table.
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use stave::config::ParseOptions;
	/// use stave::tag::Id3v2Tag;
	///
	/// # fn main() -> stave::error::Result<()> {
	/// # let mut reader = std::io::Cursor::new(Vec::new());
	/// let tag = Id3v2Tag::parse(&mut reader, ParseOptions::new())?;
	///
	/// if let Some(artist) = tag.get_artist() {
	/// 	println!("{artist}");
	/// }
	/// # Ok(()) }
	/// ```
	pub fn get_artist(&self) -> Option<&str> {
		self.first_non_empty_text(&["TPE1", "TPE2", "TPE3", "TPE4"])
	}

	/// The album, via the first non-empty of `TALB`, `TOAL`
	pub fn get_album(&self) -> Option<&str> {
		self.first_non_empty_text(&["TALB", "TOAL"])
	}

	/// The title, via the first non-empty of `TIT2`, `TIT3`, `TIT1`
	pub fn get_title(&self) -> Option<&str> {
		self.first_non_empty_text(&["TIT2", "TIT3", "TIT1"])
	}

	// Frames whose decoded value is empty don't satisfy a candidate, the next one
	// in the chain gets a chance.
	fn first_non_empty_text(&self, candidates: &[&str]) -> Option<&str> {
		for candidate in candidates {
			let value = self.frames.iter().find_map(|frame| {
				let id = frame.id_str();
				if id != *candidate && upgrade_v2(id) != Some(*candidate) {
					return None;
				}

				match frame {
					Frame::Text(text) if !text.value.is_empty() => Some(text.value.as_str()),
					_ => None,
				}
			});

			if value.is_some() {
				return value;
			}
		}

		None
	}
}
