pub(crate) mod content;
pub(crate) mod header;
pub(crate) mod read;

use crate::header::Id3v2Version;
use crate::items::{
	AttachedPictureFrame, AudioEncryptionFrame, BinaryFrame, CommentFrame, CommercialFrame,
	EncryptedMetaFrame, EqualisationFrame, EventTimingCodesFrame, ExtendedTextFrame,
	ExtendedUrlFrame, GeneralEncapsulatedObject, GroupIdentificationFrame, KeyValueFrame,
	LinkedInformationFrame, LocationLookupFrame, MusicCdIdentifierFrame, OwnershipFrame,
	PlayCounterFrame, PopularimeterFrame, PositionSyncFrame, PrivateFrame,
	RecommendedBufferFrame, RelativeVolumeAdjustmentFrame, ReverbFrame, SeekFrame,
	SeekPointIndexFrame, SignatureFrame, SynchronizedTempoFrame, SynchronizedTextFrame,
	TermsOfUseFrame, TextInformationFrame, UniqueFileIdentifierFrame, UnsynchronizedTextFrame,
	UrlLinkFrame,
};
use crate::registry;
use header::{FrameHeader, FrameId};

use std::borrow::Cow;

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum Frame {
			$(
				$(#[$variant_meta:meta])+
				$variant:ident($type:ty),
			)+
		}
	) => {
		$(#[$meta])*
		pub enum Frame {
			$(
				$(#[$variant_meta])+
				$variant($type),
			)+
		}

		impl Frame {
			/// The shared frame header
			pub fn header(&self) -> &FrameHeader {
				match self {
					$(
						Frame::$variant(frame) => &frame.header,
					)+
				}
			}
		}

		$(
			impl From<$type> for Frame {
				fn from(value: $type) -> Self {
					Frame::$variant(value)
				}
			}
		)+
	}
}

define_frames! {
	/// Represents an `ID3v2` frame
	///
	/// A frame keeps the identifier it arrived with: an `ID3v2.2` tag produces frames
	/// with 3-character [`FrameId::Outdated`] identifiers that decode through the same
	/// typed variants as their modern counterparts.
	#[non_exhaustive]
	#[derive(Clone, Debug, PartialEq)]
	pub enum Frame {
		/// Represents a "COMM" frame
		Comment(CommentFrame),
		/// Represents a "USLT" frame
		UnsynchronizedText(UnsynchronizedTextFrame),
		/// Represents a "T..." (excluding TXXX/TIPL/TMCL) frame
		Text(TextInformationFrame),
		/// Represents a "TXXX" frame
		UserText(ExtendedTextFrame),
		/// Represents a "W..." (excluding WXXX) frame
		Url(UrlLinkFrame),
		/// Represents a "WXXX" frame
		UserUrl(ExtendedUrlFrame),
		/// Represents an "APIC" or "PIC" frame
		Picture(AttachedPictureFrame),
		/// Represents a "POPM" frame
		Popularimeter(PopularimeterFrame),
		/// Represents an "IPLS", "TIPL", or "TMCL" frame
		KeyValue(KeyValueFrame),
		/// Represents an "RVA2" frame
		RelativeVolumeAdjustment(RelativeVolumeAdjustmentFrame),
		/// Unique file identifier
		UniqueFileIdentifier(UniqueFileIdentifierFrame),
		/// Represents an "OWNE" frame
		Ownership(OwnershipFrame),
		/// Represents an "ETCO" frame
		EventTimingCodes(EventTimingCodesFrame),
		/// Represents a "PRIV" frame
		Private(PrivateFrame),
		/// Represents a "USER" frame
		TermsOfUse(TermsOfUseFrame),
		/// Represents a "SYLT" frame
		SynchronizedText(SynchronizedTextFrame),
		/// Represents a "SYTC" frame
		SynchronizedTempo(SynchronizedTempoFrame),
		/// Represents a "PCNT" frame
		PlayCounter(PlayCounterFrame),
		/// Represents a "GRID" frame
		GroupIdentification(GroupIdentificationFrame),
		/// Represents an "AENC" frame
		AudioEncryption(AudioEncryptionFrame),
		/// Represents a "CRM" frame, `ID3v2.2` only
		EncryptedMeta(EncryptedMetaFrame),
		/// Represents a "GEOB" frame
		EncapsulatedObject(GeneralEncapsulatedObject),
		/// Represents an "RBUF" frame
		RecommendedBuffer(RecommendedBufferFrame),
		/// Represents an "RVRB" frame
		Reverb(ReverbFrame),
		/// Represents an "EQU2" frame
		Equalisation(EqualisationFrame),
		/// Represents a "POSS" frame
		PositionSync(PositionSyncFrame),
		/// Represents a "COMR" frame
		Commercial(CommercialFrame),
		/// Represents a "LINK" frame
		LinkedInformation(LinkedInformationFrame),
		/// Represents an "MLLT" frame
		LocationLookup(LocationLookupFrame),
		/// Represents an "MCDI" frame
		MusicCdIdentifier(MusicCdIdentifierFrame),
		/// Represents a "SEEK" frame
		Seek(SeekFrame),
		/// Represents an "ASPI" frame
		SeekPointIndex(SeekPointIndexFrame),
		/// Represents a "SIGN" frame
		Signature(SignatureFrame),
		/// Binary data
		///
		/// NOTES:
		///
		/// * This is used for EQUA, ENCR, and RVAD, whose bodies are opaque
		/// * This is used for encrypted frames, no matter their identifier
		Binary(BinaryFrame),
	}
}

impl Frame {
	/// Get the ID of the frame
	pub fn id(&self) -> &FrameId {
		&self.header().id
	}

	/// Extract the string from the [`FrameId`]
	pub fn id_str(&self) -> &str {
		self.id().as_str()
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header().flags
	}

	/// The tag version the frame arrived in
	pub fn version(&self) -> Id3v2Version {
		self.header().version
	}

	/// The number of body bytes the frame occupied in the stream
	pub fn size(&self) -> u32 {
		self.header().size
	}

	/// The published description for the frame's identifier
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
	/// if let Some(frame) = tag.get_frame("TIT2") {
	/// 	assert_eq!(frame.description(), "Title/songname/content description");
	/// }
	/// # Ok(()) }
	/// ```
	pub fn description(&self) -> &'static str {
		registry::lookup(self.version(), self.id_str()).map_or("", |spec| spec.description)
	}

	/// The identifier as displayed, with the v2.4 deprecation marker applied
	///
	/// See [`registry::display_name`].
	pub fn display_name(&self) -> Cow<'_, str> {
		registry::display_name(self.version(), self.id_str())
	}

	/// Whether the frame's text content arrived in one of the UTF-16 encodings
	///
	/// `false` for frames that carry no encoding marker.
	pub fn is_utf16(&self) -> bool {
		match self {
			Frame::Comment(frame) => frame.encoding.is_utf16(),
			Frame::UnsynchronizedText(frame) => frame.encoding.is_utf16(),
			Frame::Text(frame) => frame.encoding.is_utf16(),
			Frame::UserText(frame) => frame.encoding.is_utf16(),
			Frame::UserUrl(frame) => frame.encoding.is_utf16(),
			Frame::Picture(frame) => frame.encoding.is_utf16(),
			Frame::KeyValue(frame) => frame.encoding.is_utf16(),
			Frame::Ownership(frame) => frame.encoding.is_utf16(),
			Frame::TermsOfUse(frame) => frame.encoding.is_utf16(),
			Frame::SynchronizedText(frame) => frame.encoding.is_utf16(),
			Frame::EncapsulatedObject(frame) => frame.encoding.is_utf16(),
			Frame::Commercial(frame) => frame.encoding.is_utf16(),
			Frame::EncryptedMeta(frame) => frame.utf16,
			_ => false,
		}
	}
}

/// Various flags to describe the content of an item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The group identifier the frame belongs to
	///
	/// All frames with the same group identifier byte belong to the same group.
	pub grouping_identity: Option<u8>,
	/// Frame is zlib compressed
	pub compression: bool,
	/// Frame encryption method symbol
	///
	/// Since the encryption method is unknown, nothing can be done with the body
	/// of these frames. They are kept as [`Frame::Binary`].
	pub encryption: Option<u8>,
	/// Frame is unsynchronised
	///
	/// In short, this makes all "0xFF X (X >= 0xE0)" combinations into "0xFF 0x00 X" to avoid confusion
	/// with the MPEG frame header, which is often identified by its "frame sync" (11 set bits).
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	///
	/// The data length indicator is the size of the frame if the flags were all zeroed out.
	/// This is usually used in combination with `compression` and `encryption` (depending on encryption method).
	pub data_length_indicator: Option<u32>,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.4 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	/// * `data_length_indicator`
	pub fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x4000 == 0x4000,
			file_alter_preservation: flags & 0x2000 == 0x2000,
			read_only: flags & 0x1000 == 0x1000,
			grouping_identity: (flags & 0x0040 == 0x0040).then_some(0),
			compression: flags & 0x0008 == 0x0008,
			encryption: (flags & 0x0004 == 0x0004).then_some(0),
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: (flags & 0x0001 == 0x0001).then_some(0),
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	pub fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			grouping_identity: (flags & 0x0020 == 0x0020).then_some(0),
			compression: flags & 0x0080 == 0x0080,
			encryption: (flags & 0x0040 == 0x0040).then_some(0),
			unsynchronisation: false,
			data_length_indicator: None,
		}
	}
}
