use crate::error::Result;
use crate::frame::Frame;
use crate::frame::header::FrameHeader;
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
use crate::macros::err;
use crate::registry::FrameKind;
use crate::util::text::TextEncoding;

/// Decode a frame body through its registry family
///
/// The version the body arrived in rides along in `header`, the `ID3v2.2`
/// identifiers decode through the same families as their modern forms.
pub(crate) fn parse_content(content: &[u8], kind: FrameKind, header: FrameHeader) -> Result<Frame> {
	log::trace!("Parsing frame content for ID: {}", header.id);

	let frame = match kind {
		FrameKind::Text => Frame::Text(TextInformationFrame::parse(content, header)?),
		FrameKind::UserText => Frame::UserText(ExtendedTextFrame::parse(content, header)?),
		FrameKind::Url => Frame::Url(UrlLinkFrame::parse(content, header)?),
		FrameKind::UserUrl => Frame::UserUrl(ExtendedUrlFrame::parse(content, header)?),
		FrameKind::Comment => Frame::Comment(CommentFrame::parse(content, header)?),
		FrameKind::UnsynchronizedText => {
			Frame::UnsynchronizedText(UnsynchronizedTextFrame::parse(content, header)?)
		},
		FrameKind::TermsOfUse => Frame::TermsOfUse(TermsOfUseFrame::parse(content, header)?),
		FrameKind::AttachedPicture => Frame::Picture(AttachedPictureFrame::parse(content, header)?),
		FrameKind::SynchronizedText => {
			Frame::SynchronizedText(SynchronizedTextFrame::parse(content, header)?)
		},
		FrameKind::SynchronizedTempo => {
			Frame::SynchronizedTempo(SynchronizedTempoFrame::parse(content, header)?)
		},
		FrameKind::EventTimingCodes => {
			Frame::EventTimingCodes(EventTimingCodesFrame::parse(content, header)?)
		},
		FrameKind::PlayCounter => Frame::PlayCounter(PlayCounterFrame::parse(content, header)?),
		FrameKind::Popularimeter => Frame::Popularimeter(PopularimeterFrame::parse(content, header)?),
		FrameKind::UniqueFileIdentifier => {
			Frame::UniqueFileIdentifier(UniqueFileIdentifierFrame::parse(content, header)?)
		},
		FrameKind::Private => Frame::Private(PrivateFrame::parse(content, header)?),
		FrameKind::GroupIdentification => {
			Frame::GroupIdentification(GroupIdentificationFrame::parse(content, header)?)
		},
		FrameKind::AudioEncryption => {
			Frame::AudioEncryption(AudioEncryptionFrame::parse(content, header)?)
		},
		FrameKind::EncryptedMeta => Frame::EncryptedMeta(EncryptedMetaFrame::parse(content, header)?),
		FrameKind::EncapsulatedObject => {
			Frame::EncapsulatedObject(GeneralEncapsulatedObject::parse(content, header)?)
		},
		FrameKind::RecommendedBuffer => {
			Frame::RecommendedBuffer(RecommendedBufferFrame::parse(content, header)?)
		},
		FrameKind::Reverb => Frame::Reverb(ReverbFrame::parse(content, header)?),
		FrameKind::RelativeVolumeAdjustment => {
			Frame::RelativeVolumeAdjustment(RelativeVolumeAdjustmentFrame::parse(content, header)?)
		},
		FrameKind::Equalisation => Frame::Equalisation(EqualisationFrame::parse(content, header)?),
		FrameKind::PositionSync => Frame::PositionSync(PositionSyncFrame::parse(content, header)?),
		FrameKind::Ownership => Frame::Ownership(OwnershipFrame::parse(content, header)?),
		FrameKind::Commercial => Frame::Commercial(CommercialFrame::parse(content, header)?),
		FrameKind::LinkedInformation => {
			Frame::LinkedInformation(LinkedInformationFrame::parse(content, header)?)
		},
		FrameKind::LocationLookup => {
			Frame::LocationLookup(LocationLookupFrame::parse(content, header)?)
		},
		FrameKind::MusicCdIdentifier => {
			Frame::MusicCdIdentifier(MusicCdIdentifierFrame::parse(content, header)?)
		},
		FrameKind::Seek => Frame::Seek(SeekFrame::parse(content, header)?),
		FrameKind::SeekPointIndex => {
			Frame::SeekPointIndex(SeekPointIndexFrame::parse(content, header)?)
		},
		FrameKind::Signature => Frame::Signature(SignatureFrame::parse(content, header)?),
		FrameKind::KeyValue => Frame::KeyValue(KeyValueFrame::parse(content, header)?),
		FrameKind::Binary => Frame::Binary(BinaryFrame::parse(content, header)?),
	};

	Ok(frame)
}

/// Check a body's encoding marker against the version it arrived in
///
/// `ID3v2.2` predates the BOM-less encodings, a legacy body carrying one is
/// malformed.
pub(crate) fn verify_encoding(encoding: u8, version: Id3v2Version) -> Result<TextEncoding> {
	if version == Id3v2Version::V2 && (encoding != 0 && encoding != 1) {
		err!(TextDecode(
			"ID3v2.2 only supports Latin-1 and UTF-16 encodings"
		));
	}

	match TextEncoding::from_u8(encoding) {
		None => err!(TextDecode("Found invalid encoding")),
		Some(e) => Ok(e),
	}
}
