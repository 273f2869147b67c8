//! The typed frame bodies
//!
//! One module per decoder family. Every body type embeds the
//! [`FrameHeader`](crate::FrameHeader) it was decoded under, so a frame always
//! knows the identifier, version, declared size, and flags it arrived with.

mod attached_picture_frame;
mod audio_encryption_frame;
mod binary_frame;
mod commercial_frame;
mod encapsulated_object;
mod encrypted_meta_frame;
mod equalisation_frame;
mod event_timing_codes_frame;
mod extended_text_frame;
mod extended_url_frame;
mod group_identification_frame;
mod key_value_frame;
mod language_frame;
mod linked_information_frame;
mod location_lookup_frame;
mod music_cd_identifier_frame;
mod ownership_frame;
mod play_counter_frame;
mod popularimeter;
mod position_sync_frame;
mod private_frame;
mod recommended_buffer_frame;
mod relative_volume_adjustment_frame;
mod reverb_frame;
mod seek_frame;
mod seek_point_index_frame;
mod signature_frame;
mod sync_text;
mod synchronized_tempo_frame;
mod text_information_frame;
mod unique_file_identifier;
mod url_link_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use audio_encryption_frame::AudioEncryptionFrame;
pub use binary_frame::BinaryFrame;
pub use commercial_frame::CommercialFrame;
pub use encapsulated_object::GeneralEncapsulatedObject;
pub use encrypted_meta_frame::EncryptedMetaFrame;
pub use equalisation_frame::{EqualisationFrame, EqualisationPoint, InterpolationMethod};
pub use event_timing_codes_frame::{Event, EventTimingCodesFrame};
pub use extended_text_frame::ExtendedTextFrame;
pub use extended_url_frame::ExtendedUrlFrame;
pub use group_identification_frame::GroupIdentificationFrame;
pub use key_value_frame::KeyValueFrame;
pub use language_frame::{CommentFrame, TermsOfUseFrame, UnsynchronizedTextFrame};
pub use linked_information_frame::LinkedInformationFrame;
pub use location_lookup_frame::LocationLookupFrame;
pub use music_cd_identifier_frame::MusicCdIdentifierFrame;
pub use ownership_frame::OwnershipFrame;
pub use play_counter_frame::PlayCounterFrame;
pub use popularimeter::PopularimeterFrame;
pub use position_sync_frame::PositionSyncFrame;
pub use private_frame::PrivateFrame;
pub use recommended_buffer_frame::RecommendedBufferFrame;
pub use relative_volume_adjustment_frame::{
	ChannelInformation, ChannelType, RelativeVolumeAdjustmentFrame,
};
pub use reverb_frame::ReverbFrame;
pub use seek_frame::SeekFrame;
pub use seek_point_index_frame::SeekPointIndexFrame;
pub use signature_frame::SignatureFrame;
pub use sync_text::{SyncTextContentType, SynchronizedTextFrame};
pub use synchronized_tempo_frame::{SynchronizedTempoFrame, TempoCode};
pub use text_information_frame::TextInformationFrame;
pub use unique_file_identifier::UniqueFileIdentifierFrame;
pub use url_link_frame::UrlLinkFrame;

/// The unit used for timestamps in the synchronised frames
///
/// Used by SYLT, SYTC, ETCO, and POSS.
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
pub enum TimestampFormat {
	/// The unit is MPEG frames
	MPEG = 1,
	/// The unit is milliseconds
	MS = 2,
}

impl TimestampFormat {
	/// Get a `TimestampFormat` from a u8, must be 1-2 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			1 => Some(Self::MPEG),
			2 => Some(Self::MS),
			_ => None,
		}
	}
}
