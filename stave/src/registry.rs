//! The per-version frame identifier registry
//!
//! Each ID3v2 revision published its own identifier set: ID3v2.2 used 3-character
//! names, ID3v2.3 renamed everything to 4 characters, and ID3v2.4 retired a handful
//! of frames while introducing new ones. The registry maps an identifier to the
//! decoder family that understands its body, plus the published description.
//!
//! An identifier missing from its version's table is not an error. The frame stream
//! decoder treats it as an unknown frame and moves on.

use crate::header::Id3v2Version;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The decoder family for a frame body
///
/// Identifiers sharing a `FrameKind` decode through the same logic, no matter which
/// version they arrived in. The v2.2 legacy names resolve to the same kind as their
/// modern counterparts (see [`upgrade_v2`](crate::upgrade_v2)).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FrameKind {
	/// "T..." text information, excluding TXXX and the involved people lists
	Text,
	/// TXXX (TXX) user defined text
	UserText,
	/// "W..." URL links, excluding WXXX
	Url,
	/// WXXX (WXX) user defined URL
	UserUrl,
	/// COMM (COM) comments
	Comment,
	/// USLT (ULT) unsynchronised lyrics
	UnsynchronizedText,
	/// USER terms of use
	TermsOfUse,
	/// APIC (PIC) attached pictures
	AttachedPicture,
	/// SYLT (SLT) synchronized lyrics
	SynchronizedText,
	/// SYTC (STC) synchronized tempo codes
	SynchronizedTempo,
	/// ETCO (ETC) event timing codes
	EventTimingCodes,
	/// PCNT (CNT) play counters
	PlayCounter,
	/// POPM (POP) popularimeters
	Popularimeter,
	/// UFID (UFI) unique file identifiers
	UniqueFileIdentifier,
	/// PRIV private data
	Private,
	/// GRID group identification registrations
	GroupIdentification,
	/// AENC (CRA) audio encryption details
	AudioEncryption,
	/// CRM encrypted metadata, ID3v2.2 only
	EncryptedMeta,
	/// GEOB (GEO) encapsulated objects
	EncapsulatedObject,
	/// RBUF (BUF) recommended buffer sizes
	RecommendedBuffer,
	/// RVRB (REV) reverb settings
	Reverb,
	/// RVA2 relative volume adjustments
	RelativeVolumeAdjustment,
	/// EQU2 equalisation curves
	Equalisation,
	/// POSS position synchronisation
	PositionSync,
	/// OWNE ownership details
	Ownership,
	/// COMR commercial offers
	Commercial,
	/// LINK (LNK) linked information
	LinkedInformation,
	/// MLLT (MLL) MPEG location lookup tables
	LocationLookup,
	/// MCDI (MCI) music CD identifiers
	MusicCdIdentifier,
	/// SEEK offsets
	Seek,
	/// ASPI audio seek point indices
	SeekPointIndex,
	/// SIGN signatures
	Signature,
	/// IPLS (IPL) and the v2.4 TIPL/TMCL role and person pairs
	KeyValue,
	/// Bodies kept raw: EQUA (EQU), ENCR, RVAD (RVA)
	Binary,
}

/// A registry entry for a single frame identifier
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrameSpec {
	/// The decoder family for this identifier's body
	pub kind: FrameKind,
	/// The description published alongside the identifier
	pub description: &'static str,
}

// Retired by ID3v2.4 but still decoded when encountered there
const DEPRECATED_IN_V4: [&str; 9] = [
	"EQUA", "IPLS", "RVAD", "TDAT", "TIME", "TORY", "TRDA", "TSIZ", "TYER",
];

/// Look up an identifier in its version's table
///
/// Returns `None` for identifiers the version never defined, including
/// well-formed identifiers from a different version.
///
/// # Examples
///
/// ```rust
/// use stave::Id3v2Version;
/// use stave::registry::lookup;
///
/// let artist = lookup(Id3v2Version::V3, "TPE1").unwrap();
/// assert_eq!(artist.description, "Lead performer(s)/Soloist(s)");
///
/// // 3-character names only existed in ID3v2.2
/// assert!(lookup(Id3v2Version::V3, "TP1").is_none());
/// ```
#[must_use]
pub fn lookup(version: Id3v2Version, id: &str) -> Option<FrameSpec> {
	let table = match version {
		Id3v2Version::V2 => v2_frames(),
		Id3v2Version::V3 => v3_frames(),
		Id3v2Version::V4 => v4_frames(),
	};

	table.get(id).copied()
}

/// The display name for an identifier, with the v2.4 deprecation marker applied
///
/// ID3v2.4 dropped EQUA, IPLS, RVAD, and the legacy date/time text frames without
/// breaking decoders that still meet them. Their display names carry a marker so the
/// retirement is visible without consulting the revision history.
///
/// # Examples
///
/// ```rust
/// use stave::Id3v2Version;
/// use stave::registry::display_name;
///
/// assert_eq!(display_name(Id3v2Version::V3, "IPLS"), "IPLS");
/// assert_eq!(display_name(Id3v2Version::V4, "IPLS"), "IPLS (deprecated)");
/// ```
#[must_use]
pub fn display_name(version: Id3v2Version, id: &str) -> Cow<'_, str> {
	if version == Id3v2Version::V4 && DEPRECATED_IN_V4.contains(&id) {
		return Cow::Owned(format!("{id} (deprecated)"));
	}

	Cow::Borrowed(id)
}

macro_rules! gen_frame_tables {
	($($table:ident => [$($key:literal => ($kind:ident, $description:literal)),+ $(,)?]);+ $(;)?) => {
		$(
			fn $table() -> &'static HashMap<&'static str, FrameSpec> {
				static INSTANCE: OnceLock<HashMap<&'static str, FrameSpec>> = OnceLock::new();
				INSTANCE.get_or_init(|| {
					let mut map = HashMap::new();
					$(
						map.insert($key, FrameSpec {
							kind: FrameKind::$kind,
							description: $description,
						});
					)+
					map
				})
			}
		)+
	};
}

gen_frame_tables!(
	// The ID3v2.2 names, described by their modern counterparts. CRM never made it
	// past this revision and keeps its own entry.
	v2_frames => [
		"BUF" => (RecommendedBuffer, "Recommended buffer size"),
		"CNT" => (PlayCounter, "Play counter"),
		"COM" => (Comment, "User comment"),
		"CRA" => (AudioEncryption, "Audio encryption"),
		"CRM" => (EncryptedMeta, "Encrypted meta frame"),
		"ETC" => (EventTimingCodes, "Event timing codes"),
		"EQU" => (Binary, "Equalization"),
		"GEO" => (EncapsulatedObject, "General encapsulated object"),
		"IPL" => (KeyValue, "Involved people list"),
		"LNK" => (LinkedInformation, "Linked information"),
		"MCI" => (MusicCdIdentifier, "Music CD identifier"),
		"MLL" => (LocationLookup, "MPEG location lookup table"),
		"PIC" => (AttachedPicture, "Attached picture"),
		"POP" => (Popularimeter, "Popularimeter"),
		"REV" => (Reverb, "Reverb"),
		"RVA" => (Binary, "Relative volume adjustment"),
		"SLT" => (SynchronizedText, "Synchronized lyrics/text"),
		"STC" => (SynchronizedTempo, "Synchronized tempo codes"),
		"TAL" => (Text, "Album/Show/Movie title"),
		"TBP" => (Text, "BPM (beats per minute)"),
		"TCM" => (Text, "Composer"),
		"TCO" => (Text, "Content type"),
		"TCR" => (Text, "Copyright message"),
		"TDA" => (Text, "Date"),
		"TDY" => (Text, "Playlist delay"),
		"TEN" => (Text, "Encoded by"),
		"TFT" => (Text, "File type"),
		"TIM" => (Text, "Time"),
		"TKE" => (Text, "Initial key"),
		"TLA" => (Text, "Language(s)"),
		"TLE" => (Text, "Length"),
		"TMT" => (Text, "Media type"),
		"TOA" => (Text, "Original artist(s)/performer(s)"),
		"TOF" => (Text, "Original filename"),
		"TOL" => (Text, "Original lyricist(s)/text writer(s)"),
		"TOR" => (Text, "Original release year"),
		"TOT" => (Text, "Original album/movie/show title"),
		"TP1" => (Text, "Lead performer(s)/Soloist(s)"),
		"TP2" => (Text, "Band/orchestra/accompaniment"),
		"TP3" => (Text, "Conductor/performer refinement"),
		"TP4" => (Text, "Interpreted, remixed, or otherwise modified by"),
		"TPA" => (Text, "Part of a set"),
		"TPB" => (Text, "Publisher"),
		"TRC" => (Text, "ISRC (international standard recording code)"),
		"TRD" => (Text, "Recording dates"),
		"TRK" => (Text, "Track number/Position in set"),
		"TSI" => (Text, "Size"),
		"TSS" => (Text, "Software/Hardware and settings used for encoding"),
		"TT1" => (Text, "Content group description"),
		"TT2" => (Text, "Title/songname/content description"),
		"TT3" => (Text, "Subtitle/Description refinement"),
		"TXT" => (Text, "Lyricist/Text writer"),
		"TXX" => (UserText, "User defined text information frame"),
		"TYE" => (Text, "Year"),
		"UFI" => (UniqueFileIdentifier, "Unique File Identifier"),
		"ULT" => (UnsynchronizedText, "Unsynchronised lyrics/text transcription"),
		"WAF" => (Url, "Official audio file webpage"),
		"WAR" => (Url, "Official artist/performer webpage"),
		"WAS" => (Url, "Official audio source webpage"),
		"WCM" => (Url, "Commercial information webpage"),
		"WCP" => (Url, "Copyright/legal information webpage"),
		"WPB" => (Url, "Publishers official webpage"),
		"WXX" => (UserUrl, "User defined webpage"),
	];
	v3_frames => [
		"AENC" => (AudioEncryption, "Audio encryption"),
		"APIC" => (AttachedPicture, "Attached picture"),
		"COMM" => (Comment, "User comment"),
		"COMR" => (Commercial, "Commercial frame"),
		"ENCR" => (Binary, "Encryption method registration"),
		"EQUA" => (Binary, "Equalization"),
		"ETCO" => (EventTimingCodes, "Event timing codes"),
		"GEOB" => (EncapsulatedObject, "General encapsulated object"),
		"GRID" => (GroupIdentification, "Group identification registration"),
		"IPLS" => (KeyValue, "Involved people list"),
		"LINK" => (LinkedInformation, "Linked information"),
		"MCDI" => (MusicCdIdentifier, "Music CD identifier"),
		"MLLT" => (LocationLookup, "MPEG location lookup table"),
		"OWNE" => (Ownership, "Ownership frame"),
		"PRIV" => (Private, "Private frame"),
		"PCNT" => (PlayCounter, "Play counter"),
		"POPM" => (Popularimeter, "Popularimeter"),
		"POSS" => (PositionSync, "Position synchronisation frame"),
		"RBUF" => (RecommendedBuffer, "Recommended buffer size"),
		"RVAD" => (Binary, "Relative volume adjustment"),
		"RVRB" => (Reverb, "Reverb"),
		"SYLT" => (SynchronizedText, "Synchronized lyrics/text"),
		"SYTC" => (SynchronizedTempo, "Synchronized tempo codes"),
		"TALB" => (Text, "Album/Show/Movie title"),
		"TBPM" => (Text, "BPM (beats per minute)"),
		"TCOM" => (Text, "Composer"),
		"TCON" => (Text, "Content type"),
		"TCOP" => (Text, "Copyright message"),
		"TDAT" => (Text, "Date"),
		"TDLY" => (Text, "Playlist delay"),
		"TENC" => (Text, "Encoded by"),
		"TEXT" => (Text, "Lyricist/Text writer"),
		"TFLT" => (Text, "File type"),
		"TIME" => (Text, "Time"),
		"TIT1" => (Text, "Content group description"),
		"TIT2" => (Text, "Title/songname/content description"),
		"TIT3" => (Text, "Subtitle/Description refinement"),
		"TKEY" => (Text, "Initial key"),
		"TLAN" => (Text, "Language(s)"),
		"TLEN" => (Text, "Length"),
		"TMED" => (Text, "Media type"),
		"TOAL" => (Text, "Original album/movie/show title"),
		"TOFN" => (Text, "Original filename"),
		"TOLY" => (Text, "Original lyricist(s)/text writer(s)"),
		"TOPE" => (Text, "Original artist(s)/performer(s)"),
		"TORY" => (Text, "Original release year"),
		"TOWN" => (Text, "File owner/licensee"),
		"TPE1" => (Text, "Lead performer(s)/Soloist(s)"),
		"TPE2" => (Text, "Band/orchestra/accompaniment"),
		"TPE3" => (Text, "Conductor/performer refinement"),
		"TPE4" => (Text, "Interpreted, remixed, or otherwise modified by"),
		"TPOS" => (Text, "Part of a set"),
		"TPUB" => (Text, "Publisher"),
		"TRCK" => (Text, "Track number/Position in set"),
		"TRDA" => (Text, "Recording dates"),
		"TRSN" => (Text, "Internet radio station name"),
		"TRSO" => (Text, "Internet radio station owner"),
		"TSIZ" => (Text, "Size"),
		"TSRC" => (Text, "ISRC (international standard recording code)"),
		"TSSE" => (Text, "Software/Hardware and settings used for encoding"),
		"TYER" => (Text, "Year"),
		"TXXX" => (UserText, "User defined text information frame"),
		"UFID" => (UniqueFileIdentifier, "Unique File Identifier"),
		"USER" => (TermsOfUse, "Terms of use"),
		"USLT" => (UnsynchronizedText, "Unsynchronised lyrics/text transcription"),
		"WCOM" => (Url, "Commercial information webpage"),
		"WCOP" => (Url, "Copyright/legal information webpage"),
		"WOAF" => (Url, "Official audio file webpage"),
		"WOAR" => (Url, "Official artist/performer webpage"),
		"WOAS" => (Url, "Official audio source webpage"),
		"WORS" => (Url, "Official internet radio station homepage"),
		"WPAY" => (Url, "Payment webpage"),
		"WPUB" => (Url, "Publishers official webpage"),
		"WXXX" => (UserUrl, "User defined webpage"),
	];
	// The full v2.3 set carries over, deprecated members included, plus the v2.4
	// additions.
	v4_frames => [
		"AENC" => (AudioEncryption, "Audio encryption"),
		"APIC" => (AttachedPicture, "Attached picture"),
		"ASPI" => (SeekPointIndex, "Audio seek point index"),
		"COMM" => (Comment, "User comment"),
		"COMR" => (Commercial, "Commercial frame"),
		"ENCR" => (Binary, "Encryption method registration"),
		"EQU2" => (Equalisation, "Equalisation (2)"),
		"EQUA" => (Binary, "Equalization"),
		"ETCO" => (EventTimingCodes, "Event timing codes"),
		"GEOB" => (EncapsulatedObject, "General encapsulated object"),
		"GRID" => (GroupIdentification, "Group identification registration"),
		"IPLS" => (KeyValue, "Involved people list"),
		"LINK" => (LinkedInformation, "Linked information"),
		"MCDI" => (MusicCdIdentifier, "Music CD identifier"),
		"MLLT" => (LocationLookup, "MPEG location lookup table"),
		"OWNE" => (Ownership, "Ownership frame"),
		"PRIV" => (Private, "Private frame"),
		"PCNT" => (PlayCounter, "Play counter"),
		"POPM" => (Popularimeter, "Popularimeter"),
		"POSS" => (PositionSync, "Position synchronisation frame"),
		"RBUF" => (RecommendedBuffer, "Recommended buffer size"),
		"RVA2" => (RelativeVolumeAdjustment, "Relative volume adjustment (2)"),
		"RVAD" => (Binary, "Relative volume adjustment"),
		"RVRB" => (Reverb, "Reverb"),
		"SEEK" => (Seek, "Seek frame"),
		"SIGN" => (Signature, "Signature frame"),
		"SYLT" => (SynchronizedText, "Synchronized lyrics/text"),
		"SYTC" => (SynchronizedTempo, "Synchronized tempo codes"),
		"TALB" => (Text, "Album/Show/Movie title"),
		"TBPM" => (Text, "BPM (beats per minute)"),
		"TCOM" => (Text, "Composer"),
		"TCON" => (Text, "Content type"),
		"TCOP" => (Text, "Copyright message"),
		"TDAT" => (Text, "Date"),
		"TDEN" => (Text, "Encoding time"),
		"TDLY" => (Text, "Playlist delay"),
		"TDOR" => (Text, "Original release time"),
		"TDRC" => (Text, "Recording time"),
		"TDRL" => (Text, "Release time"),
		"TDTG" => (Text, "Tagging time"),
		"TENC" => (Text, "Encoded by"),
		"TEXT" => (Text, "Lyricist/Text writer"),
		"TFLT" => (Text, "File type"),
		"TIME" => (Text, "Time"),
		"TIPL" => (KeyValue, "Involved people list"),
		"TIT1" => (Text, "Content group description"),
		"TIT2" => (Text, "Title/songname/content description"),
		"TIT3" => (Text, "Subtitle/Description refinement"),
		"TKEY" => (Text, "Initial key"),
		"TLAN" => (Text, "Language(s)"),
		"TLEN" => (Text, "Length"),
		"TMCL" => (KeyValue, "Musician credits list"),
		"TMED" => (Text, "Media type"),
		"TMOO" => (Text, "Mood"),
		"TOAL" => (Text, "Original album/movie/show title"),
		"TOFN" => (Text, "Original filename"),
		"TOLY" => (Text, "Original lyricist(s)/text writer(s)"),
		"TOPE" => (Text, "Original artist(s)/performer(s)"),
		"TORY" => (Text, "Original release year"),
		"TOWN" => (Text, "File owner/licensee"),
		"TPE1" => (Text, "Lead performer(s)/Soloist(s)"),
		"TPE2" => (Text, "Band/orchestra/accompaniment"),
		"TPE3" => (Text, "Conductor/performer refinement"),
		"TPE4" => (Text, "Interpreted, remixed, or otherwise modified by"),
		"TPOS" => (Text, "Part of a set"),
		"TPRO" => (Text, "Produced notice"),
		"TPUB" => (Text, "Publisher"),
		"TRCK" => (Text, "Track number/Position in set"),
		"TRDA" => (Text, "Recording dates"),
		"TRSN" => (Text, "Internet radio station name"),
		"TRSO" => (Text, "Internet radio station owner"),
		"TSIZ" => (Text, "Size"),
		"TSOA" => (Text, "Album sort order"),
		"TSOP" => (Text, "Performer sort order"),
		"TSOT" => (Text, "Title sort order"),
		"TSRC" => (Text, "ISRC (international standard recording code)"),
		"TSSE" => (Text, "Software/Hardware and settings used for encoding"),
		"TSST" => (Text, "Set subtitle"),
		"TYER" => (Text, "Year"),
		"TXXX" => (UserText, "User defined text information frame"),
		"UFID" => (UniqueFileIdentifier, "Unique File Identifier"),
		"USER" => (TermsOfUse, "Terms of use"),
		"USLT" => (UnsynchronizedText, "Unsynchronised lyrics/text transcription"),
		"WCOM" => (Url, "Commercial information webpage"),
		"WCOP" => (Url, "Copyright/legal information webpage"),
		"WOAF" => (Url, "Official audio file webpage"),
		"WOAR" => (Url, "Official artist/performer webpage"),
		"WOAS" => (Url, "Official audio source webpage"),
		"WORS" => (Url, "Official internet radio station homepage"),
		"WPAY" => (Url, "Payment webpage"),
		"WPUB" => (Url, "Publishers official webpage"),
		"WXXX" => (UserUrl, "User defined webpage"),
	];
);
