//! Whole-tag parse scenarios

use stave::config::{ParseOptions, ParsingMode};
use stave::tag::Id3v2Tag;
use stave::util::synchsafe::SynchsafeInteger;
use stave::{Frame, Id3v2Version};

use std::io::Cursor;

fn v3_frame(id: &[u8; 4], flags: [u8; 2], content: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*id);
	bytes.extend_from_slice(&(content.len() as u32).to_be_bytes());
	bytes.extend_from_slice(&flags);
	bytes.extend_from_slice(content);
	bytes
}

fn v4_frame(id: &[u8; 4], flags: [u8; 2], content: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*id);
	let size = (content.len() as u32).synch().unwrap();
	bytes.extend_from_slice(&size.to_be_bytes());
	bytes.extend_from_slice(&flags);
	bytes.extend_from_slice(content);
	bytes
}

fn v2_frame(id: &[u8; 3], content: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*id);
	let size = content.len() as u32;
	bytes.extend_from_slice(&size.to_be_bytes()[1..]);
	bytes.extend_from_slice(content);
	bytes
}

fn tag_bytes(major: u8, flags: u8, body: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*b"ID3");
	bytes.push(major);
	bytes.push(0);
	bytes.push(flags);
	bytes.extend_from_slice(&(body.len() as u32).synch().unwrap().to_be_bytes());
	bytes.extend_from_slice(body);
	bytes
}

fn parse(bytes: &[u8]) -> Id3v2Tag {
	Id3v2Tag::parse(&mut Cursor::new(bytes), ParseOptions::new()).unwrap()
}

#[test_log::test]
fn single_artist_tag() {
	// Declared size 0x2B: one 23-byte TPE1 frame and 20 bytes of padding
	let mut bytes = Vec::from(*b"ID3\x03\x00\x00\x00\x00\x00\x2B");
	bytes.extend_from_slice(&v3_frame(b"TPE1", [0, 0], b"\x00Cult of Luna"));
	bytes.extend_from_slice(&[0u8; 20]);

	let tag = parse(&bytes);

	assert_eq!(tag.version(), Id3v2Version::V3);
	assert_eq!(tag.header().size, 0x2B);
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.get_artist(), Some("Cult of Luna"));

	let frame = tag.get_frame("TPE1").unwrap();
	assert_eq!(frame.size(), 13);
	assert_eq!(frame.description(), "Lead performer(s)/Soloist(s)");
}

#[test_log::test]
fn extended_header_sizes() {
	// With the CRC flag, the extended header occupies exactly 14 bytes
	let mut body = Vec::new();
	body.extend_from_slice(&14u32.to_be_bytes());
	body.extend_from_slice(&[0x80, 0x00]);
	body.extend_from_slice(&0u32.to_be_bytes());
	body.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
	body.extend_from_slice(&v3_frame(b"TIT2", [0, 0], b"\x00The Watchtower"));

	let tag = parse(&tag_bytes(3, 0x40, &body));
	let extended = tag.extended_header().unwrap();
	assert!(extended.has_crc);
	assert_eq!(extended.crc, Some([0xDE, 0xAD, 0xBE, 0xEF]));
	assert_eq!(tag.get_title(), Some("The Watchtower"));

	// Without it, exactly 10
	let mut body = Vec::new();
	body.extend_from_slice(&10u32.to_be_bytes());
	body.extend_from_slice(&[0x00, 0x00]);
	body.extend_from_slice(&0x0200u32.to_be_bytes());
	body.extend_from_slice(&v3_frame(b"TIT2", [0, 0], b"\x00The Watchtower"));

	let tag = parse(&tag_bytes(3, 0x40, &body));
	let extended = tag.extended_header().unwrap();
	assert!(!extended.has_crc);
	assert_eq!(extended.crc, None);
	assert_eq!(extended.padding, 0x0200);
	assert_eq!(tag.get_title(), Some("The Watchtower"));
}

#[test_log::test]
fn duplicate_identifiers_are_kept_in_order() {
	let mut body = v3_frame(b"COMM", [0, 0], b"\x00engfirst\x00one");
	body.extend_from_slice(&v3_frame(b"COMM", [0, 0], b"\x00engsecond\x00two"));

	let tag = parse(&tag_bytes(3, 0, &body));

	assert_eq!(tag.len(), 2);

	// The first occurrence wins
	let Some(Frame::Comment(comment)) = tag.get_frame("COMM") else {
		panic!("Expected a comment frame");
	};
	assert_eq!(comment.description, "first");

	let descriptions: Vec<_> = tag
		.iter()
		.filter_map(|frame| match frame {
			Frame::Comment(comment) => Some(&*comment.description),
			_ => None,
		})
		.collect();
	assert_eq!(descriptions, ["first", "second"]);
}

#[test_log::test]
fn legacy_tag_reads_like_a_modern_one() {
	let mut body = v2_frame(b"TT2", b"\x00Vicarious Redemption");
	body.extend_from_slice(&v2_frame(b"TAL", b"\x00Vertikal"));
	body.extend_from_slice(&v2_frame(b"PIC", b"\x00PNG\x03front\x00\x89PNG"));

	let tag = parse(&tag_bytes(2, 0, &body));

	assert_eq!(tag.version(), Id3v2Version::V2);
	assert_eq!(tag.len(), 3);

	// The fallback accessors resolve the legacy names
	assert_eq!(tag.get_title(), Some("Vicarious Redemption"));
	assert_eq!(tag.get_album(), Some("Vertikal"));

	// Identifiers stay as they arrived
	let title = tag.get_frame("TT2").unwrap();
	assert!(title.id().is_outdated());
	assert_eq!(title.description(), "Title/songname/content description");

	let Some(Frame::Picture(picture)) = tag.get_frame("PIC") else {
		panic!("Expected a picture frame");
	};
	assert_eq!(picture.mime_type, "PNG");
	assert_eq!(picture.description, "front");
	assert_eq!(picture.data, b"\x89PNG");
}

#[test_log::test]
fn v4_frame_sizes_are_synchsafe() {
	// 200 bytes of content: the declared size (201) needs both synchsafe bytes
	let mut content = vec![0x00];
	content.extend_from_slice(&[b'a'; 200]);

	let body = v4_frame(b"TIT2", [0, 0], &content);
	let tag = parse(&tag_bytes(4, 0, &body));

	assert_eq!(tag.len(), 1);
	assert_eq!(tag.get_title().map(str::len), Some(200));
	assert_eq!(tag.get_frame("TIT2").unwrap().size(), 201);
}

#[test_log::test]
fn v3_frame_sizes_are_plain() {
	// A high bit in the low size byte: plain big-endian 128, not synchsafe
	let mut content = vec![0x00];
	content.extend_from_slice(&[b'a'; 127]);
	let body = v3_frame(b"TIT2", [0, 0], &content);
	assert_eq!(body[7], 0x80);

	let tag = parse(&tag_bytes(3, 0, &body));

	assert_eq!(tag.len(), 1);
	assert_eq!(tag.get_title().map(str::len), Some(127));
}

#[test_log::test]
fn unsynchronised_body_equals_the_plain_one() {
	// PRIV keeps its data raw, so the collapse is byte-exact
	let plain = v4_frame(b"PRIV", [0, 0], b"owner\x00\xFF\xE0\x01");
	let unsync = v4_frame(b"PRIV", [0x00, 0x02], b"owner\x00\xFF\x00\xE0\x01");

	let plain_tag = parse(&tag_bytes(4, 0, &plain));
	let unsync_tag = parse(&tag_bytes(4, 0, &unsync));

	let Some(Frame::Private(plain_frame)) = plain_tag.get_frame("PRIV") else {
		panic!("Expected a private frame");
	};
	let Some(Frame::Private(unsync_frame)) = unsync_tag.get_frame("PRIV") else {
		panic!("Expected a private frame");
	};

	assert_eq!(plain_frame.owner, "owner");
	assert_eq!(plain_frame.private_data, b"\xFF\xE0\x01");
	assert_eq!(plain_frame.private_data, unsync_frame.private_data);
}

#[cfg(feature = "id3v2_compression_support")]
#[test_log::test]
fn compressed_body_equals_the_plain_one() {
	// zlib stream holding "\x00Somewhere Along the Highway"
	const DEFLATED: [u8; 36] = [
		0x78, 0x9C, 0x63, 0x08, 0xCE, 0xCF, 0x4D, 0x2D, 0xCF, 0x48, 0x2D, 0x4A, 0x55, 0x70, 0xCC,
		0xC9, 0xCF, 0x4B, 0x57, 0x28, 0xC9, 0x48, 0x55, 0xF0, 0xC8, 0x4C, 0xCF, 0x28, 0x4F, 0xAC,
		0x04, 0x00, 0x8D, 0x6C, 0x0A, 0x13,
	];

	// The v3 compression flag carries a leading decompressed size
	let mut content = Vec::from(28u32.to_be_bytes());
	content.extend_from_slice(&DEFLATED);
	let compressed = v3_frame(b"TALB", [0x00, 0x80], &content);

	let plain = v3_frame(b"TALB", [0, 0], b"\x00Somewhere Along the Highway");

	let compressed_tag = parse(&tag_bytes(3, 0, &compressed));
	let plain_tag = parse(&tag_bytes(3, 0, &plain));

	assert_eq!(compressed_tag.get_album(), Some("Somewhere Along the Highway"));
	assert_eq!(compressed_tag.get_album(), plain_tag.get_album());

	let frame = compressed_tag.get_frame("TALB").unwrap();
	assert!(frame.flags().compression);
	assert_eq!(frame.flags().data_length_indicator, Some(28));
}

#[test_log::test]
fn unknown_identifier_between_two_known_frames() {
	let mut body = v3_frame(b"TIT2", [0, 0], b"\x00Finland");
	// A name no table knows. Only its header is consumed, so a zero declared
	// size keeps the next read aligned to TALB.
	body.extend_from_slice(&v3_frame(b"ZZZZ", [0, 0], b""));
	body.extend_from_slice(&v3_frame(b"TALB", [0, 0], b"\x00Eternal Kingdom"));

	let tag = parse(&tag_bytes(3, 0, &body));

	assert_eq!(tag.len(), 2);
	assert_eq!(tag.get_title(), Some("Finland"));
	assert_eq!(tag.get_album(), Some("Eternal Kingdom"));
	assert!(tag.get_frame("ZZZZ").is_none());
}

#[test_log::test]
fn parsing_modes_against_one_bad_frame() {
	let mut body = v3_frame(b"TIT2", [0, 0], b"\x00Finland");
	// Encoding marker 0x0F is invalid in every version
	body.extend_from_slice(&v3_frame(b"COMM", [0, 0], b"\x0Fengbad\x00body"));
	body.extend_from_slice(&v3_frame(b"TALB", [0, 0], b"\x00Eternal Kingdom"));
	let bytes = tag_bytes(3, 0, &body);

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	assert!(Id3v2Tag::parse(&mut Cursor::new(&bytes), strict).is_err());

	let best_attempt = Id3v2Tag::parse(&mut Cursor::new(&bytes), ParseOptions::new()).unwrap();
	assert_eq!(best_attempt.len(), 1);
	assert_eq!(best_attempt.get_title(), Some("Finland"));

	let relaxed = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	let relaxed_tag = Id3v2Tag::parse(&mut Cursor::new(&bytes), relaxed).unwrap();
	assert_eq!(relaxed_tag.len(), 2);
	assert_eq!(relaxed_tag.get_album(), Some("Eternal Kingdom"));
}

#[test_log::test]
fn truncated_region_yields_a_partial_tag() {
	// The declared size ends 4 bytes into the second frame's header
	let first = v3_frame(b"TIT2", [0, 0], b"\x00Finland");
	let second = v3_frame(b"TALB", [0, 0], b"\x00Eternal Kingdom");

	let declared = (first.len() + 4) as u32;
	let mut bytes = Vec::from(*b"ID3\x03\x00\x00");
	bytes.extend_from_slice(&declared.synch().unwrap().to_be_bytes());
	bytes.extend_from_slice(&first);
	bytes.extend_from_slice(&second);

	let tag = parse(&bytes);

	assert_eq!(tag.len(), 1);
	assert_eq!(tag.get_title(), Some("Finland"));
}

#[test_log::test]
fn rejects_a_missing_magic() {
	let bytes = *b"OggS\x00\x00\x00\x00\x00\x00";
	assert!(Id3v2Tag::parse(&mut Cursor::new(&bytes), ParseOptions::new()).is_err());
}

#[test_log::test]
fn reads_from_a_file() {
	use std::fs::File;
	use std::io::{BufReader, Write as _};

	let mut body = v3_frame(b"TPE1", [0, 0], b"\x00Cult of Luna");
	body.extend_from_slice(&v3_frame(b"TIT2", [0, 0], b"\x00Owlwood"));

	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&tag_bytes(3, 0, &body)).unwrap();
	file.flush().unwrap();

	let mut reader = BufReader::new(File::open(file.path()).unwrap());
	let tag = Id3v2Tag::parse(&mut reader, ParseOptions::new()).unwrap();

	assert_eq!(tag.get_artist(), Some("Cult of Luna"));
	assert_eq!(tag.get_title(), Some("Owlwood"));
}
