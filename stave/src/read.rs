use crate::config::ParseOptions;
use crate::error::Result;
use crate::frame::read::ParsedFrame;
use crate::header::{ExtendedHeader, Id3v2Header};
use crate::tag::Id3v2Tag;
use crate::util::io::BoundedReader;

use std::io::Read;

pub(crate) fn parse_id3v2<R>(
	bytes: &mut R,
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag>
where
	R: Read,
{
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}",
		header.size,
		header.version
	);

	// Everything after the 10 header bytes is charged against the declared size.
	// The reader soft-stops at the boundary, so a frame stream that overruns it
	// ends quietly with the frames decoded so far.
	let mut reader = BoundedReader::new(bytes, u64::from(header.size));

	let mut extended = None;
	if header.flags.extended {
		let Some(parsed) = ExtendedHeader::parse(&mut reader)? else {
			// No room for the extended header, so certainly none for frames
			return Ok(Id3v2Tag {
				header,
				extended: None,
				frames: Vec::new(),
			});
		};

		extended = Some(parsed);
	}

	let mut frames = Vec::new();
	loop {
		match ParsedFrame::read(&mut reader, header.version, parse_options)? {
			ParsedFrame::Next(frame) => frames.push(frame),
			// This iteration produced nothing, but more frames may follow
			ParsedFrame::Skip => {},
			ParsedFrame::Eof => break,
		}
	}

	Ok(Id3v2Tag {
		header,
		extended,
		frames,
	})
}

#[cfg(test)]
mod tests {
	use super::parse_id3v2;
	use crate::config::{ParseOptions, ParsingMode};
	use crate::header::Id3v2Header;
	use crate::tag::Id3v2Tag;
	use crate::util::synchsafe::SynchsafeInteger;

	use std::io::Cursor;

	fn v3_frame(id: &[u8; 4], content: &[u8]) -> Vec<u8> {
		let mut bytes = Vec::from(*id);
		bytes.extend_from_slice(&(content.len() as u32).to_be_bytes());
		bytes.extend_from_slice(&[0, 0]);
		bytes.extend_from_slice(content);
		bytes
	}

	fn v3_tag(flags: u8, body: &[u8]) -> Vec<u8> {
		let mut bytes = Vec::from(*b"ID3\x03\x00");
		bytes.push(flags);
		bytes.extend_from_slice(&(body.len() as u32).synch().unwrap().to_be_bytes());
		bytes.extend_from_slice(body);
		bytes
	}

	fn parse(bytes: &[u8], parse_options: ParseOptions) -> crate::error::Result<Id3v2Tag> {
		let mut reader = Cursor::new(bytes);
		let header = Id3v2Header::parse(&mut reader).unwrap();
		parse_id3v2(&mut reader, header, parse_options)
	}

	#[test_log::test]
	fn frames_arrive_in_stream_order() {
		let mut body = v3_frame(b"TIT2", b"\x00Finland");
		body.extend_from_slice(&v3_frame(b"TALB", b"\x00Eternal Kingdom"));
		body.extend_from_slice(&v3_frame(b"TPE1", b"\x00Cult of Luna"));

		let tag = parse(&v3_tag(0, &body), ParseOptions::new()).unwrap();

		assert_eq!(tag.len(), 3);
		let order: Vec<_> = tag.iter().map(|frame| frame.id_str()).collect();
		assert_eq!(order, ["TIT2", "TALB", "TPE1"]);

		assert_eq!(tag.get_title(), Some("Finland"));
		assert_eq!(tag.get_album(), Some("Eternal Kingdom"));
		assert_eq!(tag.get_artist(), Some("Cult of Luna"));
	}

	#[test_log::test]
	fn unknown_frame_is_skipped_without_a_body_read() {
		let mut body = v3_frame(b"TIT2", b"\x00Finland");
		// An identifier missing from the v3 table. Only its 10 header bytes
		// occupy the stream; the declared size is not consumed.
		body.extend_from_slice(b"XXXX");
		body.extend_from_slice(&7u32.to_be_bytes());
		body.extend_from_slice(&[0, 0]);
		body.extend_from_slice(&v3_frame(b"TALB", b"\x00Eternal Kingdom"));

		let tag = parse(&v3_tag(0, &body), ParseOptions::new()).unwrap();

		assert_eq!(tag.len(), 2);
		assert_eq!(tag.get_title(), Some("Finland"));
		assert_eq!(tag.get_album(), Some("Eternal Kingdom"));
	}

	#[test_log::test]
	fn padding_ends_the_stream() {
		let mut body = v3_frame(b"TIT2", b"\x00Finland");
		body.extend_from_slice(&[0u8; 64]);

		let tag = parse(&v3_tag(0, &body), ParseOptions::new()).unwrap();

		assert_eq!(tag.len(), 1);
		assert_eq!(tag.get_title(), Some("Finland"));
	}

	#[test_log::test]
	fn overrun_keeps_the_frames_before_the_boundary() {
		// The second frame's header declares more content than the tag region
		// holds. The region is exhausted mid-body, which ends the stream.
		let mut body = v3_frame(b"TIT2", b"\x00Finland");
		body.extend_from_slice(b"TALB");
		body.extend_from_slice(&64u32.to_be_bytes());
		body.extend_from_slice(&[0, 0]);
		body.extend_from_slice(b"\x00Eternal");

		let tag = parse(&v3_tag(0, &body), ParseOptions::new()).unwrap();

		assert_eq!(tag.len(), 1);
		assert_eq!(tag.get_title(), Some("Finland"));
		assert_eq!(tag.get_album(), None);
	}

	#[test_log::test]
	fn extended_header_is_consumed_before_frames() {
		let mut body = Vec::new();
		body.extend_from_slice(&10u32.to_be_bytes());
		body.extend_from_slice(&[0x00, 0x00]);
		body.extend_from_slice(&0x0400u32.to_be_bytes());
		body.extend_from_slice(&v3_frame(b"TIT2", b"\x00Finland"));

		// 0x40: extended header flag
		let tag = parse(&v3_tag(0x40, &body), ParseOptions::new()).unwrap();

		let extended = tag.extended_header().unwrap();
		assert_eq!(extended.size, 10);
		assert_eq!(extended.padding, 0x0400);
		assert!(!extended.has_crc);

		assert_eq!(tag.len(), 1);
		assert_eq!(tag.get_title(), Some("Finland"));
	}

	#[test_log::test]
	fn region_too_small_for_the_extended_header() {
		// Declared size of 4 ends inside the 10 extended header bytes
		let mut bytes = Vec::from(*b"ID3\x03\x00\x40\x00\x00\x00\x04");
		bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x0A]);

		let tag = parse(&bytes, ParseOptions::new()).unwrap();

		assert!(tag.is_empty());
		assert!(tag.extended_header().is_none());
	}

	#[test_log::test]
	fn parsing_modes_diverge_on_a_bad_frame() {
		// The COMM body is long enough to decode but carries encoding 0x0F,
		// which no version defines
		let mut body = v3_frame(b"TIT2", b"\x00Finland");
		body.extend_from_slice(&v3_frame(b"COMM", b"\x0Feng\x00broken"));
		body.extend_from_slice(&v3_frame(b"TALB", b"\x00Eternal Kingdom"));
		let bytes = v3_tag(0, &body);

		let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
		assert!(parse(&bytes, strict).is_err());

		// The default keeps everything before the fault
		let tag = parse(&bytes, ParseOptions::new()).unwrap();
		assert_eq!(tag.len(), 1);
		assert_eq!(tag.get_title(), Some("Finland"));
		assert_eq!(tag.get_album(), None);

		// Relaxed drops the bad frame and keeps going
		let relaxed = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
		let tag = parse(&bytes, relaxed).unwrap();
		assert_eq!(tag.len(), 2);
		assert_eq!(tag.get_title(), Some("Finland"));
		assert_eq!(tag.get_album(), Some("Eternal Kingdom"));
	}

	#[test_log::test]
	fn empty_tag_region() {
		let tag = parse(&v3_tag(0, &[]), ParseOptions::new()).unwrap();
		assert!(tag.is_empty());
	}
}
