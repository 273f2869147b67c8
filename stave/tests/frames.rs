//! Frame bodies decoded through whole tags

use stave::config::ParseOptions;
use stave::tag::Id3v2Tag;
use stave::util::synchsafe::SynchsafeInteger;
use stave::{Frame, SyncTextContentType, TextEncoding, TimestampFormat};

use std::io::Cursor;

fn v3_frame(id: &[u8; 4], content: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*id);
	bytes.extend_from_slice(&(content.len() as u32).to_be_bytes());
	bytes.extend_from_slice(&[0, 0]);
	bytes.extend_from_slice(content);
	bytes
}

fn v4_frame(id: &[u8; 4], content: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*id);
	let size = (content.len() as u32).synch().unwrap();
	bytes.extend_from_slice(&size.to_be_bytes());
	bytes.extend_from_slice(&[0, 0]);
	bytes.extend_from_slice(content);
	bytes
}

fn tag_of(major: u8, body: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::from(*b"ID3");
	bytes.push(major);
	bytes.extend_from_slice(&[0, 0]);
	bytes.extend_from_slice(&(body.len() as u32).synch().unwrap().to_be_bytes());
	bytes.extend_from_slice(body);
	bytes
}

fn parse(bytes: &[u8]) -> Id3v2Tag {
	Id3v2Tag::parse(&mut Cursor::new(bytes), ParseOptions::new()).unwrap()
}

#[test_log::test]
fn attached_picture() {
	let mut content = Vec::from(&b"\x00image/jpeg\x00\x03Something\x00"[..]);
	content.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0, 0x51, 0x12]);

	let tag = parse(&tag_of(3, &v3_frame(b"APIC", &content)));

	let Some(Frame::Picture(picture)) = tag.get_frame("APIC") else {
		panic!("Expected a picture frame");
	};

	assert_eq!(picture.encoding, TextEncoding::Latin1);
	assert_eq!(picture.mime_type, "image/jpeg");
	assert_eq!(picture.picture_type, 3);
	assert_eq!(picture.picture_type_name(), "Cover (front)");
	assert_eq!(picture.description, "Something");
	assert_eq!(picture.data, [0xFF, 0xD8, 0xFF, 0xE0, 0x51, 0x12]);
}

#[test_log::test]
fn comment() {
	let tag = parse(&tag_of(
		3,
		&v3_frame(b"COMM", b"\x00engComment\x00This is a comment"),
	));

	let Some(Frame::Comment(comment)) = tag.get_frame("COMM") else {
		panic!("Expected a comment frame");
	};

	assert_eq!(comment.language, *b"eng");
	assert_eq!(comment.description, "Comment");
	assert_eq!(comment.content, "This is a comment");
}

#[test_log::test]
fn short_reverb_is_empty_and_the_stream_continues() {
	let mut body = v3_frame(b"RVRB", &[0x00, 0x01, 0x02]);
	body.extend_from_slice(&v3_frame(b"TIT2", b"\x00Ghost Trail"));

	let tag = parse(&tag_of(3, &body));

	assert_eq!(tag.len(), 2);

	let Some(Frame::Reverb(reverb)) = tag.get_frame("RVRB") else {
		panic!("Expected a reverb frame");
	};
	assert!(reverb.is_empty());

	assert_eq!(tag.get_title(), Some("Ghost Trail"));
}

#[test_log::test]
fn v4_deprecation_markers() {
	let mut body = v4_frame(b"EQUA", &[0x01, 0x02, 0x03]);
	body.extend_from_slice(&v4_frame(b"RVAD", &[0x04, 0x05]));
	body.extend_from_slice(&v4_frame(b"IPLS", b"\x00Producer\x00Magnus Lindberg\x00"));

	let tag = parse(&tag_of(4, &body));
	assert_eq!(tag.len(), 3);

	for (id, expected) in [
		("EQUA", "EQUA (deprecated)"),
		("RVAD", "RVAD (deprecated)"),
		("IPLS", "IPLS (deprecated)"),
	] {
		let frame = tag.get_frame(id).unwrap();
		assert_eq!(frame.display_name(), expected);
	}

	// The retired volume/equalisation bodies stay raw
	let Some(Frame::Binary(equalization)) = tag.get_frame("EQUA") else {
		panic!("Expected a binary frame");
	};
	assert_eq!(equalization.data, [0x01, 0x02, 0x03]);

	// The involved people list still decodes into pairs
	let Some(Frame::KeyValue(people)) = tag.get_frame("IPLS") else {
		panic!("Expected a key-value frame");
	};
	assert_eq!(
		people.key_value_pairs,
		[(String::from("Producer"), String::from("Magnus Lindberg"))]
	);

	// The same identifiers under v2.3 carry no marker
	let mut body = v3_frame(b"EQUA", &[0x01, 0x02, 0x03]);
	body.extend_from_slice(&v3_frame(b"RVAD", &[0x04, 0x05]));
	let tag = parse(&tag_of(3, &body));
	assert_eq!(tag.get_frame("EQUA").unwrap().display_name(), "EQUA");
	assert_eq!(tag.get_frame("RVAD").unwrap().display_name(), "RVAD");
}

#[test_log::test]
fn synchronised_lyrics() {
	let mut content = Vec::from(&b"\x00eng\x02\x01lyrics\x00"[..]);
	content.extend_from_slice(b"Eternal kingdom\x00");
	content.extend_from_slice(&12000u32.to_be_bytes());
	content.extend_from_slice(b"of the damned\x00");
	content.extend_from_slice(&19500u32.to_be_bytes());

	let tag = parse(&tag_of(4, &v4_frame(b"SYLT", &content)));

	let Some(Frame::SynchronizedText(lyrics)) = tag.get_frame("SYLT") else {
		panic!("Expected synchronised lyrics");
	};

	assert_eq!(lyrics.language, *b"eng");
	assert_eq!(lyrics.timestamp_format, TimestampFormat::MS);
	assert_eq!(lyrics.content_type, SyncTextContentType::Lyrics);
	assert_eq!(lyrics.description.as_deref(), Some("lyrics"));
	assert_eq!(
		lyrics.content,
		[
			(12000, String::from("Eternal kingdom")),
			(19500, String::from("of the damned")),
		]
	);
}

#[test_log::test]
fn popularimeter_and_play_counter() {
	let mut popm = Vec::from(&b"rater@example.com\x00"[..]);
	popm.push(196);
	popm.extend_from_slice(&[0x00, 0x00, 0x01, 0x10]);

	let mut body = v4_frame(b"POPM", &popm);
	body.extend_from_slice(&v4_frame(b"PCNT", &[0x00, 0x00, 0x02, 0x4E]));

	let tag = parse(&tag_of(4, &body));

	let Some(Frame::Popularimeter(rating)) = tag.get_frame("POPM") else {
		panic!("Expected a popularimeter");
	};
	assert_eq!(rating.email, "rater@example.com");
	assert_eq!(rating.rating, 196);
	assert_eq!(rating.play_count(), 0x0110);

	let Some(Frame::PlayCounter(counter)) = tag.get_frame("PCNT") else {
		panic!("Expected a play counter");
	};
	assert_eq!(counter.play_count(), 0x024E);
}

#[test_log::test]
fn user_defined_text_and_links() {
	let mut body = v3_frame(b"TXXX", b"\x00replaygain_track_gain\x00-8.97 dB");
	body.extend_from_slice(&v3_frame(b"WOAR", b"https://cultofluna.com"));
	body.extend_from_slice(&v3_frame(
		b"WXXX",
		b"\x00shop\x00https://cultofluna.com/store",
	));

	let tag = parse(&tag_of(3, &body));

	let Some(Frame::UserText(user_text)) = tag.get_frame("TXXX") else {
		panic!("Expected a user text frame");
	};
	assert_eq!(user_text.description, "replaygain_track_gain");
	assert_eq!(user_text.content, "-8.97 dB");

	let Some(Frame::Url(link)) = tag.get_frame("WOAR") else {
		panic!("Expected a link frame");
	};
	assert_eq!(link.url, "https://cultofluna.com");

	let Some(Frame::UserUrl(user_link)) = tag.get_frame("WXXX") else {
		panic!("Expected a user link frame");
	};
	assert_eq!(user_link.description, "shop");
	assert_eq!(user_link.content, "https://cultofluna.com/store");
}

#[test_log::test]
fn utf16_text_with_byte_order_marks() {
	let mut content = vec![0x01, 0xFF, 0xFE];
	for ch in "Järnväg".encode_utf16() {
		content.extend_from_slice(&ch.to_le_bytes());
	}

	let tag = parse(&tag_of(4, &v4_frame(b"TIT2", &content)));

	let frame = tag.get_frame("TIT2").unwrap();
	assert!(frame.is_utf16());
	assert_eq!(tag.get_title(), Some("Järnväg"));
}
