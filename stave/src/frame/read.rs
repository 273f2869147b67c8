use super::Frame;
use super::content::parse_content;
use super::header::{FrameHeader, FrameId, parse_header, parse_v2_header};
use crate::config::ParseOptions;
use crate::error::{ErrorKind, Result};
use crate::frame::FrameFlags;
use crate::header::Id3v2Version;
use crate::items::BinaryFrame;
use crate::macros::{err, parse_mode_choice};
use crate::registry::{self, FrameSpec};
use crate::util::io::BoundedReader;
use crate::util::synchsafe::{SynchsafeInteger, UnsynchronizedStream};

use std::borrow::Cow;
use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The outcome of one iteration of the frame stream loop
pub(crate) enum ParsedFrame {
	/// A decoded frame to keep
	Next(Frame),
	/// The iteration produced nothing, but the stream continues
	Skip,
	/// The stream has ended, keep whatever came before
	Eof,
}

impl ParsedFrame {
	pub(crate) fn read<R>(
		reader: &mut BoundedReader<R>,
		version: Id3v2Version,
		parse_options: ParseOptions,
	) -> Result<Self>
	where
		R: Read,
	{
		let mut size = 0u32;

		// Every version reads its full fixed header before deciding whether the
		// frame is dispatchable, keeping the cursor aligned to the next boundary.
		let parsed_header = match version {
			Id3v2Version::V2 => parse_v2_header(reader, &mut size)?,
			Id3v2Version::V3 => parse_header(reader, &mut size, false)?,
			Id3v2Version::V4 => parse_header(reader, &mut size, true)?,
		};
		let Some((name, mut flags)) = parsed_header else {
			// Stop reading
			return Ok(Self::Eof);
		};

		// A name the version's table doesn't know produces no frame. The header
		// bytes are already consumed, and no body is consumed for this iteration.
		let Ok(id_str) = std::str::from_utf8(&name) else {
			log::debug!("Frame name is not UTF-8, skipping");
			return Ok(Self::Skip);
		};
		let Some(frame_spec) = registry::lookup(version, id_str) else {
			log::debug!("Unknown frame identifier, skipping: {id_str}");
			return Ok(Self::Skip);
		};

		if size == 0 {
			// A declared size of zero marks the end of the meaningful stream
			log::debug!("Encountered a zero length frame, stopping");
			return Ok(Self::Eof);
		}

		// The whole body is consumed up front. Later faults cannot leave the
		// cursor in the middle of a frame, which is what makes dropping a bad
		// frame and continuing safe.
		let body = reader.next_bytes(size as usize)?;
		if body.len() != size as usize {
			log::warn!("Frame body runs past the declared tag region, stopping");
			return Ok(Self::Eof);
		}

		let id = FrameId::new(Cow::Owned(id_str.to_owned()));
		let parse_mode = parse_options.parsing_mode;
		match parse_body(&body, id, version, size, &mut flags, frame_spec) {
			Ok(frame) => Ok(Self::Next(frame)),
			Err(err) => {
				// Faults from the byte source or the allocation guard are fatal
				// in every mode
				if matches!(err.kind(), ErrorKind::Io(_) | ErrorKind::Alloc(_)) {
					return Err(err);
				}

				parse_mode_choice!(
					parse_mode,
					STRICT: Err(err),
					RELAXED: {
						log::warn!("Failed to decode frame content, dropping it: {err}");
						Ok(Self::Skip)
					},
					DEFAULT: {
						log::warn!("Failed to decode frame content, stopping: {err}");
						Ok(Self::Eof)
					}
				)
			},
		}
	}
}

fn parse_body(
	body: &[u8],
	id: FrameId,
	version: Id3v2Version,
	size: u32,
	flags: &mut FrameFlags,
	frame_spec: FrameSpec,
) -> Result<Frame> {
	let mut content = body;

	// Get the encryption method symbol
	if let Some(enc) = flags.encryption.as_mut() {
		log::trace!("Reading encryption method symbol");

		let Some((&symbol, rest)) = content.split_first() else {
			err!(BadFrameLength);
		};

		*enc = symbol;
		content = rest;
	}

	// Get the group identifier
	if let Some(group) = flags.grouping_identity.as_mut() {
		log::trace!("Reading group identifier");

		let Some((&group_symbol, rest)) = content.split_first() else {
			err!(BadFrameLength);
		};

		*group = group_symbol;
		content = rest;
	}

	// Get the real data length
	if flags.data_length_indicator.is_some() || flags.compression {
		log::trace!("Reading data length indicator");

		if content.len() < 4 {
			err!(BadFrameLength);
		}

		// Compressed frames in the wild write a data length indicator without
		// always setting its flag, so compression alone is enough to expect one
		let length = BigEndian::read_u32(&content[..4]).unsynch();
		flags.data_length_indicator = Some(length);
		content = &content[4..];
	}

	// Frames must have at least 1 byte, *after* all of the additional data flags can provide
	if content.is_empty() {
		err!(BadFrameLength);
	}

	let mut content = Cow::Borrowed(content);
	if flags.unsynchronisation {
		let mut plain = Vec::new();
		UnsynchronizedStream::new(&content[..]).read_to_end(&mut plain)?;
		content = Cow::Owned(plain);
	}

	// Nothing can be done with an encrypted body, it is kept as stored. Inflating
	// it would only feed ciphertext to the decompressor.
	if flags.encryption.is_some() {
		if flags.data_length_indicator.is_none() {
			err!(MissingDataLengthIndicator);
		}

		let header = FrameHeader::new(id, version, size, *flags);
		return Ok(Frame::Binary(BinaryFrame {
			header,
			data: content.into_owned(),
		}));
	}

	if flags.compression {
		content = Cow::Owned(handle_compression(&content, flags.data_length_indicator)?);

		// The compressed stream may inflate to nothing
		if content.is_empty() {
			err!(BadFrameLength);
		}
	}

	let header = FrameHeader::new(id, version, size, *flags);
	parse_content(&content, frame_spec.kind, header)
}

#[cfg(feature = "id3v2_compression_support")]
fn handle_compression(content: &[u8], data_length_indicator: Option<u32>) -> Result<Vec<u8>> {
	use crate::error::StaveError;
	use crate::util::alloc::VecFallibleCapacity;

	use flate2::read::ZlibDecoder;

	log::trace!("Decompressing frame content");

	// The data length indicator declares the decompressed size, straight
	// from the stream
	let mut decompressed = match data_length_indicator {
		Some(size) => Vec::try_with_capacity_stable(size as usize)?,
		None => Vec::new(),
	};

	match ZlibDecoder::new(content).read_to_end(&mut decompressed) {
		Ok(_) => Ok(decompressed),
		Err(io_err) => match io_err.downcast::<flate2::DecompressError>() {
			Ok(decompress_err) => Err(StaveError::new(ErrorKind::Decompression(decompress_err))),
			Err(io_err) => Err(io_err.into()),
		},
	}
}

#[cfg(not(feature = "id3v2_compression_support"))]
fn handle_compression(_: &[u8], _: Option<u32>) -> Result<Vec<u8>> {
	Err(crate::error::StaveError::new(
		ErrorKind::CompressedFrameEncountered,
	))
}
