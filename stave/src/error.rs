//! Contains the errors that can arise within stave
//!
//! The primary error is [`StaveError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, StaveError>`
pub type Result<T> = std::result::Result<T, StaveError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Arises when the reader does not start with an "ID3" identifier
	FakeTag,
	/// Found an unsupported tag version, contains the major and revision versions
	BadVersion(u8, u8),
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit).
	TooMuchData,
	/// A frame body isn't as long as it was declared to be
	BadFrameLength,
	/// A synchronised frame declared an unknown timestamp unit
	BadTimestampFormat,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Arises when an encrypted frame is missing a data length indicator
	MissingDataLengthIndicator,
	/// Arises when a compressed frame is encountered with `id3v2_compression_support` disabled
	#[cfg(not(feature = "id3v2_compression_support"))]
	CompressedFrameEncountered,
	/// Errors that arise while decompressing a zlib-compressed frame body
	#[cfg(feature = "id3v2_compression_support")]
	Decompression(flate2::DecompressError),
	/// Represents all cases of [`std::io::Error`]
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::FakeTag => write!(f, "Expected the content to begin with \"ID3\""),
			Self::BadVersion(major, revision) => {
				write!(f, "Found an invalid version (v2.{major}.{revision})")
			},
			Self::TooMuchData => write!(
				f,
				"An abnormally large amount of data was provided, and an allocation failed"
			),
			Self::BadFrameLength => write!(f, "Frame isn't as long as it was described to be"),
			Self::BadTimestampFormat => write!(f, "Found an invalid timestamp format marker"),
			Self::TextDecode(message) => write!(f, "Text decoding: {message}"),
			Self::MissingDataLengthIndicator => write!(
				f,
				"Encountered an encrypted frame without a data length indicator"
			),
			#[cfg(not(feature = "id3v2_compression_support"))]
			Self::CompressedFrameEncountered => write!(
				f,
				"Encountered a compressed frame, support is disabled by feature"
			),
			#[cfg(feature = "id3v2_compression_support")]
			Self::Decompression(err) => write!(f, "Failed to decompress frame: {err}"),
			Self::Io(err) => write!(f, "{err}"),
			Self::Alloc(err) => write!(f, "{err}"),
		}
	}
}

/// Errors that could occur within stave
pub struct StaveError {
	pub(crate) kind: ErrorKind,
}

impl StaveError {
	/// Create a [`StaveError`] from an [`ErrorKind`]
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	#[must_use]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for StaveError {}

impl Debug for StaveError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for StaveError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.kind)
	}
}

impl From<std::io::Error> for StaveError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for StaveError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}
