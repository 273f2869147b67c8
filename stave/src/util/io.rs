use crate::error::Result;
use crate::macros::try_vec;

use std::io::Read;

/// A cursor over the declared tag region
///
/// Every read is charged against the declared limit *before* the limit is checked, and a read
/// that crosses the limit returns an empty buffer instead of partial content. Once that happens,
/// every later read also comes back empty, so a frame stream that runs past the declared size
/// quietly ends rather than bleeding into whatever follows the tag.
pub(crate) struct BoundedReader<R> {
	reader: R,
	offset: u64,
	limit: u64,
}

impl<R: Read> BoundedReader<R> {
	pub(crate) fn new(reader: R, limit: u64) -> Self {
		Self {
			reader,
			offset: 0,
			limit,
		}
	}

	/// Read exactly `length` bytes, or nothing at all
	///
	/// An empty buffer for a non-zero `length` means the declared region is exhausted. I/O
	/// failures from the source are returned as-is and are fatal to the parse.
	pub(crate) fn next_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
		self.offset += length as u64;
		if self.offset > self.limit {
			return Ok(Vec::new());
		}

		let mut content = try_vec![0; length];
		self.reader.read_exact(&mut content)?;

		Ok(content)
	}

	pub(crate) fn offset(&self) -> u64 {
		self.offset
	}
}
