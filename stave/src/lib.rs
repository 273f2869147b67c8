//! Parse ID3v2 tags into typed frames.
//!
//! `stave` decodes ID3v2.2, ID3v2.3, and ID3v2.4 tags from any [`Read`](std::io::Read)
//! source. One linear pass produces an [`Id3v2Tag`]: the tag header, the extended
//! header when one is present, and every frame the stream yielded, in arrival order.
//!
//! Decoding is resilient by default. A malformed frame body ends the frame stream and
//! the tag decoded up to that point is returned; [`ParsingMode`](config::ParsingMode)
//! selects a stricter or looser policy.
//!
//! # Examples
//!
//! ## Reading a tag
//!
//! ```rust,no_run
//! # fn main() -> stave::error::Result<()> {
//! use stave::config::ParseOptions;
//! use stave::tag::Id3v2Tag;
//!
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! // The reader must be positioned at the "ID3" identifier
//! let mut reader = BufReader::new(File::open("music.mp3")?);
//! let tag = Id3v2Tag::parse(&mut reader, ParseOptions::new())?;
//!
//! if let Some(artist) = tag.get_artist() {
//! 	println!("artist: {artist}");
//! }
//! # Ok(()) }
//! ```
//!
//! ## Working with frames
//!
//! ```rust,no_run
//! # fn main() -> stave::error::Result<()> {
//! use stave::Frame;
//! use stave::config::ParseOptions;
//! use stave::tag::Id3v2Tag;
//!
//! # let mut reader = std::io::Cursor::new(Vec::new());
//! let tag = Id3v2Tag::parse(&mut reader, ParseOptions::new())?;
//!
//! for frame in &tag {
//! 	println!("{}: {}", frame.display_name(), frame.description());
//! }
//!
//! if let Some(Frame::Picture(picture)) = tag.get_frame("APIC") {
//! 	println!("{} ({} bytes)", picture.picture_type_name(), picture.data.len());
//! }
//! # Ok(()) }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
mod frame;
mod header;
mod items;
pub(crate) mod macros;
mod read;
pub mod registry;
pub mod tag;
pub mod util;

// Exports

pub use header::{ExtendedHeader, Id3v2Header, Id3v2TagFlags, Id3v2Version};
pub use util::text::TextEncoding;
pub use util::upgrade::{upgrade_v2, upgrade_v3};

pub use tag::Id3v2Tag;

pub use items::*;

pub use frame::header::{FrameHeader, FrameId};
pub use frame::{Frame, FrameFlags};
