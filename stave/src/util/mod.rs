//! Utilities for working with ID3v2 tags

pub(crate) mod alloc;
pub(crate) mod io;
pub(crate) mod math;
pub mod synchsafe;
pub(crate) mod text;
pub mod upgrade;
