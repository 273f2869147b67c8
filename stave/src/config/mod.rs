//! Various configuration options to control stave

mod global_options;
mod parse_options;

pub use global_options::{GlobalOptions, apply_global_options};
pub use parse_options::{ParseOptions, ParsingMode};

pub(crate) use global_options::global_options;
