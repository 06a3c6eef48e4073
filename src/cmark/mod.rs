//! Useful utilities for parsing and working with CommonMark files.

mod parser;
mod section;

pub use parser::*;
pub use section::*;
