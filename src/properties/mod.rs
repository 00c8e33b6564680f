//! Java-style properties format parsing.
//!
//! Line-oriented `key=value` text with `#`/`!` comment lines and backslash
//! line continuation. No interpolation, no includes.

pub mod parser;

pub use parser::{PropertiesError, parse_str};
