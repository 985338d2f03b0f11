//! camelize rewrites snake_case identifiers in text into camelCase.
//!
//! The rewrite is textual and context-free: every underscore immediately
//! followed by an ASCII letter is dropped and the letter upper-cased, line by
//! line, wherever it appears (string literals and comments included).
//!
//! ```
//! use camelize::conversion::convert_line;
//!
//! assert_eq!(convert_line("foo_bar_baz\n"), "fooBarBaz\n");
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod conversion;
pub mod core;
pub mod infrastructure;
