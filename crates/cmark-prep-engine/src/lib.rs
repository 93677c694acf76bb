//! # cmark-prep-engine
//!
//! The preprocessing stage that runs before CommonMark block parsing. It
//! turns arbitrary input into a canonical form:
//!
//! - every line terminator (CR, LF or CRLF) becomes a single LF, and the last
//!   line always gets one;
//! - every tab is expanded to spaces on a 4-column grid, with columns
//!   counted in codepoints.
//!
//! ```text
//! Byte source → scan_line → line → expand_tabs → line + LF → output
//!               (scan / reader)     (tabs)        (convert)
//! ```
//!
//! [`convert`] handles in-memory input and cannot fail. [`convert_reader`]
//! pulls from any [`std::io::Read`] and fails only if the reader does.
//!
//! ```
//! use cmark_prep_engine::convert;
//!
//! assert_eq!(convert(b"a\r\nb\rc\nd"), b"a\nb\nc\nd\n");
//! assert_eq!(convert("é\tx".as_bytes()), "é   x\n".as_bytes());
//! ```
//!
//! Input is not validated as UTF-8. Nothing is cached between calls.

pub mod convert;
pub mod error;
pub mod options;
pub mod reader;
pub mod scan;
pub mod tabs;

pub use convert::{convert, convert_reader, convert_reader_with};
pub use error::{ConvertError, OptionsError};
pub use options::ReaderOptions;
pub use reader::LineReader;
pub use scan::{Lines, Scan, lines, scan_line};
pub use tabs::{TAB_STOP, expand_tabs};
