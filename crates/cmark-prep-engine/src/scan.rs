//! # Line splitting
//!
//! [`scan_line`] is a split function: it looks at the bytes that have not
//! been consumed yet and decides whether they hold a complete line. It
//! recognizes all three terminators:
//!
//! ```text
//! "a\nb"    → "a" (LF)
//! "a\r\nb"  → "a" (CRLF, consumed as one unit)
//! "a\rb"    → "a" (lone CR)
//! ```
//!
//! A CR that is the last available byte is ambiguous while more input may
//! still arrive: it could be the first half of a CRLF split across two reads.
//! In that case the scanner asks for more data instead of guessing. Once the
//! caller signals end of input, the trailing CR is a terminator on its own.
//!
//! The same function drives both the in-memory [`Lines`] iterator and the
//! streaming [`LineReader`](crate::reader::LineReader).

use std::iter::FusedIterator;

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Outcome of a single [`scan_line`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// `advance` bytes are consumed; `line` is their prefix without the
    /// terminator.
    Line { advance: usize, line: &'a [u8] },
    /// No complete line yet; supply more bytes.
    NeedMore,
    /// Nothing left and no more input will arrive.
    Done,
}

/// Splits the next line off `pending`.
///
/// `at_eof` tells the scanner that `pending` is everything that will ever
/// arrive. Never returns [`Scan::NeedMore`] when `at_eof` is set.
pub fn scan_line(pending: &[u8], at_eof: bool) -> Scan<'_> {
    if at_eof && pending.is_empty() {
        return Scan::Done;
    }

    if let Some(i) = pending.iter().position(|&b| b == LF || b == CR) {
        if pending[i] == LF {
            return Scan::Line {
                advance: i + 1,
                line: &pending[..i],
            };
        }
        return match pending.get(i + 1) {
            Some(&LF) => Scan::Line {
                advance: i + 2,
                line: &pending[..i],
            },
            Some(_) => Scan::Line {
                advance: i + 1,
                line: &pending[..i],
            },
            None if at_eof => Scan::Line {
                advance: i + 1,
                line: &pending[..i],
            },
            None => Scan::NeedMore,
        };
    }

    if at_eof {
        // Final line without a terminator.
        Scan::Line {
            advance: pending.len(),
            line: pending,
        }
    } else {
        Scan::NeedMore
    }
}

/// Iterator over the lines of an in-memory buffer, terminators stripped.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

/// Returns an iterator over the lines of `input`.
///
/// Empty input yields nothing; a trailing terminator does not produce an
/// extra empty line.
pub fn lines(input: &[u8]) -> Lines<'_> {
    Lines { rest: input }
}

impl<'a> Lines<'a> {
    /// Bytes not yet split off.
    pub fn remainder(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        match scan_line(self.rest, true) {
            Scan::Line { advance, line } => {
                self.rest = &self.rest[advance..];
                Some(line)
            }
            Scan::NeedMore | Scan::Done => None,
        }
    }
}

impl FusedIterator for Lines<'_> {}
