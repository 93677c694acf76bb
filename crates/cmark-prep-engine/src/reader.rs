use std::io::{self, Read};

use crate::error::ConvertError;
use crate::options::ReaderOptions;
use crate::scan::{Scan, scan_line};

/// Pulls lines out of any [`Read`] source, one buffer refill at a time.
///
/// Unconsumed bytes live in `buf[start..end]`. A refill first moves them to
/// the front of the buffer, and doubles the buffer if it is already full, so
/// a line (or a CRLF) that straddles two reads is always seen whole by
/// [`scan_line`].
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, &ReaderOptions::default())
    }

    pub fn with_options(inner: R, options: &ReaderOptions) -> Self {
        Self {
            inner,
            buf: vec![0; options.effective_buffer_size()],
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// Returns the next line with its terminator stripped, or `None` once
    /// the source is exhausted.
    ///
    /// The returned slice borrows the internal buffer and is only valid until
    /// the next call. A read error is returned as-is and is not retried.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, ConvertError> {
        loop {
            let pending = &self.buf[self.start..self.end];
            match scan_line(pending, self.eof) {
                Scan::Line { advance, line } => {
                    let begin = self.start;
                    let len = line.len();
                    self.start += advance;
                    return Ok(Some(&self.buf[begin..begin + len]));
                }
                Scan::Done => return Ok(None),
                Scan::NeedMore => self.fill()?,
            }
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> Result<(), ConvertError> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.end == self.buf.len() {
            let grown = self.buf.len() * 2;
            log::trace!("growing line buffer from {} to {grown} bytes", self.buf.len());
            self.buf.resize(grown, 0);
        }

        loop {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    log::trace!("source exhausted with {} bytes pending", self.end);
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    log::trace!("read {n} bytes");
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ConvertError::Read(e)),
            }
        }
    }
}
