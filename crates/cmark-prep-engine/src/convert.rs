use std::io::Read;

use crate::error::ConvertError;
use crate::options::ReaderOptions;
use crate::reader::LineReader;
use crate::scan::lines;
use crate::tabs::expand_tabs;

/// Normalizes an in-memory buffer: every line ends in a single LF and tabs
/// are expanded to spaces.
///
/// Empty input gives empty output. Otherwise the output always ends in LF,
/// whether or not the input did.
pub fn convert(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + 1);
    let mut count = 0usize;
    for line in lines(input) {
        push_line(&mut out, line);
        count += 1;
    }
    log::debug!(
        "normalized {count} lines ({} bytes in, {} bytes out)",
        input.len(),
        out.len()
    );
    out
}

/// Same as [`convert`], but pulls input from a reader.
///
/// A read error aborts the conversion and nothing produced so far is
/// returned.
pub fn convert_reader<R: Read>(reader: R) -> Result<Vec<u8>, ConvertError> {
    convert_reader_with(reader, &ReaderOptions::default())
}

pub fn convert_reader_with<R: Read>(
    reader: R,
    options: &ReaderOptions,
) -> Result<Vec<u8>, ConvertError> {
    let mut reader = LineReader::with_options(reader, options);
    let mut out = Vec::new();
    let mut count = 0usize;
    loop {
        match reader.next_line() {
            Ok(Some(line)) => {
                push_line(&mut out, line);
                count += 1;
            }
            Ok(None) => break,
            Err(e) => {
                log::debug!("conversion aborted after {count} lines: {e}");
                return Err(e);
            }
        }
    }
    log::debug!("normalized {count} lines ({} bytes out)", out.len());
    Ok(out)
}

fn push_line(out: &mut Vec<u8>, line: &[u8]) {
    out.extend_from_slice(&expand_tabs(line));
    out.push(b'\n');
}
