use std::borrow::Cow;

/// Width of the tab-stop grid, in codepoints.
pub const TAB_STOP: usize = 4;

/// Replaces each tab in `line` with 1 to [`TAB_STOP`] spaces so the next
/// character lands on a tab stop.
///
/// Columns count codepoints, not bytes, and restart at 0 for every line.
/// Bytes that are not valid UTF-8 are copied through unchanged and count
/// one column each.
///
/// Returns the input untouched when it contains no tab.
pub fn expand_tabs(line: &[u8]) -> Cow<'_, [u8]> {
    let tabs = line.iter().filter(|&&b| b == b'\t').count();
    if tabs == 0 {
        return Cow::Borrowed(line);
    }

    let mut out = Vec::with_capacity(line.len() + (TAB_STOP - 1) * tabs);
    let mut column = 0;

    for chunk in line.utf8_chunks() {
        let mut segments = chunk.valid().split('\t');
        if let Some(first) = segments.next() {
            push_segment(&mut out, &mut column, first);
        }
        for segment in segments {
            let spaces = TAB_STOP - column % TAB_STOP;
            out.resize(out.len() + spaces, b' ');
            column += spaces;
            push_segment(&mut out, &mut column, segment);
        }

        let invalid = chunk.invalid();
        out.extend_from_slice(invalid);
        column += invalid.len();
    }

    Cow::Owned(out)
}

fn push_segment(out: &mut Vec<u8>, column: &mut usize, segment: &str) {
    out.extend_from_slice(segment.as_bytes());
    *column += segment.chars().count();
}
