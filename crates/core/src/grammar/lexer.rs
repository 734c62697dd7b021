//! Segment lexer: splits a raw message into borrowed segment spans.
//!
//! HL7 v2 terminates segments with CR, but messages seen in the wild use
//! LF or CRLF just as often, so all three are accepted. Every yielded span
//! borrows directly from the input — no allocation.

/// Iterate the non-empty segment spans of a raw message, in order.
///
/// Empty spans are skipped wherever they occur: the gap inside a CRLF
/// pair, blank lines, and trailing terminators all degenerate to empty
/// spans, none of which carry a segment.
pub fn segments(input: &str) -> impl Iterator<Item = &str> {
    input.split(['\r', '\n']).filter(|span| !span.is_empty())
}
