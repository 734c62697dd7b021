//! Direct scanner: one-shot value extraction without building a tree.
//!
//! Where [`parse_str`](crate::parse_str) pays for a full tree once and
//! answers many addresses cheaply, the scanner answers a single address in
//! one forward pass: resolve the delimiter table from the prefix, seek the
//! target segment span (touching each skipped byte at most once), seek the
//! target field within that span, then slice repetition, component, and
//! subcomponent out of that field's text alone. Auxiliary state is O(1);
//! the only allocation is the decoded return value.
//!
//! The pass moves through three phases — seek segment, seek field, extract
//! value — each a straight-line function below; reaching end of input in
//! either seek phase is the failure transition. For every well-formed
//! input and valid address the scanner returns exactly what the full
//! parse-then-query path returns.

use crate::address::Address;
use crate::error::Hl7Error;
use crate::escape::decode_escapes;
use crate::grammar::lexer;
use crate::separators::Separators;

/// Extract a single addressed value from raw message text.
///
/// # Errors
///
/// [`Hl7Error::UnknownDelimiters`] when the header cannot be resolved,
/// [`Hl7Error::SegmentNotFound`] and [`Hl7Error::FieldIndexOutOfRange`]
/// exactly as [`Message::query`](crate::Message::query) reports them.
pub fn scan(input: &str, address: &Address) -> Result<String, Hl7Error> {
    let first = lexer::segments(input).next().unwrap_or(input);
    let separators = Separators::from_header(first)?;

    let span = seek_segment(input, address, &separators)?;
    let repetition = address.repetition.unwrap_or(1);
    let component = address.component.unwrap_or(1);

    if address.segment == "MSH" && address.field <= 2 {
        // The virtual MSH fields are literal: one repetition, one
        // component, never escape-decoded. Any deeper index is empty.
        let text = if address.field == 1 {
            if span.len() > 3 {
                &span[3..4]
            } else {
                return Err(Hl7Error::FieldIndexOutOfRange {
                    segment: address.segment.clone(),
                    index: address.field,
                });
            }
        } else {
            seek_field(span, address, &separators)?
        };
        return Ok(if repetition == 1 && component == 1 {
            text.to_string()
        } else {
            String::new()
        });
    }

    let field_text = seek_field(span, address, &separators)?;
    Ok(extract_value(
        field_text,
        repetition,
        component,
        &separators,
    ))
}

/// Parse an address expression (dotted or terser) and scan for it.
///
/// # Errors
///
/// [`Hl7Error::InvalidAddressSyntax`] for a malformed expression, plus
/// everything [`scan`] reports.
pub fn scan_str(input: &str, address: &str) -> Result<String, Hl7Error> {
    scan(input, &address.parse()?)
}

/// Seek phase 1: the target segment's span.
///
/// Compares the leading field token of each terminator-delimited span
/// against the target name, counting occurrences, without looking past
/// each span's name token until a match.
fn seek_segment<'a>(
    input: &'a str,
    address: &Address,
    separators: &Separators,
) -> Result<&'a str, Hl7Error> {
    let mut remaining = address.occurrence;
    for span in lexer::segments(input) {
        let name = span.split(separators.field).next().unwrap_or(span);
        if name == address.segment {
            remaining -= 1;
            if remaining == 0 {
                return Ok(span);
            }
        }
    }
    Err(Hl7Error::SegmentNotFound {
        name: address.segment.clone(),
        occurrence: address.occurrence,
    })
}

/// Seek phase 2: the target field's raw text within the matched span.
fn seek_field<'a>(
    span: &'a str,
    address: &Address,
    separators: &Separators,
) -> Result<&'a str, Hl7Error> {
    // MSH numbering is shifted by its virtual field 1 (the separator
    // character): content token n holds field n+1.
    let token_index = if address.segment == "MSH" {
        address.field - 1
    } else {
        address.field
    };
    span.split(separators.field)
        .nth(token_index)
        .ok_or_else(|| Hl7Error::FieldIndexOutOfRange {
            segment: address.segment.clone(),
            index: address.field,
        })
}

/// Extract phase: repetition/component/subcomponent slicing on the field
/// text only, then escape decoding. Out-of-range repetition or component
/// indices resolve to the empty string, matching tree addressing.
fn extract_value(
    text: &str,
    repetition: usize,
    component: usize,
    separators: &Separators,
) -> String {
    let value = text
        .split(separators.repetition)
        .nth(repetition - 1)
        .and_then(|rep| rep.split(separators.component).nth(component - 1))
        .and_then(|comp| comp.split(separators.subcomponent).next())
        .unwrap_or("");
    decode_escapes(value, separators).into_owned()
}
