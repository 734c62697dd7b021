//! Message parser: builds a [`Message`] tree from raw pipe-encoded text.
//!
//! Parsing is two-phase by necessity — the message declares its own
//! delimiters, so a narrow bootstrap read of the header
//! ([`Separators::from_header`]) must complete before the general split
//! can run. Delimiters are never inferred speculatively mid-stream.

use std::borrow::Cow;

use super::ast::{Component, Field, Message, Repetition, Segment};
use super::lexer;
use crate::error::Hl7Error;
use crate::escape::decode_escapes;
use crate::separators::Separators;

/// Parse a full HL7 message into an addressable tree.
///
/// The tree preserves every field position: an empty field text still
/// becomes a field with one empty repetition/component/subcomponent chain,
/// so later fields keep their indices. A malformed message fails outright;
/// there is no partially populated result.
///
/// # Errors
///
/// [`Hl7Error::EmptyMessage`] when the input holds no segment at all, and
/// [`Hl7Error::UnknownDelimiters`] when the header's delimiter declaration
/// cannot be resolved.
pub fn parse_str(input: &str) -> Result<Message<'_>, Hl7Error> {
    let mut spans = lexer::segments(input).peekable();
    let first = *spans.peek().ok_or(Hl7Error::EmptyMessage)?;
    let separators = Separators::from_header(first)?;

    let segments = spans
        .map(|span| parse_segment(span, &separators))
        .collect();
    Ok(Message {
        separators,
        segments,
    })
}

fn parse_segment<'a>(span: &'a str, separators: &Separators) -> Segment<'a> {
    let mut tokens = span.split(separators.field);
    let name = tokens.next().unwrap_or(span);

    let mut fields = vec![Field::literal(name)];
    if name == "MSH" && span.len() > name.len() {
        // MSH offset quirk: field 1 is the field-separator character
        // itself and field 2 the four-character encoding block. Neither
        // is re-split or escape-decoded.
        fields.push(Field::literal(&span[3..4]));
        if let Some(encoding) = tokens.next() {
            fields.push(Field::literal(encoding));
        }
    }
    fields.extend(tokens.map(|text| parse_field(text, separators)));

    Segment { name, fields }
}

fn parse_field<'a>(text: &'a str, separators: &Separators) -> Field<'a> {
    let repetitions = text
        .split(separators.repetition)
        .map(|rep| Repetition {
            components: rep
                .split(separators.component)
                .map(|comp| Component {
                    subcomponents: comp
                        .split(separators.subcomponent)
                        .map(|sub| decode_escapes(sub, separators))
                        .collect::<Vec<Cow<'_, str>>>(),
                })
                .collect(),
        })
        .collect();
    Field { repetitions }
}
