use std::borrow::Cow;

use serde::Serialize;

use crate::separators::Separators;

/// A parsed HL7 message: the delimiter table it declared plus its segments
/// in encounter order.
///
/// The tree borrows the source text it was parsed from and is immutable
/// once built; re-reading is free, changing it means re-parsing. Segments
/// are deliberately not keyed by name — names repeat (multiple `OBX`
/// segments in one result message are the norm) and order is significant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Message<'a> {
    /// The delimiter table resolved from this message's own header.
    pub separators: Separators,
    /// Ordered list of segments found in the input.
    pub segments: Vec<Segment<'a>>,
}

/// A single segment: one terminator-delimited line of the message.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Segment<'a> {
    /// The 3-character segment code (e.g. `"OBR"`).
    pub name: &'a str,
    /// Ordered fields. Index 0 is the segment name itself, so clinical
    /// 1-based field numbering maps directly onto vector indices. For
    /// `MSH`, field 1 is the field-separator character and field 2 the
    /// four-character encoding block, both stored literally.
    pub fields: Vec<Field<'a>>,
}

/// A single field — one "value between the pipes". Most fields have
/// exactly one repetition.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Field<'a> {
    /// Ordered repetitions of this field.
    pub repetitions: Vec<Repetition<'a>>,
}

/// One repetition of a field's value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Repetition<'a> {
    /// Ordered components of this repetition.
    pub components: Vec<Component<'a>>,
}

/// One component of a repetition. Most components have exactly one
/// subcomponent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Component<'a> {
    /// Decoded leaf text. Borrows the source unless escape sequences
    /// forced an owned decode.
    pub subcomponents: Vec<Cow<'a, str>>,
}

impl<'a> Message<'a> {
    /// The nth (1-based) segment with the given name, in encounter order.
    pub fn segment(&self, name: &str, occurrence: usize) -> Option<&Segment<'a>> {
        self.segments
            .iter()
            .filter(|s| s.name == name)
            .nth(occurrence.saturating_sub(1))
    }
}

impl<'a> Segment<'a> {
    /// The field at the given index. Index 0 is the segment name; content
    /// fields are 1-based, matching clinical numbering.
    pub fn field(&self, index: usize) -> Option<&Field<'a>> {
        self.fields.get(index)
    }
}

impl<'a> Field<'a> {
    /// A field holding one repetition, one component, one subcomponent of
    /// verbatim text. Used for segment names and the MSH delimiter fields,
    /// which are never split or escape-decoded.
    pub(crate) fn literal(text: &'a str) -> Self {
        Field {
            repetitions: vec![Repetition {
                components: vec![Component {
                    subcomponents: vec![Cow::Borrowed(text)],
                }],
            }],
        }
    }

    /// The canonical field-level value: the first repetition's first
    /// component's first subcomponent, decoded. Empty string when absent.
    pub fn value(&self) -> &str {
        self.repetitions
            .first()
            .and_then(|r| r.components.first())
            .and_then(|c| c.subcomponents.first())
            .map_or("", |s| s.as_ref())
    }
}
