//! Field addresses.
//!
//! Two equivalent external syntaxes name the same location:
//!
//! - dotted: `OBR.7`, `OBX.5.2`, `OBX(2).5(1).2`
//! - terser: `/.OBR-7`, `/.OBX-5-2`, `/.OBX(2)-5(1)-2`
//!
//! The segment code is exactly three ASCII-alphanumeric characters. All
//! indices are 1-based, as clinical users count them. A parenthesized
//! suffix on the segment selects the nth occurrence of that segment name
//! (default: first), and on the field index the nth repetition of the
//! field (default: first). Address parsing is a pure function of the
//! expression; no message is consulted.

use std::fmt;
use std::str::FromStr;

use crate::error::Hl7Error;

/// A parsed field address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// The 3-character segment code (e.g. `"OBR"`).
    pub segment: String,
    /// 1-based occurrence of the segment name within the message.
    pub occurrence: usize,
    /// 1-based field index within the segment.
    pub field: usize,
    /// 1-based repetition index within the field, when requested.
    pub repetition: Option<usize>,
    /// 1-based component index within the repetition, when requested.
    pub component: Option<usize>,
}

impl Address {
    /// Address the given 1-based field of a segment's first occurrence.
    pub fn new(segment: impl Into<String>, field: usize) -> Self {
        Address {
            segment: segment.into(),
            occurrence: 1,
            field,
            repetition: None,
            component: None,
        }
    }
}

impl fmt::Display for Address {
    /// Renders the dotted form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segment)?;
        if self.occurrence != 1 {
            write!(f, "({})", self.occurrence)?;
        }
        write!(f, ".{}", self.field)?;
        if let Some(rep) = self.repetition {
            write!(f, "({rep})")?;
        }
        if let Some(comp) = self.component {
            write!(f, ".{comp}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = Hl7Error;

    fn from_str(s: &str) -> Result<Self, Hl7Error> {
        let (body, separator) = match s.strip_prefix("/.") {
            Some(rest) => (rest, '-'),
            None => (s, '.'),
        };

        let mut parts = body.split(separator);
        let segment_part = parts.next().unwrap_or("");
        let field_part = parts
            .next()
            .ok_or_else(|| invalid("missing field index"))?;
        let component_part = parts.next();
        if parts.next().is_some() {
            return Err(invalid("more than three path elements"));
        }

        let (segment, occurrence) = split_paren_suffix(segment_part)?;
        if segment.len() != 3 || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid(format!(
                "segment code '{segment}' is not three alphanumeric characters"
            )));
        }
        let (field_text, repetition) = split_paren_suffix(field_part)?;
        let field = parse_index(field_text)?;
        let component = component_part.map(parse_index).transpose()?;

        Ok(Address {
            segment: segment.to_string(),
            occurrence: occurrence.unwrap_or(1),
            field,
            repetition,
            component,
        })
    }
}

fn invalid(reason: impl Into<String>) -> Hl7Error {
    Hl7Error::InvalidAddressSyntax {
        reason: reason.into(),
    }
}

/// Split an optional trailing `(n)` from a path element.
fn split_paren_suffix(part: &str) -> Result<(&str, Option<usize>), Hl7Error> {
    let Some(stripped) = part.strip_suffix(')') else {
        return Ok((part, None));
    };
    let Some((head, index)) = stripped.split_once('(') else {
        return Err(invalid(format!("unbalanced parenthesis in '{part}'")));
    };
    Ok((head, Some(parse_index(index)?)))
}

/// Parse a 1-based index: decimal digits only, at least 1.
fn parse_index(text: &str) -> Result<usize, Hl7Error> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(format!("'{text}' is not a positive integer")));
    }
    let index: usize = text
        .parse()
        .map_err(|_| invalid(format!("index '{text}' is out of range")))?;
    if index == 0 {
        return Err(invalid("indices are 1-based; 0 is not a valid index"));
    }
    Ok(index)
}
