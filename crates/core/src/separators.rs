//! The per-message delimiter table.
//!
//! HL7 v2 messages declare their own delimiters: the character immediately
//! after the leading segment code is the field separator, and the first
//! content field holds the component, repetition, escape, and subcomponent
//! characters in that order (`MSH|^~\&|...`). The table is resolved once
//! from a message's own header and is immutable for that message's
//! lifetime; it must never be inferred from a different message.

use serde::Serialize;

/// The five delimiter characters of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Separators {
    /// Separates fields within a segment (conventionally `|`).
    pub field: char,
    /// Separates components within a repetition (conventionally `^`).
    pub component: char,
    /// Separates repetitions within a field (conventionally `~`).
    pub repetition: char,
    /// Introduces and closes escape sequences (conventionally `\`).
    pub escape: char,
    /// Separates subcomponents within a component (conventionally `&`).
    pub subcomponent: char,
}

/// Delimiter resolution failure: the input does not begin with a segment
/// code, a field separator, and a complete four-character encoding block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed header at byte {offset}: {reason}")]
pub struct MalformedHeader {
    /// What was wrong with the header.
    pub reason: &'static str,
    /// Byte offset in the input where resolution failed.
    pub offset: usize,
}

impl Default for Separators {
    /// The conventional `|^~\&` table. Useful for building fixtures; real
    /// messages must go through [`Separators::from_header`].
    fn default() -> Self {
        Self {
            field: '|',
            component: '^',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    }
}

impl Separators {
    /// Resolve the delimiter table from the start of a raw message.
    ///
    /// Pure function of the input prefix. The field separator is read
    /// positionally (byte 3, right after the segment code) rather than
    /// assumed to be `|`, and the four encoding characters are read
    /// relative to it, up to the next field separator, segment terminator,
    /// or end of input. The block must supply exactly four characters and
    /// all five delimiters must be distinct.
    pub fn from_header(input: &str) -> Result<Separators, MalformedHeader> {
        let b = input.as_bytes();
        if b.len() < 4 {
            return Err(MalformedHeader {
                reason: "header shorter than a segment code plus field separator",
                offset: b.len(),
            });
        }
        if !b[..3].iter().all(u8::is_ascii_alphanumeric) {
            return Err(MalformedHeader {
                reason: "header does not begin with a 3-character segment code",
                offset: 0,
            });
        }
        let field = b[3];
        if !field.is_ascii() || field == b'\r' || field == b'\n' {
            return Err(MalformedHeader {
                reason: "field separator is not a printable ASCII character",
                offset: 3,
            });
        }

        let mut encoding = [0u8; 4];
        let mut count = 0;
        let mut i = 4;
        while i < b.len() {
            let c = b[i];
            if c == field || c == b'\r' || c == b'\n' {
                break;
            }
            if count == 4 {
                return Err(MalformedHeader {
                    reason: "encoding block holds more than four characters",
                    offset: i,
                });
            }
            if !c.is_ascii() {
                return Err(MalformedHeader {
                    reason: "encoding block holds a non-ASCII character",
                    offset: i,
                });
            }
            encoding[count] = c;
            count += 1;
            i += 1;
        }
        if count < 4 {
            return Err(MalformedHeader {
                reason: "encoding block supplies fewer than four characters",
                offset: i,
            });
        }

        let seps = Separators {
            field: field as char,
            component: encoding[0] as char,
            repetition: encoding[1] as char,
            escape: encoding[2] as char,
            subcomponent: encoding[3] as char,
        };
        let all = [
            seps.field,
            seps.component,
            seps.repetition,
            seps.escape,
            seps.subcomponent,
        ];
        for (n, c) in all.iter().enumerate() {
            if all[n + 1..].contains(c) {
                return Err(MalformedHeader {
                    reason: "delimiter characters are not distinct",
                    offset: 4,
                });
            }
        }
        Ok(seps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_conventional_table() {
        let seps = Separators::from_header("MSH|^~\\&|APP").unwrap();
        assert_eq!(seps, Separators::default());
    }

    #[test]
    fn resolves_user_chosen_delimiters() {
        let seps = Separators::from_header("MSH#!@$%#APP").unwrap();
        assert_eq!(seps.field, '#');
        assert_eq!(seps.component, '!');
        assert_eq!(seps.repetition, '@');
        assert_eq!(seps.escape, '$');
        assert_eq!(seps.subcomponent, '%');
    }

    #[test]
    fn encoding_block_may_end_at_terminator_or_eof() {
        assert!(Separators::from_header("MSH|^~\\&\rPID|1").is_ok());
        assert!(Separators::from_header("MSH|^~\\&").is_ok());
    }

    #[test]
    fn rejects_short_header() {
        let err = Separators::from_header("MS").unwrap_err();
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn rejects_missing_segment_code() {
        assert!(Separators::from_header("M|H|^~\\&|").is_err());
    }

    #[test]
    fn rejects_short_encoding_block() {
        let err = Separators::from_header("MSH|^~\\|APP").unwrap_err();
        assert_eq!(err.reason, "encoding block supplies fewer than four characters");
    }

    #[test]
    fn rejects_long_encoding_block() {
        let err = Separators::from_header("MSH|^~\\&!|APP").unwrap_err();
        assert_eq!(err.reason, "encoding block holds more than four characters");
    }

    #[test]
    fn rejects_duplicate_delimiters() {
        let err = Separators::from_header("MSH|^^~&|APP").unwrap_err();
        assert_eq!(err.reason, "delimiter characters are not distinct");
    }
}
