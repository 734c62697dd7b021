//! Typed error types for HL7 parsing and addressing.

use crate::separators::MalformedHeader;

/// Failures surfaced by the parser, the path resolver, and the direct
/// scanner.
///
/// All failures are synchronous and deterministic: they are caused by
/// malformed input or a bad address, never by transient conditions, so
/// there is no retry story. Every component propagates to its immediate
/// caller; nothing is swallowed or logged internally.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Hl7Error {
    /// The message's delimiter set could not be resolved from its header.
    ///
    /// Surfaced identically by [`parse_str`](crate::parse_str) and
    /// [`scan`](crate::scan); the underlying [`MalformedHeader`] carries
    /// the specific reason.
    #[error("could not resolve message delimiters")]
    UnknownDelimiters(#[from] MalformedHeader),

    /// The input contains no segments at all.
    #[error("message contains no segments")]
    EmptyMessage,

    /// No segment with the requested name and occurrence exists.
    #[error("segment {name}({occurrence}) not found")]
    SegmentNotFound {
        /// The 3-character segment code that was requested.
        name: String,
        /// The 1-based occurrence that was requested.
        occurrence: usize,
    },

    /// The requested field index exceeds the segment's field count.
    #[error("field {index} out of range for segment {segment}")]
    FieldIndexOutOfRange {
        /// The name of the segment that was addressed.
        segment: String,
        /// The 1-based field index that was requested.
        index: usize,
    },

    /// The address expression could not be parsed.
    #[error("invalid address syntax: {reason}")]
    InvalidAddressSyntax {
        /// What was wrong with the expression.
        reason: String,
    },
}
