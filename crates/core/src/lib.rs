//! HL7 toolchain core library.
//!
//! Provides tokenization and field addressing for HL7 v2 pipe-encoded
//! messages. The main entry points are [`parse_str`] for building a
//! [`Message`] tree that can be addressed repeatedly, and [`scan`] /
//! [`scan_str`] for extracting a single value in one linear pass without
//! building a tree. Both agree on every input.

#![warn(missing_docs)]

/// Field addresses: dotted (`OBR.7`) and terser (`/.OBR-7`) path syntax.
pub mod address;
/// Decoding of in-band escape sequences (`\F\`, `\S\`, ...) in leaf text.
pub mod escape;
/// Typed errors surfaced by parsing and addressing.
pub mod error;
/// HL7 grammar: segment lexer, message parser, tree types, and JSON dump.
pub mod grammar;
/// Path resolution — walking a message tree to an addressed value.
pub mod query;
/// Direct scanner — one-shot value extraction without a message tree.
pub mod scan;
/// The per-message delimiter table and its MSH bootstrap resolver.
pub mod separators;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Parser
pub use grammar::parser::parse_str;

// Message tree
pub use grammar::ast::{Component, Field, Message, Repetition, Segment};

// Addressing
pub use address::Address;

// Direct scanner
pub use scan::{scan, scan_str};

// Delimiters
pub use separators::{MalformedHeader, Separators};

// Errors
pub use error::Hl7Error;

// Serialization helpers
pub use grammar::dump::to_pretty_json;
