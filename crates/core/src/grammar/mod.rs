/// HL7 message tree types.
pub mod ast;
/// JSON serialization helpers for the message tree.
pub mod dump;
/// Segment lexer — splits raw input into borrowed segment spans.
pub mod lexer;
/// Message parser — builds a message tree from raw input.
pub mod parser;
