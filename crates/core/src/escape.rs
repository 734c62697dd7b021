//! Decoding of in-band escape sequences in HL7 leaf text.
//!
//! Delimiter characters cannot appear literally inside a value, so HL7
//! encodes them as `<esc>X<esc>` where `<esc>` is the message's escape
//! character and `X` names the delimiter: `F` (field), `S` (component),
//! `T` (subcomponent), `R` (repetition), `E` (the escape character
//! itself). With the conventional table, `\F\` decodes to `|`.
//!
//! Decoding runs on leaf text only, after tokenization. Escaped delimiters
//! never appear as raw delimiter bytes in the source, so splitting before
//! decoding cannot corrupt structure.

use std::borrow::Cow;

use crate::separators::Separators;

/// Decode the delimiter escape sequences in one subcomponent's text.
///
/// Unrecognized `<esc>...<esc>` sequences pass through unchanged — HL7
/// permits vendor-defined escape codes (highlighting directives, charset
/// switches) that are not delimiter substitutions. An escape character
/// with no closing partner also passes through. There is no error path.
///
/// Returns `Cow::Borrowed` when the text contains no escape character, so
/// the common unescaped leaf costs no allocation.
pub fn decode_escapes<'a>(text: &'a str, separators: &Separators) -> Cow<'a, str> {
    let esc = separators.escape;
    if !text.contains(esc) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(esc) {
        out.push_str(&rest[..start]);
        let after = &rest[start + esc.len_utf8()..];
        let Some(end) = after.find(esc) else {
            // Unterminated escape: emit the remainder verbatim.
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let code = &after[..end];
        match code {
            "F" => out.push(separators.field),
            "S" => out.push(separators.component),
            "T" => out.push(separators.subcomponent),
            "R" => out.push(separators.repetition),
            "E" => out.push(esc),
            _ => {
                out.push(esc);
                out.push_str(code);
                out.push(esc);
            }
        }
        rest = &after[end + esc.len_utf8()..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}
