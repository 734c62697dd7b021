//! Path resolution: walking a message tree to the value an [`Address`]
//! names.
//!
//! The canonical value of an address is always the decoded text of a
//! single subcomponent — the first subcomponent of the selected component
//! of the selected repetition — never a delimiter-joined reconstruction.
//! Omitted repetition/component indices select the first, which is what
//! makes field-level addressing of a multi-component field return the
//! first component's text.

use crate::address::Address;
use crate::error::Hl7Error;
use crate::grammar::ast::Message;

impl<'a> Message<'a> {
    /// Resolve an address to its decoded value.
    ///
    /// An addressed node that exists but is empty resolves to `""`, as
    /// does an out-of-range repetition or component index; only a missing
    /// segment or an out-of-range field index is an error, mirroring
    /// [`scan`](crate::scan).
    ///
    /// # Errors
    ///
    /// [`Hl7Error::SegmentNotFound`] when no segment matches the name and
    /// occurrence, [`Hl7Error::FieldIndexOutOfRange`] when the field index
    /// exceeds the segment's field count.
    pub fn query(&self, address: &Address) -> Result<String, Hl7Error> {
        let segment = self
            .segment(&address.segment, address.occurrence)
            .ok_or_else(|| Hl7Error::SegmentNotFound {
                name: address.segment.clone(),
                occurrence: address.occurrence,
            })?;
        let field = segment
            .field(address.field)
            .ok_or_else(|| Hl7Error::FieldIndexOutOfRange {
                segment: address.segment.clone(),
                index: address.field,
            })?;

        let repetition = address.repetition.unwrap_or(1);
        let component = address.component.unwrap_or(1);
        let value = field
            .repetitions
            .get(repetition - 1)
            .and_then(|r| r.components.get(component - 1))
            .and_then(|c| c.subcomponents.first())
            .map_or("", |s| s.as_ref());
        Ok(value.to_string())
    }

    /// Parse an address expression (dotted or terser) and resolve it.
    ///
    /// # Errors
    ///
    /// [`Hl7Error::InvalidAddressSyntax`] for a malformed expression, plus
    /// everything [`Message::query`] reports.
    pub fn query_str(&self, address: &str) -> Result<String, Hl7Error> {
        self.query(&address.parse()?)
    }
}
