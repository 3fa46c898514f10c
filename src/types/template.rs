//! Declarative concatenation of width-tagged fields into one buffer.
//!
//! A template decouples what a wire format contains from how it is written:
//! callers describe an ordered list of typed fields, and `render` drives a
//! single [`BufferWriter`] over an exactly-sized allocation.

use crate::types::bytes::Bytes;
use crate::types::cursor::BufferWriter;

/// Width tag attached to each template field.
///
/// Integer kinds occupy their fixed width in the rendered buffer; `Raw`
/// fields occupy exactly their payload length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Raw,
    U8,
    U16,
    U32,
    U64,
}

/// One typed, width-tagged unit of data within a template.
///
/// Integer fields carry the value's native-endian bytes; `render` decodes
/// them with native byte order and re-emits little-endian, so the rendered
/// form is platform-independent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateField {
    kind: FieldKind,
    data: Bytes,
}

impl TemplateField {
    /// A field emitted verbatim, with whatever byte order the caller already
    /// encoded into `data`.
    pub fn raw(data: impl Into<Bytes>) -> Self {
        Self {
            kind: FieldKind::Raw,
            data: data.into(),
        }
    }

    /// A 1-byte unsigned integer field.
    pub fn u8(value: u8) -> Self {
        Self {
            kind: FieldKind::U8,
            data: Bytes::from([value]),
        }
    }

    /// A 2-byte unsigned integer field.
    pub fn u16(value: u16) -> Self {
        Self {
            kind: FieldKind::U16,
            data: Bytes::from(value.to_ne_bytes()),
        }
    }

    /// A 4-byte unsigned integer field.
    pub fn u32(value: u32) -> Self {
        Self {
            kind: FieldKind::U32,
            data: Bytes::from(value.to_ne_bytes()),
        }
    }

    /// An 8-byte unsigned integer field.
    pub fn u64(value: u64) -> Self {
        Self {
            kind: FieldKind::U64,
            data: Bytes::from(value.to_ne_bytes()),
        }
    }

    /// Builds a field from a kind and a caller-supplied payload.
    ///
    /// For integer kinds the payload's first 1/2/4/8 bytes must hold the
    /// value in native byte order; a shorter payload panics at render time.
    pub fn from_parts(kind: FieldKind, data: impl Into<Bytes>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    /// The field's width tag.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The field's payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Bytes this field occupies in the rendered buffer.
    pub fn declared_len(&self) -> usize {
        match self.kind {
            FieldKind::Raw => self.data.len(),
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 => 4,
            FieldKind::U64 => 8,
        }
    }
}

/// An ordered sequence of fields rendered into one contiguous buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTemplate {
    fields: Vec<TemplateField>,
    byte_len: usize,
}

impl FieldTemplate {
    /// Builds a template, computing the total rendered length once.
    pub fn new(fields: Vec<TemplateField>) -> Self {
        let byte_len = fields.iter().map(TemplateField::declared_len).sum();
        Self { fields, byte_len }
    }

    /// Total rendered length: the sum of every field's declared width.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> &[TemplateField] {
        &self.fields
    }

    /// Mutable access to the field list.
    ///
    /// `byte_len` is computed at construction and is NOT refreshed after
    /// mutation through this method; a template whose fields no longer sum
    /// to the cached length renders incorrectly or panics.
    pub fn fields_mut(&mut self) -> &mut Vec<TemplateField> {
        &mut self.fields
    }

    /// Renders every field in order into one freshly allocated buffer of
    /// exactly [`byte_len`](Self::byte_len) bytes.
    ///
    /// # Panics
    ///
    /// Panics if an integer field's payload is shorter than its declared
    /// width.
    pub fn render(&self) -> Bytes {
        let mut buf = vec![0u8; self.byte_len];
        let mut writer = BufferWriter::new(&mut buf);

        for field in &self.fields {
            match field.kind {
                FieldKind::Raw => writer.write_bytes(&field.data),
                FieldKind::U8 => writer.write_u8(field.data[0]),
                FieldKind::U16 => {
                    writer.write_u16(u16::from_ne_bytes(field.data[..2].try_into().unwrap()))
                }
                FieldKind::U32 => {
                    writer.write_u32(u32::from_ne_bytes(field.data[..4].try_into().unwrap()))
                }
                FieldKind::U64 => {
                    writer.write_u64(u64::from_ne_bytes(field.data[..8].try_into().unwrap()))
                }
            };
        }

        Bytes::from_vec(buf)
    }
}
