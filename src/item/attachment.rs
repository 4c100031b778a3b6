//! File attachment variant.

use super::{Field, FieldError, FieldValue, ItemKind};
use crate::identity::ObjectId;
use serde::{Deserialize, Serialize};

/// A file attachment hanging off an item.
///
/// The content travels base64-encoded on the wire and is write-once: it is
/// supplied at creation and never patched afterwards. `root_item_id` points
/// back at the owning item and is filled in from responses;
/// `content_size` is server-computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub attachment_id: Option<ObjectId>,
    pub root_item_id: Option<ObjectId>,
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<Vec<u8>>,
    pub content_size: Option<i64>,
    pub is_inline: Option<bool>,
}

impl Attachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.attachment_id.clone().map(FieldValue::Id),
            Field::Name => self.name.clone().map(FieldValue::Text),
            Field::ContentType => self.content_type.clone().map(FieldValue::Text),
            Field::Content => self.content.clone().map(FieldValue::Bytes),
            Field::ContentSize => self.content_size.map(FieldValue::Integer),
            Field::IsInline => self.is_inline.map(FieldValue::Boolean),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.attachment_id = Some(id),
            (Field::Name, FieldValue::Text(v)) => self.name = Some(v),
            (Field::ContentType, FieldValue::Text(v)) => self.content_type = Some(v),
            (Field::Content, FieldValue::Bytes(v)) => self.content = Some(v),
            (Field::ContentSize, FieldValue::Integer(v)) => self.content_size = Some(v),
            (Field::IsInline, FieldValue::Boolean(v)) => self.is_inline = Some(v),
            (
                Field::ItemId
                | Field::Name
                | Field::ContentType
                | Field::Content
                | Field::ContentSize
                | Field::IsInline,
                _,
            ) => return Err(FieldError::mismatch(ItemKind::Attachment, field)),
            _ => return Err(FieldError::unknown(ItemKind::Attachment, field)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_reads_as_bytes() {
        let attachment = Attachment::file("report.pdf", b"%PDF-".to_vec());
        assert_eq!(
            attachment.field(Field::Content),
            Some(FieldValue::Bytes(b"%PDF-".to_vec()))
        );
    }
}
