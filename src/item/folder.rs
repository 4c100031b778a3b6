//! Folder variant.

use super::{Field, FieldError, FieldValue, ItemKind};
use crate::identity::ObjectId;
use serde::{Deserialize, Serialize};

/// A folder in the store hierarchy.
///
/// The three counters are server-computed snapshots and never sent by the
/// client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub folder_id: Option<ObjectId>,
    pub parent_folder_id: Option<ObjectId>,
    pub display_name: Option<String>,
    pub total_count: Option<i64>,
    pub child_folder_count: Option<i64>,
    pub unread_count: Option<i64>,
}

impl Folder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.folder_id.clone().map(FieldValue::Id),
            Field::ParentFolderId => self.parent_folder_id.clone().map(FieldValue::Id),
            Field::DisplayName => self.display_name.clone().map(FieldValue::Text),
            Field::TotalCount => self.total_count.map(FieldValue::Integer),
            Field::ChildFolderCount => self.child_folder_count.map(FieldValue::Integer),
            Field::UnreadCount => self.unread_count.map(FieldValue::Integer),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.folder_id = Some(id),
            (Field::ParentFolderId, FieldValue::Id(id)) => self.parent_folder_id = Some(id),
            (Field::DisplayName, FieldValue::Text(v)) => self.display_name = Some(v),
            (Field::TotalCount, FieldValue::Integer(v)) => self.total_count = Some(v),
            (Field::ChildFolderCount, FieldValue::Integer(v)) => self.child_folder_count = Some(v),
            (Field::UnreadCount, FieldValue::Integer(v)) => self.unread_count = Some(v),
            (
                Field::ItemId
                | Field::ParentFolderId
                | Field::DisplayName
                | Field::TotalCount
                | Field::ChildFolderCount
                | Field::UnreadCount,
                _,
            ) => return Err(FieldError::mismatch(ItemKind::Folder, field)),
            _ => return Err(FieldError::unknown(ItemKind::Folder, field)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_identity_reads_through_item_id_field() {
        let mut folder = Folder::named("Projects");
        folder
            .set_field(Field::ItemId, FieldValue::Id(ObjectId::new("f1", "v1")))
            .unwrap();
        assert_eq!(folder.folder_id, Some(ObjectId::new("f1", "v1")));
    }
}
