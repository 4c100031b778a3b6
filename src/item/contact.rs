//! Contact variant.

use super::values::Body;
use super::{Field, FieldError, FieldValue, ItemKind};
use crate::identity::ObjectId;
use serde::{Deserialize, Serialize};

/// A contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub item_id: Option<ObjectId>,
    pub parent_folder_id: Option<ObjectId>,
    pub subject: Option<String>,
    pub body: Option<Body>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub display_name: Option<String>,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub email_addresses: Vec<String>,
    pub has_attachments: Option<bool>,
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, given: impl Into<String>, surname: impl Into<String>) -> Self {
        self.given_name = Some(given.into());
        self.surname = Some(surname.into());
        self
    }

    pub fn with_email_address(mut self, address: impl Into<String>) -> Self {
        self.email_addresses.push(address.into());
        self
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.item_id.clone().map(FieldValue::Id),
            Field::ParentFolderId => self.parent_folder_id.clone().map(FieldValue::Id),
            Field::Subject => self.subject.clone().map(FieldValue::Text),
            Field::Body => self.body.clone().map(FieldValue::Body),
            Field::GivenName => self.given_name.clone().map(FieldValue::Text),
            Field::Surname => self.surname.clone().map(FieldValue::Text),
            Field::DisplayName => self.display_name.clone().map(FieldValue::Text),
            Field::CompanyName => self.company_name.clone().map(FieldValue::Text),
            Field::JobTitle => self.job_title.clone().map(FieldValue::Text),
            Field::EmailAddresses => (!self.email_addresses.is_empty())
                .then(|| FieldValue::TextList(self.email_addresses.clone())),
            Field::HasAttachments => self.has_attachments.map(FieldValue::Boolean),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.item_id = Some(id),
            (Field::ParentFolderId, FieldValue::Id(id)) => self.parent_folder_id = Some(id),
            (Field::Subject, FieldValue::Text(v)) => self.subject = Some(v),
            (Field::Body, FieldValue::Body(v)) => self.body = Some(v),
            (Field::GivenName, FieldValue::Text(v)) => self.given_name = Some(v),
            (Field::Surname, FieldValue::Text(v)) => self.surname = Some(v),
            (Field::DisplayName, FieldValue::Text(v)) => self.display_name = Some(v),
            (Field::CompanyName, FieldValue::Text(v)) => self.company_name = Some(v),
            (Field::JobTitle, FieldValue::Text(v)) => self.job_title = Some(v),
            (Field::EmailAddresses, FieldValue::TextList(v)) => self.email_addresses = v,
            (Field::HasAttachments, FieldValue::Boolean(v)) => self.has_attachments = Some(v),
            (
                Field::ItemId
                | Field::ParentFolderId
                | Field::Subject
                | Field::Body
                | Field::GivenName
                | Field::Surname
                | Field::DisplayName
                | Field::CompanyName
                | Field::JobTitle
                | Field::EmailAddresses
                | Field::HasAttachments,
                _,
            ) => return Err(FieldError::mismatch(ItemKind::Contact, field)),
            _ => return Err(FieldError::unknown(ItemKind::Contact, field)),
        }
        Ok(())
    }
}
