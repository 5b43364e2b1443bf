use super::{Record, RecordId};
use crate::error::Result;
use crate::validate::{check_id, check_record_id, validate_email, validate_name, validate_phone};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: RecordId,
    name: String,
    phone: String,
    email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    /// Names of the supplied fields, in declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.phone.is_some() {
            fields.push("phone");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        fields
    }
}

/// On-disk shape of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    pub contact_id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl Contact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Record for Contact {
    type Draft = ContactDraft;
    type Patch = ContactPatch;
    type Row = ContactRow;

    const KIND: &'static str = "Contact";
    const PLURAL: &'static str = "contacts";
    const COLLECTION: &'static str = "contact book";

    fn create(id: RecordId, draft: ContactDraft) -> Result<Self> {
        let name = validate_name(&draft.name)?.to_string();
        let phone = validate_phone(&draft.phone)?.to_string();
        let id = check_record_id(id)?;
        let email = validate_email(draft.email.as_deref())?.map(str::to_string);

        Ok(Self {
            id,
            name,
            phone,
            email,
        })
    }

    fn update(&mut self, patch: &ContactPatch) -> Result<()> {
        // Validate everything before writing anything
        let name = patch.name.as_deref().map(validate_name).transpose()?;
        let phone = patch.phone.as_deref().map(validate_phone).transpose()?;
        let email = validate_email(patch.email.as_deref())?;

        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(phone) = phone {
            self.phone = phone.to_string();
        }
        if let Some(email) = email {
            self.email = Some(email.to_string());
        }
        Ok(())
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.phone)
    }

    fn draft_key(draft: &ContactDraft) -> Option<&str> {
        Some(&draft.phone)
    }

    fn patch_key(patch: &ContactPatch) -> Option<&str> {
        patch.phone.as_deref()
    }

    fn to_row(&self) -> ContactRow {
        ContactRow {
            contact_id: self.id as i64,
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    fn from_row(row: ContactRow) -> Result<Self> {
        let id = check_id(row.contact_id)?;
        let draft = ContactDraft {
            name: row.name,
            phone: row.phone,
            email: row.email,
        };
        Self::create(id, draft)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Phone Number: {} | Email: {}",
            self.id,
            self.name,
            self.phone,
            self.email.as_deref().unwrap_or("Not yet provided")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::validate::ValidationError;

    fn ann() -> Contact {
        Contact::create(1, ContactDraft::new("Ann", "1234567890")).unwrap()
    }

    #[test]
    fn creates_contact_without_email() {
        let contact = ann();
        assert_eq!(contact.id(), 1);
        assert_eq!(contact.name(), "Ann");
        assert_eq!(contact.email(), None);
    }

    #[test]
    fn create_trims_name_and_keeps_email() {
        let draft = ContactDraft::new("  Bob  ", "5551234567").with_email("bob@mail.com");
        let contact = Contact::create(2, draft).unwrap();
        assert_eq!(contact.name(), "Bob");
        assert_eq!(contact.email(), Some("bob@mail.com"));
    }

    #[test]
    fn create_rejects_first_invalid_field() {
        let err = Contact::create(1, ContactDraft::new("", "12")).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::Empty("Name"))
        ));

        let err = Contact::create(1, ContactDraft::new("Ann", "12")).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::WrongLength)
        ));

        let err = Contact::create(0, ContactDraft::new("Ann", "1234567890")).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::NotPositive)
        ));
    }

    #[test]
    fn create_rejects_id_past_storable_range() {
        let err = Contact::create(u64::MAX, ContactDraft::new("Ann", "1234567890")).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::NotPositive)
        ));
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let mut contact = ann();
        let patch = ContactPatch {
            email: Some("ann@mail.com".into()),
            ..Default::default()
        };
        contact.update(&patch).unwrap();
        assert_eq!(contact.name(), "Ann");
        assert_eq!(contact.phone(), "1234567890");
        assert_eq!(contact.email(), Some("ann@mail.com"));
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut contact = ann();
        let before = contact.clone();
        let patch = ContactPatch {
            name: Some("Annie".into()),
            phone: Some("not-a-phone".into()),
            email: None,
        };
        assert!(contact.update(&patch).is_err());
        assert_eq!(contact, before);
    }

    #[test]
    fn display_line_shows_missing_email() {
        assert_eq!(
            ann().to_string(),
            "ID: 1 | Name: Ann | Phone Number: 1234567890 | Email: Not yet provided"
        );
    }

    #[test]
    fn row_uses_stored_field_names() {
        let json = serde_json::to_value(ann().to_row()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contact_id": 1,
                "name": "Ann",
                "phone": "1234567890",
                "email": null
            })
        );
    }

    #[test]
    fn from_row_revalidates() {
        let row = ContactRow {
            contact_id: 3,
            name: "Cy".into(),
            phone: "12345".into(),
            email: None,
        };
        assert!(Contact::from_row(row).is_err());
    }
}
