use crate::error::{Field, ValidationError};
use crate::rowstore::FieldRow;
use crate::rules::{check_birth_date, check_email, check_name, check_phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated input for a [`Contact`], as typed into a form or read from an
/// external row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
}

/// A validated contact record.
///
/// Every constructed value satisfies all six field rules; construction and
/// every setter are all-or-nothing. Stored values are the caller's original
/// strings (validation normalizes a copy, it does not rewrite the field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    first_name: String,
    middle_name: String,
    last_name: String,
    birth_date: String,
    email: String,
    phone: String,
}

impl Contact {
    /// Validates in fixed order: first, middle, last name, birth date,
    /// email, phone. Fails fast with the first offending field.
    pub fn new(draft: ContactDraft, today: NaiveDate) -> Result<Self, ValidationError> {
        check_name(&draft.first_name)
            .map_err(|reason| ValidationError::new(Field::FirstName, reason))?;
        check_name(&draft.middle_name)
            .map_err(|reason| ValidationError::new(Field::MiddleName, reason))?;
        check_name(&draft.last_name)
            .map_err(|reason| ValidationError::new(Field::LastName, reason))?;
        check_birth_date(&draft.birth_date, today)
            .map_err(|reason| ValidationError::new(Field::BirthDate, reason))?;
        check_email(&draft.email).map_err(|reason| ValidationError::new(Field::Email, reason))?;
        check_phone(&draft.phone).map_err(|reason| ValidationError::new(Field::Phone, reason))?;

        Ok(Self {
            first_name: draft.first_name,
            middle_name: draft.middle_name,
            last_name: draft.last_name,
            birth_date: draft.birth_date,
            email: draft.email,
            phone: draft.phone,
        })
    }

    /// Fixed "no contact" values for initializing an empty form.
    ///
    /// The fields deliberately do not pass validation; never add this value
    /// to a real collection.
    pub fn placeholder() -> Self {
        Self {
            first_name: "NoFirstName".to_string(),
            middle_name: "NoMiddleName".to_string(),
            last_name: "NoLastName".to_string(),
            birth_date: "00-00-0000".to_string(),
            email: "noname@nomail.com".to_string(),
            phone: "+0000000000".to_string(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_name(&value).map_err(|reason| ValidationError::new(Field::FirstName, reason))?;
        self.first_name = value;
        Ok(())
    }

    pub fn set_middle_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_name(&value).map_err(|reason| ValidationError::new(Field::MiddleName, reason))?;
        self.middle_name = value;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_name(&value).map_err(|reason| ValidationError::new(Field::LastName, reason))?;
        self.last_name = value;
        Ok(())
    }

    pub fn set_birth_date(
        &mut self,
        value: impl Into<String>,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        check_birth_date(&value, today)
            .map_err(|reason| ValidationError::new(Field::BirthDate, reason))?;
        self.birth_date = value;
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_email(&value).map_err(|reason| ValidationError::new(Field::Email, reason))?;
        self.email = value;
        Ok(())
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_phone(&value).map_err(|reason| ValidationError::new(Field::Phone, reason))?;
        self.phone = value;
        Ok(())
    }

    /// The six field values in canonical order: first, middle, last name,
    /// birth date, email, phone. Used by all serialization.
    pub fn to_row(&self) -> FieldRow {
        [
            self.first_name.clone(),
            self.middle_name.clone(),
            self.last_name.clone(),
            self.birth_date.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }

    /// Owned, editable copy of the six fields.
    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl fmt::Display for Contact {
    /// One-line summary for display. Never parsed back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}, born {}, {}, {}",
            self.last_name, self.first_name, self.middle_name, self.birth_date, self.phone,
            self.email
        )
    }
}
