//! Borrow record model, keyed by (book_id, reader_id)

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::normalize_key;

/// Borrow record row. A missing `return_date` means the loan is still open.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Record {
    pub book_id: String,
    pub reader_id: String,
    pub borrow_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Composite key of a borrow record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub book_id: String,
    pub reader_id: String,
}

impl RecordKey {
    pub fn new(book_id: &str, reader_id: &str) -> Self {
        Self {
            book_id: normalize_key(book_id),
            reader_id: normalize_key(reader_id),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.book_id.is_empty() && !self.reader_id.is_empty()
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book {} / reader {}", self.book_id, self.reader_id)
    }
}

/// Create record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateRecord {
    #[validate(length(min = 1, max = 32, message = "book_id must be 1 to 32 characters"))]
    pub book_id: String,
    #[validate(length(min = 1, max = 32, message = "reader_id must be 1 to 32 characters"))]
    pub reader_id: String,
    pub borrow_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CreateRecord {
    pub fn normalize(&mut self) {
        self.book_id = normalize_key(&self.book_id);
        self.reader_id = normalize_key(&self.reader_id);
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.book_id, &self.reader_id)
    }
}

/// Partial update of a record.
///
/// Only these three columns are updatable. For each one: absent leaves the
/// column alone, `null` clears it, a value replaces it.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateRecord {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub borrow_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub return_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

impl UpdateRecord {
    pub fn is_empty(&self) -> bool {
        self.borrow_date.is_none() && self.return_date.is_none() && self.notes.is_none()
    }
}

fn check_dates(borrow: Option<NaiveDate>, ret: Option<NaiveDate>) -> Result<(), ValidationError> {
    match (borrow, ret) {
        (Some(borrow), Some(ret)) if ret < borrow => {
            let mut err = ValidationError::new("return_before_borrow");
            err.message = Some(Cow::from("return_date cannot precede borrow_date"));
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_create_dates(record: &CreateRecord) -> Result<(), ValidationError> {
    check_dates(record.borrow_date, record.return_date)
}

fn validate_update_dates(record: &UpdateRecord) -> Result<(), ValidationError> {
    check_dates(record.borrow_date.flatten(), record.return_date.flatten())
}
