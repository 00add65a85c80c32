//! Reader (patron) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::normalize_key;

/// Reader row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reader {
    pub reader_id: String,
    pub reader_name: String,
    pub reader_sex: String,
    pub reader_department: String,
}

/// Create reader request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReader {
    #[validate(length(min = 1, max = 32, message = "reader_id must be 1 to 32 characters"))]
    pub reader_id: String,
    #[validate(length(max = 255, message = "reader_name must be at most 255 characters"))]
    pub reader_name: String,
    #[validate(length(max = 16, message = "reader_sex must be at most 16 characters"))]
    pub reader_sex: String,
    #[validate(length(max = 255, message = "reader_department must be at most 255 characters"))]
    pub reader_department: String,
}

/// Update reader request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReader {
    #[validate(length(max = 255, message = "reader_name must be at most 255 characters"))]
    pub reader_name: String,
    #[validate(length(max = 16, message = "reader_sex must be at most 16 characters"))]
    pub reader_sex: String,
    #[validate(length(max = 255, message = "reader_department must be at most 255 characters"))]
    pub reader_department: String,
}

impl CreateReader {
    pub fn normalize(&mut self) {
        self.reader_id = normalize_key(&self.reader_id);
    }
}
