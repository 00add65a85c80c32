//! Business logic services

pub mod books;
pub mod readers;
pub mod records;

use crate::{
    error::{AppError, AppResult},
    models::normalize_key,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub books: books::BooksService,
    pub readers: readers::ReadersService,
    pub records: records::RecordsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            readers: readers::ReadersService::new(repository.clone()),
            records: records::RecordsService::new(repository.clone()),
            repository,
        }
    }
}

/// Path keys are trimmed; a blank key can never match a row
pub(crate) fn path_key(raw: &str, what: &str) -> AppResult<String> {
    let key = normalize_key(raw);
    if key.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(key)
}
