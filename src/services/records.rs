//! Borrow record service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::record::{CreateRecord, Record, RecordKey, UpdateRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct RecordsService {
    repository: Repository,
}

fn complete_key(book_id: &str, reader_id: &str) -> AppResult<RecordKey> {
    let key = RecordKey::new(book_id, reader_id);
    if !key.is_complete() {
        return Err(AppError::Validation("Missing book_id or reader_id".to_string()));
    }
    Ok(key)
}

impl RecordsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Record>> {
        self.repository.records_list().await
    }

    pub async fn create(&self, mut data: CreateRecord) -> AppResult<RecordKey> {
        data.normalize();
        data.validate()?;
        self.repository.records_create(&data).await?;
        let key = data.key();
        tracing::info!("Record created for {}", key);
        Ok(key)
    }

    pub async fn update(&self, book_id: &str, reader_id: &str, data: &UpdateRecord) -> AppResult<()> {
        let key = complete_key(book_id, reader_id)?;
        data.validate()?;
        self.repository.records_update(&key, data).await?;
        tracing::info!("Record updated for {}", key);
        Ok(())
    }

    pub async fn delete(&self, book_id: &str, reader_id: &str) -> AppResult<()> {
        let key = complete_key(book_id, reader_id)?;
        self.repository.records_delete(&key).await?;
        tracing::info!("Record deleted for {}", key);
        Ok(())
    }
}
