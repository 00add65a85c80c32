//! Reader management service

use validator::Validate;

use super::path_key;
use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader, UpdateReader},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        self.repository.readers_list().await
    }

    pub async fn create(&self, mut data: CreateReader) -> AppResult<String> {
        data.normalize();
        data.validate()?;
        self.repository.readers_create(&data).await?;
        tracing::info!("Reader created with ID: {}", data.reader_id);
        Ok(data.reader_id)
    }

    pub async fn update(&self, reader_id: &str, data: &UpdateReader) -> AppResult<()> {
        let reader_id = path_key(reader_id, "reader_id")?;
        data.validate()?;
        self.repository.readers_update(&reader_id, data).await?;
        tracing::info!("Reader updated with ID: {}", reader_id);
        Ok(())
    }

    pub async fn delete(&self, reader_id: &str) -> AppResult<()> {
        let reader_id = path_key(reader_id, "reader_id")?;
        self.repository.readers_delete(&reader_id).await?;
        tracing::info!("Reader deleted with ID: {}", reader_id);
        Ok(())
    }
}
