//! Reader domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::reader::{CreateReader, Reader, UpdateReader},
};

impl Repository {
    /// List all readers
    pub async fn readers_list(&self) -> AppResult<Vec<Reader>> {
        let rows = sqlx::query_as::<_, Reader>(
            "SELECT reader_id, reader_name, reader_sex, reader_department FROM reader ORDER BY reader_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a reader. Fails with DuplicateKey if the id is taken.
    pub async fn readers_create(&self, data: &CreateReader) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reader WHERE reader_id = $1)")
                .bind(&data.reader_id)
                .fetch_one(&mut *tx)
                .await?;
        if exists {
            return Err(AppError::DuplicateKey(format!(
                "Reader with ID {} already exists",
                data.reader_id
            )));
        }

        sqlx::query(
            "INSERT INTO reader (reader_id, reader_name, reader_sex, reader_department) VALUES ($1, $2, $3, $4)",
        )
        .bind(&data.reader_id)
        .bind(&data.reader_name)
        .bind(&data.reader_sex)
        .bind(&data.reader_department)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Replace every mutable field of a reader
    pub async fn readers_update(&self, reader_id: &str, data: &UpdateReader) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE reader SET reader_name = $1, reader_sex = $2, reader_department = $3 WHERE reader_id = $4",
        )
        .bind(&data.reader_name)
        .bind(&data.reader_sex)
        .bind(&data.reader_department)
        .bind(reader_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reader {} not found", reader_id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a reader
    pub async fn readers_delete(&self, reader_id: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM reader WHERE reader_id = $1")
            .bind(reader_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reader {} not found", reader_id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
