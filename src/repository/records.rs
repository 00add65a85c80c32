//! Borrow record domain methods on Repository

use sqlx::{Postgres, QueryBuilder};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::record::{CreateRecord, Record, RecordKey, UpdateRecord},
};

/// Build the UPDATE statement for the columns present in `data`.
/// Returns `None` when nothing would be updated.
fn update_statement<'a>(key: &'a RecordKey, data: &'a UpdateRecord) -> Option<QueryBuilder<'a, Postgres>> {
    if data.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::<Postgres>::new("UPDATE record SET ");
    let mut sets = builder.separated(", ");

    if let Some(borrow_date) = data.borrow_date {
        sets.push("borrow_date = ").push_bind_unseparated(borrow_date);
    }
    if let Some(return_date) = data.return_date {
        sets.push("return_date = ").push_bind_unseparated(return_date);
    }
    if let Some(ref notes) = data.notes {
        sets.push("notes = ").push_bind_unseparated(notes.as_deref());
    }

    builder
        .push(" WHERE book_id = ")
        .push_bind(key.book_id.as_str())
        .push(" AND reader_id = ")
        .push_bind(key.reader_id.as_str());

    Some(builder)
}

impl Repository {
    /// List all borrow records
    pub async fn records_list(&self) -> AppResult<Vec<Record>> {
        let rows = sqlx::query_as::<_, Record>(
            "SELECT book_id, reader_id, borrow_date, return_date, notes FROM record ORDER BY book_id, reader_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a record. Fails with DuplicateKey if the (book, reader) pair exists.
    pub async fn records_create(&self, data: &CreateRecord) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM record WHERE book_id = $1 AND reader_id = $2)",
        )
        .bind(&data.book_id)
        .bind(&data.reader_id)
        .fetch_one(&mut *tx)
        .await?;
        if exists {
            return Err(AppError::DuplicateKey(format!(
                "Record with Book ID {} and Reader ID {} already exists",
                data.book_id, data.reader_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO record (book_id, reader_id, borrow_date, return_date, notes)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&data.book_id)
        .bind(&data.reader_id)
        .bind(data.borrow_date)
        .bind(data.return_date)
        .bind(&data.notes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Apply a partial update to the allow-listed columns of a record
    pub async fn records_update(&self, key: &RecordKey, data: &UpdateRecord) -> AppResult<()> {
        let mut builder = update_statement(key, data)
            .ok_or_else(|| AppError::Validation("No updatable fields supplied".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let result = builder.build().execute(&mut *tx).await?;
        tracing::debug!("Record update affected {} rows", result.rows_affected());

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Record {} not found", key)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a record by its composite key
    pub async fn records_delete(&self, key: &RecordKey) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM record WHERE book_id = $1 AND reader_id = $2")
            .bind(&key.book_id)
            .bind(&key.reader_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Record {} not found", key)));
        }

        tx.commit().await?;
        Ok(())
    }
}
