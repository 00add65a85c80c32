//! Book domain methods on Repository

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, CreateBook, UpdateBook},
};

const BOOK_COLUMNS: &str =
    "book_id, book_name, book_isbn, book_author, book_publisher, interview_times, book_price";

impl Repository {
    /// List all books
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM book ORDER BY book_id",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        tracing::debug!("Found {} books", rows.len());
        Ok(rows)
    }

    /// Search books by keyword scope and price range
    pub async fn books_search(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM book WHERE 1=1", BOOK_COLUMNS));
        filter.push_conditions(&mut builder);
        builder.push(" ORDER BY book_id");

        tracing::debug!("Executing book search: {}", builder.sql());

        let rows = builder
            .build_query_as::<Book>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a book. Fails with DuplicateKey if the id is taken.
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM book WHERE book_id = $1)")
            .bind(&data.book_id)
            .fetch_one(&mut *tx)
            .await?;
        if exists {
            return Err(AppError::DuplicateKey(format!(
                "Book id '{}' already exists, please use another id",
                data.book_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO book (book_id, book_name, book_isbn, book_author, book_publisher, interview_times, book_price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&data.book_id)
        .bind(&data.book_name)
        .bind(&data.book_isbn)
        .bind(&data.book_author)
        .bind(&data.book_publisher)
        .bind(data.interview_times.unwrap_or(0))
        .bind(data.book_price)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Replace every mutable field of a book
    pub async fn books_update(&self, book_id: &str, data: &UpdateBook) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE book
            SET book_name = $1, book_isbn = $2, book_author = $3, book_publisher = $4,
                interview_times = $5, book_price = $6
            WHERE book_id = $7
            "#,
        )
        .bind(&data.book_name)
        .bind(&data.book_isbn)
        .bind(&data.book_author)
        .bind(&data.book_publisher)
        .bind(data.interview_times.unwrap_or(0))
        .bind(data.book_price.unwrap_or(Decimal::ZERO))
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a book
    pub async fn books_delete(&self, book_id: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM book WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
