//! Book catalog service

use validator::Validate;

use super::path_key;
use crate::{
    error::AppResult,
    models::book::{Book, BookFilter, BookSearchQuery, BookSearchResponse, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    /// Search books; price bounds that do not parse are dropped, not rejected
    pub async fn search(&self, query: &BookSearchQuery) -> AppResult<BookSearchResponse> {
        let filter = BookFilter::from_query(query);
        let data = self.repository.books_search(&filter).await?;

        Ok(BookSearchResponse {
            total: data.len(),
            data,
            keyword: filter.keyword.unwrap_or_default(),
            search_by: query.search_by.clone().unwrap_or_else(|| "all".to_string()),
            min_price: query.min_price.clone(),
            max_price: query.max_price.clone(),
        })
    }

    pub async fn create(&self, mut data: CreateBook) -> AppResult<CreateBook> {
        data.normalize();
        data.validate()?;
        self.repository.books_create(&data).await?;
        tracing::info!("Book created with ID: {}", data.book_id);
        Ok(data)
    }

    pub async fn update(&self, book_id: &str, data: &UpdateBook) -> AppResult<()> {
        let book_id = path_key(book_id, "book_id")?;
        data.validate()?;
        self.repository.books_update(&book_id, data).await?;
        tracing::info!("Book updated with ID: {}", book_id);
        Ok(())
    }

    pub async fn delete(&self, book_id: &str) -> AppResult<()> {
        let book_id = path_key(book_id, "book_id")?;
        self.repository.books_delete(&book_id).await?;
        tracing::info!("Book deleted with ID: {}", book_id);
        Ok(())
    }
}
