//! Book model and search types

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Postgres, QueryBuilder};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::{like_pattern, normalize_key};

/// Book row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: String,
    pub book_name: String,
    pub book_isbn: String,
    pub book_author: String,
    pub book_publisher: String,
    /// Number of times the book has been consulted
    pub interview_times: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub book_price: Decimal,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_price"))]
pub struct CreateBook {
    #[validate(length(min = 1, max = 32, message = "book_id must be 1 to 32 characters"))]
    pub book_id: String,
    #[validate(length(max = 255, message = "book_name must be at most 255 characters"))]
    pub book_name: String,
    #[validate(length(max = 32, message = "book_isbn must be at most 32 characters"))]
    pub book_isbn: String,
    #[validate(length(max = 255, message = "book_author must be at most 255 characters"))]
    pub book_author: String,
    #[validate(length(max = 255, message = "book_publisher must be at most 255 characters"))]
    pub book_publisher: String,
    #[validate(range(min = 0, message = "interview_times cannot be negative"))]
    pub interview_times: Option<i32>,
    #[serde(with = "rust_decimal::serde::float")]
    pub book_price: Decimal,
}

/// Update book request (full replace; absent counters reset to zero)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_update_price"))]
pub struct UpdateBook {
    #[validate(length(max = 255, message = "book_name must be at most 255 characters"))]
    pub book_name: String,
    #[validate(length(max = 32, message = "book_isbn must be at most 32 characters"))]
    pub book_isbn: String,
    #[validate(length(max = 255, message = "book_author must be at most 255 characters"))]
    pub book_author: String,
    #[validate(length(max = 255, message = "book_publisher must be at most 255 characters"))]
    pub book_publisher: String,
    #[validate(range(min = 0, message = "interview_times cannot be negative"))]
    pub interview_times: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub book_price: Option<Decimal>,
}

impl CreateBook {
    pub fn normalize(&mut self) {
        self.book_id = normalize_key(&self.book_id);
    }
}

/// Largest price NUMERIC(10, 2) can hold is 99_999_999.99
const PRICE_LIMIT: i64 = 100_000_000;

/// Prices are stored with two decimals; anything finer would be rounded
fn check_price(price: Decimal) -> Result<(), ValidationError> {
    let (code, message) = if price.is_sign_negative() && !price.is_zero() {
        ("negative_price", "book_price cannot be negative")
    } else if price >= Decimal::from(PRICE_LIMIT) {
        ("price_too_large", "book_price must be below 100000000")
    } else if price.normalize().scale() > 2 {
        ("price_precision", "book_price allows at most two decimal places")
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    Err(err)
}

fn validate_create_price(book: &CreateBook) -> Result<(), ValidationError> {
    check_price(book.book_price)
}

fn validate_update_price(book: &UpdateBook) -> Result<(), ValidationError> {
    book.book_price.map_or(Ok(()), check_price)
}

/// Raw search parameters, echoed back verbatim in the response
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookSearchQuery {
    /// Substring to look for
    pub keyword: Option<String>,
    /// title (or name), author, publisher, isbn, all
    pub search_by: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// Which column(s) the keyword is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Title,
    Author,
    Publisher,
    Isbn,
    All,
}

impl SearchScope {
    /// Unknown selectors fall back to searching every text column
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" | "name" => SearchScope::Title,
            "author" => SearchScope::Author,
            "publisher" => SearchScope::Publisher,
            "isbn" => SearchScope::Isbn,
            _ => SearchScope::All,
        }
    }

    fn column(self) -> Option<&'static str> {
        match self {
            SearchScope::Title => Some("book_name"),
            SearchScope::Author => Some("book_author"),
            SearchScope::Publisher => Some("book_publisher"),
            SearchScope::Isbn => Some("book_isbn"),
            SearchScope::All => None,
        }
    }
}

/// Parsed, typed search filter
#[derive(Debug, Clone, PartialEq)]
pub struct BookFilter {
    pub keyword: Option<String>,
    pub scope: SearchScope,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Price bounds that do not parse as a finite number are ignored. Bounds
/// beyond the range of `Decimal` are clamped so they still filter.
fn parse_price(raw: Option<&str>) -> Option<Decimal> {
    let value: f64 = raw?.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(Decimal::try_from(value).unwrap_or(if value.abs() < 1.0 {
        Decimal::ZERO
    } else if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    }))
}

impl BookFilter {
    pub fn from_query(query: &BookSearchQuery) -> Self {
        let keyword = query
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Self {
            keyword,
            scope: SearchScope::parse(query.search_by.as_deref().unwrap_or("all")),
            min_price: parse_price(query.min_price.as_deref()),
            max_price: parse_price(query.max_price.as_deref()),
        }
    }

    /// Append the WHERE conditions for this filter to a query that already
    /// contains `WHERE 1=1`
    pub fn push_conditions(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if let Some(ref keyword) = self.keyword {
            let pattern = like_pattern(keyword);
            match self.scope.column() {
                Some(column) => {
                    builder.push(format!(" AND {} LIKE ", column)).push_bind(pattern);
                }
                None => {
                    builder.push(" AND (book_name LIKE ").push_bind(pattern.clone());
                    builder.push(" OR book_author LIKE ").push_bind(pattern.clone());
                    builder.push(" OR book_isbn LIKE ").push_bind(pattern.clone());
                    builder.push(" OR book_publisher LIKE ").push_bind(pattern);
                    builder.push(")");
                }
            }
        }

        if let Some(min) = self.min_price {
            builder.push(" AND book_price >= ").push_bind(min);
        }

        if let Some(max) = self.max_price {
            builder.push(" AND book_price <= ").push_bind(max);
        }
    }
}

/// Search response: results plus the parameters as received
#[derive(Debug, Serialize, ToSchema)]
pub struct BookSearchResponse {
    pub data: Vec<Book>,
    pub total: usize,
    pub keyword: String,
    pub search_by: String,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}
