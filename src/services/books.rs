//! Book catalog service

use crate::{
    config::MessagesConfig,
    error::{AppError, AppResult},
    models::{
        dto::{error_map, BookDto, FieldErrors},
        Book, Page, PageRequest,
    },
    repository::{Repository, TxRepository},
};

const CREATE_FAILED: &str = "Failed to the registration";
const UPDATE_FAILED: &str = "Failed to the update";
const DELETE_FAILED: &str = "Failed to the delete";

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
    messages: MessagesConfig,
}

impl BookService {
    pub fn new(repository: Repository, messages: MessagesConfig) -> Self {
        Self { repository, messages }
    }

    /// Get one book by its string-encoded id.
    /// Non-numeric ids are rejected without touching the database.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Book> {
        let id = parse_id(id).ok_or_else(|| AppError::BadRequest("failed to fetch data".to_string()))?;
        self.repository.books_get_by_id(id).await
    }

    /// Page through all books
    pub async fn find_all_books_by_page(&self, page: Option<&str>, size: Option<&str>) -> AppResult<Page> {
        self.search(None, PageRequest::parse(page, size)).await
    }

    /// Page through books whose title contains `title`
    pub async fn find_books_by_title(
        &self,
        title: &str,
        page: Option<&str>,
        size: Option<&str>,
    ) -> AppResult<Page> {
        self.search(Some(title), PageRequest::parse(page, size)).await
    }

    async fn search(&self, title: Option<&str>, request: PageRequest) -> AppResult<Page> {
        let (books, total) = self
            .repository
            .books_search(title, request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Book search failed"))?;
        Ok(Page::new(books, total, request))
    }

    /// Register a new book
    pub async fn create_book(&self, dto: &BookDto) -> Result<Book, FieldErrors> {
        if let Some(errors) = dto.validate_with(&self.messages) {
            return Err(errors);
        }

        let dto = dto.clone();
        self.repository
            .transaction(move |tx| Box::pin(async move { tx_create_book(tx, &dto).await }))
            .await
            .map_err(|e| failure(e, CREATE_FAILED))
    }

    /// Replace the title, ISBN, category and format of an existing book
    pub async fn update_book(&self, dto: &BookDto, id: &str) -> Result<Book, FieldErrors> {
        if let Some(errors) = dto.validate_with(&self.messages) {
            return Err(errors);
        }
        let id = parse_id(id).ok_or_else(|| error_map(UPDATE_FAILED))?;

        let dto = dto.clone();
        self.repository
            .transaction(move |tx| Box::pin(async move { tx_update_book(tx, &dto, id).await }))
            .await
            .map_err(|e| failure(e, UPDATE_FAILED))
    }

    /// Delete a book, returning it as it was before deletion
    pub async fn delete_book(&self, id: &str) -> Result<Book, FieldErrors> {
        let id = parse_id(id).ok_or_else(|| error_map(DELETE_FAILED))?;

        self.repository
            .transaction(move |tx| Box::pin(async move { tx_delete_book(tx, id).await }))
            .await
            .map_err(|e| failure(e, DELETE_FAILED))
    }
}

async fn tx_create_book(tx: &mut TxRepository, dto: &BookDto) -> AppResult<Book> {
    let category = tx.categories_get_by_id(dto.category_id).await?;
    let format = tx.formats_get_by_id(dto.format_id).await?;

    let book = dto.create();
    let id = tx.books_create(&book).await?;
    Ok(Book::from_new(id, book, category, format))
}

async fn tx_update_book(tx: &mut TxRepository, dto: &BookDto, id: i64) -> AppResult<Book> {
    let mut book = tx.books_get_by_id(id).await?;

    book.title = dto.title.clone();
    book.isbn = dto.isbn.clone();
    book.category_id = dto.category_id;
    book.format_id = dto.format_id;

    book.category = tx.categories_get_by_id(dto.category_id).await?;
    book.format = tx.formats_get_by_id(dto.format_id).await?;

    tx.books_update(&book).await?;
    Ok(book)
}

async fn tx_delete_book(tx: &mut TxRepository, id: i64) -> AppResult<Book> {
    let book = tx.books_get_by_id(id).await?;
    tx.books_delete(book.id).await?;
    Ok(book)
}

fn failure(error: AppError, message: &str) -> FieldErrors {
    tracing::error!(error = %error, "{}", message);
    error_map(message)
}

fn parse_id(id: &str) -> Option<i64> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}
