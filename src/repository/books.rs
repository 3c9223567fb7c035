//! Book domain methods on Repository

use sqlx::{Any, AnyConnection, Executor};

use super::{Dialect, Repository, TxRepository};
use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookRow, NewBook},
        PageRequest,
    },
};

const BOOK_SELECT: &str = r#"
    SELECT b.id, b.title, b.isbn,
           b.category_id, c.name AS category_name,
           b.format_id, f.name AS format_name
    FROM book b
    INNER JOIN category_master c ON c.id = b.category_id
    INNER JOIN format_master f ON f.id = b.format_id
"#;

async fn fetch_by_id<'c, E>(executor: E, dialect: Dialect, id: i64) -> AppResult<Book>
where
    E: Executor<'c, Database = Any>,
{
    let query = dialect.sql(&format!("{} WHERE b.id = ?", BOOK_SELECT));
    sqlx::query_as::<_, BookRow>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .map(Book::from)
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
}

impl Repository {
    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        fetch_by_id(&self.pool, self.dialect, id).await
    }

    /// Search books by title substring with pagination, ordered by id.
    /// Returns the page content and the total number of matches.
    pub async fn books_search(&self, title: Option<&str>, page: PageRequest) -> AppResult<(Vec<Book>, i64)> {
        let pattern = title.filter(|t| !t.is_empty()).map(contains_pattern);
        let condition = if pattern.is_some() {
            "WHERE b.title LIKE ? ESCAPE '!'"
        } else {
            ""
        };

        let count_query = self
            .dialect
            .sql(&format!("SELECT COUNT(*) FROM book b {}", condition));
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref pattern) = pattern {
            count = count.bind(pattern);
        }
        let total = count.fetch_one(&self.pool).await?;

        let list_query = self.dialect.sql(&format!(
            "{} {} ORDER BY b.id LIMIT ? OFFSET ?",
            BOOK_SELECT, condition
        ));
        let mut list = sqlx::query_as::<_, BookRow>(&list_query);
        if let Some(ref pattern) = pattern {
            list = list.bind(pattern);
        }
        let rows = list
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Book::from).collect(), total))
    }

    /// Count all books
    pub async fn books_count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

impl TxRepository {
    /// Get book by ID inside the transaction
    pub async fn books_get_by_id(&mut self, id: i64) -> AppResult<Book> {
        let dialect = self.dialect;
        fetch_by_id(self.conn(), dialect, id).await
    }

    /// Insert a book and return its generated id
    pub async fn books_create(&mut self, book: &NewBook) -> AppResult<i64> {
        let dialect = self.dialect;
        let insert = "INSERT INTO book (title, isbn, category_id, format_id) VALUES (?, ?, ?, ?)";
        insert_returning_id(self.conn(), dialect, insert, book).await
    }

    /// Overwrite every column of an existing book
    pub async fn books_update(&mut self, book: &Book) -> AppResult<()> {
        let query = self.dialect.sql(
            "UPDATE book SET title = ?, isbn = ?, category_id = ?, format_id = ? WHERE id = ?",
        );
        sqlx::query(&query)
            .bind(&book.title)
            .bind(&book.isbn)
            .bind(book.category_id)
            .bind(book.format_id)
            .bind(book.id)
            .execute(self.conn())
            .await?;
        Ok(())
    }

    /// Delete a book
    pub async fn books_delete(&mut self, id: i64) -> AppResult<()> {
        let query = self.dialect.sql("DELETE FROM book WHERE id = ?");
        let result = sqlx::query(&query).bind(id).execute(self.conn()).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}

/// LIKE pattern matching `text` as a literal substring, escaped with `!`
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '!' | '%' | '_') {
            pattern.push('!');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

async fn insert_returning_id(
    conn: &mut AnyConnection,
    dialect: Dialect,
    insert: &str,
    book: &NewBook,
) -> AppResult<i64> {
    if dialect.supports_returning() {
        let query = dialect.sql(&format!("{} RETURNING id", insert));
        let id = sqlx::query_scalar::<_, i64>(&query)
            .bind(&book.title)
            .bind(&book.isbn)
            .bind(book.category_id)
            .bind(book.format_id)
            .fetch_one(conn)
            .await?;
        return Ok(id);
    }

    let query = dialect.sql(insert);
    let result = sqlx::query(&query)
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.category_id)
        .bind(book.format_id)
        .execute(conn)
        .await?;
    result
        .last_insert_id()
        .ok_or_else(|| AppError::Internal("Database did not report the inserted id".to_string()))
}
