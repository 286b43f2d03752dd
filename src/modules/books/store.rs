//! In-memory book catalogue.
//!
//! Records are kept in insertion order. Ids are client-assigned and may
//! repeat; every id-based operation acts on the first match.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use super::models::{Book, BookId, BookUpdate};

/// Errors raised by catalogue lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Book not found")]
    NotFound(BookId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, lock-guarded collection of book records.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `books` in the given order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Create a store holding the built-in catalogue.
    pub fn seeded() -> Self {
        Self::with_books(seed_catalog())
    }

    // A panic mid-operation cannot leave the Vec half-mutated, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.read().clone()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Append `book` as the last record. Duplicate ids are accepted.
    pub fn create(&self, book: Book) -> Book {
        let mut books = self.write();
        books.push(book.clone());
        tracing::debug!(book_id = book.id, total = books.len(), "book appended");
        book
    }

    /// First record whose id equals `id`.
    pub fn get(&self, id: BookId) -> StoreResult<Book> {
        self.read()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Apply `update` to the first record whose id equals `id`.
    ///
    /// Only `title`, `publisher`, `page_count` and `language` are written;
    /// the payload's `author` is ignored.
    pub fn update(&self, id: BookId, update: BookUpdate) -> StoreResult<Book> {
        let mut books = self.write();
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        book.apply(update);
        tracing::debug!(book_id = id, "book updated");
        Ok(book.clone())
    }

    /// Remove the first record whose id equals `id`, keeping the order of the rest.
    pub fn delete(&self, id: BookId) -> StoreResult<()> {
        let mut books = self.write();
        let position = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        books.remove(position);
        tracing::debug!(book_id = id, total = books.len(), "book removed");
        Ok(())
    }
}

fn book(
    id: BookId,
    title: &str,
    author: &str,
    publisher: &str,
    published_date: &str,
    page_count: i64,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        publisher: publisher.to_string(),
        published_date: published_date.to_string(),
        page_count,
        language: "English".to_string(),
    }
}

/// The six records every seeded catalogue starts with.
pub fn seed_catalog() -> Vec<Book> {
    vec![
        book(1, "Think Python", "Allen B. Downey", "o'Reilly Media", "2021-01-01", 1234),
        book(2, "Django By Example", "Antonio Mele", "Packt Publishing Ltd", "2022-01-19", 1023),
        book(3, "The web socket handbook", "Alex Diaconu", "Xinyu Wang", "2021-01-01", 3677),
        book(4, "Head first Javascript", "Hellen Smith", "Oreilly Media", "2021-01-01", 540),
        book(
            5,
            "Algorithm and Data Structures In Python",
            "Kent Lee",
            "Springer, Inc",
            "2026-01-01",
            9282,
        ),
        // Date is stored as given; it is not a valid calendar date.
        book(6, "Head first HTML5 Programming", "Eric T Freeman", "O'Reilly Media", "2011-21-01", 3006),
    ]
}
