use serde::{Deserialize, Serialize};

/// Identifier assigned to a book by the client that created it.
pub type BookId = i64;

/// A book record as stored in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Client-assigned identifier; not guaranteed unique
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publishing house
    pub publisher: String,
    /// Free-form publication date, stored verbatim
    pub published_date: String,
    /// Number of pages
    pub page_count: i64,
    /// Language the book is written in
    pub language: String,
}

/// Request model for updating an existing book.
///
/// `author` is part of the payload but is not written back by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub page_count: i64,
    pub language: String,
}

impl Book {
    /// Overwrite the fields an update is allowed to change.
    pub(crate) fn apply(&mut self, update: BookUpdate) {
        self.title = update.title;
        self.publisher = update.publisher;
        self.page_count = update.page_count;
        self.language = update.language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_uses_snake_case_wire_names() {
        let book: Book = serde_json::from_value(json!({
            "id": 7,
            "title": "Programming Rust",
            "author": "Jim Blandy",
            "publisher": "O'Reilly Media",
            "published_date": "2021-07-06",
            "page_count": 738,
            "language": "English"
        }))
        .unwrap();

        assert_eq!(book.id, 7);
        assert_eq!(book.published_date, "2021-07-06");
        assert_eq!(book.page_count, 738);
    }

    #[test]
    fn book_requires_every_field() {
        let missing_language = json!({
            "id": 7,
            "title": "Programming Rust",
            "author": "Jim Blandy",
            "publisher": "O'Reilly Media",
            "published_date": "2021-07-06",
            "page_count": 738
        });
        assert!(serde_json::from_value::<Book>(missing_language).is_err());
    }

    #[test]
    fn update_payload_has_no_id_or_date() {
        let update: BookUpdate = serde_json::from_value(json!({
            "title": "Think Python 2nd Ed",
            "author": "Someone Else",
            "publisher": "O'Reilly",
            "page_count": 600,
            "language": "English",
            "id": 99
        }))
        .unwrap();

        let value = serde_json::to_value(&update).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("published_date").is_none());
    }

    #[test]
    fn apply_leaves_author_id_and_date_untouched() {
        let mut book = Book {
            id: 1,
            title: "Think Python".to_string(),
            author: "Allen B. Downey".to_string(),
            publisher: "o'Reilly Media".to_string(),
            published_date: "2021-01-01".to_string(),
            page_count: 1234,
            language: "English".to_string(),
        };

        book.apply(BookUpdate {
            title: "Think Python 2nd Ed".to_string(),
            author: "Someone Else".to_string(),
            publisher: "O'Reilly".to_string(),
            page_count: 600,
            language: "French".to_string(),
        });

        assert_eq!(book.id, 1);
        assert_eq!(book.author, "Allen B. Downey");
        assert_eq!(book.published_date, "2021-01-01");
        assert_eq!(book.title, "Think Python 2nd Ed");
        assert_eq!(book.publisher, "O'Reilly");
        assert_eq!(book.page_count, 600);
        assert_eq!(book.language, "French");
    }
}
