pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;

// BookRepository is the source of truth for catalog state. Its operations never fail,
// classifying an absent book as an error is left to the catalog service.
pub(crate) trait BookRepository: Sync + Send {
    // inserts or overwrites the book stored under its isbn
    fn add(&self, book: BookEntity);

    // deletes the book if present; returns false when there was nothing to delete
    fn remove(&self, isbn: &str) -> bool;

    fn find(&self, isbn: &str) -> Option<BookEntity>;

    // books whose author matches ignoring case, in no particular order
    fn find_by_author(&self, author: &str) -> Vec<BookEntity>;

    // atomically applies delta to the available copies of the book; returns false and leaves
    // the book untouched when it is absent or the count would drop below zero
    fn adjust_copies(&self, isbn: &str, delta: i32) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
