use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::cache::CatalogCache;
use crate::catalog::domain::{CatalogService, CatalogStats};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    cache: CatalogCache,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            cache: CatalogCache::new(config),
        }
    }

    // author entries hold book snapshots, so a copy count change invalidates them too
    fn evict_copies(&self, isbn: &str) {
        self.cache.evict_book(isbn);
        self.cache.evict_authors();
    }
}

// Writes hit the repository first and evict afterwards, so an evicted entry can only be
// refilled from the post-write state.
#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.add(BookEntity::from(book));
        self.cache.evict_book(book.isbn.as_str());
        self.cache.evict_authors();
        info!(branch = %self.branch_id, book = %book, "book added");
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        if !self.book_repository.remove(isbn) {
            return Err(LibraryError::book_not_found(isbn));
        }
        self.cache.evict_book(isbn);
        self.cache.evict_authors();
        info!(branch = %self.branch_id, isbn = %isbn, "book removed");
        Ok(())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        debug!(isbn = %isbn, "fetching book");
        self.cache.get_book(isbn, || self.book_repository.find(isbn).map(|b| BookDto::from(&b)))
            .ok_or_else(|| LibraryError::book_not_found(isbn))
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.cache.get_books_by_author(author, || {
            self.book_repository.find_by_author(author).iter().map(BookDto::from).collect()
        });
        if books.is_empty() {
            return Err(LibraryError::author_not_found(author));
        }
        Ok(books)
    }

    async fn borrow_book(&self, isbn: &str) -> LibraryResult<bool> {
        if !self.book_repository.adjust_copies(isbn, -1) {
            // the decrement was refused, tell a missing book from an exhausted one. A concurrent
            // add may land in between and make this InsufficientCopies for a restocked book.
            return match self.book_repository.find(isbn) {
                Some(_) => Err(LibraryError::no_copies(isbn)),
                None => Err(LibraryError::book_not_found(isbn)),
            };
        }
        self.evict_copies(isbn);
        info!(branch = %self.branch_id, isbn = %isbn, "book borrowed");
        Ok(true)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<bool> {
        if !self.book_repository.adjust_copies(isbn, 1) {
            // only a missing book or a saturated counter refuses an increment
            return match self.book_repository.find(isbn) {
                Some(_) => Err(LibraryError::validation(
                    format!("Copy count limit reached for book with ISBN {}", isbn).as_str(), None)),
                None => Err(LibraryError::book_not_found(isbn)),
            };
        }
        self.evict_copies(isbn);
        info!(branch = %self.branch_id, isbn = %isbn, "book returned");
        Ok(true)
    }

    async fn stats(&self) -> CatalogStats {
        CatalogStats {
            books: self.book_repository.len(),
            cache: self.cache.stats(),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
            available_copies: other.available_copies,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.isbn.as_str(), other.title.as_str(), other.author.as_str(),
                        other.publication_year, other.available_copies)
    }
}
