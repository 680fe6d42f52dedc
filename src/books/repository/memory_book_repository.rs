use dashmap::DashMap;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;

// MemoryBookRepository keeps the catalog in a sharded concurrent map. Writers on different
// isbns proceed independently, writers on the same isbn serialize on the entry's shard lock.
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    books: DashMap<String, BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }
}

impl BookRepository for MemoryBookRepository {
    fn add(&self, book: BookEntity) {
        self.books.insert(book.id(), book);
    }

    fn remove(&self, isbn: &str) -> bool {
        self.books.remove(isbn).is_some()
    }

    fn find(&self, isbn: &str) -> Option<BookEntity> {
        self.books.get(isbn).map(|book| book.value().clone())
    }

    fn find_by_author(&self, author: &str) -> Vec<BookEntity> {
        self.books.iter()
            .filter(|book| book.value().is_written_by(author))
            .map(|book| book.value().clone())
            .collect()
    }

    fn adjust_copies(&self, isbn: &str, delta: i32) -> bool {
        // the write guard is held across the read-modify-write
        let Some(mut book) = self.books.get_mut(isbn) else {
            return false;
        };
        match book.adjusted_copies(delta) {
            Some(copies) => {
                book.available_copies = copies;
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;

    #[tokio::test]
    async fn test_should_add_and_find_book() {
        let repo = MemoryBookRepository::new();
        repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 3));
        let loaded = repo.find("123").expect("should find book");
        assert_eq!("Title 1", loaded.title.as_str());
        assert_eq!(None, repo.find("999"));
    }

    #[tokio::test]
    async fn test_should_overwrite_on_add() {
        let repo = MemoryBookRepository::new();
        repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 3));
        repo.add(BookEntity::new("123", "Title 2", "Author 1", 2009, 1));
        assert_eq!(1, repo.len());
        assert_eq!("Title 2", repo.find("123").expect("should find book").title.as_str());
    }

    #[tokio::test]
    async fn test_should_report_whether_remove_deleted_book() {
        let repo = MemoryBookRepository::new();
        assert!(!repo.remove("999"));
        assert!(repo.is_empty());
        repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 3));
        assert!(repo.remove("123"));
        assert!(!repo.remove("123"));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_should_remove_once_under_concurrent_removes() {
        for _ in 0..200 {
            let repo = MemoryBookRepository::new();
            repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 3));
            let removed = AtomicUsize::new(0);
            thread::scope(|s| {
                for _ in 0..8 {
                    s.spawn(|| {
                        if repo.remove("123") {
                            removed.fetch_add(1, Ordering::SeqCst);
                        }
                    });
                }
            });
            assert_eq!(1, removed.load(Ordering::SeqCst));
        }
    }

    #[tokio::test]
    async fn test_should_find_by_author_ignoring_case() {
        let repo = MemoryBookRepository::new();
        repo.add(BookEntity::new("1", "Title 1", "author 1", 2008, 3));
        repo.add(BookEntity::new("2", "Title 2", "AUTHOR 1", 2010, 1));
        repo.add(BookEntity::new("3", "Title 3", "Tom", 2012, 2));
        assert_eq!(2, repo.find_by_author("Author 1").len());
        assert_eq!(1, repo.find_by_author("tom").len());
        assert!(repo.find_by_author("nobody").is_empty());
    }

    #[tokio::test]
    async fn test_should_adjust_copies_within_bounds() {
        let repo = MemoryBookRepository::new();
        repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 1));
        assert!(repo.adjust_copies("123", -1));
        assert!(!repo.adjust_copies("123", -1));
        assert_eq!(0, repo.find("123").expect("should find book").available_copies);
        assert!(repo.adjust_copies("123", 1));
        assert_eq!(1, repo.find("123").expect("should find book").available_copies);
        assert!(!repo.adjust_copies("999", 1));
    }

    #[tokio::test]
    async fn test_should_not_oversell_under_concurrent_borrows() {
        let repo = MemoryBookRepository::new();
        repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 5));
        let succeeded = AtomicUsize::new(0);
        thread::scope(|s| {
            for _ in 0..32 {
                s.spawn(|| {
                    if repo.adjust_copies("123", -1) {
                        succeeded.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });
        assert_eq!(5, succeeded.load(Ordering::SeqCst));
        assert_eq!(0, repo.find("123").expect("should find book").available_copies);
    }

    #[tokio::test]
    async fn test_should_balance_concurrent_borrow_and_return() {
        let repo = MemoryBookRepository::new();
        repo.add(BookEntity::new("123", "Title 1", "Author 1", 2008, 2));
        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    for _ in 0..100 {
                        if repo.adjust_copies("123", -1) {
                            assert!(repo.adjust_copies("123", 1));
                        }
                    }
                });
            }
        });
        assert_eq!(2, repo.find("123").expect("should find book").available_copies);
    }
}
