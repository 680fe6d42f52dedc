use crate::core::domain::Identifiable;

// BookEntity is the stored record of a title in the catalog. Physical copies are not
// tracked individually, only the number of copies currently available for lending.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available_copies: u32,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32, available_copies: u32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
        }
    }

    pub fn is_written_by(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    // applies delta to the available copies, None when the result would be negative or overflow
    pub fn adjusted_copies(&self, delta: i32) -> Option<u32> {
        if delta < 0 {
            self.available_copies.checked_sub(delta.unsigned_abs())
        } else {
            self.available_copies.checked_add(delta as u32)
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
