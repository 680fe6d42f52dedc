use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Expected outcome of a borrow against a book whose available copies are exhausted.
    // It is not retryable: the same request fails again until a copy is returned.
    InsufficientCopies {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn insufficient_copies(message: &str) -> LibraryError {
        LibraryError::InsufficientCopies { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn book_not_found(isbn: &str) -> LibraryError {
        LibraryError::not_found(format!("Book with ISBN {} not found", isbn).as_str())
    }

    pub fn author_not_found(author: &str) -> LibraryError {
        LibraryError::not_found(format!("No books found for author: {}", author).as_str())
    }

    pub fn no_copies(isbn: &str) -> LibraryError {
        LibraryError::insufficient_copies(
            format!("No available copies for book with ISBN {}", isbn).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InsufficientCopies { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code: Some(code) } => {
                write!(f, "{} (reason {})", message, code)
            }
            LibraryError::Validation { message, reason_code: None } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
