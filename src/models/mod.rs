//! Data models for Bookstore

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookId, BookList, BookPayload, MessageResponse, NewBook};
