// Service exports
pub mod google_books;

pub use google_books::{GoogleBooksClient, GoogleBooksError, SearchOptions, DEFAULT_ENDPOINT};
