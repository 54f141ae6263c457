//! Service layer providing the book CRUD operations on top of models.
//! - `repository` is the generic store gateway (one operation per CRUD verb).
//! - `book` holds the request rules: validation, read-modify-write, not-found.
//! - Errors are typed in `errors` and mapped to HTTP by the server crate.

pub mod errors;
pub mod repository;
pub mod repo;
pub mod book;
#[cfg(test)]
pub mod test_support;
