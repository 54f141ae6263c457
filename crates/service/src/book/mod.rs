pub mod domain;
pub mod service;

pub use domain::BookInput;
pub use service::BookService;
