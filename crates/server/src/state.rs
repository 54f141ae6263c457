use std::sync::Arc;

use models::book;
use sea_orm::DatabaseConnection;
use service::{book::BookService, repo::seaorm::SeaOrmRepository, repository::Repository};

pub type BookRepository = dyn Repository<book::Model>;

/// Shared handler state; cloning is cheap (one `Arc`).
#[derive(Clone)]
pub struct ServerState {
    pub books: Arc<BookService<BookRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<BookRepository>) -> Self {
        Self { books: Arc::new(BookService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRepository::<book::Entity>::new(db)))
    }
}
