use std::sync::Arc;

use models::book;
use tracing::{info, instrument};

use crate::book::domain::BookInput;
use crate::errors::ServiceError;
use crate::repository::Repository;

/// Application service encapsulating the book rules.
/// Validation happens here and never reaches the repository; absence on
/// update/delete is reported as `NotFound`.
pub struct BookService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R> BookService<R>
where
    R: Repository<book::Model> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<book::Model>, ServiceError> {
        self.repo.get_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<book::Model>, ServiceError> { self.repo.get_by_id(id).await }

    /// Create a book; any `id` in the input is ignored.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: BookInput) -> Result<book::Model, ServiceError> {
        let name = input.valid_name()?.to_string();
        let created = self.repo.add(book::Model { id: 0, name }).await?;
        info!(id = created.id, "book_created");
        Ok(created)
    }

    /// Read-modify-write: only `name` of the stored record is replaced.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: BookInput) -> Result<book::Model, ServiceError> {
        if id == 0 {
            return Err(ServiceError::Validation("id must be non-zero".into()));
        }
        if id != input.id {
            return Err(ServiceError::Validation(format!("path id {} does not match body id {}", id, input.id)));
        }
        let name = input.valid_name()?;

        let mut existing = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("book"))?;
        existing.name = name.to_string();
        let updated = self.repo.update(existing).await?;
        info!(id, "book_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let existing = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("book"))?;
        self.repo.delete(existing).await?;
        info!(id, "book_deleted");
        Ok(())
    }
}
