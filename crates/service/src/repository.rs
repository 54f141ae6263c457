use async_trait::async_trait;

use crate::errors::ServiceError;

/// Generic store gateway: one operation per CRUD verb for records keyed by an
/// integer id.
///
/// Mutating operations commit before returning. Store failures surface as
/// `ServiceError::Db` without retries; absence on lookup is `Ok(None)`.
#[async_trait]
pub trait Repository<T: Send + 'static>: Send + Sync {
    /// Every persisted record, in store order.
    async fn get_all(&self) -> Result<Vec<T>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, ServiceError>;
    /// Persist a new record. The store assigns the id; the incoming one is ignored.
    async fn add(&self, entity: T) -> Result<T, ServiceError>;
    /// Write the complete record as the current state for its id (last write wins).
    async fn update(&self, entity: T) -> Result<T, ServiceError>;
    async fn delete(&self, entity: T) -> Result<(), ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use models::entity::Identifiable;

    struct Table<T> {
        rows: BTreeMap<i32, T>,
        last_id: i32,
    }

    /// `Mutex<BTreeMap>` store with sequential ids starting at 1.
    ///
    /// `set_failing(true)` makes every call return `ServiceError::Db`, standing
    /// in for an unreachable database.
    pub struct InMemoryRepository<T> {
        table: Mutex<Table<T>>,
        failing: AtomicBool,
    }

    impl<T> Default for InMemoryRepository<T> {
        fn default() -> Self {
            Self { table: Mutex::new(Table { rows: BTreeMap::new(), last_id: 0 }), failing: AtomicBool::new(false) }
        }
    }

    impl<T> InMemoryRepository<T> {
        pub fn new() -> Self { Self::default() }

        pub fn set_failing(&self, failing: bool) { self.failing.store(failing, Ordering::SeqCst); }

        pub fn len(&self) -> usize { self.table.lock().unwrap().rows.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl<T> Repository<T> for InMemoryRepository<T>
    where
        T: Identifiable + Clone + Send + Sync + 'static,
    {
        async fn get_all(&self) -> Result<Vec<T>, ServiceError> {
            self.check()?;
            Ok(self.table.lock().unwrap().rows.values().cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<T>, ServiceError> {
            self.check()?;
            Ok(self.table.lock().unwrap().rows.get(&id).cloned())
        }

        async fn add(&self, mut entity: T) -> Result<T, ServiceError> {
            self.check()?;
            let mut table = self.table.lock().unwrap();
            table.last_id += 1;
            entity.set_id(table.last_id);
            table.rows.insert(entity.id(), entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: T) -> Result<T, ServiceError> {
            self.check()?;
            let mut table = self.table.lock().unwrap();
            match table.rows.get_mut(&entity.id()) {
                Some(row) => {
                    *row = entity.clone();
                    Ok(entity)
                }
                None => Err(ServiceError::Db(format!("record {} not updated", entity.id()))),
            }
        }

        async fn delete(&self, entity: T) -> Result<(), ServiceError> {
            self.check()?;
            self.table.lock().unwrap().rows.remove(&entity.id());
            Ok(())
        }
    }
}
