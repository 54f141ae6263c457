use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::repository::Repository;

/// SeaORM-backed store gateway for any entity keyed by an `i32` primary key.
pub struct SeaOrmRepository<E> {
    pub db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait::async_trait]
impl<E> Repository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn get_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(E::find().all(&self.db).await?)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn add(&self, entity: E::Model) -> Result<E::Model, ServiceError> {
        let mut am = entity.into_active_model();
        // identity comes from the database
        for key in E::PrimaryKey::iter() {
            am.not_set(key.into_column());
        }
        let created = am.insert(&self.db).await?;
        debug!(table = E::default().table_name(), "row inserted");
        Ok(created)
    }

    async fn update(&self, entity: E::Model) -> Result<E::Model, ServiceError> {
        // mark every column as changed so the full record is written
        let mut am = entity.into_active_model();
        for col in E::Column::iter() {
            if let Some(value) = am.get(col).into_value() {
                am.set(col, value);
            }
        }
        let updated = am.update(&self.db).await?;
        debug!(table = E::default().table_name(), "row updated");
        Ok(updated)
    }

    async fn delete(&self, entity: E::Model) -> Result<(), ServiceError> {
        let res = entity.into_active_model().delete(&self.db).await?;
        debug!(table = E::default().table_name(), rows = res.rows_affected, "row deleted");
        Ok(())
    }
}
