//! `book` entity: integer id assigned by the database plus a bounded name.
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::entity::Identifiable;
use crate::errors::ModelError;

/// Upper bound on `name`, counted in characters.
pub const NAME_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Store-level guard: nothing with an invalid name reaches the table.
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        match &self.name {
            ActiveValue::Set(name) | ActiveValue::Unchanged(name) => {
                validate_name(name).map_err(|e| DbErr::Custom(e.to_string()))?;
            }
            ActiveValue::NotSet if insert => {
                return Err(DbErr::Custom(ModelError::Validation("name required".into()).to_string()));
            }
            ActiveValue::NotSet => {}
        }
        Ok(self)
    }
}

impl Identifiable for Model {
    fn id(&self) -> i32 { self.id }
    fn set_id(&mut self, id: i32) { self.id = id; }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}
