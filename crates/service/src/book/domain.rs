use serde::Deserialize;

use crate::errors::ServiceError;

/// Request body for create and update.
///
/// Both fields are optional on the wire: a missing `id` reads as 0 and a
/// missing `name` fails validation rather than deserialization.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BookInput {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

impl BookInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: 0, name: Some(name.into()) }
    }

    pub fn with_id(id: i32, name: impl Into<String>) -> Self {
        Self { id, name: Some(name.into()) }
    }

    /// The validated name: present, non-empty, within the length bound.
    pub fn valid_name(&self) -> Result<&str, ServiceError> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| ServiceError::Validation("name required".into()))?;
        models::book::validate_name(name)?;
        Ok(name)
    }
}
