use serde::de::DeserializeOwned;

use crate::time::calendardate::InvalidDateError;

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

pub fn parse_json_value<T: DeserializeOwned>(json_value: serde_json::Value) -> Result<T, ManagerError> {
    Ok(serde_json::from_value(json_value)?)
}
