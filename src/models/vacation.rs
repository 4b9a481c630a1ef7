//! Vacation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Vacation record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vacation {
    pub id: i32,
    pub name: String,
    /// First day of the vacation
    pub from_date: NaiveDate,
    /// Last day of the vacation
    pub to_date: NaiveDate,
    pub thoughts: Option<String>,
}

/// Create / update vacation request
///
/// Updates overwrite every field, so all of them are required here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VacationIn {
    pub name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub thoughts: Option<String>,
}

impl VacationIn {
    /// Attach a store-assigned id to the submitted fields
    pub fn into_vacation(self, id: i32) -> Vacation {
        Vacation {
            id,
            name: self.name,
            from_date: self.from_date,
            to_date: self.to_date,
            thoughts: self.thoughts,
        }
    }
}
