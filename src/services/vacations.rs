//! Vacation store accessor

use sqlx::{Pool, Postgres};

use super::{Failure, Outcome};
use crate::{
    error::AppError,
    models::vacation::{Vacation, VacationIn},
    repository::Repository,
};

const GET_ONE_FAILED: &str = "Could not get that vacation";
const GET_ALL_FAILED: &str = "Could not get vacations";
const CREATE_FAILED: &str = "Could not create vacation";
const UPDATE_FAILED: &str = "Could not update vacation";

#[derive(Clone)]
pub struct VacationService {
    repository: Repository,
}

fn absorb<T>(operation: &str, id: Option<i32>, message: &str, err: AppError) -> Outcome<T> {
    tracing::error!(
        operation,
        vacation_id = id,
        connectivity = err.is_connectivity(),
        error = %err,
        "{}",
        message
    );
    Outcome::Failure(Failure::with_cause(message, &err))
}

impl VacationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn from_pool(pool: Pool<Postgres>) -> Self {
        Self::new(Repository::new(pool))
    }

    /// Get a vacation by ID
    pub async fn get_one(&self, id: i32) -> Outcome<Vacation> {
        match self.repository.vacations.find_by_id(id).await {
            Ok(row) => row.into(),
            Err(e) => absorb("get_one", Some(id), GET_ONE_FAILED, e),
        }
    }

    /// All vacations ordered by start date; an empty list is a success
    pub async fn get_all(&self) -> Outcome<Vec<Vacation>> {
        match self.repository.vacations.list().await {
            Ok(rows) => Outcome::Success(rows),
            Err(e) => absorb("get_all", None, GET_ALL_FAILED, e),
        }
    }

    /// Create a vacation.
    ///
    /// The returned record is the input plus the assigned id; the row is not read back.
    pub async fn create(&self, data: VacationIn) -> Outcome<Vacation> {
        match self.repository.vacations.insert(&data).await {
            Ok(id) => {
                tracing::debug!(vacation_id = id, "Vacation created");
                Outcome::Success(data.into_vacation(id))
            }
            Err(e) => absorb("create", None, CREATE_FAILED, e),
        }
    }

    /// Overwrite a vacation.
    ///
    /// Reports success even when no row has this id.
    pub async fn update(&self, id: i32, data: VacationIn) -> Outcome<Vacation> {
        match self.repository.vacations.update(id, &data).await {
            Ok(affected) => {
                if affected == 0 {
                    tracing::debug!(vacation_id = id, "Update matched no vacation");
                }
                Outcome::Success(data.into_vacation(id))
            }
            Err(e) => absorb("update", Some(id), UPDATE_FAILED, e),
        }
    }

    /// Delete a vacation. `true` whenever the statement ran, matched or not.
    pub async fn delete(&self, id: i32) -> bool {
        match self.repository.vacations.delete(id).await {
            Ok(affected) => {
                if affected == 0 {
                    tracing::debug!(vacation_id = id, "Delete matched no vacation");
                }
                true
            }
            Err(e) => {
                tracing::error!(
                    operation = "delete",
                    vacation_id = id,
                    connectivity = e.is_connectivity(),
                    error = %e,
                    "Could not delete vacation"
                );
                false
            }
        }
    }
}
