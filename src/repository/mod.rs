//! Repository layer for database operations

pub mod vacations;

use sqlx::{Pool, Postgres};

/// Main repository struct grouping the per-table repositories
#[derive(Clone)]
pub struct Repository {
    pub vacations: vacations::VacationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            vacations: vacations::VacationsRepository::new(pool),
        }
    }
}
