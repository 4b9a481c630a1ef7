//! Vacation Store
//!
//! Data-access layer for vacation records kept in PostgreSQL. Callers build a
//! pool once at startup with [`db::connect`], hand it to
//! [`services::vacations::VacationService`], and branch on the returned
//! [`services::Outcome`] values.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::{Vacation, VacationIn};
pub use services::{vacations::VacationService, Failure, Outcome};
