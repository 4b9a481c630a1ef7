//! Data models for the vacation store

pub mod vacation;

pub use vacation::{Vacation, VacationIn};
