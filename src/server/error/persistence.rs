use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure reported by a repository backend.
///
/// Repositories never retry; every backend failure is surfaced to the service
/// layer through this type.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Error from the relational backend.
    #[error(transparent)]
    Database(DbErr),

    /// A write violated a uniqueness or referential constraint.
    #[error("Constraint violation: {0}")]
    Conflict(String),
}

impl From<DbErr> for PersistenceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::Conflict(detail),
            _ => Self::Database(err),
        }
    }
}
