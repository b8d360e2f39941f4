//! Stats database errors.

use derive_more::{Display, Error};
use noughts_core::StatsError;

/// What part of the stats database failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DbErrorKind {
    /// The database file could not be opened.
    #[display("connection")]
    Connection,
    /// Embedded migrations could not be applied.
    #[display("migration")]
    Migration,
    /// A query or update failed.
    #[display("query")]
    Query,
    /// A counter row is missing or holds an unusable value.
    #[display("counter")]
    Counter,
}

/// Stats database failure, tagged with the caller's location.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats database {} error: {} at {}:{}", kind, message, file, line)]
pub struct DbError {
    /// Failure category.
    pub kind: DbErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DbError {
    /// Creates an error of `kind` located at the caller.
    #[track_caller]
    pub fn new(kind: DbErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(DbErrorKind::Query, err.to_string())
    }
}

impl From<diesel::ConnectionError> for DbError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(DbErrorKind::Connection, err.to_string())
    }
}

/// The session only sees [`StatsError`]; the kind folds into its message.
impl From<DbError> for StatsError {
    fn from(err: DbError) -> Self {
        StatsError {
            message: format!("{}: {}", err.kind, err.message),
            line: err.line,
            file: err.file,
        }
    }
}
