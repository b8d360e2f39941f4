//! Database models.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use noughts_core::Tally;
use tracing::instrument;

use crate::db::{DbError, DbErrorKind, schema};

/// One persisted counter.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::match_stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MatchStat {
    tally: String,
    count: i64,
}

/// A counter row to insert.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::match_stats)]
pub struct NewMatchStat {
    tally: String,
    count: i64,
}

impl NewMatchStat {
    /// A zeroed row for `tally`.
    pub fn zeroed(tally: Tally) -> Self {
        Self::new(tally.key().to_string(), 0)
    }
}

impl MatchStat {
    /// Parses the stored key into a [`Tally`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the key is not a known tally.
    #[instrument(skip(self), fields(tally = %self.tally))]
    pub fn parse_tally(&self) -> Result<Tally, DbError> {
        self.tally
            .parse()
            .map_err(|_| DbError::new(DbErrorKind::Counter, format!("Invalid tally: '{}'", self.tally)))
    }

    /// The count as an unsigned value.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] for a negative stored count.
    pub fn parse_count(&self) -> Result<u64, DbError> {
        u64::try_from(self.count)
            .map_err(|_| DbError::new(DbErrorKind::Counter, format!("Negative count {} for '{}'", self.count, self.tally)))
    }
}
