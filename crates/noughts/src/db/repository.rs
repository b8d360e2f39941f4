//! SQLite-backed statistics store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use noughts_core::{Stats, StatsError, StatsStore, Tally};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, DbErrorKind, MatchStat, NewMatchStat, schema};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Repository for the three persisted counters.
///
/// Every operation opens its own connection, so the database file is the
/// only state; reopening a repository on the same path sees the same
/// counters. (`":memory:"` therefore does not persist between calls.)
#[derive(Debug, Clone)]
pub struct StatsRepository {
    db_path: String,
}

impl StatsRepository {
    /// Opens the database at `db_path`, creating it and applying pending
    /// migrations as needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Opening StatsRepository");
        let repo = Self { db_path };

        let mut conn = repo.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(DbErrorKind::Migration, format!("Migration failed: {}", e)))?;
        debug!(count = applied.len(), "Migrations applied");

        repo.ensure_counters(&mut conn)?;
        Ok(repo)
    }

    /// Path of the backing database.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        Ok(SqliteConnection::establish(&self.db_path)?)
    }

    /// Inserts a zeroed row for any counter that is missing.
    fn ensure_counters(&self, conn: &mut SqliteConnection) -> Result<(), DbError> {
        let rows: Vec<NewMatchStat> = Tally::iter().map(NewMatchStat::zeroed).collect();
        let inserted = diesel::insert_or_ignore_into(schema::match_stats::table)
            .values(&rows)
            .execute(conn)?;
        if inserted > 0 {
            warn!(inserted, "Restored missing counter rows");
        }
        Ok(())
    }

    /// Increments one counter by one.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the counter row is missing or a database error occurs.
    #[instrument(skip(self))]
    pub fn increment(&self, tally: Tally) -> Result<(), DbError> {
        use schema::match_stats::dsl;

        let mut conn = self.connection()?;
        let updated = diesel::update(dsl::match_stats.find(tally.key()))
            .set(dsl::count.eq(dsl::count + 1))
            .execute(&mut conn)?;

        if updated != 1 {
            return Err(DbError::new(
                DbErrorKind::Counter,
                format!("Counter '{}' missing ({} rows updated)", tally.key(), updated),
            ));
        }

        info!(key = tally.key(), "Counter incremented");
        Ok(())
    }

    /// Loads every stored counter row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn load_all(&self) -> Result<Vec<MatchStat>, DbError> {
        let mut conn = self.connection()?;
        let rows = schema::match_stats::table
            .select(MatchStat::as_select())
            .load(&mut conn)?;
        debug!(count = rows.len(), "Counter rows loaded");
        Ok(rows)
    }

    /// Current values of the three counters.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] for a database error or a corrupt row.
    #[instrument(skip(self))]
    pub fn load_stats(&self) -> Result<Stats, DbError> {
        let mut counts = [0u64; 3];
        for row in self.load_all()? {
            let Ok(tally) = row.parse_tally() else {
                warn!(tally = %row.tally(), "Unknown counter row");
                continue;
            };
            let slot = match tally {
                Tally::HumanWin => 0,
                Tally::ComputerWin => 1,
                Tally::Tie => 2,
            };
            counts[slot] = row.parse_count()?;
        }

        let stats = Stats::new(counts[0], counts[1], counts[2]);
        info!(
            human_wins = counts[0],
            computer_wins = counts[1],
            ties = counts[2],
            win_rate = %format!("{:.1}%", stats.win_rate()),
            "Stats loaded"
        );
        Ok(stats)
    }
}

impl StatsStore for StatsRepository {
    fn record(&mut self, tally: Tally) -> Result<(), StatsError> {
        Ok(self.increment(tally)?)
    }

    fn totals(&self) -> Result<Stats, StatsError> {
        Ok(self.load_stats()?)
    }
}
