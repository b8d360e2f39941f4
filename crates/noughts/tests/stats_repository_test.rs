//! Tests for the SQLite statistics store.

use diesel::prelude::*;
use noughts::{DbErrorKind, StatsRepository};
use noughts_core::{Mark, Mode, NullRenderer, RandomPicker, Session, Stats, StatsStore, Tally};
use tempfile::NamedTempFile;

/// Creates a temporary database file and opens a repository on it. The
/// file handle must stay in scope to keep the file alive.
fn setup_test_db() -> (NamedTempFile, StatsRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let repo = StatsRepository::open(db_path).expect("Failed to open repository");
    (db_file, repo)
}

#[test]
fn test_new_database_starts_at_zero() {
    let (_db, repo) = setup_test_db();
    let stats = repo.load_stats().expect("Load failed");
    assert_eq!(stats, Stats::default());
    assert_eq!(repo.load_all().expect("Load failed").len(), 3);
}

#[test]
fn test_counts_match_recorded_rounds() {
    let (_db, mut repo) = setup_test_db();
    let recorded = [
        Tally::HumanWin,
        Tally::ComputerWin,
        Tally::ComputerWin,
        Tally::Tie,
        Tally::Tie,
        Tally::Tie,
    ];
    for tally in recorded {
        repo.record(tally).expect("Record failed");
    }

    let stats = repo.totals().expect("Totals failed");
    assert_eq!(stats, Stats::new(1, 2, 3));
    assert_eq!(stats.total(), 6);
}

#[test]
fn test_counts_survive_reopen() {
    let (db, mut repo) = setup_test_db();
    repo.record(Tally::HumanWin).expect("Record failed");
    repo.record(Tally::Tie).expect("Record failed");
    drop(repo);

    let path = db.path().to_str().expect("Invalid path").to_string();
    let mut reopened = StatsRepository::open(path).expect("Reopen failed");
    assert_eq!(reopened.totals().expect("Totals failed"), Stats::new(1, 0, 1));

    reopened.record(Tally::ComputerWin).expect("Record failed");
    assert_eq!(reopened.totals().expect("Totals failed"), Stats::new(1, 1, 1));
}

#[test]
fn test_reopen_does_not_reset_or_duplicate_rows() {
    let (db, mut repo) = setup_test_db();
    repo.record(Tally::Tie).expect("Record failed");

    let path = db.path().to_str().expect("Invalid path").to_string();
    for _ in 0..3 {
        StatsRepository::open(path.clone()).expect("Reopen failed");
    }

    assert_eq!(repo.load_all().expect("Load failed").len(), 3);
    assert_eq!(repo.totals().expect("Totals failed"), Stats::new(0, 0, 1));
}

#[test]
fn test_missing_counter_row_restored_on_open() {
    let (db, _repo) = setup_test_db();
    let path = db.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&path).expect("Failed to connect");
    diesel::sql_query("DELETE FROM match_stats WHERE tally = 'tie'")
        .execute(&mut conn)
        .expect("Delete failed");

    let mut repo = StatsRepository::open(path).expect("Reopen failed");
    repo.record(Tally::Tie).expect("Record failed");
    assert_eq!(repo.totals().expect("Totals failed").ties(), &1);
}

#[test]
fn test_session_records_into_sqlite() {
    let (db, repo) = setup_test_db();
    let mut session = Session::new(
        Mode::VsComputer { human: Mark::X },
        RandomPicker::seeded(3),
        repo,
        NullRenderer,
    );

    for _ in 0..5 {
        while session.outcome().is_none() {
            if session.is_opponent_pending() {
                session.play_opponent_turn().expect("Opponent move failed");
            } else {
                let index = session.board().empty_indices()[0];
                session.request_move(index).expect("Human move failed");
            }
        }
        session.start_round();
    }

    let path = db.path().to_str().expect("Invalid path").to_string();
    let reopened = StatsRepository::open(path).expect("Reopen failed");
    let stats = reopened.load_stats().expect("Load failed");
    assert_eq!(stats.total(), 5);
    assert_eq!(*stats.human_wins(), 0);
}

#[test]
fn test_unopenable_path_is_connection_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("stats.db");
    let err = StatsRepository::open(path.to_str().expect("Invalid path").to_string())
        .expect_err("Open should fail");
    assert_eq!(err.kind, DbErrorKind::Connection);

    let stats_err: noughts_core::StatsError = err.into();
    assert!(stats_err.message.starts_with("connection: "));
}
