//! Database persistence for cumulative match statistics.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::{DbError, DbErrorKind};
pub use models::{MatchStat, NewMatchStat};
pub use repository::{MIGRATIONS, StatsRepository};
