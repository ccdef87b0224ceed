//! Connection handle
//!
//! [`Database`] owns the pool and hands out per-concern stores. SQLite
//! permits limited write concurrency; in-memory URLs are pinned to a
//! single long-lived connection so every acquisition sees the same
//! database.

use std::str::FromStr;
use std::time::Duration;

use argon2::Argon2;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::config::DatabaseSettings;
use crate::error::Result;
use crate::recipes::RecipeStore;
use crate::schema;
use crate::users::UserStore;

/// Handle to the SQLite record store
#[derive(Clone)]
pub struct Database {
	pool: SqlitePool,
}

impl Database {
	/// Open (creating if missing) the database and bootstrap the schema
	pub async fn connect(settings: DatabaseSettings) -> Result<Self> {
		let options = SqliteConnectOptions::from_str(&settings.url)?
			.create_if_missing(true)
			.foreign_keys(true)
			.journal_mode(if settings.is_in_memory() {
				SqliteJournalMode::Memory
			} else {
				SqliteJournalMode::Wal
			})
			.synchronous(SqliteSynchronous::Normal)
			// Prevent transient "database is locked" errors under concurrent writes.
			.busy_timeout(Duration::from_secs(settings.busy_timeout_secs));

		let mut pool_options = SqlitePoolOptions::new();
		if settings.is_in_memory() {
			// Each new in-memory connection is a fresh, empty database.
			pool_options = pool_options
				.max_connections(1)
				.idle_timeout(None)
				.max_lifetime(None);
		} else {
			pool_options = pool_options.max_connections(settings.max_connections);
		}

		let pool = pool_options.connect_with(options).await?;
		schema::migrate(&pool).await?;

		tracing::debug!(url = %settings.url, "database connected");
		Ok(Self { pool })
	}

	/// Recipe store (slug lifecycle included)
	pub fn recipes(&self) -> RecipeStore {
		RecipeStore::new(self.pool.clone())
	}

	/// User store with the given password hasher
	///
	/// The hasher is constructed by the caller and passed in; there is no
	/// process-wide hasher instance.
	pub fn users(&self, hasher: Argon2<'static>) -> UserStore {
		UserStore::new(self.pool.clone(), hasher)
	}

	/// Raw pool access, for the resolution layer and tests
	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}
}
