//! Embedded schema bootstrap
//!
//! Executed once on connect. `CREATE TABLE IF NOT EXISTS` keeps reconnects
//! idempotent; there is no migration framework beyond this.

use sqlx::SqlitePool;

use crate::error::Result;

/// Schema statements, in dependency order (`users` before `recipes` for
/// the author foreign key)
const SCHEMA: &[&str] = &[
	"CREATE TABLE IF NOT EXISTS users (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		username TEXT NOT NULL UNIQUE,
		email TEXT UNIQUE,
		password_hash TEXT NOT NULL,
		first_name TEXT,
		last_name TEXT,
		created_at TEXT NOT NULL
	)",
	"CREATE TABLE IF NOT EXISTS recipes (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		title TEXT NOT NULL,
		slug TEXT NOT NULL UNIQUE,
		description TEXT NOT NULL DEFAULT '',
		content TEXT NOT NULL DEFAULT '',
		cuisine TEXT NOT NULL DEFAULT '',
		prep_time_minutes INTEGER,
		cook_time_minutes INTEGER,
		total_time_minutes INTEGER,
		dietary_tags TEXT NOT NULL DEFAULT '[]',
		image_filename TEXT,
		author_id INTEGER REFERENCES users(id) ON DELETE SET NULL,
		created_at TEXT NOT NULL,
		updated_at TEXT NOT NULL
	)",
	"CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)",
	"CREATE TABLE IF NOT EXISTS recipe_slug_history (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
		old_slug TEXT NOT NULL,
		changed_at TEXT NOT NULL
	)",
	"CREATE INDEX IF NOT EXISTS idx_recipe_slug_history_old_slug
		ON recipe_slug_history(old_slug)",
];

/// Create all tables and indexes if they do not exist yet
pub(crate) async fn migrate(pool: &SqlitePool) -> Result<()> {
	for statement in SCHEMA {
		sqlx::query(statement).execute(pool).await?;
	}
	tracing::info!("database schema ready");
	Ok(())
}
