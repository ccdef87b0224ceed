//! Database settings
//!
//! An explicitly constructed settings struct passed into
//! [`crate::Database::connect`]. There is deliberately no global
//! connection singleton; callers own the handle and thread it through.

/// Environment variable consulted by [`DatabaseSettings::from_env`]
pub const DATABASE_URL_ENV: &str = "TASTYTRUTHS_DATABASE_URL";

/// Connection settings for the SQLite record store
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
	/// SQLite connection URL, e.g. `sqlite:tastytruths.db` or `sqlite::memory:`
	pub url: String,
	/// Pool size; in-memory databases are always pinned to one connection
	pub max_connections: u32,
	/// How long a writer waits on a locked database before erroring
	pub busy_timeout_secs: u64,
}

impl Default for DatabaseSettings {
	fn default() -> Self {
		Self {
			url: "sqlite:tastytruths.db".to_string(),
			max_connections: 5,
			busy_timeout_secs: 5,
		}
	}
}

impl DatabaseSettings {
	/// Settings for a private in-memory database, used heavily in tests
	///
	/// # Examples
	///
	/// ```
	/// use tastytruths_db::DatabaseSettings;
	///
	/// let settings = DatabaseSettings::in_memory();
	/// assert_eq!(settings.max_connections, 1);
	/// ```
	pub fn in_memory() -> Self {
		Self {
			url: "sqlite::memory:".to_string(),
			max_connections: 1,
			..Self::default()
		}
	}

	/// Read the database URL from `TASTYTRUTHS_DATABASE_URL`, keeping
	/// defaults for everything else
	pub fn from_env() -> Self {
		let mut settings = Self::default();
		if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
			settings.url = url;
		}
		settings
	}

	/// True when the URL points at an in-memory database
	pub(crate) fn is_in_memory(&self) -> bool {
		self.url.contains(":memory:")
	}
}
