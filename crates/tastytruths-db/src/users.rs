//! User store
//!
//! Account records with argon2 password hashing. The hasher is injected
//! by the caller rather than living in process-wide state, so tests and
//! deployments can tune parameters independently. Sessions, cookies, and
//! login endpoints are out of scope here.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Result, StoreError};
use crate::models::{NewUser, User};

/// Store for user accounts
#[derive(Clone)]
pub struct UserStore {
	pool: SqlitePool,
	hasher: Argon2<'static>,
}

impl UserStore {
	pub fn new(pool: SqlitePool, hasher: Argon2<'static>) -> Self {
		Self { pool, hasher }
	}

	/// Register a user, hashing the raw password before it is persisted
	///
	/// Usernames and emails are unique; a duplicate surfaces as
	/// [`StoreError::AlreadyExists`].
	pub async fn register(&self, new: NewUser) -> Result<User> {
		let salt = SaltString::generate(&mut OsRng);
		let password_hash = self
			.hasher
			.hash_password(new.password.as_bytes(), &salt)
			.map_err(|e| StoreError::PasswordHash(e.to_string()))?
			.to_string();

		let result = sqlx::query(
			"INSERT INTO users (username, email, password_hash, first_name, last_name, created_at) \
			 VALUES (?, ?, ?, ?, ?, ?)",
		)
		.bind(&new.username)
		.bind(&new.email)
		.bind(&password_hash)
		.bind(&new.first_name)
		.bind(&new.last_name)
		.bind(Utc::now())
		.execute(&self.pool)
		.await;

		let id = match result {
			Ok(done) => done.last_insert_rowid(),
			Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
				let field = if db_err.message().contains("users.email") {
					"email"
				} else {
					"username"
				};
				return Err(StoreError::AlreadyExists { field });
			}
			Err(e) => return Err(e.into()),
		};

		tracing::debug!(id, username = %new.username, "user registered");
		self.get(id).await?.ok_or(StoreError::UserNotFound(id))
	}

	/// Check a raw password against the stored hash
	///
	/// Any failure — unparsable hash, mismatch — is `false`, never an
	/// error surfaced to the caller.
	pub fn verify_password(&self, user: &User, raw_password: &str) -> bool {
		match PasswordHash::new(&user.password_hash) {
			Ok(parsed) => self
				.hasher
				.verify_password(raw_password.as_bytes(), &parsed)
				.is_ok(),
			Err(_) => false,
		}
	}

	/// Fetch a user by id
	pub async fn get(&self, id: i64) -> Result<Option<User>> {
		let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;
		Ok(user)
	}

	/// Fetch a user by username
	pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
		let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
			.bind(username)
			.fetch_optional(&self.pool)
			.await?;
		Ok(user)
	}

	/// Fetch a user by email (stored lowercase by convention)
	pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
		let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
			.bind(email)
			.fetch_optional(&self.pool)
			.await?;
		Ok(user)
	}
}
