//! User account records
//!
//! Data model only: password hashes are stored and verified here, but
//! sessions, cookies, and login flows live outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub username: String,
	pub email: Option<String>,
	/// PHC-format argon2 hash; never the raw password
	#[serde(skip_serializing, default)]
	pub password_hash: String,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
	pub created_at: DateTime<Utc>,
}

/// Payload for registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
	pub username: String,
	pub email: Option<String>,
	/// Raw password; hashed by the store before persisting
	pub password: String,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
}

impl NewUser {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			email: None,
			password: password.into(),
			first_name: None,
			last_name: None,
		}
	}

	pub fn email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}
}
