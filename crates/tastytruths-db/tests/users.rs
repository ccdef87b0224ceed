//! User registration and password verification with an injected hasher.

use argon2::Argon2;
use tastytruths_db::{Database, DatabaseSettings, NewUser, StoreError, UserStore};

async fn store() -> UserStore {
	let db = Database::connect(DatabaseSettings::in_memory())
		.await
		.expect("in-memory database");
	db.users(Argon2::default())
}

#[tokio::test]
async fn register_hashes_password() {
	let users = store().await;

	let user = users
		.register(NewUser::new("alice", "correct horse battery staple").email("alice@example.com"))
		.await
		.unwrap();

	assert_eq!(user.username, "alice");
	assert_ne!(user.password_hash, "correct horse battery staple");
	assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn verify_accepts_original_and_rejects_others() {
	let users = store().await;

	let user = users
		.register(NewUser::new("alice", "correct horse battery staple"))
		.await
		.unwrap();

	assert!(users.verify_password(&user, "correct horse battery staple"));
	assert!(!users.verify_password(&user, "wrong password"));
	assert!(!users.verify_password(&user, ""));
}

#[tokio::test]
async fn garbage_hash_verifies_false_not_panics() {
	let users = store().await;

	let mut user = users
		.register(NewUser::new("alice", "pw-doesnt-matter"))
		.await
		.unwrap();
	user.password_hash = "not a phc string".to_string();

	assert!(!users.verify_password(&user, "pw-doesnt-matter"));
}

#[tokio::test]
async fn duplicate_username_is_conflict() {
	let users = store().await;

	users.register(NewUser::new("alice", "pw1")).await.unwrap();
	let err = users.register(NewUser::new("alice", "pw2")).await.unwrap_err();

	assert!(matches!(err, StoreError::AlreadyExists { field: "username" }));
}

#[tokio::test]
async fn lookup_by_username_and_email() {
	let users = store().await;

	users
		.register(NewUser::new("alice", "pw").email("alice@example.com"))
		.await
		.unwrap();

	assert!(users.get_by_username("alice").await.unwrap().is_some());
	assert!(users.get_by_username("bob").await.unwrap().is_none());
	assert!(users.get_by_email("alice@example.com").await.unwrap().is_some());
}
