//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and the cached password hash used by user factories,
//! plus convenience methods for creating records together with their dependencies.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    OnceLock,
};

use crate::fixture::user::DEFAULT_PASSWORD;

/// Counter for generating unique names and emails in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1);

static DEFAULT_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Hashes a password with deliberately cheap Argon2 parameters.
///
/// The PHC string carries its parameters, so the server's default verifier accepts it.
pub fn hash_password(password: &str) -> String {
    let params = Params::new(1024, 1, 1, None).expect("valid argon2 params");
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .expect("hash test password")
        .to_string()
}

/// Hash of [`DEFAULT_PASSWORD`], computed once per test binary.
pub fn default_password_hash() -> String {
    DEFAULT_PASSWORD_HASH
        .get_or_init(|| hash_password(DEFAULT_PASSWORD))
        .clone()
}

/// Creates a teacher who teaches a freshly created subject.
///
/// # Returns
/// - `Ok((user, teacher, subject))` - Created teacher and the subject appointed to them
/// - `Err(DbErr)` - Database error during creation
pub async fn create_teacher_with_subject(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::teacher::Model,
        entity::subject::Model,
    ),
    DbErr,
> {
    let (user, teacher) = crate::factory::teacher::create_teacher(db).await?;
    let subject = crate::factory::subject::create_subject(db).await?;
    crate::factory::link::subject_teacher(db, subject.id, teacher.id).await?;

    Ok((user, teacher, subject))
}
