use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{Error as PHError, PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::error::{ApiError, ApiResult};

pub const MIN_PASSWORD_LEN: usize = 3;

pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt_string = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt_string)
        .map_err(|error| ApiError::Internal(format!("hash password: {error}")))?;
    Ok(hash.to_string())
}

/// `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
pub fn verify_password(password: &str, password_hash: &str) -> ApiResult<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| ApiError::Internal(format!("parse password hash: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PHError::Password) => Ok(false),
        Err(e) => Err(ApiError::Internal(format!("verify password: {e}"))),
    }
}
