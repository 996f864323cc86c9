use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand_core::OsRng;

/// The single operator credential authorized to moderate posts. Built
/// once from configuration and injected into the admin middleware.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: AdminPassword,
}

#[derive(Clone)]
enum AdminPassword {
    Plain(String),
    Argon2(String),
}

impl AdminCredentials {
    pub fn plain(username: String, password: String) -> Self {
        Self {
            username,
            password: AdminPassword::Plain(password),
        }
    }

    /// `hash` is an argon2 PHC string, as produced by [`hash_password`].
    pub fn hashed(username: String, hash: String) -> Self {
        Self {
            username,
            password: AdminPassword::Argon2(hash),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        match &self.password {
            AdminPassword::Plain(expected) => expected == password,
            AdminPassword::Argon2(hash) => verify_password(password, hash).unwrap_or(false),
        }
    }
}

/// Parses an `Authorization: Basic <base64(user:pass)>` header value.
pub fn decode_basic_auth(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    let argon2 = Argon2::default();
    Ok(argon2.verify_password(password.as_bytes(), &parsed).is_ok())
}
