//! User registry
//!
//! In-memory account registry seeded with the demo identity. The only
//! persisted client state is the session and history records, so signups
//! live for the process lifetime only.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::UserAccount;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_NAME: &str = "Demo User";
const DEMO_PASSWORD: &str = "password";

pub struct UserRegistry {
    accounts: RwLock<Vec<UserAccount>>,
}

impl UserRegistry {
    /// Build the registry with the demo identity already present
    pub fn with_demo_user() -> AppResult<Self> {
        let registry = Self {
            accounts: RwLock::new(Vec::new()),
        };
        registry.insert(DEMO_EMAIL, DEMO_PASSWORD, DEMO_NAME)?;
        Ok(registry)
    }

    /// Verify credentials, returning the matching account
    pub fn verify(&self, email: &str, password: &str) -> AppResult<UserAccount> {
        let accounts = self.accounts.read();
        let account = accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or(AppError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&account.password_hash)
            .map_err(|_| AppError::InternalError("Invalid password hash".to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::InvalidCredentials)?;

        Ok(account.clone())
    }

    /// Register a new account; duplicate emails are rejected.
    /// The duplicate check and the insert happen under one write lock, so
    /// concurrent signups of the same email cannot both pass the check.
    pub fn register(&self, email: &str, password: &str, name: &str) -> AppResult<UserAccount> {
        let mut accounts = self.accounts.write();
        if accounts.iter().any(|a| a.email == email) {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let account = Self::build_account(email, password, name)?;
        accounts.push(account.clone());
        Ok(account)
    }

    fn insert(&self, email: &str, password: &str, name: &str) -> AppResult<UserAccount> {
        let account = Self::build_account(email, password, name)?;
        self.accounts.write().push(account.clone());
        Ok(account)
    }

    fn build_account(email: &str, password: &str, name: &str) -> AppResult<UserAccount> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .to_string();

        Ok(UserAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_accepted() {
        let registry = UserRegistry::with_demo_user().unwrap();
        let account = registry.verify(DEMO_EMAIL, "password").unwrap();
        assert_eq!(account.name, DEMO_NAME);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let registry = UserRegistry::with_demo_user().unwrap();
        let err = registry.verify(DEMO_EMAIL, "wrong").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn test_unknown_email_rejected() {
        let registry = UserRegistry::with_demo_user().unwrap();
        let err = registry.verify("nobody@example.com", "password").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn test_register_then_verify() {
        let registry = UserRegistry::with_demo_user().unwrap();
        registry.register("new@example.com", "hunter22pass", "New User").unwrap();

        let account = registry.verify("new@example.com", "hunter22pass").unwrap();
        assert_eq!(account.name, "New User");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let registry = UserRegistry::with_demo_user().unwrap();
        let err = registry.register(DEMO_EMAIL, "whatever123", "Imposter").unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[test]
    fn test_concurrent_signups_of_same_email_admit_exactly_one() {
        use std::sync::Arc;

        let registry = Arc::new(UserRegistry::with_demo_user().unwrap());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry.register("raced@example.com", "longenough", &format!("Racer {}", i))
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(successes, 1);
        assert!(registry.verify("raced@example.com", "longenough").is_ok());
    }
}
