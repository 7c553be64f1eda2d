//! Authentication service.
//!
//! Account lookup sits behind the [`Authenticator`] trait. Two directories
//! implement it over the same demo accounts:
//!
//! - [`DemoDirectory`] compares plaintext passwords (demo convenience only)
//! - [`HashedDirectory`] stores Argon2id hashes and verifies against them
//!
//! Guest entry never goes through an authenticator; see [`enter_as_guest`].

mod error;

pub use error::{AuthBackendError, AuthError};

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};

use shoe_shop_core::{Login, Role};

use crate::models::User;

/// Account lookup by login and password.
pub trait Authenticator: Send + Sync {
    /// Find the user whose login and password both match exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotFound` if no account matches.
    fn authenticate(&self, login: &str, password: &SecretString) -> Result<User, AuthError>;
}

/// The anonymous guest user. Always succeeds.
#[must_use]
pub fn enter_as_guest() -> User {
    User::guest()
}

/// A seeded demo account.
#[derive(Clone)]
pub struct DemoAccount {
    pub login: Login,
    pub password: SecretString,
    pub role: Role,
    pub name: String,
}

impl std::fmt::Debug for DemoAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoAccount")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("name", &self.name)
            .finish()
    }
}

impl DemoAccount {
    fn new(login: &'static str, password: &'static str, role: Role, name: &str) -> Self {
        Self {
            login: Login::from_static(login),
            password: SecretString::from(password),
            role,
            name: name.to_owned(),
        }
    }

    fn user(&self) -> User {
        User::new(self.login.clone(), self.role, self.name.clone())
    }
}

/// The three seeded accounts.
#[must_use]
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount::new("client", "123", Role::Client, "Анна Иванова"),
        DemoAccount::new("manager", "123", Role::Manager, "Сергей Петров"),
        DemoAccount::new("admin", "123", Role::Admin, "Мария Сидорова"),
    ]
}

/// Plaintext account directory.
///
/// Only acceptable because this is a demo; swap in [`HashedDirectory`] for
/// anything that stores real credentials.
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    accounts: Vec<DemoAccount>,
}

impl Default for DemoDirectory {
    fn default() -> Self {
        Self::new(demo_accounts())
    }
}

impl DemoDirectory {
    /// Create a directory over the given accounts.
    #[must_use]
    pub const fn new(accounts: Vec<DemoAccount>) -> Self {
        Self { accounts }
    }
}

impl Authenticator for DemoDirectory {
    fn authenticate(&self, login: &str, password: &SecretString) -> Result<User, AuthError> {
        self.accounts
            .iter()
            .find(|account| {
                account.login.as_str() == login
                    && account.password.expose_secret() == password.expose_secret()
            })
            .map(DemoAccount::user)
            .ok_or(AuthError::NotFound)
    }
}

struct HashedAccount {
    user: User,
    password_hash: String,
}

/// Account directory holding Argon2id password hashes.
pub struct HashedDirectory {
    accounts: Vec<HashedAccount>,
}

impl std::fmt::Debug for HashedDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedDirectory")
            .field("accounts", &self.accounts.len())
            .finish()
    }
}

impl HashedDirectory {
    /// Hash the passwords of the given accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if any password cannot be hashed.
    pub fn from_accounts(accounts: &[DemoAccount]) -> Result<Self, AuthError> {
        let accounts = accounts
            .iter()
            .map(|account| {
                Ok(HashedAccount {
                    user: account.user(),
                    password_hash: hash_password(account.password.expose_secret())?,
                })
            })
            .collect::<Result<Vec<_>, AuthError>>()?;

        Ok(Self { accounts })
    }
}

impl Authenticator for HashedDirectory {
    fn authenticate(&self, login: &str, password: &SecretString) -> Result<User, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.user.login.as_str() == login)
            .ok_or(AuthError::NotFound)?;

        verify_password(password.expose_secret(), &account.password_hash)?;

        Ok(account.user.clone())
    }
}

/// Which directory implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthBackend {
    /// Plaintext comparison against [`demo_accounts`].
    #[default]
    Demo,
    /// Argon2id hashes of [`demo_accounts`].
    Argon2,
}

impl std::str::FromStr for AuthBackend {
    type Err = AuthBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" | "plaintext" => Ok(Self::Demo),
            "argon2" | "hashed" => Ok(Self::Argon2),
            _ => Err(AuthBackendError(s.to_owned())),
        }
    }
}

impl AuthBackend {
    /// Build the authenticator for this backend.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if the hashed directory cannot be built.
    pub fn build(self) -> Result<Arc<dyn Authenticator>, AuthError> {
        match self {
            Self::Demo => Ok(Arc::new(DemoDirectory::default())),
            Self::Argon2 => Ok(Arc::new(HashedDirectory::from_accounts(&demo_accounts())?)),
        }
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        tracing::warn!(error = %e, "Stored password hash is malformed");
        AuthError::NotFound
    })?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::NotFound)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s)
    }

    #[test]
    fn test_client_login_succeeds() {
        let directory = DemoDirectory::default();
        let user = directory.authenticate("client", &secret("123")).unwrap();
        assert_eq!(user.role, Role::Client);
        assert_eq!(user.name, "Анна Иванова");
        assert_eq!(user.login.as_str(), "client");
    }

    #[test]
    fn test_wrong_password_is_not_found() {
        let directory = DemoDirectory::default();
        assert_eq!(
            directory.authenticate("client", &secret("wrong")),
            Err(AuthError::NotFound)
        );
    }

    #[test]
    fn test_exactly_three_seeded_accounts_succeed() {
        let directory = DemoDirectory::default();
        let expected = [
            ("client", Role::Client),
            ("manager", Role::Manager),
            ("admin", Role::Admin),
        ];
        for (login, role) in expected {
            assert_eq!(directory.authenticate(login, &secret("123")).unwrap().role, role);
        }
        for login in ["guest", "Client", "", "client "] {
            assert_eq!(
                directory.authenticate(login, &secret("123")),
                Err(AuthError::NotFound),
                "{login:?}"
            );
        }
    }

    #[test]
    fn test_guest_entry() {
        let guest = enter_as_guest();
        assert_eq!(guest.role, Role::Guest);
        assert_eq!(guest.name, "Гость");
    }

    #[test]
    fn test_hashed_directory_matches_demo_directory() {
        let hashed = HashedDirectory::from_accounts(&demo_accounts()).unwrap();
        let user = hashed.authenticate("manager", &secret("123")).unwrap();
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.name, "Сергей Петров");
        assert_eq!(
            hashed.authenticate("manager", &secret("1234")),
            Err(AuthError::NotFound)
        );
        assert_eq!(
            hashed.authenticate("nobody", &secret("123")),
            Err(AuthError::NotFound)
        );
    }

    #[test]
    fn test_hashed_directory_does_not_keep_plaintext() {
        let hashed = HashedDirectory::from_accounts(&demo_accounts()).unwrap();
        for account in &hashed.accounts {
            assert!(account.password_hash.starts_with("$argon2"));
        }
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("demo".parse(), Ok(AuthBackend::Demo));
        assert_eq!("ARGON2".parse(), Ok(AuthBackend::Argon2));
        assert!("ldap".parse::<AuthBackend>().is_err());
    }

    #[test]
    fn test_backend_build() {
        let authenticator = AuthBackend::Demo.build().unwrap();
        assert!(authenticator.authenticate("admin", &secret("123")).is_ok());
    }

    #[test]
    fn test_demo_account_debug_redacts_password() {
        let debug = format!("{:?}", demo_accounts());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("\"123\""));
    }
}
