//! Account check command.

use std::io::Write;

use secrecy::SecretString;
use thiserror::Error;

use shoe_shop_storefront::config::{ConfigError, StorefrontConfig};
use shoe_shop_storefront::services::auth::{AuthError, Authenticator};

/// Errors that can occur while checking an account.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Неверный логин или пароль")]
    InvalidCredentials,

    #[error("Account directory error: {0}")]
    Directory(AuthError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Authenticate against the directory selected by `SHOP_AUTH_BACKEND`.
///
/// # Errors
///
/// Returns `LoginError::InvalidCredentials` if no account matches.
pub fn check(out: &mut impl Write, login: &str, password: &SecretString) -> Result<(), LoginError> {
    let config = StorefrontConfig::from_env()?;
    let directory = config.auth_backend.build().map_err(LoginError::Directory)?;
    check_with(out, directory.as_ref(), login, password)
}

fn check_with(
    out: &mut impl Write,
    directory: &dyn Authenticator,
    login: &str,
    password: &SecretString,
) -> Result<(), LoginError> {
    let user = directory
        .authenticate(login, password)
        .map_err(|e| match e {
            AuthError::NotFound => LoginError::InvalidCredentials,
            other => LoginError::Directory(other),
        })?;

    tracing::info!(login = %user.login, role = %user.role, "Account verified");
    writeln!(out, "{} ({})", user.name, user.role.label())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shoe_shop_storefront::services::auth::DemoDirectory;

    use super::*;

    #[test]
    fn test_valid_account() {
        let mut out = Vec::new();
        check_with(
            &mut out,
            &DemoDirectory::default(),
            "client",
            &SecretString::from("123"),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Анна Иванова (Клиент)\n");
    }

    #[test]
    fn test_wrong_password() {
        let mut out = Vec::new();
        let result = check_with(
            &mut out,
            &DemoDirectory::default(),
            "client",
            &SecretString::from("wrong"),
        );
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_login_must_match_exactly() {
        let mut out = Vec::new();
        let result = check_with(
            &mut out,
            &DemoDirectory::default(),
            "  client ",
            &SecretString::from("123"),
        );
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        assert!(out.is_empty());
    }
}
