//! Authentication flow: a narrow identity-provider seam plus the login and
//! sign-up operations the session gate drives.
//!
//! The taxonomy is deliberately coarse: whatever goes wrong during a login
//! lookup, the caller only ever sees [`AuthError::LoginFailed`]. Sign-up
//! failures propagate untouched.

pub mod directory;

use thiserror::Error;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::session::Session;

pub use directory::AccountDirectory;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Single user-facing login outcome; deliberately hides whether the
    /// account was missing or the provider misbehaved.
    #[error("Login Failed")]
    LoginFailed,
    #[error("an account for `{0}` already exists")]
    DuplicateAccount(String),
    #[error("identity provider error: {0}")]
    Provider(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Seam to the external identity service. Only the two operations the app
/// consumes are modeled: lookup-by-email and account creation.
pub trait IdentityProvider {
    /// Resolves an email address to its opaque account id.
    fn lookup_account(&self, email: &str) -> Result<Uuid, AuthError>;

    /// Creates a new account and returns its id.
    fn create_account(&mut self, email: &str, password: &str) -> Result<Uuid, AuthError>;
}

/// Attempts to log `email` in. On success the session is authenticated with
/// the resolved account id; every failure collapses to
/// [`AuthError::LoginFailed`]. The password is not checked locally; identity
/// verification is the provider's concern.
pub fn login(
    provider: &dyn IdentityProvider,
    session: &mut Session,
    email: &str,
) -> Result<Uuid, AuthError> {
    let user = provider.lookup_account(email).map_err(|err| {
        tracing::warn!(%email, error = %err, "login lookup failed");
        AuthError::LoginFailed
    })?;
    session.authenticate(user);
    tracing::info!(%user, "login successful");
    Ok(user)
}

/// Creates an account. Does NOT authenticate the session; the user logs in
/// separately afterwards.
pub fn sign_up(
    provider: &mut dyn IdentityProvider,
    email: &str,
    password: &str,
) -> Result<Uuid, AuthError> {
    let user = provider.create_account(email, password)?;
    tracing::info!(%user, "account created");
    Ok(user)
}
