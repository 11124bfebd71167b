use secrecy::{ExposeSecret as _, SecretString};

/// An opaque access token.
///
/// No internal structure is assumed and no validation is performed.
///
/// # Note
///
/// Tokens must not contain the cookie delimiter characters `;` or `=`.
/// This crate performs no escaping; upholding the constraint is the
/// caller's responsibility.
#[derive(Clone, Debug)]
pub struct AccessToken(SecretString);

/// An opaque refresh token.
///
/// No internal structure is assumed and no validation is performed.
///
/// # Note
///
/// Tokens must not contain the cookie delimiter characters `;` or `=`.
/// This crate performs no escaping; upholding the constraint is the
/// caller's responsibility.
#[derive(Clone, Debug)]
pub struct RefreshToken(SecretString);

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(SecretString::from(token))
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(SecretString::from(token.to_owned()))
    }
}

impl AccessToken {
    /// Returns the raw token string.
    ///
    /// The token is held in a [`SecretString`] so that `Debug` output
    /// cannot leak it; reading it back out is an explicit operation.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for RefreshToken {
    fn from(token: String) -> Self {
        Self(SecretString::from(token))
    }
}

impl From<&str> for RefreshToken {
    fn from(token: &str) -> Self {
        Self(SecretString::from(token.to_owned()))
    }
}

impl RefreshToken {
    /// Returns the raw token string.
    ///
    /// The token is held in a [`SecretString`] so that `Debug` output
    /// cannot leak it; reading it back out is an explicit operation.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
