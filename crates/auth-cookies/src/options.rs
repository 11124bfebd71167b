use std::borrow::Cow;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cookie::MAX_AGE_LIMIT;

/// The environment variable consulted by [`DeploymentMode::from_env`].
pub const DEPLOYMENT_MODE_ENV_VAR: &str = "APP_ENV";

/// The process-level deployment mode.
///
/// Read once at process startup. Everything downstream receives the derived
/// [`CookieOptions`] by reference instead of consulting the environment
/// again.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Production,
    Development,
}

/// The `SameSite` cookie attribute.
///
/// [RFC 6265bis, Section 5.6.7](https://datatracker.ietf.org/doc/html/draft-ietf-httpbis-rfc6265bis#section-5.6.7)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// The max-age rendered into the `maxAge` cookie attribute, in whole
/// seconds.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct CookieMaxAge(Duration);

/// The error type returned when a conversion from [`std::time::Duration`] to
/// [`CookieMaxAge`] fails.
#[derive(Debug)]
#[non_exhaustive]
pub struct TryFromDurationError {
    kind: TryFromDurationErrorKind,
}

/// The various types of errors that can cause converting from
/// [`std::time::Duration`] to [`CookieMaxAge`] to fail.
#[derive(Debug)]
#[non_exhaustive]
pub enum TryFromDurationErrorKind {
    /// Cookie max-age must not be more than [`MAX_AGE_LIMIT`].
    ///
    /// [`MAX_AGE_LIMIT`]: crate::cookie::MAX_AGE_LIMIT
    CookieLifetimeLimitExceeded,
}

/// The attribute set shared by every authentication cookie this crate
/// produces.
///
/// Derived once at process startup from the [`DeploymentMode`] and treated
/// as constant for the process lifetime.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CookieOptions {
    http_only: bool,
    secure: bool,
    same_site: SameSite,
    path: Cow<'static, str>,
    max_age: CookieMaxAge,
}

impl From<&str> for DeploymentMode {
    /// Performs the conversion.
    ///
    /// Exactly `"production"` selects [`DeploymentMode::Production`]; any
    /// other value selects [`DeploymentMode::Development`].
    fn from(mode: &str) -> Self {
        match mode {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

impl DeploymentMode {
    /// Reads the deployment mode from the [`DEPLOYMENT_MODE_ENV_VAR`]
    /// environment variable.
    ///
    /// An unset (or non-UTF-8) variable selects
    /// [`DeploymentMode::Development`].
    #[must_use]
    pub fn from_env() -> Self {
        env::var(DEPLOYMENT_MODE_ENV_VAR)
            .map(|mode| Self::from(mode.as_str()))
            .unwrap_or(Self::Development)
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lax => write!(f, "lax"),
            Self::None => write!(f, "none"),
        }
    }
}

impl TryFrom<Duration> for CookieMaxAge {
    type Error = TryFromDurationError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        if duration > MAX_AGE_LIMIT {
            return Err(Self::Error {
                kind: TryFromDurationErrorKind::CookieLifetimeLimitExceeded,
            })?;
        }

        Ok(Self(duration))
    }
}

impl From<CookieMaxAge> for Duration {
    fn from(max_age: CookieMaxAge) -> Self {
        max_age.0
    }
}

impl CookieMaxAge {
    /// Seven days, the default lifetime for authentication cookies.
    pub const DEFAULT: Self = Self(Duration::from_secs(7 * 24 * 60 * 60));
    pub const MAX: Self = Self(MAX_AGE_LIMIT);

    /// Returns the max-age in whole seconds, as rendered into the `maxAge`
    /// attribute.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0.as_secs()
    }
}

impl fmt::Display for TryFromDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TryFromDurationErrorKind::CookieLifetimeLimitExceeded => {
                const SECONDS_IN_DAYS: u64 = 60 * 60 * 24;
                const LIMIT_DAYS: u64 = MAX_AGE_LIMIT.as_secs() / SECONDS_IN_DAYS;
                write!(f, "max-age must not be more than {LIMIT_DAYS} days")
            },
        }
    }
}

impl Error for TryFromDurationError {}

impl TryFromDurationError {
    /// Returns the corresponding [`TryFromDurationErrorKind`] for this error.
    #[must_use]
    pub const fn kind(&self) -> &TryFromDurationErrorKind {
        &self.kind
    }
}

impl fmt::Display for CookieOptions {
    /// Renders the cookie attribute string.
    ///
    /// Attributes appear in declaration order (`httpOnly`, `secure`,
    /// `sameSite`, `path`, `maxAge`), joined with `"; "`. Boolean
    /// attributes render as bare names when true and are omitted entirely
    /// when false; `maxAge` renders as base-10 seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fragments: Vec<String> = Vec::with_capacity(5);
        if self.http_only {
            fragments.push("httpOnly".to_owned());
        }
        if self.secure {
            fragments.push("secure".to_owned());
        }
        fragments.push(format!("sameSite={same_site}", same_site = self.same_site));
        fragments.push(format!("path={path}", path = self.path));
        fragments.push(format!("maxAge={secs}", secs = self.max_age.as_secs()));
        write!(f, "{attributes}", attributes = fragments.join("; "))
    }
}

impl CookieOptions {
    /// Constructs the `CookieOptions` for the given deployment mode.
    ///
    /// Production selects the strict profile (`secure`, `sameSite=strict`);
    /// any other mode selects the lax profile (no `secure`, `sameSite=lax`).
    /// Both profiles are `httpOnly`, scoped to `path=/`, and live for
    /// [`CookieMaxAge::DEFAULT`].
    ///
    /// # Example
    ///
    /// ```
    /// use auth_cookies::{CookieOptions, DeploymentMode};
    ///
    /// let options = CookieOptions::for_mode(DeploymentMode::Production);
    /// assert_eq!(
    ///     options.to_string(),
    ///     "httpOnly; secure; sameSite=strict; path=/; maxAge=604800",
    /// );
    /// ```
    #[must_use]
    pub fn for_mode(mode: DeploymentMode) -> Self {
        Self {
            http_only: true,
            secure: mode == DeploymentMode::Production,
            same_site: match mode {
                DeploymentMode::Production => SameSite::Strict,
                DeploymentMode::Development => SameSite::Lax,
            },
            path: Cow::Borrowed("/"),
            max_age: CookieMaxAge::DEFAULT,
        }
    }

    /// Overrides the `path` attribute.
    ///
    /// This is `/` by default.
    #[must_use]
    pub fn path(mut self, path: impl Into<Cow<'static, str>>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the `maxAge` attribute.
    ///
    /// This is [`CookieMaxAge::DEFAULT`] by default.
    #[must_use]
    pub fn max_age(mut self, max_age: CookieMaxAge) -> Self {
        self.max_age = max_age;
        self
    }
}
