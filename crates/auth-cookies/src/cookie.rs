/// The name of the cookie carrying the access token.
///
/// Attribute-style camel casing is part of the wire contract: browser clients
/// and the consuming HTTP layer look this name up verbatim.
pub const ACCESS_TOKEN_COOKIE_NAME: &str = "accessToken";

/// The name of the cookie carrying the refresh token.
pub const REFRESH_TOKEN_COOKIE_NAME: &str = "refreshToken";

/// [RFC 6265bis, Section 5.5](https://datatracker.ietf.org/doc/html/draft-ietf-httpbis-rfc6265bis#section-5.5)
pub const MAX_AGE_LIMIT: std::time::Duration = std::time::Duration::from_secs(34_560_000);
