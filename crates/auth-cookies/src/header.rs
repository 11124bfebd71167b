use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::cookie::{ACCESS_TOKEN_COOKIE_NAME, REFRESH_TOKEN_COOKIE_NAME};
use crate::options::CookieOptions;
use crate::token::{AccessToken, RefreshToken};

/// Builds the response headers which set both authentication cookies.
///
/// The returned map carries `Content-Type: application/json` and two
/// `Set-Cookie` values in fixed order, access token first. Both cookies
/// share one attribute string, formatted once from `options`. The
/// consuming HTTP layer must emit one `Set-Cookie` header line per value.
///
/// [RFC 6265, Section 3](https://datatracker.ietf.org/doc/html/rfc6265#section-3)
///
/// > Origin servers SHOULD NOT fold multiple Set-Cookie header fields into
/// > a single header field.
///
/// # Example
///
/// ```
/// use auth_cookies::{token_headers, AccessToken, CookieOptions, DeploymentMode, RefreshToken};
/// use reqwest::header::SET_COOKIE;
///
/// let options = CookieOptions::for_mode(DeploymentMode::Development);
/// let headers = token_headers(
///     &AccessToken::from("abc123"),
///     &RefreshToken::from("xyz789"),
///     &options,
/// );
///
/// let set_cookie: Vec<_> = headers.get_all(SET_COOKIE).iter().collect();
/// assert_eq!(set_cookie.len(), 2);
/// ```
///
/// # Panics
///
/// Panics if a token contains bytes which are not valid in an HTTP header
/// value. Such tokens violate the caller contract on [`AccessToken`] and
/// [`RefreshToken`].
#[must_use]
pub fn token_headers(
    access_token: &AccessToken,
    refresh_token: &RefreshToken,
    options: &CookieOptions,
) -> HeaderMap {
    let attributes = options.to_string();
    let access_token_cookie = format!(
        "{ACCESS_TOKEN_COOKIE_NAME}={token}; {attributes}",
        token = access_token.expose(),
    );
    let refresh_token_cookie = format!(
        "{REFRESH_TOKEN_COOKIE_NAME}={token}; {attributes}",
        token = refresh_token.expose(),
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.append(
        header::SET_COOKIE,
        access_token_cookie
            .parse()
            .expect("`access_token` should not contain invalid ASCII"),
    );
    headers.append(
        header::SET_COOKIE,
        refresh_token_cookie
            .parse()
            .expect("`refresh_token` should not contain invalid ASCII"),
    );

    headers
}

/// Builds the minimal `name=value` cookie string for both tokens.
///
/// Unlike [`token_headers`], no cookie attributes are attached. This form
/// is meant for contexts outside HTTP response headers, such as logging or
/// cross-process token passing. An explicitly empty refresh token still
/// counts as present and is emitted.
///
/// # Example
///
/// ```
/// use auth_cookies::{auth_cookie_string, AccessToken, RefreshToken};
///
/// let cookie_str = auth_cookie_string(
///     &AccessToken::from("abc123"),
///     Some(&RefreshToken::from("xyz789")),
/// );
/// assert_eq!(cookie_str, "accessToken=abc123; refreshToken=xyz789");
/// ```
#[must_use]
pub fn auth_cookie_string(
    access_token: &AccessToken,
    refresh_token: Option<&RefreshToken>,
) -> String {
    let mut cookie_str = format!(
        "{ACCESS_TOKEN_COOKIE_NAME}={token}",
        token = access_token.expose(),
    );
    if let Some(refresh_token) = refresh_token {
        cookie_str.push_str(&format!(
            "; {REFRESH_TOKEN_COOKIE_NAME}={token}",
            token = refresh_token.expose(),
        ));
    }

    cookie_str
}

#[cfg(test)]
mod tests {
    use anyhow::{Context as _, Result};

    use super::*;
    use crate::options::DeploymentMode;

    fn mock_headers() -> HeaderMap {
        token_headers(
            &AccessToken::from("mock-access-token"),
            &RefreshToken::from("mock-refresh-token"),
            &CookieOptions::for_mode(DeploymentMode::Development),
        )
    }

    #[test]
    fn it_builds_the_header_structure() -> Result<()> {
        let headers = mock_headers();

        let content_type = headers
            .get(header::CONTENT_TYPE)
            .context("`Content-Type` header is missing")?;
        assert_eq!(content_type, "application/json");

        let set_cookie: Vec<_> = headers.get_all(header::SET_COOKIE).iter().collect();
        assert_eq!(set_cookie.len(), 2);
        Ok(())
    }

    #[test]
    fn it_orders_the_access_cookie_before_the_refresh_cookie() -> Result<()> {
        let headers = mock_headers();
        let set_cookie = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(HeaderValue::to_str)
            .collect::<Result<Vec<_>, _>>()
            .context("`Set-Cookie` value is not valid ASCII")?;

        assert!(set_cookie[0].starts_with("accessToken=mock-access-token"));
        assert!(set_cookie[1].starts_with("refreshToken=mock-refresh-token"));
        Ok(())
    }

    #[test]
    fn it_decorates_both_cookies_with_the_shared_attributes() -> Result<()> {
        let headers = mock_headers();
        for value in headers.get_all(header::SET_COOKIE) {
            let cookie = value
                .to_str()
                .context("`Set-Cookie` value is not valid ASCII")?;
            assert!(cookie.contains("httpOnly"));
            assert!(cookie.contains("path=/"));
            assert!(cookie.contains("maxAge=604800"));
        }
        Ok(())
    }

    #[test]
    fn it_builds_an_auth_cookie_string_with_the_access_token_only() -> Result<()> {
        let cookie_str = auth_cookie_string(&AccessToken::from("abc123"), None);
        assert_eq!(cookie_str, "accessToken=abc123");
        Ok(())
    }

    #[test]
    fn it_builds_an_auth_cookie_string_with_both_tokens() -> Result<()> {
        let cookie_str = auth_cookie_string(
            &AccessToken::from("abc123"),
            Some(&RefreshToken::from("xyz789")),
        );
        assert_eq!(cookie_str, "accessToken=abc123; refreshToken=xyz789");
        Ok(())
    }

    #[test]
    fn it_passes_special_characters_through_unescaped() -> Result<()> {
        let cookie_str = auth_cookie_string(
            &AccessToken::from("abc.123-456"),
            Some(&RefreshToken::from("xyz.789-000")),
        );
        assert_eq!(cookie_str, "accessToken=abc.123-456; refreshToken=xyz.789-000");
        Ok(())
    }

    #[test]
    fn it_emits_an_explicitly_empty_refresh_token() -> Result<()> {
        let cookie_str =
            auth_cookie_string(&AccessToken::from("abc123"), Some(&RefreshToken::from("")));
        assert_eq!(cookie_str, "accessToken=abc123; refreshToken=");
        Ok(())
    }
}
