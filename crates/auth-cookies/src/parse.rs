use std::collections::HashMap;

/// Extracts a single named cookie value from a raw `Cookie` request header.
///
/// `cookie_header` is the raw value of the incoming `Cookie` header.
/// `None` means the header was absent from the request, which is distinct
/// from a present-but-empty header.
///
/// Segments are split on `;`, then on the first `=`, with whitespace
/// trimmed around both the name and the value. A segment without `=`
/// parses to an empty value for that name. When a name repeats, the later
/// occurrence wins. This function never fails; a missing header or a
/// missing name yields `None`.
///
/// # Example
///
/// ```
/// use auth_cookies::extract_token;
///
/// let cookie_header = "accessToken=abc123; refreshToken=xyz789";
/// assert_eq!(
///     extract_token(Some(cookie_header), "accessToken").as_deref(),
///     Some("abc123"),
/// );
/// assert_eq!(extract_token(None, "accessToken"), None);
/// ```
#[must_use]
pub fn extract_token(cookie_header: Option<&str>, token_name: &str) -> Option<String> {
    let cookie_header = cookie_header?;

    // Collecting into a map makes later duplicates overwrite earlier ones.
    let cookies: HashMap<&str, &str> = cookie_header
        .split(';')
        .map(|segment| {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            (name.trim(), value.trim())
        })
        .collect();

    cookies.get(token_name).map(|value| (*value).to_owned())
}
