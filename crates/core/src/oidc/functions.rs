use rand::Rng;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated authorization code.
pub const AUTHORIZATION_CODE_LEN: usize = 6;

/// Generate an authorization code.
///
/// Codes are never stored or checked, so the thread-local RNG is enough.
pub fn generate_authorization_code() -> String {
    let mut rng = rand::rng();
    (0..AUTHORIZATION_CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Build the redirect target for a completed authorization request.
///
/// `redirect_uri` is used as given. The code is always the first parameter
/// appended; `state` follows it, URL-encoded, when the client sent one.
pub fn authorization_redirect(redirect_uri: &str, code: &str, state: Option<&str>) -> String {
    let separator = if !redirect_uri.contains('?') {
        "?"
    } else if redirect_uri.ends_with(['?', '&']) {
        ""
    } else {
        "&"
    };

    let mut target = format!("{redirect_uri}{separator}code={code}");

    if let Some(state) = state {
        target.push_str("&state=");
        target.push_str(&urlencoding::encode(state));
    }

    target
}

/// Parse a comma-separated group list.
///
/// Entries are trimmed and empty entries dropped; order is preserved.
pub fn parse_groups(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
