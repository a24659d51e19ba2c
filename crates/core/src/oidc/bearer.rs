use super::BearerError;

/// The one access token this provider ever issues or accepts.
pub const ACCESS_TOKEN: &str = "demotoken";

/// Authorization scheme accepted by userinfo, compared case-insensitively.
pub const BEARER_SCHEME: &str = "bearer";

/// Check an `Authorization` header value against the expected bearer token.
///
/// Checks run in a fixed order and stop at the first failure: header
/// presence, then scheme, then credential. The value is split on its first
/// space; a value without a space is a bare scheme with an empty credential.
pub fn check_bearer(header: Option<&str>, expected: &str) -> Result<(), BearerError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::MissingHeader),
    };

    let (scheme, credential) = header.split_once(' ').unwrap_or((header, ""));

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(BearerError::NotBearer);
    }

    if credential != expected {
        return Err(BearerError::InvalidToken);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bearer_accepts_the_access_token() {
        let header = format!("Bearer {ACCESS_TOKEN}");
        assert_eq!(check_bearer(Some(&header), ACCESS_TOKEN), Ok(()));
    }

    #[test]
    fn check_bearer_scheme_is_case_insensitive() {
        assert_eq!(check_bearer(Some("bearer demotoken"), ACCESS_TOKEN), Ok(()));
        assert_eq!(check_bearer(Some("BEARER demotoken"), ACCESS_TOKEN), Ok(()));
    }

    #[test]
    fn check_bearer_rejects_missing_header() {
        assert_eq!(
            check_bearer(None, ACCESS_TOKEN),
            Err(BearerError::MissingHeader)
        );
        assert_eq!(
            check_bearer(Some(""), ACCESS_TOKEN),
            Err(BearerError::MissingHeader)
        );
    }

    #[test]
    fn check_bearer_rejects_other_schemes() {
        assert_eq!(
            check_bearer(Some("Basic abc123"), ACCESS_TOKEN),
            Err(BearerError::NotBearer)
        );
    }

    #[test]
    fn check_bearer_stops_at_scheme_even_with_valid_credential() {
        assert_eq!(
            check_bearer(Some("Basic demotoken"), ACCESS_TOKEN),
            Err(BearerError::NotBearer)
        );
    }

    #[test]
    fn check_bearer_rejects_wrong_token() {
        assert_eq!(
            check_bearer(Some("Bearer wrongtoken"), ACCESS_TOKEN),
            Err(BearerError::InvalidToken)
        );
    }

    #[test]
    fn check_bearer_splits_on_first_space_only() {
        assert_eq!(
            check_bearer(Some("Bearer demotoken extra"), ACCESS_TOKEN),
            Err(BearerError::InvalidToken)
        );
    }

    #[test]
    fn check_bearer_bare_scheme_has_empty_credential() {
        assert_eq!(
            check_bearer(Some("Bearer"), ACCESS_TOKEN),
            Err(BearerError::InvalidToken)
        );
        assert_eq!(
            check_bearer(Some("demotoken"), ACCESS_TOKEN),
            Err(BearerError::NotBearer)
        );
    }

    #[test]
    fn bearer_error_messages_are_the_response_reasons() {
        assert_eq!(
            BearerError::MissingHeader.to_string(),
            "No Authorization header"
        );
        assert_eq!(BearerError::NotBearer.to_string(), "Not a bearer token");
        assert_eq!(BearerError::InvalidToken.to_string(), "Invalid token");
    }
}
