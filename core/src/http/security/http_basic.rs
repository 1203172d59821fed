//! HTTP Basic Authentication support.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.web.authentication.www.BasicAuthenticationFilter`

use actix_web::dev::ServiceRequest;
use actix_web::http;
use base64::prelude::*;

/// Username and password carried by an `Authorization: Basic` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Extracts credentials from the HTTP Basic Authentication header.
///
/// # Spring Security Equivalent
/// `BasicAuthenticationConverter`
///
/// Returns `None` when the header is missing, uses another scheme, or is not
/// valid base64/UTF-8 `username:password`.
pub fn extract_basic_auth(req: &ServiceRequest) -> Option<BasicCredentials> {
    let auth_header = req.headers().get(http::header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    parse_basic_header(auth_str)
}

/// Parses a raw `Basic <base64(username:password)>` header value.
///
/// The scheme is matched case-insensitively. The password may itself contain
/// `:`; only the first colon separates it from the username.
pub fn parse_basic_header(value: &str) -> Option<BasicCredentials> {
    let (scheme, credentials) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }

    let decoded = BASE64_STANDARD.decode(credentials.trim()).ok()?;
    let decoded_str = String::from_utf8(decoded).ok()?;

    let (username, password) = decoded_str.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// HTTP Basic Authentication configuration.
///
/// # Spring Security Equivalent
/// `HttpSecurity.httpBasic()`
///
/// Holds the realm advertised in the `WWW-Authenticate` challenge.
#[derive(Clone, Debug)]
pub struct HttpBasicConfig {
    realm: String,
}

impl HttpBasicConfig {
    /// Creates a new HTTP Basic configuration with default realm "Realm".
    pub fn new() -> Self {
        HttpBasicConfig {
            realm: "Realm".to_string(),
        }
    }

    /// Sets the realm name for the WWW-Authenticate header.
    ///
    /// # Example
    /// ```
    /// use basic_auth_db_core::http::security::HttpBasicConfig;
    ///
    /// let config = HttpBasicConfig::new().realm("MyApplication");
    /// assert_eq!(config.www_authenticate_header(), "Basic realm=\"MyApplication\"");
    /// ```
    pub fn realm(mut self, realm: &str) -> Self {
        self.realm = realm.to_string();
        self
    }

    /// Creates the WWW-Authenticate header value.
    pub fn www_authenticate_header(&self) -> String {
        format!("Basic realm=\"{}\"", self.realm)
    }
}

impl Default for HttpBasicConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn header(raw: &str) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(raw))
    }

    #[test]
    fn test_parse_valid_header() {
        let creds = parse_basic_header(&header("admin:123")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "123");
    }

    #[test]
    fn test_password_may_contain_colon() {
        let creds = parse_basic_header(&header("admin:a:b:c")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "a:b:c");
    }

    #[test]
    fn test_empty_password() {
        let creds = parse_basic_header(&header("admin:")).unwrap();
        assert_eq!(creds.password, "");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let value = format!("basic {}", BASE64_STANDARD.encode("admin:123"));
        assert!(parse_basic_header(&value).is_some());
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(parse_basic_header("Bearer abc.def").is_none());
        assert!(parse_basic_header("Basic").is_none());
        assert!(parse_basic_header("Basic !!!not-base64!!!").is_none());
        assert!(parse_basic_header(&header("no-colon")).is_none());
    }

    #[test]
    fn test_extract_from_request() {
        let req = TestRequest::default()
            .insert_header((http::header::AUTHORIZATION, header("admin:123")))
            .to_srv_request();
        let creds = extract_basic_auth(&req).unwrap();
        assert_eq!(creds.username, "admin");
    }

    #[test]
    fn test_extract_without_header() {
        let req = TestRequest::default().to_srv_request();
        assert!(extract_basic_auth(&req).is_none());
    }

    #[test]
    fn test_default_realm() {
        assert_eq!(
            HttpBasicConfig::default().www_authenticate_header(),
            "Basic realm=\"Realm\""
        );
    }
}
