use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};
use crate::config::JwtConfig;

/// Claims carried by an issued token.
///
/// The payload is whatever the caller posted to `/jwt`; `email` is pulled out
/// because it is the identity the authorization gate works with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error types for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to encode JWT token: {0}")]
    EncodingFailed(String),
    #[error("Failed to decode JWT token: {0}")]
    DecodingFailed(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token format")]
    InvalidToken,
    #[error("Payload already has a \"{0}\" property")]
    ReservedClaim(String),
    #[error("Claim \"{0}\" has the wrong type")]
    InvalidClaim(String),
}

pub trait JwtTokenUtils {
    fn issue_token(&self, payload: Map<String, Value>) -> Result<String, JwtError>;
    fn validate_token(&self, token: &str) -> Result<Claims, JwtError>;
    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError>;
}

#[derive(Clone)]
pub struct JwtTokenUtilsImpl {
    pub jwt_config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenUtilsImpl {
    pub fn new(jwt_config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(jwt_config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(jwt_config.jwt_secret.as_bytes());
        JwtTokenUtilsImpl {
            jwt_config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl JwtTokenUtils for JwtTokenUtilsImpl {
    /// Signs `payload` as-is, adding `exp` one TTL after `iat`. A caller-supplied
    /// `iat` is kept; a caller-supplied `exp` is refused.
    fn issue_token(&self, mut payload: Map<String, Value>) -> Result<String, JwtError> {
        if payload.contains_key("exp") {
            warn!("Refusing to issue token: payload sets \"exp\"");
            return Err(JwtError::ReservedClaim("exp".to_string()));
        }
        if payload.get("email").is_some_and(|email| !email.is_string()) {
            warn!("Refusing to issue token: \"email\" is not a string");
            return Err(JwtError::InvalidClaim("email".to_string()));
        }

        let iat = match payload.get("iat") {
            None => Utc::now().timestamp(),
            Some(value) => value.as_i64().ok_or_else(|| {
                warn!("Refusing to issue token: \"iat\" is not an integer timestamp");
                JwtError::InvalidClaim("iat".to_string())
            })?,
        };
        payload.insert("iat".to_string(), Value::from(iat));
        payload.insert("exp".to_string(), Value::from(iat + self.jwt_config.token_ttl_secs));

        let email = payload.get("email").and_then(Value::as_str).unwrap_or("<none>").to_string();
        let header = Header::new(Algorithm::HS256);
        match encode(&header, &payload, &self.encoding_key) {
            Ok(token) => {
                info!(email = %email, "Issued access token");
                Ok(token)
            }
            Err(err) => {
                error!("Failed to encode JWT token: {}", err);
                Err(JwtError::EncodingFailed(err.to_string()))
            }
        }
    }

    fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        debug!("Validating JWT token");

        match decode::<Claims>(token, &self.decoding_key, &Self::validation()) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    warn!("Token has expired");
                    Err(JwtError::TokenExpired)
                }
                _ => {
                    warn!("Failed to decode JWT token: {}", err);
                    Err(JwtError::DecodingFailed(err.to_string()))
                }
            },
        }
    }

    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError> {
        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or(JwtError::InvalidToken)?;

        if token.is_empty() {
            debug!("Empty token in authorization header");
            return Err(JwtError::InvalidToken);
        }
        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_from_header() {
        let utils = JwtTokenUtilsImpl::new(JwtConfig::default());
        assert_eq!(utils.extract_token_from_header("Bearer abc.def").unwrap(), "abc.def");
        assert!(utils.extract_token_from_header("Bearer ").is_err());
        assert!(utils.extract_token_from_header("Basic abc").is_err());
        assert!(utils.extract_token_from_header("abc.def").is_err());
    }

    #[test]
    fn test_exp_in_payload_is_rejected() {
        let utils = JwtTokenUtilsImpl::new(JwtConfig::default());
        let mut payload = Map::new();
        payload.insert("exp".to_string(), Value::from(1));
        assert!(matches!(utils.issue_token(payload), Err(JwtError::ReservedClaim(c)) if c == "exp"));
    }

    #[test]
    fn test_non_string_email_is_rejected() {
        let utils = JwtTokenUtilsImpl::new(JwtConfig::default());
        let mut payload = Map::new();
        payload.insert("email".to_string(), Value::from(5));
        assert!(matches!(utils.issue_token(payload), Err(JwtError::InvalidClaim(c)) if c == "email"));
    }
}
