use crate::auth::AuthError;
use crate::configuration::AuthSettings;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "HS256";

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Payload of an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub email: String,
    #[serde(rename = "rol", alias = "role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub exp: i64,
}

impl Claims {
    pub fn new(username: String, email: String, role: String, id: Option<i32>) -> Self {
        Self {
            username,
            email,
            role,
            id,
            exp: 0,
        }
    }
}

/// Signs and verifies compact JWS tokens with a static shared secret.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
    ttl: chrono::Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>, ttl: chrono::Duration) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            ttl,
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(
            settings.jwt_secret.as_bytes(),
            chrono::Duration::seconds(settings.token_ttl_secs),
        )
    }

    /// Stamps the expiry and signs the claims.
    pub fn issue(&self, mut claims: Claims) -> Result<String, AuthError> {
        claims.exp = (chrono::Utc::now() + self.ttl).timestamp();
        self.encode(&claims)
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        };
        let header = serde_json::to_vec(&header)
            .map_err(|err| AuthError::Internal(format!("failed to serialize token header: {err}")))?;
        let payload = serde_json::to_vec(claims)
            .map_err(|err| AuthError::Internal(format!("failed to serialize claims: {err}")))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        );
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }

    /// Verifies structure, algorithm, signature and expiry, in that order.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid("expected header.payload.signature"));
        }

        let header: Header = decode_segment(parts[0])?;
        if header.alg != ALGORITHM {
            return Err(invalid(format!("unsupported algorithm {}", header.alg)));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(parts[2])
            .map_err(|err| invalid(format!("malformed signature: {err}")))?;
        let mut mac = self.mac()?;
        mac.update(parts[0].as_bytes());
        mac.update(b".");
        mac.update(parts[1].as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| invalid("signature mismatch"))?;

        let claims: Claims = decode_segment(parts[1])?;
        let now = chrono::Utc::now().timestamp();
        if claims.exp <= now {
            return Err(invalid(format!("expired (exp: {}, now: {})", claims.exp, now)));
        }

        Ok(claims)
    }

    fn mac(&self) -> Result<HmacSha256, AuthError> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| AuthError::Internal(format!("error generating hmac {err:?}")))
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|err| invalid(format!("malformed segment: {err}")))?;
    serde_json::from_slice(&bytes).map_err(|err| invalid(format!("malformed json: {err}")))
}

fn invalid(reason: impl Into<String>) -> AuthError {
    AuthError::InvalidToken(reason.into())
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, String> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Invalid Authorization header format".to_string());
    }
    if !parts[0].eq_ignore_ascii_case("bearer") {
        return Err("Expected Bearer scheme in Authorization header".to_string());
    }
    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret", chrono::Duration::minutes(30))
    }

    fn claims() -> Claims {
        Claims::new(
            "ana".to_string(),
            "ana@example.com".to_string(),
            "user".to_string(),
            Some(5),
        )
    }

    #[test]
    fn issued_token_decodes_to_same_identity() {
        let codec = codec();
        let token = codec.issue(claims()).expect("token is issued");

        let decoded = codec.decode(&token).expect("token is valid");
        assert_eq!(decoded.username, "ana");
        assert_eq!(decoded.email, "ana@example.com");
        assert_eq!(decoded.role, "user");
        assert_eq!(decoded.id, Some(5));
        assert!(decoded.exp > chrono::Utc::now().timestamp());
    }

    #[test]
    fn payload_uses_rol_key() {
        let token = codec().issue(claims()).unwrap();
        let payload = token.split('.').nth(1).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();

        assert_eq!(value["rol"], "user");
        assert_eq!(value["username"], "ana");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let foreign = TokenCodec::new("other-secret", chrono::Duration::minutes(30));
        let token = foreign.issue(claims()).unwrap();

        assert!(matches!(
            codec().decode(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_tampered_payload() {
        let codec = codec();
        let token = codec.issue(claims()).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let mut forged = claims();
        forged.role = "admin".to_string();
        forged.exp = chrono::Utc::now().timestamp() + 600;
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
        let forged_token = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(codec.decode(&forged_token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let codec = TokenCodec::new("test-secret", chrono::Duration::minutes(-5));
        let token = codec.issue(claims()).unwrap();

        let err = codec.decode(&token).unwrap_err();
        assert!(err.to_string().contains("expired"), "{err}");
    }

    #[test]
    fn rejects_unsigned_algorithm() {
        let header = URL_SAFE_NO_PAD.encode(json!({"alg": "none", "typ": "JWT"}).to_string());
        let payload = URL_SAFE_NO_PAD.encode(
            json!({"username": "ana", "email": "a@b.c", "rol": "admin", "exp": i64::MAX})
                .to_string(),
        );
        let token = format!("{header}.{payload}.");

        assert!(codec().decode(&token).is_err());
    }

    #[test]
    fn rejects_malformed_tokens() {
        let codec = codec();
        assert!(codec.decode("").is_err());
        assert!(codec.decode("abc").is_err());
        assert!(codec.decode("a.b").is_err());
        assert!(codec.decode("!!.??.**").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let token = extract_bearer_token("Bearer abc.def.ghi").expect("bearer token");
        assert_eq!(token, "abc.def.ghi");
        assert_eq!(extract_bearer_token("bearer xyz").unwrap(), "xyz");
        assert!(extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(extract_bearer_token("Bearer").is_err());
    }
}
