//! Token encode/decode with HMAC signing and strict expiry validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::error::{Result, TokenError};

/// Encodes and verifies session tokens.
///
/// Built once at startup from the configured secret, algorithm, and
/// TTL; immutable afterwards. Pure apart from reading the clock.
pub struct TokenCodec {
    header: Header,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from a symmetric secret, an algorithm identifier
    /// (`HS256`, `HS384`, or `HS512`), and a token TTL in minutes.
    ///
    /// An unsupported algorithm is a startup-configuration fault and is
    /// rejected here, before any token is issued.
    pub fn new(secret: &str, algorithm: &str, ttl_minutes: u64) -> Result<Self> {
        let alg = parse_algorithm(algorithm)?;

        let mut validation = Validation::new(alg);
        // A token is invalid strictly after its expiry instant; the
        // default 60s leeway would keep expired tokens alive.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            header: Header::new(alg),
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::minutes(ttl_minutes as i64),
        })
    }

    /// Mint a session token for an authenticated GitHub user, embedding
    /// the upstream access credential. Expiry is `now + TTL`.
    pub fn issue(&self, github_id: i64, username: &str, access_token: &str) -> Result<String> {
        let claims = SessionClaims {
            github_id,
            username: username.to_string(),
            github_access_token: Some(access_token.to_string()),
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        self.encode(&claims)
    }

    /// Sign a claims record into a compact token string.
    pub fn encode(&self, claims: &SessionClaims) -> Result<String> {
        jsonwebtoken::encode(&self.header, claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims.
    ///
    /// All-or-nothing: signature mismatch, malformed structure, and
    /// expiry all collapse into [`TokenError::InvalidToken`].
    pub fn decode(&self, token: &str) -> Result<SessionClaims> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidToken)
    }
}

fn parse_algorithm(identifier: &str) -> Result<Algorithm> {
    match identifier {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(TokenError::UnsupportedAlgorithm(other.to_string())),
    }
}
